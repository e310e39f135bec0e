//! # Student Record
//!
//! The immutable six-field description of one student, exactly one per
//! prediction request.
//!
//! Categorical fields carry fixed integer encodings matching the training
//! pipeline. The core does not re-validate numeric ranges: the input
//! boundary (CLI flags, interactive form) guarantees domain membership.

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELD DOMAINS
// =============================================================================

/// Inclusive age range accepted at enrollment.
pub const AGE_RANGE: (u8, u8) = (15, 100);

/// Inclusive total-credits range.
pub const CREDITS_RANGE: (u16, u16) = (0, 200);

/// Inclusive average-grade range.
pub const GRADE_RANGE: (f64, f64) = (0.0, 4.0);

// =============================================================================
// CATEGORICAL FIELDS
// =============================================================================

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Fixed integer encoding used by the training pipeline.
    #[must_use]
    pub fn encoded(self) -> f64 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }
}

/// Type of high school the student graduated from.
///
/// SMA, SMK and MA are the three Indonesian secondary school tracks;
/// everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighSchoolType {
    Sma,
    Smk,
    Ma,
    Other,
}

impl HighSchoolType {
    /// Fixed integer encoding used by the training pipeline.
    #[must_use]
    pub fn encoded(self) -> f64 {
        match self {
            Self::Sma => 0.0,
            Self::Smk => 1.0,
            Self::Ma => 2.0,
            Self::Other => 3.0,
        }
    }
}

// =============================================================================
// STUDENT RECORD
// =============================================================================

/// One student, as submitted through the form.
///
/// Immutable input to the decision procedure. Field ranges are enforced at
/// the input boundary:
/// - `age_at_enrollment` in `[15, 100]`
/// - `total_credits` in `[0, 200]`
/// - `average_grade` in `[0.00, 4.00]`, step 0.01
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: Gender,
    pub age_at_enrollment: u8,
    pub high_school_type: HighSchoolType,
    pub total_credits: u16,
    pub average_grade: f64,
    pub has_scholarship: bool,
}

impl StudentRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        gender: Gender,
        age_at_enrollment: u8,
        high_school_type: HighSchoolType,
        total_credits: u16,
        average_grade: f64,
        has_scholarship: bool,
    ) -> Self {
        Self {
            gender,
            age_at_enrollment,
            high_school_type,
            total_credits,
            average_grade,
            has_scholarship,
        }
    }

    /// Scholarship flag encoding: holder → 1, non-holder → 0.
    #[must_use]
    pub fn scholarship_encoded(&self) -> f64 {
        if self.has_scholarship { 1.0 } else { 0.0 }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_encoding() {
        assert_eq!(Gender::Male.encoded(), 0.0);
        assert_eq!(Gender::Female.encoded(), 1.0);
    }

    #[test]
    fn school_encoding() {
        assert_eq!(HighSchoolType::Sma.encoded(), 0.0);
        assert_eq!(HighSchoolType::Smk.encoded(), 1.0);
        assert_eq!(HighSchoolType::Ma.encoded(), 2.0);
        assert_eq!(HighSchoolType::Other.encoded(), 3.0);
    }

    #[test]
    fn scholarship_encoding() {
        let mut record = StudentRecord::new(
            Gender::Male,
            18,
            HighSchoolType::Sma,
            20,
            2.5,
            true,
        );
        assert_eq!(record.scholarship_encoded(), 1.0);

        record.has_scholarship = false;
        assert_eq!(record.scholarship_encoded(), 0.0);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = StudentRecord::new(
            Gender::Female,
            22,
            HighSchoolType::Ma,
            75,
            3.5,
            false,
        );

        let json = serde_json::to_string(&record).expect("serialize");
        let back: StudentRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
    }
}
