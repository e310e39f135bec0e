//! # Feature Pipeline
//!
//! Encoding a [`StudentRecord`] into the numeric feature vector the model
//! bundle consumes.
//!
//! The pipeline has two fixed steps:
//! 1. Encode the record into a name-keyed map (`BTreeMap` for deterministic
//!    ordering).
//! 2. Reorder the map into a flat vector following the bundle's externally
//!    supplied feature order — a permutation loaded from the artifact, never
//!    derived from the record.

use crate::record::StudentRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 6;

// =============================================================================
// FEATURE NAMES
// =============================================================================

/// The six feature columns, named exactly as the training pipeline emits
/// them in `feature_order.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureName {
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "Age_at_enrollment")]
    AgeAtEnrollment,
    #[serde(rename = "High_School_Type")]
    HighSchoolType,
    #[serde(rename = "Total_Credits")]
    TotalCredits,
    #[serde(rename = "Average_Grade")]
    AverageGrade,
    #[serde(rename = "Scholarship")]
    Scholarship,
}

impl FeatureName {
    /// All features in declaration order.
    #[must_use]
    pub fn all() -> [Self; FEATURE_COUNT] {
        [
            Self::Gender,
            Self::AgeAtEnrollment,
            Self::HighSchoolType,
            Self::TotalCredits,
            Self::AverageGrade,
            Self::Scholarship,
        ]
    }

    /// Artifact column name.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::AgeAtEnrollment => "Age_at_enrollment",
            Self::HighSchoolType => "High_School_Type",
            Self::TotalCredits => "Total_Credits",
            Self::AverageGrade => "Average_Grade",
            Self::Scholarship => "Scholarship",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Error returned when a column name is not one of the six features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature column: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFeature {}

impl FromStr for FeatureName {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureName::all()
            .into_iter()
            .find(|f| f.column() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

// =============================================================================
// ENCODING AND ORDERING
// =============================================================================

/// Encode a record into the name-keyed feature map.
///
/// Categorical fields use the fixed encodings from [`crate::record`];
/// numeric fields pass through unchanged.
#[must_use]
pub fn encode(record: &StudentRecord) -> BTreeMap<FeatureName, f64> {
    let mut features = BTreeMap::new();
    features.insert(FeatureName::Gender, record.gender.encoded());
    features.insert(
        FeatureName::AgeAtEnrollment,
        f64::from(record.age_at_enrollment),
    );
    features.insert(
        FeatureName::HighSchoolType,
        record.high_school_type.encoded(),
    );
    features.insert(FeatureName::TotalCredits, f64::from(record.total_credits));
    features.insert(FeatureName::AverageGrade, record.average_grade);
    features.insert(FeatureName::Scholarship, record.scholarship_encoded());
    features
}

/// Flatten an encoded map into a vector following the bundle's feature order.
///
/// The order is validated at bundle construction to be a permutation of all
/// six features, so every lookup hits.
#[must_use]
pub fn ordered_vector(
    encoded: &BTreeMap<FeatureName, f64>,
    order: &[FeatureName],
) -> Vec<f64> {
    order
        .iter()
        .filter_map(|name| encoded.get(name).copied())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Gender, HighSchoolType};

    fn sample_record() -> StudentRecord {
        StudentRecord::new(Gender::Female, 19, HighSchoolType::Smk, 80, 3.25, true)
    }

    #[test]
    fn encode_covers_all_features() {
        let encoded = encode(&sample_record());
        assert_eq!(encoded.len(), FEATURE_COUNT);
        for name in FeatureName::all() {
            assert!(encoded.contains_key(&name), "missing {name}");
        }
    }

    #[test]
    fn encode_values() {
        let encoded = encode(&sample_record());
        assert_eq!(encoded[&FeatureName::Gender], 1.0);
        assert_eq!(encoded[&FeatureName::AgeAtEnrollment], 19.0);
        assert_eq!(encoded[&FeatureName::HighSchoolType], 1.0);
        assert_eq!(encoded[&FeatureName::TotalCredits], 80.0);
        assert_eq!(encoded[&FeatureName::AverageGrade], 3.25);
        assert_eq!(encoded[&FeatureName::Scholarship], 1.0);
    }

    #[test]
    fn ordered_vector_follows_permutation() {
        let encoded = encode(&sample_record());
        let order = [
            FeatureName::TotalCredits,
            FeatureName::Gender,
            FeatureName::Scholarship,
            FeatureName::AverageGrade,
            FeatureName::HighSchoolType,
            FeatureName::AgeAtEnrollment,
        ];

        let vector = ordered_vector(&encoded, &order);
        assert_eq!(vector, vec![80.0, 1.0, 1.0, 3.25, 1.0, 19.0]);
    }

    #[test]
    fn column_name_roundtrip() {
        for name in FeatureName::all() {
            let parsed: FeatureName = name.column().parse().expect("column parses");
            assert_eq!(parsed, name);
        }
        assert!("GPA".parse::<FeatureName>().is_err());
    }

    #[test]
    fn serde_uses_column_names() {
        let json = serde_json::to_string(&FeatureName::AgeAtEnrollment).expect("serialize");
        assert_eq!(json, "\"Age_at_enrollment\"");
    }
}
