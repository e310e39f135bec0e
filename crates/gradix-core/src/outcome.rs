//! # Prediction Outcome
//!
//! The three-way academic outcome label produced by the decision procedure.
//!
//! Presentation affordances (colors, emoji) are derived from this label in
//! the app layer; the core emits the label only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predicted academic outcome for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Graduated,
    Active,
    DroppedOut,
}

impl Outcome {
    /// Canonical human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Graduated => "Graduated",
            Self::Active => "Active",
            Self::DroppedOut => "Dropped Out",
        }
    }

    /// All outcomes in decoder order convention (stable, for tests and docs).
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Graduated, Self::Active, Self::DroppedOut]
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label string is not one of the three outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown outcome label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Outcome {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Graduated" => Ok(Self::Graduated),
            "Active" => Ok(Self::Active),
            "Dropped Out" => Ok(Self::DroppedOut),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
