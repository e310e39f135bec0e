//! # Bundle Errors
//!
//! The single failure class of the core: a model artifact bundle that
//! cannot be assembled into a usable [`crate::bundle::ModelBundle`].
//!
//! Every variant is detected at construction time. Once a bundle exists the
//! decision procedure is total and cannot fail.

use crate::features::FeatureName;
use thiserror::Error;

/// Validation failure while assembling a model bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The feature order artifact does not list this feature.
    #[error("feature order is missing column {0}")]
    MissingFeature(FeatureName),

    /// The feature order artifact lists a feature twice.
    #[error("feature order lists column {0} more than once")]
    DuplicateFeature(FeatureName),

    /// The feature order artifact has the wrong number of columns.
    #[error("feature order has {actual} columns, expected {expected}")]
    FeatureCount { expected: usize, actual: usize },

    /// Scaler dimensions do not match the feature count.
    #[error("scaler covers {actual} features, expected {expected}")]
    ScalerDimension { expected: usize, actual: usize },

    /// A scaler entry is zero or not finite, which would poison every
    /// scaled vector.
    #[error("scaler entry {index} is unusable (mean={mean}, scale={scale})")]
    ScalerEntry { index: usize, mean: f64, scale: f64 },

    /// Classifier weight row does not match the feature count.
    #[error("classifier class {class} has {actual} weights, expected {expected}")]
    WeightDimension {
        class: usize,
        expected: usize,
        actual: usize,
    },

    /// Classifier class count does not match intercepts or labels.
    #[error("classifier has {classes} classes but {other} {what}")]
    ClassDimension {
        classes: usize,
        other: usize,
        what: &'static str,
    },

    /// A classifier coefficient is not finite.
    #[error("classifier class {class} weight {index} is not finite")]
    NonFiniteWeight { class: usize, index: usize },

    /// The feature order artifact names a column that is not a feature.
    #[error("feature order entry {index} is not a known column: {column:?}")]
    UnknownFeatureColumn { index: usize, column: String },

    /// The label decoder contains a string that is not an outcome label.
    #[error("label decoder entry {index} is not a known outcome: {label:?}")]
    UnknownLabel { index: usize, label: String },

    /// The label decoder is empty.
    #[error("label decoder has no classes")]
    NoLabels,

    /// A packed bundle file does not start with the expected magic bytes.
    #[error("packed bundle has wrong magic bytes")]
    BadMagic,

    /// A packed bundle file carries an unsupported format version.
    #[error("packed bundle format version {0} is not supported")]
    UnsupportedVersion(u8),

    /// The packed payload failed to deserialize.
    #[error("packed bundle payload is corrupt: {0}")]
    CorruptPayload(#[from] postcard::Error),
}
