//! JSON artifact schemas.
//!
//! The training pipeline exports four files into the model directory:
//!
//! | File                 | Schema                                  |
//! |----------------------|-----------------------------------------|
//! | `classifier.json`    | [`ClassifierArtifact`]                  |
//! | `scaler.json`        | [`ScalerArtifact`]                      |
//! | `feature_order.json` | JSON array of column name strings       |
//! | `label_encoder.json` | JSON array of outcome label strings     |
//!
//! [`assemble_bundle`] converts the four parsed artifacts into a validated
//! [`ModelBundle`]. The app layer owns reading the files and the JSON
//! parsing itself.

use crate::bundle::{LabelDecoder, LinearClassifier, ModelBundle, StandardScaler};
use crate::error::BundleError;
use crate::features::FeatureName;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// `classifier.json`: class-major coefficient matrix plus intercepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub weights: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// `scaler.json`: per-feature standardization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Convert the four parsed artifacts into a validated bundle.
///
/// Column names and outcome labels are resolved here so every downstream
/// consumer works with typed values only.
pub fn assemble_bundle(
    classifier: ClassifierArtifact,
    scaler: ScalerArtifact,
    feature_order: &[String],
    labels: &[String],
) -> Result<ModelBundle, BundleError> {
    let order = feature_order
        .iter()
        .enumerate()
        .map(|(index, column)| {
            column
                .parse::<FeatureName>()
                .map_err(|_| BundleError::UnknownFeatureColumn {
                    index,
                    column: column.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let classes = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            label
                .parse::<Outcome>()
                .map_err(|_| BundleError::UnknownLabel {
                    index,
                    label: label.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ModelBundle::from_parts(
        LinearClassifier::new(classifier.weights, classifier.intercepts),
        StandardScaler::new(scaler.mean, scaler.scale),
        order,
        LabelDecoder::new(classes),
    )
}

// =============================================================================
// TESTS
// =============================================================================
