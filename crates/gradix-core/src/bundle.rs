//! # Model Bundle
//!
//! The externally trained classifier plus its supporting scaler, feature
//! order, and label decoder.
//!
//! A bundle is constructed once per process from four artifacts and is
//! read-only for the remainder of execution. All cross-artifact validation
//! happens in [`ModelBundle::from_parts`]; afterwards every operation on the
//! bundle is total, which is what keeps the decision procedure infallible.

use crate::error::BundleError;
use crate::features::{FeatureName, FEATURE_COUNT};
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

// =============================================================================
// STANDARD SCALER
// =============================================================================

/// Per-feature standardization: `(x - mean) / scale`.
///
/// Dimensions and entry sanity (finite means, finite non-zero scales) are
/// checked at bundle construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from parallel mean/scale vectors.
    #[must_use]
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Number of features this scaler covers.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.mean.len().min(self.scale.len())
    }

    /// Standardize an ordered feature vector.
    #[must_use]
    pub fn transform(&self, vector: &[f64]) -> Vec<f64> {
        vector
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect()
    }
}

// =============================================================================
// LINEAR CLASSIFIER
// =============================================================================

/// Multiclass linear classifier over scaled features.
///
/// `weights` is class-major: one row of per-feature coefficients per class,
/// with a matching intercept. Classification scores every class with
/// `w · x + b` and takes the argmax; ties resolve to the lowest class index
/// so the result is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Create a classifier from class-major weights and intercepts.
    #[must_use]
    pub fn new(weights: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        Self {
            weights,
            intercepts,
        }
    }

    /// Number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.weights.len()
    }

    /// Raw decision scores for a scaled vector, one per class.
    #[must_use]
    pub fn decision_scores(&self, scaled: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(self.intercepts.iter())
            .map(|(row, intercept)| {
                row.iter()
                    .zip(scaled.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }

    /// Discrete class index for a scaled vector (argmax of the scores).
    #[must_use]
    pub fn predict_class(&self, scaled: &[f64]) -> usize {
        let mut best_index = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        for (index, score) in self.decision_scores(scaled).into_iter().enumerate() {
            // Strict comparison keeps ties on the lowest index.
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        best_index
    }
}

// =============================================================================
// LABEL DECODER
// =============================================================================

/// Ordered class labels mapping classifier output indices to outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDecoder {
    classes: Vec<Outcome>,
}

impl LabelDecoder {
    /// Create a decoder from an ordered outcome list.
    #[must_use]
    pub fn new(classes: Vec<Outcome>) -> Self {
        Self { classes }
    }

    /// Number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Classes in decoder order.
    #[must_use]
    pub fn classes(&self) -> &[Outcome] {
        &self.classes
    }

    /// Decode a class index.
    ///
    /// Bundle validation guarantees the classifier can only produce indices
    /// inside the decoder; out-of-range indices clamp to the last class
    /// rather than panicking.
    #[must_use]
    pub fn decode(&self, index: usize) -> Outcome {
        self.classes
            .get(index)
            .or_else(|| self.classes.last())
            .copied()
            .unwrap_or(Outcome::Active)
    }
}

// =============================================================================
// MODEL BUNDLE
// =============================================================================

/// The validated four-artifact bundle: classifier, scaler, feature order,
/// label decoder.
///
/// Loaded once at process start and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    classifier: LinearClassifier,
    scaler: StandardScaler,
    feature_order: Vec<FeatureName>,
    labels: LabelDecoder,
}

impl ModelBundle {
    /// Assemble and cross-validate the four artifacts.
    ///
    /// This is the only place load errors can surface; every accessor and
    /// the decision procedure itself are total once this returns `Ok`.
    pub fn from_parts(
        classifier: LinearClassifier,
        scaler: StandardScaler,
        feature_order: Vec<FeatureName>,
        labels: LabelDecoder,
    ) -> Result<Self, BundleError> {
        validate_feature_order(&feature_order)?;
        validate_scaler(&scaler)?;
        validate_classifier(&classifier, labels.class_count())?;

        if labels.class_count() == 0 {
            return Err(BundleError::NoLabels);
        }

        Ok(Self {
            classifier,
            scaler,
            feature_order,
            labels,
        })
    }

    /// The classifier.
    #[must_use]
    pub fn classifier(&self) -> &LinearClassifier {
        &self.classifier
    }

    /// The feature scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The externally supplied feature permutation.
    #[must_use]
    pub fn feature_order(&self) -> &[FeatureName] {
        &self.feature_order
    }

    /// The label decoder.
    #[must_use]
    pub fn labels(&self) -> &LabelDecoder {
        &self.labels
    }

    /// Decompose into the four artifacts (used by the packed codec to
    /// re-validate after deserialization).
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        LinearClassifier,
        StandardScaler,
        Vec<FeatureName>,
        LabelDecoder,
    ) {
        (self.classifier, self.scaler, self.feature_order, self.labels)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_feature_order(order: &[FeatureName]) -> Result<(), BundleError> {
    if order.len() != FEATURE_COUNT {
        return Err(BundleError::FeatureCount {
            expected: FEATURE_COUNT,
            actual: order.len(),
        });
    }

    for name in FeatureName::all() {
        let occurrences = order.iter().filter(|&&n| n == name).count();
        match occurrences {
            0 => return Err(BundleError::MissingFeature(name)),
            1 => {}
            _ => return Err(BundleError::DuplicateFeature(name)),
        }
    }

    Ok(())
}

fn validate_scaler(scaler: &StandardScaler) -> Result<(), BundleError> {
    if scaler.mean.len() != FEATURE_COUNT || scaler.scale.len() != FEATURE_COUNT {
        return Err(BundleError::ScalerDimension {
            expected: FEATURE_COUNT,
            actual: scaler.dimension(),
        });
    }

    for (index, (mean, scale)) in scaler.mean.iter().zip(scaler.scale.iter()).enumerate() {
        if !mean.is_finite() || !scale.is_finite() || *scale == 0.0 {
            return Err(BundleError::ScalerEntry {
                index,
                mean: *mean,
                scale: *scale,
            });
        }
    }

    Ok(())
}

fn validate_classifier(
    classifier: &LinearClassifier,
    label_count: usize,
) -> Result<(), BundleError> {
    let classes = classifier.class_count();

    if classifier.intercepts.len() != classes {
        return Err(BundleError::ClassDimension {
            classes,
            other: classifier.intercepts.len(),
            what: "intercepts",
        });
    }

    if label_count != classes {
        return Err(BundleError::ClassDimension {
            classes,
            other: label_count,
            what: "labels",
        });
    }

    for (class, row) in classifier.weights.iter().enumerate() {
        if row.len() != FEATURE_COUNT {
            return Err(BundleError::WeightDimension {
                class,
                expected: FEATURE_COUNT,
                actual: row.len(),
            });
        }

        for (index, weight) in row.iter().enumerate() {
            if !weight.is_finite() {
                return Err(BundleError::NonFiniteWeight { class, index });
            }
        }
    }

    for (class, intercept) in classifier.intercepts.iter().enumerate() {
        if !intercept.is_finite() {
            return Err(BundleError::NonFiniteWeight {
                class,
                index: FEATURE_COUNT,
            });
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
