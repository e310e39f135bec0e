//! # Gradix Core
//!
//! Deterministic decision procedure for predicting student academic
//! outcomes (Graduated, Active, Dropped Out).
//!
//! The core is pure: no file I/O, no logging, no async. It exposes:
//!
//! - [`record`] — the six-field [`StudentRecord`] input and its fixed
//!   categorical encodings
//! - [`outcome`] — the three-way [`Outcome`] label
//! - [`features`] — encoding and ordering of the model feature vector
//! - [`bundle`] — the validated [`ModelBundle`] (classifier, scaler,
//!   feature order, label decoder)
//! - [`decision`] — [`predict`]: rule overrides first, model fallback last
//! - [`formats`] — JSON artifact schemas and the packed bundle codec
//!
//! The invariant the whole crate is built around: once a bundle has been
//! validated, prediction is total and deterministic. Every failure mode is
//! a [`BundleError`] surfaced at load time.

pub mod bundle;
pub mod decision;
pub mod error;
pub mod features;
pub mod formats;
pub mod outcome;
pub mod record;

pub use bundle::{LabelDecoder, LinearClassifier, ModelBundle, StandardScaler};
pub use decision::{infer, predict, rule_outcome};
pub use error::BundleError;
pub use features::{FeatureName, FEATURE_COUNT};
pub use outcome::Outcome;
pub use record::{Gender, HighSchoolType, StudentRecord};
