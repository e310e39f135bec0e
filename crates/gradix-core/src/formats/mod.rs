//! # Formats Module
//!
//! Serialization and format handling for model bundles.
//!
//! This module contains:
//! - JSON artifact schemas for the four training outputs
//!   (`classifier.json`, `scaler.json`, `feature_order.json`,
//!   `label_encoder.json`)
//! - Packed single-file bundle format (postcard + header)
//!
//! Note: File I/O operations remain in the app layer (apps/gradix).
//! This module only handles format conversion (pure transformations).

mod artifacts;
mod persistence;

pub use artifacts::*;
pub use persistence::*;
