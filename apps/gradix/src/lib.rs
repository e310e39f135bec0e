//! # Gradix Library
//!
//! This library exposes the Gradix modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export gradix_core for convenience
pub use gradix_core;
