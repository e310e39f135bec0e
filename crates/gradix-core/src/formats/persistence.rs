//! Packed bundle format.
//!
//! A single distributable file holding all four artifacts:
//!
//! ```text
//! [0..4]  magic bytes "GRDX"
//! [4]     format version (currently 1)
//! [5..]   postcard payload (classifier, scaler, feature order, labels)
//! ```
//!
//! Encoding is deterministic: identical bundles produce identical bytes.
//! Decoding re-runs full bundle validation, so a tampered payload that
//! still deserializes is rejected the same way a malformed JSON artifact
//! would be.

use crate::bundle::ModelBundle;
use crate::error::BundleError;

/// Magic bytes at the start of every packed bundle.
pub const PACKED_MAGIC: [u8; 4] = *b"GRDX";

/// Current packed format version.
pub const PACKED_VERSION: u8 = 1;

/// Encode a bundle into the packed single-file format.
pub fn encode_packed(bundle: &ModelBundle) -> Result<Vec<u8>, BundleError> {
    let payload = postcard::to_stdvec(bundle)?;

    let mut bytes = Vec::with_capacity(PACKED_MAGIC.len() + 1 + payload.len());
    bytes.extend_from_slice(&PACKED_MAGIC);
    bytes.push(PACKED_VERSION);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode a packed bundle, re-validating all four artifacts.
pub fn decode_packed(bytes: &[u8]) -> Result<ModelBundle, BundleError> {
    let Some((header, payload)) = bytes.split_at_checked(PACKED_MAGIC.len() + 1) else {
        return Err(BundleError::BadMagic);
    };

    if header[..PACKED_MAGIC.len()] != PACKED_MAGIC {
        return Err(BundleError::BadMagic);
    }

    let version = header[PACKED_MAGIC.len()];
    if version != PACKED_VERSION {
        return Err(BundleError::UnsupportedVersion(version));
    }

    let raw: ModelBundle = postcard::from_bytes(payload)?;

    // Deserialization bypasses construction, so validate again.
    let (classifier, scaler, order, labels) = raw.into_parts();
    ModelBundle::from_parts(classifier, scaler, order, labels)
}

// =============================================================================
// TESTS
// =============================================================================
