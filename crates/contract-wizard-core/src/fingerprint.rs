// crates/contract-wizard-core/src/fingerprint.rs
// ============================================================================
// Module: Option Fingerprints
// Description: Content identifiers for serializable option records.
// Purpose: Name fixtures after what they were built from.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! A fingerprint is the lowercase hex SHA-256 of a value's RFC 8785 (JCS)
//! canonical JSON. Key order and number spelling never change it, so two
//! records that compare equal as JSON share a fingerprint.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fingerprint failures.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The value has no canonical JSON form (e.g. a non-finite float).
    #[error("failed to canonicalize option record: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Fingerprinting
// ============================================================================

/// Returns the fingerprint of `value`.
///
/// # Errors
/// Returns [`FingerprintError::Canonicalization`] when `value` cannot be
/// written as canonical JSON.
///
/// # Examples
/// ```
/// use contract_wizard_core::fingerprint;
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let left = fingerprint(&json!({"a": 1, "b": true}))?;
/// let right = fingerprint(&json!({"b": true, "a": 1.0}))?;
/// assert_eq!(left, right);
/// assert_eq!(left.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String, FingerprintError> {
    let canonical = serde_jcs::to_vec(value)
        .map_err(|err| FingerprintError::Canonicalization(err.to_string()))?;
    let digest = Sha256::digest(&canonical);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(hex)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
