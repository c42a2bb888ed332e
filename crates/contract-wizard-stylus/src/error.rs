// crates/contract-wizard-stylus/src/error.rs
// ============================================================================
// Module: Wizard Errors
// Description: Recoverable option errors and the crate-level error type.
// Purpose: Separate user-correctable input problems from fatal failures.
// Dependencies: contract-wizard-core, thiserror
// ============================================================================

//! ## Overview
//! [`OptionsError`] reports invalid option values as a field-to-message map.
//! It is the only error fixture generation skips over. Everything else is a
//! [`WizardError`] and aborts the current operation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use contract_wizard_core::DependencyError;
use contract_wizard_core::FingerprintError;
use contract_wizard_core::NamingError;
use thiserror::Error;

// ============================================================================
// SECTION: Options Error
// ============================================================================

/// Invalid option values keyed by option field.
///
/// # Invariants
/// - `fields` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid options: {}", describe_fields(.fields))]
pub struct OptionsError {
    /// Offending field to human-readable message.
    pub fields: BTreeMap<String, String>,
}

impl OptionsError {
    /// Builds an error for a single field.
    #[must_use]
    pub fn field(field: &str, message: &str) -> Self {
        Self {
            fields: BTreeMap::from([(field.to_string(), message.to_string())]),
        }
    }
}

impl From<NamingError> for OptionsError {
    fn from(err: NamingError) -> Self {
        Self {
            fields: err.fields,
        }
    }
}

/// Renders `field: message` pairs separated by `; `.
fn describe_fields(fields: &BTreeMap<String, String>) -> String {
    fields.iter().map(|(field, message)| format!("{field}: {message}")).collect::<Vec<_>>().join("; ")
}

// ============================================================================
// SECTION: Wizard Error
// ============================================================================

/// Fatal failures raised by the wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// Options were rejected where they cannot be skipped.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// A library table is inconsistent.
    #[error(transparent)]
    Dependency(#[from] DependencyError),
    /// Fixture identifiers could not be derived.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(String),
    /// JSON input or output failure.
    #[error("json error: {0}")]
    Json(String),
    /// Input rejected before parsing (size or shape limits).
    #[error("input rejected: {0}")]
    Input(String),
}
