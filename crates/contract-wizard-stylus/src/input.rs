// crates/contract-wizard-stylus/src/input.rs
// ============================================================================
// Module: Bounded Input Loading
// Description: Size-limited readers for option records and library tables.
// Purpose: Load untrusted JSON inputs without unbounded allocation.
// Dependencies: contract-wizard-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Inputs are read through a limited reader that stops one byte past the
//! limit, so oversized files fail closed even when their metadata lies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Read;
use std::path::Path;

use contract_wizard_core::LibraryTable;
use serde::de::DeserializeOwned;

use crate::error::WizardError;
use crate::generic::GenericOptions;

// ============================================================================
// CONSTANTS: Limits
// ============================================================================

/// Maximum size of an option record file.
pub const MAX_OPTIONS_BYTES: u64 = 64 * 1024;

/// Maximum size of a library table file.
pub const MAX_LIBRARY_BYTES: u64 = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Loaders
// ============================================================================

/// Loads a kind-tagged option record.
///
/// # Errors
/// Returns [`WizardError`] when the file cannot be read, exceeds
/// [`MAX_OPTIONS_BYTES`], or is not a valid record.
pub fn load_options(path: &Path) -> Result<GenericOptions, WizardError> {
    load_json(path, MAX_OPTIONS_BYTES, "options")
}

/// Loads a library table.
///
/// # Errors
/// Returns [`WizardError`] when the file cannot be read, exceeds
/// [`MAX_LIBRARY_BYTES`], or is not a valid table.
pub fn load_library(path: &Path) -> Result<LibraryTable, WizardError> {
    load_json(path, MAX_LIBRARY_BYTES, "library")
}

/// Reads and parses a JSON file of at most `limit` bytes.
fn load_json<T: DeserializeOwned>(path: &Path, limit: u64, label: &str) -> Result<T, WizardError> {
    let bytes = read_bounded(path, limit, label)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| WizardError::Json(format!("{label} {}: {err}", path.display())))
}

/// Reads at most `limit` bytes, failing when the file is larger.
fn read_bounded(path: &Path, limit: u64, label: &str) -> Result<Vec<u8>, WizardError> {
    let file = fs::File::open(path)
        .map_err(|err| WizardError::Io(format!("{label} {}: {err}", path.display())))?;
    let metadata = file.metadata().map_err(|err| WizardError::Io(err.to_string()))?;
    if metadata.len() > limit {
        return Err(WizardError::Input(format!("{label} input exceeds {limit} bytes")));
    }
    let mut bytes = Vec::new();
    let mut limited = file.take(limit + 1);
    limited.read_to_end(&mut bytes).map_err(|err| WizardError::Io(err.to_string()))?;
    let size = u64::try_from(bytes.len()).map_err(|_| {
        WizardError::Input(format!("{label} input size exceeds addressable memory"))
    })?;
    if size > limit {
        return Err(WizardError::Input(format!("{label} input exceeds {limit} bytes")));
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
