// crates/contract-wizard-core/src/naming.rs
// ============================================================================
// Module: Contract Naming
// Description: Identifier derivation and string-literal escaping.
// Purpose: Turn user-facing contract names into valid Rust identifiers.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Contract names arrive as free-form text ("My Token!"). The printer needs
//! an identifier (`MyToken`) and an escaped string literal. Derivation fails
//! with a [`NamingError`] carrying a field-to-message map when nothing usable
//! remains; that error is recoverable by callers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

// ============================================================================
// CONSTANTS: Messages
// ============================================================================

/// Message reported when an identifier has no usable characters.
pub const EMPTY_IDENTIFIER_MESSAGE: &str = "Identifier is empty or does not have valid characters";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Validation failure for user-supplied names.
///
/// # Invariants
/// - `fields` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid name: {}", FieldList(.fields))]
pub struct NamingError {
    /// Offending field to human-readable message.
    pub fields: BTreeMap<String, String>,
}

impl NamingError {
    /// Builds an error for a single field.
    #[must_use]
    pub fn field(field: &str, message: &str) -> Self {
        Self {
            fields: BTreeMap::from([(field.to_string(), message.to_string())]),
        }
    }
}

/// Display adapter rendering `field: message` pairs.
struct FieldList<'a>(&'a BTreeMap<String, String>);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (field, message)) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Identifier Derivation
// ============================================================================

/// Derives a Rust identifier from free-form text.
///
/// Leading characters that cannot start an identifier are dropped. Every run
/// of characters outside `[A-Za-z0-9_]` is removed and the character that
/// follows it is upper-cased. With `capitalize` the first character is
/// upper-cased too.
///
/// # Errors
/// Returns [`NamingError`] keyed by `name` when no identifier character
/// remains.
///
/// # Examples
/// ```
/// use contract_wizard_core::to_identifier;
///
/// assert_eq!(to_identifier("my token", true).as_deref(), Ok("MyToken"));
/// assert_eq!(to_identifier("9lives-cat", false).as_deref(), Ok("livesCat"));
/// assert!(to_identifier("123 !", true).is_err());
/// ```
pub fn to_identifier(value: &str, capitalize: bool) -> Result<String, NamingError> {
    let trimmed = value.trim_start_matches(|ch: char| !is_identifier_start(ch));
    let mut out = String::with_capacity(trimmed.len());
    let mut upper_next = capitalize;
    for ch in trimmed.chars() {
        if is_identifier_char(ch) {
            if upper_next {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    if out.is_empty() {
        return Err(NamingError::field("name", EMPTY_IDENTIFIER_MESSAGE));
    }
    Ok(out)
}

/// Escapes text for use inside a double-quoted Rust string literal.
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Returns true for characters allowed at the start of an identifier.
const fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Returns true for characters allowed inside an identifier.
const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
