// crates/contract-wizard-core/src/naming/tests.rs
// ============================================================================
// Module: Naming Unit Tests
// Description: Unit coverage for identifier derivation and escaping.
// Purpose: Ensure user-facing names map to stable identifiers.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! Checks separator handling, capitalization and the empty-identifier error.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::EMPTY_IDENTIFIER_MESSAGE;
use super::NamingError;
use super::escape_string;
use super::to_identifier;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn separators_upper_case_the_following_character() {
    assert_eq!(to_identifier("my-game token_v2", true).unwrap(), "MyGameToken_v2");
    assert_eq!(to_identifier("  spaced   out  ", false).unwrap(), "spacedOut");
}

#[test]
fn leading_digits_and_symbols_are_dropped() {
    assert_eq!(to_identifier("42 $coin", true).unwrap(), "Coin");
    assert_eq!(to_identifier("_private", true).unwrap(), "_private");
}

#[test]
fn non_ascii_characters_act_as_separators() {
    assert_eq!(to_identifier("café token", true).unwrap(), "CafToken");
}

#[test]
fn empty_identifier_reports_name_field() {
    let err = to_identifier("---", true).unwrap_err();
    assert_eq!(err, NamingError::field("name", EMPTY_IDENTIFIER_MESSAGE));
    assert_eq!(err.to_string(), format!("invalid name: name: {EMPTY_IDENTIFIER_MESSAGE}"));
}

#[test]
fn escape_string_escapes_quotes_and_backslashes() {
    assert_eq!(escape_string(r#"a "b" \c"#), r#"a \"b\" \\c"#);
}
