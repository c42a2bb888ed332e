// crates/contract-wizard-cli/src/lib.rs
// ============================================================================
// Module: Contract Wizard CLI Library
// Description: Shared helpers for the `contract-wizard` binary.
// Purpose: Keep the message catalog testable outside the entry point.
// Dependencies: crate::i18n
// ============================================================================

//! ## Overview
//! Hosts the CLI message catalog and the [`t!`] macro used by the binary.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;

#[cfg(test)]
#[path = "tests/i18n.rs"]
mod i18n_tests;
