// crates/contract-wizard-stylus/src/common.rs
// ============================================================================
// Module: Common Options
// Description: Options and helpers shared by every token kind.
// Purpose: Keep access, info and recurring imports consistent across kinds.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! Every kind accepts an [`Access`] mode and an [`Info`] block. The helpers
//! here register the imports that almost every feature needs and build the
//! receiver arguments used by trait functions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Argument;
use contract_wizard_core::Contract;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::ReturnType;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// CONSTANTS: Defaults
// ============================================================================

/// Contract name used when an option record omits one.
pub const DEFAULT_NAME: &str = "MyToken";

/// Guard line inserted before state-changing calls of pausable contracts.
pub const WHEN_NOT_PAUSED: &str = "self.pausable.when_not_paused()?;";

/// Error type of every fallible public function.
pub const ERROR_TYPE: &str = "Vec<u8>";

// ============================================================================
// SECTION: Options
// ============================================================================

/// Access-control mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// No access control unless a feature requires it.
    #[default]
    None,
    /// Single owner.
    Ownable,
    /// Role-based access control.
    Roles,
}

/// Metadata printed in the contract header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Info {
    /// Security contact printed as `@custom:security-contact`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_contact: Option<String>,
    /// SPDX license identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Applies the info block to the contract.
///
/// Empty strings are treated as unset.
pub fn set_info(contract: &mut Contract, info: &Info) {
    if let Some(contact) = info.security_contact.as_deref().filter(|value| !value.is_empty()) {
        contract.set_security_contact(contact);
    }
    if let Some(license) = info.license.as_deref().filter(|value| !value.is_empty()) {
        contract.set_license(license);
    }
}

// ============================================================================
// SECTION: Builder Helpers
// ============================================================================

/// Mutable receiver argument.
#[must_use]
pub fn self_arg() -> Argument {
    Argument::untyped("&mut self")
}

/// Shared receiver argument.
#[must_use]
pub fn self_ref_arg() -> Argument {
    Argument::untyped("&self")
}

/// `Result<ok, Vec<u8>>`.
#[must_use]
pub fn fallible(ok: &str) -> ReturnType {
    ReturnType::result(ok, ERROR_TYPE)
}

/// Imports `alloc::vec::Vec`.
pub fn use_vec(contract: &mut Contract) {
    contract.add_import("alloc::vec", "Vec", ImportOptions::default());
}

/// Imports each named item from `alloy_primitives`.
pub fn use_primitives(contract: &mut Contract, names: &[&str]) {
    for name in names {
        contract.add_import("alloy_primitives", name, ImportOptions::default());
    }
}
