// crates/contract-wizard-stylus/src/erc1155/tests.rs
// ============================================================================
// Module: ERC-1155 Builder Unit Tests
// Description: Unit coverage for ERC-1155 supply, URI and burn features.
// Purpose: Ensure the chosen token trait carries every feature function.
// Dependencies: contract-wizard-core, contract-wizard-stylus
// ============================================================================

//! ## Overview
//! Checks token-trait selection, URI escaping and pausable burns.

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

use contract_wizard_core::print_contract;

use crate::common::WHEN_NOT_PAUSED;
use crate::erc1155::Erc1155Options;
use crate::erc1155::URI_VARIABLE;
use crate::erc1155::build_erc1155;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn base_token_uses_erc1155_trait() {
    let contract = build_erc1155(&Erc1155Options::default()).unwrap();
    assert!(contract.trait_exists("Erc1155"));
    assert!(!contract.trait_exists("Erc1155Supply"));
    let source = print_contract(&contract);
    assert!(source.contains("use openzeppelin_stylus::token::erc1155::{Erc1155, IErc1155};"));
    assert!(source.contains("#[inherit(Erc1155)]"));
    assert!(!source.contains("fn uri("));
}

#[test]
fn supply_replaces_the_token_trait() {
    let opts = Erc1155Options {
        supply: true,
        burnable: true,
        ..Erc1155Options::default()
    };
    let contract = build_erc1155(&opts).unwrap();
    assert!(!contract.trait_exists("Erc1155"));
    let token = contract.get_trait("Erc1155Supply").unwrap();
    let names: Vec<&str> = token.functions().map(|function| function.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["total_supply", "total_supply_all", "exists", "supports_interface", "burn", "burn_batch"]
    );
    let source = print_contract(&contract);
    assert!(source.contains("#[selector(name = \"totalSupply\")]"));
    assert!(source.contains("Ok(self.erc1155_supply.burn(account, token_id, value)?)"));
}

#[test]
fn uri_is_escaped_and_served() {
    let opts = Erc1155Options {
        uri: "https://example.com/\"{id}\".json".to_string(),
        ..Erc1155Options::default()
    };
    let contract = build_erc1155(&opts).unwrap();
    let variable = contract.variables().find(|variable| variable.name == URI_VARIABLE).unwrap();
    assert_eq!(variable.value, "\"https://example.com/\\\"{id}\\\".json\"");
    let source = print_contract(&contract);
    assert!(source.contains("fn uri(&self, _id: U256) -> String {"));
    assert!(source.contains("String::from(URI)"));
    assert!(source.contains("use alloc::string::String;"));
}

#[test]
fn pausable_burns_are_guarded() {
    let opts = Erc1155Options {
        burnable: true,
        pausable: true,
        ..Erc1155Options::default()
    };
    let contract = build_erc1155(&opts).unwrap();
    let token = contract.get_trait("Erc1155").unwrap();
    for function in token.functions().filter(|function| function.name.starts_with("burn")) {
        assert_eq!(function.prologue, vec![WHEN_NOT_PAUSED]);
    }
    assert!(contract.trait_exists("Pausable"));
    assert!(contract.trait_exists("Ownable"));
}
