// crates/contract-wizard-stylus/src/erc721/tests.rs
// ============================================================================
// Module: ERC-721 Builder Unit Tests
// Description: Unit coverage for ERC-721 features and function variants.
// Purpose: Ensure enumeration, minting and pausing select consistent bodies.
// Dependencies: contract-wizard-core, contract-wizard-stylus
// ============================================================================

//! ## Overview
//! Function bodies are fixed at first registration, so these tests check
//! that each feature combination lands on the right variant.

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

use contract_wizard_core::Contract;
use contract_wizard_core::ContractFunction;
use contract_wizard_core::print_contract;

use crate::common::Access;
use crate::common::WHEN_NOT_PAUSED;
use crate::erc721::Erc721Options;
use crate::erc721::NEXT_TOKEN_ID;
use crate::erc721::TOKEN_ID_OVERFLOW;
use crate::erc721::build_erc721;
use crate::erc721::is_access_control_required;

/// Function `name` on the base trait.
fn base_function<'a>(contract: &'a Contract, name: &str) -> &'a ContractFunction {
    contract
        .get_trait("Erc721")
        .and_then(|implemented| implemented.functions().find(|function| function.name == name))
        .unwrap_or_else(|| panic!("missing Erc721::{name}"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn base_token_overrides_supports_interface() {
    let contract = build_erc721(&Erc721Options::default()).unwrap();
    let function = base_function(&contract, "supports_interface");
    assert_eq!(function.code, vec!["Erc721::supports_interface(interface_id)"]);

    let source = print_contract(&contract);
    assert!(source.contains("use openzeppelin_stylus::utils::introspection::erc165::IErc165;"));
    assert!(source.contains("fn supports_interface(interface_id: FixedBytes<4>) -> bool {"));
    assert!(!source.contains("pub fn constructor"));
}

#[test]
fn enumerable_transfers_maintain_owner_lists() {
    let opts = Erc721Options {
        enumerable: true,
        ..Erc721Options::default()
    };
    let contract = build_erc721(&opts).unwrap();
    assert!(contract.trait_exists("Erc721Enumerable"));

    for name in ["transfer_from", "safe_transfer_from", "safe_transfer_from_with_data"] {
        let function = base_function(&contract, name);
        assert_eq!(function.code[0], "let previous_owner = self.erc721.owner_of(token_id)?;");
        assert_eq!(function.return_line.as_deref(), Some("Ok(())"));
    }
    let supports = base_function(&contract, "supports_interface");
    assert_eq!(supports.code.len(), 2);

    let source = print_contract(&contract);
    assert!(source.contains("#[selector(name = \"safeTransferFrom\")]"));
    assert!(source.contains("#[inherit(Erc721, Erc721Enumerable)]"));
}

#[test]
fn pausable_transfer_keeps_plain_body() {
    let opts = Erc721Options {
        pausable: true,
        ..Erc721Options::default()
    };
    let contract = build_erc721(&opts).unwrap();
    let function = base_function(&contract, "transfer_from");
    assert_eq!(function.prologue, vec![WHEN_NOT_PAUSED]);
    assert_eq!(function.code, vec!["self.erc721.transfer_from(from, to, token_id)?"]);
    assert!(function.return_line.is_none());
}

#[test]
fn enumerable_burn_clears_both_lists() {
    let opts = Erc721Options {
        burnable: true,
        enumerable: true,
        pausable: true,
        ..Erc721Options::default()
    };
    let contract = build_erc721(&opts).unwrap();
    let burn = base_function(&contract, "burn");
    assert_eq!(burn.prologue, vec![WHEN_NOT_PAUSED]);
    assert!(burn.code.iter().any(|line| line.contains("_remove_token_from_all_tokens_enumeration")));
    let transfer = base_function(&contract, "transfer_from");
    assert_eq!(transfer.prologue, vec![WHEN_NOT_PAUSED]);
    assert_eq!(transfer.code.len(), 4);
}

#[test]
fn mintable_is_guarded_by_owner() {
    let opts = Erc721Options {
        mintable: true,
        ..Erc721Options::default()
    };
    assert!(is_access_control_required(&opts));
    let contract = build_erc721(&opts).unwrap();
    let mint = base_function(&contract, "mint");
    assert_eq!(mint.prologue, vec!["self.ownable.only_owner()?;"]);
    assert_eq!(mint.code, vec!["self.erc721._mint(to, token_id)?"]);
    assert_eq!(contract.errors().count(), 0);
}

#[test]
fn incremental_mint_uses_counter_and_error() {
    let opts = Erc721Options {
        name: "Collectible".to_string(),
        mintable: true,
        incremental: true,
        access: Access::Roles,
        ..Erc721Options::default()
    };
    let contract = build_erc721(&opts).unwrap();

    let errors: Vec<(&str, Option<u32>)> =
        contract.errors().map(|error| (error.name.as_str(), error.ordinal)).collect();
    assert_eq!(errors, vec![(TOKEN_ID_OVERFLOW, Some(1))]);
    assert!(contract.storage().any(|storage| storage.name == NEXT_TOKEN_ID));

    let mint = base_function(&contract, "mint");
    assert_eq!(mint.args.len(), 2);
    assert_eq!(mint.prologue, vec!["self.access.only_role(MINTER_ROLE.into())?;"]);
    assert_eq!(mint.return_line.as_deref(), Some("Ok(token_id)"));
    assert!(mint.code.iter().any(|line| line.contains("CollectibleError::TokenIdOverflow")));

    let source = print_contract(&contract);
    assert!(source.contains("pub enum CollectibleError {"));
    assert!(source.contains("TokenIdOverflow = 1,"));
    assert!(source.contains("next_token_id: StorageU256,"));
    assert!(source.contains("fn mint(&mut self, to: Address) -> Result<U256, Vec<u8>> {"));
}

#[test]
fn incremental_without_mintable_changes_nothing() {
    let plain = build_erc721(&Erc721Options::default()).unwrap();
    let incremental = build_erc721(&Erc721Options {
        incremental: true,
        ..Erc721Options::default()
    })
    .unwrap();
    assert_eq!(print_contract(&plain), print_contract(&incremental));
}
