// crates/contract-wizard-stylus/src/access/tests.rs
// ============================================================================
// Module: Access Control Unit Tests
// Description: Unit coverage for ownable and role-based wiring.
// Purpose: Ensure guards, constructor arguments and role constants are added once.
// Dependencies: contract-wizard-core, contract-wizard-stylus
// ============================================================================

//! ## Overview
//! Exercises the access-control fallback, idempotent wiring, and the
//! one-grant-per-role rule for role-based guards.

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
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::TraitSpec;

use crate::access::ACCESS_CONTROL;
use crate::access::OWNABLE;
use crate::access::require_access_control;
use crate::access::set_access_control;
use crate::common::Access;
use crate::common::self_arg;

/// Trait guarded in these tests.
fn guarded_trait() -> TraitSpec {
    TraitSpec::new("Pausable").with_storage("pausable", "Pausable")
}

/// Function guarded in these tests.
fn guarded_function(name: &str) -> FunctionSpec {
    FunctionSpec::new(name, vec![self_arg()])
}

/// Prologue of `name` on the guarded trait.
fn prologue(contract: &Contract, name: &str) -> Vec<String> {
    contract
        .get_trait("Pausable")
        .and_then(|implemented| implemented.functions().find(|function| function.name == name))
        .map(|function| function.prologue.clone())
        .unwrap_or_default()
}

/// Constructor argument names in order.
fn constructor_args(contract: &Contract) -> Vec<String> {
    contract.constructor_args().map(|arg| arg.name.clone()).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn none_adds_nothing() {
    let mut contract = Contract::new("Token").unwrap();
    let before = contract.clone();
    set_access_control(&mut contract, Access::None);
    assert_eq!(contract, before);
}

#[test]
fn ownable_is_wired_once() {
    let mut contract = Contract::new("Token").unwrap();
    set_access_control(&mut contract, Access::Ownable);
    set_access_control(&mut contract, Access::Ownable);

    assert!(contract.trait_exists(OWNABLE));
    assert_eq!(constructor_args(&contract), vec!["initial_owner"]);
    assert_eq!(contract.constructor_code(), ["self.ownable.constructor(initial_owner)?;"]);
    assert!(contract.imports().any(|import| import.name == "IOwnable"));
}

#[test]
fn roles_grant_the_admin_role() {
    let mut contract = Contract::new("Token").unwrap();
    set_access_control(&mut contract, Access::Roles);

    assert!(contract.trait_exists(ACCESS_CONTROL));
    assert_eq!(constructor_args(&contract), vec!["admin"]);
    assert_eq!(
        contract.constructor_code(),
        ["self.access._grant_role(AccessControl::DEFAULT_ADMIN_ROLE.into(), admin);"]
    );
}

#[test]
fn guard_without_access_falls_back_to_ownable() {
    let mut contract = Contract::new("Token").unwrap();
    let function = guarded_function("pause");
    require_access_control(
        &mut contract,
        &guarded_trait(),
        &function,
        Access::None,
        "PAUSER",
        "pauser",
    );

    assert!(contract.trait_exists(OWNABLE));
    assert!(!contract.trait_exists(ACCESS_CONTROL));
    assert_eq!(prologue(&contract, "pause"), vec!["self.ownable.only_owner()?;"]);
}

#[test]
fn role_is_declared_and_granted_once() {
    let mut contract = Contract::new("Token").unwrap();
    for name in ["pause", "unpause"] {
        require_access_control(
            &mut contract,
            &guarded_trait(),
            &guarded_function(name),
            Access::Roles,
            "PAUSER",
            "pauser",
        );
    }

    let constants: Vec<&str> = contract.constants().map(|constant| constant.name.as_str()).collect();
    assert_eq!(constants, vec!["PAUSER_ROLE"]);
    assert_eq!(constructor_args(&contract), vec!["admin", "pauser"]);
    let grants = contract
        .constructor_code()
        .iter()
        .filter(|line| line.contains("PAUSER_ROLE.into(), pauser"))
        .count();
    assert_eq!(grants, 1);
    for name in ["pause", "unpause"] {
        assert_eq!(prologue(&contract, name), vec!["self.access.only_role(PAUSER_ROLE.into())?;"]);
    }
}

#[test]
fn role_constant_hashes_its_own_name() {
    let mut contract = Contract::new("Token").unwrap();
    require_access_control(
        &mut contract,
        &guarded_trait(),
        &guarded_function("mint"),
        Access::Roles,
        "MINTER",
        "minter",
    );
    let constant = contract.constants().next().unwrap();
    assert_eq!(constant.ty, "[u8; 32]");
    assert_eq!(
        constant.value,
        "keccak_const::Keccak256::new().update(b\"MINTER_ROLE\").finalize()"
    );
}
