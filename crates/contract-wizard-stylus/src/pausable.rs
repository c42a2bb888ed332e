// crates/contract-wizard-stylus/src/pausable.rs
// ============================================================================
// Module: Pausable Feature
// Description: Emergency stop shared by every token kind.
// Purpose: Add guarded pause/unpause entry points.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! Adds the `Pausable` trait with `pause` and `unpause`, both guarded by the
//! access-control mode under the `PAUSER` role. Kinds add the
//! [`WHEN_NOT_PAUSED`](crate::common::WHEN_NOT_PAUSED) guard to their own
//! state-changing functions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Contract;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::TraitSpec;

use crate::access::require_access_control;
use crate::common::Access;
use crate::common::fallible;
use crate::common::self_arg;
use crate::common::use_vec;

// ============================================================================
// SECTION: Definitions
// ============================================================================

/// Pausable trait backed by the `pausable` field.
#[must_use]
pub fn pausable_trait() -> TraitSpec {
    TraitSpec::new("Pausable")
        .with_module_path("openzeppelin_stylus::utils")
        .with_storage("pausable", "Pausable")
}

/// `pause(&mut self)`.
fn pause() -> FunctionSpec {
    FunctionSpec::new("pause", vec![self_arg()])
        .returning(fallible("()"))
        .with_code(["self.pausable.pause()?"])
}

/// `unpause(&mut self)`.
fn unpause() -> FunctionSpec {
    FunctionSpec::new("unpause", vec![self_arg()])
        .returning(fallible("()"))
        .with_code(["self.pausable.unpause()?"])
}

// ============================================================================
// SECTION: Feature
// ============================================================================

/// Adds the pausable trait and its guarded functions.
pub fn add_pausable(contract: &mut Contract, access: Access) {
    use_vec(contract);
    let pausable = pausable_trait();
    for function in [pause(), unpause()] {
        contract.add_function(&pausable, &function);
        require_access_control(contract, &pausable, &function, access, "PAUSER", "pauser");
    }
}
