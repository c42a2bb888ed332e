// crates/contract-wizard-stylus/src/access.rs
// ============================================================================
// Module: Access Control
// Description: Ownable and role-based guards for generated contracts.
// Purpose: Register access-control traits and guard privileged functions.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! [`set_access_control`] wires the chosen mode into the contract once: the
//! backing trait, its imports and the constructor argument that seeds the
//! owner or admin. [`require_access_control`] additionally guards a single
//! function. A feature that needs a guard while the access mode is
//! [`Access::None`] falls back to [`DEFAULT_ACCESS_CONTROL`].
//!
//! Role constants are registered once per role; the first registration also
//! grants the role to a dedicated constructor argument.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Argument;
use contract_wizard_core::Constant;
use contract_wizard_core::Contract;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::TraitSpec;

use crate::common::Access;
use crate::common::use_primitives;
use crate::common::use_vec;

// ============================================================================
// CONSTANTS: Access Control
// ============================================================================

/// Mode used when a guarded feature is enabled without access control.
pub const DEFAULT_ACCESS_CONTROL: Access = Access::Ownable;

/// Name of the ownable trait.
pub const OWNABLE: &str = "Ownable";

/// Name of the role-based access-control trait.
pub const ACCESS_CONTROL: &str = "AccessControl";

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Ownable trait backed by the `ownable` field.
fn ownable_trait() -> TraitSpec {
    TraitSpec::new(OWNABLE)
        .with_module_path("openzeppelin_stylus::access::ownable")
        .with_storage("ownable", "Ownable")
}

/// Access-control trait backed by the `access` field.
fn access_control_trait() -> TraitSpec {
    TraitSpec::new(ACCESS_CONTROL)
        .with_module_path("openzeppelin_stylus::access::control")
        .with_storage("access", "AccessControl")
}

// ============================================================================
// SECTION: Wiring
// ============================================================================

/// Wires `access` into the contract; repeated calls are no-ops.
pub fn set_access_control(contract: &mut Contract, access: Access) {
    match access {
        Access::None => {}
        Access::Ownable => {
            if contract.trait_exists(OWNABLE) {
                return;
            }
            contract.add_trait(&ownable_trait());
            contract.add_import(
                "openzeppelin_stylus::access::ownable",
                "IOwnable",
                ImportOptions::default(),
            );
            use_vec(contract);
            use_primitives(contract, &["Address"]);
            contract.add_constructor_argument(Argument::new("initial_owner", "Address"));
            contract.add_constructor_code("self.ownable.constructor(initial_owner)?;");
        }
        Access::Roles => {
            if contract.trait_exists(ACCESS_CONTROL) {
                return;
            }
            contract.add_trait(&access_control_trait());
            contract.add_import(
                "openzeppelin_stylus::access::control",
                "IAccessControl",
                ImportOptions::default(),
            );
            use_vec(contract);
            use_primitives(contract, &["Address"]);
            contract.add_constructor_argument(Argument::new("admin", "Address"));
            contract.add_constructor_code(
                "self.access._grant_role(AccessControl::DEFAULT_ADMIN_ROLE.into(), admin);",
            );
        }
    }
}

/// Guards `function` of `trait_spec` with the access-control mode.
///
/// With [`Access::Roles`], `role_prefix` names the role (`PAUSER` becomes
/// `PAUSER_ROLE`) and `role_owner` names the constructor argument that is
/// granted the role.
pub fn require_access_control(
    contract: &mut Contract,
    trait_spec: &TraitSpec,
    function: &FunctionSpec,
    access: Access,
    role_prefix: &str,
    role_owner: &str,
) {
    let access = match access {
        Access::None => DEFAULT_ACCESS_CONTROL,
        chosen => chosen,
    };
    set_access_control(contract, access);

    match access {
        Access::None | Access::Ownable => {
            contract.add_function_prologue(trait_spec, function, ["self.ownable.only_owner()?;"]);
        }
        Access::Roles => {
            let role_id = format!("{role_prefix}_ROLE");
            let added = contract.add_constant(Constant::new(
                role_id.as_str(),
                "[u8; 32]",
                format!("keccak_const::Keccak256::new().update(b\"{role_id}\").finalize()"),
            ));
            if added {
                contract.add_constructor_argument(Argument::new(role_owner, "Address"));
                contract.add_constructor_code(format!(
                    "self.access._grant_role({role_id}.into(), {role_owner});"
                ));
            }
            contract.add_function_prologue(
                trait_spec,
                function,
                [format!("self.access.only_role({role_id}.into())?;")],
            );
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
