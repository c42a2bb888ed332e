// crates/contract-wizard-stylus/src/erc1155.rs
// ============================================================================
// Module: ERC-1155 Builder
// Description: Multi-token contracts and their optional extensions.
// Purpose: Translate ERC-1155 option records into contract models.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! With `supply` the `Erc1155Supply` trait replaces `Erc1155` as the token
//! trait, since it wraps the base token; every other feature attaches its
//! functions to whichever token trait was chosen. A non-empty `uri` is
//! stored as a module-level variable and served by a `uri` function.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Argument;
use contract_wizard_core::Contract;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::ReturnType;
use contract_wizard_core::TraitSpec;
use contract_wizard_core::Variable;
use contract_wizard_core::escape_string;
use serde::Deserialize;
use serde::Serialize;

use crate::access::set_access_control;
use crate::common::Access;
use crate::common::DEFAULT_NAME;
use crate::common::Info;
use crate::common::WHEN_NOT_PAUSED;
use crate::common::fallible;
use crate::common::self_arg;
use crate::common::self_ref_arg;
use crate::common::set_info;
use crate::common::use_primitives;
use crate::common::use_vec;
use crate::error::OptionsError;
use crate::pausable::add_pausable;

// ============================================================================
// CONSTANTS: Paths
// ============================================================================

/// Module holding the base token.
const TOKEN_PATH: &str = "openzeppelin_stylus::token::erc1155";

/// Module holding the extensions.
const EXTENSIONS_PATH: &str = "openzeppelin_stylus::token::erc1155::extensions";

/// Name of the variable holding the metadata URI.
pub const URI_VARIABLE: &str = "URI";

// ============================================================================
// SECTION: Options
// ============================================================================

/// ERC-1155 option record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Erc1155Options {
    /// Token name.
    pub name: String,
    /// Adds `burn` and `burn_batch`.
    pub burnable: bool,
    /// Adds the emergency stop.
    pub pausable: bool,
    /// Tracks total supply per id.
    pub supply: bool,
    /// Metadata URI; empty disables the `uri` function.
    pub uri: String,
    /// Access-control mode.
    pub access: Access,
    /// Header metadata.
    pub info: Info,
}

impl Default for Erc1155Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            burnable: false,
            pausable: false,
            supply: false,
            uri: String::new(),
            access: Access::None,
            info: Info::default(),
        }
    }
}

/// Returns true when the options enable a feature that needs access control.
#[must_use]
pub const fn is_access_control_required(opts: &Erc1155Options) -> bool {
    opts.pausable
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds an ERC-1155 contract.
///
/// # Errors
/// Returns [`OptionsError`] when the name has no identifier characters.
pub fn build_erc1155(opts: &Erc1155Options) -> Result<Contract, OptionsError> {
    let mut contract = Contract::new(&opts.name)?;

    let token = if opts.supply { add_supply(&mut contract) } else { add_base(&mut contract) };
    if !opts.uri.is_empty() {
        add_uri(&mut contract, &token, &opts.uri);
    }
    if opts.pausable {
        add_pausable(&mut contract, opts.access);
    }
    if opts.burnable {
        add_burnable(&mut contract, &token, opts.pausable);
    }

    set_access_control(&mut contract, opts.access);
    set_info(&mut contract, &opts.info);
    Ok(contract)
}

/// Registers `Erc1155` as the token trait.
fn add_base(contract: &mut Contract) -> TraitSpec {
    let token = TraitSpec::new("Erc1155").with_storage("erc1155", "Erc1155");
    contract.add_import(TOKEN_PATH, "Erc1155", ImportOptions::default());
    contract.add_import(TOKEN_PATH, "IErc1155", ImportOptions::default());
    contract.add_trait(&token);
    add_supports_interface(contract, &token);
    token
}

/// Registers `Erc1155Supply` as the token trait with its supply queries.
fn add_supply(contract: &mut Contract) -> TraitSpec {
    let token = TraitSpec::new("Erc1155Supply").with_storage("erc1155_supply", "Erc1155Supply");
    contract.add_import(EXTENSIONS_PATH, "Erc1155Supply", ImportOptions::default());
    contract.add_import(TOKEN_PATH, "IErc1155", ImportOptions::default());
    contract.add_trait(&token);
    use_primitives(contract, &["U256"]);

    let field = storage_field(&token);
    for function in [
        FunctionSpec::new("total_supply", vec![self_ref_arg(), Argument::new("id", "U256")])
            .returning(ReturnType::plain("U256"))
            .with_code([format!("self.{field}.total_supply(id)")]),
        FunctionSpec::new("total_supply_all", vec![self_ref_arg()])
            .with_attribute("selector(name = \"totalSupply\")")
            .returning(ReturnType::plain("U256"))
            .with_code([format!("self.{field}.total_supply_all()")]),
        FunctionSpec::new("exists", vec![self_ref_arg(), Argument::new("id", "U256")])
            .returning(ReturnType::plain("bool"))
            .with_code([format!("self.{field}.exists(id)")]),
    ] {
        contract.add_function(&token, &function);
    }
    add_supports_interface(contract, &token);
    token
}

/// Adds the ERC-165 override; both token traits defer to `Erc1155`.
fn add_supports_interface(contract: &mut Contract, token: &TraitSpec) {
    contract.add_import(
        "openzeppelin_stylus::utils",
        "introspection::erc165::IErc165",
        ImportOptions::default(),
    );
    use_primitives(contract, &["FixedBytes"]);
    let function =
        FunctionSpec::new("supports_interface", vec![Argument::new("interface_id", "FixedBytes<4>")])
            .returning(ReturnType::plain("bool"))
            .with_code(["Erc1155::supports_interface(interface_id)"]);
    contract.add_function(token, &function);
}

/// Stores the metadata URI and serves it for every id.
fn add_uri(contract: &mut Contract, token: &TraitSpec, uri: &str) {
    contract.add_variable(Variable::new(
        URI_VARIABLE,
        "&str",
        format!("\"{}\"", escape_string(uri)),
    ));
    contract.add_import("alloc::string", "String", ImportOptions::default());
    use_primitives(contract, &["U256"]);
    let function = FunctionSpec::new("uri", vec![self_ref_arg(), Argument::new("_id", "U256")])
        .returning(ReturnType::plain("String"))
        .with_code([format!("String::from({URI_VARIABLE})")]);
    contract.add_function(token, &function);
}

/// Adds `burn` and `burn_batch` to the token trait.
fn add_burnable(contract: &mut Contract, token: &TraitSpec, pausable: bool) {
    contract.add_import(EXTENSIONS_PATH, "IErc1155Burnable", ImportOptions::default());
    use_vec(contract);
    use_primitives(contract, &["Address", "U256"]);

    let field = storage_field(token);
    let burn = FunctionSpec::new(
        "burn",
        vec![
            self_arg(),
            Argument::new("account", "Address"),
            Argument::new("token_id", "U256"),
            Argument::new("value", "U256"),
        ],
    )
    .returning(fallible("()"))
    .with_code([format!("self.{field}.burn(account, token_id, value)?")]);
    let burn_batch = FunctionSpec::new(
        "burn_batch",
        vec![
            self_arg(),
            Argument::new("account", "Address"),
            Argument::new("token_ids", "Vec<U256>"),
            Argument::new("values", "Vec<U256>"),
        ],
    )
    .returning(fallible("()"))
    .with_code([format!("self.{field}.burn_batch(account, token_ids, values)?")]);

    for function in [burn, burn_batch] {
        contract.add_function(token, &function);
        if pausable {
            contract.add_function_prologue(token, &function, [WHEN_NOT_PAUSED]);
        }
    }
}

/// Storage field name of a token trait.
fn storage_field(token: &TraitSpec) -> &str {
    token.storage.as_ref().map_or("erc1155", |storage| storage.name.as_str())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
