// crates/contract-wizard-stylus/src/erc721.rs
// ============================================================================
// Module: ERC-721 Builder
// Description: Non-fungible token contracts and their optional extensions.
// Purpose: Translate ERC-721 option records into contract models.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! [`build_erc721`] registers the base `Erc721` trait with its ERC-165
//! override, then layers pausing, burning, enumeration and minting.
//!
//! Function bodies are fixed at first registration, so the variants that
//! depend on other features (enumeration rewrites transfers, burns and
//! mints) are selected up front from the option record rather than patched
//! afterwards.
//!
//! With `incremental`, `mint` assigns ids from a `next_token_id` storage
//! counter and reports counter overflow through the contract's
//! `TokenIdOverflow` error variant. `incremental` has no effect without
//! `mintable`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Argument;
use contract_wizard_core::Contract;
use contract_wizard_core::ErrorVariant;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::ReturnType;
use contract_wizard_core::Storage;
use contract_wizard_core::TraitSpec;
use serde::Deserialize;
use serde::Serialize;

use crate::access::require_access_control;
use crate::access::set_access_control;
use crate::common::Access;
use crate::common::DEFAULT_NAME;
use crate::common::Info;
use crate::common::WHEN_NOT_PAUSED;
use crate::common::fallible;
use crate::common::self_arg;
use crate::common::set_info;
use crate::common::use_primitives;
use crate::common::use_vec;
use crate::error::OptionsError;
use crate::pausable::add_pausable;

// ============================================================================
// CONSTANTS: Identifiers
// ============================================================================

/// Error variant raised when the id counter overflows.
pub const TOKEN_ID_OVERFLOW: &str = "TokenIdOverflow";

/// Storage field holding the next id to mint.
pub const NEXT_TOKEN_ID: &str = "next_token_id";

/// Line appended to a body that ends in a `?;` statement.
const OK_UNIT: &str = "Ok(())";

// ============================================================================
// SECTION: Options
// ============================================================================

/// ERC-721 option record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Erc721Options {
    /// Token name.
    pub name: String,
    /// Adds `burn`.
    pub burnable: bool,
    /// Adds owner and global enumeration.
    pub enumerable: bool,
    /// Adds the emergency stop.
    pub pausable: bool,
    /// Adds a guarded `mint`.
    pub mintable: bool,
    /// Assigns minted ids from a storage counter.
    pub incremental: bool,
    /// Access-control mode.
    pub access: Access,
    /// Header metadata.
    pub info: Info,
}

impl Default for Erc721Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            burnable: false,
            enumerable: false,
            pausable: false,
            mintable: false,
            incremental: false,
            access: Access::None,
            info: Info::default(),
        }
    }
}

/// Returns true when the options enable a feature that needs access control.
#[must_use]
pub const fn is_access_control_required(opts: &Erc721Options) -> bool {
    opts.pausable || opts.mintable
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds an ERC-721 contract.
///
/// # Errors
/// Returns [`OptionsError`] when the name has no identifier characters.
pub fn build_erc721(opts: &Erc721Options) -> Result<Contract, OptionsError> {
    let mut contract = Contract::new(&opts.name)?;
    let functions = Erc721Functions::for_options(opts, &contract.name().identifier);

    add_base(&mut contract, &functions, opts.pausable);
    if opts.pausable {
        add_pausable(&mut contract, opts.access);
    }
    if opts.burnable {
        add_burnable(&mut contract, &functions, opts.pausable);
    }
    if opts.enumerable {
        add_enumerable(&mut contract, &functions);
    }
    if opts.mintable {
        add_mintable(&mut contract, &functions, opts);
    }

    set_access_control(&mut contract, opts.access);
    set_info(&mut contract, &opts.info);
    Ok(contract)
}

/// Registers the base trait and its ERC-165 override.
fn add_base(contract: &mut Contract, functions: &Erc721Functions, pausable: bool) {
    let base = erc721_trait();
    contract.add_trait(&base);
    contract.add_import("openzeppelin_stylus::token::erc721", "IErc721", ImportOptions::default());
    contract.add_import(
        "openzeppelin_stylus::utils",
        "introspection::erc165::IErc165",
        ImportOptions::default(),
    );
    use_primitives(contract, &["FixedBytes"]);
    contract.add_function(&base, &functions.supports_interface);

    if pausable {
        use_vec(contract);
        use_primitives(contract, &["Address", "U256"]);
        contract.add_function_prologue(&base, &functions.transfer_from, [WHEN_NOT_PAUSED]);
    }
}

/// Adds `burn`.
fn add_burnable(contract: &mut Contract, functions: &Erc721Functions, pausable: bool) {
    let base = erc721_trait();
    contract.add_import(
        "openzeppelin_stylus::token::erc721::extensions",
        "IErc721Burnable",
        ImportOptions::default(),
    );
    use_vec(contract);
    use_primitives(contract, &["U256"]);

    contract.add_function(&base, &functions.burn);
    if pausable {
        contract.add_function_prologue(&base, &functions.burn, [WHEN_NOT_PAUSED]);
    }
}

/// Registers enumeration and the transfer variants that maintain it.
fn add_enumerable(contract: &mut Contract, functions: &Erc721Functions) {
    let base = erc721_trait();
    contract.add_trait(&enumerable_trait());
    use_vec(contract);
    use_primitives(contract, &["Address", "U256"]);
    contract.add_import("stylus_sdk::abi", "Bytes", ImportOptions::default());

    for function in [
        &functions.transfer_from,
        &functions.safe_transfer_from,
        &functions.safe_transfer_from_with_data,
    ] {
        contract.add_function(&base, function);
    }
}

/// Adds a guarded `mint`, optionally backed by the id counter.
fn add_mintable(contract: &mut Contract, functions: &Erc721Functions, opts: &Erc721Options) {
    let base = erc721_trait();
    use_vec(contract);
    use_primitives(contract, &["Address", "U256"]);

    if opts.incremental && contract.add_error(ErrorVariant::new(TOKEN_ID_OVERFLOW, 1)) {
        contract.add_storage(Storage::new(NEXT_TOKEN_ID, "StorageU256"));
        contract.add_import("stylus_sdk::storage", "StorageU256", ImportOptions::default());
    }

    contract.add_function(&base, &functions.mint);
    if opts.pausable {
        contract.add_function_prologue(&base, &functions.mint, [WHEN_NOT_PAUSED]);
    }
    require_access_control(contract, &base, &functions.mint, opts.access, "MINTER", "minter");
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Base token trait.
fn erc721_trait() -> TraitSpec {
    TraitSpec::new("Erc721")
        .with_module_path("openzeppelin_stylus::token::erc721")
        .with_storage("erc721", "Erc721")
}

/// Enumeration extension.
fn enumerable_trait() -> TraitSpec {
    TraitSpec::new("Erc721Enumerable")
        .with_module_path("openzeppelin_stylus::token::erc721::extensions")
        .with_storage("enumerable", "Erc721Enumerable")
}

// ============================================================================
// SECTION: Functions
// ============================================================================

/// Function variants selected for one option record.
struct Erc721Functions {
    /// `transfer_from(from, to, token_id)`.
    transfer_from: FunctionSpec,
    /// `safe_transfer_from(from, to, token_id)`.
    safe_transfer_from: FunctionSpec,
    /// `safe_transfer_from_with_data(from, to, token_id, data)`.
    safe_transfer_from_with_data: FunctionSpec,
    /// ERC-165 `supports_interface`.
    supports_interface: FunctionSpec,
    /// `burn(token_id)`.
    burn: FunctionSpec,
    /// `mint(to, token_id)` or, when incremental, `mint(to)`.
    mint: FunctionSpec,
}

impl Erc721Functions {
    /// Selects the function variants for `opts`; `identifier` names the
    /// contract error enum.
    fn for_options(opts: &Erc721Options, identifier: &str) -> Self {
        let enumerable = opts.enumerable;
        Self {
            transfer_from: transfer(
                "transfer_from",
                None,
                "self.erc721.transfer_from(from, to, token_id)?",
                enumerable,
            ),
            safe_transfer_from: transfer(
                "safe_transfer_from",
                None,
                "self.erc721.safe_transfer_from(from, to, token_id)?",
                enumerable,
            ),
            safe_transfer_from_with_data: transfer(
                "safe_transfer_from_with_data",
                Some(Argument::new("data", "Bytes")),
                "self.erc721.safe_transfer_from_with_data(from, to, token_id, data)?",
                enumerable,
            )
            .with_attribute("selector(name = \"safeTransferFrom\")"),
            supports_interface: supports_interface(enumerable),
            burn: burn(enumerable),
            mint: mint(opts.incremental, enumerable, identifier),
        }
    }
}

/// Builds a transfer; enumerable tokens move the id between owner lists.
fn transfer(name: &str, extra: Option<Argument>, call: &str, enumerable: bool) -> FunctionSpec {
    let mut args = vec![
        self_arg(),
        Argument::new("from", "Address"),
        Argument::new("to", "Address"),
        Argument::new("token_id", "U256"),
    ];
    args.extend(extra);
    let spec = FunctionSpec::new(name, args).returning(fallible("()"));
    if !enumerable {
        return spec.with_code([call]);
    }
    spec.with_code([
        "let previous_owner = self.erc721.owner_of(token_id)?;".to_string(),
        format!("{call};"),
        "self.enumerable._remove_token_from_owner_enumeration(previous_owner, token_id, \
         &self.erc721)?;"
            .to_string(),
        "self.enumerable._add_token_to_owner_enumeration(to, token_id, &self.erc721)?;"
            .to_string(),
    ])
    .with_return_line(OK_UNIT)
}

/// ERC-165 override covering the enabled extensions.
fn supports_interface(enumerable: bool) -> FunctionSpec {
    let mut code = vec!["Erc721::supports_interface(interface_id)".to_string()];
    if enumerable {
        code.push("    || Erc721Enumerable::supports_interface(interface_id)".to_string());
    }
    FunctionSpec::new("supports_interface", vec![Argument::new("interface_id", "FixedBytes<4>")])
        .returning(ReturnType::plain("bool"))
        .with_code(code)
}

/// `burn(token_id)`; enumerable tokens also drop the id from both lists.
fn burn(enumerable: bool) -> FunctionSpec {
    let spec = FunctionSpec::new("burn", vec![self_arg(), Argument::new("token_id", "U256")])
        .returning(fallible("()"));
    if !enumerable {
        return spec.with_code(["self.erc721.burn(token_id)?"]);
    }
    spec.with_code([
        "let owner = self.erc721.owner_of(token_id)?;",
        "self.erc721.burn(token_id)?;",
        "self.enumerable._remove_token_from_owner_enumeration(owner, token_id, &self.erc721)?;",
        "self.enumerable._remove_token_from_all_tokens_enumeration(token_id);",
    ])
    .with_return_line(OK_UNIT)
}

/// `mint`; incremental tokens take the id from the storage counter.
fn mint(incremental: bool, enumerable: bool, identifier: &str) -> FunctionSpec {
    let enumeration = [
        "self.enumerable._add_token_to_owner_enumeration(to, token_id, &self.erc721)?;",
        "self.enumerable._add_token_to_all_tokens_enumeration(token_id);",
    ];

    if incremental {
        let mut code = vec![
            format!("let token_id = self.{NEXT_TOKEN_ID}.get();"),
            "let next_token_id = token_id".to_string(),
            "    .checked_add(U256::from(1))".to_string(),
            format!(
                "    .ok_or_else(|| Vec::from(({identifier}Error::{TOKEN_ID_OVERFLOW} as \
                 u32).to_be_bytes()))?;"
            ),
            format!("self.{NEXT_TOKEN_ID}.set(next_token_id);"),
            "self.erc721._mint(to, token_id)?;".to_string(),
        ];
        if enumerable {
            code.extend(enumeration.iter().map(ToString::to_string));
        }
        return FunctionSpec::new("mint", vec![self_arg(), Argument::new("to", "Address")])
            .returning(fallible("U256"))
            .with_code(code)
            .with_return_line("Ok(token_id)");
    }

    let spec = FunctionSpec::new(
        "mint",
        vec![self_arg(), Argument::new("to", "Address"), Argument::new("token_id", "U256")],
    )
    .returning(fallible("()"));
    if !enumerable {
        return spec.with_code(["self.erc721._mint(to, token_id)?"]);
    }
    let mut code = vec!["self.erc721._mint(to, token_id)?;".to_string()];
    code.extend(enumeration.iter().map(ToString::to_string));
    spec.with_code(code).with_return_line(OK_UNIT)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
