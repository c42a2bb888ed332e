// crates/contract-wizard-stylus/src/erc20.rs
// ============================================================================
// Module: ERC-20 Builder
// Description: Fungible token contracts and their optional extensions.
// Purpose: Translate ERC-20 option records into contract models.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! [`build_erc20`] starts from the base `Erc20` trait and layers the enabled
//! features on top: pausing, burning, EIP-2612 permits, ERC-3156 flash
//! minting and a constructor premint. When pausing is enabled every
//! state-changing entry point gains the
//! [`WHEN_NOT_PAUSED`] guard.
//!
//! The premint amount is a decimal string in whole tokens with up to
//! [`PREMINT_DECIMALS`] fractional digits; it is converted to base units and
//! rejected with an [`OptionsError`] when malformed or above `U256::MAX`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Argument;
use contract_wizard_core::Contract;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::ReturnType;
use contract_wizard_core::TraitSpec;
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
// CONSTANTS: Premint
// ============================================================================

/// Decimals assumed when converting the premint to base units.
pub const PREMINT_DECIMALS: usize = 18;

/// Decimal rendering of `U256::MAX`.
const U256_MAX: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

/// Module holding the ERC-20 extensions.
const EXTENSIONS_PATH: &str = "openzeppelin_stylus::token::erc20::extensions";

/// Lint allowance attached to functions with more than seven arguments.
const TOO_MANY_ARGUMENTS: &str = "allow(clippy::too_many_arguments)";

// ============================================================================
// SECTION: Options
// ============================================================================

/// ERC-20 option record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Erc20Options {
    /// Token name.
    pub name: String,
    /// Adds `burn` and `burn_from`.
    pub burnable: bool,
    /// Adds the emergency stop.
    pub pausable: bool,
    /// Adds EIP-2612 permits.
    pub permit: bool,
    /// Adds ERC-3156 flash loans.
    pub flash_mint: bool,
    /// Whole tokens minted to a constructor-supplied recipient.
    pub premint: String,
    /// Access-control mode.
    pub access: Access,
    /// Header metadata.
    pub info: Info,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            burnable: false,
            pausable: false,
            permit: true,
            flash_mint: false,
            premint: "0".to_string(),
            access: Access::None,
            info: Info::default(),
        }
    }
}

/// Returns true when the options enable a feature that needs access control.
#[must_use]
pub const fn is_access_control_required(opts: &Erc20Options) -> bool {
    opts.pausable
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds an ERC-20 contract.
///
/// # Errors
/// Returns [`OptionsError`] when the name has no identifier characters or the
/// premint is invalid.
pub fn build_erc20(opts: &Erc20Options) -> Result<Contract, OptionsError> {
    let mut contract = Contract::new(&opts.name)?;

    add_base(&mut contract, opts.pausable);
    add_premint(&mut contract, &opts.premint)?;
    if opts.pausable {
        add_pausable(&mut contract, opts.access);
    }
    if opts.burnable {
        add_burnable(&mut contract, opts.pausable);
    }
    if opts.permit {
        add_permit(&mut contract, opts.pausable);
    }
    if opts.flash_mint {
        add_flash_mint(&mut contract, opts.pausable);
    }

    set_access_control(&mut contract, opts.access);
    set_info(&mut contract, &opts.info);
    Ok(contract)
}

/// Registers the base trait; pausable tokens guard both transfers.
fn add_base(contract: &mut Contract, pausable: bool) {
    contract.add_trait(&erc20_trait());
    contract.add_import("openzeppelin_stylus::token::erc20", "IErc20", ImportOptions::default());

    if pausable {
        use_vec(contract);
        use_primitives(contract, &["Address", "U256"]);
        for function in [transfer(), transfer_from()] {
            contract.add_function_prologue(&erc20_trait(), &function, [WHEN_NOT_PAUSED]);
        }
    }
}

/// Mints the premint to a constructor-supplied recipient.
fn add_premint(contract: &mut Contract, premint: &str) -> Result<(), OptionsError> {
    let amount = initial_supply(premint, PREMINT_DECIMALS)?;
    if amount == "0" {
        return Ok(());
    }
    use_vec(contract);
    use_primitives(contract, &["Address", "uint"]);
    contract.add_constructor_argument(Argument::new("recipient", "Address"));
    contract.add_constructor_code(format!("self.erc20._mint(recipient, uint!({amount}_U256))?;"));
    Ok(())
}

/// Adds `burn` and `burn_from`.
fn add_burnable(contract: &mut Contract, pausable: bool) {
    contract.add_import(EXTENSIONS_PATH, "IErc20Burnable", ImportOptions::default());
    use_vec(contract);
    use_primitives(contract, &["Address", "U256"]);

    for function in [burn(), burn_from()] {
        contract.add_function(&erc20_trait(), &function);
        if pausable {
            contract.add_function_prologue(&erc20_trait(), &function, [WHEN_NOT_PAUSED]);
        }
    }
}

/// Adds EIP-2612 permits with their nonces and EIP-712 domain.
fn add_permit(contract: &mut Contract, pausable: bool) {
    let permit_trait = erc20_permit_trait();
    contract.add_trait(&permit_trait);
    contract.add_trait(&nonces_trait());
    contract.add_eip712();

    use_vec(contract);
    use_primitives(contract, &["Address", "B256", "U256"]);

    let permit = permit();
    contract.add_function(&permit_trait, &permit);
    contract.add_function_tag(&permit_trait, &permit, TOO_MANY_ARGUMENTS);
    if pausable {
        contract.add_function_prologue(&permit_trait, &permit, [WHEN_NOT_PAUSED]);
    }
}

/// Adds ERC-3156 flash loans.
fn add_flash_mint(contract: &mut Contract, pausable: bool) {
    let flash_trait = flash_mint_trait();
    contract.add_trait(&flash_trait);
    contract.add_import(EXTENSIONS_PATH, "IErc3156FlashLender", ImportOptions::default());
    contract.add_import("stylus_sdk::abi", "Bytes", ImportOptions::default());
    use_vec(contract);
    use_primitives(contract, &["Address", "U256"]);

    for function in [max_flash_loan(), flash_fee(), flash_loan()] {
        contract.add_function(&flash_trait, &function);
    }
    if pausable {
        contract.add_function_prologue(&flash_trait, &flash_loan(), [WHEN_NOT_PAUSED]);
    }
}

// ============================================================================
// SECTION: Premint Conversion
// ============================================================================

/// Converts a whole-token amount to base units with `decimals` places.
///
/// # Errors
/// Returns [`OptionsError`] keyed by `premint` when the amount is not a
/// non-negative decimal, has more than `decimals` fractional digits, or
/// exceeds `U256::MAX` in base units.
///
/// # Examples
/// ```
/// use contract_wizard_stylus::erc20::initial_supply;
///
/// assert_eq!(initial_supply("1.5", 2).as_deref(), Ok("150"));
/// assert_eq!(initial_supply("", 18).as_deref(), Ok("0"));
/// assert!(initial_supply("1.234", 2).is_err());
/// ```
pub fn initial_supply(premint: &str, decimals: usize) -> Result<String, OptionsError> {
    let invalid = || OptionsError::field("premint", "Not a valid number");
    if !premint.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(invalid());
    }
    let mut segments = premint.split('.');
    let whole = segments.next().unwrap_or_default();
    let fraction = segments.next().unwrap_or_default();
    if segments.next().is_some() {
        return Err(invalid());
    }
    let Some(padding) = decimals.checked_sub(fraction.len()) else {
        return Err(OptionsError::field("premint", "Too many decimals"));
    };

    let digits = format!("{whole}{fraction}{}", "0".repeat(padding));
    let trimmed = digits.trim_start_matches('0');
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    if value.len() > U256_MAX.len() || (value.len() == U256_MAX.len() && value > U256_MAX) {
        return Err(OptionsError::field("premint", "Value is greater than uint256 max value"));
    }
    Ok(value.to_string())
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Base token trait.
fn erc20_trait() -> TraitSpec {
    TraitSpec::new("Erc20")
        .with_module_path("openzeppelin_stylus::token::erc20")
        .with_storage("erc20", "Erc20")
}

/// Permit extension, parameterized by the EIP-712 domain.
fn erc20_permit_trait() -> TraitSpec {
    TraitSpec::new("Erc20Permit")
        .with_module_path(EXTENSIONS_PATH)
        .with_storage("erc20_permit", "Erc20Permit<Eip712>")
}

/// Nonce tracker consumed by permits.
fn nonces_trait() -> TraitSpec {
    TraitSpec::new("Nonces")
        .with_module_path("openzeppelin_stylus::utils::nonces")
        .with_storage("nonces", "Nonces")
}

/// Flash-mint extension; routed explicitly rather than inherited.
fn flash_mint_trait() -> TraitSpec {
    TraitSpec::new("Erc20FlashMint")
        .with_module_path(EXTENSIONS_PATH)
        .with_storage("flash_mint", "Erc20FlashMint")
        .omit_inherit()
}

// ============================================================================
// SECTION: Functions
// ============================================================================

/// `transfer(to, value)`.
fn transfer() -> FunctionSpec {
    FunctionSpec::new(
        "transfer",
        vec![self_arg(), Argument::new("to", "Address"), Argument::new("value", "U256")],
    )
    .returning(fallible("bool"))
    .with_code(["self.erc20.transfer(to, value)?"])
}

/// `transfer_from(from, to, value)`.
fn transfer_from() -> FunctionSpec {
    FunctionSpec::new(
        "transfer_from",
        vec![
            self_arg(),
            Argument::new("from", "Address"),
            Argument::new("to", "Address"),
            Argument::new("value", "U256"),
        ],
    )
    .returning(fallible("bool"))
    .with_code(["self.erc20.transfer_from(from, to, value)?"])
}

/// `burn(value)`.
fn burn() -> FunctionSpec {
    FunctionSpec::new("burn", vec![self_arg(), Argument::new("value", "U256")])
        .returning(fallible("()"))
        .with_code(["self.erc20.burn(value)?"])
}

/// `burn_from(account, value)`.
fn burn_from() -> FunctionSpec {
    FunctionSpec::new(
        "burn_from",
        vec![self_arg(), Argument::new("account", "Address"), Argument::new("value", "U256")],
    )
    .returning(fallible("()"))
    .with_code(["self.erc20.burn_from(account, value)?"])
}

/// `permit(owner, spender, value, deadline, v, r, s)`.
fn permit() -> FunctionSpec {
    FunctionSpec::new(
        "permit",
        vec![
            self_arg(),
            Argument::new("owner", "Address"),
            Argument::new("spender", "Address"),
            Argument::new("value", "U256"),
            Argument::new("deadline", "U256"),
            Argument::new("v", "u8"),
            Argument::new("r", "B256"),
            Argument::new("s", "B256"),
        ],
    )
    .returning(fallible("()"))
    .with_code([
        "self.erc20_permit.permit(owner, spender, value, deadline, v, r, s, &mut self.erc20, &mut \
         self.nonces)?",
    ])
}

/// `max_flash_loan(token)`.
fn max_flash_loan() -> FunctionSpec {
    FunctionSpec::new("max_flash_loan", vec![self_ref_arg(), Argument::new("token", "Address")])
        .returning(ReturnType::plain("U256"))
        .with_code(["self.flash_mint.max_flash_loan(token, &self.erc20)"])
}

/// `flash_fee(token, value)`.
fn flash_fee() -> FunctionSpec {
    FunctionSpec::new(
        "flash_fee",
        vec![self_ref_arg(), Argument::new("token", "Address"), Argument::new("value", "U256")],
    )
    .returning(fallible("U256"))
    .with_code(["self.flash_mint.flash_fee(token, value)?"])
}

/// `flash_loan(receiver, token, value, data)`.
fn flash_loan() -> FunctionSpec {
    FunctionSpec::new(
        "flash_loan",
        vec![
            self_arg(),
            Argument::new("receiver", "Address"),
            Argument::new("token", "Address"),
            Argument::new("value", "U256"),
            Argument::new("data", "Bytes"),
        ],
    )
    .returning(fallible("bool"))
    .with_code(["self.flash_mint.flash_loan(receiver, token, value, data, &mut self.erc20)?"])
}

// ============================================================================
// SECTION: Tests
// ============================================================================
