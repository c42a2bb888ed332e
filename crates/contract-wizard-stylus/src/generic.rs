// crates/contract-wizard-stylus/src/generic.rs
// ============================================================================
// Module: Generic Dispatcher
// Description: Kind-tagged option records and their single build entry point.
// Purpose: Route any option record to the builder of its kind.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! [`GenericOptions`] is tagged by `kind` on the wire (`"ERC20"`,
//! `"ERC721"`, `"ERC1155"`). An unknown kind fails at deserialization, and
//! [`build_generic`] matches every kind exhaustively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use contract_wizard_core::Contract;
use serde::Deserialize;
use serde::Serialize;

use crate::erc20;
use crate::erc20::Erc20Options;
use crate::erc721;
use crate::erc721::Erc721Options;
use crate::erc1155;
use crate::erc1155::Erc1155Options;
use crate::error::OptionsError;

// ============================================================================
// SECTION: Kind
// ============================================================================

/// Contract kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Fungible token.
    #[serde(rename = "ERC20")]
    Erc20,
    /// Non-fungible token.
    #[serde(rename = "ERC721")]
    Erc721,
    /// Multi-token.
    #[serde(rename = "ERC1155")]
    Erc1155,
}

impl Kind {
    /// Every kind in generation order.
    pub const ALL: [Self; 3] = [Self::Erc20, Self::Erc721, Self::Erc1155];

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Erc20 => "ERC20",
            Self::Erc721 => "ERC721",
            Self::Erc1155 => "ERC1155",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// Option record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GenericOptions {
    /// ERC-20 options.
    #[serde(rename = "ERC20")]
    Erc20(Erc20Options),
    /// ERC-721 options.
    #[serde(rename = "ERC721")]
    Erc721(Erc721Options),
    /// ERC-1155 options.
    #[serde(rename = "ERC1155")]
    Erc1155(Erc1155Options),
}

impl GenericOptions {
    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Erc20(_) => Kind::Erc20,
            Self::Erc721(_) => Kind::Erc721,
            Self::Erc1155(_) => Kind::Erc1155,
        }
    }

    /// Returns the contract name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Erc20(opts) => &opts.name,
            Self::Erc721(opts) => &opts.name,
            Self::Erc1155(opts) => &opts.name,
        }
    }

    /// Returns a copy with the contract name replaced.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        match &mut self {
            Self::Erc20(opts) => name.clone_into(&mut opts.name),
            Self::Erc721(opts) => name.clone_into(&mut opts.name),
            Self::Erc1155(opts) => name.clone_into(&mut opts.name),
        }
        self
    }
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Builds the contract described by `opts`.
///
/// # Errors
/// Returns [`OptionsError`] when the kind builder rejects the options.
///
/// # Examples
/// ```
/// use contract_wizard_stylus::GenericOptions;
/// use contract_wizard_stylus::build_generic;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let opts: GenericOptions = serde_json::from_str(r#"{"kind": "ERC20", "name": "Gold"}"#)?;
/// let contract = build_generic(&opts)?;
/// assert!(contract.trait_exists("Erc20Permit"));
/// # Ok(())
/// # }
/// ```
pub fn build_generic(opts: &GenericOptions) -> Result<Contract, OptionsError> {
    match opts {
        GenericOptions::Erc20(opts) => erc20::build_erc20(opts),
        GenericOptions::Erc721(opts) => erc721::build_erc721(opts),
        GenericOptions::Erc1155(opts) => erc1155::build_erc1155(opts),
    }
}

/// Returns true when `opts` enable a feature that needs access control.
///
/// Building such options with `access = none` falls back to ownable.
#[must_use]
pub const fn is_access_control_required(opts: &GenericOptions) -> bool {
    match opts {
        GenericOptions::Erc20(opts) => erc20::is_access_control_required(opts),
        GenericOptions::Erc721(opts) => erc721::is_access_control_required(opts),
        GenericOptions::Erc1155(opts) => erc1155::is_access_control_required(opts),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
