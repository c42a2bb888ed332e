// crates/contract-wizard-stylus/src/blueprints.rs
// ============================================================================
// Module: Option Blueprints
// Description: Candidate values per option key for every kind.
// Purpose: Define the option space enumerated by fixture generation.
// Dependencies: contract-wizard-core, serde_json
// ============================================================================

//! ## Overview
//! Blueprint keys follow the option record fields, in declaration order, so
//! enumeration varies the trailing `info` block fastest. Each record is
//! tagged with its kind before it is deserialized into [`GenericOptions`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use contract_wizard_core::Blueprint;
use contract_wizard_core::generate_alternatives;
use serde_json::Value;
use serde_json::json;

use crate::common::DEFAULT_NAME;
use crate::error::WizardError;
use crate::generic::GenericOptions;
use crate::generic::Kind;

// ============================================================================
// CONSTANTS: Candidates
// ============================================================================

/// Access modes enumerated for every kind.
const ACCESS_CANDIDATES: [&str; 3] = ["none", "ownable", "roles"];

/// Metadata URI enumerated for ERC-1155.
const SAMPLE_URI: &str = "https://example.com/api/item/{id}.json";

// ============================================================================
// SECTION: Blueprints
// ============================================================================

/// Info blocks enumerated for every kind.
fn info_candidates() -> [Value; 2] {
    [json!({}), json!({"security_contact": "security@example.com", "license": "WTFPL"})]
}

/// ERC-20 option space.
#[must_use]
pub fn erc20_blueprint() -> Blueprint {
    Blueprint::new()
        .with("name", [DEFAULT_NAME])
        .with_flag("burnable")
        .with_flag("pausable")
        .with_flag("permit")
        .with_flag("flash_mint")
        .with("premint", ["0", "1000"])
        .with("access", ACCESS_CANDIDATES)
        .with("info", info_candidates())
}

/// ERC-721 option space.
#[must_use]
pub fn erc721_blueprint() -> Blueprint {
    Blueprint::new()
        .with("name", [DEFAULT_NAME])
        .with_flag("burnable")
        .with_flag("enumerable")
        .with_flag("pausable")
        .with_flag("mintable")
        .with_flag("incremental")
        .with("access", ACCESS_CANDIDATES)
        .with("info", info_candidates())
}

/// ERC-1155 option space.
#[must_use]
pub fn erc1155_blueprint() -> Blueprint {
    Blueprint::new()
        .with("name", [DEFAULT_NAME])
        .with_flag("burnable")
        .with_flag("pausable")
        .with_flag("supply")
        .with("uri", ["", SAMPLE_URI])
        .with("access", ACCESS_CANDIDATES)
        .with("info", info_candidates())
}

/// Option space of `kind`.
#[must_use]
pub fn blueprint_for(kind: Kind) -> Blueprint {
    match kind {
        Kind::Erc20 => erc20_blueprint(),
        Kind::Erc721 => erc721_blueprint(),
        Kind::Erc1155 => erc1155_blueprint(),
    }
}

// ============================================================================
// SECTION: Enumeration
// ============================================================================

/// Enumerates option records for `kind`, or for every kind when `None`.
///
/// With `force_true` every on/off flag is pinned on, leaving only the
/// non-flag keys to vary.
///
/// # Errors
/// Returns [`WizardError::Json`] when a blueprint record does not match its
/// option record.
pub fn generate_options(
    kind: Option<Kind>,
    force_true: bool,
) -> Result<Vec<GenericOptions>, WizardError> {
    let mut out = Vec::new();
    for candidate in Kind::ALL {
        if kind.is_some_and(|selected| selected != candidate) {
            continue;
        }
        let mut blueprint = blueprint_for(candidate);
        if force_true {
            blueprint = blueprint.with_forced_true();
        }
        for mut record in generate_alternatives(&blueprint) {
            record.insert("kind".to_string(), Value::from(candidate.as_str()));
            let options = serde_json::from_value(Value::Object(record))
                .map_err(|err| WizardError::Json(err.to_string()))?;
            out.push(options);
        }
    }
    Ok(out)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
