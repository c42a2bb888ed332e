// crates/contract-wizard-stylus/src/lib.rs
// ============================================================================
// Module: Contract Wizard Stylus Library
// Description: Public API surface for Stylus token builders and fixtures.
// Purpose: Expose kind builders, fixture generation and import resolution.
// Dependencies: contract-wizard-core, serde, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! Turns option records into [`Contract`](contract_wizard_core::Contract)
//! models for three token kinds (ERC-20, ERC-721, ERC-1155) and builds the
//! fixture corpus used to validate printed output.
//!
//! - [`build_generic`] dispatches a kind-tagged [`GenericOptions`] record
//! - [`generate_options`] enumerates every record of the option space
//! - [`generate_sources`] and [`write_generated_sources`] build, select and
//!   print fixtures
//! - [`get_imports`] resolves the library sources a contract compiles
//!   against
//!
//! Option problems surface as [`OptionsError`]; every other failure is a
//! [`WizardError`]. Progress events go to a [`WizardLogSink`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod access;
pub mod blueprints;
pub mod common;
pub mod config;
pub mod erc20;
pub mod erc721;
pub mod erc1155;
pub mod error;
pub mod generic;
pub mod imports;
pub mod input;
pub mod pausable;
pub mod sources;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use blueprints::blueprint_for;
pub use blueprints::generate_options;
pub use common::Access;
pub use common::Info;
pub use config::ConfigError;
pub use config::WizardConfig;
pub use erc20::Erc20Options;
pub use erc721::Erc721Options;
pub use erc1155::Erc1155Options;
pub use error::OptionsError;
pub use error::WizardError;
pub use generic::GenericOptions;
pub use generic::Kind;
pub use generic::build_generic;
pub use generic::is_access_control_required;
pub use imports::get_imports;
pub use imports::resolve_imports;
pub use input::load_library;
pub use input::load_options;
pub use sources::GeneratedContract;
pub use sources::GeneratedSource;
pub use sources::GenerationParams;
pub use sources::Subset;
pub use sources::build_contracts;
pub use sources::generate_contract_subset;
pub use sources::generate_sources;
pub use sources::write_generated_sources;
pub use telemetry::FileLogSink;
pub use telemetry::NoopLogSink;
pub use telemetry::StderrLogSink;
pub use telemetry::WizardLogSink;
