// crates/contract-wizard-core/src/lib.rs
// ============================================================================
// Module: Contract Wizard Core Library
// Description: Public API surface for the contract generation core.
// Purpose: Expose the contract model, printer, resolver and combinatorics.
// Dependencies: crate::{alternatives, contract, cover, dependencies, fingerprint, format, naming, print}
// ============================================================================

//! ## Overview
//! Contract Wizard core turns declarative facts about a contract into
//! byte-stable source text. It is made of four cooperating parts:
//!
//! - the [`Contract`] model and builder, idempotent on every keyed add
//! - the deterministic [`Printer`]
//! - the dependency resolver ([`reachable`], [`materialize`], [`LibraryTable`])
//! - the fixture combinatorics ([`generate_alternatives`], [`find_cover`])
//!
//! Everything here is synchronous and in-memory. Callers may build and print
//! independent contracts in parallel without any shared state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod alternatives;
pub mod contract;
pub mod cover;
pub mod dependencies;
pub mod fingerprint;
pub mod format;
pub mod keyed_store;
pub mod naming;
pub mod print;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use alternatives::Alternative;
pub use alternatives::Alternatives;
pub use alternatives::Blueprint;
pub use alternatives::generate_alternatives;
pub use contract::Argument;
pub use contract::Constant;
pub use contract::Contract;
pub use contract::ContractFunction;
pub use contract::ContractName;
pub use contract::ErrorVariant;
pub use contract::FunctionSpec;
pub use contract::ImplementedTrait;
pub use contract::Import;
pub use contract::ImportOptions;
pub use contract::ReturnType;
pub use contract::Storage;
pub use contract::TraitSpec;
pub use contract::Variable;
pub use cover::find_cover;
pub use dependencies::DependencyError;
pub use dependencies::DependencyGraph;
pub use dependencies::LibraryTable;
pub use dependencies::SourceEntry;
pub use dependencies::materialize;
pub use dependencies::reachable;
pub use fingerprint::FingerprintError;
pub use fingerprint::fingerprint;
pub use keyed_store::KeyedStore;
pub use naming::NamingError;
pub use naming::escape_string;
pub use naming::to_identifier;
pub use print::Printer;
pub use print::PrinterConfig;
pub use print::print_contract;
