// crates/contract-wizard-stylus/src/sources.rs
// ============================================================================
// Module: Fixture Sources
// Description: Builds, selects, prints and writes fixture contracts.
// Purpose: Produce the contract corpus used to validate generated output.
// Dependencies: contract-wizard-core, serde
// ============================================================================

//! ## Overview
//! Fixture generation runs in four steps:
//! 1. enumerate option records ([`generate_options`](crate::generate_options))
//! 2. build each record, skipping records rejected with an [`OptionsError`]
//!    and aborting on any other failure
//! 3. optionally reduce the set to a minimal cover of traits, function
//!    signatures and imports
//! 4. print, and optionally write, one source per contract
//!
//! A fixture id is the lowercase hex SHA-256 of the canonical JSON of its
//! option record. In unique-name mode contracts are rebuilt under the names
//! `Contract1`, `Contract2`, ... in selection order, so code lines derived
//! from the name stay consistent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use contract_wizard_core::Contract;
use contract_wizard_core::Import;
use contract_wizard_core::Printer;
use contract_wizard_core::PrinterConfig;
use contract_wizard_core::find_cover;
use contract_wizard_core::fingerprint;
use serde::Deserialize;
use serde::Serialize;

use crate::blueprints::generate_options;
use crate::error::OptionsError;
use crate::error::WizardError;
use crate::generic::GenericOptions;
use crate::generic::Kind;
use crate::generic::build_generic;
use crate::telemetry::OptionSkippedEvent;
use crate::telemetry::SourcesGeneratedEvent;
use crate::telemetry::WizardLogSink;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// Which generated contracts are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subset {
    /// Every buildable option record.
    #[default]
    All,
    /// A greedy cover of traits, function signatures and imports.
    MinimalCover,
}

impl Subset {
    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::MinimalCover => "minimal-cover",
        }
    }
}

/// Inputs to source generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationParams {
    /// Subset selection.
    pub subset: Subset,
    /// Restricts generation to one kind.
    pub kind: Option<Kind>,
    /// Renames contracts to `Contract<N>` and names files after them.
    pub unique_name: bool,
    /// Pins every on/off option to `true` during enumeration.
    pub force_true: bool,
    /// Header values injected into the printer.
    pub printer: PrinterConfig,
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Built fixture contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContract {
    /// Hex SHA-256 of the canonical option record.
    pub id: String,
    /// Option record the contract was built from.
    pub options: GenericOptions,
    /// Built contract.
    pub contract: Contract,
}

/// Printed fixture contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Hex SHA-256 of the canonical option record.
    pub id: String,
    /// Option record the contract was built from.
    pub options: GenericOptions,
    /// Printed contract, possibly renamed.
    pub contract: Contract,
    /// Source text.
    pub source: String,
}

// ============================================================================
// SECTION: Building
// ============================================================================

/// Builds every enumerated option record of `kind` and applies `subset`.
///
/// `force_true` is passed to [`generate_options`].
///
/// # Errors
/// Returns [`WizardError`] when enumeration or hashing fails.
pub fn generate_contract_subset(
    subset: Subset,
    kind: Option<Kind>,
    force_true: bool,
    sink: &dyn WizardLogSink,
) -> Result<Vec<GeneratedContract>, WizardError> {
    build_contracts(generate_options(kind, force_true)?, subset, sink)
}

/// Builds the given option records and applies `subset`.
///
/// Records rejected with an [`OptionsError`] are skipped and reported to
/// `sink`.
///
/// # Errors
/// Returns [`WizardError::Fingerprint`] when an option record has no
/// canonical form.
pub fn build_contracts<I>(
    options: I,
    subset: Subset,
    sink: &dyn WizardLogSink,
) -> Result<Vec<GeneratedContract>, WizardError>
where
    I: IntoIterator<Item = GenericOptions>,
{
    let mut contracts = Vec::new();
    for options in options {
        let id = fixture_id(&options)?;
        match build_generic(&options) {
            Ok(contract) => contracts.push(GeneratedContract {
                id,
                options,
                contract,
            }),
            Err(err) => skip(sink, &id, options.kind(), &err),
        }
    }
    Ok(match subset {
        Subset::All => contracts,
        Subset::MinimalCover => find_cover(contracts, cover_tags),
    })
}

/// Reports a skipped record.
fn skip(sink: &dyn WizardLogSink, id: &str, kind: Kind, err: &OptionsError) {
    sink.record_option_skipped(&OptionSkippedEvent::new(id, kind, err));
}

/// Returns the fixture id of an option record.
///
/// # Errors
/// Returns [`WizardError::Fingerprint`] when canonicalization fails.
pub fn fixture_id(options: &GenericOptions) -> Result<String, WizardError> {
    Ok(fingerprint(options)?)
}

/// Coverage tags: trait names, `Trait::signature` per function, and the full
/// path of every import.
#[must_use]
pub fn cover_tags(generated: &GeneratedContract) -> Vec<String> {
    let mut tags = Vec::new();
    for implemented in generated.contract.traits() {
        tags.push(implemented.name.clone());
        tags.extend(
            implemented
                .function_signatures()
                .map(|signature| format!("{}::{signature}", implemented.name)),
        );
    }
    tags.extend(generated.contract.imports().map(Import::full_path));
    tags
}

// ============================================================================
// SECTION: Printing
// ============================================================================

/// Builds, selects and prints fixture contracts.
///
/// # Errors
/// Returns [`WizardError`] when enumeration or hashing fails, or when a
/// renamed record is rejected.
pub fn generate_sources(
    params: &GenerationParams,
    sink: &dyn WizardLogSink,
) -> Result<Vec<GeneratedSource>, WizardError> {
    let printer = Printer::new(params.printer.clone());
    let contracts =
        generate_contract_subset(params.subset, params.kind, params.force_true, sink)?;
    let mut sources = Vec::with_capacity(contracts.len());
    for (index, generated) in contracts.into_iter().enumerate() {
        let GeneratedContract {
            id,
            options,
            contract,
        } = generated;
        let contract = if params.unique_name {
            let renamed = options.clone().with_name(&format!("Contract{}", index + 1));
            build_generic(&renamed)?
        } else {
            contract
        };
        let source = printer.render(&contract);
        sources.push(GeneratedSource {
            id,
            options,
            contract,
            source,
        });
    }
    Ok(sources)
}

/// Writes one `<name>.rs` file per fixture into `dir` and returns the names.
///
/// Files are named after the fixture id, or after the contract in
/// unique-name mode. The directory is created when absent.
///
/// # Errors
/// Returns [`WizardError::Io`] on filesystem failures, or any error from
/// [`generate_sources`].
pub fn write_generated_sources(
    dir: &Path,
    params: &GenerationParams,
    sink: &dyn WizardLogSink,
) -> Result<Vec<String>, WizardError> {
    fs::create_dir_all(dir).map_err(|err| WizardError::Io(err.to_string()))?;
    let mut names = Vec::new();
    for generated in generate_sources(params, sink)? {
        let name = if params.unique_name {
            generated.contract.name().identifier.clone()
        } else {
            generated.id
        };
        fs::write(dir.join(format!("{name}.rs")), generated.source)
            .map_err(|err| WizardError::Io(err.to_string()))?;
        names.push(name);
    }
    sink.record_sources_generated(&SourcesGeneratedEvent::new(
        dir,
        names.len(),
        params.subset,
        params.kind,
        params.unique_name,
    ));
    Ok(names)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
