// crates/contract-wizard-stylus/src/imports.rs
// ============================================================================
// Module: Import Resolution
// Description: Library sources required by a generated contract.
// Purpose: Ship a contract together with the library modules it compiles against.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! A contract is modelled as a synthetic source `<Identifier>.rs` whose
//! direct dependencies are the library modules it imports. An import counts
//! when its container path is the library root or lies below it; a nested
//! imported name (`introspection::erc165::IErc165`) extends the module path
//! by its leading segments. The closure is then resolved against the
//! library table, leaving the synthetic source out.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use contract_wizard_core::Contract;
use contract_wizard_core::DependencyError;
use contract_wizard_core::Import;
use contract_wizard_core::LibraryTable;
use contract_wizard_core::SourceEntry;

use crate::error::WizardError;
use crate::telemetry::ImportsResolvedEvent;
use crate::telemetry::WizardLogSink;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Returns the library sources `contract` depends on, keyed by module path.
///
/// # Errors
/// Returns [`DependencyError::MissingSource`] when a reachable module has no
/// content in `library`.
pub fn get_imports(
    contract: &Contract,
    library: &LibraryTable,
) -> Result<BTreeMap<String, SourceEntry>, DependencyError> {
    let artifact = format!("{}.rs", contract.name().identifier);
    let edges: BTreeSet<String> =
        contract.imports().filter_map(|import| library_module(import, &library.root)).collect();
    library.resolve_for(&artifact, edges.into_iter().collect())
}

/// Resolves imports like [`get_imports`] and records the outcome.
///
/// # Errors
/// Returns [`WizardError::Dependency`] when the library table is inconsistent.
pub fn resolve_imports(
    contract: &Contract,
    library: &LibraryTable,
    sink: &dyn WizardLogSink,
) -> Result<BTreeMap<String, SourceEntry>, WizardError> {
    let sources = get_imports(contract, library)?;
    sink.record_imports_resolved(&ImportsResolvedEvent::new(
        &contract.name().identifier,
        &library.root,
        sources.len(),
    ));
    Ok(sources)
}

/// Module path an import refers to, when it belongs to the library.
fn library_module(import: &Import, root: &str) -> Option<String> {
    let container = import.container_path.as_str();
    let inside = container == root
        || container.strip_prefix(root).is_some_and(|rest| rest.starts_with("::"));
    if !inside {
        return None;
    }
    let mut path = container.to_string();
    if let Some((leading, _)) = import.name.rsplit_once("::") {
        path.push_str("::");
        path.push_str(leading);
    }
    Some(path)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
