// crates/contract-wizard-core/src/dependencies.rs
// ============================================================================
// Module: Dependency Graph Resolver
// Description: Reachability closure and source materialization.
// Purpose: Compute every library source a generated contract needs.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A dependency graph maps a source identifier to the identifiers it depends
//! on directly. [`reachable`] computes the closure from a start node with a
//! breadth-first walk guarded by a visited set, so cyclic graphs terminate
//! and every node is visited once. [`materialize`] pairs each reachable node
//! with its content; a node without content is a table inconsistency and
//! fails with [`DependencyError::MissingSource`].
//!
//! [`LibraryTable`] is the serialized form of an external library: its root
//! module, its dependency table and its source contents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::VecDeque;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Adjacency map from a source identifier to its direct dependencies.
pub type DependencyGraph = BTreeMap<String, Vec<String>>;

/// Materialized source handed to downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Literal source content.
    pub content: String,
}

/// Dependency and content tables of an external library.
///
/// # Invariants
/// - Every node reachable through `dependencies` should have an entry in
///   `sources`; violations surface at materialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryTable {
    /// Root module prefix of the library, e.g. `openzeppelin_stylus`.
    pub root: String,
    /// Direct dependencies per source identifier.
    #[serde(default)]
    pub dependencies: DependencyGraph,
    /// Content per source identifier.
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
}

/// Dependency resolution failures.
///
/// # Invariants
/// - Every variant is fatal for the current build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    /// A reachable node has no content entry.
    #[error("source not found for dependency node {node}")]
    MissingSource {
        /// Offending node identifier.
        node: String,
    },
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Returns every node reachable from `start`, including `start`.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// use contract_wizard_core::reachable;
///
/// let graph = BTreeMap::from([
///     ("A".to_string(), vec!["B".to_string()]),
///     ("B".to_string(), vec!["A".to_string()]),
/// ]);
/// let nodes: Vec<String> = reachable(&graph, "A").into_iter().collect();
/// assert_eq!(nodes, vec!["A", "B"]);
/// ```
#[must_use]
pub fn reachable(graph: &DependencyGraph, start: &str) -> BTreeSet<String> {
    let mut visited = BTreeSet::from([start.to_string()]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(node) = queue.pop_front() {
        for next in graph.get(&node).into_iter().flatten() {
            if visited.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    visited
}

/// Pairs each node with its content.
///
/// # Errors
/// Returns [`DependencyError::MissingSource`] for the first node, in
/// iteration order, without a content entry.
pub fn materialize<'a, I>(
    contents: &BTreeMap<String, String>,
    nodes: I,
) -> Result<BTreeMap<String, SourceEntry>, DependencyError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut out = BTreeMap::new();
    for node in nodes {
        let content = contents.get(node).ok_or_else(|| DependencyError::MissingSource {
            node: node.clone(),
        })?;
        out.insert(
            node.clone(),
            SourceEntry {
                content: content.clone(),
            },
        );
    }
    Ok(out)
}

impl LibraryTable {
    /// Resolves the sources needed by a synthetic artifact node.
    ///
    /// The artifact's own edges are merged over the library's table, the
    /// closure is computed from `artifact`, and the artifact itself is left
    /// out of the result.
    ///
    /// # Errors
    /// Returns [`DependencyError::MissingSource`] when a reachable library
    /// node has no content.
    pub fn resolve_for(
        &self,
        artifact: &str,
        artifact_edges: Vec<String>,
    ) -> Result<BTreeMap<String, SourceEntry>, DependencyError> {
        let mut graph = self.dependencies.clone();
        graph.insert(artifact.to_string(), artifact_edges);
        let nodes = reachable(&graph, artifact);
        materialize(&self.sources, nodes.iter().filter(|node| node.as_str() != artifact))
    }
}
