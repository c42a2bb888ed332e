// crates/contract-wizard-core/src/alternatives.rs
// ============================================================================
// Module: Alternatives Enumerator
// Description: Lazy cartesian product over option blueprints.
// Purpose: Enumerate every option combination for fixture generation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`Blueprint`] lists option keys in declaration order, each with its
//! candidate values. [`generate_alternatives`] walks the full cartesian
//! product lazily as an odometer: the **last** declared key varies fastest
//! and the first declared key slowest. Each call starts a fresh walk, and
//! the iterator holds one cursor per key regardless of the product size.
//!
//! An empty blueprint yields exactly one empty record. A key with no
//! candidates yields no records at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Blueprint
// ============================================================================

/// One option record produced by the enumerator.
pub type Alternative = Map<String, Value>;

/// Ordered option keys with their candidate values.
///
/// # Invariants
/// - Keys keep declaration order; a repeated key replaces the earlier
///   candidates in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprint {
    /// Keys and candidates in declaration order.
    entries: Vec<(String, Vec<Value>)>,
}

impl Blueprint {
    /// Creates an empty blueprint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declares `key` with its candidate values.
    #[must_use]
    pub fn with<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push(key, values.into_iter().map(Into::into).collect());
        self
    }

    /// Declares `key` with `[true, false]`.
    #[must_use]
    pub fn with_flag(self, key: &str) -> Self {
        self.with(key, [true, false])
    }

    /// Declares or replaces `key` in place.
    pub fn push(&mut self, key: &str, values: Vec<Value>) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| existing == key) {
            entry.1 = values;
        } else {
            self.entries.push((key.to_string(), values));
        }
    }

    /// Iterates declared keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the product of candidate counts, or `None` on overflow.
    #[must_use]
    pub fn cardinality(&self) -> Option<usize> {
        self.entries.iter().try_fold(1_usize, |acc, (_, values)| acc.checked_mul(values.len()))
    }

    /// Returns a copy where every `[true, false]` list becomes `[true]`.
    #[must_use]
    pub fn with_forced_true(&self) -> Self {
        let both = [Value::Bool(true), Value::Bool(false)];
        let entries = self
            .entries
            .iter()
            .map(|(key, values)| {
                let values =
                    if values.as_slice() == both { vec![Value::Bool(true)] } else { values.clone() };
                (key.clone(), values)
            })
            .collect();
        Self {
            entries,
        }
    }
}

// ============================================================================
// SECTION: Enumeration
// ============================================================================

/// Starts a fresh enumeration of `blueprint`.
///
/// # Examples
/// ```
/// use contract_wizard_core::Blueprint;
/// use contract_wizard_core::generate_alternatives;
/// use serde_json::Value;
///
/// let blueprint = Blueprint::new().with("x", [1, 2]).with("y", [true, false]);
/// let records: Vec<_> = generate_alternatives(&blueprint).collect();
/// assert_eq!(records.len(), 4);
/// assert_eq!(records[0]["x"], Value::from(1));
/// assert_eq!(records[1]["y"], Value::from(false));
/// assert_eq!(records[2]["x"], Value::from(2));
/// ```
#[must_use]
pub fn generate_alternatives(blueprint: &Blueprint) -> Alternatives<'_> {
    let remaining = blueprint.cardinality().unwrap_or(usize::MAX);
    Alternatives {
        blueprint,
        cursor: vec![0; blueprint.entries.len()],
        remaining,
    }
}

/// Lazy iterator over a blueprint's cartesian product.
#[derive(Debug, Clone)]
pub struct Alternatives<'a> {
    /// Blueprint being enumerated.
    blueprint: &'a Blueprint,
    /// Candidate index per key.
    cursor: Vec<usize>,
    /// Records left to yield.
    remaining: usize,
}

impl Alternatives<'_> {
    /// Advances the cursor; the last key turns fastest.
    fn advance(&mut self) {
        for (position, (_, values)) in self.blueprint.entries.iter().enumerate().rev() {
            let Some(slot) = self.cursor.get_mut(position) else {
                return;
            };
            *slot += 1;
            if *slot < values.len() {
                return;
            }
            *slot = 0;
        }
    }
}

impl Iterator for Alternatives<'_> {
    type Item = Alternative;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let mut record = Map::new();
        for ((key, values), index) in self.blueprint.entries.iter().zip(&self.cursor) {
            record.insert(key.clone(), values.get(*index)?.clone());
        }
        self.remaining -= 1;
        self.advance();
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Alternatives<'_> {}
