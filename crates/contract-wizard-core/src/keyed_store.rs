// crates/contract-wizard-core/src/keyed_store.rs
// ============================================================================
// Module: Keyed Collection Store
// Description: Insertion-ordered map with insert-if-absent semantics.
// Purpose: Give every model collection a deterministic iteration order.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`KeyedStore`] keeps entries in the order they were first inserted and
//! indexes them by key. Re-inserting an existing key never replaces the stored
//! value, which is what makes every builder operation on the contract model
//! idempotent. Iteration order never depends on key ordering or hashing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::collections::BTreeMap;

// ============================================================================
// SECTION: Keyed Store
// ============================================================================

/// Insertion-ordered collection keyed by a unique key.
///
/// # Invariants
/// - Each key appears at most once.
/// - `index[key]` is the position of that key's entry in `entries`.
/// - Entries are never removed or reordered.
///
/// # Examples
/// ```
/// use contract_wizard_core::KeyedStore;
///
/// let mut store = KeyedStore::new();
/// assert!(store.insert_if_absent("b", 1));
/// assert!(store.insert_if_absent("a", 2));
/// assert!(!store.insert_if_absent("b", 3));
/// let keys: Vec<_> = store.keys().copied().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(store.get("b"), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedStore<K, V> {
    /// Entries in first-insertion order.
    entries: Vec<(K, V)>,
    /// Key to entry position.
    index: BTreeMap<K, usize>,
}

impl<K, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V> KeyedStore<K, V> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when `key` is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let position = *self.index.get(key)?;
        self.entries.get(position).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let position = *self.index.get(key)?;
        self.entries.get_mut(position).map(|(_, value)| value)
    }

    /// Inserts `value` under `key` unless the key already exists.
    ///
    /// Returns true when the entry was newly inserted. An existing entry is
    /// left untouched and `value` is dropped.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        true
    }

    /// Returns the value under `key`, inserting `make()` first when absent.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let position = if let Some(position) = self.index.get(&key) {
            *position
        } else {
            let position = self.entries.len();
            self.index.insert(key.clone(), position);
            self.entries.push((key, make()));
            position
        };
        &mut self.entries[position].1
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
