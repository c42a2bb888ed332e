// crates/contract-wizard-core/tests/proptest_cover.rs
// ============================================================================
// Module: Cover Selector Property-Based Tests
// Description: Coverage completeness and greedy tie-breaking.
// Purpose: Ensure down-sampled fixture sets keep every tag.
// ============================================================================

//! Property-based tests for the minimal cover selector.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use contract_wizard_core::find_cover;
use proptest::prelude::*;

/// Tagged test item.
type Item = (usize, BTreeSet<u8>);

/// Union of all tags in `items`.
fn union(items: &[Item]) -> BTreeSet<u8> {
    items.iter().flat_map(|(_, tags)| tags.iter().copied()).collect()
}

#[test]
fn single_item_covering_everything_is_preferred() {
    let items = vec![
        (0, BTreeSet::from([1])),
        (1, BTreeSet::from([1, 2])),
        (2, BTreeSet::from([2])),
    ];
    let cover = find_cover(items, |(_, tags)| tags.clone());
    assert_eq!(cover.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn ties_go_to_the_first_item() {
    let items = vec![(0, BTreeSet::from([1])), (1, BTreeSet::from([2])), (2, BTreeSet::from([1]))];
    let cover = find_cover(items, |(_, tags)| tags.clone());
    assert_eq!(cover.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn items_without_tags_are_never_chosen() {
    let items: Vec<Item> = vec![(0, BTreeSet::new()), (1, BTreeSet::new())];
    assert!(find_cover(items, |(_, tags)| tags.clone()).is_empty());
}

proptest! {
    #[test]
    fn cover_keeps_every_tag(
        tag_sets in prop::collection::vec(prop::collection::btree_set(0_u8 .. 24, 0 .. 6), 0 .. 40),
    ) {
        let items: Vec<Item> = tag_sets.into_iter().enumerate().collect();
        let expected = union(&items);
        let cover = find_cover(items.clone(), |(_, tags)| tags.clone());
        prop_assert_eq!(union(&cover), expected);

        let ids: BTreeSet<usize> = cover.iter().map(|(id, _)| *id).collect();
        prop_assert_eq!(ids.len(), cover.len());
        prop_assert!(cover.len() <= items.len());
        for (id, tags) in &cover {
            prop_assert_eq!(&items[*id].1, tags);
            prop_assert!(!tags.is_empty());
        }
    }
}
