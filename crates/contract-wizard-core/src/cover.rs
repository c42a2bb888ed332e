// crates/contract-wizard-core/src/cover.rs
// ============================================================================
// Module: Minimal Cover Selector
// Description: Greedy set cover over tagged items.
// Purpose: Shrink exhaustive fixture sets to a representative subset.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`find_cover`] repeatedly picks the item adding the most uncovered tags,
//! with ties going to the earliest item, and stops once no item adds a tag.
//! The union of the chosen items' tags always equals the union over all
//! items. The result is an approximation, not a minimum cover.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

// ============================================================================
// SECTION: Cover Selection
// ============================================================================

/// Selects a subset of `items` covering every tag; items keep pick order.
///
/// # Examples
/// ```
/// use contract_wizard_core::find_cover;
///
/// let items = vec![("A", vec!["t1"]), ("B", vec!["t1", "t2"]), ("C", vec!["t2"])];
/// let cover = find_cover(items, |(_, tags)| tags.clone());
/// let names: Vec<&str> = cover.iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, vec!["B"]);
/// ```
#[must_use]
pub fn find_cover<T, K, I, F>(items: Vec<T>, tags_of: F) -> Vec<T>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: Fn(&T) -> I,
{
    let mut candidates: Vec<Option<(T, BTreeSet<K>)>> = items
        .into_iter()
        .map(|item| {
            let tags = tags_of(&item).into_iter().collect();
            Some((item, tags))
        })
        .collect();
    let mut covered: BTreeSet<K> = BTreeSet::new();
    let mut chosen = Vec::new();
    loop {
        let mut best: Option<(usize, usize)> = None;
        for (position, candidate) in candidates.iter().enumerate() {
            let Some((_, tags)) = candidate else {
                continue;
            };
            let gain = tags.iter().filter(|tag| !covered.contains(*tag)).count();
            if gain > best.map_or(0, |(_, best_gain)| best_gain) {
                best = Some((position, gain));
            }
        }
        let Some((position, _)) = best else {
            break;
        };
        let Some((item, tags)) = candidates.get_mut(position).and_then(Option::take) else {
            break;
        };
        covered.extend(tags);
        chosen.push(item);
    }
    chosen
}
