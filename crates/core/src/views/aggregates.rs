//! Sums and counts over fetched collections

use std::collections::BTreeMap;

/// Sum of `value` over `items`.
pub fn total<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>, value: impl Fn(&T) -> f64) -> f64 {
    items.into_iter().map(value).sum()
}

/// Per-key sums, ordered by key for stable rendering.
pub fn totals_by<'a, T: 'a, K: Ord>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> BTreeMap<K, f64> {
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(key(item)).or_insert(0.0) += value(item);
    }
    totals
}

/// Per-key counts, ordered by key.
pub fn count_by<'a, T: 'a, K: Ord>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}
