//! Sorting comparison logic
//!
//! Pure functions for comparing repositories across the four sort keys.

use crate::model::{Repository, SortKey, SortOrder};
use std::cmp::Ordering;

/// Compare two repositories by `key`, ascending.
///
/// # Sort Rules
/// - `Stars`, `Forks`: numeric
/// - `CreatedAt`, `UpdatedAt`: parsed instant; unparseable timestamps compare
///   as the Unix epoch
/// - No secondary key: ties compare `Equal`
pub fn compare_by_key(a: &Repository, b: &Repository, key: SortKey) -> Ordering {
    match key {
        SortKey::Stars => a.stars.cmp(&b.stars),
        SortKey::Forks => a.forks.cmp(&b.forks),
        SortKey::CreatedAt => a.created_at.sort_instant().cmp(&b.created_at.sort_instant()),
        SortKey::UpdatedAt => a.updated_at.sort_instant().cmp(&b.updated_at.sort_instant()),
    }
}

/// Compare two repositories by `key` in direction `order`.
///
/// Descending flips the sign of the ascending result; ties stay `Equal` in
/// both directions.
pub fn compare(a: &Repository, b: &Repository, key: SortKey, order: SortOrder) -> Ordering {
    let result = compare_by_key(a, b, key);
    match order {
        SortOrder::Ascending => result,
        SortOrder::Descending => result.reverse(),
    }
}

/// Stable in-place sort of record references.
///
/// Tied records keep their incoming relative order, so re-sorting unchanged
/// input never reshuffles them.
pub fn sort_records(records: &mut [&Repository], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| compare(a, b, key, order));
}

/// Stable in-place sort of indices into `records`.
pub fn sort_indices(indices: &mut [usize], records: &[Repository], key: SortKey, order: SortOrder) {
    indices.sort_by(|&a, &b| compare(&records[a], &records[b], key, order));
}
