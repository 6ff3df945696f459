use crate::TUNED_PARAMS;

use super::{common, partition};

/// Moves the element of rank `k` to index `k`, with smaller elements before it and larger after.
///
/// Requires `k < v.len()`.
pub fn select<T: Ord>(mut v: &mut [T], mut k: usize) {
    debug_assert!(k < v.len());

    while k >= TUNED_PARAMS.selection_threshold {
        let split = partition::partition(v);
        if split > k {
            v = &mut v[..split];
        } else {
            v = &mut v[split..];
            k -= split;
        }
    }
    common::selection_sort(v, k + 1);
}
