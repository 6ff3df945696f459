use crate::TUNED_PARAMS;

use super::{common, partition, quicksort, select};

/// Sorts the `k` smallest elements into the front of `v`. Requires `k <= v.len()`.
pub fn sort_first<T: Ord>(mut v: &mut [T], mut k: usize) {
    debug_assert!(k <= v.len());

    while k > TUNED_PARAMS.selection_threshold {
        let split = partition::partition(v);
        if split > k {
            v = &mut v[..split];
        } else {
            // The whole left side belongs to the first `k`.
            let (left, right) = v.split_at_mut(split);
            quicksort::quicksort(left);
            v = right;
            k -= split;
        }
    }
    common::selection_sort(v, k);
}

/// Sorts the `k` largest elements into the back of `v`. Requires `k <= v.len()`.
pub fn sort_last<T: Ord>(v: &mut [T], k: usize) {
    debug_assert!(k <= v.len());

    if k == 0 {
        return;
    }
    let first = v.len() - k;
    select::select(v, first);
    quicksort::quicksort(&mut v[first + 1..]);
}
