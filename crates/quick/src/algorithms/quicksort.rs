use crate::TUNED_PARAMS;

use super::{common, partition};

pub fn quicksort<T: Ord>(mut v: &mut [T]) {
    while v.len() > TUNED_PARAMS.insertion_threshold {
        let split = partition::partition(v);
        let (left, right) = v.split_at_mut(split);

        // Recurse into the shorter side and loop on the longer one to keep the stack logarithmic.
        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }

    common::insertion_sort(v);
}
