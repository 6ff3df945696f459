use tracing::debug;

use crate::TUNED_PARAMS;

use super::median;

/// Splits `v` so that everything before the returned index is `<=` everything from it onward.
///
/// The pivot is the middle element. A split landing outside the central band is redone once
/// with a median-of-medians pivot. Requires `v.len() >= 2`; the result lies in `1..v.len()`.
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    debug_assert!(v.len() >= 2);

    let r = v.len() - 1;
    let mut pivot = r / 2;
    let mut retried = false;
    loop {
        let split = hoare_partition(v, pivot);
        if retried || !is_bad_split(split, r) {
            return split;
        }

        debug!(
            len = v.len(),
            split,
            band = r / TUNED_PARAMS.band_divisor,
            "lopsided partition, retrying with median of medians"
        );
        pivot = median::median_of_medians(v);
        retried = true;
    }
}

#[inline]
fn is_bad_split(split: usize, r: usize) -> bool {
    let band = r / TUNED_PARAMS.band_divisor;
    band > TUNED_PARAMS.band_floor && !(band < split && split < r - band)
}

/// Hoare's two-sided scan around the value at `pivot`.
///
/// Elements are never copied out, so the pivot is followed by index through the swaps.
fn hoare_partition<T: Ord>(v: &mut [T], mut pivot: usize) -> usize {
    let r = v.len() - 1;
    let mut i = 0;
    let mut j = r;
    loop {
        while i < r && v[i] < v[pivot] {
            i += 1;
        }
        while j > 0 && v[pivot] < v[j] {
            j -= 1;
        }
        if i > j {
            return i;
        }
        if i == j {
            // Met on an element equal to the pivot: it stays on the left.
            return i + 1;
        }

        v.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }
        i += 1;
        j -= 1;
    }
}
