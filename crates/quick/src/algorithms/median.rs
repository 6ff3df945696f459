use crate::TUNED_PARAMS;

use super::{common, select};

/// Picks a pivot guaranteed to lie in the middle 40% of `v` and returns its index.
///
/// Each full group of five is sorted and its median swapped into the front of `v`, so the
/// candidates overwrite groups that were already consumed. A trailing partial group is skipped.
/// The median of the candidates is then found with quickselect.
pub fn median_of_medians<T: Ord>(v: &mut [T]) -> usize {
    let group = TUNED_PARAMS.group_len;
    let mut m = 0;
    let mut i = 0;
    while i + group <= v.len() {
        common::insertion_sort(&mut v[i..i + group]);
        v.swap(m, i + group / 2);
        m += 1;
        i += group;
    }
    if m < 2 {
        return 0;
    }

    let mid = m / 2;
    select::select(&mut v[..m], mid);
    mid
}
