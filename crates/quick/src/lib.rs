//! In-place quicksort, partial sort and quickselect over slices of `T: Ord`.
//!
//! All operations share one Hoare partition. When a partition comes out lopsided, the pivot is
//! replaced by a median-of-medians estimate and the scan is redone, which keeps adversarial
//! inputs away from quadratic behavior. Nothing allocates.

mod algorithms;

use thiserror::Error;

/// Cutoffs and guard constants shared by every driver.
#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub selection_threshold: usize,
    pub band_divisor: usize,
    pub band_floor: usize,
    pub group_len: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 32,
    selection_threshold: 4,
    band_divisor: 16,
    band_floor: 4,
    group_len: 5,
};

/// A requested index or count lies outside the slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("index {index} out of range for slice of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Sorts the slice in ascending order.
///
/// *O*(*n* \* log(*n*)) expected time, *O*(log(*n*)) stack.
pub fn sort<T: Ord>(v: &mut [T]) {
    algorithms::quicksort::quicksort(v);
}

/// Sorts the first `k` elements of the slice, leaving them no greater than any of the rest.
///
/// The remaining elements end up in unspecified order. *O*(*n* + *k* \* log(*k*)) expected time.
pub fn sort_first<T: Ord>(v: &mut [T], k: usize) -> Result<(), OutOfRange> {
    if k > v.len() {
        return Err(OutOfRange { index: k, len: v.len() });
    }
    algorithms::partial::sort_first(v, k);
    Ok(())
}

/// Sorts the last `k` elements of the slice, leaving them no less than any of the rest.
pub fn sort_last<T: Ord>(v: &mut [T], k: usize) -> Result<(), OutOfRange> {
    if k > v.len() {
        return Err(OutOfRange { index: k, len: v.len() });
    }
    algorithms::partial::sort_last(v, k);
    Ok(())
}

/// Moves the element of rank `k` to index `k` and returns it.
///
/// Afterwards everything before `k` is `<=` the returned element and everything after is `>=`.
/// *O*(*n*) expected time.
pub fn select<T: Ord>(v: &mut [T], k: usize) -> Result<&mut T, OutOfRange> {
    if k >= v.len() {
        return Err(OutOfRange { index: k, len: v.len() });
    }
    algorithms::select::select(v, k);
    Ok(&mut v[k])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const SCENARIO: [u32; 32] = [
        15, 3, 2, 31, 19, 21, 6, 7, 16, 4, 17, 30, 10, 11, 5, 18, 25, 12, 8, 28, 14, 29, 22, 0, 24,
        13, 1, 20, 26, 27, 23, 9,
    ];

    #[test]
    fn scenario_sort() {
        let mut data = SCENARIO;
        sort(&mut data);
        let expected: Vec<u32> = (0..32).collect();
        assert_eq!(data.to_vec(), expected);
    }

    #[test]
    fn scenario_select() {
        let mut data = SCENARIO;
        assert_eq!(select(&mut data, 3), Ok(&mut 3));
    }

    #[test]
    fn scenario_sort_first() {
        let mut data = SCENARIO;
        sort_first(&mut data, 11).unwrap();
        assert_eq!(data[..11], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut empty: [u32; 0] = [];
        sort(&mut empty);
        sort_first(&mut empty, 0).unwrap();
        sort_last(&mut empty, 0).unwrap();
        assert_eq!(select(&mut empty, 0), Err(OutOfRange { index: 0, len: 0 }));

        let mut one = [7_u32];
        sort(&mut one);
        sort_first(&mut one, 1).unwrap();
        sort_last(&mut one, 1).unwrap();
        assert_eq!(select(&mut one, 0), Ok(&mut 7));
        assert_eq!(one, [7]);
    }

    #[test]
    fn out_of_range_leaves_slice_untouched() {
        let mut data = SCENARIO;
        assert_eq!(
            sort_first(&mut data, 33),
            Err(OutOfRange { index: 33, len: 32 })
        );
        assert_eq!(
            sort_last(&mut data, 40),
            Err(OutOfRange { index: 40, len: 32 })
        );
        assert_eq!(select(&mut data, 32), Err(OutOfRange { index: 32, len: 32 }));
        assert_eq!(data, SCENARIO);
    }

    #[test]
    fn out_of_range_message() {
        let err = OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for slice of length 3");
    }

    #[test]
    fn boundary_counts_are_accepted() {
        let mut data = SCENARIO;
        sort_first(&mut data, 32).unwrap();
        assert!(data.is_sorted());

        let mut data = SCENARIO;
        sort_last(&mut data, 32).unwrap();
        assert!(data.is_sorted());

        let mut data = SCENARIO;
        assert_eq!(select(&mut data, 31), Ok(&mut 31));
    }

    #[test]
    fn fixed_seed_operations_agree_with_std() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 5, 31, 32, 33, 100, 1000, 4096] {
            let base: Vec<u64> = (0..size).map(|_| rng.random_range(0..(size as u64))).collect();
            let mut expected = base.clone();
            expected.sort_unstable();

            let mut data = base.clone();
            sort(&mut data);
            assert_eq!(data, expected, "sort size={size}");

            let k = rng.random_range(0..size);
            let mut data = base.clone();
            assert_eq!(*select(&mut data, k).unwrap(), expected[k], "select size={size} k={k}");

            let mut data = base.clone();
            sort_first(&mut data, k).unwrap();
            assert_eq!(data[..k], expected[..k], "sort_first size={size} k={k}");

            let mut data = base.clone();
            sort_last(&mut data, k).unwrap();
            assert_eq!(data[size - k..], expected[size - k..], "sort_last size={size} k={k}");
        }
    }
}
