// Base cases shared by the drivers.

#[inline]
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j] < v[j - 1] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Places the `k` smallest elements at the front of `v`, in order.
#[inline]
pub fn selection_sort<T: Ord>(v: &mut [T], k: usize) {
    debug_assert!(k <= v.len());

    for i in 0..k {
        let mut min = i;
        for j in (i + 1)..v.len() {
            if v[j] < v[min] {
                min = j;
            }
        }
        v.swap(i, min);
    }
}
