//! Input shapes shared by the tests and benches of the ordering crates.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::default_rng;

pub fn zeros(n: usize) -> Vec<u64> {
    vec![0; n]
}

pub fn sorted(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

pub fn reversed(n: usize) -> Vec<u64> {
    (0..n as u64).rev().collect()
}

pub fn permutation(n: usize) -> Vec<u64> {
    let mut data = sorted(n);
    data.shuffle(&mut default_rng());
    data
}

/// A shuffled 0/1 alphabet.
pub fn bits(n: usize) -> Vec<u64> {
    let mut data = permutation(n);
    for x in &mut data {
        *x &= 1;
    }
    data
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(n: usize) -> Vec<u64> {
    let half = n / 2;
    let mut data = sorted(half);
    data.extend(reversed(half));
    data
}

pub fn random_u64(n: usize) -> Vec<u64> {
    let mut rng = default_rng();
    (0..n).map(|_| rng.random()).collect()
}

/// Musser's median-of-3 killer, which also drives middle-element pivots to the edges.
pub fn killer(n: usize) -> Vec<u64> {
    let mut data = vec![0; n];
    let mut len = n;
    if len % 2 != 0 {
        data[len - 1] = len as u64;
        len -= 1;
    }

    let m = len / 2;
    for i in 0..m {
        data[i] = if i % 2 == 0 {
            (i + 1) as u64
        } else {
            (i + m + (m & 1)) as u64
        };
        data[m + i] = ((i + 1) * 2) as u64;
    }
    data
}
