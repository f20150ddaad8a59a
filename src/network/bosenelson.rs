//! Bose-Nelson merge insertion network
//!
//! Sorts each half recursively, then merges two sorted runs of possibly
//! unequal length by splitting both near their midpoints and merging the
//! quarter runs. Runs of length one and two merge directly.

use super::{ComparePair, Network};

pub fn bose_nelson(n: usize) -> Network {
    let mut pairs = Vec::new();
    split(&mut pairs, 0, n);
    Network::new(n, pairs)
}

fn split(pairs: &mut Vec<ComparePair>, i: usize, len: usize) {
    if len >= 2 {
        let mid = len / 2;
        split(pairs, i, mid);
        split(pairs, i + mid, len - mid);
        merge(pairs, i, mid, i + mid, len - mid);
    }
}

/// Merge the sorted runs `[i, i + len_i)` and `[j, j + len_j)`
fn merge(pairs: &mut Vec<ComparePair>, i: usize, len_i: usize, j: usize, len_j: usize) {
    match (len_i, len_j) {
        (1, 1) => pairs.push(ComparePair::new(i, j)),
        (1, 2) => {
            pairs.push(ComparePair::new(i, j + 1));
            pairs.push(ComparePair::new(i, j));
        }
        (2, 1) => {
            pairs.push(ComparePair::new(i, j));
            pairs.push(ComparePair::new(i + 1, j));
        }
        _ => {
            let i_mid = len_i / 2;
            let j_mid = if len_i % 2 == 1 {
                len_j / 2
            } else {
                (len_j + 1) / 2
            };
            merge(pairs, i, i_mid, j, j_mid);
            merge(pairs, i + i_mid, len_i - i_mid, j + j_mid, len_j - j_mid);
            merge(pairs, i + i_mid, len_i - i_mid, j, j_mid);
        }
    }
}
