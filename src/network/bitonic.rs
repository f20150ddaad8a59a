//! Recursive bitonic sorting network
//!
//! Works for any size: the sort splits at `s / 2` and the merge splits at
//! the largest power of two below `s`, so the two halves of a merge may
//! differ in length. The lower half of every sort runs in the opposite
//! direction, so the raw output mixes ascending and descending comparators.

use super::power_of_two::split_point;
use super::{ComparePair, Network};

pub fn bitonic(n: usize) -> Network {
    let mut pairs = Vec::new();
    sort(&mut pairs, 0, n, true);
    Network::new(n, pairs)
}

fn sort(pairs: &mut Vec<ComparePair>, lo: usize, len: usize, ascending: bool) {
    if len > 1 {
        let mid = len / 2;
        sort(pairs, lo, mid, !ascending);
        sort(pairs, lo + mid, len - mid, ascending);
        merge(pairs, lo, len, ascending);
    }
}

fn merge(pairs: &mut Vec<ComparePair>, lo: usize, len: usize, ascending: bool) {
    if len > 1 {
        let mid = split_point(len);
        for i in lo..lo + len - mid {
            pairs.push(if ascending {
                ComparePair::new(i, i + mid)
            } else {
                ComparePair::new(i + mid, i)
            });
        }
        merge(pairs, lo, mid, ascending);
        merge(pairs, lo + mid, len - mid, ascending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitonic_four() {
        let network = bitonic(4);
        let pairs: Vec<_> = network.pairs().iter().map(|p| (p.lo, p.hi)).collect();
        assert_eq!(pairs, vec![(1, 0), (2, 3), (0, 2), (1, 3), (0, 1), (2, 3)]);
    }

    #[test]
    fn test_bitonic_pair_counts() {
        let expected = [1, 3, 6, 9, 13, 18, 24, 28, 33, 39, 46, 53, 61, 70, 80];
        for (n, &count) in (2..=16).zip(expected.iter()) {
            assert_eq!(bitonic(n).len(), count, "bitonic n={}", n);
        }
    }

    #[test]
    fn test_bitonic_contains_descending_pairs() {
        assert!(bitonic(8).pairs().iter().any(|p| !p.is_ascending()));
    }
}
