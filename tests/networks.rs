//! Integration tests for network generation
//!
//! Depths and comparator counts are the reference values for each family;
//! every network is checked against the 0/1 principle.

use sortnet::constants::EXHAUSTIVE_ZERO_ONE_MAX_N;
use sortnet::network::Family;
use sortnet::transform::{canonicalize, group};
use sortnet::verify::{check_positions, check_zero_one};
use sortnet::{build, NetworkError};

/// Depth for n = 2..=32
const BITONIC_DEPTH: [usize; 31] = [
    1, 3, 3, 5, 6, 6, 6, 8, 9, 10, 10, 10, 10, 10, 10, 12, 13, 14, 14, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15,
];
const BATCHER_DEPTH: [usize; 31] = BITONIC_DEPTH;
const BOSE_NELSON_DEPTH: [usize; 31] = [
    1, 3, 3, 6, 6, 7, 7, 11, 11, 12, 12, 14, 14, 15, 15, 20, 20, 21, 21, 23, 23, 24, 24, 27, 27,
    28, 28, 30, 30, 31, 31,
];
const ODD_EVEN_DEPTH: [usize; 31] = [
    1, 3, 3, 5, 6, 6, 6, 9, 10, 10, 10, 10, 10, 10, 10, 14, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15,
];
const BALANCED_DEPTH: [usize; 31] = [
    1, 4, 4, 9, 9, 9, 9, 16, 16, 16, 16, 16, 16, 16, 16, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25,
    25, 25, 25, 25, 25, 25,
];
/// Depth for n = 2..=31
const MINIMUM_DEPTH: [usize; 30] = [
    1, 3, 3, 5, 5, 6, 6, 7, 7, 8, 9, 9, 9, 9, 9, 10, 11, 11, 12, 12, 12, 12, 13, 13, 13, 14, 14,
    14, 14, 14,
];

/// Comparator counts for n = 17..=32
const LARGE_PAIR_COUNTS: [(Family, [usize; 16]); 5] = [
    (
        Family::Bitonic,
        [85, 91, 98, 106, 114, 123, 133, 144, 153, 163, 174, 186, 198, 211, 225, 240],
    ),
    (
        Family::Batcher,
        [74, 82, 91, 97, 107, 114, 122, 127, 138, 146, 155, 161, 171, 178, 186, 191],
    ),
    (
        Family::BoseNelson,
        [81, 90, 100, 106, 118, 125, 133, 138, 154, 163, 173, 179, 191, 198, 206, 211],
    ),
    (
        Family::OddEven,
        [85, 90, 98, 103, 112, 119, 127, 132, 140, 147, 156, 162, 171, 178, 186, 191],
    ),
    (
        Family::Balanced,
        [165, 175, 185, 200, 210, 225, 240, 260, 270, 285, 300, 320, 335, 355, 375, 400],
    ),
];

fn depth(family: Family, n: usize) -> usize {
    group(&canonicalize(&family.generate(n).unwrap())).len()
}

fn assert_depths(family: Family, expected: &[usize]) {
    for (n, &want) in (2..).zip(expected) {
        assert_eq!(depth(family, n), want, "{} depth at n={}", family, n);
        assert_eq!(build(family, n).unwrap().depth(), want, "{} program depth at n={}", family, n);
    }
}

#[test]
fn test_bitonic_depths() {
    assert_depths(Family::Bitonic, &BITONIC_DEPTH);
}

#[test]
fn test_batcher_depths() {
    assert_depths(Family::Batcher, &BATCHER_DEPTH);
}

#[test]
fn test_bose_nelson_depths() {
    assert_depths(Family::BoseNelson, &BOSE_NELSON_DEPTH);
}

#[test]
fn test_odd_even_depths() {
    assert_depths(Family::OddEven, &ODD_EVEN_DEPTH);
}

#[test]
fn test_balanced_depths() {
    assert_depths(Family::Balanced, &BALANCED_DEPTH);
}

#[test]
fn test_minimum_depths() {
    assert_depths(Family::Minimum, &MINIMUM_DEPTH);
}

#[test]
fn test_large_pair_counts() {
    for (family, counts) in LARGE_PAIR_COUNTS {
        for (n, &want) in (17..).zip(counts.iter()) {
            assert_eq!(family.generate(n).unwrap().len(), want, "{} pairs at n={}", family, n);
        }
    }
}

#[test]
fn test_all_families_in_range() {
    for family in Family::ALL {
        for n in 1..=31 {
            let network = family.generate(n).unwrap();
            check_positions(&network)
                .unwrap_or_else(|e| panic!("{} n={}: {}", family, n, e));
        }
    }
}

#[test]
fn test_zero_one_principle_small() {
    for family in Family::ALL {
        for n in 2..=16 {
            let raw = family.generate(n).unwrap();
            check_zero_one(&raw).unwrap_or_else(|e| panic!("{} raw n={}: {}", family, n, e));
            check_zero_one(&canonicalize(&raw))
                .unwrap_or_else(|e| panic!("{} canonical n={}: {}", family, n, e));
        }
    }
}

#[test]
fn test_zero_one_principle_exhaustive_upper() {
    for family in Family::ALL {
        for n in 17..=EXHAUSTIVE_ZERO_ONE_MAX_N {
            let network = canonicalize(&family.generate(n).unwrap());
            check_zero_one(&network).unwrap_or_else(|e| panic!("{} n={}: {}", family, n, e));
        }
    }
}

#[test]
fn test_zero_one_principle_sampled() {
    for family in Family::ALL {
        for n in [25, 29, 31] {
            let network = canonicalize(&family.generate(n).unwrap());
            check_zero_one(&network).unwrap_or_else(|e| panic!("{} n={}: {}", family, n, e));
        }
    }
}

#[test]
fn test_minimum_is_never_deeper() {
    for n in 2..=31 {
        let minimum = depth(Family::Minimum, n);
        for family in [Family::Bitonic, Family::Batcher, Family::OddEven] {
            assert!(
                minimum <= depth(family, n),
                "minimum deeper than {} at n={}",
                family,
                n
            );
        }
    }
}

#[test]
fn test_minimum_size_limit() {
    assert!(Family::Minimum.generate(31).is_ok());
    assert_eq!(
        Family::Minimum.generate(32),
        Err(NetworkError::UnsupportedSize {
            family: Family::Minimum,
            size: 32
        })
    );
    // Best falls back to bitonic past the table
    assert_eq!(build(Family::Best, 48).unwrap().depth(), depth(Family::Bitonic, 48));
}

#[test]
fn test_best_matches_resolved_family() {
    for n in 2..=40 {
        let best = build(Family::Best, n).unwrap();
        let resolved = build(Family::Best.resolve(n), n).unwrap();
        assert_eq!(best.network(), resolved.network(), "best n={}", n);
    }
}
