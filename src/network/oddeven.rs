//! Batcher odd-even merge sort
//!
//! Built over the padded power-of-two size; comparators touching a padding
//! position are dropped. Padding lanes hold the maximum value, so those
//! comparators would never swap anyway.

use super::{ComparePair, Network, PowerOfTwo};

struct Builder {
    n: usize,
    pairs: Vec<ComparePair>,
}

impl Builder {
    fn pair(&mut self, i: usize, j: usize) {
        if i < self.n && j < self.n {
            self.pairs.push(ComparePair::new(i, j));
        }
    }

    fn sort(&mut self, lo: usize, len: usize) {
        if len > 1 {
            let mid = len / 2;
            self.sort(lo, mid);
            self.sort(lo + mid, mid);
            self.merge(lo, len, 1);
        }
    }

    /// Merge the elements `lo, lo + r, lo + 2r, ..` of `[lo, lo + len)`
    fn merge(&mut self, lo: usize, len: usize, r: usize) {
        let step = r * 2;
        if step < len {
            self.merge(lo, len, step);
            self.merge(lo + r, len, step);
            let mut i = lo + r;
            while i + r < lo + len {
                self.pair(i, i + r);
                i += step;
            }
        } else {
            self.pair(lo, lo + r);
        }
    }
}

pub fn odd_even(n: usize) -> Network {
    let mut builder = Builder {
        n,
        pairs: Vec::new(),
    };
    builder.sort(0, PowerOfTwo::at_least(n).value());
    Network::new(n, builder.pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_even_pair_counts() {
        let expected = [1, 3, 5, 9, 12, 16, 19, 28, 32, 38, 42, 48, 53, 59, 63];
        for (n, &count) in (2..=16).zip(expected.iter()) {
            assert_eq!(odd_even(n).len(), count, "odd-even n={}", n);
        }
    }

    #[test]
    fn test_odd_even_power_of_two_has_no_pruning() {
        // 2^k * (k^2 - k + 4) / 4 - 1 comparators for n = 2^k
        assert_eq!(odd_even(8).len(), 19);
        assert_eq!(odd_even(16).len(), 63);
        assert_eq!(odd_even(32).len(), 191);
    }
}
