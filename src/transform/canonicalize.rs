//! Direction canonicalization
//!
//! A descending comparator `(x, y)` with `x > y` leaves the smaller value on
//! the larger index. Flipping it to `(y, x)` would change which datum sits
//! where, so every later comparator must follow the data: from then on the
//! labels `x` and `y` are exchanged. The exchange composes with earlier
//! ones, so the relabelling is kept as a permutation over positions.

use crate::network::{ComparePair, Network, Position};

/// Relabelling from constructed positions to canonical positions
struct Relabel {
    forward: Vec<Position>,
    inverse: Vec<Position>,
}

impl Relabel {
    fn identity(width: usize) -> Self {
        Relabel {
            forward: (0..width).collect(),
            inverse: (0..width).collect(),
        }
    }

    fn map(&self, pair: &ComparePair) -> ComparePair {
        ComparePair::new(self.forward[pair.lo], self.forward[pair.hi])
    }

    /// Exchange the canonical labels `a` and `b` for all later pairs
    fn exchange(&mut self, a: Position, b: Position) {
        let (from_a, from_b) = (self.inverse[a], self.inverse[b]);
        self.forward.swap(from_a, from_b);
        self.inverse.swap(a, b);
    }
}

/// Rewrite `network` so every comparator names its smaller index first.
///
/// The result sorts ascending exactly when the input does. Already
/// ascending networks are returned unchanged.
pub fn canonicalize(network: &Network) -> Network {
    let width = network
        .pairs()
        .iter()
        .map(|p| p.max_position() + 1)
        .max()
        .unwrap_or(0)
        .max(network.size());
    let mut relabel = Relabel::identity(width);
    let mut flips = 0usize;

    let pairs = network
        .pairs()
        .iter()
        .map(|pair| {
            let mapped = relabel.map(pair);
            if mapped.is_ascending() {
                mapped
            } else {
                flips += 1;
                relabel.exchange(mapped.lo, mapped.hi);
                mapped.flipped()
            }
        })
        .collect();

    log::trace!(
        "canonicalize: n={} flipped {} of {} pairs",
        network.size(),
        flips,
        network.len()
    );
    Network::new(network.size(), pairs)
}

/// True when every comparator names its smaller index first
pub fn is_canonical(network: &Network) -> bool {
    network.pairs().iter().all(ComparePair::is_ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::bitonic::bitonic;

    fn as_tuples(network: &Network) -> Vec<(usize, usize)> {
        network.pairs().iter().map(|p| (p.lo, p.hi)).collect()
    }

    #[test]
    fn test_flip_propagates_to_later_pairs() {
        // (1, 0) swaps the labels 0 and 1 for everything after it
        let raw = Network::from_pairs(3, vec![(1, 0), (1, 2), (0, 2)]);
        let canonical = canonicalize(&raw);
        assert_eq!(as_tuples(&canonical), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(is_canonical(&canonical));
    }

    #[test]
    fn test_bitonic_four() {
        let canonical = canonicalize(&bitonic(4));
        assert_eq!(
            as_tuples(&canonical),
            vec![(0, 1), (2, 3), (1, 2), (0, 3), (0, 1), (2, 3)]
        );
    }

    #[test]
    fn test_idempotent() {
        for n in 2..=20 {
            let once = canonicalize(&bitonic(n));
            assert!(is_canonical(&once), "bitonic n={} not canonical", n);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_ascending_network_unchanged() {
        let network = Network::from_pairs(4, vec![(0, 1), (2, 3), (0, 2), (1, 3), (1, 2)]);
        assert_eq!(canonicalize(&network), network);
    }

    #[test]
    fn test_sorts_after_canonicalization() {
        let canonical = canonicalize(&bitonic(6));
        let mut values = [5, 3, 0, 4, 1, 2];
        canonical.apply(&mut values);
        assert_eq!(values, [0, 1, 2, 3, 4, 5]);
    }
}
