//! Greedy round scheduling
//!
//! Pairs are placed one by one, in sequence order. A pair walks back from
//! the newest round until it meets a round that already claims one of its
//! positions, and lands in the round just after that one. Nothing between
//! that round and the end touches its positions, so pulling it back over
//! them only reorders disjoint comparators.

use crate::network::{ComparePair, Network, Position};

/// Comparators touching pairwise disjoint positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pairs: Vec<ComparePair>,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap pairs without checking disjointness
    pub fn from_pairs(pairs: Vec<ComparePair>) -> Self {
        Round { pairs }
    }

    pub fn pairs(&self) -> &[ComparePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn claims(&self, position: Position) -> bool {
        self.pairs.iter().any(|p| p.touches(position))
    }

    /// Positions touched by this round
    pub fn claimed(&self) -> impl Iterator<Item = Position> + '_ {
        self.pairs.iter().flat_map(|p| [p.lo, p.hi])
    }

    /// Execute every comparator at once, reading only the input state
    pub fn apply<T: PartialOrd + Copy>(&self, values: &mut [T]) {
        let before: Vec<(T, T)> = self
            .pairs
            .iter()
            .map(|p| (values[p.lo], values[p.hi]))
            .collect();
        for (pair, (a, b)) in self.pairs.iter().zip(before) {
            let (min, max) = if b < a { (b, a) } else { (a, b) };
            values[pair.lo] = min;
            values[pair.hi] = max;
        }
    }
}

/// Set of claimed positions per round, kept beside the rounds while grouping
#[derive(Clone, Default)]
struct Claims {
    words: Vec<u64>,
}

impl Claims {
    fn contains(&self, position: Position) -> bool {
        self.words
            .get(position / 64)
            .map_or(false, |w| w & (1 << (position % 64)) != 0)
    }

    fn insert(&mut self, position: Position) {
        let word = position / 64;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (position % 64);
    }

    fn conflicts(&self, pair: &ComparePair) -> bool {
        self.contains(pair.lo) || self.contains(pair.hi)
    }
}

/// Partition `network` into rounds of disjoint comparators.
///
/// Two comparators sharing a position keep their relative order, so
/// executing the rounds in order is equivalent to executing the sequence.
pub fn group(network: &Network) -> Vec<Round> {
    let mut rounds: Vec<Round> = Vec::new();
    let mut claims: Vec<Claims> = Vec::new();

    for pair in network.pairs() {
        let target = claims
            .iter()
            .rposition(|c| c.conflicts(pair))
            .map_or(0, |conflict| conflict + 1);
        if target == rounds.len() {
            rounds.push(Round::new());
            claims.push(Claims::default());
        }
        rounds[target].pairs.push(*pair);
        claims[target].insert(pair.lo);
        claims[target].insert(pair.hi);
    }

    log::trace!(
        "group: n={} pairs={} rounds={}",
        network.size(),
        network.len(),
        rounds.len()
    );
    rounds
}

/// Concatenate rounds back into one sequence
pub fn flatten(size: usize, rounds: &[Round]) -> Network {
    Network::new(
        size,
        rounds.iter().flat_map(|r| r.pairs().iter().copied()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::bitonic::bitonic;
    use crate::transform::canonicalize;

    fn as_tuples(round: &Round) -> Vec<(usize, usize)> {
        round.pairs().iter().map(|p| (p.lo, p.hi)).collect()
    }

    #[test]
    fn test_bitonic_eight_rounds() {
        let rounds = group(&canonicalize(&bitonic(8)));
        let expected: Vec<Vec<(usize, usize)>> = vec![
            vec![(0, 1), (2, 3), (4, 5), (6, 7)],
            vec![(0, 3), (1, 2), (5, 6), (4, 7)],
            vec![(2, 3), (0, 1), (4, 5), (6, 7)],
            vec![(3, 4), (2, 5), (1, 6), (0, 7)],
            vec![(1, 3), (0, 2), (4, 6), (5, 7)],
            vec![(0, 1), (2, 3), (4, 5), (6, 7)],
        ];
        let actual: Vec<_> = rounds.iter().map(as_tuples).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_pair_lands_after_last_conflict() {
        // no round claims 2 or 3, so (2, 3) goes all the way back to round 0;
        // (1, 2) meets round 1 first and opens round 2
        let network = Network::from_pairs(4, vec![(0, 1), (0, 1), (2, 3), (1, 2)]);
        let rounds = group(&network);
        assert_eq!(as_tuples(&rounds[0]), vec![(0, 1), (2, 3)]);
        assert_eq!(as_tuples(&rounds[1]), vec![(0, 1)]);
        assert_eq!(as_tuples(&rounds[2]), vec![(1, 2)]);
    }

    #[test]
    fn test_does_not_jump_over_conflict() {
        // round 1 claims 3, so (0, 3) lands in round 2 beside (1, 2)
        let network = Network::from_pairs(4, vec![(0, 1), (2, 3), (1, 3), (1, 2), (0, 3)]);
        let rounds = group(&network);
        let actual: Vec<_> = rounds.iter().map(as_tuples).collect();
        assert_eq!(
            actual,
            vec![vec![(0, 1), (2, 3)], vec![(1, 3)], vec![(1, 2), (0, 3)]]
        );
    }

    #[test]
    fn test_rounds_are_disjoint() {
        for n in 2..=24 {
            for round in group(&canonicalize(&bitonic(n))) {
                let mut seen = vec![false; n];
                for p in round.claimed() {
                    assert!(!seen[p], "n={} position {} claimed twice", n, p);
                    seen[p] = true;
                }
            }
        }
    }

    #[test]
    fn test_round_apply_is_simultaneous() {
        let round = Round::from_pairs(vec![ComparePair::new(0, 1), ComparePair::new(2, 3)]);
        let mut values = [4, 3, 1, 2];
        round.apply(&mut values);
        assert_eq!(values, [3, 4, 1, 2]);
        assert!(round.claims(3));
        assert!(!Round::new().claims(0));
    }

    #[test]
    fn test_flatten_preserves_pairs() {
        let network = canonicalize(&bitonic(5));
        let rounds = group(&network);
        let flat = flatten(5, &rounds);
        assert_eq!(flat.len(), network.len());
        let mut values = [4, 0, 3, 1, 2];
        flat.apply(&mut values);
        assert_eq!(values, [0, 1, 2, 3, 4]);
    }
}
