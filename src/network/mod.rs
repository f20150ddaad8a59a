//! Comparator networks and the families that construct them
//!
//! A [`Network`] is the ordered pair sequence for one size. Executing its
//! pairs strictly in order, each as a compare-and-conditionally-swap, sorts
//! any input of that size. Every later stage only reorders pairs touching
//! disjoint positions, so this sequential semantics is the reference the
//! rest of the crate is checked against.

pub mod balanced;
pub mod batcher;
pub mod bitonic;
pub mod bosenelson;
pub mod minimum;
pub mod oddeven;
pub mod power_of_two;

use crate::constants::BEST_MINIMUM_MAX_N;
use crate::error::{NetworkError, Result};
pub use power_of_two::PowerOfTwo;

/// One slot of the array being sorted
pub type Position = usize;

/// Compare-exchange between two positions.
///
/// After execution `lo` holds the smaller value and `hi` the larger one.
/// Generators may emit `lo > hi` (a descending comparator); canonicalization
/// removes those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComparePair {
    pub lo: Position,
    pub hi: Position,
}

impl ComparePair {
    pub fn new(lo: Position, hi: Position) -> Self {
        ComparePair { lo, hi }
    }

    /// True when the smaller value lands on the smaller index
    pub fn is_ascending(&self) -> bool {
        self.lo < self.hi
    }

    pub fn touches(&self, position: Position) -> bool {
        self.lo == position || self.hi == position
    }

    pub fn max_position(&self) -> Position {
        self.lo.max(self.hi)
    }

    /// Same comparator with the roles exchanged
    pub fn flipped(&self) -> Self {
        ComparePair {
            lo: self.hi,
            hi: self.lo,
        }
    }

    /// Sequential compare-exchange on a scratch array
    #[inline]
    pub fn apply<T: PartialOrd + Copy>(&self, values: &mut [T]) {
        if values[self.hi] < values[self.lo] {
            values.swap(self.lo, self.hi);
        }
    }
}

impl From<(usize, usize)> for ComparePair {
    fn from((lo, hi): (usize, usize)) -> Self {
        ComparePair { lo, hi }
    }
}

/// Ordered comparator sequence for a fixed size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    size: usize,
    pairs: Vec<ComparePair>,
}

impl Network {
    pub fn new(size: usize, pairs: Vec<ComparePair>) -> Self {
        Network { size, pairs }
    }

    pub fn from_pairs<I>(size: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Network {
            size,
            pairs: pairs.into_iter().map(ComparePair::from).collect(),
        }
    }

    /// Number of positions sorted
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pairs(&self) -> &[ComparePair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<ComparePair> {
        self.pairs
    }

    /// Number of comparators
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Execute every pair in order.
    ///
    /// Only the first `size` entries of `values` take part.
    pub fn apply<T: PartialOrd + Copy>(&self, values: &mut [T]) {
        for pair in &self.pairs {
            pair.apply(values);
        }
    }

    /// Number of rounds after greedy grouping
    pub fn depth(&self) -> usize {
        crate::transform::group(self).len()
    }
}

/// Network construction families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// Recursive bitonic sort, any size
    Bitonic,
    /// Knuth's merge-exchange
    Batcher,
    /// Bose-Nelson merge insertion
    BoseNelson,
    /// Batcher odd-even merge sort pruned to the real size
    OddEven,
    /// Balanced block network, repeated log2 times
    Balanced,
    /// Table of minimal-depth networks for small sizes
    Minimum,
    /// Minimum where it exists and is worth it, bitonic otherwise
    Best,
}

impl Family {
    /// Every family, in the order the CLI lists them
    pub const ALL: [Family; 7] = [
        Family::Bitonic,
        Family::Batcher,
        Family::BoseNelson,
        Family::OddEven,
        Family::Balanced,
        Family::Minimum,
        Family::Best,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Family::Bitonic => "bitonic",
            Family::Batcher => "batcher",
            Family::BoseNelson => "bosenelson",
            Family::OddEven => "oddeven",
            Family::Balanced => "balanced",
            Family::Minimum => "minimum",
            Family::Best => "best",
        }
    }

    /// The concrete family `Best` resolves to for `n`
    pub fn resolve(&self, n: usize) -> Family {
        match self {
            Family::Best if n.is_power_of_two() || n > BEST_MINIMUM_MAX_N => Family::Bitonic,
            Family::Best => Family::Minimum,
            other => *other,
        }
    }

    /// Raw pair sequence for `n` positions, orientation as constructed
    pub fn generate(&self, n: usize) -> Result<Network> {
        if n == 0 {
            return Err(NetworkError::InvalidSize(n));
        }
        let network = match self.resolve(n) {
            Family::Bitonic | Family::Best => bitonic::bitonic(n),
            Family::Batcher => batcher::batcher(n),
            Family::BoseNelson => bosenelson::bose_nelson(n),
            Family::OddEven => oddeven::odd_even(n),
            Family::Balanced => balanced::balanced(n),
            Family::Minimum => minimum::minimum(n)?,
        };
        log::debug!(
            "generated {} network: n={} pairs={}",
            self,
            n,
            network.len()
        );
        Ok(network)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bitonic" => Ok(Family::Bitonic),
            "batcher" => Ok(Family::Batcher),
            "bosenelson" | "bose-nelson" => Ok(Family::BoseNelson),
            "oddeven" | "odd-even" => Ok(Family::OddEven),
            "balanced" => Ok(Family::Balanced),
            "minimum" | "minimal" => Ok(Family::Minimum),
            "best" => Ok(Family::Best),
            other => Err(format!("unknown network family '{}'", other)),
        }
    }
}

/// Raw pair sequence for `family` at `n` positions
pub fn generate(family: Family, n: usize) -> Result<Network> {
    family.generate(n)
}
