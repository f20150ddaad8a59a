//! Error type shared by every stage of the pipeline

use crate::network::Family;

/// Errors raised while generating, transforming or executing a network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A network was requested for zero positions
    InvalidSize(usize),
    /// The family has no construction for this size
    UnsupportedSize { family: Family, size: usize },
    /// Lane count is zero, not a power of two where one is required,
    /// smaller than the network or wider than a mask can address
    InvalidLaneWidth { lanes: usize, size: usize },
    /// A pair references a position outside `[0, size)`
    PositionOutOfRange { index: usize, position: usize, size: usize },
    /// A pair compares a position with itself
    DegeneratePair { index: usize, position: usize },
    /// A pair still names its larger operand first after canonicalization
    NonCanonical { index: usize, lo: usize, hi: usize },
    /// Two pairs of the same round share a position
    RoundConflict { round: usize, position: usize },
    /// Grouping reordered two comparators that share a position
    OrderViolation { position: usize },
    /// The program failed to sort the given 0/1 input
    NotSorting { size: usize, witness: u64 },
    /// A caller buffer is shorter than the kernel it is handed to
    BufferTooSmall { needed: usize, actual: usize },
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::InvalidSize(n) => write!(f, "invalid network size {}", n),
            NetworkError::UnsupportedSize { family, size } => {
                write!(f, "{} networks are not available for {} positions", family, size)
            }
            NetworkError::InvalidLaneWidth { lanes, size } => {
                write!(f, "lane width {} cannot hold a network of size {}", lanes, size)
            }
            NetworkError::PositionOutOfRange { index, position, size } => write!(
                f,
                "pair {} references position {} outside [0, {})",
                index, position, size
            ),
            NetworkError::DegeneratePair { index, position } => {
                write!(f, "pair {} compares position {} with itself", index, position)
            }
            NetworkError::NonCanonical { index, lo, hi } => {
                write!(f, "pair {} is descending: ({}, {})", index, lo, hi)
            }
            NetworkError::RoundConflict { round, position } => {
                write!(f, "round {} claims position {} twice", round, position)
            }
            NetworkError::OrderViolation { position } => write!(
                f,
                "comparators on position {} run in a different order",
                position
            ),
            NetworkError::NotSorting { size, witness } => write!(
                f,
                "network of size {} fails on 0/1 input {:#0width$b}",
                size,
                witness,
                width = size + 2
            ),
            NetworkError::BufferTooSmall { needed, actual } => {
                write!(f, "buffer holds {} elements, kernel needs {}", actual, needed)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NetworkError>;
