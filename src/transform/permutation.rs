//! Per-round partner arrays and participation masks
//!
//! A round becomes one `permute`, one `min`, one `max` and one `blend`:
//! permuting the register by the partner array lines every lane up with its
//! comparator partner, and the mask picks the minimum for `lo` lanes and
//! the maximum everywhere else. Self-partnered lanes see the same value on
//! both sides, so either choice leaves them unchanged.

use super::Round;
use crate::constants::MAX_LANES;
use crate::error::{NetworkError, Result};
use crate::network::Position;

/// Lane-indexed partner table, `partner[lo] = hi` and `partner[hi] = lo`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartnerArray {
    lanes: Vec<Position>,
}

impl PartnerArray {
    /// Every lane paired with itself
    pub fn identity(lanes: usize) -> Self {
        PartnerArray {
            lanes: (0..lanes).collect(),
        }
    }

    pub fn lanes(&self) -> usize {
        self.lanes.len()
    }

    pub fn partner(&self, lane: usize) -> Position {
        self.lanes[lane]
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.lanes
    }

    pub fn is_identity(&self) -> bool {
        self.lanes.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Highest lane first, the order `_mm*_set_epi*` takes its arguments in
    pub fn to_register_order(&self) -> Vec<Position> {
        self.lanes.iter().rev().copied().collect()
    }
}

/// One bit per lane, set where the lane keeps the pairwise minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParticipationMask(pub u64);

impl ParticipationMask {
    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn keeps_min(&self, lane: usize) -> bool {
        lane < MAX_LANES && self.0 & (1u64 << lane) != 0
    }

    /// Byte-granular mask for `pblendvb`-style blends: each lane's bit is
    /// repeated once per byte of the element
    pub fn widen(&self, lanes: usize, element_bytes: usize) -> Vec<u8> {
        (0..lanes)
            .flat_map(|lane| {
                let byte = if self.keeps_min(lane) { 0xff } else { 0x00 };
                std::iter::repeat(byte).take(element_bytes)
            })
            .collect()
    }
}

/// What a lane does in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Min,
    Max,
    Identity,
}

/// Per-lane roles derived from a partner array and its mask
pub fn roles(partner: &PartnerArray, mask: ParticipationMask) -> Vec<Role> {
    (0..partner.lanes())
        .map(|lane| {
            if partner.partner(lane) == lane {
                Role::Identity
            } else if mask.keeps_min(lane) {
                Role::Min
            } else {
                Role::Max
            }
        })
        .collect()
}

/// Build the partner array and mask realising `round` in `lanes` lanes.
///
/// Lanes not touched by the round partner themselves. Fails when the lane
/// count is zero or wider than a mask, when a pair does not fit the lanes,
/// is degenerate, or shares a lane with an earlier pair of the round.
pub fn synthesize(round: &Round, lanes: usize) -> Result<(PartnerArray, ParticipationMask)> {
    let size = round.claimed().max().map_or(0, |p| p + 1);
    if lanes == 0 || lanes > MAX_LANES {
        return Err(NetworkError::InvalidLaneWidth { lanes, size });
    }

    let mut partner = PartnerArray::identity(lanes);
    let mut taken = 0u64;
    let mut mask = 0u64;

    for (index, pair) in round.pairs().iter().enumerate() {
        for position in [pair.lo, pair.hi] {
            if position >= lanes {
                return Err(NetworkError::PositionOutOfRange {
                    index,
                    position,
                    size: lanes,
                });
            }
        }
        if pair.lo == pair.hi {
            return Err(NetworkError::DegeneratePair {
                index,
                position: pair.lo,
            });
        }
        for position in [pair.lo, pair.hi] {
            if taken & (1 << position) != 0 {
                return Err(NetworkError::RoundConflict { round: 0, position });
            }
            taken |= 1 << position;
        }
        partner.lanes[pair.lo] = pair.hi;
        partner.lanes[pair.hi] = pair.lo;
        mask |= 1 << pair.lo;
    }

    Ok((partner, ParticipationMask(mask)))
}
