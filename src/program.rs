//! Compiled programs: the full pipeline for one family and size

use crate::constants::MAX_LANES;
use crate::error::{NetworkError, Result};
use crate::network::{Family, Network, PowerOfTwo};
use crate::transform::{self, PartnerArray, ParticipationMask, Round};

/// How many lanes each round is padded to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanePolicy {
    /// Exactly `n` lanes, no padding
    Exact,
    /// The next power of two at or above `n`
    NextPowerOfTwo,
    /// A caller-chosen lane count, at least `n`
    Fixed(usize),
}

impl LanePolicy {
    /// Lane count for a network of `n` positions
    pub fn lanes_for(&self, n: usize) -> Result<usize> {
        let lanes = match self {
            LanePolicy::Exact => n,
            LanePolicy::NextPowerOfTwo => PowerOfTwo::at_least(n).value(),
            LanePolicy::Fixed(lanes) => *lanes,
        };
        if lanes == 0 || lanes < n || lanes > MAX_LANES {
            return Err(NetworkError::InvalidLaneWidth { lanes, size: n });
        }
        Ok(lanes)
    }
}

/// One round with the data a backend needs to lower it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    pub round: Round,
    pub partner: PartnerArray,
    pub mask: ParticipationMask,
}

/// Ordered round plans for one family and size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    pub family: Family,
    pub size: usize,
    pub lanes: usize,
    pub rounds: Vec<RoundPlan>,
}

impl CompiledProgram {
    /// Number of rounds
    pub fn depth(&self) -> usize {
        self.rounds.len()
    }

    /// Total comparators over all rounds
    pub fn comparators(&self) -> usize {
        self.rounds.iter().map(|r| r.round.len()).sum()
    }

    /// The rounds concatenated back into a sequential network
    pub fn network(&self) -> Network {
        let rounds: Vec<Round> = self.rounds.iter().map(|r| r.round.clone()).collect();
        transform::flatten(self.size, &rounds)
    }

    /// Partner arrays of all rounds in register order, concatenated
    pub fn flattened_partners(&self) -> Vec<usize> {
        self.rounds
            .iter()
            .flat_map(|r| r.partner.to_register_order())
            .collect()
    }
}

/// Build the program for `family` at `n` positions with power-of-two lanes.
///
/// # Examples
///
/// ```
/// use sortnet::{build, Family};
///
/// let program = build(Family::Bitonic, 8).unwrap();
/// assert_eq!(program.depth(), 6);
/// assert_eq!(program.lanes, 8);
/// assert_eq!(program.rounds[0].partner.to_register_order(), vec![6, 7, 4, 5, 2, 3, 0, 1]);
/// ```
pub fn build(family: Family, n: usize) -> Result<CompiledProgram> {
    build_with_lanes(family, n, LanePolicy::NextPowerOfTwo)
}

/// Build the program for `family` at `n` positions under a lane policy
pub fn build_with_lanes(family: Family, n: usize, policy: LanePolicy) -> Result<CompiledProgram> {
    let lanes = policy.lanes_for(n)?;
    let network = transform::canonicalize(&family.generate(n)?);
    let rounds = transform::group(&network)
        .into_iter()
        .enumerate()
        .map(|(index, round)| {
            let (partner, mask) = transform::synthesize(&round, lanes).map_err(|e| match e {
                NetworkError::RoundConflict { position, .. } => NetworkError::RoundConflict {
                    round: index,
                    position,
                },
                other => other,
            })?;
            Ok(RoundPlan {
                round,
                partner,
                mask,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "built {} program: n={} lanes={} depth={}",
        family,
        n,
        lanes,
        rounds.len()
    );
    Ok(CompiledProgram {
        family,
        size: n,
        lanes,
        rounds,
    })
}
