//! Generation-time self checks
//!
//! Every stage can break the sorting property in its own way: a generator
//! can emit an out-of-range or degenerate pair, canonicalization can leave a
//! descending comparator, grouping can put two pairs on one position or
//! reorder dependent pairs, and the end result can simply fail to sort.
//! These checks catch each of those before a program is handed out.
//!
//! The 0/1 checks run bit-parallel: wire `w` is a `u64` whose bit `k` is the
//! value on that wire for input `k`, so one pass evaluates 64 inputs and a
//! comparator is just `and` / `or`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::constants::{
    EXHAUSTIVE_ZERO_ONE_MAX_N, SAMPLED_ZERO_ONE_VECTORS, VERIFICATION_SEED, ZERO_ONE_BLOCK_LOG2,
};
use crate::error::{NetworkError, Result};
use crate::network::{Family, Network};
use crate::program::{build_with_lanes, CompiledProgram, LanePolicy};
use crate::transform::{self, Round};

/// Bit `k` of `LOW_WIRES[w]` is bit `w` of `k`
const LOW_WIRES: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

/// Every pair in range and non-degenerate
pub fn check_positions(network: &Network) -> Result<()> {
    let size = network.size();
    for (index, pair) in network.pairs().iter().enumerate() {
        if let Some(position) = [pair.lo, pair.hi].into_iter().find(|&p| p >= size) {
            return Err(NetworkError::PositionOutOfRange {
                index,
                position,
                size,
            });
        }
        if pair.lo == pair.hi {
            return Err(NetworkError::DegeneratePair {
                index,
                position: pair.lo,
            });
        }
    }
    Ok(())
}

/// Every pair names its smaller index first
pub fn check_canonical(network: &Network) -> Result<()> {
    match network.pairs().iter().position(|p| !p.is_ascending()) {
        Some(index) => {
            let pair = network.pairs()[index];
            Err(NetworkError::NonCanonical {
                index,
                lo: pair.lo,
                hi: pair.hi,
            })
        }
        None => Ok(()),
    }
}

/// No round touches a position twice
pub fn check_rounds(rounds: &[Round]) -> Result<()> {
    for (index, round) in rounds.iter().enumerate() {
        let mut seen = std::collections::HashSet::new();
        if let Some(position) = round.claimed().find(|&p| !seen.insert(p)) {
            return Err(NetworkError::RoundConflict {
                round: index,
                position,
            });
        }
    }
    Ok(())
}

/// The rounds run the comparators of `network` on every position in the
/// same order, so only disjoint comparators were reordered
pub fn check_order(network: &Network, rounds: &[Round]) -> Result<()> {
    let grouped = transform::flatten(network.size(), rounds);
    let width = network
        .pairs()
        .iter()
        .chain(grouped.pairs())
        .map(|p| p.max_position() + 1)
        .max()
        .unwrap_or(0);

    let per_position = |n: &Network| {
        let mut lists = vec![Vec::new(); width];
        for pair in n.pairs() {
            lists[pair.lo].push(*pair);
            lists[pair.hi].push(*pair);
        }
        lists
    };
    let expected = per_position(network);
    let actual = per_position(&grouped);

    match (0..width).find(|&p| expected[p] != actual[p]) {
        Some(position) => Err(NetworkError::OrderViolation { position }),
        None => Ok(()),
    }
}

/// 0/1 principle on the sequential network
pub fn check_zero_one(network: &Network) -> Result<()> {
    zero_one(network.size(), network.size(), |wires| {
        for pair in network.pairs() {
            let (a, b) = (wires[pair.lo], wires[pair.hi]);
            wires[pair.lo] = a & b;
            wires[pair.hi] = a | b;
        }
    })
}

/// 0/1 principle on the lane program: every round runs as
/// permute, min, max and blend across all lanes, with padding lanes at the
/// maximum value. Padding lanes must also come out unchanged.
pub fn check_program_zero_one(program: &CompiledProgram) -> Result<()> {
    zero_one(program.size, program.lanes, |wires| {
        let mut before = vec![0u64; wires.len()];
        for plan in &program.rounds {
            before.copy_from_slice(wires);
            for (lane, wire) in wires.iter_mut().enumerate() {
                let (a, b) = (before[lane], before[plan.partner.partner(lane)]);
                *wire = if plan.mask.keeps_min(lane) { a & b } else { a | b };
            }
        }
    })
}

/// Run every check against a compiled program
pub fn self_test(program: &CompiledProgram) -> Result<()> {
    let rounds: Vec<Round> = program.rounds.iter().map(|r| r.round.clone()).collect();
    let grouped = program.network();
    check_positions(&grouped)?;
    check_canonical(&grouped)?;
    check_rounds(&rounds)?;

    let sequence = transform::canonicalize(&program.family.generate(program.size)?);
    check_order(&sequence, &rounds)?;

    check_zero_one(&sequence)?;
    check_program_zero_one(program)
}

/// Build a program and refuse to return it unless it passes `self_test`
pub fn build_checked(family: Family, n: usize, policy: LanePolicy) -> Result<CompiledProgram> {
    let program = build_with_lanes(family, n, policy)?;
    self_test(&program)?;
    log::debug!("{} n={} passed self test", family, n);
    Ok(program)
}

/// Drive `run` over 0/1 inputs on `n` real wires and `width - n` padding
/// wires. Exhaustive up to the bound, seeded sampling above it.
fn zero_one<F>(n: usize, width: usize, run: F) -> Result<()>
where
    F: Fn(&mut [u64]) + Sync,
{
    if n <= 1 {
        return Ok(());
    }

    let witness = if n <= EXHAUSTIVE_ZERO_ONE_MAX_N {
        let words = ((1usize << n) + 63) / 64;
        let block_words = 1usize << (ZERO_ONE_BLOCK_LOG2 - 6);
        let blocks = (words + block_words - 1) / block_words;

        (0..blocks).into_par_iter().find_map_first(|block| {
            let mut wires = vec![0u64; width];
            let end = ((block + 1) * block_words).min(words);
            for word in block * block_words..end {
                fill_exhaustive(&mut wires, word, n);
                run(&mut wires);
                if let Some(bit) = first_unsorted(&wires, n) {
                    let input = ((word as u64) << 6) | u64::from(bit);
                    return Some(input & ((1u64 << n) - 1));
                }
            }
            None
        })
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(VERIFICATION_SEED);
        let mut wires = vec![0u64; width];
        let mut inputs = vec![0u64; n];
        let mut found = None;
        for _ in 0..SAMPLED_ZERO_ONE_VECTORS / 64 {
            fill_sampled(&mut inputs, &mut rng);
            wires[..n].copy_from_slice(&inputs);
            wires[n..].iter_mut().for_each(|w| *w = !0);
            run(&mut wires);
            if let Some(bit) = first_unsorted(&wires, n) {
                // Only the low 64 positions fit in the witness
                found = Some(
                    inputs
                        .iter()
                        .take(64)
                        .enumerate()
                        .fold(0u64, |acc, (w, word)| acc | (((word >> bit) & 1) << w)),
                );
                break;
            }
        }
        found
    };

    match witness {
        Some(witness) => Err(NetworkError::NotSorting { size: n, witness }),
        None => Ok(()),
    }
}

/// Load inputs `64 * word .. 64 * word + 63` onto the wires
fn fill_exhaustive(wires: &mut [u64], word: usize, n: usize) {
    for (w, wire) in wires.iter_mut().enumerate() {
        *wire = if w >= n {
            !0
        } else if w < LOW_WIRES.len() {
            LOW_WIRES[w]
        } else if (word >> (w - 6)) & 1 == 1 {
            !0
        } else {
            0
        };
    }
}

/// Draw 64 inputs, each with a uniformly chosen number of ones.
///
/// Uniform bits would almost always produce about `n / 2` ones, and the
/// inputs that expose a missing comparator are often far from that.
fn fill_sampled(inputs: &mut [u64], rng: &mut ChaCha8Rng) {
    let n = inputs.len();
    inputs.iter_mut().for_each(|w| *w = 0);
    for sample in 0..64 {
        let ones = rng.gen_range(0..=n);
        for position in rand::seq::index::sample(rng, n, ones) {
            inputs[position] |= 1 << sample;
        }
    }
}

/// Lowest input whose real wires are not ascending or whose padding moved
fn first_unsorted(wires: &[u64], n: usize) -> Option<u32> {
    let mut bad = wires[..n]
        .windows(2)
        .fold(0u64, |acc, w| acc | (w[0] & !w[1]));
    bad |= wires[n..].iter().fold(0u64, |acc, w| acc | !w);
    (bad != 0).then(|| bad.trailing_zeros())
}
