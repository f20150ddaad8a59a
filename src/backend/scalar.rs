//! Portable lane emulation
//!
//! Each round runs the same four steps a vector backend emits: permute the
//! register by the partner array, take lane-wise min and max of the
//! original and permuted registers, and blend them under the mask.

use aligned_vec::AVec;

use super::{LoweringBackend, RoundContract, SortElement};
use crate::config::LoadMode;
use crate::constants::LANE_BUFFER_ALIGNMENT;

/// Backend that executes rounds lane by lane over an aligned buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        ScalarBackend
    }
}

#[inline]
fn lane_min<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn lane_max<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if b < a {
        a
    } else {
        b
    }
}

impl<T: SortElement> LoweringBackend<T> for ScalarBackend {
    type Vector = AVec<T>;

    fn load(&self, src: &[T], n: usize, lanes: usize, mode: LoadMode) -> AVec<T> {
        match mode {
            LoadMode::Partial => AVec::from_iter(
                LANE_BUFFER_ALIGNMENT,
                (0..lanes).map(|lane| if lane < n { src[lane] } else { T::padding() }),
            ),
            LoadMode::Full => {
                // Whole-register read, then the tail is masked back to padding
                let mut v = AVec::from_iter(
                    LANE_BUFFER_ALIGNMENT,
                    src.iter()
                        .copied()
                        .chain(std::iter::repeat(T::padding()))
                        .take(lanes),
                );
                v[n.min(lanes)..].fill(T::padding());
                v
            }
        }
    }

    fn compare_exchange(&self, v: AVec<T>, round: &RoundContract<'_>) -> AVec<T> {
        AVec::from_iter(
            LANE_BUFFER_ALIGNMENT,
            (0..round.lanes).map(|lane| {
                let (a, b) = (v[lane], v[round.partner.partner(lane)]);
                if round.mask.keeps_min(lane) {
                    lane_min(a, b)
                } else {
                    lane_max(a, b)
                }
            }),
        )
    }

    fn store(&self, v: &AVec<T>, dst: &mut [T], n: usize, _mode: LoadMode) {
        dst[..n].copy_from_slice(&v[..n]);
    }
}
