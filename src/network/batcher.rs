//! Batcher's merge-exchange (Knuth, TAOCP vol. 3, algorithm 5.2.2M)
//!
//! Gap values are powers of two derived from the padded size; pairs whose
//! upper operand falls past `n` are never emitted, so the network is valid
//! for any size.

use super::{ComparePair, Network, PowerOfTwo};

pub fn batcher(n: usize) -> Network {
    let mut pairs = Vec::new();
    let t = PowerOfTwo::at_least(n).value();

    let mut p = t >> 1;
    while p > 0 {
        let (mut q, mut r, mut d) = (t >> 1, 0, p);
        while d > 0 {
            pairs.extend(
                (0..n.saturating_sub(d))
                    .filter(|i| i & p == r)
                    .map(|i| ComparePair::new(i, i + d)),
            );
            // q >= p on every pass, so q - p never underflows
            (q, r, d) = (q >> 1, p, q - p);
        }
        p >>= 1;
    }

    Network::new(n, pairs)
}
