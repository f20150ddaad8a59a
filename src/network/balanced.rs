//! Balanced block network (Dowd, Perl, Rudolph, Saks)
//!
//! One block pass folds each block onto itself, pairing the `j`-th element
//! from the front with the `j`-th from the back, for block sizes from the
//! padded size down to 2. Repeating the pass `log2` times sorts.

use super::{ComparePair, Network, PowerOfTwo};

pub fn balanced(n: usize) -> Network {
    let padded = PowerOfTwo::at_least(n);
    let t = padded.value();
    let mut pairs = Vec::new();

    for _ in 0..padded.log2() {
        for block in padded.descending().take_while(|b| b.value() > 1) {
            let curr = block.value();
            for start in (0..t).step_by(curr) {
                for j in 0..curr / 2 {
                    let (w1, w2) = (start + j, start + curr - j - 1);
                    if w1 < n && w2 < n {
                        pairs.push(ComparePair::new(w1, w2));
                    }
                }
            }
        }
    }

    Network::new(n, pairs)
}
