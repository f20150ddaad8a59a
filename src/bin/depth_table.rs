//! Depth and comparator counts for every family
//!
//! Builds all (family, n) programs in parallel and prints one row per size.

use sortnet::{build_all, Family, LanePolicy, SystemParameters};

fn main() {
    env_logger::init();

    let max_n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(32usize)
        .min(sortnet::constants::MAX_LANES);

    let families = [
        Family::Bitonic,
        Family::Batcher,
        Family::BoseNelson,
        Family::OddEven,
        Family::Balanced,
        Family::Minimum,
    ];
    let requests: Vec<(Family, usize)> = (2..=max_n)
        .flat_map(|n| families.iter().map(move |&f| (f, n)))
        .collect();
    let programs = build_all(&requests, LanePolicy::NextPowerOfTwo, &SystemParameters::default());

    println!("sortnet depth / comparators");
    println!("===========================\n");
    print!("{:>4}", "n");
    for family in &families {
        print!(" {:>12}", family.name());
    }
    println!();

    for (row, n) in programs.chunks(families.len()).zip(2..) {
        print!("{:>4}", n);
        for program in row {
            match program {
                Ok(p) => print!(" {:>12}", format!("{}/{}", p.depth(), p.comparators())),
                Err(_) => print!(" {:>12}", "-"),
            }
        }
        println!();
    }
}
