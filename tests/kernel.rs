//! Integration tests for sort kernels on the scalar backend

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sortnet::{
    Family, InstructionSet, KernelConfig, LanePolicy, LoadMode, ProgramCache, ScalarBackend,
    SortElement, SortKernel,
};

fn config(mode: LoadMode) -> KernelConfig {
    KernelConfig::for_instruction_set(InstructionSet::Scalar).with_load_mode(mode)
}

/// Sort `data` with a kernel and compare against the standard library
fn check_sorts<T>(family: Family, data: &[T])
where
    T: SortElement + std::fmt::Debug,
{
    let n = data.len();
    let kernel = SortKernel::<T>::new(family, n, config(LoadMode::Partial)).unwrap();
    let mut actual = data.to_vec();
    kernel.sort(&mut actual).unwrap();

    let mut expected = data.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(actual, expected, "{} n={} input {:?}", family, n, data);
}

#[test]
fn test_every_element_type() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for family in Family::ALL {
        let bytes: Vec<u8> = (0..31).map(|_| rng.gen()).collect();
        check_sorts(family, &bytes);
        let signed: Vec<i8> = (0..19).map(|_| rng.gen()).collect();
        check_sorts(family, &signed);

        let halves: Vec<u16> = (0..29).map(|_| rng.gen()).collect();
        check_sorts(family, &halves);
        let shorts: Vec<i16> = (0..13).map(|_| rng.gen()).collect();
        check_sorts(family, &shorts);

        let words: Vec<u32> = (0..16).map(|_| rng.gen()).collect();
        check_sorts(family, &words);
        let ints: Vec<i32> = (0..11).map(|_| rng.gen()).collect();
        check_sorts(family, &ints);
        let floats: Vec<f32> = (0..9).map(|_| rng.gen_range(-1.0e6..1.0e6)).collect();
        check_sorts(family, &floats);

        let longs: Vec<u64> = (0..8).map(|_| rng.gen()).collect();
        check_sorts(family, &longs);
        let signed_longs: Vec<i64> = (0..5).map(|_| rng.gen()).collect();
        check_sorts(family, &signed_longs);
        let doubles: Vec<f64> = (0..7).map(|_| rng.gen_range(-1.0..1.0)).collect();
        check_sorts(family, &doubles);
    }
}

#[test]
fn test_extreme_values_survive_padding() {
    for family in Family::ALL {
        check_sorts(family, &[u8::MAX, 0, u8::MAX, 7, u8::MAX]);
        check_sorts(family, &[i32::MAX, i32::MIN, 0, i32::MAX, -1, i32::MAX]);
        check_sorts(family, &[f32::INFINITY, f32::MAX, f32::NEG_INFINITY, 0.0, -0.5]);
    }
}

#[test]
fn test_padding_idempotence() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for family in Family::ALL {
        for n in [3, 5, 6, 7, 9, 12, 13, 17, 23, 30] {
            let partial = SortKernel::<u16>::new(family, n, config(LoadMode::Partial)).unwrap();
            let full = SortKernel::<u16>::new(family, n, config(LoadMode::Full)).unwrap();
            let lanes = full.required_len();
            assert!(lanes > n);

            for _ in 0..20 {
                let buffer: Vec<u16> = (0..lanes).map(|_| rng.gen()).collect();

                let mut a = buffer.clone();
                partial.sort(&mut a).unwrap();
                let mut b = buffer.clone();
                full.sort(&mut b).unwrap();

                assert_eq!(a[..n], b[..n], "{} n={}", family, n);
                // Memory past n is never written in either mode
                assert_eq!(a[n..], buffer[n..]);
                assert_eq!(b[n..], buffer[n..]);
            }
        }
    }
}

#[test]
fn test_full_load_ignores_small_tail_values() {
    // Zeros past `n` would sort to the front if the tail were not padded
    for family in Family::ALL {
        for n in [3, 5, 6, 7] {
            let kernel = SortKernel::<u8>::new(family, n, config(LoadMode::Full)).unwrap();
            let lanes = kernel.required_len();
            let mut buffer = vec![0u8; lanes];
            for (i, slot) in buffer[..n].iter_mut().enumerate() {
                *slot = 200 - 10 * i as u8;
            }

            kernel.sort(&mut buffer).unwrap();
            let expected: Vec<u8> = (0..n).rev().map(|i| 200 - 10 * i as u8).collect();
            assert_eq!(buffer[..n], expected[..], "{} n={}", family, n);
            assert!(buffer[n..].iter().all(|&x| x == 0));
        }
    }
}

#[test]
fn test_all_permutations_small() {
    fn permutations(items: &mut Vec<u8>, k: usize, out: &mut Vec<Vec<u8>>) {
        if k == items.len() {
            out.push(items.clone());
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permutations(items, k + 1, out);
            items.swap(k, i);
        }
    }

    for family in Family::ALL {
        for n in 2..=7 {
            let kernel = SortKernel::<u8>::new(family, n, config(LoadMode::Partial)).unwrap();
            let mut all = Vec::new();
            permutations(&mut (0..n as u8).collect(), 0, &mut all);
            for perm in all {
                let mut data = perm.clone();
                kernel.sort(&mut data).unwrap();
                assert!(
                    data.iter().copied().eq(0..n as u8),
                    "{} failed on {:?}",
                    family,
                    perm
                );
            }
        }
    }
}

#[test]
fn test_kernels_share_cached_programs() {
    let cache = ProgramCache::new();
    let config = config(LoadMode::Partial).with_element(u32::TYPE);
    let lanes = config.lane_count(12).unwrap();
    let program = cache
        .get_or_build(Family::OddEven, 12, LanePolicy::Fixed(lanes))
        .unwrap();

    let first = SortKernel::<u32, ScalarBackend>::with_backend(
        program.clone(),
        ScalarBackend::new(),
        config.clone(),
    )
    .unwrap();
    let second =
        SortKernel::<u32, ScalarBackend>::with_backend(program, ScalarBackend::new(), config)
            .unwrap();

    let mut data: Vec<u32> = (0..12).rev().collect();
    data.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    let mut other = data.clone();
    first.sort(&mut data).unwrap();
    second.sort(&mut other).unwrap();
    assert_eq!(data, (0..12).collect::<Vec<_>>());
    assert_eq!(data, other);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_wide_program_rejected_for_wide_elements() {
    let cache = ProgramCache::new();
    let program = cache
        .get_or_build(Family::Bitonic, 16, LanePolicy::NextPowerOfTwo)
        .unwrap();
    // 16 lanes of u64 is 128 bytes, wider than any register
    assert!(SortKernel::<u64, ScalarBackend>::with_backend(
        program,
        ScalarBackend::new(),
        config(LoadMode::Partial)
    )
    .is_err());
}
