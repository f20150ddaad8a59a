//! Program cache and parallel batch generation
//!
//! Every (family, size, lanes) program is independent of every other, so a
//! batch is an embarrassingly parallel map. The cache only avoids
//! rebuilding a program that was already produced.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rayon::prelude::*;

use crate::config::SystemParameters;
use crate::error::Result;
use crate::network::Family;
use crate::program::{build_with_lanes, CompiledProgram, LanePolicy};

/// Cache key: family, size and lane count
pub type ProgramKey = (Family, usize, usize);

/// Thread-safe cache of compiled programs
#[derive(Debug, Default)]
pub struct ProgramCache {
    programs: Mutex<HashMap<ProgramKey, Arc<CompiledProgram>>>,
}

impl ProgramCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached program for `(family, n)` under `policy`, built on first use
    pub fn get_or_build(
        &self,
        family: Family,
        n: usize,
        policy: LanePolicy,
    ) -> Result<Arc<CompiledProgram>> {
        let key = (family, n, policy.lanes_for(n)?);
        if let Some(program) = self.lock().get(&key) {
            log::trace!("cache hit: {} n={} lanes={}", family, n, key.2);
            return Ok(Arc::clone(program));
        }

        // Built outside the lock; a racing builder produces the same program
        let program = Arc::new(build_with_lanes(family, n, policy)?);
        Ok(Arc::clone(self.lock().entry(key).or_insert(program)))
    }

    /// Build every request in parallel into the cache
    pub fn prefill(
        &self,
        requests: &[(Family, usize)],
        policy: LanePolicy,
        params: &SystemParameters,
    ) -> Vec<Result<Arc<CompiledProgram>>> {
        run_in_pool(params, || {
            requests
                .par_iter()
                .map(|&(family, n)| self.get_or_build(family, n, policy))
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ProgramKey, Arc<CompiledProgram>>> {
        // Entries are inserted whole, so a poisoned map is still consistent
        self.programs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Build many programs in parallel, results in request order
pub fn build_all(
    requests: &[(Family, usize)],
    policy: LanePolicy,
    params: &SystemParameters,
) -> Vec<Result<CompiledProgram>> {
    run_in_pool(params, || {
        requests
            .par_iter()
            .map(|&(family, n)| build_with_lanes(family, n, policy))
            .collect()
    })
}

/// Run `op` on a pool sized by `params.n_threads`, or the global pool if
/// that cannot be created
fn run_in_pool<R: Send>(params: &SystemParameters, op: impl FnOnce() -> R + Send) -> R {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(params.n_threads)
        .build()
    {
        Ok(pool) => pool.install(op),
        Err(e) => {
            log::warn!("falling back to the global rayon pool: {}", e);
            op()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_same_program() {
        let cache = ProgramCache::new();
        let a = cache.get_or_build(Family::Bitonic, 8, LanePolicy::NextPowerOfTwo).unwrap();
        let b = cache.get_or_build(Family::Bitonic, 8, LanePolicy::Fixed(8)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get_or_build(Family::Bitonic, 8, LanePolicy::Fixed(16)).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = ProgramCache::new();
        assert!(cache.get_or_build(Family::Minimum, 40, LanePolicy::NextPowerOfTwo).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_build_all_keeps_order() {
        let params = SystemParameters { n_threads: 2 };
        let requests: Vec<_> = (2..=16).map(|n| (Family::Batcher, n)).collect();
        let programs = build_all(&requests, LanePolicy::NextPowerOfTwo, &params);
        for (program, &(_, n)) in programs.iter().zip(&requests) {
            assert_eq!(program.as_ref().unwrap().size, n);
        }

        let cache = ProgramCache::new();
        let filled = cache.prefill(&requests, LanePolicy::NextPowerOfTwo, &params);
        assert!(filled.iter().all(|r| r.is_ok()));
        assert_eq!(cache.len(), requests.len());
    }
}
