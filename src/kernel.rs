//! Fixed-size sort kernels
//!
//! A [`SortKernel`] binds a compiled program to a backend and an element
//! type. Running it is load, one compare-exchange per round, store; there
//! is no data-dependent control flow.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::backend::{LoweringBackend, RoundContract, ScalarBackend, SortElement};
use crate::config::{KernelConfig, LoadMode};
use crate::error::{NetworkError, Result};
use crate::network::Family;
use crate::program::{build_with_lanes, CompiledProgram, LanePolicy};

/// Sort kernel for exactly `size` elements of type `T`
#[derive(Debug, Clone)]
pub struct SortKernel<T: SortElement, B: LoweringBackend<T> = ScalarBackend> {
    program: Arc<CompiledProgram>,
    backend: B,
    config: KernelConfig,
    _marker: PhantomData<T>,
}

impl<T: SortElement> SortKernel<T, ScalarBackend> {
    /// Build a kernel on the scalar backend.
    ///
    /// The lane count follows [`KernelConfig::lane_count`] for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortnet::{Family, KernelConfig, SortKernel};
    ///
    /// let kernel = SortKernel::<u8>::new(Family::Minimum, 5, KernelConfig::default()).unwrap();
    /// let mut data = [9u8, 4, 7, 1, 3];
    /// kernel.sort(&mut data).unwrap();
    /// assert_eq!(data, [1, 3, 4, 7, 9]);
    /// ```
    pub fn new(family: Family, n: usize, config: KernelConfig) -> Result<Self> {
        let config = config.with_element(T::TYPE);
        let lanes = config.lane_count(n)?;
        let program = build_with_lanes(family, n, LanePolicy::Fixed(lanes))?;
        Self::with_backend(Arc::new(program), ScalarBackend::new(), config)
    }
}

impl<T: SortElement, B: LoweringBackend<T>> SortKernel<T, B> {
    /// Bind an existing program to `backend`
    pub fn with_backend(
        program: Arc<CompiledProgram>,
        backend: B,
        config: KernelConfig,
    ) -> Result<Self> {
        let config = config.with_element(T::TYPE);
        let max_lanes = crate::constants::MAX_REGISTER_BYTES / T::BYTES;
        if program.lanes > max_lanes {
            return Err(NetworkError::InvalidLaneWidth {
                lanes: program.lanes,
                size: program.size,
            });
        }
        Ok(SortKernel {
            program,
            backend,
            config,
            _marker: PhantomData,
        })
    }

    pub fn size(&self) -> usize {
        self.program.size
    }

    pub fn program(&self) -> &CompiledProgram {
        &self.program
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Smallest buffer `sort` accepts under the configured load mode
    pub fn required_len(&self) -> usize {
        match self.config.load_mode {
            LoadMode::Partial => self.program.size,
            LoadMode::Full => self.program.lanes,
        }
    }

    /// Sort the first `size` elements of `data` in place.
    ///
    /// Elements past `size` are never written.
    pub fn sort(&self, data: &mut [T]) -> Result<()> {
        let needed = self.required_len();
        if data.len() < needed {
            return Err(NetworkError::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }

        let (n, lanes, mode) = (self.program.size, self.program.lanes, self.config.load_mode);
        let mut v = self.backend.load(data, n, lanes, mode);
        for plan in &self.program.rounds {
            let contract = RoundContract::new(plan, &self.config);
            v = self.backend.compare_exchange(v, &contract);
        }
        self.backend.store(&v, data, n, mode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstructionSet;

    fn config() -> KernelConfig {
        KernelConfig::for_instruction_set(InstructionSet::Scalar)
    }

    #[test]
    fn test_sort_every_family() {
        for family in Family::ALL {
            let kernel = SortKernel::<i32>::new(family, 7, config()).unwrap();
            let mut data = [3, -1, 7, 0, 2, 9, -5];
            kernel.sort(&mut data).unwrap();
            assert_eq!(data, [-5, -1, 0, 2, 3, 7, 9], "family {}", family);
        }
    }

    #[test]
    fn test_tail_untouched() {
        let kernel = SortKernel::<u16>::new(Family::Batcher, 5, config()).unwrap();
        let mut data = [5u16, 4, 3, 2, 1, 0, 0];
        kernel.sort(&mut data).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 5, 0, 0]);
    }

    #[test]
    fn test_full_load_needs_register_of_memory() {
        let config = config().with_load_mode(LoadMode::Full);
        let kernel = SortKernel::<u32>::new(Family::Bitonic, 5, config).unwrap();
        assert_eq!(kernel.required_len(), 8);

        let mut short = [3u32, 2, 1, 0, 4];
        assert_eq!(
            kernel.sort(&mut short),
            Err(NetworkError::BufferTooSmall {
                needed: 8,
                actual: 5
            })
        );

        let mut data = [3u32, 2, 1, 0, 4, 0, 0, 0];
        kernel.sort(&mut data).unwrap();
        assert_eq!(data, [0, 1, 2, 3, 4, 0, 0, 0]);
    }

    #[test]
    fn test_lane_count_for_bytes() {
        let kernel = SortKernel::<u8>::new(Family::OddEven, 3, config()).unwrap();
        assert_eq!(kernel.program().lanes, 8);

        assert!(matches!(
            SortKernel::<u64>::new(Family::Bitonic, 9, config()),
            Err(NetworkError::InvalidLaneWidth { .. })
        ));
    }

    #[test]
    fn test_float_kernel_with_infinity() {
        let kernel = SortKernel::<f64>::new(Family::Minimum, 3, config()).unwrap();
        let mut data = [f64::INFINITY, -0.5, 2.0];
        kernel.sort(&mut data).unwrap();
        assert_eq!(data, [-0.5, 2.0, f64::INFINITY]);
    }
}
