//! # sortnet: fixed-size SIMD sorting kernels
//!
//! sortnet turns a sorting-network family and a size N into a short program
//! of lane-parallel rounds. Each round is one permute, one min, one max and
//! one blend on a vector register, so sorting N elements runs as a handful
//! of SIMD instructions with no branches.
//!
//! ## Pipeline
//!
//! 1. **Network generation** ([`network`]): bitonic, Batcher merge-exchange,
//!    Bose-Nelson, odd-even merge, balanced, or a table of minimal-depth
//!    networks for N up to 31.
//!
//! 2. **Canonicalization** ([`transform::canonicalize`]): flips descending
//!    comparators and relabels every later comparator so the network keeps
//!    sorting ascending.
//!
//! 3. **Grouping** ([`transform::group`]): greedily schedules comparators
//!    into rounds touching disjoint positions, never reordering two
//!    comparators that share a position.
//!
//! 4. **Synthesis** ([`transform::synthesize`]): per round, the partner index
//!    array and the mask of lanes that keep the minimum.
//!
//! A [`LoweringBackend`] turns rounds into vector operations. The bundled
//! [`ScalarBackend`] emulates lanes portably and backs [`SortKernel`].
//!
//! ## Usage
//!
//! ```
//! use sortnet::{build, Family};
//!
//! let program = build(Family::Bitonic, 8).unwrap();
//! assert_eq!(program.depth(), 6);
//! for plan in &program.rounds {
//!     println!("{:?} {:#x}", plan.partner.to_register_order(), plan.mask.bits());
//! }
//! ```
//!
//! Sorting with the scalar backend:
//!
//! ```
//! use sortnet::{Family, KernelConfig, SortKernel};
//!
//! let kernel = SortKernel::<i32>::new(Family::Best, 6, KernelConfig::default()).unwrap();
//! let mut data = [4, -2, 9, 0, 3, 3];
//! kernel.sort(&mut data).unwrap();
//! assert_eq!(data, [-2, 0, 3, 3, 4, 9]);
//! ```

pub mod backend;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod kernel;
pub mod network;
pub mod program;
pub mod render;
pub mod transform;
pub mod verify;

// Re-export primary components
pub use backend::{LoweringBackend, RoundContract, ScalarBackend, SortElement};
pub use cache::{build_all, ProgramCache};
pub use config::{
    detect_instruction_set, ElementType, InstructionSet, KernelConfig, LoadMode,
    OptimizationPreference, SystemParameters,
};
pub use error::{NetworkError, Result};
pub use kernel::SortKernel;
pub use network::{generate, ComparePair, Family, Network, Position};
pub use program::{build, build_with_lanes, CompiledProgram, LanePolicy, RoundPlan};
pub use transform::{canonicalize, group, synthesize, PartnerArray, ParticipationMask, Role, Round};

/// Version information for the sortnet library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
