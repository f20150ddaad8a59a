//! Centralized constants for the sortnet kernel generator
//!
//! This module contains all hardcoded constants used throughout the codebase.
//! All new constants should be added here rather than scattered throughout the code.
//! Constants are organized by category for easy reference and maintenance.

// ============================================================================
// REGISTER GEOMETRY
// ============================================================================

/// Width in bytes of the smallest register a kernel is lowered to (__m64)
pub const MIN_REGISTER_BYTES: usize = 8;

/// Width in bytes of the widest register a kernel is lowered to (__m512)
pub const MAX_REGISTER_BYTES: usize = 64;

/// Maximum number of lanes a round can address (64 x 8-bit lanes)
///
/// The participation mask is a `u64`, one bit per lane.
pub const MAX_LANES: usize = 64;

/// Alignment used for scalar backend lane buffers
pub const LANE_BUFFER_ALIGNMENT: usize = 64;

// ============================================================================
// NETWORK FAMILY BOUNDS
// ============================================================================

/// Largest size served by the minimal network table
pub const MINIMUM_TABLE_MAX_N: usize = 31;

/// Above this size the `Best` family always falls back to bitonic
pub const BEST_MINIMUM_MAX_N: usize = MINIMUM_TABLE_MAX_N;

// ============================================================================
// VERIFICATION
// ============================================================================

/// Largest size for which the 0/1 principle is checked exhaustively
pub const EXHAUSTIVE_ZERO_ONE_MAX_N: usize = 24;

/// log2 of the number of 0/1 inputs evaluated per parallel block
pub const ZERO_ONE_BLOCK_LOG2: usize = 12;

/// Number of sampled 0/1 vectors above the exhaustive bound
pub const SAMPLED_ZERO_ONE_VECTORS: usize = 1 << 16;

/// Seed for sampled verification so failures are reproducible
pub const VERIFICATION_SEED: u64 = 0x5EED_50F7;

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

/// Forces the instruction set (`scalar`, `sse`, `avx2`, `avx512`)
pub const ENV_INSTRUCTION_SET: &str = "SORTNET_ISA";

/// Enables full-register loads and stores when set
pub const ENV_EXTRA_MEMORY: &str = "SORTNET_EXTRA_MEMORY";
