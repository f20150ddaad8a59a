//! Network to lane-parallel rounds
//!
//! `canonicalize` makes every comparator ascending, `group` schedules the
//! comparators into rounds of disjoint positions, and `synthesize` turns
//! each round into the partner array and mask a backend lowers.

pub mod canonicalize;
pub mod group;
pub mod permutation;

pub use canonicalize::{canonicalize, is_canonical};
pub use group::{flatten, group, Round};
pub use permutation::{roles, synthesize, PartnerArray, ParticipationMask, Role};
