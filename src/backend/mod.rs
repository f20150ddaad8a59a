//! Lowering backend contract
//!
//! The pipeline stops at one [`RoundContract`] per round. A backend turns
//! that into vector instructions: a load, one compare-exchange per round and
//! a store. [`ScalarBackend`] emulates the lanes in portable code and is what
//! the kernel runs on when no hardware backend is plugged in.

pub mod scalar;

use crate::config::{ElementType, InstructionSet, KernelConfig, LoadMode, OptimizationPreference};
use crate::program::RoundPlan;
use crate::transform::{roles, PartnerArray, ParticipationMask, Role};
pub use scalar::ScalarBackend;

/// Element types a kernel can sort
pub trait SortElement: Copy + PartialOrd + num_traits::Bounded + Send + Sync + 'static {
    const TYPE: ElementType;

    /// Lane width in bytes
    const BYTES: usize = std::mem::size_of::<Self>();

    /// Value padding lanes are filled with; nothing real sorts above it
    fn padding() -> Self {
        Self::max_value()
    }
}

macro_rules! sort_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(impl SortElement for $t {
            const TYPE: ElementType = ElementType::$variant;
        })*
    };
}

impl SortElement for f32 {
    const TYPE: ElementType = ElementType::F32;

    fn padding() -> Self {
        f32::INFINITY
    }
}

impl SortElement for f64 {
    const TYPE: ElementType = ElementType::F64;

    fn padding() -> Self {
        f64::INFINITY
    }
}

sort_element! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

/// Everything a backend is told about one round
#[derive(Debug, Clone, Copy)]
pub struct RoundContract<'a> {
    pub lanes: usize,
    pub partner: &'a PartnerArray,
    pub mask: ParticipationMask,
    pub element: ElementType,
    pub instruction_set: InstructionSet,
    pub preference: OptimizationPreference,
}

impl<'a> RoundContract<'a> {
    pub fn new(plan: &'a RoundPlan, config: &KernelConfig) -> Self {
        RoundContract {
            lanes: plan.partner.lanes(),
            partner: &plan.partner,
            mask: plan.mask,
            element: config.element,
            instruction_set: config.instruction_set,
            preference: config.preference,
        }
    }

    pub fn roles(&self) -> Vec<Role> {
        roles(self.partner, self.mask)
    }

    /// Register width in bytes this round operates on
    pub fn register_bytes(&self) -> usize {
        self.lanes * self.element.bytes()
    }
}

/// Turns round contracts into vector operations
pub trait LoweringBackend<T: SortElement> {
    /// One register worth of lanes
    type Vector;

    /// Read `n` elements into `lanes` lanes; lanes past `n` hold `T::padding()`
    fn load(&self, src: &[T], n: usize, lanes: usize, mode: LoadMode) -> Self::Vector;

    /// Execute one round
    fn compare_exchange(&self, v: Self::Vector, round: &RoundContract<'_>) -> Self::Vector;

    /// Write the first `n` lanes back
    fn store(&self, v: &Self::Vector, dst: &mut [T], n: usize, mode: LoadMode);
}
