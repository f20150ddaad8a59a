//! Configuration and system parameters for kernel generation

use crate::constants::{
    ENV_EXTRA_MEMORY, ENV_INSTRUCTION_SET, MAX_REGISTER_BYTES, MIN_REGISTER_BYTES,
};
use crate::error::{NetworkError, Result};
use crate::network::PowerOfTwo;

/// Element types a kernel can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ElementType {
    /// Width of one lane in bytes
    pub fn bytes(&self) -> usize {
        match self {
            ElementType::U8 | ElementType::I8 => 1,
            ElementType::U16 | ElementType::I16 => 2,
            ElementType::U32 | ElementType::I32 | ElementType::F32 => 4,
            ElementType::U64 | ElementType::I64 | ElementType::F64 => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementType::U8 => "uint8_t",
            ElementType::U16 => "uint16_t",
            ElementType::U32 => "uint32_t",
            ElementType::U64 => "uint64_t",
            ElementType::I8 => "int8_t",
            ElementType::I16 => "int16_t",
            ElementType::I32 => "int32_t",
            ElementType::I64 => "int64_t",
            ElementType::F32 => "float",
            ElementType::F64 => "double",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "u8" | "uint8_t" => Ok(ElementType::U8),
            "u16" | "uint16_t" => Ok(ElementType::U16),
            "u32" | "uint32_t" => Ok(ElementType::U32),
            "u64" | "uint64_t" => Ok(ElementType::U64),
            "i8" | "int8_t" => Ok(ElementType::I8),
            "i16" | "int16_t" => Ok(ElementType::I16),
            "i32" | "int32_t" => Ok(ElementType::I32),
            "i64" | "int64_t" => Ok(ElementType::I64),
            "f32" | "float" => Ok(ElementType::F32),
            "f64" | "double" => Ok(ElementType::F64),
            other => Err(format!("unknown element type '{}'", other)),
        }
    }
}

/// Instruction set the lowering backend may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstructionSet {
    /// Portable lane-by-lane emulation
    Scalar,
    /// SSE up to 4.2, 128-bit registers
    Sse,
    /// AVX2, 256-bit registers
    Avx2,
    /// AVX-512 F/BW/VL, 512-bit registers
    Avx512,
}

impl InstructionSet {
    /// Widest register available, in bytes
    pub fn register_bytes(&self) -> usize {
        match self {
            InstructionSet::Scalar => MIN_REGISTER_BYTES,
            InstructionSet::Sse => 16,
            InstructionSet::Avx2 => 32,
            InstructionSet::Avx512 => MAX_REGISTER_BYTES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InstructionSet::Scalar => "scalar",
            InstructionSet::Sse => "sse",
            InstructionSet::Avx2 => "avx2",
            InstructionSet::Avx512 => "avx512",
        }
    }
}

impl std::fmt::Display for InstructionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for InstructionSet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" | "none" => Ok(InstructionSet::Scalar),
            "sse" | "sse4" => Ok(InstructionSet::Sse),
            "avx2" | "avx" => Ok(InstructionSet::Avx2),
            "avx512" => Ok(InstructionSet::Avx512),
            other => Err(format!("unknown instruction set '{}'", other)),
        }
    }
}

/// What the backend should favour when several encodings fit a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationPreference {
    /// Fewer instruction bytes, may load shuffle constants from memory
    Space,
    /// Fewer uops
    Uop,
}

/// How a kernel reads and writes the caller's buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadMode {
    /// Touch exactly `n` elements
    Partial,
    /// Read a full register of memory; the buffer must hold `lanes` elements.
    /// Only the first `n` are ever written back.
    Full,
}

/// System parameters for batch generation
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of threads to use
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(),
        }
    }
}

/// Configuration for building and running kernels
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Element type the kernel sorts
    pub element: ElementType,
    /// Target instruction set
    pub instruction_set: InstructionSet,
    /// Encoding preference passed through to the backend
    pub preference: OptimizationPreference,
    /// Buffer access mode
    pub load_mode: LoadMode,
    /// System parameters for batch generation
    pub system_params: SystemParameters,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::for_instruction_set(detect_instruction_set()).with_env_overrides()
    }
}

impl KernelConfig {
    /// Create a config for a specific instruction set, ignoring the environment
    pub fn for_instruction_set(instruction_set: InstructionSet) -> Self {
        Self {
            element: ElementType::U32,
            instruction_set,
            preference: OptimizationPreference::Uop,
            load_mode: LoadMode::Partial,
            system_params: SystemParameters::default(),
        }
    }

    pub fn with_element(mut self, element: ElementType) -> Self {
        self.element = element;
        self
    }

    pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
        self.load_mode = load_mode;
        self
    }

    /// Apply `SORTNET_ISA` and `SORTNET_EXTRA_MEMORY`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(ENV_INSTRUCTION_SET) {
            match value.parse() {
                Ok(isa) => self.instruction_set = isa,
                Err(e) => log::warn!("ignoring {}: {}", ENV_INSTRUCTION_SET, e),
            }
        }
        if let Ok(value) = std::env::var(ENV_EXTRA_MEMORY) {
            if !matches!(value.as_str(), "" | "0" | "false") {
                self.load_mode = LoadMode::Full;
            }
        }
        self
    }

    /// Lane count a kernel for `n` elements uses.
    ///
    /// The next power of two, widened to fill at least the smallest
    /// register. `n` elements must fit in the widest register.
    pub fn lane_count(&self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(NetworkError::InvalidSize(n));
        }
        let bytes = self.element.bytes();
        if n * bytes > MAX_REGISTER_BYTES {
            return Err(NetworkError::InvalidLaneWidth {
                lanes: MAX_REGISTER_BYTES / bytes,
                size: n,
            });
        }
        Ok(PowerOfTwo::at_least(n)
            .value()
            .max(MIN_REGISTER_BYTES / bytes))
    }

    /// Register width in bytes a kernel for `n` elements occupies
    pub fn register_bytes(&self, n: usize) -> Result<usize> {
        Ok(self.lane_count(n)? * self.element.bytes())
    }
}

/// Detects the widest instruction set usable on this machine
pub fn detect_instruction_set() -> InstructionSet {
    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(target_feature = "avx512bw")]
        {
            return InstructionSet::Avx512;
        }
        #[cfg(not(target_feature = "avx512bw"))]
        {
            if std::is_x86_feature_detected!("avx512f")
                && std::is_x86_feature_detected!("avx512bw")
                && std::is_x86_feature_detected!("avx512vl")
            {
                return InstructionSet::Avx512;
            } else if std::is_x86_feature_detected!("avx2") {
                return InstructionSet::Avx2;
            } else if std::is_x86_feature_detected!("sse4.2") {
                return InstructionSet::Sse;
            }
        }
    }

    #[allow(unreachable_code)]
    InstructionSet::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_count_widens_small_types() {
        let config = KernelConfig::for_instruction_set(InstructionSet::Avx512);
        assert_eq!(config.lane_count(3).unwrap(), 4);
        assert_eq!(config.lane_count(1).unwrap(), 2);
        assert_eq!(config.lane_count(16).unwrap(), 16);

        let bytes = config.clone().with_element(ElementType::U8);
        assert_eq!(bytes.lane_count(3).unwrap(), 8);
        assert_eq!(bytes.lane_count(9).unwrap(), 16);
        assert_eq!(bytes.lane_count(64).unwrap(), 64);
        assert_eq!(bytes.register_bytes(9).unwrap(), 16);
    }

    #[test]
    fn test_lane_count_rejects_oversized() {
        let config = KernelConfig::for_instruction_set(InstructionSet::Scalar)
            .with_element(ElementType::F64);
        assert_eq!(config.lane_count(8).unwrap(), 8);
        assert!(matches!(
            config.lane_count(9),
            Err(NetworkError::InvalidLaneWidth { lanes: 8, size: 9 })
        ));
        assert_eq!(config.lane_count(0), Err(NetworkError::InvalidSize(0)));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("avx2".parse::<InstructionSet>(), Ok(InstructionSet::Avx2));
        assert_eq!("AVX512".parse::<InstructionSet>(), Ok(InstructionSet::Avx512));
        assert_eq!("int16_t".parse::<ElementType>(), Ok(ElementType::I16));
        assert_eq!("f64".parse::<ElementType>(), Ok(ElementType::F64));
        assert!("neon".parse::<InstructionSet>().is_err());
    }

    #[test]
    fn test_detection_is_consistent() {
        let isa = detect_instruction_set();
        assert!(isa.register_bytes() >= MIN_REGISTER_BYTES);
        assert!(isa.register_bytes() <= MAX_REGISTER_BYTES);
    }
}
