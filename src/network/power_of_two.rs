//! Power-of-two sizes used by the recursive constructions
//!
//! Several families pad the network to the next power of two and prune
//! pairs that land past the real size. Keeping the padded size in its own
//! type makes that rounding explicit instead of leaving it to bit tricks
//! scattered through the generators.

/// A power of two value, guaranteed at the type level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerOfTwo {
    value: usize,
    log2_value: u32,
}

impl PowerOfTwo {
    /// Create a new PowerOfTwo from a value
    /// Returns None if the value is not a power of two
    pub fn new(value: usize) -> Option<Self> {
        if value.is_power_of_two() {
            Some(PowerOfTwo {
                value,
                log2_value: value.trailing_zeros(),
            })
        } else {
            None
        }
    }

    /// Create from a log2 value (e.g., 3 creates 8)
    pub fn from_log2(log2_value: u32) -> Self {
        PowerOfTwo {
            value: 1 << log2_value,
            log2_value,
        }
    }

    /// Smallest power of two >= n (1 for n = 0)
    pub fn at_least(n: usize) -> Self {
        Self::from_log2(n.max(1).next_power_of_two().trailing_zeros())
    }

    /// Get the raw value
    pub fn value(&self) -> usize {
        self.value
    }

    /// Get the log2 of the value
    pub fn log2(&self) -> u32 {
        self.log2_value
    }

    /// Descending sequence `value, value/2, .., 1`
    pub fn descending(&self) -> impl Iterator<Item = PowerOfTwo> {
        (0..=self.log2_value).rev().map(PowerOfTwo::from_log2)
    }
}

/// Largest power of two strictly below `n`, used by the bitonic merge split
pub fn split_point(n: usize) -> usize {
    PowerOfTwo::at_least(n).value() >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two() {
        assert!(PowerOfTwo::new(0).is_none());
        assert!(PowerOfTwo::new(3).is_none());
        assert!(PowerOfTwo::new(5).is_none());

        let p4 = PowerOfTwo::new(4).unwrap();
        assert_eq!(p4.value(), 4);
        assert_eq!(p4.log2(), 2);

        let p16 = PowerOfTwo::from_log2(4);
        assert_eq!(p16.value(), 16);
        assert_eq!(p16.log2(), 4);
    }

    #[test]
    fn test_at_least_rounds_up() {
        assert_eq!(PowerOfTwo::at_least(0).value(), 1);
        assert_eq!(PowerOfTwo::at_least(1).value(), 1);
        assert_eq!(PowerOfTwo::at_least(5).value(), 8);
        assert_eq!(PowerOfTwo::at_least(8).value(), 8);
        assert_eq!(PowerOfTwo::at_least(17).log2(), 5);
    }

    #[test]
    fn test_descending_and_split() {
        let values: Vec<_> = PowerOfTwo::from_log2(3)
            .descending()
            .map(|p| p.value())
            .collect();
        assert_eq!(values, vec![8, 4, 2, 1]);

        assert_eq!(split_point(2), 1);
        assert_eq!(split_point(5), 4);
        assert_eq!(split_point(8), 4);
        assert_eq!(split_point(12), 8);
    }
}
