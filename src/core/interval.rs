//! Scalar interval bounds.

use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]` constraining one scalar quantity.
///
/// Either end may be infinite; an interval whose ends coincide pins the
/// scalar to a single value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound (may be `f64::NEG_INFINITY`).
    pub lower: f64,
    /// Upper bound (may be `f64::INFINITY`).
    pub upper: f64,
}

impl Interval {
    /// Create an interval from explicit bounds.
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Interval pinning the scalar to exactly `value`.
    #[inline]
    pub fn exact(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Interval bounded from below only.
    #[inline]
    pub fn at_least(lower: f64) -> Self {
        Self::new(lower, f64::INFINITY)
    }

    /// Interval bounded from above only.
    #[inline]
    pub fn at_most(upper: f64) -> Self {
        Self::new(f64::NEG_INFINITY, upper)
    }

    /// Interval `[lower, upper]`.
    #[inline]
    pub fn between(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper)
    }

    /// Interval admitting any value.
    #[inline]
    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// True if the bounds coincide (the interval is a single value).
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    /// True if the lower bound is finite.
    #[inline]
    pub fn is_lower_bounded(&self) -> bool {
        self.lower > f64::NEG_INFINITY
    }

    /// True if the upper bound is finite.
    #[inline]
    pub fn is_upper_bounded(&self) -> bool {
        self.upper < f64::INFINITY
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let i = Interval::exact(3.0);
        assert!(i.is_exact());
        assert!(i.is_lower_bounded());
        assert!(i.is_upper_bounded());
    }

    #[test]
    fn test_half_bounded() {
        let lo = Interval::at_least(1.0);
        assert!(!lo.is_exact());
        assert!(lo.is_lower_bounded());
        assert!(!lo.is_upper_bounded());

        let hi = Interval::at_most(2.0);
        assert!(!hi.is_lower_bounded());
        assert!(hi.is_upper_bounded());
    }

    #[test]
    fn test_unbounded() {
        let i = Interval::unbounded();
        assert!(!i.is_exact());
        assert!(!i.is_lower_bounded());
        assert!(!i.is_upper_bounded());
    }
}
