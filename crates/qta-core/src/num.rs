//! Numeric abstraction over `f32` and `f64`.

use num_traits::{Float, FromPrimitive, ToPrimitive};
use serde::{de::DeserializeOwned, Serialize};

/// Floating-point types usable in indicator and metric computations.
///
/// Implemented for `f32` and `f64`. The associated constants cover the
/// literals the formulas need without sprinkling `from_f64` conversions
/// through every call site.
pub trait Real:
    Float
    + FromPrimitive
    + ToPrimitive
    + Copy
    + Send
    + Sync
    + Default
    + core::fmt::Debug
    + core::fmt::Display
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Not-a-number, the "no value" sentinel for warm-up prefixes.
    const NAN: Self;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// Two (Bollinger band width multiplier, EWM alpha numerator).
    const TWO: Self;
    /// One hundred (percentage scaling for RSI, DI, DX).
    const HUNDRED: Self;

    /// Convert a count (window size, series length) to the float domain.
    #[must_use]
    fn from_usize_lossy(value: usize) -> Self;

    /// Convert an `f64` literal to the float domain.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;
}

impl Real for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize_lossy(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize_lossy(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(<f64 as Real>::NAN.is_nan());
        assert_eq!(<f64 as Real>::HUNDRED, 100.0);
        assert!(<f32 as Real>::NAN.is_nan());
        assert_eq!(<f32 as Real>::TWO, 2.0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f64::from_usize_lossy(14), 14.0);
        assert_eq!(f32::from_usize_lossy(14), 14.0f32);
        assert_eq!(f64::from_f64_lossy(2.5), 2.5);
    }
}
