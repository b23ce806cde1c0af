//! Windowed statistics over a series.
//!
//! All rolling functions emit a NaN warm-up prefix of `window - 1` values,
//! then one value per full window. A NaN anywhere inside a window makes
//! that window's output NaN, but later windows that no longer contain the
//! NaN recover. Each window is recomputed from scratch so a single bad
//! value never poisons the rest of the output.

use crate::error::{Result, TaError};
use crate::num::Real;
use crate::series::Series;

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(TaError::InvalidParameter {
            name: "window",
            value: window.to_string(),
            expected: "window >= 1",
        });
    }
    Ok(())
}

fn window_sum<T: Real>(window: &[T]) -> T {
    let mut acc = T::ZERO;
    for &x in window {
        if x.is_nan() {
            return T::NAN;
        }
        acc = acc + x;
    }
    acc
}

/// Rolling sum with window `window`.
///
/// # Errors
///
/// Returns [`TaError::InvalidParameter`] if `window` is zero.
pub fn rolling_sum<T: Real>(data: &Series<T>, window: usize) -> Result<Series<T>> {
    check_window(window)?;
    let slice = data.as_slice();
    let mut out = vec![T::NAN; slice.len()];
    for i in (window - 1)..slice.len() {
        out[i] = window_sum(&slice[i + 1 - window..=i]);
    }
    Ok(Series::from_vec(out))
}

/// Rolling arithmetic mean with window `window`.
///
/// # Errors
///
/// Returns [`TaError::InvalidParameter`] if `window` is zero.
pub fn rolling_mean<T: Real>(data: &Series<T>, window: usize) -> Result<Series<T>> {
    check_window(window)?;
    let slice = data.as_slice();
    let denom = T::from_usize_lossy(window);
    let mut out = vec![T::NAN; slice.len()];
    for i in (window - 1)..slice.len() {
        out[i] = window_sum(&slice[i + 1 - window..=i]) / denom;
    }
    Ok(Series::from_vec(out))
}

/// Rolling sample standard deviation (ddof = 1) with window `window`.
///
/// A window of 1 yields NaN everywhere, matching the sample convention.
///
/// # Errors
///
/// Returns [`TaError::InvalidParameter`] if `window` is zero.
pub fn rolling_std<T: Real>(data: &Series<T>, window: usize) -> Result<Series<T>> {
    check_window(window)?;
    let slice = data.as_slice();
    let mut out = vec![T::NAN; slice.len()];
    if window == 1 {
        return Ok(Series::from_vec(out));
    }

    let n = T::from_usize_lossy(window);
    let ddof = n - T::ONE;
    for i in (window - 1)..slice.len() {
        let win = &slice[i + 1 - window..=i];
        let sum = window_sum(win);
        if sum.is_nan() {
            continue;
        }
        let mean = sum / n;
        let mut ss = T::ZERO;
        for &x in win {
            let d = x - mean;
            ss = ss + d * d;
        }
        out[i] = (ss / ddof).sqrt();
    }
    Ok(Series::from_vec(out))
}

/// Exponentially weighted mean over `span`, start-adjusted.
///
/// Weights are `(1 - alpha)^k` with `alpha = 2 / (span + 1)`, normalized
/// over the observations seen so far. The first output equals the first
/// input, and there is no NaN warm-up prefix. NaN inputs do not contribute
/// weight and the running mean carries forward across them.
///
/// # Errors
///
/// Returns [`TaError::InvalidParameter`] if `span` is zero.
pub fn ewm_mean<T: Real>(data: &Series<T>, span: usize) -> Result<Series<T>> {
    if span == 0 {
        return Err(TaError::InvalidParameter {
            name: "span",
            value: span.to_string(),
            expected: "span >= 1",
        });
    }

    let slice = data.as_slice();
    let alpha = T::TWO / (T::from_usize_lossy(span) + T::ONE);
    let decay = T::ONE - alpha;

    let mut out = vec![T::NAN; slice.len()];
    let mut num = T::ZERO;
    let mut den = T::ZERO;
    for (i, &x) in slice.iter().enumerate() {
        num = num * decay;
        den = den * decay;
        if !x.is_nan() {
            num = num + x;
            den = den + T::ONE;
        }
        if den > T::ZERO {
            out[i] = num / den;
        }
    }
    Ok(Series::from_vec(out))
}
