//! Wilder's recursive smoothing.
//!
//! Both the summed and averaged forms share the same shape: a rolling seed
//! at a fixed index, then a one-step recursion over the remaining values.
//! ADX smooths true range and directional movement with the summed form,
//! while RSI and the final ADX average use the mean form.

use crate::error::Result;
use crate::num::Real;
use crate::rolling::{rolling_mean, rolling_sum};
use crate::series::Series;

/// Which recursion the smoother applies after seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WilderMode {
    /// `out[i] = out[i-1] - out[i-1] / window + x[i]`, seeded with a
    /// rolling sum.
    Sum,
    /// `out[i] = (out[i-1] * (window - 1) + x[i]) / window`, seeded with a
    /// rolling mean.
    Mean,
}

/// Smooth `data` with Wilder's recursion.
///
/// The output is NaN before `seed_index`. At `seed_index` it takes the
/// rolling sum or mean (per `mode`) of the trailing `window` values, and
/// from there follows the recursion. A NaN seed propagates forward only
/// until the recursion re-stabilizes through incoming finite values; with
/// the standard seeds it simply stays NaN, matching the underlying
/// arithmetic.
///
/// # Errors
///
/// Returns an error if `window` is zero.
pub fn wilder_smooth<T: Real>(
    data: &Series<T>,
    window: usize,
    seed_index: usize,
    mode: WilderMode,
) -> Result<Series<T>> {
    let seeded = match mode {
        WilderMode::Sum => rolling_sum(data, window)?,
        WilderMode::Mean => rolling_mean(data, window)?,
    };

    let slice = data.as_slice();
    let n = T::from_usize_lossy(window);
    let mut out = vec![T::NAN; slice.len()];

    if seed_index >= slice.len() {
        return Ok(Series::from_vec(out));
    }

    out[seed_index] = seeded[seed_index];
    for i in (seed_index + 1)..slice.len() {
        let prev = out[i - 1];
        out[i] = match mode {
            WilderMode::Sum => prev - prev / n + slice[i],
            WilderMode::Mean => (prev * (n - T::ONE) + slice[i]) / n,
        };
    }
    Ok(Series::from_vec(out))
}
