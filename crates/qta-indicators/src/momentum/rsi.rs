//! Relative Strength Index (RSI).
//!
//! Price changes are split into gains and losses, each Wilder-mean
//! smoothed from a rolling-mean seed at position `ma`, and folded into the
//! 0-100 oscillator.

use qta_core::{wilder_smooth, DataFrame, PriceInput, Real, Result, WilderMode};

use crate::output::compose;
use crate::validate::{check_non_empty, check_period};

/// Columns kept in compact output.
const COMPACT: [&str; 1] = ["rsi"];

/// Compute RSI over a close series or frame.
///
/// Gains and losses carry NaN at position 0, where no change exists, and
/// the smoothed averages become defined at position `ma`. A stretch with
/// only gains saturates at 100, only losses at 0, and a constant series
/// stays NaN because both averages are zero.
///
/// Compact output holds the single `rsi` column; full output appends every
/// intermediate to the input columns.
///
/// # Errors
///
/// Returns an error if the close column cannot be resolved, the input is
/// empty, or `ma` is zero.
///
/// # Example
///
/// ```rust
/// use qta_indicators::momentum::rsi;
///
/// let prices: Vec<f64> = vec![1.0, 2.0, 3.0, 2.0, 3.0];
/// let out = rsi(&prices.into(), 2, false).unwrap();
/// let rsi = out.column("rsi").unwrap();
/// assert!(rsi[1].is_nan());
/// assert_eq!(rsi[2], 100.0);
/// ```
pub fn rsi<T: Real>(data: &PriceInput<T>, ma: usize, full_output: bool) -> Result<DataFrame<T>> {
    let close = data.close()?;
    check_non_empty(close.len())?;
    check_period("ma", ma)?;

    let delta = close.diff();
    let gain = delta.map(|d| {
        if d.is_nan() {
            T::NAN
        } else if d > T::ZERO {
            d
        } else {
            T::ZERO
        }
    });
    let loss = delta.map(|d| {
        if d.is_nan() {
            T::NAN
        } else if d < T::ZERO {
            -d
        } else {
            T::ZERO
        }
    });

    let av_gain = wilder_smooth(&gain, ma, ma, WilderMode::Mean)?;
    let av_loss = wilder_smooth(&loss, ma, ma, WilderMode::Mean)?;

    let rsi = av_gain.zip_with(&av_loss, |g, l| {
        T::HUNDRED - T::HUNDRED / (T::ONE + g / l)
    });

    let input = data.as_frame()?;
    compose(
        &input,
        vec![
            ("gain", gain),
            ("loss", loss),
            ("av_gain", av_gain),
            ("av_loss", av_loss),
            ("rsi", rsi),
        ],
        &COMPACT,
        full_output,
    )
}
