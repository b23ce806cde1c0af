//! Bollinger bands.
//!
//! The bands sit two standard deviations around the moving average, where
//! the deviation is itself measured over the smoothed series. Stacking the
//! two windows makes the bands defined from position `2 * (ma - 1)`.

use qta_core::{rolling_mean, rolling_std, DataFrame, PriceInput, Real, Result};

use crate::output::compose;
use crate::validate::{check_non_empty, check_period};

/// Columns kept in compact output, in order.
const COMPACT: [&str; 2] = ["bollband_up", "bollband_low"];

/// Compute Bollinger bands over a close series or frame.
///
/// Compact output holds `bollband_up` and `bollband_low`; full output
/// appends the moving average and bands to the input columns.
///
/// # Errors
///
/// Returns an error if the close column cannot be resolved, the input is
/// empty, or `ma` is zero.
///
/// # Example
///
/// ```rust
/// use qta_indicators::volatility::bollband;
///
/// let prices: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
/// let out = bollband(&prices.into(), 2, false).unwrap();
/// let up = out.column("bollband_up").unwrap();
/// assert!(up[1].is_nan());
/// assert!(!up[2].is_nan());
/// ```
pub fn bollband<T: Real>(
    data: &PriceInput<T>,
    ma: usize,
    full_output: bool,
) -> Result<DataFrame<T>> {
    let close = data.close()?;
    check_non_empty(close.len())?;
    check_period("ma", ma)?;

    let ma_series = rolling_mean(&close, ma)?;
    let band_width = rolling_std(&ma_series, ma)?;

    let up = ma_series.zip_with(&band_width, |m, s| m + T::TWO * s);
    let low = ma_series.zip_with(&band_width, |m, s| m - T::TWO * s);

    let input = data.as_frame()?;
    compose(
        &input,
        vec![("ma", ma_series), ("bollband_up", up), ("bollband_low", low)],
        &COMPACT,
        full_output,
    )
}
