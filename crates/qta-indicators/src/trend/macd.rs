//! Moving Average Convergence Divergence (MACD).
//!
//! Built entirely from start-adjusted exponential means, so no position of
//! the output is a warm-up NaN.

use qta_core::{ewm_mean, DataFrame, PriceInput, Real, Result, TaError};

use crate::output::compose;
use crate::validate::{check_non_empty, check_period};

/// Columns kept in compact output, in order.
const COMPACT: [&str; 2] = ["macd_line", "macd_signal"];

/// Compute MACD over a close series or frame.
///
/// `slow_ma` and `fast_ma` are exponential means over `slow` and `fast`
/// spans; the MACD line is the absolute gap between them, and the signal
/// line smooths that gap over `ma`. `slow` must exceed `fast`.
///
/// Compact output holds `macd_line` and `macd_signal`; full output appends
/// every intermediate to the input columns.
///
/// # Errors
///
/// Returns an error if the close column cannot be resolved, the input is
/// empty, any period is zero, or `slow <= fast`.
///
/// # Example
///
/// ```rust
/// use qta_indicators::trend::macd;
///
/// let prices: Vec<f64> = vec![100.0, 101.0, 103.0, 102.0, 105.0, 107.0];
/// let out = macd(&prices.into(), 4, 2, 3, false).unwrap();
/// let line = out.column("macd_line").unwrap();
/// assert!(line.iter().all(|v| !v.is_nan()));
/// ```
pub fn macd<T: Real>(
    data: &PriceInput<T>,
    slow: usize,
    fast: usize,
    ma: usize,
    full_output: bool,
) -> Result<DataFrame<T>> {
    let close = data.close()?;
    check_non_empty(close.len())?;
    check_period("slow", slow)?;
    check_period("fast", fast)?;
    check_period("ma", ma)?;
    if slow <= fast {
        return Err(TaError::InvalidParameter {
            name: "slow",
            value: slow.to_string(),
            expected: "slow > fast",
        });
    }

    let slow_ma = ewm_mean(&close, slow)?;
    let fast_ma = ewm_mean(&close, fast)?;
    let macd_line = slow_ma.zip_with(&fast_ma, |s, f| (s - f).abs());
    let macd_signal = ewm_mean(&macd_line, ma)?;

    let input = data.as_frame()?;
    compose(
        &input,
        vec![
            ("slow_ma", slow_ma),
            ("fast_ma", fast_ma),
            ("macd_line", macd_line),
            ("macd_signal", macd_signal),
        ],
        &COMPACT,
        full_output,
    )
}
