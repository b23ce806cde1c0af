//! Average True Range (ATR).
//!
//! True range is the NaN-skipping maximum of the high-low span and the
//! gaps from the previous close; ATR is its plain rolling mean.

use qta_core::{require_columns, rolling_mean, DataFrame, Real, Result};

use crate::output::compose;
use crate::truerange::{nan_max3, range_components};
use crate::validate::{check_non_empty, check_period, column};

/// Columns kept in compact output, in order.
const COMPACT: [&str; 2] = ["atr", "tr"];

/// Compute ATR over a frame with `High`, `Low`, and `Close` columns.
///
/// True range has no NaN prefix, because at position 0 only the high-low
/// span is available and the skip rule keeps it. ATR therefore becomes
/// defined at position `ma - 1`.
///
/// Compact output holds `atr` and `tr`; full output appends every
/// intermediate to the input columns.
///
/// # Errors
///
/// Returns an error if a required column is missing, the frame is empty,
/// or `ma` is zero.
///
/// # Example
///
/// ```rust
/// use qta_core::{DataFrame, Series};
/// use qta_indicators::volatility::atr;
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("High", Series::from_vec(vec![10.0, 12.0, 13.0])).unwrap();
/// df.add_column("Low", Series::from_vec(vec![8.0, 9.0, 10.0])).unwrap();
/// df.add_column("Close", Series::from_vec(vec![9.0, 11.0, 12.0])).unwrap();
///
/// let out = atr(&df, 2, false).unwrap();
/// let atr = out.column("atr").unwrap();
/// assert!(atr[0].is_nan());
/// assert!(!atr[1].is_nan());
/// ```
pub fn atr<T: Real>(data: &DataFrame<T>, ma: usize, full_output: bool) -> Result<DataFrame<T>> {
    require_columns(data, &["High", "Low", "Close"])?;
    check_non_empty(data.len())?;
    check_period("ma", ma)?;

    let high = column(data, "High")?;
    let low = column(data, "Low")?;
    let close = column(data, "Close")?;

    let (dff_hl, dff_hc, dff_lc) = range_components(&high, &low, &close);
    let tr = nan_max3(&dff_hl, &dff_hc, &dff_lc);
    let atr = rolling_mean(&tr, ma)?;

    compose(
        data,
        vec![
            ("dff_hl", dff_hl),
            ("dff_hc", dff_hc),
            ("dff_lc", dff_lc),
            ("tr", tr),
            ("atr", atr),
        ],
        &COMPACT,
        full_output,
    )
}
