//! Average Directional Index (ADX).
//!
//! ADX measures trend strength regardless of direction. True range and the
//! one-sided directional movements are Wilder-sum smoothed, turned into
//! directional indices, and the resulting DX is Wilder-mean smoothed once
//! more. With period `ma` the final ADX becomes defined at position
//! `2 * ma - 1`.

use qta_core::{require_columns, wilder_smooth, DataFrame, Real, Result, WilderMode};

use crate::output::compose;
use crate::truerange::{nan_max3, range_components};
use crate::validate::{check_non_empty, check_period, column};

/// Columns kept in compact output, in order.
const COMPACT: [&str; 2] = ["adx", "dx"];

/// Compute ADX over a frame with `High`, `Low`, and `Close` columns.
///
/// Directional movement is one-sided: `dm_pos` is the positive part of the
/// high-to-high change and `dm_neg` the positive part of the low-to-low
/// drop. The directional indices divide smoothed movement by smoothed true
/// range without guarding the quotient, so a flat stretch yields NaN
/// rather than a substitute value.
///
/// Compact output holds `adx` and `dx`; full output appends every
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
/// use qta_indicators::trend::adx;
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("High", Series::from_vec(vec![10.0, 12.0, 13.0, 12.0, 14.0, 15.0, 14.0])).unwrap();
/// df.add_column("Low", Series::from_vec(vec![8.0, 9.0, 10.0, 9.0, 11.0, 12.0, 11.0])).unwrap();
/// df.add_column("Close", Series::from_vec(vec![9.0, 11.0, 12.0, 10.0, 13.0, 14.0, 12.0])).unwrap();
///
/// let out = adx(&df, 3, false).unwrap();
/// let adx = out.column("adx").unwrap();
/// assert!(adx[4].is_nan());
/// assert!(!adx[5].is_nan());
/// ```
pub fn adx<T: Real>(data: &DataFrame<T>, ma: usize, full_output: bool) -> Result<DataFrame<T>> {
    require_columns(data, &["High", "Low", "Close"])?;
    check_non_empty(data.len())?;
    check_period("ma", ma)?;

    let high = column(data, "High")?;
    let low = column(data, "Low")?;
    let close = column(data, "Close")?;

    let (hl, hc, lc) = range_components(&high, &low, &close);
    let tr = nan_max3(&hl, &hc, &lc);

    let zero_floor = |d: T| if d > T::ZERO { d } else { T::ZERO };
    let dm_pos = high.diff().map(|d| if d.is_nan() { T::NAN } else { zero_floor(d) });
    let dm_neg = low.diff().map(|d| if d.is_nan() { T::NAN } else { zero_floor(-d) });

    let roll_tr = wilder_smooth(&tr, ma, ma, WilderMode::Sum)?;
    let roll_dmp = wilder_smooth(&dm_pos, ma, ma, WilderMode::Sum)?;
    let roll_dmn = wilder_smooth(&dm_neg, ma, ma, WilderMode::Sum)?;

    let di_pos = roll_dmp.zip_with(&roll_tr, |dm, tr| T::HUNDRED * dm / tr);
    let di_neg = roll_dmn.zip_with(&roll_tr, |dm, tr| T::HUNDRED * dm / tr);

    let di_sum = di_pos.zip_with(&di_neg, |p, n| p + n);
    let di_diff = di_pos.zip_with(&di_neg, |p, n| (p - n).abs());
    let dx = di_diff.zip_with(&di_sum, |d, s| T::HUNDRED * d / s);

    let adx = wilder_smooth(&dx, ma, 2 * ma - 1, WilderMode::Mean)?;

    compose(
        data,
        vec![
            ("tr", tr),
            ("dm_pos", dm_pos),
            ("dm_neg", dm_neg),
            ("roll_tr", roll_tr),
            ("roll_dmp", roll_dmp),
            ("roll_dmn", roll_dmn),
            ("di_pos", di_pos),
            ("di_neg", di_neg),
            ("di_sum", di_sum),
            ("di_diff", di_diff),
            ("dx", dx),
            ("adx", adx),
        ],
        &COMPACT,
        full_output,
    )
}
