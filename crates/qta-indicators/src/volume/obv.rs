//! On-Balance Volume (OBV).
//!
//! Volume is signed by the direction of the close-to-close return and
//! accumulated. The first position contributes zero, since no return
//! exists there.

use qta_core::{require_columns, DataFrame, Real, Result};

use crate::output::compose;
use crate::validate::{check_non_empty, column};

/// Columns kept in compact output.
const COMPACT: [&str; 1] = ["obv"];

/// Compute OBV over a frame with `Close` and `Volume` columns.
///
/// Both columns are addressed by exact name, like the other multi-column
/// indicators; no alias scanning happens, so an extra `Adj Close` column
/// is simply ignored.
///
/// The direction of each step is +1, 0, or -1 from the sign of the simple
/// return; an undefined return (the first row, or a zero previous close)
/// counts as 0 and contributes nothing to the running total.
///
/// Compact output holds the single `obv` column; full output appends every
/// intermediate to the input columns.
///
/// # Errors
///
/// Returns an error if `Close` or `Volume` is missing, or the frame is
/// empty.
///
/// # Example
///
/// ```rust
/// use qta_core::{DataFrame, Series};
/// use qta_indicators::volume::obv;
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("Close", Series::from_vec(vec![10.0, 11.0, 10.5])).unwrap();
/// df.add_column("Volume", Series::from_vec(vec![100.0, 200.0, 150.0])).unwrap();
///
/// let out = obv(&df, false).unwrap();
/// let obv = out.column("obv").unwrap();
/// assert_eq!(obv[2], 50.0);
/// ```
pub fn obv<T: Real>(data: &DataFrame<T>, full_output: bool) -> Result<DataFrame<T>> {
    require_columns(data, &["Close", "Volume"])?;
    check_non_empty(data.len())?;

    let close = column(data, "Close")?;
    let volume = column(data, "Volume")?;

    let returns = close.pct_change();
    let directional = returns.map(|r| {
        if r > T::ZERO {
            T::ONE
        } else if r < T::ZERO {
            -T::ONE
        } else {
            // zero return or NaN both carry no direction
            T::ZERO
        }
    });

    let obv = directional.zip_with(&volume, |d, v| d * v).cumsum();

    compose(
        data,
        vec![("returns", returns), ("directional", directional), ("obv", obv)],
        &COMPACT,
        full_output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qta_core::{Series, TaError};

    fn fixture() -> DataFrame<f64> {
        let mut df = DataFrame::new();
        df.add_column("Close", Series::from_vec(vec![10.0, 11.0, 11.0, 10.0]))
            .unwrap();
        df.add_column("Volume", Series::from_vec(vec![100.0, 200.0, 300.0, 400.0]))
            .unwrap();
        df
    }

    #[test]
    fn test_obv_hand_values() {
        let out = obv(&fixture(), false).unwrap();
        let obv = out.column("obv").unwrap();

        assert_relative_eq!(obv[0], 0.0);
        assert_relative_eq!(obv[1], 200.0);
        assert_relative_eq!(obv[2], 200.0);
        assert_relative_eq!(obv[3], -200.0);
    }

    #[test]
    fn test_obv_full_column_order() {
        let out = obv(&fixture(), true).unwrap();
        assert_eq!(
            out.column_names(),
            vec!["Close", "Volume", "returns", "directional", "obv"]
        );

        let directional = out.column("directional").unwrap();
        assert_relative_eq!(directional[0], 0.0);
        assert_relative_eq!(directional[1], 1.0);
        assert_relative_eq!(directional[3], -1.0);
    }

    #[test]
    fn test_obv_zero_previous_close_is_neutral() {
        let mut df: DataFrame<f64> = DataFrame::new();
        df.add_column("Close", Series::from_vec(vec![0.0, 5.0, 6.0]))
            .unwrap();
        df.add_column("Volume", Series::from_vec(vec![10.0, 20.0, 30.0]))
            .unwrap();

        let out = obv(&df, false).unwrap();
        let obv = out.column("obv").unwrap();
        assert_relative_eq!(obv[1], 0.0);
        assert_relative_eq!(obv[2], 30.0);
    }

    #[test]
    fn test_obv_missing_volume() {
        let mut df: DataFrame<f64> = DataFrame::new();
        df.add_column("Close", Series::from_vec(vec![1.0])).unwrap();
        assert!(matches!(
            obv(&df, false),
            Err(TaError::MissingColumn(name)) if name == "Volume"
        ));
    }

    #[test]
    fn test_obv_exact_close_beside_adjusted_column() {
        // only the exact name counts, so a second close-like column is
        // not ambiguous
        let mut df: DataFrame<f64> = DataFrame::new();
        df.add_column("Close", Series::from_vec(vec![1.0, 2.0])).unwrap();
        df.add_column("Adj Close", Series::from_vec(vec![5.0, 4.0])).unwrap();
        df.add_column("Volume", Series::from_vec(vec![10.0, 20.0])).unwrap();

        let out = obv(&df, false).unwrap();
        assert_relative_eq!(out.column("obv").unwrap()[1], 20.0);
    }

    #[test]
    fn test_obv_lowercase_close_rejected() {
        let mut df: DataFrame<f64> = DataFrame::new();
        df.add_column("close", Series::from_vec(vec![1.0, 2.0])).unwrap();
        df.add_column("Volume", Series::from_vec(vec![10.0, 20.0])).unwrap();

        assert!(matches!(
            obv(&df, false),
            Err(TaError::MissingColumn(name)) if name == "Close"
        ));
    }
}
