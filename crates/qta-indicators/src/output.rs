//! Compact/full output composition.
//!
//! Every indicator computes its intermediates as named series and hands
//! them here. In full mode the result is the input frame followed by every
//! intermediate in computation order; in compact mode only the named
//! result columns survive, in their documented order.

use qta_core::{DataFrame, Real, Result, Series};

/// Assemble an indicator result frame.
///
/// `computed` lists every intermediate in computation order. With
/// `full_output` the result is `input`'s columns followed by all of them;
/// otherwise only the columns named in `compact` are kept, in that order.
pub(crate) fn compose<T: Real>(
    input: &DataFrame<T>,
    computed: Vec<(&'static str, Series<T>)>,
    compact: &[&str],
    full_output: bool,
) -> Result<DataFrame<T>> {
    let mut work = DataFrame::with_capacity(computed.len());
    for (name, series) in computed {
        work.add_column(name, series)?;
    }

    if full_output {
        input.concat(&work)
    } else {
        work.select(compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_selects_named_columns() {
        let mut input: DataFrame<f64> = DataFrame::new();
        input
            .add_column("Close", Series::from_vec(vec![1.0, 2.0]))
            .unwrap();

        let computed = vec![
            ("gain", Series::from_vec(vec![0.0, 1.0])),
            ("rsi", Series::from_vec(vec![50.0, 100.0])),
        ];
        let out = compose(&input, computed, &["rsi"], false).unwrap();
        assert_eq!(out.column_names(), vec!["rsi"]);
    }

    #[test]
    fn test_full_appends_in_computation_order() {
        let mut input: DataFrame<f64> = DataFrame::new();
        input
            .add_column("Close", Series::from_vec(vec![1.0, 2.0]))
            .unwrap();

        let computed = vec![
            ("gain", Series::from_vec(vec![0.0, 1.0])),
            ("rsi", Series::from_vec(vec![50.0, 100.0])),
        ];
        let out = compose(&input, computed, &["rsi"], true).unwrap();
        assert_eq!(out.column_names(), vec!["Close", "gain", "rsi"]);
    }
}
