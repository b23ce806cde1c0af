//! Parameter checks shared by the indicator functions.
//!
//! Input shape and column checks always run before these, so a caller with
//! both a bad frame and a bad period sees the frame error first.

use qta_core::{DataFrame, Real, Result, Series, TaError};

/// Reject a zero smoothing period.
pub(crate) fn check_period(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TaError::InvalidParameter {
            name,
            value: value.to_string(),
            expected: "period >= 1",
        });
    }
    Ok(())
}

/// Reject an input with no rows.
pub(crate) fn check_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(TaError::InvalidInput("input holds no rows".to_string()));
    }
    Ok(())
}

/// Clone a required column out of a frame.
pub(crate) fn column<T: Real>(frame: &DataFrame<T>, name: &str) -> Result<Series<T>> {
    frame
        .column(name)
        .cloned()
        .ok_or_else(|| TaError::MissingColumn(name.to_string()))
}
