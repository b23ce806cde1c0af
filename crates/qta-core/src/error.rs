//! Error types shared by the indicator and performance crates.
//!
//! Every failure mode surfaces as a [`TaError`] variant; validation is eager,
//! so no partial series is ever produced before an error is returned.
//! Numerically degenerate intermediates (a zero denominator inside a
//! recursion) are NOT errors: they propagate through the output as NaN.

use thiserror::Error;

/// Result type alias for indicator and metric operations.
pub type Result<T> = core::result::Result<T, TaError>;

/// Errors that can occur while resolving inputs or computing indicators.
#[derive(Debug, Error)]
pub enum TaError {
    /// Input has the wrong shape for the operation (e.g. empty series where
    /// at least two observations are required).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required column is absent from the input frame.
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    /// More than one close-price candidate column was found; the caller must
    /// disambiguate by passing the desired column as a series.
    #[error("Ambiguous close column: {0:?} all match a recognized alias")]
    AmbiguousColumn(Vec<String>),

    /// A numeric parameter is outside its domain.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of the expected domain.
        expected: &'static str,
    },

    /// A scalar metric denominator is exactly zero (e.g. Sharpe with zero
    /// volatility).
    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    /// Columns of differing lengths were combined into one frame.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}
