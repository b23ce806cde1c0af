//! Price input resolution.
//!
//! Indicators that only need a price series accept either a bare [`Series`]
//! or a [`DataFrame`] holding a close column under one of the conventional
//! names. [`PriceInput`] unifies the two and performs the lookup.

use crate::error::{Result, TaError};
use crate::frame::DataFrame;
use crate::num::Real;
use crate::series::Series;

/// Close-column names recognized when resolving a frame, in match order.
pub const CLOSE_ALIASES: [&str; 4] = ["Close", "close", "Adj Close", "adj close"];

/// Column label used when a bare series is promoted to a frame for
/// full output.
pub const PRICE_LABEL: &str = "price";

/// A price series, either standalone or embedded in a frame.
#[derive(Clone, Debug)]
pub enum PriceInput<T: Real> {
    /// A bare price series.
    Series(Series<T>),
    /// A frame expected to contain exactly one close-alias column.
    Frame(DataFrame<T>),
}

impl<T: Real> PriceInput<T> {
    /// Number of rows in the underlying data.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Series(s) => s.len(),
            Self::Frame(f) => f.len(),
        }
    }

    /// Returns `true` if the input holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the close price series.
    ///
    /// For a bare series this is a copy of the series itself. For a frame,
    /// the columns are scanned against [`CLOSE_ALIASES`].
    ///
    /// # Errors
    ///
    /// Returns [`TaError::MissingColumn`] if a frame matches no alias, and
    /// [`TaError::AmbiguousColumn`] if it matches more than one.
    pub fn close(&self) -> Result<Series<T>> {
        match self {
            Self::Series(s) => Ok(s.clone()),
            Self::Frame(f) => resolve_close(f),
        }
    }

    /// The input as a frame, for full-output composition.
    ///
    /// A frame is cloned as-is; a bare series becomes a single-column frame
    /// labelled [`PRICE_LABEL`].
    ///
    /// # Errors
    ///
    /// Never fails for well-formed inputs; the `Result` carries the
    /// frame-construction error type.
    pub fn as_frame(&self) -> Result<DataFrame<T>> {
        match self {
            Self::Frame(f) => Ok(f.clone()),
            Self::Series(s) => {
                let mut frame = DataFrame::with_capacity(1);
                frame.add_column(PRICE_LABEL, s.clone())?;
                Ok(frame)
            }
        }
    }
}

impl<T: Real> From<Series<T>> for PriceInput<T> {
    fn from(series: Series<T>) -> Self {
        Self::Series(series)
    }
}

impl<T: Real> From<Vec<T>> for PriceInput<T> {
    fn from(data: Vec<T>) -> Self {
        Self::Series(Series::from_vec(data))
    }
}

impl<T: Real> From<DataFrame<T>> for PriceInput<T> {
    fn from(frame: DataFrame<T>) -> Self {
        Self::Frame(frame)
    }
}

/// Find the close column of a frame by scanning [`CLOSE_ALIASES`].
///
/// # Errors
///
/// Returns [`TaError::MissingColumn`] if no alias matches, and
/// [`TaError::AmbiguousColumn`] if more than one does.
pub fn resolve_close<T: Real>(frame: &DataFrame<T>) -> Result<Series<T>> {
    let matches: Vec<&str> = CLOSE_ALIASES
        .iter()
        .copied()
        .filter(|alias| frame.has_column(alias))
        .collect();

    match matches.as_slice() {
        [] => Err(TaError::MissingColumn(CLOSE_ALIASES.join(" | "))),
        [name] => {
            // has_column above guarantees presence
            frame
                .column(name)
                .cloned()
                .ok_or_else(|| TaError::MissingColumn((*name).to_string()))
        }
        many => Err(TaError::AmbiguousColumn(
            many.iter().map(|s| (*s).to_string()).collect(),
        )),
    }
}

/// Check that a frame carries all of the given columns.
///
/// # Errors
///
/// Returns [`TaError::MissingColumn`] naming the first absent column.
pub fn require_columns<T: Real>(frame: &DataFrame<T>, columns: &[&str]) -> Result<()> {
    for &name in columns {
        if !frame.has_column(name) {
            return Err(TaError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}
