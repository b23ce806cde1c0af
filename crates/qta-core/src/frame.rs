//! Multi-column tabular data with deterministic column order.
//!
//! [`DataFrame`] is backed by `IndexMap`, so columns always iterate in
//! insertion order. Full-output composition relies on this: the result is
//! always "input columns, then intermediates in computation order".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaError};
use crate::num::Real;
use crate::series::Series;

/// A table of equal-length named series.
///
/// # Example
///
/// ```rust
/// use qta_core::{DataFrame, Series};
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("Close", Series::from_vec(vec![100.0, 101.0])).unwrap();
/// df.add_column("Volume", Series::from_vec(vec![1000.0, 1200.0])).unwrap();
///
/// assert_eq!(df.len(), 2);
/// assert_eq!(df.column_names(), vec!["Close", "Volume"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct DataFrame<T: Real> {
    columns: IndexMap<String, Series<T>>,
}

impl<T: Real> Default for DataFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> DataFrame<T> {
    /// Create a new empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Create a frame with pre-allocated column capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a frame from (name, series) pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lengths differ or a name repeats.
    pub fn from_columns<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Series<T>)>,
    {
        let mut frame = Self::new();
        for (name, series) in columns {
            frame.add_column(name, series)?;
        }
        Ok(frame)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Check whether a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Borrow a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Append a new column.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken or the series length
    /// does not match the existing rows.
    pub fn add_column(&mut self, name: impl Into<String>, series: Series<T>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(TaError::InvalidParameter {
                name: "column_name",
                value: name,
                expected: "unique column name",
            });
        }

        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(TaError::LengthMismatch {
                expected: self.len(),
                actual: series.len(),
            });
        }

        self.columns.insert(name, series);
        Ok(())
    }

    /// A new frame containing only the given columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::MissingColumn`] if any name is absent.
    pub fn select(&self, columns: &[&str]) -> Result<Self> {
        let mut result = Self::with_capacity(columns.len());
        for &name in columns {
            let series = self
                .columns
                .get(name)
                .ok_or_else(|| TaError::MissingColumn(name.to_string()))?;
            result.columns.insert(name.to_string(), series.clone());
        }
        Ok(result)
    }

    /// Horizontal concatenation: this frame's columns followed by `other`'s.
    ///
    /// # Errors
    ///
    /// Returns an error on row-count mismatch or duplicate column names.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        if !self.is_empty() && !other.is_empty() && self.len() != other.len() {
            return Err(TaError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mut result = self.clone();
        for (name, series) in &other.columns {
            if result.columns.contains_key(name) {
                return Err(TaError::InvalidParameter {
                    name: "column_name",
                    value: name.clone(),
                    expected: "unique column name",
                });
            }
            result.columns.insert(name.clone(), series.clone());
        }
        Ok(result)
    }

    /// Iterator over `(name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T: Real> PartialEq for DataFrame<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}
