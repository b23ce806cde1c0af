//! Ordered numeric series, the unit of indicator input and output.
//!
//! A [`Series`] preserves positional order 1:1 through every transform;
//! positions where a formula is undefined carry NaN, never zero.

use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::num::Real;

/// A contiguous, positionally indexed series of floating-point values.
///
/// # Example
///
/// ```rust
/// use qta_core::Series;
///
/// let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8]);
/// let deltas = closes.diff();
/// assert!(deltas[0].is_nan());
/// assert_eq!(deltas[1], 1.5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Series<T: Real> {
    data: Vec<T>,
}

impl<T: Real> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series of `len` NaN values.
    #[must_use]
    pub fn nan(len: usize) -> Self {
        Self {
            data: vec![T::NAN; len],
        }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Value at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Iterator over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// The underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the series and return the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// First differences: `y[i] = x[i] - x[i-1]`, NaN at position 0.
    #[must_use]
    pub fn diff(&self) -> Self {
        if self.is_empty() {
            return Self::new();
        }

        let mut result = Vec::with_capacity(self.len());
        result.push(T::NAN);
        for i in 1..self.len() {
            result.push(self.data[i] - self.data[i - 1]);
        }
        Self { data: result }
    }

    /// Simple returns: `y[i] = (x[i] - x[i-1]) / x[i-1]`.
    ///
    /// Position 0 is NaN; a zero previous value also yields NaN.
    #[must_use]
    pub fn pct_change(&self) -> Self {
        if self.is_empty() {
            return Self::new();
        }

        let mut result = Vec::with_capacity(self.len());
        result.push(T::NAN);
        for i in 1..self.len() {
            let prev = self.data[i - 1];
            if prev == T::ZERO {
                result.push(T::NAN);
            } else {
                result.push((self.data[i] - prev) / prev);
            }
        }
        Self { data: result }
    }

    /// Running sum from position 0: `y[i] = x[0] + ... + x[i]`.
    #[must_use]
    pub fn cumsum(&self) -> Self {
        let mut acc = T::ZERO;
        let data = self
            .data
            .iter()
            .map(|&x| {
                acc = acc + x;
                acc
            })
            .collect();
        Self { data }
    }

    /// Apply a function to each value.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Self { data }
    }

    /// Combine two equal-length series element by element.
    ///
    /// Positions past the shorter series are dropped; callers in this
    /// library always pair series of the same length.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self { data }
    }

    /// Count NaN entries (the warm-up prefix plus any degenerate positions).
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_nan()).count()
    }
}

impl<T: Real> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Real> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Real> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Real> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<'a, T: Real> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_index() {
        let mut series: Series<f64> = Series::new();
        assert!(series.is_empty());

        series.push(1.0);
        series.push(2.0);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0], 1.0);
        assert_eq!(series.last(), Some(&2.0));
    }

    #[test]
    fn test_diff() {
        let series: Series<f64> = Series::from_vec(vec![1.0, 3.0, 6.0, 10.0]);
        let diff = series.diff();

        assert_eq!(diff.len(), 4);
        assert!(diff[0].is_nan());
        assert_eq!(diff[1], 2.0);
        assert_eq!(diff[2], 3.0);
        assert_eq!(diff[3], 4.0);
    }

    #[test]
    fn test_pct_change() {
        let series: Series<f64> = Series::from_vec(vec![100.0, 110.0, 99.0]);
        let returns = series.pct_change();

        assert!(returns[0].is_nan());
        assert_eq!(returns[1], 0.1);
        assert_eq!(returns[2], -0.1);
    }

    #[test]
    fn test_pct_change_zero_base() {
        let series: Series<f64> = Series::from_vec(vec![0.0, 5.0]);
        let returns = series.pct_change();
        assert!(returns[1].is_nan());
    }

    #[test]
    fn test_cumsum() {
        let series: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(series.cumsum().as_slice(), &[1.0, 3.0, 6.0]);
    }

    #[test]
    fn test_zip_with() {
        let a: Series<f64> = Series::from_vec(vec![3.0, 1.0]);
        let b: Series<f64> = Series::from_vec(vec![1.0, 2.0]);
        let max = a.zip_with(&b, f64::max);
        assert_eq!(max.as_slice(), &[3.0, 2.0]);
    }

    #[test]
    fn test_nan_series() {
        let series: Series<f64> = Series::nan(3);
        assert_eq!(series.len(), 3);
        assert_eq!(series.nan_count(), 3);
    }

    #[test]
    fn test_from_iterator() {
        let series: Series<f64> = (1..=3).map(|x| x as f64).collect();
        assert_eq!(series.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let series: Series<f64> = Series::from_vec(vec![1.0, 2.5]);
        let json = serde_json::to_string(&series).unwrap();
        let back: Series<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
