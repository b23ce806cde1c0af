//! True-range building blocks shared by ATR and ADX.

use qta_core::{Real, Series};

/// The three candidate ranges: `|H - L|`, `|H - C[-1]|`, `|L - C[-1]|`.
///
/// The last two are NaN at position 0, where no previous close exists.
pub(crate) fn range_components<T: Real>(
    high: &Series<T>,
    low: &Series<T>,
    close: &Series<T>,
) -> (Series<T>, Series<T>, Series<T>) {
    let hl = high.zip_with(low, |h, l| (h - l).abs());

    let len = close.len();
    let mut hc = Vec::with_capacity(len);
    let mut lc = Vec::with_capacity(len);
    if len > 0 {
        hc.push(T::NAN);
        lc.push(T::NAN);
        for i in 1..len {
            let prev = close[i - 1];
            hc.push((high[i] - prev).abs());
            lc.push((low[i] - prev).abs());
        }
    }
    (hl, Series::from_vec(hc), Series::from_vec(lc))
}

/// Row-wise maximum of the three components, skipping NaN.
///
/// Only when all three are NaN does the output stay NaN; at position 0 the
/// high-low range is always present, so the series has no NaN prefix.
pub(crate) fn nan_max3<T: Real>(a: &Series<T>, b: &Series<T>, c: &Series<T>) -> Series<T> {
    let nan_max = |x: T, y: T| {
        if x.is_nan() {
            y
        } else if y.is_nan() {
            x
        } else {
            x.max(y)
        }
    };
    a.zip_with(b, nan_max).zip_with(c, nan_max)
}
