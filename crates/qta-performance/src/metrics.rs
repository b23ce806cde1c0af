//! Portfolio performance metrics over a price series.
//!
//! Every metric accepts either a bare price series or a frame holding a
//! close column, resolved through [`PriceInput::close`]. Simple returns
//! are derived internally and annualized through
//! [`Frequency::periods_per_year`]. NaN returns (the first position, or a
//! zero previous price) are skipped, matching how a missing observation
//! should not distort a long-run figure.

use qta_core::{PriceInput, Real, Result, Series, TaError};

use crate::frequency::Frequency;

fn check_prices<T: Real>(prices: &Series<T>) -> Result<()> {
    if prices.len() < 2 {
        return Err(TaError::InvalidInput(format!(
            "need at least 2 prices to derive returns, got {}",
            prices.len()
        )));
    }
    Ok(())
}

fn check_risk_free<T: Real>(risk_free: T) -> Result<()> {
    if risk_free < T::ZERO || risk_free > T::ONE || risk_free.is_nan() {
        return Err(TaError::InvalidParameter {
            name: "risk_free",
            value: format!("{risk_free:?}"),
            expected: "rate in [0, 1]",
        });
    }
    Ok(())
}

/// Sample standard deviation of the finite values in `data`.
///
/// Returns NaN when fewer than two finite values exist.
fn nan_std<T: Real>(data: &[T]) -> T {
    let mut count = 0usize;
    let mut sum = T::ZERO;
    for &x in data {
        if !x.is_nan() {
            count += 1;
            sum = sum + x;
        }
    }
    if count < 2 {
        return T::NAN;
    }

    let n = T::from_usize_lossy(count);
    let mean = sum / n;
    let mut ss = T::ZERO;
    for &x in data {
        if !x.is_nan() {
            let d = x - mean;
            ss = ss + d * d;
        }
    }
    (ss / (n - T::ONE)).sqrt()
}

/// Compound annual growth rate.
///
/// Total growth is the product of `1 + r` over the finite returns, and the
/// elapsed time is `(len - 1)` observation periods converted to years.
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices, or a
/// column resolution error for a frame without exactly one close column.
///
/// # Example
///
/// ```rust
/// use approx::assert_relative_eq;
/// use qta_performance::{cagr, Frequency};
///
/// let prices: Vec<f64> = vec![100.0, 120.0, 140.0, 160.0, 180.0, 200.0];
/// let growth = cagr(&prices.into(), Frequency::Yearly, true).unwrap();
/// assert_relative_eq!(growth, 2.0_f64.powf(0.2) - 1.0);
/// ```
pub fn cagr<T: Real>(data: &PriceInput<T>, frequency: Frequency, only_business: bool) -> Result<T> {
    let prices = data.close()?;
    check_prices(&prices)?;

    let returns = prices.pct_change();
    let mut growth = T::ONE;
    for &r in returns.iter() {
        if !r.is_nan() {
            growth = growth * (T::ONE + r);
        }
    }

    let ppy = T::from_usize_lossy(frequency.periods_per_year(only_business));
    let years = T::from_usize_lossy(prices.len() - 1) / ppy;
    Ok(growth.powf(T::ONE / years) - T::ONE)
}

/// Annualized volatility: sample deviation of returns scaled by the
/// square root of the periods per year.
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices, or a
/// column resolution error for a frame without exactly one close column.
pub fn volatility<T: Real>(
    data: &PriceInput<T>,
    frequency: Frequency,
    only_business: bool,
) -> Result<T> {
    let prices = data.close()?;
    check_prices(&prices)?;

    let returns = prices.pct_change();
    let ppy = T::from_usize_lossy(frequency.periods_per_year(only_business));
    Ok(nan_std(returns.as_slice()) * ppy.sqrt())
}

/// Sharpe ratio: annualized excess growth per unit of volatility.
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices,
/// [`TaError::InvalidParameter`] for a risk-free rate outside `[0, 1]`,
/// and [`TaError::DivisionByZero`] when volatility is zero.
pub fn sharpe<T: Real>(
    data: &PriceInput<T>,
    frequency: Frequency,
    only_business: bool,
    risk_free: T,
) -> Result<T> {
    let prices = data.close()?;
    check_prices(&prices)?;
    check_risk_free(risk_free)?;

    let vol = volatility(data, frequency, only_business)?;
    if vol == T::ZERO {
        return Err(TaError::DivisionByZero("volatility"));
    }

    let growth = cagr(data, frequency, only_business)?;
    Ok((growth - risk_free) / vol)
}

/// Sortino ratio: annualized excess growth per unit of downside deviation.
///
/// Only negative returns feed the deviation; with fewer than two of them
/// the ratio is NaN rather than an error, since a series without losses
/// simply has no downside sample.
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices,
/// [`TaError::InvalidParameter`] for a risk-free rate outside `[0, 1]`,
/// and [`TaError::DivisionByZero`] when the downside deviation is zero.
pub fn sortino<T: Real>(
    data: &PriceInput<T>,
    frequency: Frequency,
    only_business: bool,
    risk_free: T,
) -> Result<T> {
    let prices = data.close()?;
    check_prices(&prices)?;
    check_risk_free(risk_free)?;

    let returns = prices.pct_change();
    let negative: Vec<T> = returns
        .iter()
        .copied()
        .filter(|r| !r.is_nan() && *r < T::ZERO)
        .collect();

    let ppy = T::from_usize_lossy(frequency.periods_per_year(only_business));
    let downside = nan_std(&negative) * ppy.sqrt();
    if downside.is_nan() {
        return Ok(T::NAN);
    }
    if downside == T::ZERO {
        return Err(TaError::DivisionByZero("downside deviation"));
    }

    let growth = cagr(data, frequency, only_business)?;
    Ok((growth - risk_free) / downside)
}

/// Maximum drawdown: the largest peak-to-trough loss as a fraction of the
/// running peak of cumulative returns.
///
/// The peak tracks the cumulative-return series, which is undefined at
/// the first observation, so a series that opens at its all-time high and
/// then recovers past its second observation has zero drawdown.
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices, or a
/// column resolution error for a frame without exactly one close column.
pub fn max_drawdown<T: Real>(data: &PriceInput<T>) -> Result<T> {
    let prices = data.close()?;
    check_prices(&prices)?;

    let returns = prices.pct_change();
    let mut cumulative = T::ONE;
    let mut peak = T::NAN;
    let mut worst = T::ZERO;
    for &r in returns.iter() {
        if r.is_nan() {
            continue;
        }
        cumulative = cumulative * (T::ONE + r);
        if peak.is_nan() || cumulative > peak {
            peak = cumulative;
        }
        let drawdown = (peak - cumulative) / peak;
        if drawdown > worst {
            worst = drawdown;
        }
    }
    Ok(worst)
}

/// Calmar ratio: CAGR over maximum drawdown.
///
/// A zero drawdown is not treated as an error; the quotient follows IEEE
/// arithmetic and comes back infinite (or NaN for a flat series).
///
/// # Errors
///
/// Returns [`TaError::InvalidInput`] for fewer than two prices, or a
/// column resolution error for a frame without exactly one close column.
pub fn calmar<T: Real>(
    data: &PriceInput<T>,
    frequency: Frequency,
    only_business: bool,
) -> Result<T> {
    let growth = cagr(data, frequency, only_business)?;
    let drawdown = max_drawdown(data)?;
    Ok(growth / drawdown)
}
