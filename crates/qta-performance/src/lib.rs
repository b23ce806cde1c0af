//! # qta-performance
//!
//! Portfolio performance metrics over [`qta_core`] price series.
//!
//! Each metric is a pure function from prices to a scalar: CAGR,
//! annualized volatility, Sharpe and Sortino ratios, maximum drawdown,
//! and the Calmar ratio. Prices come in as a [`qta_core::PriceInput`],
//! either a bare series or a frame with a close column. Annualization
//! runs through [`Frequency`].
//!
//! ## Example
//!
//! ```rust
//! use qta_performance::{sharpe, Frequency};
//!
//! let prices: Vec<f64> = vec![100.0, 108.0, 104.0, 115.0];
//! let ratio = sharpe(&prices.into(), Frequency::Monthly, true, 0.02)?;
//! assert!(ratio.is_finite());
//! # Ok::<(), qta_core::TaError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod frequency;
pub mod metrics;

pub use frequency::Frequency;
pub use metrics::{cagr, calmar, max_drawdown, sharpe, sortino, volatility};
