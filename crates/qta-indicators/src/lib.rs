//! # qta-indicators
//!
//! Technical indicators over [`qta_core`] series and frames.
//!
//! Every indicator is a pure function returning a [`DataFrame`]: compact
//! output carries only the named result columns, while `full_output`
//! appends every intermediate to the input columns in computation order.
//!
//! ## Indicator families
//!
//! - [`trend`] - ADX, MACD
//! - [`momentum`] - RSI
//! - [`volatility`] - ATR, Bollinger bands
//! - [`volume`] - OBV
//!
//! ## Example
//!
//! ```rust
//! use qta_indicators::prelude::*;
//!
//! let closes: Vec<f64> = vec![44.0, 44.3, 44.1, 43.6, 44.3, 44.8, 45.1, 45.4, 45.8, 46.1];
//! let out = rsi(&closes.into(), 5, false)?;
//! let rsi = out.column("rsi").unwrap();
//! assert!(rsi[4].is_nan());
//! assert!(!rsi[5].is_nan());
//! # Ok::<(), qta_core::TaError>(())
//! ```
//!
//! [`DataFrame`]: qta_core::DataFrame

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod prelude;
pub mod trend;
pub mod volatility;
pub mod volume;

mod output;
mod truerange;
mod validate;

pub use momentum::rsi;
pub use trend::{adx, macd};
pub use volatility::{atr, bollband};
pub use volume::obv;
