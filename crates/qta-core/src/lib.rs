//! # qta-core
//!
//! Core types and primitives for the qta quantitative analysis library.
//!
//! This crate provides the foundational pieces used throughout the library:
//!
//! - [`Real`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Time series data container
//! - [`DataFrame`] - Multi-column tabular data with deterministic ordering
//! - [`PriceInput`] - Unified series-or-frame price input resolution
//! - Windowed statistics ([`rolling_mean`], [`rolling_std`], [`ewm_mean`], ...)
//! - [`wilder_smooth`] - Wilder's recursive smoothing in both forms
//!
//! ## Example
//!
//! ```rust
//! use qta_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//! let sma = rolling_mean(&closes, 3)?;
//! assert!(sma[0].is_nan());
//! # Ok::<(), qta_core::TaError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod frame;
pub mod input;
pub mod num;
pub mod prelude;
pub mod rolling;
pub mod series;
pub mod wilder;

// Re-export core types at crate root
pub use error::{Result, TaError};
pub use frame::DataFrame;
pub use input::{require_columns, resolve_close, PriceInput, CLOSE_ALIASES, PRICE_LABEL};
pub use num::Real;
pub use rolling::{ewm_mean, rolling_mean, rolling_std, rolling_sum};
pub use series::Series;
pub use wilder::{wilder_smooth, WilderMode};
