//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions from qta-core.
//!
//! # Example
//!
//! ```rust
//! use qta_core::prelude::*;
//!
//! let series: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
//! let mean = rolling_mean(&series, 2).unwrap();
//! ```

// Core types
pub use crate::frame::DataFrame;
pub use crate::input::{PriceInput, CLOSE_ALIASES, PRICE_LABEL};
pub use crate::num::Real;
pub use crate::series::Series;

// Error types
pub use crate::error::{Result, TaError};

// Primitives
pub use crate::input::{require_columns, resolve_close};
pub use crate::rolling::{ewm_mean, rolling_mean, rolling_std, rolling_sum};
pub use crate::wilder::{wilder_smooth, WilderMode};
