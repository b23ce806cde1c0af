//! Trend indicators.
//!
//! These measure the direction and strength of a price trend.

pub mod adx;
pub mod macd;

pub use adx::adx;
pub use macd::macd;
