//! Prelude module for convenient imports.
//!
//! Re-exports every indicator function together with the core types they
//! consume and produce.

pub use qta_core::prelude::*;

pub use crate::momentum::rsi;
pub use crate::trend::{adx, macd};
pub use crate::volatility::{atr, bollband};
pub use crate::volume::obv;
