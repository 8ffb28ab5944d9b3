//! candlechart-rs: candlestick viewport/transform engine.
//!
//! This crate turns an ordered OHLC bar sequence plus pan/zoom gesture input
//! into a clamped visible window, a per-frame price-to-pixel mapping and a
//! deterministic list of draw primitives for an external drawing backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
