//! dashchart: time-series dashboard chart engine.
//!
//! This crate renders a dashboard combining continuous sensor lines with
//! discrete equipment on/off interval bands on a shared time axis. Scale and
//! data logic stay pure and backend-agnostic; drawing backends consume a
//! declarative scene description.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
