mod axis;
mod config;
mod engine;
mod labels;
mod resize;
mod scene_builder;

pub use axis::TickLabelPreset;
pub use config::{ChartEngineConfig, DEFAULT_PALETTE};
pub use engine::ChartEngine;
pub use labels::{format_cursor_date, format_time_tick, format_value};
pub use resize::{ResizeDispatcher, ResizeSubscription};
pub use scene_builder::Scales;
