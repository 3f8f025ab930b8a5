use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Measured or configured container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Inner chart padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Width-responsive default: narrow layouts reserve extra headroom for
    /// steeply rotated time-axis labels.
    #[must_use]
    pub fn for_width(viewport_width: f64, wide_layout_min_width: f64) -> Self {
        let top = if viewport_width >= wide_layout_min_width {
            50.0
        } else {
            100.0
        };
        Self {
            top,
            right: 30.0,
            bottom: 0.0,
            left: 20.0,
        }
    }
}

/// Declares one raw series key together with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: String,
    pub name: String,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// One raw sample as supplied by the external data fetch.
///
/// `value: None` marks a gap for line series and an "off" state for bar
/// series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub label: String,
    pub value: Option<f64>,
}

impl RawSample {
    #[must_use]
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Raw keyed time-series input, read-only to the engine.
///
/// Insertion order carries meaning twice over: within a series it is
/// chronological order, across keys it fixes the ordinal color domain.
pub type RawSeriesMap = IndexMap<String, Vec<RawSample>>;

/// Shared time domain computed once across all configured series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span_seconds(self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1_000.0
    }
}
