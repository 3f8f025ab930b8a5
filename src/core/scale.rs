use chrono::{DateTime, Utc};
use tracing::warn;

use crate::core::types::DateRange;
use crate::error::{ChartError, ChartResult};

/// Maps the shared date range onto `[0, chart_width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    range: DateRange,
    width_px: f64,
}

impl TimeScale {
    pub fn new(range: DateRange, width_px: f64) -> ChartResult<Self> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale range width must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { range, width_px })
    }

    #[must_use]
    pub fn domain(self) -> DateRange {
        self.range
    }

    /// A degenerate single-instant domain maps every date to pixel 0.
    #[must_use]
    pub fn to_pixel(self, date: DateTime<Utc>) -> f64 {
        let span = self.range.span_seconds();
        if span <= 0.0 {
            return 0.0;
        }
        let offset = (date - self.range.start).num_milliseconds() as f64 / 1_000.0;
        (offset / span) * self.width_px
    }
}

/// Inverted linear scale for the line region: larger values plot higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_max: f64,
    height_px: f64,
}

impl ValueScale {
    /// Builds the scale from the largest line value, `None` when all series
    /// are empty. Non-positive or absent maxima degenerate to a flat
    /// baseline instead of dividing by zero.
    pub fn from_max(max_value: Option<f64>, height_px: f64) -> ChartResult<Self> {
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale range height must be finite and > 0".to_owned(),
            ));
        }

        let domain_max = max_value.unwrap_or(0.0);
        if !domain_max.is_finite() {
            return Err(ChartError::InvalidData(
                "line values must be finite".to_owned(),
            ));
        }
        if domain_max <= 0.0 {
            warn!(domain_max, "value domain degenerate, rendering flat baseline");
        }

        Ok(Self {
            domain_max,
            height_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.domain_max <= 0.0 {
            return self.height_px;
        }
        self.height_px * (1.0 - value / self.domain_max)
    }
}

/// Maps ordered bar-series keys to equal-width pixel bands with inner padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    span_px: f64,
    padding_inner: f64,
}

impl BandScale {
    pub fn new(keys: Vec<String>, span_px: f64, padding_inner: f64) -> ChartResult<Self> {
        if !span_px.is_finite() || span_px < 0.0 {
            return Err(ChartError::InvalidData(
                "band scale span must be finite and >= 0".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band inner padding must be in [0, 1)".to_owned(),
            ));
        }
        Ok(Self {
            keys,
            span_px,
            padding_inner,
        })
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        self.span_px / (self.keys.len() as f64 - self.padding_inner)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Top edge of the key's band, `None` for keys outside the domain.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.keys.iter().position(|candidate| candidate == key)?;
        Some(index as f64 * self.step())
    }
}

/// Ordinal scale from series key to a fixed palette entry.
///
/// The domain covers every raw data key so colors stay stable across renders
/// as long as the key set is unchanged; the palette cycles when shorter than
/// the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale<C: Copy> {
    keys: Vec<String>,
    palette: Vec<C>,
}

impl<C: Copy> ColorScale<C> {
    pub fn new(keys: Vec<String>, palette: Vec<C>) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::Configuration(
                "color palette must not be empty".to_owned(),
            ));
        }
        Ok(Self { keys, palette })
    }

    #[must_use]
    pub fn color(&self, key: &str) -> C {
        let index = self
            .keys
            .iter()
            .position(|candidate| candidate == key)
            .unwrap_or(0);
        self.palette[index % self.palette.len()]
    }
}
