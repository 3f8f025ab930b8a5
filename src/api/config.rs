use serde::{Deserialize, Serialize};

use crate::core::{Padding, SeriesDescriptor};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fixed ordinal palette applied when the caller supplies none.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Only the descriptor
/// lists are required; everything else carries documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Raw keys rendered as continuous lines, with display names.
    pub line_series: Vec<SeriesDescriptor>,
    /// Raw keys rendered as discrete on/off interval rows, with display names.
    pub bar_series: Vec<SeriesDescriptor>,
    /// Selector hint for the host's chart container.
    #[serde(default = "default_container")]
    pub container: String,
    /// Selector hint for the host's legend container.
    #[serde(default = "default_legend_container")]
    pub legend_container: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Explicit padding; when absent a width-responsive default applies.
    #[serde(default)]
    pub padding: Option<Padding>,
    /// Vertical division ratio between the line region and the on/offs region.
    #[serde(default = "default_line_chart_height_ratio")]
    pub line_chart_height_ratio: f64,
    /// Vertical gap between the two regions in pixels.
    #[serde(default = "default_charts_gap")]
    pub charts_gap: f64,
    /// Ordinal palette as hex strings, cycled over the data key domain.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Container width at which tick labels switch to the shallow preset.
    #[serde(default = "default_wide_layout_min_width")]
    pub wide_layout_min_width: f64,
}

impl ChartEngineConfig {
    /// Creates a config with default sizing for the given descriptor lists.
    #[must_use]
    pub fn new(line_series: Vec<SeriesDescriptor>, bar_series: Vec<SeriesDescriptor>) -> Self {
        Self {
            line_series,
            bar_series,
            container: default_container(),
            legend_container: default_legend_container(),
            width: default_width(),
            height: default_height(),
            padding: None,
            line_chart_height_ratio: default_line_chart_height_ratio(),
            charts_gap: default_charts_gap(),
            palette: default_palette(),
            wide_layout_min_width: default_wide_layout_min_width(),
        }
    }

    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    #[must_use]
    pub fn with_legend_container(mut self, legend_container: impl Into<String>) -> Self {
        self.legend_container = legend_container.into();
        self
    }

    /// Sets the fallback dimensions used when the container reports zero.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_line_chart_height_ratio(mut self, ratio: f64) -> Self {
        self.line_chart_height_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_charts_gap(mut self, charts_gap: f64) -> Self {
        self.charts_gap = charts_gap;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_wide_layout_min_width(mut self, wide_layout_min_width: f64) -> Self {
        self.wide_layout_min_width = wide_layout_min_width;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.line_series.is_empty() && self.bar_series.is_empty() {
            return Err(ChartError::Configuration(
                "at least one line or bar series descriptor is required".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 || !self.height.is_finite() || self.height <= 0.0
        {
            return Err(ChartError::Configuration(
                "default width and height must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_chart_height_ratio.is_finite()
            || !(self.line_chart_height_ratio > 0.0 && self.line_chart_height_ratio < 1.0)
        {
            return Err(ChartError::Configuration(
                "line chart height ratio must be in (0, 1)".to_owned(),
            ));
        }
        if !self.charts_gap.is_finite() || self.charts_gap < 0.0 {
            return Err(ChartError::Configuration(
                "charts gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.wide_layout_min_width.is_finite() || self.wide_layout_min_width <= 0.0 {
            return Err(ChartError::Configuration(
                "wide layout min width must be finite and > 0".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::Configuration(
                "color palette must not be empty".to_owned(),
            ));
        }
        self.resolved_palette().map(|_| ())
    }

    /// Parses the configured palette into colors.
    pub fn resolved_palette(&self) -> ChartResult<Vec<Color>> {
        self.palette.iter().map(|hex| Color::from_hex(hex)).collect()
    }

    /// The padding in effect for the given container width.
    #[must_use]
    pub fn resolved_padding(&self, viewport_width: f64) -> Padding {
        self.padding
            .unwrap_or_else(|| Padding::for_width(viewport_width, self.wide_layout_min_width))
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Configuration(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Configuration(format!("failed to parse config: {e}")))
    }
}

fn default_container() -> String {
    "#chart".to_owned()
}

fn default_legend_container() -> String {
    "#chart_legend".to_owned()
}

fn default_width() -> f64 {
    960.0
}

fn default_height() -> f64 {
    600.0
}

fn default_line_chart_height_ratio() -> f64 {
    0.5
}

fn default_charts_gap() -> f64 {
    25.0
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|hex| (*hex).to_owned()).collect()
}

fn default_wide_layout_min_width() -> f64 {
    1000.0
}
