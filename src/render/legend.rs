use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One swatch + display-name pair in the lines section.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub key: String,
    pub name: String,
    pub swatch: Color,
}

/// One on/off legend entry, vertically aligned with its band row.
#[derive(Debug, Clone, PartialEq)]
pub struct BandLegendEntry {
    pub key: String,
    pub name: String,
    pub swatch: Color,
    /// Offset from the top of the on/offs region, matching the band position.
    pub top: f64,
    pub height: f64,
}

/// Declarative legend description, split the way the dashboard splits its
/// regions: a lines section above an on/offs section.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendPanel {
    /// Top padding aligning the panel with the chart area.
    pub padding_top: f64,
    /// Height reserved for the lines section (line region plus gap).
    pub lines_section_height: f64,
    pub line_entries: Vec<LegendEntry>,
    pub on_off_entries: Vec<BandLegendEntry>,
}

impl LegendPanel {
    pub fn validate(&self) -> ChartResult<()> {
        for entry in &self.line_entries {
            if entry.name.is_empty() {
                return Err(ChartError::InvalidData(
                    "legend entry name must not be empty".to_owned(),
                ));
            }
            entry.swatch.validate()?;
        }
        for entry in &self.on_off_entries {
            if entry.name.is_empty() {
                return Err(ChartError::InvalidData(
                    "legend entry name must not be empty".to_owned(),
                ));
            }
            if !entry.top.is_finite() || !entry.height.is_finite() || entry.height < 0.0 {
                return Err(ChartError::InvalidData(
                    "legend band geometry must be finite".to_owned(),
                ));
            }
            entry.swatch.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.line_entries.len() + self.on_off_entries.len()
    }
}
