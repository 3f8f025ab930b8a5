use crate::core::types::{Padding, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel dimensions for one render cycle, split between the line region and
/// the on/off bars region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub padding: Padding,
    pub chart_width: f64,
    pub chart_height: f64,
    pub line_chart_height: f64,
    pub on_offs_height: f64,
}

impl ChartLayout {
    /// Computes the layout from the effective container size.
    ///
    /// A measured dimension `<= 0` (hidden or off-screen container) retains
    /// the prior dimension instead of collapsing the chart, each axis
    /// independently.
    pub fn compute(
        prior: Viewport,
        measured: Option<Viewport>,
        padding: Padding,
        line_chart_height_ratio: f64,
        charts_gap: f64,
    ) -> ChartResult<Self> {
        let viewport = effective_viewport(prior, measured);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let chart_width = viewport.width - padding.left - padding.right;
        let chart_height = viewport.height - padding.top - padding.bottom;
        if chart_width <= 0.0 || chart_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: chart_width,
                height: chart_height,
            });
        }

        let line_chart_height = chart_height * line_chart_height_ratio;
        let on_offs_height = chart_height * (1.0 - line_chart_height_ratio) - charts_gap;

        Ok(Self {
            viewport,
            padding,
            chart_width,
            chart_height,
            line_chart_height,
            on_offs_height,
        })
    }
}

/// Applies the retention policy for zero-size measurements, each axis
/// independently.
pub(crate) fn effective_viewport(prior: Viewport, measured: Option<Viewport>) -> Viewport {
    let Some(measured) = measured else {
        return prior;
    };

    let width = if measured.width.is_finite() && measured.width > 0.0 {
        measured.width
    } else {
        prior.width
    };
    let height = if measured.height.is_finite() && measured.height > 0.0 {
        measured.height
    } else {
        prior.height
    };
    Viewport::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::ChartLayout;
    use crate::core::types::{Padding, Viewport};

    fn padding() -> Padding {
        Padding {
            top: 50.0,
            right: 30.0,
            bottom: 0.0,
            left: 20.0,
        }
    }

    #[test]
    fn layout_splits_regions_by_ratio_and_gap() {
        let layout = ChartLayout::compute(
            Viewport::new(1050.0, 650.0),
            None,
            padding(),
            0.5,
            25.0,
        )
        .expect("layout");

        assert_eq!(layout.chart_width, 1000.0);
        assert_eq!(layout.chart_height, 600.0);
        assert_eq!(layout.line_chart_height, 300.0);
        assert_eq!(layout.on_offs_height, 275.0);
    }

    #[test]
    fn zero_measured_dimensions_retain_prior_size() {
        let layout = ChartLayout::compute(
            Viewport::new(1050.0, 650.0),
            Some(Viewport::new(0.0, -4.0)),
            padding(),
            0.5,
            25.0,
        )
        .expect("layout");

        assert_eq!(layout.viewport, Viewport::new(1050.0, 650.0));
    }

    #[test]
    fn measured_dimensions_apply_independently() {
        let layout = ChartLayout::compute(
            Viewport::new(1050.0, 650.0),
            Some(Viewport::new(500.0, 0.0)),
            padding(),
            0.5,
            25.0,
        )
        .expect("layout");

        assert_eq!(layout.viewport, Viewport::new(500.0, 650.0));
    }

    #[test]
    fn padding_consuming_all_space_is_rejected() {
        let result = ChartLayout::compute(
            Viewport::new(40.0, 650.0),
            None,
            padding(),
            0.5,
            25.0,
        );
        assert!(result.is_err());
    }
}
