use tracing::{debug, trace};

use crate::core::layout::effective_viewport;
use crate::core::{ChartLayout, DashboardData, RawSeriesMap, Viewport, normalize};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CursorPhase, CursorSnapshot, CursorTracker};
use crate::render::{RenderFrame, Renderer, Scene};

use super::config::ChartEngineConfig;
use super::scene_builder::{Scales, build_cursor_overlay, build_scene};

/// Everything derived from one render pass. Replaced wholesale on the next
/// pass, never patched.
#[derive(Debug, Clone, PartialEq)]
struct EngineModel {
    data: DashboardData,
    layout: ChartLayout,
    scales: Scales,
    scene: Scene,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates normalization, layout, scales, scene building,
/// the cursor tracker, and renderer calls. It holds exactly one current
/// config/data pair; every render or resize re-runs the full pipeline.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    raw: Option<RawSeriesMap>,
    viewport: Viewport,
    model: Option<EngineModel>,
    cursor: CursorTracker,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(config.width, config.height);
        Ok(Self {
            renderer,
            config,
            raw: None,
            viewport,
            model: None,
            cursor: CursorTracker::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Replaces the raw keyed series map. The model goes stale until the
    /// next `render` call.
    pub fn set_data(&mut self, raw: RawSeriesMap) {
        debug!(series = raw.len(), "raw data replaced");
        self.raw = Some(raw);
    }

    #[must_use]
    pub fn data(&self) -> Option<&RawSeriesMap> {
        self.raw.as_ref()
    }

    /// Performs one full draw: normalize, layout, scales, scene, renderer.
    ///
    /// Fails fast with a configuration error when no data has been supplied.
    pub fn render(&mut self) -> ChartResult<()> {
        self.render_pass(None)
    }

    /// Consumes a container resize signal and re-runs the full pipeline.
    ///
    /// Zero or negative measurements retain the prior dimensions, so a
    /// hidden container never collapses the chart.
    pub fn handle_resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        self.render_pass(Some(Viewport::new(width, height)))
    }

    fn render_pass(&mut self, measured: Option<Viewport>) -> ChartResult<()> {
        let raw = self.raw.as_ref().ok_or_else(|| {
            ChartError::Configuration("data missing: call set_data before render".to_owned())
        })?;

        let data = normalize(raw, &self.config.line_series, &self.config.bar_series)?;
        let viewport = effective_viewport(self.viewport, measured);
        let padding = self.config.resolved_padding(viewport.width);
        let layout = ChartLayout::compute(
            viewport,
            None,
            padding,
            self.config.line_chart_height_ratio,
            self.config.charts_gap,
        )?;
        let scales = Scales::build(raw, &data, &layout, self.config.resolved_palette()?)?;
        let scene = build_scene(&self.config, &data, &layout, &scales)?;

        self.cursor.rebuild_bands(&data.line_series, scales.time);
        self.renderer.render(&scene)?;

        trace!(
            width = layout.viewport.width,
            height = layout.viewport.height,
            lines = data.line_series.len(),
            bars = data.bar_series.len(),
            "render pass complete"
        );

        self.viewport = layout.viewport;
        self.model = Some(EngineModel {
            data,
            layout,
            scales,
            scene,
        });
        Ok(())
    }

    /// Pointer entered the line-region hit rectangle.
    pub fn pointer_enter(&mut self) {
        self.cursor.pointer_enter();
    }

    /// Pointer left the line-region hit rectangle.
    pub fn pointer_leave(&mut self) {
        self.cursor.pointer_leave();
    }

    /// Pointer moved to `x`, in chart-area-local coordinates (the same space
    /// as the hit rectangle). Returns the resolved snapshot while visible.
    pub fn pointer_move(&mut self, x: f64) -> Option<&CursorSnapshot> {
        let model = self.model.as_ref()?;
        self.cursor.pointer_move(
            x,
            &model.data.line_series,
            model.scales.time,
            model.scales.value,
            model.layout.chart_width,
        )
    }

    #[must_use]
    pub fn cursor_phase(&self) -> CursorPhase {
        self.cursor.phase()
    }

    #[must_use]
    pub fn cursor_snapshot(&self) -> Option<&CursorSnapshot> {
        self.cursor.snapshot()
    }

    /// Builds the cursor overlay frame for the current snapshot, `None`
    /// while hidden or before the first render.
    pub fn cursor_overlay(&self) -> ChartResult<Option<RenderFrame>> {
        let (Some(model), Some(snapshot)) = (self.model.as_ref(), self.cursor.snapshot()) else {
            return Ok(None);
        };
        build_cursor_overlay(snapshot, &self.config, &model.layout, &model.scales).map(Some)
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.model.as_ref().map(|model| &model.scene)
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.model.as_ref().map(|model| &model.layout)
    }

    #[must_use]
    pub fn scales(&self) -> Option<&Scales> {
        self.model.as_ref().map(|model| &model.scales)
    }

    #[must_use]
    pub fn normalized_data(&self) -> Option<&DashboardData> {
        self.model.as_ref().map(|model| &model.data)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
