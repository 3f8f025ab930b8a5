use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_legend_entry_count: usize,
    pub render_calls: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.last_line_count = scene.chart.lines.len();
        self.last_rect_count = scene.chart.rects.len();
        self.last_circle_count = scene.chart.circles.len();
        self.last_text_count = scene.chart.texts.len();
        self.last_legend_entry_count = scene.legend.entry_count();
        self.render_calls += 1;
        Ok(())
    }
}
