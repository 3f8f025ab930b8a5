mod frame;
mod legend;
mod null_renderer;
mod primitives;
mod reconcile;

pub use frame::{RenderFrame, Scene};
pub use legend::{BandLegendEntry, LegendEntry, LegendPanel};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextHalo, TextPrimitive,
};
pub use reconcile::{ReconcilePlan, reconcile_keyed};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `Scene` so drawing
/// code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
