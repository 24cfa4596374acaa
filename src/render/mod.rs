mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, FrameStats, RenderFrame, RenderLayer};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, LinePrimitive, PathPrimitive, Paint, PolygonPrimitive, RectPrimitive, Stroke,
    TextHAlign, TextPrimitive,
};

use crate::core::TextMeasurer;
use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` per layer, so drawing
/// code stays isolated from plot state and interaction logic. Layout measures
/// tick labels through the same backend.
pub trait Renderer: TextMeasurer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
