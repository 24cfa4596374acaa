use crate::core::TextMeasurer;
use crate::error::PlotResult;
use crate::render::{FrameStats, RenderFrame, RenderLayer, Renderer};

/// Headless renderer used by tests and hosts without a backend.
///
/// It still validates frame content and keeps the last frame of each layer so
/// callers can inspect what would have been drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_base: Option<RenderFrame>,
    pub last_overlay: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_stats(&self, layer: RenderLayer) -> FrameStats {
        let frame = match layer {
            RenderLayer::Base => self.last_base.as_ref(),
            RenderLayer::Overlay => self.last_overlay.as_ref(),
        };
        frame.map(RenderFrame::stats).unwrap_or_default()
    }
}

impl TextMeasurer for NullRenderer {}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        match frame.layer {
            RenderLayer::Base => self.last_base = Some(frame.clone()),
            RenderLayer::Overlay => self.last_overlay = Some(frame.clone()),
        }
        Ok(())
    }
}
