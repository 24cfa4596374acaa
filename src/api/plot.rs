use tracing::{debug, trace};

use crate::config::PlotOptions;
use crate::core::{Axes, PlotLayout, PlotOffset, Series, Viewport};
use crate::error::PlotResult;
use crate::extensions::{PluginContext, PluginPipeline};
use crate::interaction::{
    HighlightSet, InteractionMode, PlotEvent, RedrawScheduler, SelectionState,
};
use crate::render::Renderer;

/// Main plot facade consumed by host applications.
///
/// `Plot` owns the normalized series, the computed axes and layout, the
/// interaction state and the renderer. Every data or option change flows
/// through `set_data` / `setup_grid` / `draw`; pointer input arrives through
/// `mouse_*` and `click`, and resulting events are drained with
/// `take_events`.
pub struct Plot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) options: PlotOptions,
    pub(super) plugins: PluginPipeline,
    pub(super) series: Vec<Series>,
    pub(super) axes: Axes,
    pub(super) layout: PlotLayout,
    pub(super) highlights: HighlightSet,
    pub(super) selection: SelectionState,
    pub(super) mode: InteractionMode,
    pub(super) ignore_click: bool,
    pub(super) scheduler: RedrawScheduler,
    pub(super) events: Vec<PlotEvent>,
}

impl<R: Renderer> Plot<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn plot_offset(&self) -> PlotOffset {
        self.layout.offset
    }

    #[must_use]
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drains events emitted since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<PlotEvent> {
        std::mem::take(&mut self.events)
    }

    /// Paints the base and overlay layers; a pending overlay repaint is dropped.
    pub fn draw(&mut self) -> PlotResult<()> {
        self.scheduler.cancel();
        let base = self.build_base_frame();
        self.renderer.render(&base)?;
        self.draw_overlay()?;
        debug!(commands = base.commands.len(), "plot drawn");
        Ok(())
    }

    pub(super) fn draw_overlay(&mut self) -> PlotResult<()> {
        let overlay = self.build_overlay_frame();
        trace!(commands = overlay.commands.len(), "overlay drawn");
        self.renderer.render(&overlay)
    }

    pub(super) fn request_overlay_redraw(&mut self) {
        self.scheduler.request();
    }

    /// Advances the redraw clock, painting the overlay when its repaint falls due.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> PlotResult<bool> {
        if self.scheduler.advance(elapsed_ms) {
            self.draw_overlay()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Paints a pending overlay repaint right away.
    pub fn flush_overlay(&mut self) -> PlotResult<bool> {
        if self.scheduler.flush() {
            self.draw_overlay()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(super) fn emit(&mut self, event: PlotEvent) {
        trace!(event = event.name(), "plot event");
        let context = PluginContext {
            viewport: self.viewport,
            options: &self.options,
            series: &self.series,
            axes: &self.axes,
            plot_offset: self.layout.offset,
        };
        self.plugins.dispatch_event(&event, &context);
        self.events.push(event);
    }
}
