use tracing::debug;

use crate::config::SelectionMode;
use crate::core::{AxisId, AxisRange, PixelPoint, Series};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{
    find_nearby_item, plot_item, HighlightTrigger, InteractionMode, MouseButton, PlotEvent,
    PlotPosition, SelectionCorner, SelectionRanges,
};
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Canvas pixels to plot-area pixels.
    fn to_plot_area(&self, canvas_x: f64, canvas_y: f64) -> PixelPoint {
        PixelPoint::new(
            canvas_x - self.layout.offset.left,
            canvas_y - self.layout.offset.top,
        )
    }

    /// Pointer position in canvas pixels and in data units of every used axis.
    #[must_use]
    pub fn plot_position(&self, canvas_x: f64, canvas_y: f64) -> PlotPosition {
        let area = self.to_plot_area(canvas_x, canvas_y);
        let value = |id: AxisId| {
            let axis = &self.axes[id];
            axis.used
                .then(|| axis.c2p(if axis.is_horizontal() { area.x } else { area.y }))
        };
        PlotPosition {
            canvas_x,
            canvas_y,
            x: value(AxisId::X),
            y: value(AxisId::Y),
            x2: value(AxisId::X2),
            y2: value(AxisId::Y2),
        }
    }

    pub fn mouse_move(&mut self, canvas_x: f64, canvas_y: f64) {
        if self.options.grid.hoverable {
            self.trigger_click_hover(HighlightTrigger::Hover, canvas_x, canvas_y, |s| s.hoverable);
        }
        if self.mode == InteractionMode::Selecting {
            self.update_selection(canvas_x, canvas_y);
            let ranges = self.get_selection();
            self.emit(PlotEvent::Selecting(ranges));
        }
    }

    /// Pointer left the canvas: hover auto-highlights are dropped.
    pub fn mouse_leave(&mut self, canvas_x: f64, canvas_y: f64) {
        if self.options.grid.hoverable {
            self.trigger_click_hover(HighlightTrigger::Hover, canvas_x, canvas_y, |_| false);
        }
    }

    /// Starts a selection drag on the primary button when a selection mode is set.
    pub fn mouse_down(&mut self, canvas_x: f64, canvas_y: f64, button: MouseButton) {
        if button != MouseButton::Primary {
            return;
        }
        let Some(mode) = self.options.selection.mode else {
            return;
        };
        let point = self.to_plot_area(canvas_x, canvas_y);
        for corner in [SelectionCorner::First, SelectionCorner::Second] {
            self.selection
                .set_corner(corner, point, mode, self.layout.plot_width, self.layout.plot_height);
        }
        if self.selection.show {
            self.request_overlay_redraw();
        }
        self.selection.active = true;
        self.mode = InteractionMode::Selecting;
        debug!(x = point.x, y = point.y, "selection started");
    }

    /// Ends a selection drag, committing it when it is large enough.
    pub fn mouse_up(&mut self, canvas_x: f64, canvas_y: f64) {
        if self.mode != InteractionMode::Selecting {
            return;
        }
        self.selection.active = false;
        self.mode = InteractionMode::Idle;
        self.update_selection(canvas_x, canvas_y);

        if self.selection.is_sane() {
            self.trigger_selected();
            self.ignore_click = true;
        } else {
            self.emit(PlotEvent::Unselected);
            self.emit(PlotEvent::Selecting(None));
        }
    }

    /// A click right after a committed selection is swallowed.
    pub fn click(&mut self, canvas_x: f64, canvas_y: f64) {
        if self.ignore_click {
            self.ignore_click = false;
            return;
        }
        if self.options.grid.clickable {
            self.trigger_click_hover(HighlightTrigger::Click, canvas_x, canvas_y, |s| s.clickable);
        }
    }

    fn update_selection(&mut self, canvas_x: f64, canvas_y: f64) {
        let Some(mode) = self.options.selection.mode else {
            return;
        };
        let point = self.to_plot_area(canvas_x, canvas_y);
        self.selection.set_corner(
            SelectionCorner::Second,
            point,
            mode,
            self.layout.plot_width,
            self.layout.plot_height,
        );
        if self.selection.is_sane() {
            self.selection.show = true;
            self.request_overlay_redraw();
        } else {
            self.clear_selection(true);
        }
    }

    fn trigger_click_hover(
        &mut self,
        trigger: HighlightTrigger,
        canvas_x: f64,
        canvas_y: f64,
        filter: impl Fn(&Series) -> bool,
    ) {
        let position = self.plot_position(canvas_x, canvas_y);
        let mouse = self.to_plot_area(canvas_x, canvas_y);
        let radius = self.options.grid.mouse_active_radius;
        let hit = find_nearby_item(&self.series, &self.axes, mouse, radius, filter);
        let offset = self.layout.offset;
        let item = hit.and_then(|hit| plot_item(&self.series, &self.axes, (offset.left, offset.top), hit));

        if self.options.grid.auto_highlight
            && self.highlights.apply_auto(trigger, item.as_ref().map(|item| (item.series_index, item.data_index)))
        {
            self.request_overlay_redraw();
        }

        let event = match trigger {
            HighlightTrigger::Hover => PlotEvent::Hover { position, item },
            HighlightTrigger::Click => PlotEvent::Click { position, item },
        };
        self.emit(event);
    }

    /// Current selection in data units of every used axis, when one is shown.
    #[must_use]
    pub fn get_selection(&self) -> Option<SelectionRanges> {
        if !self.selection.show || !self.selection.is_sane() {
            return None;
        }
        let (first, second) = (self.selection.first, self.selection.second);
        let range = |id: AxisId| {
            let axis = &self.axes[id];
            if !axis.used {
                return None;
            }
            let (a, b) = if axis.is_horizontal() {
                (first.x, second.x)
            } else {
                (first.y, second.y)
            };
            Some(AxisRange::ordered(axis.c2p(a), axis.c2p(b)))
        };
        Some(SelectionRanges {
            xaxis: range(AxisId::X),
            yaxis: range(AxisId::Y),
            x2axis: range(AxisId::X2),
            y2axis: range(AxisId::Y2),
        })
    }

    /// Shows a selection covering `ranges`.
    ///
    /// A direction the selection mode does not select, or one without a range,
    /// spans the whole plot area. Emits `plotselected` unless `prevent_event`.
    pub fn set_selection(&mut self, ranges: SelectionRanges, prevent_event: bool) -> PlotResult<()> {
        let all = [ranges.xaxis, ranges.yaxis, ranges.x2axis, ranges.y2axis];
        if all
            .iter()
            .flatten()
            .any(|range| !range.from.is_finite() || !range.to.is_finite())
        {
            return Err(PlotError::InvalidData(
                "selection ranges must be finite".to_owned(),
            ));
        }

        let mode = self.options.selection.mode.unwrap_or(SelectionMode::Xy);
        let (width, height) = (self.layout.plot_width, self.layout.plot_height);

        let horizontal = ranges
            .xaxis
            .map(|range| (AxisId::X, range))
            .or(ranges.x2axis.map(|range| (AxisId::X2, range)))
            .filter(|_| mode.spans_x());
        let (x1, x2) = match horizontal {
            Some((id, range)) => {
                let axis = &self.axes[id];
                let (a, b) = (axis.p2c(range.from), axis.p2c(range.to));
                (a.min(b), a.max(b))
            }
            None => (0.0, width),
        };

        let vertical = ranges
            .yaxis
            .map(|range| (AxisId::Y, range))
            .or(ranges.y2axis.map(|range| (AxisId::Y2, range)))
            .filter(|_| mode.spans_y());
        let (y1, y2) = match vertical {
            Some((id, range)) => {
                let axis = &self.axes[id];
                let (a, b) = (axis.p2c(range.from), axis.p2c(range.to));
                (a.min(b), a.max(b))
            }
            None => (0.0, height),
        };

        self.selection.first = PixelPoint::new(x1, y1);
        self.selection.second = PixelPoint::new(x2, y2);
        self.selection.show = true;
        self.request_overlay_redraw();
        if !prevent_event && self.selection.is_sane() {
            self.trigger_selected();
        }
        Ok(())
    }

    /// Hides the selection; emits `plotunselected` unless `prevent_event`.
    pub fn clear_selection(&mut self, prevent_event: bool) {
        if !self.selection.show {
            return;
        }
        self.selection.show = false;
        self.request_overlay_redraw();
        if !prevent_event {
            self.emit(PlotEvent::Unselected);
        }
    }

    fn trigger_selected(&mut self) {
        let Some(ranges) = self.get_selection() else {
            return;
        };
        self.emit(PlotEvent::Selected(ranges));
        if let (Some(x), Some(y)) = (ranges.xaxis, ranges.yaxis) {
            self.emit(PlotEvent::LegacySelected {
                x1: x.from,
                y1: y.from,
                x2: x.to,
                y2: y.to,
            });
        }
    }

    fn check_point(&self, series_index: usize, point_index: usize) -> PlotResult<()> {
        let series = self.series.get(series_index).ok_or_else(|| {
            PlotError::InvalidData(format!(
                "series index {series_index} out of range ({} series)",
                self.series.len()
            ))
        })?;
        if point_index >= series.datapoints.len() {
            return Err(PlotError::InvalidData(format!(
                "point index {point_index} out of range for series {series_index} ({} points)",
                series.datapoints.len()
            )));
        }
        Ok(())
    }

    /// Pins a highlight on one datapoint; pointer movement does not remove it.
    pub fn highlight(&mut self, series_index: usize, point_index: usize) -> PlotResult<()> {
        self.check_point(series_index, point_index)?;
        if self.highlights.highlight(series_index, point_index, None) {
            self.request_overlay_redraw();
        }
        Ok(())
    }

    pub fn unhighlight(&mut self, series_index: usize, point_index: usize) {
        if self.highlights.unhighlight(series_index, point_index) {
            self.request_overlay_redraw();
        }
    }

    pub fn unhighlight_all(&mut self) {
        if self.highlights.clear() {
            self.request_overlay_redraw();
        }
    }
}
