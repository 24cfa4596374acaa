use std::f64::consts::PI;

use tracing::trace;

use crate::core::{bar_extent, clip_bar, BarGeometry, PixelPoint, Series};
use crate::interaction::Highlight;
use crate::render::{
    ArcPrimitive, DrawCommand, Paint, PathPrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    RenderLayer, Renderer, Stroke,
};

use super::Plot;

const HIGHLIGHT_ALPHA_SCALE: f64 = 0.5;
const POINT_HIGHLIGHT_RADIUS_SCALE: f64 = 1.5;
const SELECTION_FILL_ALPHA_SCALE: f64 = 0.4;
const SELECTION_STROKE_ALPHA_SCALE: f64 = 0.8;
const SELECTION_STROKE_WIDTH: f64 = 1.0;

impl<R: Renderer> Plot<R> {
    pub(super) fn build_overlay_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport, RenderLayer::Overlay);
        for highlight in self.highlights.iter() {
            self.push_highlight(&mut frame, highlight);
        }
        self.push_selection(&mut frame);
        trace!(commands = frame.commands.len(), "overlay frame built");
        frame
    }

    fn push_highlight(&self, frame: &mut RenderFrame, highlight: &Highlight) {
        let Some(series) = self.series.get(highlight.series_index) else {
            return;
        };
        let Some(slots) = series.datapoints.point(highlight.point_index) else {
            return;
        };
        let (Some(x), Some(y)) = (slots.first().copied().flatten(), slots.get(1).copied().flatten()) else {
            return;
        };
        let baseline = slots.get(2).copied().flatten().unwrap_or(0.0);

        if series.bars.show {
            self.push_bar_highlight(frame, series, highlight.point_index, (x, y, baseline));
        } else {
            self.push_point_highlight(frame, series, x, y);
        }
    }

    fn push_point_highlight(&self, frame: &mut RenderFrame, series: &Series, x: f64, y: f64) {
        let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
        if x < xaxis.min || x > xaxis.max || y < yaxis.min || y > yaxis.max {
            return;
        }
        let ring = series.points.radius + series.points.line_width / 2.0;
        if ring <= 0.0 {
            return;
        }
        let color = series.color.scale(None, None, None, Some(HIGHLIGHT_ALPHA_SCALE));
        frame.push(DrawCommand::Arc(ArcPrimitive {
            center: self.to_canvas(PixelPoint::new(xaxis.p2c(x), yaxis.p2c(y))),
            radius: POINT_HIGHLIGHT_RADIUS_SCALE * ring,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            fill: None,
            stroke: Some(Stroke::new(color, ring)),
        }));
    }

    fn push_bar_highlight(
        &self,
        frame: &mut RenderFrame,
        series: &Series,
        point_index: usize,
        (x, y, baseline): (f64, f64, f64),
    ) {
        let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
        let bars = &series.bars;
        let extent = bar_extent(x, y, baseline, bars.bar_left(), bars.bar_right(), bars.horizontal);
        let Some(extent) = clip_bar(extent, xaxis, yaxis) else {
            return;
        };
        let bar = BarGeometry {
            point_index,
            extent,
            left: xaxis.p2c(extent.left),
            right: xaxis.p2c(extent.right),
            top: yaxis.p2c(extent.top),
            bottom: yaxis.p2c(extent.bottom),
        };

        let color = series.color.scale(None, None, None, Some(HIGHLIGHT_ALPHA_SCALE));
        frame.push(DrawCommand::Polygon(PolygonPrimitive {
            points: bar.corners().map(|corner| self.to_canvas(corner)).to_vec(),
            paint: Paint::Solid(color),
        }));
        if bars.line_width > 0.0 {
            let stroke = Stroke::new(color, bars.line_width);
            for run in bar.outline_runs(0.0) {
                frame.push(DrawCommand::Path(PathPrimitive {
                    points: run.into_iter().map(|point| self.to_canvas(point)).collect(),
                    stroke,
                }));
            }
        }
    }

    fn push_selection(&self, frame: &mut RenderFrame) {
        if !self.selection.show || !self.selection.is_sane() {
            return;
        }
        let color = self.options.selection.color;
        let (x, y, width, height) = self.selection.rect();
        let corner = self.to_canvas(PixelPoint::new(x, y));
        frame.push(DrawCommand::Rect(RectPrimitive {
            x: corner.x,
            y: corner.y,
            width,
            height,
            fill: Some(Paint::Solid(
                color.scale(None, None, None, Some(SELECTION_FILL_ALPHA_SCALE)),
            )),
            stroke: Some(Stroke::new(
                color.scale(None, None, None, Some(SELECTION_STROKE_ALPHA_SCALE)),
                SELECTION_STROKE_WIDTH,
            )),
        }));
    }
}
