use std::f64::consts::PI;

use crate::core::{
    project_area_polygons, project_bars, project_line_paths, project_points, Color, PixelPoint,
    Series,
};
use crate::render::{
    ArcPrimitive, DrawCommand, PathPrimitive, PolygonPrimitive, RenderFrame, Renderer, Stroke,
};

use super::render_frame_builder::fill_paint;
use super::Plot;

/// Direction shadows are cast in, measured from straight down.
const SHADOW_ANGLE: f64 = PI / 18.0;
const OUTER_SHADOW_ALPHA: f64 = 0.1;
const INNER_SHADOW_ALPHA: f64 = 0.2;

fn shadow_color(alpha: f64) -> Color {
    Color::rgba(0, 0, 0, alpha)
}

impl<R: Renderer> Plot<R> {
    /// Lines, then bars, then points.
    pub(super) fn push_series(&self, frame: &mut RenderFrame, series: &Series) {
        if series.lines.is_shown() {
            self.push_series_lines(frame, series);
        }
        if series.bars.show {
            self.push_series_bars(frame, series);
        }
        if series.points.show {
            self.push_series_points(frame, series);
        }
    }

    fn push_line_paths(&self, frame: &mut RenderFrame, series: &Series, offset: (f64, f64), stroke: Stroke) {
        let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
        for path in project_line_paths(&series.datapoints, xaxis, yaxis, offset.0, offset.1) {
            frame.push(DrawCommand::Path(PathPrimitive {
                points: path.into_iter().map(|point| self.to_canvas(point)).collect(),
                stroke,
            }));
        }
    }

    fn push_series_lines(&self, frame: &mut RenderFrame, series: &Series) {
        let line_width = series.lines.line_width;
        let shadow = series.shadow_size;

        if line_width > 0.0 && shadow > 0.0 {
            let outer = line_width / 2.0 + shadow / 2.0;
            self.push_line_paths(
                frame,
                series,
                (SHADOW_ANGLE.sin() * outer, SHADOW_ANGLE.cos() * outer),
                Stroke::new(shadow_color(OUTER_SHADOW_ALPHA), shadow),
            );
            let inner = line_width / 2.0 + shadow / 4.0;
            self.push_line_paths(
                frame,
                series,
                (SHADOW_ANGLE.sin() * inner, SHADOW_ANGLE.cos() * inner),
                Stroke::new(shadow_color(INNER_SHADOW_ALPHA), shadow / 2.0),
            );
        }

        let top = self.layout.offset.top;
        if let Some(paint) = fill_paint(
            series.lines.fill,
            series.lines.fill_color.as_ref(),
            series.color,
            top + self.layout.plot_height,
            top,
        ) {
            let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
            for polygon in project_area_polygons(&series.datapoints, xaxis, yaxis) {
                if polygon.len() < 3 {
                    continue;
                }
                frame.push(DrawCommand::Polygon(PolygonPrimitive {
                    points: polygon.into_iter().map(|point| self.to_canvas(point)).collect(),
                    paint: paint.clone(),
                }));
            }
        }

        if line_width > 0.0 {
            self.push_line_paths(frame, series, (0.0, 0.0), Stroke::new(series.color, line_width));
        }
    }

    fn push_point_arcs(
        &self,
        frame: &mut RenderFrame,
        series: &Series,
        y_offset: f64,
        stroke: Option<Stroke>,
        shadow: bool,
    ) {
        let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
        let fill = if shadow {
            None
        } else {
            fill_paint(
                series.points.fill,
                series.points.fill_color.as_ref(),
                series.color,
                0.0,
                0.0,
            )
        };
        if fill.is_none() && stroke.is_none() {
            return;
        }
        let end_angle = if shadow { PI } else { 2.0 * PI };
        for marker in project_points(&series.datapoints, xaxis, yaxis, y_offset) {
            frame.push(DrawCommand::Arc(ArcPrimitive {
                center: self.to_canvas(marker.center),
                radius: series.points.radius,
                start_angle: 0.0,
                end_angle,
                fill: fill.clone(),
                stroke,
            }));
        }
    }

    fn push_series_points(&self, frame: &mut RenderFrame, series: &Series) {
        let line_width = series.points.line_width;
        let shadow = series.shadow_size;

        if line_width > 0.0 && shadow > 0.0 {
            let width = shadow / 2.0;
            self.push_point_arcs(
                frame,
                series,
                width + width / 2.0,
                Some(Stroke::new(shadow_color(OUTER_SHADOW_ALPHA), width)),
                true,
            );
            self.push_point_arcs(
                frame,
                series,
                width / 2.0,
                Some(Stroke::new(shadow_color(INNER_SHADOW_ALPHA), width)),
                true,
            );
        }

        let stroke = (line_width > 0.0).then(|| Stroke::new(series.color, line_width));
        self.push_point_arcs(frame, series, 0.0, stroke, false);
    }

    fn push_series_bars(&self, frame: &mut RenderFrame, series: &Series) {
        let (xaxis, yaxis) = (&self.axes[series.xaxis], &self.axes[series.yaxis]);
        let bars = &series.bars;
        let stroke = (bars.line_width > 0.0).then(|| Stroke::new(series.color, bars.line_width));

        for bar in project_bars(&series.datapoints, bars, xaxis, yaxis) {
            let corners = bar.corners().map(|corner| self.to_canvas(corner));
            let top = self.to_canvas(PixelPoint::new(0.0, bar.top)).y;
            let bottom = self.to_canvas(PixelPoint::new(0.0, bar.bottom)).y;
            if let Some(paint) =
                fill_paint(bars.fill, bars.fill_color.as_ref(), series.color, top, bottom)
            {
                frame.push(DrawCommand::Polygon(PolygonPrimitive {
                    points: corners.to_vec(),
                    paint,
                }));
            }

            let Some(stroke) = stroke else { continue };
            if !bar.extent.edges.any() {
                continue;
            }
            for run in bar.outline_runs(0.0) {
                frame.push(DrawCommand::Path(PathPrimitive {
                    points: run.into_iter().map(|point| self.to_canvas(point)).collect(),
                    stroke,
                }));
            }
        }
    }
}
