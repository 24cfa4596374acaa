use tracing::trace;

use crate::config::{FillColor, FillOption};
use crate::core::{collect_markings, resolve_markings, AxisId, Color, MarkingShape, PixelPoint};
use crate::render::{
    DrawCommand, LinePrimitive, Paint, RectPrimitive, RenderFrame, RenderLayer, Renderer, Stroke,
};

use super::Plot;

/// Grid lines are hairlines aligned to pixel centres.
const GRID_LINE_WIDTH: f64 = 1.0;
/// Half length of the tick marks drawn inward from the secondary axes.
const SECONDARY_TICK_PX: f64 = 5.0;

/// Resolves the fill of a series part, or `None` when filling is off.
///
/// Gradient stops are spread from canvas row `y0` to `y1`.
pub(super) fn fill_paint(
    fill: FillOption,
    fill_color: Option<&FillColor>,
    series_color: Color,
    y0: f64,
    y1: f64,
) -> Option<Paint> {
    let opacity = fill.opacity()?;
    let paint = match fill_color {
        Some(FillColor::Solid(color)) => Paint::Solid(*color),
        Some(FillColor::Gradient { colors }) if !colors.is_empty() => Paint::VerticalGradient {
            y0,
            y1,
            stops: colors.iter().map(|stop| stop.resolve(series_color)).collect(),
        },
        _ => Paint::Solid(series_color.with_alpha(opacity)),
    };
    Some(paint)
}

impl<R: Renderer> Plot<R> {
    /// Plot-area pixels to canvas pixels.
    pub(super) fn to_canvas(&self, point: PixelPoint) -> PixelPoint {
        point.translated(self.layout.offset.left, self.layout.offset.top)
    }

    pub(super) fn build_base_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport, RenderLayer::Base);
        let grid = &self.options.grid;

        self.push_background(&mut frame);
        if grid.show && !grid.above_data {
            self.push_grid(&mut frame);
        }
        for series in &self.series {
            self.push_series(&mut frame, series);
        }
        if grid.show && grid.above_data {
            self.push_grid(&mut frame);
        }
        if grid.show {
            self.push_tick_labels(&mut frame);
        }
        if self.options.legend.show {
            self.push_legend(&mut frame);
        }

        trace!(commands = frame.commands.len(), "base frame built");
        frame
    }

    fn push_background(&self, frame: &mut RenderFrame) {
        let Some(color) = self.options.grid.background_color else {
            return;
        };
        let offset = self.layout.offset;
        frame.push(DrawCommand::Rect(RectPrimitive::filled(
            offset.left,
            offset.top,
            self.layout.plot_width,
            self.layout.plot_height,
            Paint::Solid(color),
        )));
    }

    /// Markings, tick lines and the border, in that order.
    fn push_grid(&self, frame: &mut RenderFrame) {
        let grid = &self.options.grid;
        let markings = collect_markings(grid, &self.axes);
        for marking in resolve_markings(&markings, grid, &self.axes) {
            match marking.shape {
                MarkingShape::Rect {
                    left,
                    top,
                    width,
                    height,
                } => {
                    let corner = self.to_canvas(PixelPoint::new(left, top));
                    frame.push(DrawCommand::Rect(RectPrimitive::filled(
                        corner.x,
                        corner.y,
                        width,
                        height,
                        Paint::Solid(marking.color),
                    )));
                }
                MarkingShape::Line { from, to, width } if width > 0.0 => {
                    let (from, to) = (self.to_canvas(from), self.to_canvas(to));
                    frame.push(DrawCommand::Line(LinePrimitive::new(
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        Stroke::new(marking.color, width),
                    )));
                }
                MarkingShape::Line { .. } => {}
            }
        }

        let stroke = Stroke::new(grid.resolved_tick_color(), GRID_LINE_WIDTH);
        let (width, height) = (self.layout.plot_width, self.layout.plot_height);
        for id in AxisId::ALL {
            let axis = &self.axes[id];
            for tick in &axis.ticks {
                if tick.value <= axis.min || tick.value >= axis.max {
                    continue;
                }
                let pixel = axis.p2c(tick.value).floor() + GRID_LINE_WIDTH / 2.0;
                let (from, to) = match id {
                    AxisId::X => (PixelPoint::new(pixel, 0.0), PixelPoint::new(pixel, height)),
                    AxisId::Y => (PixelPoint::new(0.0, pixel), PixelPoint::new(width, pixel)),
                    AxisId::X2 => (
                        PixelPoint::new(pixel, -SECONDARY_TICK_PX),
                        PixelPoint::new(pixel, SECONDARY_TICK_PX),
                    ),
                    AxisId::Y2 => (
                        PixelPoint::new(width - SECONDARY_TICK_PX, pixel),
                        PixelPoint::new(width + SECONDARY_TICK_PX, pixel),
                    ),
                };
                let (from, to) = (self.to_canvas(from), self.to_canvas(to));
                frame.push(DrawCommand::Line(LinePrimitive::new(
                    from.x, from.y, to.x, to.y, stroke,
                )));
            }
        }

        let border = grid.border_width;
        if border > 0.0 {
            let corner = self.to_canvas(PixelPoint::new(-border / 2.0, -border / 2.0));
            frame.push(DrawCommand::Rect(RectPrimitive::stroked(
                corner.x,
                corner.y,
                width + border,
                height + border,
                Stroke::new(grid.resolved_border_color(), border),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fill_paint;
    use crate::config::{FillColor, FillOption, GradientStop};
    use crate::core::Color;
    use crate::render::Paint;

    #[test]
    fn fill_defaults_to_translucent_series_color() {
        let color = Color::rgb(10, 20, 30);
        let paint = fill_paint(FillOption::Flag(true), None, color, 0.0, 1.0);
        assert_eq!(paint, Some(Paint::Solid(color.with_alpha(0.4))));
        assert_eq!(fill_paint(FillOption::Flag(false), None, color, 0.0, 1.0), None);
    }

    #[test]
    fn gradient_stops_resolve_against_series_color() {
        let color = Color::rgb(200, 100, 50);
        let gradient = FillColor::Gradient {
            colors: vec![
                GradientStop::Relative {
                    opacity: Some(0.5),
                    brightness: None,
                },
                GradientStop::Color(Color::BLACK),
            ],
        };
        let paint = fill_paint(FillOption::Opacity(0.8), Some(&gradient), color, 100.0, 0.0);
        assert_eq!(
            paint,
            Some(Paint::VerticalGradient {
                y0: 100.0,
                y1: 0.0,
                stops: vec![color.with_alpha(0.5), Color::BLACK],
            })
        );
    }
}
