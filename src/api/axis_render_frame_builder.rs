use crate::core::AxisId;
use crate::render::{DrawCommand, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Tick labels around the plot area. Labels outside the axis range are skipped.
    pub(super) fn push_tick_labels(&self, frame: &mut RenderFrame) {
        let grid = &self.options.grid;
        let offset = self.layout.offset;
        let margin = grid.label_margin + grid.border_width;
        let (plot_width, plot_height) = (self.layout.plot_width, self.layout.plot_height);

        for id in AxisId::ALL {
            let axis = &self.axes[id];
            for tick in &axis.ticks {
                if tick.label.is_empty() || tick.value < axis.min || tick.value > axis.max {
                    continue;
                }
                let pixel = axis.p2c(tick.value);
                let text = |x: f64, y: f64, align: TextHAlign| {
                    TextPrimitive::new(
                        tick.label.clone(),
                        x,
                        y,
                        grid.label_font_size,
                        grid.color,
                        align,
                    )
                };
                let label = match id {
                    AxisId::X => text(
                        offset.left + pixel,
                        offset.top + plot_height + margin,
                        TextHAlign::Center,
                    )
                    .with_max_width(axis.label_width),
                    AxisId::X2 => text(
                        offset.left + pixel,
                        offset.top - margin - axis.label_height,
                        TextHAlign::Center,
                    )
                    .with_max_width(axis.label_width),
                    AxisId::Y => text(
                        offset.left - margin,
                        (offset.top + pixel - axis.label_height / 2.0).round(),
                        TextHAlign::Right,
                    ),
                    AxisId::Y2 => text(
                        offset.left + plot_width + margin,
                        (offset.top + pixel - axis.label_height / 2.0).round(),
                        TextHAlign::Left,
                    ),
                };
                frame.push(DrawCommand::Text(label));
            }
        }
    }
}
