use crate::config::LegendPosition;
use crate::core::{Color, Series, TextExtent};
use crate::render::{
    DrawCommand, Paint, RectPrimitive, RenderFrame, Renderer, Stroke, TextHAlign, TextPrimitive,
};

use super::Plot;

/// Outer color box including its 1px border and 1px padding.
pub const LEGEND_SWATCH_WIDTH: f64 = 18.0;
pub const LEGEND_SWATCH_HEIGHT: f64 = 14.0;
const LEGEND_SWATCH_BORDER: f64 = 1.0;
const LEGEND_SWATCH_INSET: f64 = 2.0;
const LEGEND_LABEL_GAP: f64 = 4.0;
const LEGEND_COLUMN_GAP: f64 = 8.0;
const LEGEND_ROW_GAP: f64 = 2.0;

/// One legend row item with its measured label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub extent: TextExtent,
}

/// Entry cells arranged into a `columns`-wide grid, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendGrid {
    pub column_widths: Vec<f64>,
    pub row_height: f64,
    pub rows: usize,
    pub width: f64,
    pub height: f64,
}

impl LegendGrid {
    #[must_use]
    pub fn layout(entries: &[LegendEntry], columns: usize) -> Self {
        let columns = columns.clamp(1, entries.len().max(1));
        let rows = entries.len().div_ceil(columns);
        let mut column_widths = vec![0.0_f64; columns];
        let mut row_height = LEGEND_SWATCH_HEIGHT;
        for (index, entry) in entries.iter().enumerate() {
            let cell = LEGEND_SWATCH_WIDTH + LEGEND_LABEL_GAP + entry.extent.width;
            let column = &mut column_widths[index % columns];
            *column = column.max(cell);
            row_height = row_height.max(entry.extent.height);
        }

        let width = column_widths.iter().sum::<f64>()
            + LEGEND_COLUMN_GAP * columns.saturating_sub(1) as f64;
        let height = row_height * rows as f64 + LEGEND_ROW_GAP * rows.saturating_sub(1) as f64;
        Self {
            column_widths,
            row_height,
            rows,
            width,
            height,
        }
    }

    /// Top-left corner of the cell holding entry `index`, relative to the legend box.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> (f64, f64) {
        let columns = self.column_widths.len();
        let (row, column) = (index / columns, index % columns);
        let x = self.column_widths[..column].iter().sum::<f64>() + LEGEND_COLUMN_GAP * column as f64;
        let y = (self.row_height + LEGEND_ROW_GAP) * row as f64;
        (x, y)
    }
}

impl<R: Renderer> Plot<R> {
    /// Labeled series in draw order, with the label formatter applied.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let legend = &self.options.legend;
        let font_size = self.options.grid.label_font_size;
        self.series
            .iter()
            .filter_map(|series: &Series| {
                let label = series.label.as_deref().filter(|label| !label.is_empty())?;
                let label = match &legend.label_formatter {
                    Some(formatter) => (formatter.get())(label, series),
                    None => label.to_owned(),
                };
                if label.is_empty() {
                    return None;
                }
                let extent = self.renderer.measure_text(&label, font_size, None);
                Some(LegendEntry {
                    label,
                    color: series.color,
                    extent,
                })
            })
            .collect()
    }

    pub(super) fn push_legend(&self, frame: &mut RenderFrame) {
        let entries = self.legend_entries();
        if entries.is_empty() {
            return;
        }
        let legend = &self.options.legend;
        let grid = LegendGrid::layout(&entries, legend.no_columns);
        let offset = self.layout.offset;
        let (plot_width, plot_height) = (self.layout.plot_width, self.layout.plot_height);

        let left = match legend.position {
            LegendPosition::Nw | LegendPosition::Sw => offset.left + legend.margin,
            LegendPosition::Ne | LegendPosition::Se => {
                offset.left + plot_width - legend.margin - grid.width
            }
        };
        let top = match legend.position {
            LegendPosition::Ne | LegendPosition::Nw => offset.top + legend.margin,
            LegendPosition::Se | LegendPosition::Sw => {
                offset.top + plot_height - legend.margin - grid.height
            }
        };

        if legend.background_opacity != 0.0 {
            let color = legend
                .background_color
                .or(self.options.grid.background_color)
                .unwrap_or(Color::WHITE)
                .scale(None, None, None, Some(legend.background_opacity));
            frame.push(DrawCommand::Rect(RectPrimitive::filled(
                left,
                top,
                grid.width,
                grid.height,
                Paint::Solid(color),
            )));
        }

        let font_size = self.options.grid.label_font_size;
        for (index, entry) in entries.into_iter().enumerate() {
            let (cell_x, cell_y) = grid.cell_origin(index);
            let (x, y) = (left + cell_x, top + cell_y);
            let swatch_y = y + (grid.row_height - LEGEND_SWATCH_HEIGHT) / 2.0;

            let border = LEGEND_SWATCH_BORDER;
            frame.push(DrawCommand::Rect(RectPrimitive::stroked(
                x + border / 2.0,
                swatch_y + border / 2.0,
                LEGEND_SWATCH_WIDTH - border,
                LEGEND_SWATCH_HEIGHT - border,
                Stroke::new(legend.label_box_border_color, border),
            )));
            frame.push(DrawCommand::Rect(RectPrimitive::filled(
                x + LEGEND_SWATCH_INSET,
                swatch_y + LEGEND_SWATCH_INSET,
                LEGEND_SWATCH_WIDTH - 2.0 * LEGEND_SWATCH_INSET,
                LEGEND_SWATCH_HEIGHT - 2.0 * LEGEND_SWATCH_INSET,
                Paint::Solid(entry.color),
            )));
            frame.push(DrawCommand::Text(TextPrimitive::new(
                entry.label,
                x + LEGEND_SWATCH_WIDTH + LEGEND_LABEL_GAP,
                y + (grid.row_height - entry.extent.height) / 2.0,
                font_size,
                self.options.grid.color,
                TextHAlign::Left,
            )));
        }
    }
}
