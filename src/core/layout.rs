use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GridOptions;
use crate::core::{Axes, Axis, AxisId, PlotOffset, Series, Viewport};

/// Measured box of a piece of text in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Glyph advance relative to font size used by the estimating measurer.
pub const ESTIMATED_CHAR_WIDTH_RATIO: f64 = 0.6;
pub const ESTIMATED_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Text measurement seam between layout and a rendering backend.
pub trait TextMeasurer {
    /// Measures `text` at `font_size`, wrapping into `max_width` when given.
    fn measure_text(&self, text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent {
        estimate_text_extent(text, font_size, max_width)
    }
}

/// Backend-free measurer with fixed per-glyph metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {}

/// Monospace-style estimate: each char is `0.6·font` wide, each line `1.2·font` tall.
#[must_use]
pub fn estimate_text_extent(text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent {
    let char_width = font_size * ESTIMATED_CHAR_WIDTH_RATIO;
    let line_height = font_size * ESTIMATED_LINE_HEIGHT_RATIO;
    let wrap = max_width.filter(|width| width.is_finite() && *width > 0.0);

    let mut width: f64 = 0.0;
    let mut lines = 0.0;
    for line in text.split('\n') {
        let line_width = line.chars().count() as f64 * char_width;
        match wrap {
            Some(limit) if line_width > limit => {
                lines += (line_width / limit).ceil();
                width = width.max(limit);
            }
            _ => {
                lines += 1.0;
                width = width.max(line_width);
            }
        }
    }

    TextExtent {
        width,
        height: lines * line_height,
    }
}

/// Margins and plot-area size for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotLayout {
    pub offset: PlotOffset,
    pub plot_width: f64,
    pub plot_height: f64,
}

/// Sets the label box of one axis from options or measured tick labels.
pub fn measure_axis_labels(axis: &mut Axis, viewport: Viewport, font_size: f64, measurer: &dyn TextMeasurer) {
    let labels = axis.ticks.iter().map(|tick| tick.label.as_str()).filter(|label| !label.is_empty());

    if axis.is_horizontal() {
        let width = axis
            .options
            .label_width
            .unwrap_or_else(|| f64::from(viewport.width) / 6.0);
        let height = axis.options.label_height.unwrap_or_else(|| {
            labels
                .map(|label| measurer.measure_text(label, font_size, Some(width)).height)
                .fold(0.0, f64::max)
        });
        axis.label_width = width;
        axis.label_height = height;
    } else {
        let measured: Vec<TextExtent> = match (axis.options.label_width, axis.options.label_height) {
            (Some(_), Some(_)) => Vec::new(),
            _ => labels.map(|label| measurer.measure_text(label, font_size, None)).collect(),
        };
        axis.label_width = axis
            .options
            .label_width
            .unwrap_or_else(|| measured.iter().map(|extent| extent.width).fold(0.0, f64::max));
        axis.label_height = axis
            .options
            .label_height
            .unwrap_or_else(|| measured.iter().map(|extent| extent.height).fold(0.0, f64::max));
    }
}

/// Space point markers and the border need around the plot area.
///
/// Every series reserves twice its marker extent, shown or not.
#[must_use]
pub fn max_outset(series: &[Series], grid: &GridOptions) -> f64 {
    series
        .iter()
        .map(|series| 2.0 * (series.points.radius + series.points.line_width / 2.0))
        .fold(grid.border_width, f64::max)
}

/// Measures tick labels, derives margins and sets every axis scale.
///
/// Only reads ticks and options, so repeated passes over unchanged inputs
/// produce identical results.
pub fn compute_layout(
    axes: &mut Axes,
    series: &[Series],
    grid: &GridOptions,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> PlotLayout {
    for axis in axes.iter_mut() {
        measure_axis_labels(axis, viewport, grid.label_font_size, measurer);
    }

    let outset = max_outset(series, grid);
    let margin = grid.label_margin + grid.border_width;
    let mut offset = PlotOffset::uniform(outset);

    let side = |extent: f64| if extent > 0.0 { outset.max(extent + margin) } else { outset };
    offset.bottom = side(axes[AxisId::X].label_height);
    offset.left = side(axes[AxisId::Y].label_width);
    offset.top = side(axes[AxisId::X2].label_height);
    offset.right = side(axes[AxisId::Y2].label_width);

    let mut plot_width = f64::from(viewport.width) - offset.left - offset.right;
    let mut plot_height = f64::from(viewport.height) - offset.top - offset.bottom;
    if plot_width < 1.0 || plot_height < 1.0 {
        warn!(plot_width, plot_height, "plot area smaller than one pixel, clamping");
        plot_width = plot_width.max(1.0);
        plot_height = plot_height.max(1.0);
    }

    for axis in axes.iter_mut() {
        let extent = if axis.is_horizontal() { plot_width } else { plot_height };
        axis.scale = extent / (axis.max - axis.min);
    }

    debug!(
        top = offset.top,
        left = offset.left,
        right = offset.right,
        bottom = offset.bottom,
        plot_width,
        plot_height,
        "layout computed"
    );

    PlotLayout {
        offset,
        plot_width,
        plot_height,
    }
}

#[cfg(test)]
mod tests {
    use super::estimate_text_extent;

    #[test]
    fn estimate_wraps_into_max_width() {
        let single = estimate_text_extent("abcd", 10.0, None);
        assert_eq!(single.width, 24.0);
        assert_eq!(single.height, 12.0);

        let wrapped = estimate_text_extent("abcd", 10.0, Some(12.0));
        assert_eq!(wrapped.width, 12.0);
        assert_eq!(wrapped.height, 24.0);
    }
}
