use crate::config::{GridOptions, Marking, MarkingRange, MarkingsContext};
use crate::core::{Axes, AxisId, Color, PixelPoint};

/// A marking after clipping and projection into plot pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkingShape {
    Rect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    Line {
        from: PixelPoint,
        to: PixelPoint,
        width: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMarking {
    pub shape: MarkingShape,
    pub color: Color,
}

/// Axis ranges handed to a markings generator.
#[must_use]
pub fn markings_context(axes: &Axes) -> MarkingsContext {
    let x = axes[AxisId::X].range();
    let y = axes[AxisId::Y].range();
    MarkingsContext {
        xmin: x.from,
        xmax: x.to,
        ymin: y.from,
        ymax: y.to,
        xaxis: x,
        yaxis: y,
        x2axis: axes[AxisId::X2].range(),
        y2axis: axes[AxisId::Y2].range(),
    }
}

/// Markings from the generator when configured, else the static list.
#[must_use]
pub fn collect_markings(grid: &GridOptions, axes: &Axes) -> Vec<Marking> {
    if let Some(generator) = &grid.markings_generator {
        return generator.get()(&markings_context(axes));
    }
    grid.markings.clone().unwrap_or_default()
}

/// Picks the primary range when set, else the secondary; reversed bounds are swapped.
fn extract_range(
    primary: Option<MarkingRange>,
    secondary: Option<MarkingRange>,
    primary_axis: AxisId,
    secondary_axis: AxisId,
) -> (AxisId, Option<f64>, Option<f64>) {
    let (axis, range) = match (primary, secondary) {
        (Some(range), _) => (primary_axis, range),
        (None, Some(range)) => (secondary_axis, range),
        (None, None) => (primary_axis, MarkingRange::default()),
    };
    match (range.from, range.to) {
        (Some(from), Some(to)) if from > to => (axis, Some(to), Some(from)),
        (from, to) => (axis, from, to),
    }
}

/// Clips and projects markings; zero-area markings are skipped and markings
/// that collapse to a pixel line in one direction are drawn as lines.
#[must_use]
pub fn resolve_markings(markings: &[Marking], grid: &GridOptions, axes: &Axes) -> Vec<ResolvedMarking> {
    let mut resolved = Vec::with_capacity(markings.len());
    for marking in markings {
        let (x_id, x_from, x_to) = extract_range(marking.xaxis, marking.x2axis, AxisId::X, AxisId::X2);
        let (y_id, y_from, y_to) = extract_range(marking.yaxis, marking.y2axis, AxisId::Y, AxisId::Y2);
        let (xaxis, yaxis) = (&axes[x_id], &axes[y_id]);

        let mut x_from = x_from.unwrap_or(xaxis.min);
        let mut x_to = x_to.unwrap_or(xaxis.max);
        let mut y_from = y_from.unwrap_or(yaxis.min);
        let mut y_to = y_to.unwrap_or(yaxis.max);

        if x_to < xaxis.min || x_from > xaxis.max || y_to < yaxis.min || y_from > yaxis.max {
            continue;
        }
        x_from = x_from.max(xaxis.min);
        x_to = x_to.min(xaxis.max);
        y_from = y_from.max(yaxis.min);
        y_to = y_to.min(yaxis.max);

        if x_from == x_to && y_from == y_to {
            continue;
        }

        let (px_from, px_to) = (xaxis.p2c(x_from), xaxis.p2c(x_to));
        let (py_from, py_to) = (yaxis.p2c(y_from), yaxis.p2c(y_to));
        let color = marking.color.unwrap_or(grid.markings_color);

        let shape = if px_from == px_to || py_from == py_to {
            MarkingShape::Line {
                from: PixelPoint::new(px_from, py_from),
                to: PixelPoint::new(px_to, py_to),
                width: marking
                    .line_width
                    .filter(|width| *width > 0.0)
                    .unwrap_or(grid.markings_line_width),
            }
        } else {
            MarkingShape::Rect {
                left: px_from,
                top: py_to,
                width: px_to - px_from,
                height: py_from - py_to,
            }
        };
        resolved.push(ResolvedMarking { shape, color });
    }
    resolved
}
