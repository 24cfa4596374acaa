use crate::core::{Axis, DatapointBuffer, PixelPoint};

/// Clips the segment against `[xmin, xmax] × [ymin, ymax]` by linear interpolation.
///
/// Returns `None` when the segment lies entirely outside. Each side is tested
/// with a strict comparison, so endpoints exactly on a bound are kept.
#[must_use]
pub fn clip_segment(
    mut x1: f64,
    mut y1: f64,
    mut x2: f64,
    mut y2: f64,
    xaxis: &Axis,
    yaxis: &Axis,
) -> Option<(f64, f64, f64, f64)> {
    let (xmin, xmax, ymin, ymax) = (xaxis.min, xaxis.max, yaxis.min, yaxis.max);

    if y1 <= y2 && y1 < ymin {
        if y2 < ymin {
            return None;
        }
        x1 = (ymin - y1) / (y2 - y1) * (x2 - x1) + x1;
        y1 = ymin;
    } else if y2 <= y1 && y2 < ymin {
        if y1 < ymin {
            return None;
        }
        x2 = (ymin - y1) / (y2 - y1) * (x2 - x1) + x1;
        y2 = ymin;
    }

    if y1 >= y2 && y1 > ymax {
        if y2 > ymax {
            return None;
        }
        x1 = (ymax - y1) / (y2 - y1) * (x2 - x1) + x1;
        y1 = ymax;
    } else if y2 >= y1 && y2 > ymax {
        if y1 > ymax {
            return None;
        }
        x2 = (ymax - y1) / (y2 - y1) * (x2 - x1) + x1;
        y2 = ymax;
    }

    if x1 <= x2 && x1 < xmin {
        if x2 < xmin {
            return None;
        }
        y1 = (xmin - x1) / (x2 - x1) * (y2 - y1) + y1;
        x1 = xmin;
    } else if x2 <= x1 && x2 < xmin {
        if x1 < xmin {
            return None;
        }
        y2 = (xmin - x1) / (x2 - x1) * (y2 - y1) + y1;
        x2 = xmin;
    }

    if x1 >= x2 && x1 > xmax {
        if x2 > xmax {
            return None;
        }
        y1 = (xmax - x1) / (x2 - x1) * (y2 - y1) + y1;
        x1 = xmax;
    } else if x2 >= x1 && x2 > xmax {
        if x1 > xmax {
            return None;
        }
        y2 = (xmax - x1) / (x2 - x1) * (y2 - y1) + y1;
        x2 = xmax;
    }

    Some((x1, y1, x2, y2))
}

/// Clips and projects a datapoint buffer into pixel polylines.
///
/// A gap (null x or y) or a segment clipped away at its start begins a new
/// polyline. `x_offset`/`y_offset` shift every vertex, which is how shadow
/// passes are drawn.
#[must_use]
pub fn project_line_paths(
    buffer: &DatapointBuffer,
    xaxis: &Axis,
    yaxis: &Axis,
    x_offset: f64,
    y_offset: f64,
) -> Vec<Vec<PixelPoint>> {
    let mut paths: Vec<Vec<PixelPoint>> = Vec::new();
    let mut current: Vec<PixelPoint> = Vec::new();
    let mut previous_end: Option<(f64, f64)> = None;

    let project = |x: f64, y: f64| {
        PixelPoint::new(xaxis.p2c(x) + x_offset, yaxis.p2c(y) + y_offset)
    };

    let points: Vec<Option<(f64, f64)>> = buffer
        .iter()
        .map(|slots| match (slots[0], slots[1]) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();

    for pair in points.windows(2) {
        let (Some((x1, y1)), Some((x2, y2))) = (pair[0], pair[1]) else {
            continue;
        };
        let Some((x1, y1, x2, y2)) = clip_segment(x1, y1, x2, y2, xaxis, yaxis) else {
            continue;
        };

        if previous_end != Some((x1, y1)) {
            if current.len() > 1 {
                paths.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            current.push(project(x1, y1));
        }
        current.push(project(x2, y2));
        previous_end = Some((x2, y2));
    }

    if current.len() > 1 {
        paths.push(current);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::clip_segment;
    use crate::config::AxisOptions;
    use crate::core::{Axis, AxisId};

    fn axis(id: AxisId, min: f64, max: f64) -> Axis {
        let mut axis = Axis::new(id, AxisOptions::default());
        axis.min = min;
        axis.max = max;
        axis
    }

    #[test]
    fn segment_crossing_top_is_cut_at_the_bound() {
        let x = axis(AxisId::X, 0.0, 10.0);
        let y = axis(AxisId::Y, 0.0, 10.0);
        let clipped = clip_segment(0.0, 0.0, 10.0, 20.0, &x, &y).expect("visible");
        assert_eq!(clipped, (0.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn segment_fully_outside_is_dropped() {
        let x = axis(AxisId::X, 0.0, 10.0);
        let y = axis(AxisId::Y, 0.0, 10.0);
        assert!(clip_segment(-5.0, 1.0, -1.0, 2.0, &x, &y).is_none());
    }
}
