use serde::{Deserialize, Serialize};

use crate::config::BarsOptions;
use crate::core::{Axis, DatapointBuffer, PixelPoint};

/// Which outline edges of a bar are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BarEdges {
    #[must_use]
    pub fn any(self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Bar rectangle in data space with `left <= right` and `bottom <= top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarExtent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub edges: BarEdges,
}

/// Computes the data-space rectangle of one bar.
///
/// Vertical bars span `x + bar_left .. x + bar_right` from the baseline up to
/// `y`; the side facing the baseline is not stroked. Negative bars swap their
/// ends and move the unstroked edge with them. Horizontal bars do the same
/// along x.
#[must_use]
pub fn bar_extent(x: f64, y: f64, baseline: f64, bar_left: f64, bar_right: f64, horizontal: bool) -> BarExtent {
    if horizontal {
        let mut edges = BarEdges {
            left: false,
            right: true,
            top: true,
            bottom: true,
        };
        let (mut left, mut right) = (baseline, x);
        if right < left {
            std::mem::swap(&mut left, &mut right);
            edges.left = true;
            edges.right = false;
        }
        BarExtent {
            left,
            right,
            bottom: y + bar_left,
            top: y + bar_right,
            edges,
        }
    } else {
        let mut edges = BarEdges {
            left: true,
            right: true,
            top: true,
            bottom: false,
        };
        let (mut bottom, mut top) = (baseline, y);
        if top < bottom {
            std::mem::swap(&mut bottom, &mut top);
            edges.bottom = true;
            edges.top = false;
        }
        BarExtent {
            left: x + bar_left,
            right: x + bar_right,
            bottom,
            top,
            edges,
        }
    }
}

/// Clips a bar to the axes; edges cut by a bound stop being stroked.
///
/// Returns `None` when the bar lies entirely outside.
#[must_use]
pub fn clip_bar(mut bar: BarExtent, xaxis: &Axis, yaxis: &Axis) -> Option<BarExtent> {
    if bar.right < xaxis.min || bar.left > xaxis.max || bar.top < yaxis.min || bar.bottom > yaxis.max {
        return None;
    }
    if bar.left < xaxis.min {
        bar.left = xaxis.min;
        bar.edges.left = false;
    }
    if bar.right > xaxis.max {
        bar.right = xaxis.max;
        bar.edges.right = false;
    }
    if bar.bottom < yaxis.min {
        bar.bottom = yaxis.min;
        bar.edges.bottom = false;
    }
    if bar.top > yaxis.max {
        bar.top = yaxis.max;
        bar.edges.top = false;
    }
    Some(bar)
}

/// Projected bar ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub point_index: usize,
    pub extent: BarExtent,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BarGeometry {
    /// Fill outline in pixels, counter-clockwise from bottom-left.
    #[must_use]
    pub fn corners(&self) -> [PixelPoint; 4] {
        [
            PixelPoint::new(self.left, self.bottom),
            PixelPoint::new(self.left, self.top),
            PixelPoint::new(self.right, self.top),
            PixelPoint::new(self.right, self.bottom),
        ]
    }

    /// Polylines tracing the stroked edges, shifted vertically by `offset`.
    ///
    /// Edges are walked left, top, right, bottom; consecutive stroked edges
    /// join into one run.
    #[must_use]
    pub fn outline_runs(&self, offset: f64) -> Vec<Vec<PixelPoint>> {
        let corners = self.corners().map(|corner| corner.translated(0.0, offset));
        let edges = self.extent.edges;
        let drawn = [edges.left, edges.top, edges.right, edges.bottom];

        let mut runs: Vec<Vec<PixelPoint>> = Vec::new();
        let mut current: Vec<PixelPoint> = Vec::new();
        for (index, stroked) in drawn.into_iter().enumerate() {
            let start = corners[index];
            let end = corners[(index + 1) % 4];
            if stroked {
                if current.is_empty() {
                    current.push(start);
                }
                current.push(end);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Projects every visible bar of a series.
#[must_use]
pub fn project_bars(
    buffer: &DatapointBuffer,
    options: &BarsOptions,
    xaxis: &Axis,
    yaxis: &Axis,
) -> Vec<BarGeometry> {
    let (bar_left, bar_right) = (options.bar_left(), options.bar_right());
    buffer
        .present()
        .filter_map(|(point_index, x, y, baseline)| {
            let extent = bar_extent(x, y, baseline.unwrap_or(0.0), bar_left, bar_right, options.horizontal);
            let extent = clip_bar(extent, xaxis, yaxis)?;
            Some(BarGeometry {
                point_index,
                extent,
                left: xaxis.p2c(extent.left),
                right: xaxis.p2c(extent.right),
                top: yaxis.p2c(extent.top),
                bottom: yaxis.p2c(extent.bottom),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{bar_extent, BarEdges, BarExtent, BarGeometry};

    #[test]
    fn negative_vertical_bar_strokes_its_bottom() {
        let bar = bar_extent(1.0, -3.0, 0.0, 0.0, 1.0, false);
        assert_eq!(bar.bottom, -3.0);
        assert_eq!(bar.top, 0.0);
        assert!(bar.edges.bottom);
        assert!(!bar.edges.top);
    }

    #[test]
    fn outline_skips_unstroked_edges() {
        let geometry = BarGeometry {
            point_index: 0,
            extent: BarExtent {
                left: 0.0,
                right: 1.0,
                bottom: 0.0,
                top: 1.0,
                edges: BarEdges {
                    left: true,
                    right: true,
                    top: true,
                    bottom: false,
                },
            },
            left: 0.0,
            right: 10.0,
            top: 0.0,
            bottom: 20.0,
        };
        let runs = geometry.outline_runs(0.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 4);
    }
}
