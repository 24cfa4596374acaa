use crate::core::{Axis, DatapointBuffer, PixelPoint};

/// Point marker centre in plot pixels, tagged with its datapoint index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub point_index: usize,
    pub center: PixelPoint,
}

/// Projects the points that fall inside both axis ranges (bounds inclusive).
#[must_use]
pub fn project_points(
    buffer: &DatapointBuffer,
    xaxis: &Axis,
    yaxis: &Axis,
    y_offset: f64,
) -> Vec<PointMarker> {
    buffer
        .present()
        .filter(|&(_, x, y, _)| x >= xaxis.min && x <= xaxis.max && y >= yaxis.min && y <= yaxis.max)
        .map(|(point_index, x, y, _)| PointMarker {
            point_index,
            center: PixelPoint::new(xaxis.p2c(x), yaxis.p2c(y) + y_offset),
        })
        .collect()
}
