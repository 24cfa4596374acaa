use crate::core::{Axis, DatapointBuffer, PixelPoint};

/// Baseline the area is filled down to: zero clamped into the visible y range.
#[must_use]
pub fn area_bottom(yaxis: &Axis) -> f64 {
    0.0_f64.max(yaxis.min).min(yaxis.max)
}

struct AreaBuilder<'a> {
    xaxis: &'a Axis,
    yaxis: &'a Axis,
    bottom: f64,
    polygons: Vec<Vec<PixelPoint>>,
    open: Option<Vec<PixelPoint>>,
    last_x: f64,
}

impl AreaBuilder<'_> {
    fn vertex(&mut self, x: f64, y: f64) {
        let point = PixelPoint::new(self.xaxis.p2c(x), self.yaxis.p2c(y));
        if let Some(polygon) = self.open.as_mut() {
            polygon.push(point);
        }
    }

    fn open_at(&mut self, x: f64) {
        if self.open.is_none() {
            self.open = Some(Vec::new());
            self.vertex(x, self.bottom);
        }
    }

    fn close(&mut self) {
        if self.open.is_none() {
            return;
        }
        self.vertex(self.last_x, self.bottom);
        if let Some(polygon) = self.open.take() {
            if polygon.len() >= 3 {
                self.polygons.push(polygon);
            }
        }
    }
}

/// Builds sealed fill polygons for an area under a line series.
///
/// Segments are first clipped in x. Segments entirely above `ymax` or below
/// `ymin` run along that bound. A segment crossing a bound contributes the
/// flat rectangle outside the window plus the visible triangle, so the
/// polygon stays closed along the clip edge. Gaps close the open polygon.
#[must_use]
pub fn project_area_polygons(
    buffer: &DatapointBuffer,
    xaxis: &Axis,
    yaxis: &Axis,
) -> Vec<Vec<PixelPoint>> {
    let (xmin, xmax, ymin, ymax) = (xaxis.min, xaxis.max, yaxis.min, yaxis.max);
    let mut builder = AreaBuilder {
        xaxis,
        yaxis,
        bottom: area_bottom(yaxis),
        polygons: Vec::new(),
        open: None,
        last_x: 0.0,
    };

    let points: Vec<Option<(f64, f64)>> = buffer
        .iter()
        .map(|slots| match (slots[0], slots[1]) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();

    for pair in points.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if builder.open.is_some() && first.is_some() && second.is_none() {
            builder.close();
            continue;
        }
        let (Some((mut x1, mut y1)), Some((mut x2, mut y2))) = (first, second) else {
            continue;
        };

        if x1 <= x2 && x1 < xmin {
            if x2 < xmin {
                continue;
            }
            y1 = (xmin - x1) / (x2 - x1) * (y2 - y1) + y1;
            x1 = xmin;
        } else if x2 <= x1 && x2 < xmin {
            if x1 < xmin {
                continue;
            }
            y2 = (xmin - x1) / (x2 - x1) * (y2 - y1) + y1;
            x2 = xmin;
        }

        if x1 >= x2 && x1 > xmax {
            if x2 > xmax {
                continue;
            }
            y1 = (xmax - x1) / (x2 - x1) * (y2 - y1) + y1;
            x1 = xmax;
        } else if x2 >= x1 && x2 > xmax {
            if x1 > xmax {
                continue;
            }
            y2 = (xmax - x1) / (x2 - x1) * (y2 - y1) + y1;
            x2 = xmax;
        }

        builder.open_at(x1);

        if y1 >= ymax && y2 >= ymax {
            builder.vertex(x1, ymax);
            builder.vertex(x2, ymax);
            builder.last_x = x2;
            continue;
        }
        if y1 <= ymin && y2 <= ymin {
            builder.vertex(x1, ymin);
            builder.vertex(x2, ymin);
            builder.last_x = x2;
            continue;
        }

        let (x1_unclipped, x2_unclipped) = (x1, x2);

        if y1 <= y2 && y1 < ymin && y2 >= ymin {
            x1 = (ymin - y1) / (y2 - y1) * (x2 - x1) + x1;
            y1 = ymin;
        } else if y2 <= y1 && y2 < ymin && y1 >= ymin {
            x2 = (ymin - y1) / (y2 - y1) * (x2 - x1) + x1;
            y2 = ymin;
        }

        if y1 >= y2 && y1 > ymax && y2 <= ymax {
            x1 = (ymax - y1) / (y2 - y1) * (x2 - x1) + x1;
            y1 = ymax;
        } else if y2 >= y1 && y2 > ymax && y1 <= ymax {
            x2 = (ymax - y1) / (y2 - y1) * (x2 - x1) + x1;
            y2 = ymax;
        }

        if x1 != x1_unclipped {
            let top = if y1 <= ymin { ymin } else { ymax };
            builder.vertex(x1_unclipped, top);
            builder.vertex(x1, top);
        }

        builder.vertex(x1, y1);
        builder.vertex(x2, y2);

        if x2 != x2_unclipped {
            let top = if y2 <= ymin { ymin } else { ymax };
            builder.vertex(x2, top);
            builder.vertex(x2_unclipped, top);
        }

        builder.last_x = x2.max(x2_unclipped);
    }

    builder.close();
    builder.polygons
}

#[cfg(test)]
mod tests {
    use super::area_bottom;
    use crate::config::AxisOptions;
    use crate::core::{Axis, AxisId};

    #[test]
    fn bottom_is_zero_clamped_into_range() {
        let mut axis = Axis::new(AxisId::Y, AxisOptions::default());
        axis.min = 2.0;
        axis.max = 8.0;
        assert_eq!(area_bottom(&axis), 2.0);
        axis.min = -4.0;
        assert_eq!(area_bottom(&axis), 0.0);
        axis.max = -1.0;
        assert_eq!(area_bottom(&axis), -1.0);
    }
}
