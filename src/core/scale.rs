use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Direction in which pixel coordinates grow relative to data values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    /// Left to right: `min` maps to pixel 0.
    Forward,
    /// Top to bottom: `max` maps to pixel 0.
    Inverted,
}

/// Linear data-to-pixel mapping of one axis over the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    min: f64,
    max: f64,
    scale: f64,
    direction: AxisDirection,
}

impl AxisTransform {
    pub fn new(min: f64, max: f64, extent_px: f64, direction: AxisDirection) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PlotError::InvalidData(format!(
                "axis range must be finite with min < max (got {min}..{max})"
            )));
        }
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "axis pixel extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            min,
            max,
            scale: extent_px / (max - min),
            direction,
        })
    }

    #[must_use]
    pub fn from_parts(min: f64, max: f64, scale: f64, direction: AxisDirection) -> Self {
        Self {
            min,
            max,
            scale,
            direction,
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Pixels per data unit.
    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Data value to plot-area pixel.
    #[must_use]
    pub fn p2c(self, value: f64) -> f64 {
        match self.direction {
            AxisDirection::Forward => (value - self.min) * self.scale,
            AxisDirection::Inverted => (self.max - value) * self.scale,
        }
    }

    /// Plot-area pixel to data value.
    #[must_use]
    pub fn c2p(self, pixel: f64) -> f64 {
        match self.direction {
            AxisDirection::Forward => self.min + pixel / self.scale,
            AxisDirection::Inverted => self.max - pixel / self.scale,
        }
    }
}
