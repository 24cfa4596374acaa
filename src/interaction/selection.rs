use serde::{Deserialize, Serialize};

use crate::config::SelectionMode;
use crate::core::{AxisRange, PixelPoint};

/// Minimum extent in both directions for a drag to count as a selection.
pub const MIN_SELECTION_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionCorner {
    First,
    Second,
}

/// Selected data ranges per used axis, each with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRanges {
    pub xaxis: Option<AxisRange>,
    pub yaxis: Option<AxisRange>,
    pub x2axis: Option<AxisRange>,
    pub y2axis: Option<AxisRange>,
}

/// Rubber-band rectangle in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub first: PixelPoint,
    pub second: PixelPoint,
    /// Drawn on the overlay.
    pub show: bool,
    /// A drag is in progress.
    pub active: bool,
}

impl SelectionState {
    /// Places one corner, clamped to the plot area.
    ///
    /// Along a direction the mode does not select, the first corner snaps to
    /// the start and the second to the end so the band spans the whole area.
    pub fn set_corner(
        &mut self,
        corner: SelectionCorner,
        position: PixelPoint,
        mode: SelectionMode,
        plot_width: f64,
        plot_height: f64,
    ) {
        let mut x = position.x.clamp(0.0, plot_width.max(0.0));
        let mut y = position.y.clamp(0.0, plot_height.max(0.0));
        if !mode.spans_x() {
            x = match corner {
                SelectionCorner::First => 0.0,
                SelectionCorner::Second => plot_width,
            };
        }
        if !mode.spans_y() {
            y = match corner {
                SelectionCorner::First => 0.0,
                SelectionCorner::Second => plot_height,
            };
        }
        let point = PixelPoint::new(x, y);
        match corner {
            SelectionCorner::First => self.first = point,
            SelectionCorner::Second => self.second = point,
        }
    }

    /// Both dimensions reach [`MIN_SELECTION_PX`].
    #[must_use]
    pub fn is_sane(&self) -> bool {
        (self.second.x - self.first.x).abs() >= MIN_SELECTION_PX
            && (self.second.y - self.first.y).abs() >= MIN_SELECTION_PX
    }

    /// Normalized rectangle as `(x, y, width, height)`.
    #[must_use]
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        let x = self.first.x.min(self.second.x);
        let y = self.first.y.min(self.second.y);
        (
            x,
            y,
            (self.second.x - self.first.x).abs(),
            (self.second.y - self.first.y).abs(),
        )
    }
}
