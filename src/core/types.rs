use serde::{Deserialize, Serialize};

/// Canvas size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One of the four logical axes a series can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
    X2,
    Y2,
}

impl AxisId {
    pub const ALL: [AxisId; 4] = [AxisId::X, AxisId::Y, AxisId::X2, AxisId::Y2];

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, AxisId::X | AxisId::X2)
    }

    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            AxisId::X => 0,
            AxisId::Y => 1,
            AxisId::X2 => 2,
            AxisId::Y2 => 3,
        }
    }

    /// Resolves a 1-based axis number (`1` primary, `2` secondary).
    #[must_use]
    pub fn horizontal(number: u8) -> Self {
        if number == 2 { AxisId::X2 } else { AxisId::X }
    }

    #[must_use]
    pub fn vertical(number: u8) -> Self {
        if number == 2 { AxisId::Y2 } else { AxisId::Y }
    }

    #[must_use]
    pub fn option_key(self) -> &'static str {
        match self {
            AxisId::X => "xaxis",
            AxisId::Y => "yaxis",
            AxisId::X2 => "x2axis",
            AxisId::Y2 => "y2axis",
        }
    }
}

/// Four plot margins in pixels, measured from the canvas edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotOffset {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotOffset {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            right: value,
            bottom: value,
        }
    }
}

/// Inclusive data-space interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub from: f64,
    pub to: f64,
}

impl AxisRange {
    /// Builds a range with `from <= to`.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }
}

/// Point in plot-area pixel space (origin at the plot area's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
