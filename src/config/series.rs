use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Fill switch: `false`, `true` (default opacity) or an explicit opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillOption {
    Flag(bool),
    Opacity(f64),
}

impl FillOption {
    pub const DEFAULT_OPACITY: f64 = 0.4;

    /// Opacity to fill with, or `None` when filling is off.
    #[must_use]
    pub fn opacity(self) -> Option<f64> {
        match self {
            FillOption::Flag(true) => Some(Self::DEFAULT_OPACITY),
            FillOption::Flag(false) => None,
            FillOption::Opacity(value) if value.is_finite() && value != 0.0 => Some(value),
            FillOption::Opacity(_) => None,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.opacity().is_some()
    }
}

impl Default for FillOption {
    fn default() -> Self {
        FillOption::Flag(false)
    }
}

/// One gradient stop: an absolute color or a variation of the series color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientStop {
    Color(Color),
    Relative {
        #[serde(default)]
        opacity: Option<f64>,
        #[serde(default)]
        brightness: Option<f64>,
    },
}

impl GradientStop {
    #[must_use]
    pub fn resolve(self, series_color: Color) -> Color {
        match self {
            GradientStop::Color(color) => color,
            GradientStop::Relative {
                opacity,
                brightness,
            } => series_color.scale(brightness, brightness, brightness, opacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillColor {
    Solid(Color),
    Gradient { colors: Vec<GradientStop> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinesOptions {
    /// `None` lets the normalizer turn lines on when nothing else is shown.
    pub show: Option<bool>,
    pub line_width: f64,
    pub fill: FillOption,
    pub fill_color: Option<FillColor>,
    pub steps: bool,
}

impl LinesOptions {
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.show.unwrap_or(false)
    }
}

impl Default for LinesOptions {
    fn default() -> Self {
        Self {
            show: None,
            line_width: 2.0,
            fill: FillOption::Flag(false),
            fill_color: None,
            steps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointsOptions {
    pub show: bool,
    pub radius: f64,
    pub line_width: f64,
    pub fill: FillOption,
    pub fill_color: Option<FillColor>,
}

impl Default for PointsOptions {
    fn default() -> Self {
        Self {
            show: false,
            radius: 3.0,
            line_width: 2.0,
            fill: FillOption::Flag(true),
            fill_color: Some(FillColor::Solid(Color::WHITE)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarsOptions {
    pub show: bool,
    pub line_width: f64,
    pub bar_width: f64,
    pub fill: FillOption,
    pub fill_color: Option<FillColor>,
    pub align: BarAlign,
    pub horizontal: bool,
}

impl BarsOptions {
    /// Offset of the bar's leading edge from its position value.
    #[must_use]
    pub fn bar_left(&self) -> f64 {
        match self.align {
            BarAlign::Left => 0.0,
            BarAlign::Center => -self.bar_width / 2.0,
        }
    }

    #[must_use]
    pub fn bar_right(&self) -> f64 {
        self.bar_left() + self.bar_width
    }
}

impl Default for BarsOptions {
    fn default() -> Self {
        Self {
            show: false,
            line_width: 2.0,
            bar_width: 1.0,
            fill: FillOption::Flag(true),
            fill_color: None,
            align: BarAlign::Left,
            horizontal: false,
        }
    }
}

/// Per-series style defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesOptions {
    pub lines: LinesOptions,
    pub points: PointsOptions,
    pub bars: BarsOptions,
    pub shadow_size: f64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            lines: LinesOptions::default(),
            points: PointsOptions::default(),
            bars: BarsOptions::default(),
            shadow_size: 3.0,
        }
    }
}

/// Series color: explicit, or an index into the generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Index(usize),
    Color(Color),
}
