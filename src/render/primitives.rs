use serde::{Deserialize, Serialize};

use crate::core::{Color, PixelPoint};
use crate::error::{PlotError, PlotResult};

fn finite(values: &[f64], what: &str) -> PlotResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::Renderer(format!("{what} coordinates must be finite")))
    }
}

fn valid_color(color: Color) -> PlotResult<()> {
    if color.a.is_finite() && (0.0..=1.0).contains(&color.a) {
        Ok(())
    } else {
        Err(PlotError::Renderer(format!("alpha of {color} must be in [0, 1]")))
    }
}

/// Fill source: a flat color or a top-to-bottom gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Stops are spread evenly from canvas row `y0` to `y1`.
    VerticalGradient { y0: f64, y1: f64, stops: Vec<Color> },
}

impl Paint {
    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Paint::Solid(color) => valid_color(*color),
            Paint::VerticalGradient { y0, y1, stops } => {
                finite(&[*y0, *y1], "gradient")?;
                if stops.is_empty() {
                    return Err(PlotError::Renderer("gradient needs at least one stop".to_owned()));
                }
                stops.iter().try_for_each(|stop| valid_color(*stop))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlotError::Renderer("stroke width must be finite and > 0".to_owned()));
        }
        valid_color(self.color)
    }
}

/// One straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Self { x1, y1, x2, y2, stroke }
    }

    pub fn validate(self) -> PlotResult<()> {
        finite(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        self.stroke.validate()
    }
}

/// Open polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub points: Vec<PixelPoint>,
    pub stroke: Stroke,
}

impl PathPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.points.len() < 2 {
            return Err(PlotError::Renderer("path needs at least two points".to_owned()));
        }
        for point in &self.points {
            finite(&[point.x, point.y], "path")?;
        }
        self.stroke.validate()
    }
}

/// Closed filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<PixelPoint>,
    pub paint: Paint,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.points.len() < 3 {
            return Err(PlotError::Renderer("polygon needs at least three points".to_owned()));
        }
        for point in &self.points {
            finite(&[point.x, point.y], "polygon")?;
        }
        self.paint.validate()
    }
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    #[must_use]
    pub fn filled(x: f64, y: f64, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Some(paint),
            stroke: None,
        }
    }

    #[must_use]
    pub fn stroked(x: f64, y: f64, width: f64, height: f64, stroke: Stroke) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        finite(&[self.x, self.y, self.width, self.height], "rect")?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PlotError::Renderer("rect size must be >= 0".to_owned()));
        }
        if let Some(paint) = &self.fill {
            paint.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Circular arc from `start_angle` to `end_angle` (radians, clockwise on screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
}

impl ArcPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        finite(
            &[self.center.x, self.center.y, self.radius, self.start_angle, self.end_angle],
            "arc",
        )?;
        if self.radius < 0.0 {
            return Err(PlotError::Renderer("arc radius must be >= 0".to_owned()));
        }
        if let Some(paint) = &self.fill {
            paint.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Label whose box top sits at `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Wrap width, when the label is boxed.
    pub max_width: Option<f64>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            max_width: None,
        }
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::Renderer("text primitive must not be empty".to_owned()));
        }
        finite(&[self.x, self.y], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::Renderer("font size must be finite and > 0".to_owned()));
        }
        valid_color(self.color)
    }
}
