use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlotError, PlotResult};

/// RGBA color with 8-bit RGB channels and a 0..=1 alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Parses CSS-like color notation.
    pub fn parse(input: &str) -> PlotResult<Self> {
        let text = input.trim().to_ascii_lowercase();

        if let Some(args) = text
            .strip_prefix("rgba(")
            .or_else(|| text.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, input);
        }

        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex, input);
        }

        if text == "transparent" {
            return Ok(Self::rgba(255, 255, 255, 0.0));
        }

        named_color(&text)
            .map(|(r, g, b)| Self::rgb(r, g, b))
            .ok_or_else(|| PlotError::InvalidColor(format!("unrecognized color `{input}`")))
    }

    /// Multiplies each provided channel, then normalizes.
    #[must_use]
    pub fn scale(self, r: Option<f64>, g: Option<f64>, b: Option<f64>, a: Option<f64>) -> Self {
        let channel = |value: u8, factor: Option<f64>| {
            factor.map_or(f64::from(value), |factor| f64::from(value) * factor)
        };
        Self::from_components(
            channel(self.r, r),
            channel(self.g, g),
            channel(self.b, b),
            a.map_or(self.a, |factor| self.a * factor),
        )
    }

    /// Adds each provided delta, then normalizes.
    #[must_use]
    pub fn adjust(self, r: Option<f64>, g: Option<f64>, b: Option<f64>, a: Option<f64>) -> Self {
        let channel =
            |value: u8, delta: Option<f64>| f64::from(value) + delta.unwrap_or_default();
        Self::from_components(
            channel(self.r, r),
            channel(self.g, g),
            channel(self.b, b),
            self.a + a.unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: clamp_alpha(alpha),
            ..self
        }
    }

    /// Builds a color from unbounded components.
    ///
    /// RGB components are truncated toward zero and clamped into `0..=255`.
    #[must_use]
    pub fn from_components(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_alpha(a),
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            self.a,
        )
    }
}

fn clamp_channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().clamp(0.0, 255.0) as u8
}

fn clamp_alpha(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn parse_functional(args: &str, original: &str) -> PlotResult<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(PlotError::InvalidColor(format!(
            "expected 3 or 4 components in `{original}`"
        )));
    }

    let mut rgb = [0.0; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = match part.strip_suffix('%') {
            Some(percent) => parse_component(percent, original)? * 255.0 / 100.0,
            None => parse_component(part, original)?,
        };
    }
    let alpha = match parts.get(3) {
        Some(part) => parse_component(part, original)?,
        None => 1.0,
    };

    Ok(Color::from_components(rgb[0], rgb[1], rgb[2], alpha))
}

fn parse_component(text: &str, original: &str) -> PlotResult<f64> {
    text.parse::<f64>()
        .map_err(|_| PlotError::InvalidColor(format!("bad component `{text}` in `{original}`")))
}

fn parse_hex(hex: &str, original: &str) -> PlotResult<Color> {
    let digit = |index: usize, width: usize| -> PlotResult<u8> {
        let slice = hex
            .get(index..index + width)
            .ok_or_else(|| PlotError::InvalidColor(format!("truncated hex color `{original}`")))?;
        let value = u8::from_str_radix(slice, 16)
            .map_err(|_| PlotError::InvalidColor(format!("bad hex digits in `{original}`")))?;
        Ok(if width == 1 { value * 17 } else { value })
    };

    match hex.len() {
        6 => Ok(Color::rgb(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        3 => Ok(Color::rgb(digit(0, 1)?, digit(1, 1)?, digit(2, 1)?)),
        _ => Err(PlotError::InvalidColor(format!(
            "hex color must have 3 or 6 digits: `{original}`"
        ))),
    }
}

fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name {
        "aqua" | "cyan" => (0, 255, 255),
        "azure" => (240, 255, 255),
        "beige" => (245, 245, 220),
        "black" => (0, 0, 0),
        "blue" => (0, 0, 255),
        "brown" => (165, 42, 42),
        "darkblue" => (0, 0, 139),
        "darkcyan" => (0, 139, 139),
        "darkgrey" | "darkgray" => (169, 169, 169),
        "darkgreen" => (0, 100, 0),
        "darkkhaki" => (189, 183, 107),
        "darkmagenta" => (139, 0, 139),
        "darkolivegreen" => (85, 107, 47),
        "darkorange" => (255, 140, 0),
        "darkorchid" => (153, 50, 204),
        "darkred" => (139, 0, 0),
        "darksalmon" => (233, 150, 122),
        "darkviolet" => (148, 0, 211),
        "fuchsia" | "magenta" => (255, 0, 255),
        "gold" => (255, 215, 0),
        "green" => (0, 128, 0),
        "grey" | "gray" => (128, 128, 128),
        "indigo" => (75, 0, 130),
        "khaki" => (240, 230, 140),
        "lightblue" => (173, 216, 230),
        "lightcyan" => (224, 255, 255),
        "lightgreen" => (144, 238, 144),
        "lightgrey" | "lightgray" => (211, 211, 211),
        "lightpink" => (255, 182, 193),
        "lightyellow" => (255, 255, 224),
        "lime" => (0, 255, 0),
        "maroon" => (128, 0, 0),
        "navy" => (0, 0, 128),
        "olive" => (128, 128, 0),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "purple" => (128, 0, 128),
        "violet" => (238, 130, 238),
        "red" => (255, 0, 0),
        "silver" => (192, 192, 192),
        "white" => (255, 255, 255),
        "yellow" => (255, 255, 0),
        _ => return None,
    };
    Some(rgb)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn short_hex_expands_each_digit() {
        assert_eq!(Color::parse("#fa0").expect("hex"), Color::rgb(255, 170, 0));
    }

    #[test]
    fn percent_components_scale_to_255() {
        let color = Color::parse("rgb(100%, 50%, 0%)").expect("percent");
        assert_eq!((color.r, color.g, color.b), (255, 127, 0));
    }

    #[test]
    fn display_drops_alpha_when_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::rgba(1, 2, 3, 0.5).to_string(), "rgba(1,2,3,0.5)");
    }
}
