use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::config::{
    BarsOptions, LinesOptions, PlotOptions, PointsOptions, SeriesColor, SeriesOptions, deep_merge,
};
use crate::core::{AxisId, Color};
use crate::error::PlotResult;

/// One raw value of an input point.
///
/// Anything that does not coerce to a finite number becomes a gap.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Decimal(Decimal),
    /// Converted to UTC epoch milliseconds.
    Time(DateTime<Utc>),
    Null,
}

impl RawValue {
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(value) => *value,
            RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
            RawValue::Decimal(value) => value.to_f64()?,
            RawValue::Time(time) => time.timestamp_millis() as f64,
            RawValue::Null => return None,
        };
        // Infinity in input data is treated as a gap rather than an extent.
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Decimal(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        RawValue::Time(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(number) => number.as_f64().map_or(RawValue::Null, RawValue::Number),
            Value::String(text) => RawValue::Text(text),
            Value::Bool(flag) => RawValue::Number(if flag { 1.0 } else { 0.0 }),
            Value::Null | Value::Array(_) | Value::Object(_) => RawValue::Null,
        })
    }
}

/// Input point: `None` is an explicit gap.
pub type RawPoint = Option<Vec<RawValue>>;

/// Builds a plain `(x, y)` input point.
#[must_use]
pub fn xy(x: f64, y: f64) -> RawPoint {
    Some(vec![RawValue::Number(x), RawValue::Number(y)])
}

/// Series given as an object with data and per-series options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledSeries {
    #[serde(default)]
    pub data: Vec<RawPoint>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<SeriesColor>,
    #[serde(default)]
    pub xaxis: Option<u8>,
    #[serde(default)]
    pub yaxis: Option<u8>,
    #[serde(default)]
    pub clickable: Option<bool>,
    #[serde(default)]
    pub hoverable: Option<bool>,
    /// Style overrides (`lines`, `points`, `bars`, `shadowSize`) merged over the series defaults.
    #[serde(flatten)]
    pub overrides: Map<String, Value>,
}

impl LabeledSeries {
    #[must_use]
    pub fn new(data: Vec<RawPoint>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: SeriesColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, xaxis: u8, yaxis: u8) -> Self {
        self.xaxis = Some(xaxis);
        self.yaxis = Some(yaxis);
        self
    }

    /// Merges a JSON object of style overrides, e.g. `{"bars": {"show": true}}`.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Value) -> Self {
        if let Value::Object(map) = overrides {
            let mut current = Value::Object(std::mem::take(&mut self.overrides));
            deep_merge(&mut current, Value::Object(map));
            if let Value::Object(merged) = current {
                self.overrides = merged;
            }
        }
        self
    }
}

/// One input series: bare data or a labeled object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeriesInput {
    Bare(Vec<RawPoint>),
    Labeled(LabeledSeries),
}

impl SeriesInput {
    #[must_use]
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        SeriesInput::Bare(points.iter().map(|&(x, y)| xy(x, y)).collect())
    }

    #[must_use]
    pub fn data(&self) -> &[RawPoint] {
        match self {
            SeriesInput::Bare(data) => data,
            SeriesInput::Labeled(series) => &series.data,
        }
    }
}

/// Role of one slot in a flat datapoint buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFormat {
    pub x: bool,
    pub y: bool,
    pub required: bool,
    pub default_value: Option<f64>,
}

impl SlotFormat {
    pub const X: SlotFormat = SlotFormat {
        x: true,
        y: false,
        required: true,
        default_value: None,
    };
    pub const Y: SlotFormat = SlotFormat {
        x: false,
        y: true,
        required: true,
        default_value: None,
    };

    /// Bar baseline, defaulting to zero when missing. Horizontal bars grow along x.
    #[must_use]
    pub const fn baseline(horizontal: bool) -> SlotFormat {
        SlotFormat {
            x: horizontal,
            y: !horizontal,
            required: false,
            default_value: Some(0.0),
        }
    }
}

/// Flat numeric render buffer derived from a series' input data.
///
/// Length is always a multiple of `point_size`; a gap nulls every slot of its point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatapointBuffer {
    pub points: Vec<Option<f64>>,
    pub point_size: usize,
    pub format: Vec<SlotFormat>,
}

impl DatapointBuffer {
    #[must_use]
    pub fn with_format(format: Vec<SlotFormat>) -> Self {
        Self {
            points: Vec::new(),
            point_size: format.len(),
            format,
        }
    }

    /// Number of logical points.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.point_size == 0 {
            0
        } else {
            self.points.len() / self.point_size
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&[Option<f64>]> {
        let start = index.checked_mul(self.point_size)?;
        self.points.get(start..start + self.point_size)
    }

    /// Iterates logical points as slot slices.
    pub fn iter(&self) -> impl Iterator<Item = &[Option<f64>]> {
        self.points.chunks_exact(self.point_size.max(1))
    }

    /// Non-gap `(x, y, third)` triples with their point index.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64, f64, Option<f64>)> + '_ {
        self.iter().enumerate().filter_map(|(index, slots)| {
            let x = slots.first().copied().flatten()?;
            let y = slots.get(1).copied().flatten()?;
            Some((index, x, y, slots.get(2).copied().flatten()))
        })
    }
}

/// Observed data extent of one series on its two axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesExtent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl SeriesExtent {
    pub const EMPTY: SeriesExtent = SeriesExtent {
        xmin: f64::INFINITY,
        xmax: f64::NEG_INFINITY,
        ymin: f64::INFINITY,
        ymax: f64::NEG_INFINITY,
    };
}

/// Normalized series: resolved style, color and axes plus its derived buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub color: Color,
    pub lines: LinesOptions,
    pub points: PointsOptions,
    pub bars: BarsOptions,
    pub shadow_size: f64,
    pub xaxis: AxisId,
    pub yaxis: AxisId,
    pub clickable: bool,
    pub hoverable: bool,
    pub data: Vec<RawPoint>,
    pub datapoints: DatapointBuffer,
}

impl Series {
    /// Slot layout of this series' buffer.
    #[must_use]
    pub fn datapoint_format(&self) -> Vec<SlotFormat> {
        let mut format = vec![SlotFormat::X, SlotFormat::Y];
        if self.bars.show {
            format.push(SlotFormat::baseline(self.bars.horizontal));
        }
        format
    }

    /// Extent over non-gap points, widened by bar geometry when bars are shown.
    #[must_use]
    pub fn extent(&self) -> SeriesExtent {
        let mut extent = SeriesExtent::EMPTY;
        let format = &self.datapoints.format;
        for slots in self.datapoints.iter() {
            if slots.first().copied().flatten().is_none() {
                continue;
            }
            for (value, slot) in slots.iter().zip(format) {
                let Some(value) = *value else { continue };
                if slot.x {
                    extent.xmin = extent.xmin.min(value);
                    extent.xmax = extent.xmax.max(value);
                }
                if slot.y {
                    extent.ymin = extent.ymin.min(value);
                    extent.ymax = extent.ymax.max(value);
                }
            }
        }

        if self.bars.show {
            let left = self.bars.bar_left();
            let width = self.bars.bar_width;
            if self.bars.horizontal {
                extent.ymin += left;
                extent.ymax += left + width;
            } else {
                extent.xmin += left;
                extent.xmax += left + width;
            }
        }
        extent
    }
}

/// Resolves per-series options, colors and axes for every input series.
///
/// Datapoint buffers are left empty; see [`build_datapoints`].
pub fn normalize_series(inputs: Vec<SeriesInput>, options: &PlotOptions) -> PlotResult<Vec<Series>> {
    let mut partial = Vec::with_capacity(inputs.len());
    for input in inputs {
        partial.push(merge_series_options(input, &options.series)?);
    }

    let palette = generate_palette(&partial, &options.colors);
    let mut next_auto = 0usize;
    let mut normalized = Vec::with_capacity(partial.len());
    for (mut style, labeled) in partial {
        let color = match labeled.color {
            Some(SeriesColor::Color(color)) => color,
            Some(SeriesColor::Index(index)) => palette[index],
            None => {
                let color = palette[next_auto];
                next_auto += 1;
                color
            }
        };

        if style.lines.show.is_none() && !style.bars.show && !style.points.show {
            style.lines.show = Some(true);
        }
        style.lines.show = Some(style.lines.is_shown());

        normalized.push(Series {
            label: labeled.label,
            color,
            lines: style.lines,
            points: style.points,
            bars: style.bars,
            shadow_size: style.shadow_size,
            xaxis: AxisId::horizontal(labeled.xaxis.unwrap_or(1)),
            yaxis: AxisId::vertical(labeled.yaxis.unwrap_or(1)),
            clickable: labeled.clickable.unwrap_or(true),
            hoverable: labeled.hoverable.unwrap_or(true),
            data: labeled.data,
            datapoints: DatapointBuffer::default(),
        });
    }
    Ok(normalized)
}

fn merge_series_options(
    input: SeriesInput,
    defaults: &SeriesOptions,
) -> PlotResult<(SeriesOptions, LabeledSeries)> {
    let labeled = match input {
        SeriesInput::Bare(data) => LabeledSeries::new(data),
        SeriesInput::Labeled(series) => series,
    };
    if labeled.overrides.is_empty() {
        return Ok((defaults.clone(), labeled));
    }

    let mut merged = serde_json::to_value(defaults)?;
    deep_merge(&mut merged, Value::Object(labeled.overrides.clone()));
    Ok((serde_json::from_value(merged)?, labeled))
}

/// Produces enough palette colors for auto-assigned and index-assigned series.
fn generate_palette(series: &[(SeriesOptions, LabeledSeries)], colors: &[Color]) -> Vec<Color> {
    let mut needed = series.len();
    for (_, labeled) in series {
        if labeled.color.is_some() {
            needed -= 1;
        }
    }
    for (_, labeled) in series {
        if let Some(SeriesColor::Index(index)) = labeled.color {
            needed = needed.max(index + 1);
        }
    }

    let mut palette = Vec::with_capacity(needed);
    let mut variation = 0u32;
    let mut index = 0usize;
    while palette.len() < needed {
        let base = colors.get(index).copied().unwrap_or(Color::rgb(100, 100, 100));
        let sign = if variation % 2 == 1 { -1.0 } else { 1.0 };
        let factor = 1.0 + sign * f64::from(variation.div_ceil(2)) * 0.2;
        palette.push(base.scale(Some(factor), Some(factor), Some(factor), None));

        index += 1;
        if index >= colors.len() {
            index = 0;
            variation += 1;
        }
    }
    palette
}

/// Derives the flat datapoint buffer of a normalized series.
///
/// Non-numeric required values nullify the whole point. With `lines.steps`
/// an intermediate point is inserted so the line runs horizontally first.
#[must_use]
pub fn build_datapoints(series: &Series) -> DatapointBuffer {
    let mut buffer = DatapointBuffer::with_format(series.datapoint_format());
    let point_size = buffer.point_size;
    let insert_steps = series.lines.is_shown() && series.lines.steps;
    buffer.points.reserve(series.data.len() * point_size);

    for raw in &series.data {
        let mut slots = vec![None; point_size];
        let mut nullify = raw.is_none();
        if let Some(values) = raw {
            for (m, format) in buffer.format.iter().enumerate() {
                let mut value = values.get(m).and_then(RawValue::to_number);
                if value.is_none() {
                    if format.required {
                        nullify = true;
                    }
                    value = format.default_value;
                }
                slots[m] = value;
            }
        }

        if nullify {
            buffer.points.extend(std::iter::repeat_n(None, point_size));
            continue;
        }

        if insert_steps {
            let start = buffer.points.len();
            if start >= point_size {
                let previous = &buffer.points[start - point_size..start];
                if let (Some(prev_x), Some(prev_y)) = (previous[0], previous[1]) {
                    if Some(prev_x) != slots[0] && Some(prev_y) != slots[1] {
                        let mut middle = slots.clone();
                        middle[1] = Some(prev_y);
                        buffer.points.extend(middle);
                    }
                }
            }
        }
        buffer.points.extend(slots);
    }

    buffer
}
