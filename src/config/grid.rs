use serde::{Deserialize, Serialize};

use super::callbacks::{LabelFormatter, MarkingsGenerator};
use crate::core::Color;

/// Optional bounds of one marking along an axis; missing bounds extend to the axis edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl MarkingRange {
    #[must_use]
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }
}

/// Background band or line drawn behind (or above) the data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Marking {
    pub xaxis: Option<MarkingRange>,
    pub x2axis: Option<MarkingRange>,
    pub yaxis: Option<MarkingRange>,
    pub y2axis: Option<MarkingRange>,
    pub color: Option<Color>,
    pub line_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub show: bool,
    pub above_data: bool,
    pub color: Color,
    pub background_color: Option<Color>,
    /// `None` derives the tick color from `color` at 22% opacity.
    pub tick_color: Option<Color>,
    pub label_margin: f64,
    pub label_font_size: f64,
    pub border_width: f64,
    /// `None` draws the border in `color`.
    pub border_color: Option<Color>,
    pub markings: Option<Vec<Marking>>,
    pub markings_color: Color,
    pub markings_line_width: f64,
    pub clickable: bool,
    pub hoverable: bool,
    pub auto_highlight: bool,
    pub mouse_active_radius: f64,
    #[serde(skip)]
    pub markings_generator: Option<MarkingsGenerator>,
}

impl GridOptions {
    #[must_use]
    pub fn with_markings_generator(mut self, generator: MarkingsGenerator) -> Self {
        self.markings_generator = Some(generator);
        self
    }

    #[must_use]
    pub fn resolved_tick_color(&self) -> Color {
        self.tick_color
            .unwrap_or_else(|| self.color.scale(None, None, None, Some(0.22)))
    }

    #[must_use]
    pub fn resolved_border_color(&self) -> Color {
        self.border_color.unwrap_or(self.color)
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            show: true,
            above_data: false,
            color: Color::rgb(0x54, 0x54, 0x54),
            background_color: None,
            tick_color: None,
            label_margin: 5.0,
            label_font_size: 11.0,
            border_width: 2.0,
            border_color: None,
            markings: None,
            markings_color: Color::rgb(0xf4, 0xf4, 0xf4),
            markings_line_width: 2.0,
            clickable: false,
            hoverable: false,
            auto_highlight: true,
            mouse_active_radius: 10.0,
            markings_generator: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Ne,
    Nw,
    Se,
    Sw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOptions {
    pub show: bool,
    pub no_columns: usize,
    pub label_box_border_color: Color,
    pub position: LegendPosition,
    pub margin: f64,
    pub background_color: Option<Color>,
    pub background_opacity: f64,
    #[serde(skip)]
    pub label_formatter: Option<LabelFormatter>,
}

impl LegendOptions {
    #[must_use]
    pub fn with_label_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.label_formatter = Some(formatter);
        self
    }
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: true,
            no_columns: 1,
            label_box_border_color: Color::rgb(0xcc, 0xcc, 0xcc),
            position: LegendPosition::Ne,
            margin: 5.0,
            background_color: None,
            background_opacity: 0.85,
            label_formatter: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    X,
    Y,
    Xy,
}

impl SelectionMode {
    #[must_use]
    pub fn spans_x(self) -> bool {
        matches!(self, SelectionMode::X | SelectionMode::Xy)
    }

    #[must_use]
    pub fn spans_y(self) -> bool {
        matches!(self, SelectionMode::Y | SelectionMode::Xy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionOptions {
    pub mode: Option<SelectionMode>,
    pub color: Color,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            mode: None,
            color: Color::rgb(0xe8, 0xcf, 0xac),
        }
    }
}
