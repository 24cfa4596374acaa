//! Plot configuration.
//!
//! Options are plain serializable structs so hosts can load them from JSON;
//! `merge_options` layers user JSON over the defaults. Callbacks (formatters,
//! generators) are attached after parsing through builder methods.

mod axis;
mod callbacks;
mod grid;
mod merge;
mod series;

pub use axis::{
    AxisMode, AxisOptions, TickSizeOption, TickSource, TickSpec, TicksOption, TimeUnit,
};
pub use callbacks::{
    Callback, LabelFormatter, MarkingsContext, MarkingsGenerator, TickFormatter, TickGenerator,
};
pub use grid::{
    GridOptions, LegendOptions, LegendPosition, Marking, MarkingRange, SelectionMode,
    SelectionOptions,
};
pub use merge::{apply_legacy_aliases, deep_merge, merge_options};
pub use series::{
    BarAlign, BarsOptions, FillColor, FillOption, GradientStop, LinesOptions, PointsOptions,
    SeriesColor, SeriesOptions,
};

use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Color};

pub const DEFAULT_COLORS: [Color; 5] = [
    Color::rgb(0xed, 0xc2, 0x40),
    Color::rgb(0xaf, 0xd8, 0xf8),
    Color::rgb(0xcb, 0x4b, 0x4b),
    Color::rgb(0x4d, 0xa7, 0x4d),
    Color::rgb(0x94, 0x40, 0xed),
];

/// Vertical axes pad data-derived ranges by 2% unless configured otherwise.
pub const DEFAULT_VERTICAL_AUTOSCALE_MARGIN: f64 = 0.02;

/// Complete plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotOptions {
    pub colors: Vec<Color>,
    pub legend: LegendOptions,
    pub xaxis: AxisOptions,
    pub yaxis: AxisOptions,
    pub x2axis: AxisOptions,
    pub y2axis: AxisOptions,
    pub series: SeriesOptions,
    pub grid: GridOptions,
    pub selection: SelectionOptions,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            legend: LegendOptions::default(),
            xaxis: AxisOptions::default(),
            yaxis: AxisOptions::default()
                .with_autoscale_margin(Some(DEFAULT_VERTICAL_AUTOSCALE_MARGIN)),
            x2axis: AxisOptions::default(),
            y2axis: AxisOptions::default()
                .with_autoscale_margin(Some(DEFAULT_VERTICAL_AUTOSCALE_MARGIN)),
            series: SeriesOptions::default(),
            grid: GridOptions::default(),
            selection: SelectionOptions::default(),
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn axis(&self, id: AxisId) -> &AxisOptions {
        match id {
            AxisId::X => &self.xaxis,
            AxisId::Y => &self.yaxis,
            AxisId::X2 => &self.x2axis,
            AxisId::Y2 => &self.y2axis,
        }
    }

    pub fn axis_mut(&mut self, id: AxisId) -> &mut AxisOptions {
        match id {
            AxisId::X => &mut self.xaxis,
            AxisId::Y => &mut self.yaxis,
            AxisId::X2 => &mut self.x2axis,
            AxisId::Y2 => &mut self.y2axis,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, id: AxisId, options: AxisOptions) -> Self {
        *self.axis_mut(id) = options;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_selection_mode(mut self, mode: Option<SelectionMode>) -> Self {
        self.selection.mode = mode;
        self
    }

    /// Parses user JSON layered over the defaults.
    pub fn from_json(user: serde_json::Value) -> crate::error::PlotResult<Self> {
        merge_options(user)
    }
}
