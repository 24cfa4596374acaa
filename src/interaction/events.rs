use serde::{Deserialize, Serialize};

use super::{PlotItem, SelectionRanges};

/// Pointer position in canvas pixels and in data units of each used axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPosition {
    pub canvas_x: f64,
    pub canvas_y: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

/// Events emitted by a plot, drained with `Plot::take_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotEvent {
    Hover {
        position: PlotPosition,
        item: Option<PlotItem>,
    },
    Click {
        position: PlotPosition,
        item: Option<PlotItem>,
    },
    /// Selection in progress; `None` once a drag ends without a selection.
    Selecting(Option<SelectionRanges>),
    Selected(SelectionRanges),
    Unselected,
    /// Older `selected` event carrying the primary axis ranges.
    LegacySelected { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl PlotEvent {
    /// Event name as hosts bind to it.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PlotEvent::Hover { .. } => "plothover",
            PlotEvent::Click { .. } => "plotclick",
            PlotEvent::Selecting(_) => "plotselecting",
            PlotEvent::Selected(_) => "plotselected",
            PlotEvent::Unselected => "plotunselected",
            PlotEvent::LegacySelected { .. } => "selected",
        }
    }
}
