//! Pointer interaction: hit testing, highlights, selection and overlay
//! redraw scheduling.

mod events;
mod highlight;
mod scheduler;
mod selection;

pub use events::{PlotEvent, PlotPosition};
pub use highlight::{Highlight, HighlightSet, HighlightTrigger};
pub use hit_test::{find_nearby_item, plot_item, PlotItem};
pub use scheduler::{RedrawScheduler, RedrawState, OVERLAY_REDRAW_DELAY_MS};
pub use selection::{SelectionCorner, SelectionRanges, SelectionState, MIN_SELECTION_PX};

use serde::{Deserialize, Serialize};

/// Pointer state machine of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Selecting,
}

/// Mouse buttons the plot reacts to; only `Primary` starts a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}
