//! Host-facing plot facade.
//!
//! `Plot` is split across files by concern: construction and the data pass,
//! base and overlay frame building, and pointer interaction.

mod axis_render_frame_builder;
mod interaction_controller;
mod legend_render_frame_builder;
mod overlay_render_frame_builder;
mod plot;
mod plot_init;
mod render_frame_builder;
mod series_render_frame_builder;

pub use legend_render_frame_builder::{
    LegendEntry, LegendGrid, LEGEND_SWATCH_HEIGHT, LEGEND_SWATCH_WIDTH,
};
pub use plot::Plot;
