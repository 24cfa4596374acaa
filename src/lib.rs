//! plot-rs: a two-dimensional data plotting engine.
//!
//! Raw series and layered options are normalized into datapoint buffers,
//! axis ranges and ticks are derived from the data, and each draw produces
//! backend-agnostic frames for a base layer and an interaction overlay.
//! Hover, click, highlight and rubber-band selection are driven through
//! explicit pointer calls and surface as [`interaction::PlotEvent`]s.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::Plot;
pub use config::PlotOptions;
pub use error::{PlotError, PlotResult};
