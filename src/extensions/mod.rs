//! Plugin hooks around the data and options pipeline.

pub mod plugins;

pub use plugins::{PlotPlugin, PluginContext, PluginPipeline};
