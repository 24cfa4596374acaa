use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::PlotOptions;
use crate::core::{Axes, DatapointBuffer, PlotOffset, Series, SeriesInput, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::PlotEvent;

/// Read-only plot state passed to plugin event hooks.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    pub viewport: Viewport,
    pub options: &'a PlotOptions,
    pub series: &'a [Series],
    pub axes: &'a Axes,
    pub plot_offset: PlotOffset,
}

/// Named pipeline stage set. Every stage defaults to the identity.
pub trait PlotPlugin {
    fn name(&self) -> &str;

    /// Adjusts parsed options before the first data pass.
    fn process_options(&self, options: PlotOptions) -> PlotOptions {
        options
    }

    /// Rewrites one raw input series before normalization.
    fn process_raw_data(&self, _index: usize, input: SeriesInput) -> SeriesInput {
        input
    }

    /// Rewrites the datapoint buffer built for a normalized series.
    fn process_datapoints(&self, _series: &Series, buffer: DatapointBuffer) -> DatapointBuffer {
        buffer
    }

    fn on_event(&mut self, _event: &PlotEvent, _context: &PluginContext<'_>) {}
}

/// Plugins in registration order; stages run in that order.
#[derive(Default)]
pub struct PluginPipeline {
    plugins: IndexMap<String, Box<dyn PlotPlugin>>,
}

impl fmt::Debug for PluginPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginPipeline")
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PluginPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plugins(plugins: Vec<Box<dyn PlotPlugin>>) -> PlotResult<Self> {
        let mut pipeline = Self::new();
        for plugin in plugins {
            pipeline.register(plugin)?;
        }
        Ok(pipeline)
    }

    pub fn register(&mut self, plugin: Box<dyn PlotPlugin>) -> PlotResult<()> {
        let name = plugin.name().to_owned();
        if self.plugins.contains_key(&name) {
            return Err(PlotError::InvalidOptions(format!(
                "plugin `{name}` is already registered"
            )));
        }
        debug!(plugin = %name, "plugin registered");
        self.plugins.insert(name, plugin);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    #[must_use]
    pub fn process_options(&self, options: PlotOptions) -> PlotOptions {
        self.plugins
            .values()
            .fold(options, |options, plugin| plugin.process_options(options))
    }

    #[must_use]
    pub fn process_raw_data(&self, index: usize, input: SeriesInput) -> SeriesInput {
        self.plugins
            .values()
            .fold(input, |input, plugin| plugin.process_raw_data(index, input))
    }

    #[must_use]
    pub fn process_datapoints(&self, series: &Series, buffer: DatapointBuffer) -> DatapointBuffer {
        self.plugins
            .values()
            .fold(buffer, |buffer, plugin| plugin.process_datapoints(series, buffer))
    }

    pub fn dispatch_event(&mut self, event: &PlotEvent, context: &PluginContext<'_>) {
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
