use serde_json::Value;
use tracing::{debug, info};

use crate::config::{merge_options, PlotOptions};
use crate::core::{
    build_datapoints, compute_layout, normalize_series, Axes, Axis, AxisId, DataExtent,
    PlotLayout, SeriesInput, Viewport,
};
use crate::error::{PlotError, PlotResult};
use crate::extensions::{PlotPlugin, PluginPipeline};
use crate::interaction::{HighlightSet, InteractionMode, RedrawScheduler, SelectionState};
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Builds a plot and runs the first data, grid and draw passes.
    ///
    /// Fails on a zero-sized viewport, duplicate plugin names, or when the
    /// renderer rejects the first frame.
    pub fn new(
        renderer: R,
        viewport: Viewport,
        data: Vec<SeriesInput>,
        options: PlotOptions,
        plugins: Vec<Box<dyn PlotPlugin>>,
    ) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let plugins = PluginPipeline::from_plugins(plugins)?;
        let options = plugins.process_options(options);
        let axes = Axes::new(&options);

        let mut plot = Self {
            renderer,
            viewport,
            options,
            plugins,
            series: Vec::new(),
            axes,
            layout: PlotLayout::default(),
            highlights: HighlightSet::new(),
            selection: SelectionState::default(),
            mode: InteractionMode::Idle,
            ignore_click: false,
            scheduler: RedrawScheduler::default(),
            events: Vec::new(),
        };

        plot.set_data(data)?;
        plot.setup_grid();
        plot.draw()?;
        info!(
            width = viewport.width,
            height = viewport.height,
            series = plot.series.len(),
            plugins = plot.plugins.len(),
            "plot created"
        );
        Ok(plot)
    }

    /// Same as [`Plot::new`] with options given as user JSON over the defaults.
    pub fn from_json(
        renderer: R,
        viewport: Viewport,
        data: Vec<SeriesInput>,
        options: Value,
        plugins: Vec<Box<dyn PlotPlugin>>,
    ) -> PlotResult<Self> {
        let options = merge_options(options)?;
        Self::new(renderer, viewport, data, options, plugins)
    }

    /// Replaces all series. Call `setup_grid` and `draw` afterwards to show them.
    ///
    /// Highlights refer to datapoint indices, so they are cleared.
    pub fn set_data(&mut self, data: Vec<SeriesInput>) -> PlotResult<()> {
        let inputs: Vec<SeriesInput> = data
            .into_iter()
            .enumerate()
            .map(|(index, input)| self.plugins.process_raw_data(index, input))
            .collect();

        let mut series = normalize_series(inputs, &self.options)?;
        for (index, s) in series.iter_mut().enumerate() {
            let buffer = self.plugins.process_datapoints(s, build_datapoints(s));
            if buffer.point_size < 2 || buffer.points.len() % buffer.point_size != 0 {
                return Err(PlotError::InvalidData(format!(
                    "series {index}: datapoint buffer of length {} does not hold points of size {}",
                    buffer.points.len(),
                    buffer.point_size
                )));
            }
            s.datapoints = buffer;
        }

        self.series = series;
        if self.highlights.clear() {
            self.request_overlay_redraw();
        }
        debug!(series = self.series.len(), "data set");
        Ok(())
    }

    /// Recomputes axis ranges, ticks, label sizes, margins and scales in one pass.
    pub fn setup_grid(&mut self) {
        let mut extents = [DataExtent::EMPTY; 4];
        let mut used = [false; 4];
        for s in &self.series {
            used[s.xaxis.index()] = true;
            used[s.yaxis.index()] = true;
            let extent = s.extent();
            if extent.xmin.is_finite() {
                let x = &mut extents[s.xaxis.index()];
                *x = x.include(extent.xmin, extent.xmax);
            }
            if extent.ymin.is_finite() {
                let y = &mut extents[s.yaxis.index()];
                *y = y.include(extent.ymin, extent.ymax);
            }
        }

        let axes = AxisId::ALL.map(|id| {
            Axis::compute(
                id,
                self.options.axis(id).clone(),
                extents[id.index()],
                used[id.index()],
                self.viewport,
            )
        });
        self.axes = Axes::from_axes(axes);
        self.layout = compute_layout(
            &mut self.axes,
            &self.series,
            &self.options.grid,
            self.viewport,
            &self.renderer,
        );
    }
}
