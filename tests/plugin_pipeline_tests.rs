use std::cell::RefCell;
use std::rc::Rc;

use plot_rs::core::{AxisId, DatapointBuffer, Series, SeriesInput, Viewport, xy};
use plot_rs::extensions::{PlotPlugin, PluginContext, PluginPipeline};
use plot_rs::interaction::PlotEvent;
use plot_rs::render::NullRenderer;
use plot_rs::{Plot, PlotError, PlotOptions};

struct EnableHover;

impl PlotPlugin for EnableHover {
    fn name(&self) -> &str {
        "enable-hover"
    }

    fn process_options(&self, mut options: PlotOptions) -> PlotOptions {
        options.grid.hoverable = true;
        options
    }
}

/// Clickable only when an earlier stage enabled hovering.
struct ClickFollowsHover;

impl PlotPlugin for ClickFollowsHover {
    fn name(&self) -> &str {
        "click-follows-hover"
    }

    fn process_options(&self, mut options: PlotOptions) -> PlotOptions {
        options.grid.clickable = options.grid.hoverable;
        options
    }
}

struct PrependOrigin;

impl PlotPlugin for PrependOrigin {
    fn name(&self) -> &str {
        "prepend-origin"
    }

    fn process_raw_data(&self, _index: usize, input: SeriesInput) -> SeriesInput {
        let mut data = vec![xy(-5.0, 0.0)];
        data.extend(input.data().iter().cloned());
        SeriesInput::Bare(data)
    }
}

struct ScaleY(f64);

impl PlotPlugin for ScaleY {
    fn name(&self) -> &str {
        "scale-y"
    }

    fn process_datapoints(&self, _series: &Series, mut buffer: DatapointBuffer) -> DatapointBuffer {
        let point_size = buffer.point_size;
        for slots in buffer.points.chunks_mut(point_size) {
            if let Some(y) = slots[1].as_mut() {
                *y *= self.0;
            }
        }
        buffer
    }
}

struct Recorder {
    name: &'static str,
    seen: Rc<RefCell<Vec<String>>>,
}

impl PlotPlugin for Recorder {
    fn name(&self) -> &str {
        self.name
    }

    fn on_event(&mut self, event: &PlotEvent, context: &PluginContext<'_>) {
        self.seen
            .borrow_mut()
            .push(format!("{}:{}:{}", self.name, event.name(), context.series.len()));
    }
}

fn plot_with(plugins: Vec<Box<dyn PlotPlugin>>) -> Result<Plot<NullRenderer>, PlotError> {
    Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])],
        PlotOptions::default(),
        plugins,
    )
}

#[test]
fn duplicate_plugin_names_are_rejected() {
    let result = plot_with(vec![Box::new(EnableHover), Box::new(EnableHover)]);
    assert!(matches!(result, Err(PlotError::InvalidOptions(_))));

    let mut pipeline = PluginPipeline::new();
    pipeline.register(Box::new(ScaleY(2.0))).expect("first");
    assert!(pipeline.register(Box::new(ScaleY(3.0))).is_err());
    assert_eq!(pipeline.len(), 1);
}

#[test]
fn option_stages_run_in_registration_order() {
    let plot = plot_with(vec![Box::new(EnableHover), Box::new(ClickFollowsHover)])
        .expect("plot init");
    assert!(plot.options().grid.hoverable);
    assert!(plot.options().grid.clickable);

    let plot = plot_with(vec![Box::new(ClickFollowsHover), Box::new(EnableHover)])
        .expect("plot init");
    assert!(plot.options().grid.hoverable);
    assert!(!plot.options().grid.clickable);
}

#[test]
fn raw_data_stage_feeds_normalization() {
    let plot = plot_with(vec![Box::new(PrependOrigin)]).expect("plot init");
    assert_eq!(plot.series()[0].datapoints.len(), 4);
    assert_eq!(plot.axes()[AxisId::X].min, -5.0);
}

#[test]
fn datapoint_stage_rewrites_buffers_before_ranging() {
    let plot = plot_with(vec![Box::new(ScaleY(10.0))]).expect("plot init");
    assert_eq!(plot.series()[0].datapoints.point(1), Some(&[Some(1.0), Some(30.0)][..]));
    assert!(plot.axes()[AxisId::Y].max >= 30.0);
}

#[test]
fn events_reach_plugins_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut plot = plot_with(vec![
        Box::new(EnableHover),
        Box::new(Recorder {
            name: "first",
            seen: Rc::clone(&seen),
        }),
        Box::new(Recorder {
            name: "second",
            seen: Rc::clone(&seen),
        }),
    ])
    .expect("plot init");

    plot.mouse_move(1.0, 1.0);
    assert_eq!(
        *seen.borrow(),
        vec!["first:plothover:1".to_owned(), "second:plothover:1".to_owned()]
    );
    assert_eq!(plot.take_events().len(), 1);
}

#[test]
fn pipeline_lists_names_in_registration_order() {
    let pipeline = PluginPipeline::from_plugins(vec![Box::new(ScaleY(1.0)), Box::new(PrependOrigin)])
        .expect("pipeline");
    let names: Vec<&str> = pipeline.names().collect();
    assert_eq!(names, ["scale-y", "prepend-origin"]);
}
