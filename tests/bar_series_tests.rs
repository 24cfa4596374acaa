use plot_rs::core::{
    AxisId, LabeledSeries, SeriesInput, Viewport, bar_extent, build_datapoints, normalize_series,
    xy,
};
use plot_rs::render::{DrawCommand, NullRenderer, RenderLayer};
use plot_rs::{Plot, PlotOptions};
use serde_json::json;

fn bar_series(points: Vec<plot_rs::core::RawPoint>, overrides: serde_json::Value) -> SeriesInput {
    SeriesInput::Labeled(LabeledSeries::new(points).with_overrides(overrides))
}

#[test]
fn centered_bar_spans_half_width_each_side() {
    let input = bar_series(
        vec![xy(5.0, 2.0)],
        json!({ "bars": { "show": true, "align": "center", "barWidth": 1.0 } }),
    );
    let mut series = normalize_series(vec![input], &PlotOptions::default()).expect("normalize");
    let buffer = build_datapoints(&series[0]);
    series[0].datapoints = buffer;

    let bars = &series[0].bars;
    let bar = bar_extent(5.0, 2.0, 0.0, bars.bar_left(), bars.bar_right(), bars.horizontal);
    assert_eq!(bar.left, 4.5);
    assert_eq!(bar.right, 5.5);
    assert_eq!(bar.bottom, 0.0);
    assert_eq!(bar.top, 2.0);

    let extent = series[0].extent();
    assert_eq!(extent.xmin, 4.5);
    assert_eq!(extent.xmax, 5.5);
    assert_eq!(extent.ymin, 0.0);
    assert_eq!(extent.ymax, 2.0);
}

#[test]
fn bars_use_a_baseline_slot() {
    let input = bar_series(vec![xy(1.0, 4.0)], json!({ "bars": { "show": true } }));
    let series = normalize_series(vec![input], &PlotOptions::default()).expect("normalize");
    let buffer = build_datapoints(&series[0]);
    assert_eq!(buffer.point_size, 3);
    assert_eq!(buffer.point(0), Some(&[Some(1.0), Some(4.0), Some(0.0)][..]));
}

#[test]
fn negative_bar_swaps_ends_and_stroked_edge() {
    let bar = bar_extent(2.0, -3.0, 0.0, 0.0, 1.0, false);
    assert_eq!((bar.bottom, bar.top), (-3.0, 0.0));
    assert!(bar.edges.bottom);
    assert!(!bar.edges.top);
    assert!(bar.edges.left && bar.edges.right);
}

#[test]
fn horizontal_bar_grows_along_x() {
    let bar = bar_extent(6.0, 1.0, 0.0, -0.25, 0.25, true);
    assert_eq!((bar.left, bar.right), (0.0, 6.0));
    assert_eq!((bar.bottom, bar.top), (0.75, 1.25));
    assert!(!bar.edges.left);
    assert!(bar.edges.right);
}

#[test]
fn bar_plot_paints_one_polygon_per_bar() {
    let input = bar_series(
        vec![xy(0.0, 1.0), xy(1.0, 2.0), None, xy(3.0, 4.0)],
        json!({ "bars": { "show": true } }),
    );
    let plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(500, 300),
        vec![input],
        PlotOptions::default(),
        Vec::new(),
    )
    .expect("plot init");

    let base = plot.renderer().last_base.as_ref().expect("base frame");
    let polygons = base
        .commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Polygon(_)))
        .count();
    assert_eq!(polygons, 3);
    assert!(plot.renderer().last_stats(RenderLayer::Base).paths >= 3);

    let xaxis = &plot.axes()[AxisId::X];
    assert_eq!(xaxis.min, 0.0);
    assert_eq!(xaxis.max, 4.0);
    assert_eq!(plot.axes()[AxisId::Y].min, 0.0);
}

#[test]
fn hovering_inside_a_bar_hits_it() {
    let input = bar_series(
        vec![xy(0.0, 1.0), xy(2.0, 3.0)],
        json!({ "bars": { "show": true } }),
    );
    let mut options = PlotOptions::default();
    options.grid.hoverable = true;
    let mut plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(500, 300),
        vec![input],
        options,
        Vec::new(),
    )
    .expect("plot init");

    let offset = plot.plot_offset();
    let x = offset.left + plot.axes()[AxisId::X].p2c(2.5);
    let y = offset.top + plot.axes()[AxisId::Y].p2c(0.5);
    plot.mouse_move(x, y);

    let events = plot.take_events();
    let plot_rs::interaction::PlotEvent::Hover { item: Some(item), .. } = &events[0] else {
        panic!("expected a bar hit, got {events:?}");
    };
    assert_eq!(item.data_index, 1);
    assert!(plot.highlights().contains(0, 1));

    assert!(plot.flush_overlay().expect("flush"));
    assert_eq!(plot.renderer().last_stats(RenderLayer::Overlay).polygons, 1);
}
