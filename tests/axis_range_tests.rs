use approx::assert_relative_eq;
use plot_rs::config::{AxisOptions, TickSizeOption, TickSpec, TicksOption};
use plot_rs::core::{Axis, AxisId, DataExtent, SeriesInput, Viewport};
use plot_rs::render::NullRenderer;
use plot_rs::{Plot, PlotOptions};

fn compute(id: AxisId, options: AxisOptions, min: f64, max: f64) -> Axis {
    Axis::compute(
        id,
        options,
        DataExtent::EMPTY.include(min, max),
        true,
        Viewport::new(600, 400),
    )
}

#[test]
fn default_ranges_for_three_point_series() {
    let plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])],
        PlotOptions::default(),
        Vec::new(),
    )
    .expect("plot init");

    let xaxis = &plot.axes()[AxisId::X];
    assert_relative_eq!(xaxis.min, 0.0);
    assert_relative_eq!(xaxis.max, 2.0);

    // The 2% margin padding then snaps outward to the enclosing ticks.
    let yaxis = &plot.axes()[AxisId::Y];
    assert!(yaxis.min < 1.0 && yaxis.max > 3.0);
    assert_relative_eq!(yaxis.min, 0.5);
    assert_relative_eq!(yaxis.max, 3.5);
}

#[test]
fn x_margin_can_be_configured() {
    let options = AxisOptions::default().with_autoscale_margin(Some(0.01));
    let axis = compute(AxisId::X, options, -2.0, 2.0);
    assert!(axis.min <= -2.04);
    assert!(axis.max >= 2.04);
}

#[test]
fn single_value_widens_by_one_percent() {
    let axis = compute(AxisId::X, AxisOptions::default(), 50.0, 50.0);
    assert_relative_eq!(axis.min, 49.5);
    assert_relative_eq!(axis.max, 50.5);
}

#[test]
fn single_zero_value_widens_by_one() {
    let axis = compute(AxisId::X, AxisOptions::default(), 0.0, 0.0);
    assert_relative_eq!(axis.min, -1.0);
    assert_relative_eq!(axis.max, 1.0);
}

#[test]
fn explicit_min_pushes_widening_onto_max() {
    let options = AxisOptions::default().with_range(Some(3.0), None);
    let axis = compute(AxisId::X, options, 3.0, 3.0);
    assert_relative_eq!(axis.min, 3.0);
    assert_relative_eq!(axis.max, 3.03, epsilon = 1e-12);
}

#[test]
fn margin_does_not_dip_non_negative_data_below_zero() {
    let options = AxisOptions::default().with_autoscale_margin(Some(0.5));
    let axis = compute(AxisId::Y, options, 0.0, 10.0);
    assert_eq!(axis.min, 0.0);
    assert!(axis.max >= 15.0);
}

#[test]
fn margin_does_not_lift_non_positive_data_above_zero() {
    let options = AxisOptions::default().with_autoscale_margin(Some(0.5));
    let axis = compute(AxisId::Y, options, -10.0, 0.0);
    assert_eq!(axis.max, 0.0);
    assert!(axis.min <= -15.0);
}

#[test]
fn inverted_explicit_bounds_are_repaired() {
    let options = AxisOptions::default().with_range(Some(5.0), Some(1.0));
    let axis = compute(AxisId::X, options, 0.0, 10.0);
    assert!(axis.min < axis.max);
}

#[test]
fn explicit_tick_list_keeps_labels_and_formats_the_rest() {
    let options = AxisOptions::default().with_ticks(TicksOption::List(vec![
        TickSpec::Value(0.0),
        TickSpec::Labeled(5.0, "mid".to_owned()),
        TickSpec::Value(10.0),
    ]));
    let axis = compute(AxisId::X, options, 0.0, 10.0);
    let labels: Vec<&str> = axis.ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[1], "mid");
    assert_eq!(axis.ticks[2].value, 10.0);
}

#[test]
fn fixed_tick_size_overrides_the_nice_step() {
    let mut options = AxisOptions::default();
    options.tick_size = Some(TickSizeOption::Fixed(3.0));
    let axis = compute(AxisId::X, options, 0.0, 10.0);
    let values: Vec<f64> = axis.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 3.0, 6.0, 9.0, 12.0]);
}

#[test]
fn tick_decimals_cap_label_precision() {
    let mut options = AxisOptions::default();
    options.tick_decimals = Some(0);
    let axis = compute(AxisId::X, options, 0.0, 1.0);
    assert!(axis.ticks.iter().all(|tick| !tick.label.contains('.')));
}

#[test]
fn projection_round_trips_through_pixels() {
    let plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(640, 480),
        vec![SeriesInput::from_xy(&[(-5.0, 100.0), (5.0, 300.0)])],
        PlotOptions::default(),
        Vec::new(),
    )
    .expect("plot init");

    let xaxis = &plot.axes()[AxisId::X];
    let yaxis = &plot.axes()[AxisId::Y];
    assert_relative_eq!(xaxis.p2c(xaxis.min), 0.0);
    assert_relative_eq!(xaxis.p2c(xaxis.max), plot.layout().plot_width, epsilon = 1e-9);
    assert_relative_eq!(yaxis.p2c(yaxis.max), 0.0);
    assert_relative_eq!(yaxis.p2c(yaxis.min), plot.layout().plot_height, epsilon = 1e-9);
    assert_relative_eq!(xaxis.c2p(xaxis.p2c(1.25)), 1.25, epsilon = 1e-9);
    assert_relative_eq!(yaxis.c2p(yaxis.p2c(222.0)), 222.0, epsilon = 1e-9);
}
