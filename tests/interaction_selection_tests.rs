use approx::assert_relative_eq;
use plot_rs::config::SelectionMode;
use plot_rs::core::{AxisId, AxisRange, SeriesInput, Viewport};
use plot_rs::interaction::{InteractionMode, MouseButton, PlotEvent, SelectionRanges};
use plot_rs::render::{NullRenderer, RenderLayer};
use plot_rs::{Plot, PlotError, PlotOptions};

fn selectable_plot(mode: SelectionMode) -> Plot<NullRenderer> {
    let mut options = PlotOptions::default();
    options.selection.mode = Some(mode);
    options.grid.clickable = true;
    Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])],
        options,
        Vec::new(),
    )
    .expect("plot init")
}

fn drag(plot: &mut Plot<NullRenderer>, from: (f64, f64), to: (f64, f64)) {
    let offset = plot.plot_offset();
    plot.mouse_down(offset.left + from.0, offset.top + from.1, MouseButton::Primary);
    plot.mouse_move(offset.left + to.0, offset.top + to.1);
    plot.mouse_up(offset.left + to.0, offset.top + to.1);
}

#[test]
fn tiny_drag_is_not_a_selection() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (12.0, 11.0));

    let events = plot.take_events();
    assert!(!events.iter().any(|event| matches!(event, PlotEvent::Selected(_))));
    assert!(events.contains(&PlotEvent::Unselected));
    assert_eq!(events.last(), Some(&PlotEvent::Selecting(None)));
    assert!(plot.get_selection().is_none());
    assert_eq!(plot.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn drag_commits_selection_and_legacy_event() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));

    let events = plot.take_events();
    assert!(matches!(events[0], PlotEvent::Selecting(Some(_))));
    let PlotEvent::Selected(ranges) = events[1] else {
        panic!("expected plotselected, got {events:?}");
    };
    let xaxis = &plot.axes()[AxisId::X];
    let yaxis = &plot.axes()[AxisId::Y];
    let x = ranges.xaxis.expect("x range");
    let y = ranges.yaxis.expect("y range");
    assert_relative_eq!(x.from, xaxis.c2p(10.0), epsilon = 1e-9);
    assert_relative_eq!(x.to, xaxis.c2p(30.0), epsilon = 1e-9);
    assert_relative_eq!(y.from, yaxis.c2p(40.0), epsilon = 1e-9);
    assert_relative_eq!(y.to, yaxis.c2p(10.0), epsilon = 1e-9);
    assert!(ranges.x2axis.is_none());

    assert_eq!(
        events[2],
        PlotEvent::LegacySelected {
            x1: x.from,
            y1: y.from,
            x2: x.to,
            y2: y.to
        }
    );
    assert_eq!(events.len(), 3);
}

#[test]
fn first_click_after_selection_is_swallowed() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));
    plot.take_events();

    plot.click(100.0, 100.0);
    assert!(plot.take_events().is_empty());
    plot.click(100.0, 100.0);
    assert!(matches!(plot.take_events().as_slice(), [PlotEvent::Click { .. }]));
}

#[test]
fn x_mode_selection_spans_full_height() {
    let mut plot = selectable_plot(SelectionMode::X);
    drag(&mut plot, (10.0, 10.0), (60.0, 12.0));

    let ranges = plot.get_selection().expect("selection");
    let yaxis = &plot.axes()[AxisId::Y];
    let y = ranges.yaxis.expect("y range");
    assert_relative_eq!(y.from, yaxis.min, epsilon = 1e-9);
    assert_relative_eq!(y.to, yaxis.max, epsilon = 1e-9);
}

#[test]
fn selection_is_drawn_on_the_overlay() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));
    assert!(plot.flush_overlay().expect("flush"));
    assert_eq!(plot.renderer().last_stats(RenderLayer::Overlay).rects, 1);
}

#[test]
fn set_selection_round_trips_through_get_selection() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    let requested = SelectionRanges {
        xaxis: Some(AxisRange::ordered(1.5, 0.5)),
        yaxis: Some(AxisRange::ordered(1.0, 2.0)),
        ..SelectionRanges::default()
    };
    plot.set_selection(requested, false).expect("set selection");

    let ranges = plot.get_selection().expect("selection");
    let x = ranges.xaxis.expect("x range");
    let y = ranges.yaxis.expect("y range");
    assert_relative_eq!(x.from, 0.5, epsilon = 1e-9);
    assert_relative_eq!(x.to, 1.5, epsilon = 1e-9);
    assert_relative_eq!(y.from, 1.0, epsilon = 1e-9);
    assert_relative_eq!(y.to, 2.0, epsilon = 1e-9);

    let events = plot.take_events();
    assert!(matches!(events[0], PlotEvent::Selected(_)));
    assert!(matches!(events[1], PlotEvent::LegacySelected { .. }));
}

#[test]
fn set_selection_can_stay_silent() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    let requested = SelectionRanges {
        xaxis: Some(AxisRange::ordered(0.5, 1.5)),
        ..SelectionRanges::default()
    };
    plot.set_selection(requested, true).expect("set selection");
    assert!(plot.take_events().is_empty());

    // Missing y range spans the whole height.
    let ranges = plot.get_selection().expect("selection");
    let yaxis = &plot.axes()[AxisId::Y];
    let y = ranges.yaxis.expect("y range");
    assert_relative_eq!(y.from, yaxis.min, epsilon = 1e-9);
    assert_relative_eq!(y.to, yaxis.max, epsilon = 1e-9);
}

#[test]
fn set_selection_rejects_non_finite_ranges() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    let requested = SelectionRanges {
        xaxis: Some(AxisRange {
            from: f64::NAN,
            to: 1.0,
        }),
        ..SelectionRanges::default()
    };
    assert!(matches!(
        plot.set_selection(requested, false),
        Err(PlotError::InvalidData(_))
    ));
    assert!(plot.get_selection().is_none());
}

#[test]
fn clear_selection_emits_unselected_once() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));
    plot.take_events();

    plot.clear_selection(false);
    assert_eq!(plot.take_events(), vec![PlotEvent::Unselected]);
    assert!(plot.get_selection().is_none());

    plot.clear_selection(false);
    assert!(plot.take_events().is_empty());
}

#[test]
fn clear_selection_can_stay_silent() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));
    plot.take_events();

    plot.clear_selection(true);
    assert!(plot.take_events().is_empty());
    assert!(plot.get_selection().is_none());
}

#[test]
fn drag_without_selection_mode_is_ignored() {
    let mut plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0)])],
        PlotOptions::default(),
        Vec::new(),
    )
    .expect("plot init");
    drag(&mut plot, (10.0, 10.0), (80.0, 80.0));
    assert!(plot.take_events().is_empty());
    assert!(plot.get_selection().is_none());
}

#[test]
fn new_drag_starts_from_a_collapsed_selection() {
    let mut plot = selectable_plot(SelectionMode::Xy);
    drag(&mut plot, (10.0, 10.0), (30.0, 40.0));
    assert!(plot.get_selection().is_some());
    plot.take_events();

    let offset = plot.plot_offset();
    plot.mouse_down(offset.left + 200.0, offset.top + 150.0, MouseButton::Primary);
    assert_eq!(plot.interaction_mode(), InteractionMode::Selecting);
    assert!(plot.get_selection().is_none());

    assert!(plot.flush_overlay().expect("flush"));
    assert_eq!(plot.renderer().last_stats(RenderLayer::Overlay).rects, 0);
}
