use plot_rs::core::{AxisId, SeriesInput, Viewport};
use plot_rs::interaction::{MouseButton, PlotEvent, RedrawState};
use plot_rs::render::{NullRenderer, RenderLayer};
use plot_rs::{Plot, PlotOptions};

fn hoverable_plot() -> Plot<NullRenderer> {
    let mut options = PlotOptions::default();
    options.grid.hoverable = true;
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

fn canvas_point(plot: &Plot<NullRenderer>, x: f64, y: f64) -> (f64, f64) {
    let offset = plot.plot_offset();
    (
        offset.left + plot.axes()[AxisId::X].p2c(x),
        offset.top + plot.axes()[AxisId::Y].p2c(y),
    )
}

#[test]
fn hover_near_point_reports_item_and_highlights_it() {
    let mut plot = hoverable_plot();
    let (px, py) = canvas_point(&plot, 1.0, 3.0);

    plot.mouse_move(px + 4.0, py - 3.0);
    let events = plot.take_events();
    assert_eq!(events.len(), 1);
    let PlotEvent::Hover { position, item } = &events[0] else {
        panic!("expected hover event, got {events:?}");
    };
    let item = item.as_ref().expect("item under pointer");
    assert_eq!((item.series_index, item.data_index), (0, 1));
    assert_eq!(item.datapoint.as_slice(), &[1.0, 3.0]);
    assert!((item.canvas_x - px).abs() < 1e-9);
    assert!((position.x.expect("x used") - 1.0).abs() < 0.1);
    assert!(position.x2.is_none());
    assert!(plot.highlights().contains(0, 1));

    plot.mouse_move(px + 200.0, py + 150.0);
    let events = plot.take_events();
    assert!(matches!(events.as_slice(), [PlotEvent::Hover { item: None, .. }]));
    assert!(plot.highlights().is_empty());
}

#[test]
fn hover_beyond_radius_finds_nothing() {
    let mut plot = hoverable_plot();
    let (px, py) = canvas_point(&plot, 1.0, 3.0);

    plot.mouse_move(px + 11.0, py);
    assert!(matches!(
        plot.take_events().as_slice(),
        [PlotEvent::Hover { item: None, .. }]
    ));
    assert!(plot.highlights().is_empty());
}

#[test]
fn closest_point_wins() {
    let mut plot = hoverable_plot();
    let (ax, _) = canvas_point(&plot, 1.0, 3.0);
    let (bx, _) = canvas_point(&plot, 2.0, 2.0);
    assert!(bx - ax > 20.0);

    let (px, py) = canvas_point(&plot, 2.0, 2.0);
    plot.mouse_move(px - 2.0, py + 1.0);
    let events = plot.take_events();
    let PlotEvent::Hover { item: Some(item), .. } = &events[0] else {
        panic!("expected a hit");
    };
    assert_eq!(item.data_index, 2);
}

#[test]
fn hover_is_silent_when_not_hoverable() {
    let mut plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0)])],
        PlotOptions::default(),
        Vec::new(),
    )
    .expect("plot init");
    plot.mouse_move(100.0, 100.0);
    plot.click(100.0, 100.0);
    assert!(plot.take_events().is_empty());
}

#[test]
fn mouse_leave_drops_hover_highlight() {
    let mut plot = hoverable_plot();
    let (px, py) = canvas_point(&plot, 0.0, 1.0);
    plot.mouse_move(px, py);
    assert!(plot.highlights().contains(0, 0));

    plot.mouse_leave(px, py);
    assert!(plot.highlights().is_empty());
}

#[test]
fn click_highlight_survives_hover_changes() {
    let mut plot = hoverable_plot();
    let (px, py) = canvas_point(&plot, 1.0, 3.0);

    plot.click(px, py);
    assert!(matches!(
        plot.take_events().as_slice(),
        [PlotEvent::Click { item: Some(_), .. }]
    ));
    assert!(plot.highlights().contains(0, 1));

    // Hover over nothing only removes hover-owned highlights.
    plot.mouse_move(px + 200.0, py + 150.0);
    assert!(plot.highlights().contains(0, 1));
}

#[test]
fn pinned_highlight_is_not_removed_by_pointer() {
    let mut plot = hoverable_plot();
    plot.highlight(0, 2).expect("highlight");
    let (px, py) = canvas_point(&plot, 1.0, 3.0);
    plot.mouse_move(px, py);
    plot.mouse_move(px + 200.0, py + 150.0);
    assert!(plot.highlights().contains(0, 2));

    plot.unhighlight(0, 2);
    assert!(plot.highlights().is_empty());
}

#[test]
fn highlight_changes_coalesce_into_one_overlay_redraw() {
    let mut plot = hoverable_plot();
    let frames_before = plot.renderer().frames_rendered;

    plot.highlight(0, 0).expect("highlight");
    plot.highlight(0, 1).expect("highlight");
    assert!(matches!(plot.scheduler().state(), RedrawState::Scheduled { .. }));

    assert!(!plot.advance_time(10).expect("advance"));
    assert_eq!(plot.renderer().frames_rendered, frames_before);
    assert!(plot.advance_time(25).expect("advance"));
    assert_eq!(plot.renderer().frames_rendered, frames_before + 1);
    assert_eq!(plot.scheduler().state(), RedrawState::Idle);

    let overlay = plot.renderer().last_stats(RenderLayer::Overlay);
    assert_eq!(overlay.arcs, 2);
}

#[test]
fn full_draw_cancels_pending_overlay_redraw() {
    let mut plot = hoverable_plot();
    plot.highlight(0, 0).expect("highlight");
    assert!(plot.scheduler().is_pending());

    plot.draw().expect("draw");
    assert!(!plot.scheduler().is_pending());
    assert!(!plot.flush_overlay().expect("flush"));
    assert_eq!(plot.renderer().last_stats(RenderLayer::Overlay).arcs, 1);
}

#[test]
fn secondary_button_does_not_start_selection() {
    let mut options = PlotOptions::default();
    options.selection.mode = Some(plot_rs::config::SelectionMode::Xy);
    let mut plot = Plot::new(
        NullRenderer::default(),
        Viewport::new(600, 400),
        vec![SeriesInput::from_xy(&[(0.0, 1.0), (1.0, 3.0)])],
        options,
        Vec::new(),
    )
    .expect("plot init");
    plot.mouse_down(100.0, 100.0, MouseButton::Secondary);
    assert_eq!(
        plot.interaction_mode(),
        plot_rs::interaction::InteractionMode::Idle
    );
}
