use chrono::{TimeZone, Utc};
use plot_rs::config::{AxisMode, AxisOptions, TickGenerator, TickSizeOption, TickSpec, TicksOption, TimeUnit};
use plot_rs::core::axis::{format_fixed, generate_numeric_ticks, nice_numeric_step};
use plot_rs::core::{Axis, AxisId, DataExtent, TickStep, Viewport, format_date};

fn utc_millis(year: i32, month: u32, day: u32, hour: u32) -> f64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid date")
        .timestamp_millis() as f64
}

fn time_axis(options: AxisOptions, min: f64, max: f64) -> Axis {
    let options = AxisOptions {
        mode: Some(AxisMode::Time),
        ..options
    };
    Axis::compute(
        AxisId::X,
        options,
        DataExtent::EMPTY.include(min, max),
        true,
        Viewport::new(600, 400),
    )
}

#[test]
fn nice_steps_follow_one_two_five_ladder() {
    assert_eq!(nice_numeric_step(0.12, None), (0.1, 1));
    assert_eq!(nice_numeric_step(0.4, None), (0.5, 1));
    assert_eq!(nice_numeric_step(8.0, None), (10.0, 0));
    assert_eq!(nice_numeric_step(170.0, None), (200.0, 0));
}

#[test]
fn numeric_ticks_cover_the_range_and_stop_past_max() {
    let ticks = generate_numeric_ticks(-0.7, 1.2, 0.5);
    assert_eq!(ticks, vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn numeric_ticks_terminate_without_progress() {
    let ticks = generate_numeric_ticks(1e17, 1e17 + 1000.0, 1.0);
    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn invalid_step_yields_no_ticks() {
    assert!(generate_numeric_ticks(0.0, 1.0, 0.0).is_empty());
    assert!(generate_numeric_ticks(0.0, 1.0, f64::NAN).is_empty());
}

#[test]
fn fixed_labels_use_requested_decimals() {
    assert_eq!(format_fixed(2.5, 2), "2.50");
    assert_eq!(format_fixed(-0.0001, 2), "0.00");
    assert_eq!(format_fixed(1234.0, 0), "1234");
}

#[test]
fn tick_count_option_changes_density() {
    let sparse = Axis::compute(
        AxisId::X,
        AxisOptions::default().with_ticks(TicksOption::Count(2.0)),
        DataExtent::EMPTY.include(0.0, 10.0),
        true,
        Viewport::new(600, 400),
    );
    let dense = Axis::compute(
        AxisId::X,
        AxisOptions::default().with_ticks(TicksOption::Count(20.0)),
        DataExtent::EMPTY.include(0.0, 10.0),
        true,
        Viewport::new(600, 400),
    );
    assert!(sparse.ticks.len() < dense.ticks.len());
}

#[test]
fn zero_tick_count_disables_ticks() {
    let axis = Axis::compute(
        AxisId::Y,
        AxisOptions::default().with_ticks(TicksOption::Count(0.0)),
        DataExtent::EMPTY.include(0.0, 10.0),
        true,
        Viewport::new(600, 400),
    );
    assert!(axis.ticks.is_empty());
}

#[test]
fn generator_receives_axis_range() {
    let generator = TickGenerator::new(|range| {
        vec![
            TickSpec::Labeled(range.from, "start".to_owned()),
            TickSpec::Labeled(range.to, "end".to_owned()),
        ]
    });
    let axis = Axis::compute(
        AxisId::X,
        AxisOptions::default().with_tick_generator(generator),
        DataExtent::EMPTY.include(2.0, 8.0),
        true,
        Viewport::new(600, 400),
    );
    assert_eq!(axis.ticks.len(), 2);
    assert_eq!(axis.ticks[0].value, 2.0);
    assert_eq!(axis.ticks[0].label, "start");
    assert_eq!(axis.ticks[1].value, 8.0);
}

#[test]
fn two_day_span_ticks_every_eight_hours() {
    let min = utc_millis(2024, 1, 1, 0);
    let max = utc_millis(2024, 1, 3, 0);
    let axis = time_axis(AxisOptions::default(), min, max);

    assert_eq!(
        axis.tick_size,
        TickStep::Calendar {
            count: 8.0,
            unit: TimeUnit::Hour
        }
    );
    assert_eq!(axis.ticks.len(), 7);
    assert_eq!(axis.ticks[0].value, min);
    assert_eq!(axis.ticks[1].value, utc_millis(2024, 1, 1, 8));
    assert_eq!(axis.ticks[0].label, "Jan 1 0:00");
    assert_eq!(axis.ticks[6].value, max);
}

#[test]
fn half_year_span_ticks_on_month_starts() {
    let min = utc_millis(2024, 1, 15, 0);
    let max = utc_millis(2024, 7, 15, 0);
    let axis = time_axis(AxisOptions::default(), min, max);

    let expected: Vec<f64> = (1..=8).map(|month| utc_millis(2024, month, 1, 0)).collect();
    let values: Vec<f64> = axis.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, expected);
    let labels: Vec<&str> = axis.ticks.iter().take(3).map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, ["Jan", "Feb", "Mar"]);
}

#[test]
fn calendar_tick_size_overrides_choice() {
    let min = utc_millis(2020, 1, 1, 0);
    let max = utc_millis(2024, 1, 1, 0);
    let mut options = AxisOptions::default();
    options.tick_size = Some(TickSizeOption::Calendar(2.0, TimeUnit::Year));
    let axis = time_axis(options, min, max);

    let values: Vec<f64> = axis.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(
        values,
        vec![
            utc_millis(2020, 1, 1, 0),
            utc_millis(2022, 1, 1, 0),
            utc_millis(2024, 1, 1, 0)
        ]
    );
    assert_eq!(axis.ticks[1].label, "2022");
}

#[test]
fn timeformat_overrides_default_labels() {
    let min = utc_millis(2024, 1, 1, 0);
    let max = utc_millis(2024, 1, 3, 0);
    let options = AxisOptions {
        timeformat: Some("%d/%m".to_owned()),
        ..AxisOptions::default()
    };
    let axis = time_axis(options, min, max);
    assert_eq!(axis.ticks[0].label, "1/1");
}

#[test]
fn literal_percent_and_unknown_escapes_survive() {
    let millis = utc_millis(2024, 6, 1, 13);
    assert_eq!(format_date(millis, "100%% %q", None), "100% %q");
    assert_eq!(format_date(millis, "%H:%M", None), "13:00");
}

fn utc_dates(ticks: &[f64]) -> Vec<String> {
    ticks
        .iter()
        .map(|&millis| format_date(millis, "%y-%m-%d %H:%M", None))
        .collect()
}

#[test]
fn half_month_ticks_split_each_month_and_drop_the_hour_drift() {
    let ticks = plot_rs::core::time_ticks::generate(
        utc_millis(2024, 1, 1, 0),
        utc_millis(2024, 3, 20, 0),
        0.5,
        TimeUnit::Month,
    );
    assert_eq!(
        utc_dates(&ticks),
        vec![
            "2024-1-1 00:00",
            "2024-1-16 00:00",
            "2024-2-1 00:00",
            "2024-2-15 00:00",
            "2024-3-1 00:00",
            "2024-3-16 00:00",
            "2024-4-1 00:00",
        ]
    );
}

#[test]
fn fractional_month_counts_above_one_step_whole_months() {
    let ticks = plot_rs::core::time_ticks::generate(
        utc_millis(2024, 1, 1, 0),
        utc_millis(2024, 3, 20, 0),
        1.5,
        TimeUnit::Month,
    );
    assert_eq!(
        utc_dates(&ticks),
        vec!["2024-1-1 00:00", "2024-2-1 00:00", "2024-3-1 00:00", "2024-4-1 00:00"]
    );
}
