//! Calendar-aware ticks for time-mode axes.
//!
//! Axis values are UTC epoch milliseconds. Sub-month steps advance by fixed
//! durations; month and year steps walk the calendar so ticks stay on month
//! boundaries.

use chrono::{DateTime, Datelike, Months, TimeDelta, TimeZone, Timelike, Utc};
use tracing::warn;

use crate::config::{AxisOptions, TickSizeOption, TimeUnit};
use crate::core::axis::{floor_in_base, TickStep, MAX_GENERATED_TICKS};

pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Candidate spacings, finest first.
pub const TIME_STEPS: [(f64, TimeUnit); 25] = [
    (1.0, TimeUnit::Second),
    (2.0, TimeUnit::Second),
    (5.0, TimeUnit::Second),
    (10.0, TimeUnit::Second),
    (30.0, TimeUnit::Second),
    (1.0, TimeUnit::Minute),
    (2.0, TimeUnit::Minute),
    (5.0, TimeUnit::Minute),
    (10.0, TimeUnit::Minute),
    (30.0, TimeUnit::Minute),
    (1.0, TimeUnit::Hour),
    (2.0, TimeUnit::Hour),
    (4.0, TimeUnit::Hour),
    (8.0, TimeUnit::Hour),
    (12.0, TimeUnit::Hour),
    (1.0, TimeUnit::Day),
    (2.0, TimeUnit::Day),
    (3.0, TimeUnit::Day),
    (0.25, TimeUnit::Month),
    (0.5, TimeUnit::Month),
    (1.0, TimeUnit::Month),
    (2.0, TimeUnit::Month),
    (3.0, TimeUnit::Month),
    (6.0, TimeUnit::Month),
    (1.0, TimeUnit::Year),
];

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;

/// Picks the table entry whose span best matches `delta` milliseconds per tick.
///
/// An entry is taken once `delta` falls below the midpoint to the next entry,
/// provided it is not finer than `minTickSize`. Year steps snap to
/// 1/2/5/10 times a power of ten. A `tickSize` option overrides the choice.
#[must_use]
pub fn choose_step(delta: f64, options: &AxisOptions) -> TickStep {
    let min_size = options.min_tick_size.map_or(0.0, TickSizeOption::nominal);

    let mut index = 0;
    while index < TIME_STEPS.len() - 1 {
        let (count, unit) = TIME_STEPS[index];
        let (next_count, next_unit) = TIME_STEPS[index + 1];
        let current = count * unit.millis();
        let next = next_count * next_unit.millis();
        if delta < (current + next) / 2.0 && current >= min_size {
            break;
        }
        index += 1;
    }

    let (mut count, unit) = TIME_STEPS[index];
    if unit == TimeUnit::Year {
        let years = delta / TimeUnit::Year.millis();
        let magnitude = 10f64.powf(years.log10().floor());
        let norm = years / magnitude;
        count = if norm < 1.5 {
            1.0
        } else if norm < 3.0 {
            2.0
        } else if norm < 7.5 {
            5.0
        } else {
            10.0
        } * magnitude;
        // Years advance by whole calendar years.
        count = count.round().max(1.0);
    }

    match options.tick_size {
        Some(TickSizeOption::Calendar(count, unit)) => TickStep::Calendar { count, unit },
        Some(TickSizeOption::Fixed(size)) => TickStep::Numeric(size),
        None => TickStep::Calendar { count, unit },
    }
}

fn to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.floor() as i64)
}

fn to_millis(date: DateTime<Utc>) -> f64 {
    date.timestamp_millis() as f64
}

/// Floors `min` to the tick unit and clears the finer calendar fields.
fn floored_start(min: f64, count: f64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    let date = to_datetime(min)?;
    let step = count * unit.millis();

    let mut year = date.year();
    let mut month0 = date.month0();
    let mut day = date.day();
    let mut hour = date.hour();
    let mut minute = date.minute();
    let mut second = date.second();

    match unit {
        TimeUnit::Second => second = floor_in_base(f64::from(second), count) as u32,
        TimeUnit::Minute => minute = floor_in_base(f64::from(minute), count) as u32,
        TimeUnit::Hour => hour = floor_in_base(f64::from(hour), count) as u32,
        TimeUnit::Month => month0 = floor_in_base(f64::from(month0), count) as u32,
        TimeUnit::Year => year = floor_in_base(f64::from(year), count) as i32,
        TimeUnit::Day => {}
    }

    if step >= MINUTE_MS {
        second = 0;
    }
    if step >= HOUR_MS {
        minute = 0;
    }
    if step >= DAY_MS {
        hour = 0;
    }
    if step >= DAY_MS * 4.0 {
        day = 1;
    }
    if step >= TimeUnit::Year.millis() {
        month0 = 0;
    }

    Utc.with_ymd_and_hms(year, month0 + 1, day, hour, minute, second)
        .single()
}

/// Splits the month containing `date` by `fraction`, carrying hour drift.
fn advance_fractional_month(
    date: DateTime<Utc>,
    fraction: f64,
    carry_hours: &mut u32,
) -> Option<DateTime<Utc>> {
    let month_start = date.with_day(1)?;
    let month_end = month_start.checked_add_months(Months::new(1))?;
    let month_ms = (month_end - month_start).num_milliseconds() as f64;

    let next_ms = to_millis(date) + f64::from(*carry_hours) * HOUR_MS + month_ms * fraction;
    let next = to_datetime(next_ms)?;
    *carry_hours = next.hour();
    next.with_hour(0)
}

/// Calendar tick values from the floored `min` until one reaches `max`.
#[must_use]
pub fn generate(min: f64, max: f64, count: f64, unit: TimeUnit) -> Vec<f64> {
    if !count.is_finite() || count <= 0.0 {
        return Vec::new();
    }
    let Some(mut current) = floored_start(min, count, unit) else {
        warn!(min, "time axis start is outside the supported date range");
        return Vec::new();
    };

    let step_ms = (count * unit.millis()) as i64;
    let whole = count.trunc().max(1.0) as u32;
    let mut carry_hours = 0;
    let mut ticks: Vec<f64> = Vec::new();

    loop {
        let value = to_millis(current);
        if ticks.last().is_some_and(|&previous| value <= previous) {
            break;
        }
        ticks.push(value);
        if value >= max {
            break;
        }
        if ticks.len() >= MAX_GENERATED_TICKS {
            warn!(min, max, count, ?unit, "time tick generation capped");
            break;
        }

        let next = match unit {
            TimeUnit::Month if count < 1.0 => {
                advance_fractional_month(current, count, &mut carry_hours)
            }
            TimeUnit::Month => current.checked_add_months(Months::new(whole)),
            TimeUnit::Year => current.checked_add_months(Months::new(whole.saturating_mul(12))),
            _ => current.checked_add_signed(TimeDelta::milliseconds(step_ms)),
        };
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    ticks
}

/// Default label format for a tick spacing and visible span.
#[must_use]
pub fn default_format(step_ms: f64, span_ms: f64) -> &'static str {
    if step_ms < MINUTE_MS {
        "%h:%M:%S"
    } else if step_ms < DAY_MS {
        if span_ms < 2.0 * DAY_MS {
            "%h:%M"
        } else {
            "%b %d %h:%M"
        }
    } else if step_ms < TimeUnit::Month.millis() {
        "%b %d"
    } else if step_ms < TimeUnit::Year.millis() {
        if span_ms < TimeUnit::Year.millis() {
            "%b"
        } else {
            "%b %y"
        }
    } else {
        "%y"
    }
}

/// Tick label for a time axis: `timeformat` when set, otherwise by spacing.
#[must_use]
pub fn default_label(value: f64, step: TickStep, span: f64, options: &AxisOptions) -> String {
    let format = options
        .timeformat
        .as_deref()
        .unwrap_or_else(|| default_format(step.nominal(), span));
    format_date(value, format, options.month_names.as_deref())
}

/// Formats epoch milliseconds (UTC).
///
/// Supported escapes: `%h` hours, `%H` zero-padded hours, `%M` minutes,
/// `%S` seconds, `%d` day of month, `%m` month number, `%y` full year,
/// `%b` month name, `%%` a literal percent.
#[must_use]
pub fn format_date(millis: f64, format: &str, month_names: Option<&[String]>) -> String {
    let Some(date) = to_datetime(millis) else {
        return String::new();
    };

    let mut out = String::with_capacity(format.len() + 8);
    let mut escape = false;
    for ch in format.chars() {
        if !escape {
            if ch == '%' {
                escape = true;
            } else {
                out.push(ch);
            }
            continue;
        }
        escape = false;
        match ch {
            'h' => out.push_str(&date.hour().to_string()),
            'H' => out.push_str(&format!("{:02}", date.hour())),
            'M' => out.push_str(&format!("{:02}", date.minute())),
            'S' => out.push_str(&format!("{:02}", date.second())),
            'd' => out.push_str(&date.day().to_string()),
            'm' => out.push_str(&date.month().to_string()),
            'y' => out.push_str(&date.year().to_string()),
            'b' => {
                let index = date.month0() as usize;
                let name = month_names
                    .and_then(|names| names.get(index))
                    .map_or(DEFAULT_MONTH_NAMES[index], String::as_str);
                out.push_str(name);
            }
            '%' => out.push('%'),
            other => {
                out.push('%');
                out.push(other);
            }
        }
    }
    if escape {
        out.push('%');
    }
    out
}
