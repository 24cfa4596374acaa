use serde::{Deserialize, Serialize};

use super::callbacks::{TickFormatter, TickGenerator};

/// Value interpretation of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Values are UTC epoch milliseconds and ticks follow the calendar.
    Time,
}

/// Calendar units used by time-mode tick sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Nominal unit length in milliseconds; months are 30 days, years 365.2425 days.
    #[must_use]
    pub fn millis(self) -> f64 {
        match self {
            TimeUnit::Second => 1_000.0,
            TimeUnit::Minute => 60_000.0,
            TimeUnit::Hour => 3_600_000.0,
            TimeUnit::Day => 86_400_000.0,
            TimeUnit::Month => 30.0 * 86_400_000.0,
            TimeUnit::Year => 365.2425 * 86_400_000.0,
        }
    }
}

/// One explicitly configured tick: a value with an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickSpec {
    Value(f64),
    Labeled(f64, String),
}

impl TickSpec {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            TickSpec::Value(value) | TickSpec::Labeled(value, _) => *value,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            TickSpec::Value(_) => None,
            TickSpec::Labeled(_, label) => Some(label),
        }
    }
}

/// Raw `ticks` option: a desired count or an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicksOption {
    Count(f64),
    List(Vec<TickSpec>),
}

/// Raw `tickSize` / `minTickSize` option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickSizeOption {
    Fixed(f64),
    Calendar(f64, TimeUnit),
}

impl TickSizeOption {
    /// Size in axis units, treating calendar sizes by nominal unit length.
    #[must_use]
    pub fn nominal(self) -> f64 {
        match self {
            TickSizeOption::Fixed(size) => size,
            TickSizeOption::Calendar(count, unit) => count * unit.millis(),
        }
    }
}

/// Tick configuration resolved once from the raw options.
#[derive(Debug, Clone, PartialEq)]
pub enum TickSource {
    /// Generate ticks; `Some(n)` requests roughly `n` of them.
    Auto(Option<f64>),
    Fixed(Vec<TickSpec>),
    Generator(TickGenerator),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    pub mode: Option<AxisMode>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub autoscale_margin: Option<f64>,
    pub ticks: Option<TicksOption>,
    pub tick_size: Option<TickSizeOption>,
    pub min_tick_size: Option<TickSizeOption>,
    pub tick_decimals: Option<i32>,
    pub label_width: Option<f64>,
    pub label_height: Option<f64>,
    pub month_names: Option<Vec<String>>,
    pub timeformat: Option<String>,
    #[serde(skip)]
    pub tick_formatter: Option<TickFormatter>,
    #[serde(skip)]
    pub tick_generator: Option<TickGenerator>,
}

impl AxisOptions {
    #[must_use]
    pub fn with_autoscale_margin(mut self, margin: Option<f64>) -> Self {
        self.autoscale_margin = margin;
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TicksOption) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_tick_formatter(mut self, formatter: TickFormatter) -> Self {
        self.tick_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_tick_generator(mut self, generator: TickGenerator) -> Self {
        self.tick_generator = Some(generator);
        self
    }

    #[must_use]
    pub fn is_time(&self) -> bool {
        self.mode == Some(AxisMode::Time)
    }

    #[must_use]
    pub fn tick_source(&self) -> TickSource {
        if let Some(generator) = &self.tick_generator {
            return TickSource::Generator(generator.clone());
        }
        match &self.ticks {
            None => TickSource::Auto(None),
            Some(TicksOption::Count(count)) => TickSource::Auto(Some(*count)),
            Some(TicksOption::List(list)) => TickSource::Fixed(list.clone()),
        }
    }
}
