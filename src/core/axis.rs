use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::{AxisOptions, PlotOptions, TickSizeOption, TickSource, TimeUnit};
use crate::core::scale::{AxisDirection, AxisTransform};
use crate::core::time_ticks;
use crate::core::{AxisId, AxisRange, Viewport};

/// Pixels of axis length per automatically generated tick.
pub const HORIZONTAL_PX_PER_TICK: f64 = 100.0;
pub const VERTICAL_PX_PER_TICK: f64 = 60.0;

/// Upper bound on generated ticks; pathological tick sizes stop here.
pub const MAX_GENERATED_TICKS: usize = 1_000;

/// Tick spacing: a plain step, or a calendar step in time mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickStep {
    Numeric(f64),
    Calendar { count: f64, unit: TimeUnit },
}

impl TickStep {
    /// Step in axis units; calendar steps use nominal unit lengths.
    #[must_use]
    pub fn nominal(self) -> f64 {
        match self {
            TickStep::Numeric(size) => size,
            TickStep::Calendar { count, unit } => count * unit.millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Observed min/max of the data bound to an axis; empty is `(+inf, -inf)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataExtent {
    pub min: f64,
    pub max: f64,
}

impl DataExtent {
    pub const EMPTY: DataExtent = DataExtent {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    #[must_use]
    pub fn include(self, min: f64, max: f64) -> Self {
        Self {
            min: self.min.min(min),
            max: self.max.max(max),
        }
    }

    #[must_use]
    pub fn has_data(self) -> bool {
        self.min.is_finite()
    }
}

impl Default for DataExtent {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One logical axis with its resolved range, ticks and layout metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: AxisId,
    pub options: AxisOptions,
    pub used: bool,
    pub datamin: f64,
    pub datamax: f64,
    pub min: f64,
    pub max: f64,
    pub tick_size: TickStep,
    pub tick_decimals: usize,
    pub ticks: Vec<Tick>,
    pub label_width: f64,
    pub label_height: f64,
    pub scale: f64,
}

impl Axis {
    #[must_use]
    pub fn new(id: AxisId, options: AxisOptions) -> Self {
        Self {
            id,
            options,
            used: false,
            datamin: f64::INFINITY,
            datamax: f64::NEG_INFINITY,
            min: 0.0,
            max: 1.0,
            tick_size: TickStep::Numeric(1.0),
            tick_decimals: 0,
            ticks: Vec::new(),
            label_width: 0.0,
            label_height: 0.0,
            scale: 1.0,
        }
    }

    /// Builds an axis with range and ticks resolved; layout metrics stay unset.
    #[must_use]
    pub fn compute(
        id: AxisId,
        options: AxisOptions,
        extent: DataExtent,
        used: bool,
        viewport: Viewport,
    ) -> Self {
        let mut axis = Self::new(id, options);
        axis.datamin = extent.min;
        axis.datamax = extent.max;
        axis.used = used;
        axis.set_range();
        axis.prepare_tick_generation(viewport);
        axis.set_ticks();
        // Secondary axes only carry labels once a series is bound to them.
        if !used && matches!(id, AxisId::X2 | AxisId::Y2) {
            axis.ticks.clear();
        }
        trace!(
            axis = ?id,
            min = axis.min,
            max = axis.max,
            ticks = axis.ticks.len(),
            "computed axis"
        );
        axis
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.id.is_horizontal()
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        AxisRange {
            from: self.min,
            to: self.max,
        }
    }

    #[must_use]
    pub fn transform(&self) -> AxisTransform {
        let direction = if self.is_horizontal() {
            AxisDirection::Forward
        } else {
            AxisDirection::Inverted
        };
        AxisTransform::from_parts(self.min, self.max, self.scale, direction)
    }

    /// Data value to plot-area pixel.
    #[must_use]
    pub fn p2c(&self, value: f64) -> f64 {
        self.transform().p2c(value)
    }

    /// Plot-area pixel to data value.
    #[must_use]
    pub fn c2p(&self, pixel: f64) -> f64 {
        self.transform().c2p(pixel)
    }

    fn explicit_min(&self) -> Option<f64> {
        self.options.min.filter(|value| value.is_finite())
    }

    fn explicit_max(&self) -> Option<f64> {
        self.options.max.filter(|value| value.is_finite())
    }

    /// Resolves `min`/`max` from explicit options, data extent and autoscale margin.
    ///
    /// Always leaves `min < max`.
    pub fn set_range(&mut self) {
        let explicit_min = self.explicit_min();
        let explicit_max = self.explicit_max();
        let has_data = self.datamin.is_finite() && self.datamax.is_finite();

        let mut min = explicit_min.unwrap_or(self.datamin);
        let mut max = explicit_max.unwrap_or(self.datamax);
        if !min.is_finite() {
            min = 0.0;
        }
        if !max.is_finite() {
            max = 1.0;
        }

        let delta = max - min;
        if delta == 0.0 {
            let widen = if max == 0.0 { 1.0 } else { max.abs() * 0.01 };
            if explicit_min.is_none() {
                min -= widen;
            }
            if explicit_max.is_none() || explicit_min.is_some() {
                max += widen;
            }
        } else if let Some(margin) = self.options.autoscale_margin.filter(|m| m.is_finite()) {
            if explicit_min.is_none() {
                min -= delta * margin;
                // Keep non-negative data from dipping below zero.
                if has_data && min < 0.0 && self.datamin >= 0.0 {
                    min = 0.0;
                }
            }
            if explicit_max.is_none() {
                max += delta * margin;
                if has_data && max > 0.0 && self.datamax <= 0.0 {
                    max = 0.0;
                }
            }
        }

        if !(max > min) {
            warn!(axis = ?self.id, min, max, "axis range inverted or collapsed, widening");
            max = min + if min == 0.0 { 1.0 } else { min.abs() * 0.01 };
        }

        self.min = min;
        self.max = max;
    }

    /// Desired tick count derived from options or canvas length.
    #[must_use]
    pub fn desired_tick_count(&self, viewport: Viewport) -> f64 {
        if let TickSource::Auto(Some(count)) = self.options.tick_source() {
            if count > 0.0 {
                return count;
            }
        }
        if self.is_horizontal() {
            f64::from(viewport.width) / HORIZONTAL_PX_PER_TICK
        } else {
            f64::from(viewport.height) / VERTICAL_PX_PER_TICK
        }
    }

    /// Chooses tick size and label decimals for the current range.
    pub fn prepare_tick_generation(&mut self, viewport: Viewport) {
        let count = self.desired_tick_count(viewport);
        let delta = (self.max - self.min) / count;

        if self.options.is_time() {
            self.tick_size = time_ticks::choose_step(delta, &self.options);
            self.tick_decimals = 0;
            return;
        }

        let (size, decimals) = nice_numeric_step(delta, self.options.tick_decimals);
        let mut size = size;
        if let Some(min_size) = self.options.min_tick_size.map(TickSizeOption::nominal) {
            if size < min_size {
                size = min_size;
            }
        }
        if let Some(TickSizeOption::Fixed(fixed)) = self.options.tick_size {
            size = fixed;
        }
        self.tick_size = TickStep::Numeric(size);
        self.tick_decimals = decimals;
    }

    /// Generates (or adopts) ticks and labels, snapping margin-padded bounds to them.
    pub fn set_ticks(&mut self) {
        let raw: Vec<(f64, Option<String>)> = match self.options.tick_source() {
            TickSource::Auto(Some(count)) if count <= 0.0 => Vec::new(),
            TickSource::Auto(_) => self
                .generate_tick_values()
                .into_iter()
                .map(|value| (value, None))
                .collect(),
            TickSource::Fixed(list) => list
                .iter()
                .map(|tick| (tick.value(), tick.label().map(str::to_owned)))
                .collect(),
            TickSource::Generator(generator) => generator.get()(self.range())
                .iter()
                .map(|tick| (tick.value(), tick.label().map(str::to_owned)))
                .collect(),
        };

        let ticks: Vec<Tick> = raw
            .into_iter()
            .filter(|(value, _)| value.is_finite())
            .map(|(value, label)| Tick {
                value,
                label: label.unwrap_or_else(|| self.format_tick(value)),
            })
            .collect();

        if self.options.autoscale_margin.is_some() && !ticks.is_empty() {
            if self.explicit_min().is_none() {
                self.min = self.min.min(ticks[0].value);
            }
            if self.explicit_max().is_none() && ticks.len() > 1 {
                self.max = self.max.max(ticks[ticks.len() - 1].value);
            }
        }
        self.ticks = ticks;
    }

    /// Automatic tick values covering `[min, max]`, strictly increasing.
    #[must_use]
    pub fn generate_tick_values(&self) -> Vec<f64> {
        match self.tick_size {
            TickStep::Calendar { count, unit } => {
                time_ticks::generate(self.min, self.max, count, unit)
            }
            TickStep::Numeric(size) => generate_numeric_ticks(self.min, self.max, size),
        }
    }

    /// Label for one tick value using the configured or default formatter.
    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        if let Some(formatter) = &self.options.tick_formatter {
            return formatter.get()(value, self);
        }
        if self.options.is_time() {
            return time_ticks::default_label(value, self.tick_size, self.max - self.min, &self.options);
        }
        format_fixed(value, self.tick_decimals)
    }
}

/// Picks a 1/2/2.5/5/10 step for `delta` and the decimals needed to print it.
///
/// `max_decimals` caps the decimals and disables the 2.5 step when it would
/// need more precision than allowed.
#[must_use]
pub fn nice_numeric_step(delta: f64, max_decimals: Option<i32>) -> (f64, usize) {
    if !delta.is_finite() || delta <= 0.0 {
        return (1.0, max_decimals.unwrap_or(0).max(0) as usize);
    }

    let mut dec = -(delta.log10().floor() as i32);
    if let Some(max_dec) = max_decimals {
        if dec > max_dec {
            dec = max_dec;
        }
    }

    let magnitude = 10f64.powi(-dec);
    let norm = delta / magnitude;
    let size = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        if norm > 2.25 && max_decimals.is_none_or(|max_dec| dec + 1 <= max_dec) {
            dec += 1;
            2.5
        } else {
            2.0
        }
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };

    let decimals = max_decimals.unwrap_or(dec).max(0) as usize;
    (size * magnitude, decimals)
}

/// `base * floor(value / base)`.
#[must_use]
pub fn floor_in_base(value: f64, base: f64) -> f64 {
    base * (value / base).floor()
}

/// Steps from the floored `min` until a tick reaches `max` or stops progressing.
#[must_use]
pub fn generate_numeric_ticks(min: f64, max: f64, size: f64) -> Vec<f64> {
    if !size.is_finite() || size <= 0.0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let start = floor_in_base(min, size);
    let mut ticks: Vec<f64> = Vec::new();
    let mut index = 0u32;
    loop {
        // `+ 0.0` folds negative zero so labels never read "-0".
        let value = start + f64::from(index) * size + 0.0;
        if ticks.last().is_some_and(|&previous| value <= previous) {
            break;
        }
        ticks.push(value);
        if value >= max {
            break;
        }
        if ticks.len() >= MAX_GENERATED_TICKS {
            warn!(min, max, size, "tick generation capped");
            break;
        }
        index += 1;
    }
    ticks
}

/// Fixed-point rendering of `value` with `decimals` digits.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    // Rounding tiny negatives yields "-0.00"; print it unsigned.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

/// The four axes of a plot, indexable by [`AxisId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    axes: [Axis; 4],
}

impl Axes {
    #[must_use]
    pub fn new(options: &PlotOptions) -> Self {
        Self {
            axes: AxisId::ALL.map(|id| Axis::new(id, options.axis(id).clone())),
        }
    }

    #[must_use]
    pub fn from_axes(axes: [Axis; 4]) -> Self {
        Self { axes }
    }

    #[must_use]
    pub fn get(&self, id: AxisId) -> &Axis {
        &self.axes[id.index()]
    }

    pub fn get_mut(&mut self, id: AxisId) -> &mut Axis {
        &mut self.axes[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Axis> {
        self.axes.iter_mut()
    }
}

impl Index<AxisId> for Axes {
    type Output = Axis;

    fn index(&self, id: AxisId) -> &Self::Output {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_fixed, generate_numeric_ticks, nice_numeric_step};

    #[test]
    fn step_snaps_to_two_and_a_half_when_decimals_allow() {
        let (size, decimals) = nice_numeric_step(0.24, None);
        assert!((size - 0.25).abs() < 1e-12);
        assert_eq!(decimals, 2);
    }

    #[test]
    fn step_keeps_two_when_decimals_are_capped() {
        let (size, decimals) = nice_numeric_step(0.24, Some(1));
        assert!((size - 0.2).abs() < 1e-12);
        assert_eq!(decimals, 1);
    }

    #[test]
    fn ticks_start_at_floored_min_and_pass_max() {
        let ticks = generate_numeric_ticks(0.3, 2.1, 0.5);
        assert_eq!(ticks, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn negative_zero_labels_are_unsigned() {
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 1), "-1.5");
    }
}
