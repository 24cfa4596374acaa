use std::fmt;
use std::sync::Arc;

use crate::config::{Marking, TickSpec};
use crate::core::{Axis, AxisRange, Series};

/// Shared, comparable-by-identity wrapper around a user callback.
///
/// Callbacks cannot be serialized, so option structs skip them during
/// (de)serialization and attach them through builder methods instead.
pub struct Callback<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Callback<F> {
    #[must_use]
    pub fn from_arc(inner: Arc<F>) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn get(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> PartialEq for Callback<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

pub type TickFormatterFn = dyn Fn(f64, &Axis) -> String + Send + Sync;
pub type TickGeneratorFn = dyn Fn(AxisRange) -> Vec<TickSpec> + Send + Sync;
pub type MarkingsGeneratorFn = dyn Fn(&MarkingsContext) -> Vec<Marking> + Send + Sync;
pub type LabelFormatterFn = dyn Fn(&str, &Series) -> String + Send + Sync;

/// Formats one tick value into its label.
pub type TickFormatter = Callback<TickFormatterFn>;
/// Replaces automatic tick generation for an axis.
pub type TickGenerator = Callback<TickGeneratorFn>;
/// Produces marking ranges from the current axis bounds.
pub type MarkingsGenerator = Callback<MarkingsGeneratorFn>;
/// Rewrites a legend label.
pub type LabelFormatter = Callback<LabelFormatterFn>;

impl TickFormatter {
    pub fn new(f: impl Fn(f64, &Axis) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl TickGenerator {
    pub fn new(f: impl Fn(AxisRange) -> Vec<TickSpec> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl MarkingsGenerator {
    pub fn new(f: impl Fn(&MarkingsContext) -> Vec<Marking> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl LabelFormatter {
    pub fn new(f: impl Fn(&str, &Series) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

/// Axis bounds handed to a markings generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkingsContext {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub xaxis: AxisRange,
    pub yaxis: AxisRange,
    pub x2axis: AxisRange,
    pub y2axis: AxisRange,
}
