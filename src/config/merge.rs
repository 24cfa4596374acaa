use serde_json::{Map, Value};
use tracing::debug;

use super::PlotOptions;
use crate::error::PlotResult;

/// Recursively merges `overlay` into `base`.
///
/// Objects merge key by key; arrays, scalars and explicit `null`s replace the
/// base value.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Object(source) if base.is_object() => {
            if let Value::Object(target) = base {
                for (key, value) in source {
                    match target.get_mut(&key) {
                        Some(existing) if existing.is_object() && value.is_object() => {
                            deep_merge(existing, value);
                        }
                        _ => {
                            target.insert(key, value);
                        }
                    }
                }
            }
        }
        other => *base = other,
    }
}

/// Rewrites deprecated option keys into their current locations.
///
/// Returns the names of the aliases that were applied.
pub fn apply_legacy_aliases(user: &mut Value) -> Vec<&'static str> {
    let mut applied = Vec::new();
    let Value::Object(root) = user else {
        return applied;
    };

    for axis_key in ["xaxis", "yaxis", "x2axis", "y2axis"] {
        if let Some(Value::Object(axis)) = root.get_mut(axis_key) {
            if let Some(no_ticks) = axis.remove("noTicks") {
                if axis.get("ticks").is_none_or(Value::is_null) {
                    axis.insert("ticks".to_owned(), no_ticks);
                    applied.push("noTicks");
                }
            }
        }
    }

    if let Some(Value::Object(grid)) = root.get_mut("grid") {
        if let Some(areas) = grid.remove("coloredAreas") {
            if !areas.is_null() {
                grid.insert("markings".to_owned(), areas);
                applied.push("grid.coloredAreas");
            }
        }
        if let Some(color) = grid.remove("coloredAreasColor") {
            if !color.is_null() {
                grid.insert("markingsColor".to_owned(), color);
                applied.push("grid.coloredAreasColor");
            }
        }
    }

    let mut series_overrides = Map::new();
    for (key, alias) in [("lines", "lines"), ("points", "points"), ("bars", "bars")] {
        if let Some(value) = root.remove(key) {
            if value.is_object() {
                series_overrides.insert(key.to_owned(), value);
                applied.push(alias);
            }
        }
    }
    if let Some(shadow) = root.remove("shadowSize") {
        if !shadow.is_null() {
            series_overrides.insert("shadowSize".to_owned(), shadow);
            applied.push("shadowSize");
        }
    }
    if !series_overrides.is_empty() {
        let series = root
            .entry("series")
            .or_insert_with(|| Value::Object(Map::new()));
        if !series.is_object() {
            *series = Value::Object(Map::new());
        }
        deep_merge(series, Value::Object(series_overrides));
    }

    applied
}

/// Builds plot options from user JSON layered over the defaults.
pub fn merge_options(mut user: Value) -> PlotResult<PlotOptions> {
    let mut merged = serde_json::to_value(PlotOptions::default())?;
    if user.is_null() {
        return Ok(serde_json::from_value(merged)?);
    }

    let applied = apply_legacy_aliases(&mut user);
    if !applied.is_empty() {
        debug!(aliases = ?applied, "applied legacy option aliases");
    }

    deep_merge(&mut merged, user);
    Ok(serde_json::from_value(merged)?)
}
