use serde::{Deserialize, Serialize};

/// Pointer event that added an automatic highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightTrigger {
    Hover,
    Click,
}

/// One emphasized datapoint; `auto` is `None` for pinned highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub series_index: usize,
    pub point_index: usize,
    pub auto: Option<HighlightTrigger>,
}

/// Ordered highlight list. Mutators report whether the overlay needs a redraw.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightSet {
    entries: Vec<Highlight>,
}

impl HighlightSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, series_index: usize, point_index: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.series_index == series_index && entry.point_index == point_index)
    }

    /// Adds a highlight; an existing auto entry becomes pinned when `auto` is `None`.
    pub fn highlight(
        &mut self,
        series_index: usize,
        point_index: usize,
        auto: Option<HighlightTrigger>,
    ) -> bool {
        match self.position(series_index, point_index) {
            None => {
                self.entries.push(Highlight {
                    series_index,
                    point_index,
                    auto,
                });
                true
            }
            Some(index) => {
                if auto.is_none() {
                    self.entries[index].auto = None;
                }
                false
            }
        }
    }

    pub fn unhighlight(&mut self, series_index: usize, point_index: usize) -> bool {
        match self.position(series_index, point_index) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.entries.is_empty();
        self.entries.clear();
        changed
    }

    /// Drops auto entries owned by `trigger` other than `item`, then highlights `item`.
    pub fn apply_auto(&mut self, trigger: HighlightTrigger, item: Option<(usize, usize)>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            entry.auto != Some(trigger) || item == Some((entry.series_index, entry.point_index))
        });
        let mut changed = self.entries.len() != before;
        if let Some((series_index, point_index)) = item {
            changed |= self.highlight(series_index, point_index, Some(trigger));
        }
        changed
    }

    #[must_use]
    pub fn contains(&self, series_index: usize, point_index: usize) -> bool {
        self.position(series_index, point_index).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightSet, HighlightTrigger};

    #[test]
    fn hover_moving_between_points_swaps_only_its_own_entries() {
        let mut set = HighlightSet::new();
        set.highlight(0, 0, None);
        assert!(set.apply_auto(HighlightTrigger::Hover, Some((0, 1))));
        assert!(set.apply_auto(HighlightTrigger::Hover, Some((0, 2))));
        assert!(set.contains(0, 0));
        assert!(!set.contains(0, 1));
        assert!(set.contains(0, 2));
        assert!(!set.apply_auto(HighlightTrigger::Hover, Some((0, 2))));
    }

    #[test]
    fn explicit_highlight_pins_an_auto_entry() {
        let mut set = HighlightSet::new();
        set.apply_auto(HighlightTrigger::Hover, Some((1, 3)));
        set.highlight(1, 3, None);
        set.apply_auto(HighlightTrigger::Hover, None);
        assert!(set.contains(1, 3));
    }
}
