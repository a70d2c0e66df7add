//! Explorer session state: the materialized item set, the filtered view,
//! the navigation cursor, and active filters.
//!
//! One session owns one fully fetched dataset. All filtering runs client-side
//! over the owned items; the filtered view is a list of indices so item order
//! is always the server's.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::config::{DisplayConfig, StatKind};
use crate::item::DatasetItem;

/// One evaluated summary statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub label: String,
    pub value: usize,
}

/// Mutable exploration state over a loaded dataset.
pub struct ExplorerSession {
    config: DisplayConfig,
    items: Vec<DatasetItem>,
    /// Indices into `items` that pass the active filters, in item order.
    filtered: Vec<usize>,
    /// Cursor into `filtered`.
    cursor: usize,
    /// Field -> required value. Insertion order is the order filters were
    /// applied.
    active_filters: IndexMap<String, String>,
}

impl ExplorerSession {
    /// Create a session over a loaded item set. The filtered view starts as
    /// the whole set and the cursor at the first item.
    pub fn new(config: DisplayConfig, items: Vec<DatasetItem>) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            config,
            items,
            filtered,
            cursor: 0,
            active_filters: IndexMap::new(),
        }
    }

    /// The display configuration governing this session.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Total number of loaded items, ignoring filters.
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// Number of items passing the active filters.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// True when no items pass the active filters.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Zero-based cursor position within the filtered view.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor, or `None` when the filtered view is empty.
    pub fn current(&self) -> Option<&DatasetItem> {
        self.filtered.get(self.cursor).map(|&i| &self.items[i])
    }

    /// Move to the next item. Returns false at the end of the view.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous item. Returns false at the start of the view.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a position in the filtered view. Returns false when out of
    /// range.
    pub fn goto(&mut self, position: usize) -> bool {
        if position < self.filtered.len() {
            self.cursor = position;
            true
        } else {
            false
        }
    }

    /// Jump to a uniformly random item. Returns false when the view is
    /// empty.
    pub fn random(&mut self) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        self.cursor = fastrand::usize(0..self.filtered.len());
        true
    }

    /// Currently active filters, in application order.
    pub fn active_filters(&self) -> &IndexMap<String, String> {
        &self.active_filters
    }

    /// Require `field` to equal `value`. Rebuilds the filtered view and
    /// resets the cursor to the first item.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.active_filters.insert(field.into(), value.into());
        self.apply_filters();
    }

    /// Drop the filter on `field`, if any.
    pub fn clear_filter(&mut self, field: &str) {
        if self.active_filters.shift_remove(field).is_some() {
            self.apply_filters();
        }
    }

    /// Drop every active filter.
    pub fn clear_all_filters(&mut self) {
        if !self.active_filters.is_empty() {
            self.active_filters.clear();
            self.apply_filters();
        }
    }

    /// Distinct scalar values of a field across all loaded items, sorted.
    /// Items without a scalar value for the field contribute nothing.
    pub fn filter_values(&self, field: &str) -> Vec<String> {
        let values: BTreeSet<String> = self
            .items
            .iter()
            .filter_map(|item| item.scalar_string(field))
            .collect();
        values.into_iter().collect()
    }

    /// Evaluate the config's summary statistics over all loaded items.
    ///
    /// `count` is the item count; `unique_count` counts distinct scalar
    /// renderings of the stat's field, with missing values rendered as the
    /// empty string. Definitions without a usable field are skipped.
    pub fn stats(&self) -> Vec<StatValue> {
        self.config
            .stats
            .iter()
            .filter_map(|stat| {
                let value = match (stat.kind, stat.field.as_deref()) {
                    (StatKind::Count, _) => self.items.len(),
                    (StatKind::UniqueCount, Some(field)) => {
                        let distinct: BTreeSet<String> = self
                            .items
                            .iter()
                            .map(|item| item.scalar_string(field).unwrap_or_default())
                            .collect();
                        distinct.len()
                    }
                    (StatKind::UniqueCount, None) => return None,
                };
                Some(StatValue {
                    label: stat.label.clone(),
                    value,
                })
            })
            .collect()
    }

    /// Rebuild the filtered view from the active filters, preserving item
    /// order, and reset the cursor.
    fn apply_filters(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches_filters(item, &self.active_filters))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }
}

/// True when the item's scalar rendering of every filtered field equals the
/// required value. Fields without a scalar rendering never match.
fn matches_filters(item: &DatasetItem, filters: &IndexMap<String, String>) -> bool {
    filters.iter().all(|(field, required)| {
        item.scalar_string(field)
            .is_some_and(|value| value == *required)
    })
}
