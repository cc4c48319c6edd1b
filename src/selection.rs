/// Selection tracking for checkbox tables
///
/// The tracker holds only the ordered set of checked ids. The display summary
/// is recomputed from that set and the dataset each time it is requested, so
/// there is nothing to keep in sync when the view is filtered or sorted.

use crate::dataset::Dataset;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// One line of the "selected products" summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    pub id: i64,
    pub name: String,
    pub title: String,
}

impl fmt::Display for SelectionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} , {} , {}", self.id, self.name, self.title)
    }
}

/// Ordered set of checked record ids.
///
/// A disabled tracker (non-selectable table) stays empty forever.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    enabled: bool,
    ids: IndexSet<i64>,
}

impl SelectionTracker {
    pub fn new(enabled: bool) -> Self {
        SelectionTracker {
            enabled,
            ids: IndexSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip `id` in or out of the selection.
    ///
    /// Returns `Some(true)` if the id is now selected, `Some(false)` if it was
    /// removed, and `None` when the toggle was ignored (tracker disabled or id
    /// unknown to `dataset`).
    pub fn toggle(&mut self, id: i64, dataset: &Dataset) -> Option<bool> {
        if !self.enabled {
            log::debug!("selection disabled, ignoring toggle of id {}", id);
            return None;
        }
        if !dataset.contains(id) {
            log::warn!("ignoring selection toggle for unknown id {}", id);
            return None;
        }

        if self.ids.shift_remove(&id) {
            Some(false)
        } else {
            self.ids.insert(id);
            Some(true)
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in the order they were checked.
    pub fn ids(&self) -> &IndexSet<i64> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Uncheck everything. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.ids.is_empty();
        self.ids.clear();
        had_any
    }

    /// Summary lines for the selected records, in selection order.
    pub fn summary(&self, dataset: &Dataset) -> Vec<SelectionEntry> {
        self.ids
            .iter()
            .filter_map(|&id| dataset.get(id))
            .map(|record| SelectionEntry {
                id: record.id(),
                name: record.display_text("name"),
                title: record.display_text("title"),
            })
            .collect()
    }
}
