/// Changeset - what changed between two renders
///
/// Every mutation of the table state records a `ViewChange`. When the state
/// renders, it drains the pending changes into the snapshot so that a
/// renderer can repaint only the parts that moved.
///
/// # Change Types
///
/// - `FilterChanged`: the filter field or query changed; rows were re-derived
/// - `SortChanged`: the sort column or direction changed; rows were reordered
/// - `SelectionToggled`: one checkbox flipped; rows are unchanged
/// - `SelectionCleared`: every checkbox was cleared
///
/// # Usage Pattern
///
/// 1. Table operations push `ViewChange` events
/// 2. Changes accumulate until the next render
/// 3. The render drains them and bumps the generation

use serde::Serialize;

/// A single change to the view state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ViewChange {
    FilterChanged {
        field: String,
        query: String,
        visible: usize,
    },

    SortChanged {
        column: String,
        direction: crate::view::SortDirection,
    },

    SelectionToggled {
        id: i64,
        selected: bool,
    },

    SelectionCleared,
}

impl ViewChange {
    /// Returns true if this change alters which rows are shown or their order.
    pub fn affects_rows(&self) -> bool {
        matches!(self, ViewChange::FilterChanged { .. } | ViewChange::SortChanged { .. })
    }
}

/// Pending changes since the last render
#[derive(Debug, Clone, Default)]
pub struct Changeset {
    changes: Vec<ViewChange>,
    /// Incremented every time the changeset is drained
    generation: u64,
}

impl Changeset {
    pub fn new() -> Self {
        Changeset {
            changes: Vec::new(),
            generation: 0,
        }
    }

    pub fn push(&mut self, change: ViewChange) {
        self.changes.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Take the pending changes and start a new generation.
    pub fn drain(&mut self) -> (u64, Vec<ViewChange>) {
        self.generation += 1;
        (self.generation, std::mem::take(&mut self.changes))
    }
}
