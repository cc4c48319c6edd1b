/// View snapshots handed to renderers
///
/// A `ViewSnapshot` is an owned, immutable copy of everything a renderer
/// needs to paint the table: header columns, ordered rows with their checkbox
/// state, the sort arrow, the search box contents and the selection summary.

use crate::changeset::ViewChange;
use crate::record::Record;
use crate::selection::SelectionEntry;
use crate::view::{FieldFilter, SortState};
use serde::Serialize;

/// Rows in a table taller than this get upward-opening action menus at the
/// bottom of the table.
const MENU_FLIP_MIN_ROWS: usize = 6;
/// Number of trailing rows whose menu opens upward.
const MENU_FLIP_TAIL: usize = 3;

/// Which way a row's action dropdown opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAnchor {
    Below,
    Above,
}

impl MenuAnchor {
    /// Placement for the row at `index` in a table of `row_count` rows.
    pub fn for_row(index: usize, row_count: usize) -> Self {
        if row_count > MENU_FLIP_MIN_ROWS && index + MENU_FLIP_TAIL >= row_count {
            MenuAnchor::Above
        } else {
            MenuAnchor::Below
        }
    }
}

/// One painted row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub record: Record,
    /// Checkbox state; `None` when the table is not selectable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    pub menu_anchor: MenuAnchor,
}

/// Everything a renderer needs after one interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub generation: u64,
    pub changes: Vec<ViewChange>,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub sort: SortState,
    pub filter: FieldFilter,
    pub selectable: bool,
    pub selection: Vec<SelectionEntry>,
}

impl ViewSnapshot {
    pub fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.record.id()).collect()
    }

    /// True if the rows need repainting, not just the selection summary.
    pub fn rows_changed(&self) -> bool {
        self.changes.is_empty() || self.changes.iter().any(ViewChange::affects_rows)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
