/// Message types exchanged with a renderer
use serde::{Deserialize, Serialize};

use crate::snapshot::ViewSnapshot;

/// User intent reported by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum TableEvent {
    /// A sortable column header was clicked
    HeaderActivated { column: String },

    /// A key was released in the search box
    FilterChanged { field: String, query: String },

    /// A different field was picked in the filter dropdown
    FilterFieldChanged { field: String },

    /// A row checkbox changed
    SelectionToggled { id: i64 },
}

impl TableEvent {
    /// Parse one JSON-encoded event.
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

/// Messages sent to the renderer
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum RenderMessage {
    /// Full view after an interaction
    Snapshot(ViewSnapshot),

    /// An inbound message could not be understood
    Error { message: String },
}
