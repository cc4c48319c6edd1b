/// DataTable Configuration

use serde::Deserialize;

/// Construction-time options for a `TableState`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Show row checkboxes and track a selection
    pub selectable: bool,
    /// Field the search box filters on before the user picks one
    pub filter_field: Option<String>,
}

impl TableConfig {
    pub fn selectable() -> Self {
        TableConfig {
            selectable: true,
            ..Self::default()
        }
    }

    pub fn with_filter_field(mut self, field: impl Into<String>) -> Self {
        self.filter_field = Some(field.into());
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
