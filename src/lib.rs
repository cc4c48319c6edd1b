/// DataTable - Interactive Table View Engine
///
/// Holds a collection of records and derives what a table widget shows after
/// each interaction: rows filtered by a text query on one field, sorted by a
/// clicked column, with an optional checkbox selection that survives both.
///
/// The engine does no painting. It emits `ViewSnapshot`s to `Renderer`s and
/// accepts `TableEvent`s back, so any front end can sit on top of it.

pub mod value;
pub mod record;
pub mod dataset;
pub mod error;
pub mod view;
pub mod selection;
pub mod changeset;
pub mod snapshot;
pub mod renderer;
pub mod messages;
pub mod config;
pub mod state;

pub use value::FieldValue;
pub use record::{Record, ID_FIELD};
pub use dataset::Dataset;
pub use error::{DatasetError, RecordError};
pub use view::{FieldFilter, SortDirection, SortState, WorkingSet};
pub use selection::{SelectionEntry, SelectionTracker};
pub use changeset::{Changeset, ViewChange};
pub use snapshot::{MenuAnchor, RowView, ViewSnapshot};
pub use renderer::{JsonLinesRenderer, Renderer};
pub use messages::{RenderMessage, TableEvent};
pub use config::TableConfig;
pub use state::TableState;
