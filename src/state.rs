/// DataTable State Engine
///
/// `TableState` owns the dataset and derives the visible rows from it.
/// Three concerns meet here and must not corrupt each other:
///
/// - **Filter**: which records are visible.
/// - **Sort**: in what order.
/// - **Selection**: which records are checked, independent of both.
///
/// Sorting reorders the visible rows in place. The state also keeps a *base
/// order*: every dataset position, put through the same sequence of sorts.
/// A new filter is taken over the base order and then sorted again under the
/// current sort state, so clearing the query shows the whole dataset in the
/// current order and re-applying a filter always yields the same rows.
///
/// # Examples
///
/// ```
/// use datatable::{Dataset, Record, SortDirection, TableConfig, TableState};
///
/// let dataset = Dataset::new(vec![
///     Record::new(1).with("name", "b").with("price", 20),
///     Record::new(2).with("name", "a").with("price", 10),
///     Record::new(3).with("name", "c").with("price", 15),
/// ]).unwrap();
///
/// let mut table = TableState::new(dataset, TableConfig::selectable());
///
/// // A newly chosen column sorts descending first
/// assert_eq!(table.sort("price").ids(), vec![1, 3, 2]);
/// assert_eq!(table.sort_state().direction(), Some(SortDirection::Descending));
///
/// // Filtering keeps the current sort
/// assert_eq!(table.set_filter("name", "A").ids(), vec![2]);
///
/// table.toggle_selection(2);
/// assert!(table.is_selected(2));
/// ```

use crate::changeset::{Changeset, ViewChange};
use crate::config::TableConfig;
use crate::dataset::Dataset;
use crate::messages::TableEvent;
use crate::renderer::Renderer;
use crate::selection::{SelectionEntry, SelectionTracker};
use crate::snapshot::{MenuAnchor, RowView, ViewSnapshot};
use crate::view::{filter_positions, sort_positions, FieldFilter, SortState, WorkingSet};
use indexmap::IndexSet;

pub struct TableState {
    dataset: Dataset,
    /// Every dataset position, in current sort order
    base_order: Vec<usize>,
    /// Positions passing `filter`, in current sort order
    visible: Vec<usize>,
    sort: SortState,
    filter: FieldFilter,
    selection: SelectionTracker,
    changeset: Changeset,
    renderers: Vec<Box<dyn Renderer>>,
}

impl TableState {
    pub fn new(dataset: Dataset, config: TableConfig) -> Self {
        let base_order: Vec<usize> = (0..dataset.len()).collect();
        let filter = config
            .filter_field
            .map(FieldFilter::for_field)
            .unwrap_or_default();

        log::debug!(
            "table created: {} records, selectable={}",
            dataset.len(),
            config.selectable
        );

        TableState {
            visible: base_order.clone(),
            base_order,
            dataset,
            sort: SortState::Unsorted,
            filter,
            selection: SelectionTracker::new(config.selectable),
            changeset: Changeset::new(),
            renderers: Vec::new(),
        }
    }

    /// Filter on `field` containing `query`, ignoring case.
    ///
    /// An empty query shows every record. The current sort order is kept.
    pub fn set_filter(&mut self, field: &str, query: &str) -> WorkingSet<'_> {
        self.filter = FieldFilter::new(field, query);
        self.apply_filter();
        self.notify();
        self.working_set()
    }

    /// Switch the filter to `field` and clear the query.
    pub fn set_filter_field(&mut self, field: &str) -> WorkingSet<'_> {
        self.filter = FieldFilter::for_field(field);
        self.apply_filter();
        self.notify();
        self.working_set()
    }

    fn apply_filter(&mut self) {
        if let Some(field) = self.filter.field() {
            if !self.filter.is_identity() && !self.dataset.has_column(field) {
                log::debug!("filter field {:?} is not a dataset column", field);
            }
        }

        // Rows hidden by the previous filter may have separated rows that
        // compare unequal, so the sort is applied again over the new set.
        self.visible = filter_positions(&self.base_order, &self.dataset, &self.filter);
        sort_positions(&mut self.visible, &self.dataset, &self.sort);

        log::debug!(
            "filter {:?} ~ {:?}: {} of {} visible",
            self.filter.field().unwrap_or(""),
            self.filter.query(),
            self.visible.len(),
            self.dataset.len()
        );

        self.changeset.push(ViewChange::FilterChanged {
            field: self.filter.field().unwrap_or_default().to_string(),
            query: self.filter.query().to_string(),
            visible: self.visible.len(),
        });
    }

    /// Sort by `column`, or flip the direction if it is already the sort column.
    pub fn sort(&mut self, column: &str) -> WorkingSet<'_> {
        if !self.dataset.has_column(column) {
            log::debug!("sort column {:?} is not a dataset column", column);
        }

        self.sort = self.sort.next(column);
        sort_positions(&mut self.visible, &self.dataset, &self.sort);
        sort_positions(&mut self.base_order, &self.dataset, &self.sort);

        if let SortState::Sorted { column, direction } = &self.sort {
            log::debug!("sorted by {:?} {:?}", column, direction);
            self.changeset.push(ViewChange::SortChanged {
                column: column.clone(),
                direction: *direction,
            });
        }

        self.notify();
        self.working_set()
    }

    /// Check or uncheck a record.
    ///
    /// Ignored for ids not in the dataset and for non-selectable tables.
    /// Records hidden by the filter can still be toggled.
    pub fn toggle_selection(&mut self, id: i64) -> &IndexSet<i64> {
        if let Some(selected) = self.selection.toggle(id, &self.dataset) {
            log::debug!("id {} selected={}, {} selected", id, selected, self.selection.len());
            self.changeset.push(ViewChange::SelectionToggled { id, selected });
            self.notify();
        }
        self.selection.ids()
    }

    /// Uncheck every record.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.changeset.push(ViewChange::SelectionCleared);
            self.notify();
        }
    }

    /// Apply one renderer event.
    pub fn dispatch(&mut self, event: TableEvent) {
        log::debug!("dispatch {:?}", event);
        match event {
            TableEvent::HeaderActivated { column } => {
                self.sort(&column);
            }
            TableEvent::FilterChanged { field, query } => {
                self.set_filter(&field, &query);
            }
            TableEvent::FilterFieldChanged { field } => {
                self.set_filter_field(&field);
            }
            TableEvent::SelectionToggled { id } => {
                self.toggle_selection(id);
            }
        }
    }

    pub fn working_set(&self) -> WorkingSet<'_> {
        WorkingSet::new(&self.dataset, &self.visible)
    }

    /// Selected ids in the order they were checked.
    pub fn selection(&self) -> &IndexSet<i64> {
        self.selection.ids()
    }

    pub fn selection_summary(&self) -> Vec<SelectionEntry> {
        self.selection.summary(&self.dataset)
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(id)
    }

    pub fn is_selectable(&self) -> bool {
        self.selection.is_enabled()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn filter_state(&self) -> &FieldFilter {
        &self.filter
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Register a renderer. It receives a snapshot after every change.
    pub fn subscribe<R>(&mut self, renderer: R)
    where
        R: Renderer + 'static,
    {
        self.renderers.push(Box::new(renderer));
    }

    /// Render the current view to every registered renderer.
    pub fn refresh(&mut self) {
        let snapshot = self.snapshot();
        for renderer in self.renderers.iter_mut() {
            renderer.render(&snapshot);
        }
    }

    /// Render the current view to one renderer that is not registered.
    pub fn refresh_into(&mut self, renderer: &mut dyn Renderer) {
        let snapshot = self.snapshot();
        renderer.render(&snapshot);
    }

    fn notify(&mut self) {
        if !self.renderers.is_empty() {
            self.refresh();
        }
    }

    /// Build a snapshot of the current view, consuming the pending changes.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        log::trace!("snapshot with {} pending changes", self.changeset.len());
        let (generation, changes) = self.changeset.drain();
        let row_count = self.visible.len();
        let selectable = self.is_selectable();

        let rows = self
            .working_set()
            .iter()
            .enumerate()
            .map(|(index, record)| RowView {
                checked: selectable.then(|| self.selection.contains(record.id())),
                menu_anchor: MenuAnchor::for_row(index, row_count),
                record: record.clone(),
            })
            .collect();

        ViewSnapshot {
            generation,
            changes,
            columns: self.dataset.columns().to_vec(),
            rows,
            sort: self.sort.clone(),
            filter: self.filter.clone(),
            selectable,
            selection: self.selection_summary(),
        }
    }
}
