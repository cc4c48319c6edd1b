/// DataTable View Primitives
///
/// The pieces a table view is derived from: the text filter, the sort state
/// machine, a stable sort that tolerates partial orders, and `WorkingSet`,
/// the borrowed ordered projection handed back to callers.
///
/// Views never copy records. They hold positions into the `Dataset`, the
/// same way a filtered or sorted view keeps an index mapping onto its
/// parent table.

use crate::dataset::Dataset;
use crate::record::Record;
use serde::Serialize;
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Column sort state.
///
/// `Unsorted` is only the initial state. Activating a column that is not the
/// current sort column selects it descending; activating the current sort
/// column flips its direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state")]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: String,
        direction: SortDirection,
    },
}

impl SortState {
    /// Returns the state after the user activates `column`.
    pub fn next(&self, column: &str) -> SortState {
        match self {
            SortState::Sorted { column: current, direction } if current == column => {
                SortState::Sorted {
                    column: current.clone(),
                    direction: direction.toggled(),
                }
            }
            _ => SortState::Sorted {
                column: column.to_string(),
                direction: SortDirection::Descending,
            },
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { column, .. } => Some(column),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Direction arrow to highlight in `column`'s header, if any.
    pub fn indicator(&self, column: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted { column: current, direction } if current == column => {
                Some(*direction)
            }
            _ => None,
        }
    }

    /// Compares two records under this state. Always `Equal` when unsorted.
    ///
    /// A record missing the sort field compares `Equal` to everything.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortState::Unsorted => Ordering::Equal,
            SortState::Sorted { column, direction } => {
                match (a.get(column), b.get(column)) {
                    (Some(x), Some(y)) => direction.apply(x.compare(y)),
                    _ => Ordering::Equal,
                }
            }
        }
    }
}

/// Single-field substring filter.
///
/// An empty query is the identity filter. Otherwise a record matches when the
/// text form of its `field` contains the query, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldFilter {
    field: Option<String>,
    query: String,
    #[serde(skip)]
    query_lower: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        FieldFilter {
            field: Some(field.into()),
            query_lower: query.to_lowercase(),
            query,
        }
    }

    /// Filter targeting `field` with no query yet.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self::new(field, String::new())
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.is_identity() {
            return true;
        }
        match &self.field {
            Some(field) => record.field_contains(field, &self.query_lower),
            None => false,
        }
    }
}

/// Sorts `items` stably with a comparison that need not be a total order.
///
/// Bottom-up merge sort: an element is only moved ahead of an earlier one when
/// it compares strictly `Less`, so `Equal` pairs keep their relative order
/// even when `compare` is not transitive.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut scratch = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                &items[start..mid],
                &items[mid..end],
                &mut scratch[start..end],
                &mut compare,
            );
            start = end;
        }
        items.copy_from_slice(&scratch);
        width *= 2;
    }
}

fn merge_runs<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Reorders dataset positions under `sort`.
pub fn sort_positions(positions: &mut [usize], dataset: &Dataset, sort: &SortState) {
    if matches!(sort, SortState::Unsorted) {
        return;
    }
    let records = dataset.records();
    stable_sort_by(positions, |&a, &b| sort.compare(&records[a], &records[b]));
}

/// Keeps the positions whose record passes `filter`, preserving order.
pub fn filter_positions(positions: &[usize], dataset: &Dataset, filter: &FieldFilter) -> Vec<usize> {
    let records = dataset.records();
    positions
        .iter()
        .copied()
        .filter(|&pos| filter.matches(&records[pos]))
        .collect()
}

/// The ordered records currently visible.
///
/// Borrowed from the table state; cheap to create and copy.
#[derive(Debug, Clone, Copy)]
pub struct WorkingSet<'a> {
    dataset: &'a Dataset,
    positions: &'a [usize],
}

impl<'a> WorkingSet<'a> {
    pub(crate) fn new(dataset: &'a Dataset, positions: &'a [usize]) -> Self {
        WorkingSet { dataset, positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Record at a view position.
    pub fn get(&self, index: usize) -> Option<&'a Record> {
        self.positions
            .get(index)
            .and_then(|&pos| self.dataset.record_at(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let records = self.dataset.records();
        let positions = self.positions;
        positions.iter().map(move |&pos| &records[pos])
    }

    /// Ids in view order.
    pub fn ids(&self) -> Vec<i64> {
        self.iter().map(Record::id).collect()
    }

    /// Owned copies of the visible records, in view order.
    pub fn to_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    fn products() -> Dataset {
        Dataset::new(vec![
            Record::new(1).with("title", "iPhone 9").with("price", 549),
            Record::new(2).with("title", "iPhone X").with("price", 899),
            Record::new(3).with("title", "Samsung Universe 9").with("price", 1249),
            Record::new(4).with("title", "OPPOF19").with("price", 280),
            Record::new(5).with("title", "Huawei P30").with("price", 499),
        ])
        .unwrap()
    }

    #[test]
    fn test_sort_state_machine() {
        let state = SortState::default();
        assert_eq!(state.column(), None);

        let state = state.next("price");
        assert_eq!(state.direction(), Some(SortDirection::Descending));

        let state = state.next("price");
        assert_eq!(state.direction(), Some(SortDirection::Ascending));

        let state = state.next("price");
        assert_eq!(state.direction(), Some(SortDirection::Descending));

        // Switching column always starts descending
        let state = state.next("price").next("title");
        assert_eq!(state.column(), Some("title"));
        assert_eq!(state.direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn test_sort_indicator() {
        let state = SortState::default().next("price").next("price");
        assert_eq!(state.indicator("price"), Some(SortDirection::Ascending));
        assert_eq!(state.indicator("title"), None);
        assert_eq!(SortState::Unsorted.indicator("price"), None);
    }

    #[test]
    fn test_filter_matches() {
        let filter = FieldFilter::new("title", "IPHONE");
        let dataset = products();
        let matched: Vec<i64> = dataset
            .iter()
            .filter(|r| filter.matches(r))
            .map(Record::id)
            .collect();
        assert_eq!(matched, vec![1, 2]);

        let numeric = FieldFilter::new("price", "99");
        assert!(numeric.matches(dataset.get(5).unwrap()));
        assert!(!numeric.matches(dataset.get(1).unwrap()));
    }

    #[test]
    fn test_filter_unknown_field_matches_nothing() {
        let filter = FieldFilter::new("brand", "apple");
        assert!(products().iter().all(|r| !filter.matches(r)));

        // ...unless the query is empty
        let identity = FieldFilter::for_field("brand");
        assert!(products().iter().all(|r| identity.matches(r)));
    }

    #[test]
    fn test_stable_sort_keeps_equal_order() {
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        stable_sort_by(&mut items, |x, y| x.0.cmp(&y.0));
        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn test_stable_sort_with_all_equal_is_noop() {
        let mut items: Vec<usize> = (0..37).rev().collect();
        let before = items.clone();
        stable_sort_by(&mut items, |_, _| Ordering::Equal);
        assert_eq!(items, before);
    }

    #[test]
    fn test_sort_positions_descending() {
        let dataset = products();
        let mut positions: Vec<usize> = (0..dataset.len()).collect();
        let state = SortState::default().next("price");
        sort_positions(&mut positions, &dataset, &state);

        let view = WorkingSet::new(&dataset, &positions);
        assert_eq!(view.ids(), vec![3, 2, 1, 5, 4]);
    }

    #[test]
    fn test_sort_positions_with_missing_values_keeps_membership() {
        let dataset = Dataset::new(vec![
            Record::new(1).with("rank", 3),
            Record::new(2),
            Record::new(3).with("rank", 1),
            Record::new(4).with("rank", FieldValue::Null),
            Record::new(5).with("rank", 2),
        ])
        .unwrap();
        let mut positions: Vec<usize> = (0..dataset.len()).collect();
        sort_positions(&mut positions, &dataset, &SortState::default().next("rank"));

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_working_set_accessors() {
        let dataset = products();
        let positions = filter_positions(&[4, 3, 2, 1, 0], &dataset, &FieldFilter::new("title", "9"));
        let view = WorkingSet::new(&dataset, &positions);

        assert_eq!(view.len(), 3);
        assert_eq!(view.ids(), vec![4, 3, 1]);
        assert_eq!(view.get(0).map(Record::id), Some(4));
        assert!(view.get(3).is_none());
        let owned = view.to_records();
        assert_eq!(owned.iter().map(Record::id).collect::<Vec<_>>(), vec![4, 3, 1]);
    }
}
