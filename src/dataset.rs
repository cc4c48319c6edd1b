/// DataTable Dataset Implementation
///
/// A Dataset is the full, ordered universe of records a table can show.
/// It is validated once at construction (every record has a unique integer
/// `id`) and never changes afterwards; views refer to records by position.
///
/// # Examples
///
/// ```
/// use datatable::{Dataset, Record};
///
/// let dataset = Dataset::new(vec![
///     Record::new(1).with("name", "b").with("price", 20),
///     Record::new(2).with("name", "a").with("price", 10),
/// ]).unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.columns(), &["id", "name", "price"]);
/// assert_eq!(dataset.get(2).unwrap().display_text("name"), "a");
/// ```

use crate::error::DatasetError;
use crate::record::Record;
use crate::value::FieldValue;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    /// id -> position in `records`
    positions: HashMap<i64, usize>,
    /// Union of field names in first-seen order
    columns: Vec<String>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate ids.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut positions = HashMap::with_capacity(records.len());
        let mut columns: Vec<String> = Vec::new();

        for (position, record) in records.iter().enumerate() {
            if let Some(&first) = positions.get(&record.id()) {
                return Err(DatasetError::DuplicateId {
                    id: record.id(),
                    first,
                    second: position,
                });
            }
            positions.insert(record.id(), position);

            for name in record.field_names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }

        log::debug!(
            "dataset loaded: {} records, {} columns",
            records.len(),
            columns.len()
        );

        Ok(Dataset {
            records,
            positions,
            columns,
        })
    }

    /// Parse a JSON array of flat objects, keeping each object's key order.
    ///
    /// Record-level problems are reported with the offending position.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<IndexMap<String, FieldValue>> = serde_json::from_str(json)?;
        Self::from_json_objects(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let raw: Vec<IndexMap<String, FieldValue>> =
            serde_json::from_reader(reader)?;
        Self::from_json_objects(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_json_objects(
        raw: Vec<IndexMap<String, FieldValue>>,
    ) -> Result<Self, DatasetError> {
        let mut records = Vec::with_capacity(raw.len());
        for (index, fields) in raw.into_iter().enumerate() {
            let record = Record::try_from(fields)
                .map_err(|source| DatasetError::Record { index, source })?;
            records.push(record);
        }
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the column names (union of all record fields, first-seen order).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if any record carries `field`.
    pub fn has_column(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c == field)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.positions.contains_key(&id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: i64) -> Option<&Record> {
        self.positions.get(&id).map(|&pos| &self.records[pos])
    }

    /// Look up a record by its position in the dataset.
    pub fn record_at(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    #[test]
    fn test_dataset_basic() {
        let dataset = Dataset::new(vec![
            Record::new(10).with("title", "a"),
            Record::new(20).with("brand", "b"),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert!(dataset.contains(20));
        assert!(!dataset.contains(30));
        assert_eq!(dataset.columns(), &["id", "title", "brand"]);
        assert!(dataset.has_column("brand"));
        assert!(!dataset.has_column("price"));
        assert_eq!(dataset.record_at(1).map(Record::id), Some(20));
    }

    #[test]
    fn test_dataset_rejects_duplicate_ids() {
        let result = Dataset::new(vec![Record::new(1), Record::new(2), Record::new(1)]);
        match result {
            Err(DatasetError::DuplicateId { id, first, second }) => {
                assert_eq!((id, first, second), (1, 0, 2));
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_empty() {
        let dataset = Dataset::new(Vec::new()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
        assert!(dataset.get(1).is_none());
    }

    #[test]
    fn test_dataset_from_json() {
        let json = r#"[
            {"id": 1, "title": "iPhone 9", "price": 549, "rating": 4.69},
            {"id": 2, "title": "iPhone X", "price": 899, "rating": 4.44}
        ]"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), &["id", "title", "price", "rating"]);
        assert_eq!(dataset.get(2).unwrap().display_text("price"), "899");
    }

    #[test]
    fn test_dataset_from_json_reports_record_position() {
        let json = r#"[{"id": 1}, {"title": "no id"}]"#;
        match Dataset::from_json_str(json) {
            Err(DatasetError::Record { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, RecordError::MissingId);
            }
            other => panic!("expected record error, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_from_json_rejects_nested_values() {
        let json = r#"[{"id": 1, "images": ["a.png"]}]"#;
        assert!(matches!(
            Dataset::from_json_str(json),
            Err(DatasetError::Json(_))
        ));
    }
}
