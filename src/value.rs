/// DataTable Field Values
///
/// A `FieldValue` is one scalar cell of a record. Values are either text or
/// numbers; booleans and `null` are carried so that JSON datasets load as-is.
///
/// Two rules live here because every other module depends on them:
///
/// - **Text form**: what a filter query is matched against. Numbers render as
///   their decimal text, booleans as `true`/`false`, `null` has none.
/// - **Ordering**: text compares case-insensitively, numbers compare
///   numerically (integers and floats mix freely), every other pairing is
///   `Equal` so that the sort leaves such rows where they were.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Scalar value stored in a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl FieldValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text a filter query is matched against.
    ///
    /// Borrowed for text values, allocated for everything else. `None` for
    /// `null`, which never matches a non-empty query.
    pub fn text_form(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Int(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Float(f) => Some(Cow::Owned(f.to_string())),
            FieldValue::Bool(b) => Some(Cow::Owned(b.to_string())),
            FieldValue::Null => None,
        }
    }

    /// Case-insensitive substring test against the text form.
    ///
    /// `needle_lower` must already be lowercased; callers lowercase the query
    /// once per filter pass rather than once per row.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        match self.text_form() {
            Some(text) => text.to_lowercase().contains(needle_lower),
            None => false,
        }
    }

    /// Compares two values for sorting in ascending order.
    ///
    /// Not a total order: mixed types, `null` and NaN all compare `Equal` to
    /// their counterpart, so callers must use a sort that tolerates that.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                compare_case_insensitive(a, b)
            }
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            }
            _ => Ordering::Equal,
        }
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    let lower_a = a.chars().flat_map(char::to_lowercase);
    let lower_b = b.chars().flat_map(char::to_lowercase);
    lower_a.cmp(lower_b)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text_form() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}
