//! Records as the API returns them.
//!
//! A [`Record`] is deliberately untyped: its shape belongs to the remote API,
//! and a view only reads the fields its columns name.

use std::fmt;

use serde_json::{Map, Value};

pub type Record = Map<String, Value>;

/// Records in the order the API returned them.
pub type Collection = Vec<Record>;

/// Display form of a JSON value.
///
/// Strings are shown without quotes, `null` as an empty cell, anything else
/// as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display form of a top-level field; missing fields render empty.
pub fn display_field(record: &Record, field: &str) -> String {
    record.get(field).map(display_value).unwrap_or_default()
}

/// Stable identity of a row across re-renders.
///
/// Ids are stringified and not checked for uniqueness, so `1` and `"1"`
/// give equal keys. Widgets keyed by it also need the row position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    /// The record carried no id; fall back to its position.
    Index(usize),
}

impl RowKey {
    /// Keys a record by `id`, then Mongo-style `_id`, then its position.
    pub fn for_record(record: &Record, index: usize) -> Self {
        ["id", "_id"]
            .iter()
            .filter_map(|field| record.get(*field))
            .find(|value| !value.is_null())
            .map(|value| Self::Id(display_value(value)))
            .unwrap_or(Self::Index(index))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}
