//! Per-record accumulation buffer

use super::schema::ColumnSchema;
use std::collections::HashMap;

/// Values captured for the contact record currently being read
///
/// Keys are inserted lazily as fields are encountered. Keys that are not part
/// of the output schema may be stored but are never emitted.
///
/// # Examples
///
/// ```
/// use atena::domain::{ColumnSchema, RecordBuffer};
///
/// let schema = ColumnSchema::new(["A", "B", "C"]).unwrap();
/// let mut buffer = RecordBuffer::new();
/// buffer.set("C", "3");
/// buffer.set("A", "1");
///
/// assert_eq!(buffer.take_row(&schema), vec!["1", "", "3"]);
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBuffer {
    values: HashMap<String, String>,
}

impl RecordBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `column`, replacing any earlier value
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Value stored under `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Whether `column` has been populated in this record
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Number of populated keys, including keys outside the schema
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the record in schema order and resets the buffer
    ///
    /// Columns that were never populated come out as empty strings.
    pub fn take_row(&mut self, schema: &ColumnSchema) -> Vec<String> {
        let mut values = std::mem::take(&mut self.values);
        schema
            .columns()
            .iter()
            .map(|column| values.remove(column).unwrap_or_default())
            .collect()
    }

    /// Drops everything captured so far
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
