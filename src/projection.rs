//! Projection of sequence-valued record fields down to scalars
//!
//! Prediction inputs are logged with a batch dimension of one, so every field
//! arrives as `[value]`. The row written to the table is made of those first
//! elements.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("field '{field}' holds an empty sequence")]
    EmptySequence { field: String },

    #[error("field '{field}' is not a sequence (got {found})")]
    NotASequence { field: String, found: String },
}

/// Take element 0 of a sequence value.
///
/// Lists, tuples and sets all arrive as arrays. A string is a sequence of
/// characters, so `'abc'` projects to `'a'`.
pub fn first_element(field: &str, value: &Value) -> Result<Value, ProjectionError> {
    let empty = || ProjectionError::EmptySequence {
        field: field.to_string(),
    };
    match value {
        Value::Array(items) => items.first().cloned().ok_or_else(empty),
        Value::String(s) => s
            .chars()
            .next()
            .map(|ch| Value::String(ch.to_string()))
            .ok_or_else(empty),
        other => Err(ProjectionError::NotASequence {
            field: field.to_string(),
            found: crate::literal::repr(other),
        }),
    }
}

/// Project every field of a record, keeping key order.
pub fn flatten_record(record: &Map<String, Value>) -> Result<Map<String, Value>, ProjectionError> {
    let mut row = Map::new();
    for (field, value) in record {
        row.insert(field.clone(), first_element(field, value)?);
    }
    Ok(row)
}
