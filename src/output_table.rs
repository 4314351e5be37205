use crate::error::ExtractError;
use crate::literal::{format_float, format_number, repr};
use indexmap::IndexSet;
use serde_json::{Map, Value};
use std::io::Write;

/// Rows collected from the log, written out as CSV in one go.
///
/// Columns are the union of all row keys in first-seen order, so the first
/// row fixes the leading columns and keys that show up later are appended.
/// An explicit key list replaces that union and is used as-is. Rows are laid
/// out by key; a row without a column's key gets an empty cell.
#[derive(Debug, Default)]
pub struct OutputTable {
    columns: IndexSet<String>,
    explicit_keys: bool,
    rows: Vec<Map<String, Value>>,
}

impl OutputTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: Vec<String>) -> Self {
        OutputTable {
            columns: keys.into_iter().collect(),
            explicit_keys: true,
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: Map<String, Value>) {
        if !self.explicit_keys {
            for key in row.keys() {
                // insert keeps the position of a key already present
                self.columns.insert(key.clone());
            }
        }
        self.rows.push(row);
    }

    pub fn columns(&self) -> &IndexSet<String> {
        &self.columns
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column's numbers are printed as floats.
    ///
    /// Mirrors pandas dtype inference: a column holding only numbers (no
    /// booleans, strings or containers) becomes float as soon as one of its
    /// cells is a float or is missing.
    pub fn is_float_column(&self, column: &str) -> bool {
        let mut saw_number = false;
        let mut promote = false;
        for row in &self.rows {
            match row.get(column) {
                None | Some(Value::Null) => promote = true,
                Some(Value::Number(n)) => {
                    saw_number = true;
                    if n.is_f64() {
                        promote = true;
                    }
                }
                Some(_) => return false,
            }
        }
        saw_number && promote
    }

    /// Write header and rows. A table without columns writes nothing at all.
    pub fn write_csv<W: Write>(&self, output: W) -> Result<(), ExtractError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);

        if self.columns.is_empty() {
            writer.flush()?;
            return Ok(());
        }

        let float_columns: Vec<bool> = self
            .columns
            .iter()
            .map(|column| self.is_float_column(column))
            .collect();

        writer.write_record(&self.columns)?;
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&float_columns)
                .map(|(key, &as_float)| {
                    row.get(key)
                        .map(|value| render_cell(value, as_float))
                        .unwrap_or_default()
                })
                .collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Text of one CSV cell, as pandas would print the Python value
pub fn render_cell(value: &Value, as_float: bool) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) if as_float => n
            .as_f64()
            .map(format_float)
            .unwrap_or_else(|| format_number(n)),
        Value::Number(n) => format_number(n),
        other => repr(other),
    }
}
