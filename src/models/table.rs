use std::fmt;

use crate::error::{ProcessingError, Result};
use crate::utils::dates::try_parse_date;

/// Column types recognized by the loader. Inference prefers Date over
/// Number over Text; a column of empty cells falls back to Text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Date,
    Number,
    Text,
}

impl ColumnType {
    /// Infer the type of a column from its values. Empty cells carry no
    /// type information and are skipped.
    pub fn infer<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut saw_value = false;
        let mut all_dates = true;
        let mut all_numbers = true;

        for value in values {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            saw_value = true;

            if all_dates && try_parse_date(trimmed).is_none() {
                all_dates = false;
            }
            if all_numbers && trimmed.parse::<f64>().is_err() {
                all_numbers = false;
            }
            if !all_dates && !all_numbers {
                return ColumnType::Text;
            }
        }

        if !saw_value {
            ColumnType::Text
        } else if all_dates {
            ColumnType::Date
        } else if all_numbers {
            ColumnType::Number
        } else {
            ColumnType::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Date => "Date",
            ColumnType::Number => "Number",
            ColumnType::Text => "Text",
        };
        write!(f, "{}", name)
    }
}

/// In-memory table loaded from the input CSV: a header row, one inferred
/// type per column, and the data rows as strings.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub column_types: Vec<ColumnType>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Build a table from headers and rectangular rows, inferring each
    /// column's type from its values.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let column_types = (0..headers.len())
            .map(|index| ColumnType::infer(rows.iter().map(|row| row[index].as_str())))
            .collect();

        Self {
            headers,
            column_types,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| ProcessingError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// Aligned `name  type` listing of the detected columns, one per line.
    pub fn column_summary(&self) -> String {
        let width = self
            .headers
            .iter()
            .map(|header| header.len())
            .max()
            .unwrap_or(0);

        let mut summary = String::new();
        for (header, column_type) in self.headers.iter().zip(&self.column_types) {
            summary.push_str(&format!(
                "  {:<width$}  {}\n",
                header,
                column_type,
                width = width
            ));
        }
        summary
    }
}
