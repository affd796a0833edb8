use std::fs::File;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::DataTable;

pub struct IncidentReader;

impl IncidentReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a CSV file with a header row into a [`DataTable`], inferring
    /// each column's type from its values.
    pub fn read_table(&self, path: &Path) -> Result<DataTable> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        if headers.is_empty() {
            return Err(ProcessingError::InvalidFormat(format!(
                "{} has no header row",
                path.display()
            )));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for IncidentReader {
    fn default() -> Self {
        Self::new()
    }
}
