use std::path::Path;

use crate::error::Result;
use crate::models::EnrichedRecord;
use crate::utils::constants::{LAT_COLUMN, LNG_COLUMN, YEAR_COLUMN};

/// Writes the enriched CSV: the original columns with year, lat and lng
/// appended.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_records(
        &self,
        headers: &[String],
        records: &[EnrichedRecord],
        path: &Path,
    ) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header_row: Vec<String> = headers.to_vec();
        header_row.push(YEAR_COLUMN.to_string());
        header_row.push(LAT_COLUMN.to_string());
        header_row.push(LNG_COLUMN.to_string());
        writer.write_record(&header_row)?;

        for record in records {
            writer.write_record(&record.csv_fields())?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
