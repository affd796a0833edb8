use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::Result;
use crate::models::{DataTable, EnrichedRecord};
use crate::utils::constants::{DATE_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};
use crate::utils::coordinates::degrees_minutes_to_decimal;
use crate::utils::dates::parse_incident_date;

/// Derives the year and decimal coordinates for every row of the input
/// table, preserving row order.
pub struct Enricher {
    skip_invalid: bool,
}

impl Enricher {
    pub fn new() -> Self {
        Self {
            skip_invalid: false,
        }
    }

    /// Treat malformed coordinate values as absent instead of aborting.
    /// Unparseable dates abort either way.
    pub fn with_skip_invalid(skip_invalid: bool) -> Self {
        Self { skip_invalid }
    }

    pub fn enrich(&self, table: &DataTable) -> Result<Vec<EnrichedRecord>> {
        let date_index = table.require_column(DATE_COLUMN)?;
        let latitude_index = table.require_column(LATITUDE_COLUMN)?;
        let longitude_index = table.require_column(LONGITUDE_COLUMN)?;

        let mut records = Vec::with_capacity(table.len());
        for (row_number, row) in table.rows.iter().enumerate() {
            let date = parse_incident_date(&row[date_index])?;
            let latitude =
                self.parse_coordinate(&row[latitude_index], LATITUDE_COLUMN, row_number)?;
            let longitude =
                self.parse_coordinate(&row[longitude_index], LONGITUDE_COLUMN, row_number)?;

            records.push(EnrichedRecord::new(
                row.clone(),
                date.year(),
                latitude,
                longitude,
            ));
        }

        Ok(records)
    }

    /// Apply the coordinate parser under the configured malformed-value
    /// policy. Empty values are absent, not malformed, so they never abort.
    fn parse_coordinate(
        &self,
        value: &str,
        column: &str,
        row_number: usize,
    ) -> Result<Option<Decimal>> {
        match degrees_minutes_to_decimal(value) {
            Ok(parsed) => Ok(parsed),
            Err(error) if self.skip_invalid => {
                warn!(
                    row = row_number + 1,
                    column,
                    %error,
                    "skipping malformed coordinate"
                );
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::str::FromStr;

    fn table(rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            vec![
                "Vessel".to_string(),
                "Date".to_string(),
                "Latitude".to_string(),
                "Longitude".to_string(),
            ],
            rows.into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_enrich_derives_year_and_coordinates() {
        let table = table(vec![vec!["Alpha", "2015-03-02", "33° 30' S", "18° 0' E"]]);
        let records = Enricher::new().enrich(&table).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2015);
        assert_eq!(records[0].latitude, Some(decimal("-33.5")));
        assert_eq!(records[0].longitude, Some(decimal("18")));
        assert_eq!(records[0].fields[0], "Alpha");
    }

    #[test]
    fn test_empty_coordinates_are_absent() {
        let table = table(vec![vec!["Bravo", "2015-06-14", "", "  "]]);
        let records = Enricher::new().enrich(&table).unwrap();

        assert_eq!(records[0].latitude, None);
        assert_eq!(records[0].longitude, None);
        assert!(!records[0].is_usable());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let table = table(vec![
            vec!["Alpha", "2015-03-02", "33° 30' S", "18° 0' E"],
            vec!["Bravo", "2014-11-01", "12° 15' N", "45° 30' E"],
            vec!["Caspian", "2015-06-14", "", ""],
        ]);
        let records = Enricher::new().enrich(&table).unwrap();

        let vessels: Vec<&str> = records
            .iter()
            .map(|record| record.fields[0].as_str())
            .collect();
        assert_eq!(vessels, vec!["Alpha", "Bravo", "Caspian"]);
    }

    #[test]
    fn test_malformed_coordinate_aborts_by_default() {
        let table = table(vec![vec!["Alpha", "2015-03-02", "garbage", "18° 0' E"]]);
        let result = Enricher::new().enrich(&table);

        assert!(matches!(
            result,
            Err(ProcessingError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_skip_invalid_turns_malformed_into_absent() {
        let table = table(vec![vec!["Alpha", "2015-03-02", "garbage", "18° 0' E"]]);
        let records = Enricher::with_skip_invalid(true).enrich(&table).unwrap();

        assert_eq!(records[0].latitude, None);
        assert_eq!(records[0].longitude, Some(decimal("18")));
    }

    #[test]
    fn test_unparseable_date_always_aborts() {
        let table = table(vec![vec!["Alpha", "not a date", "33° 30' S", "18° 0' E"]]);

        assert!(Enricher::new().enrich(&table).is_err());
        assert!(Enricher::with_skip_invalid(true).enrich(&table).is_err());
    }

    #[test]
    fn test_missing_required_column() {
        let table = DataTable::new(
            vec!["Vessel".to_string(), "Date".to_string()],
            vec![vec!["Alpha".to_string(), "2015-03-02".to_string()]],
        );
        let result = Enricher::new().enrich(&table);

        assert!(matches!(
            result,
            Err(ProcessingError::MissingColumn { name }) if name == "Latitude"
        ));
    }
}
