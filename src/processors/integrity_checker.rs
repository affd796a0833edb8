use crate::error::ProcessingError;
use crate::models::{EnrichedRecord, Position};
use crate::utils::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub total_records: usize,
    pub usable_records: usize,
    pub unusable_records: usize,
    pub missing_latitude: usize,
    pub missing_longitude: usize,
    pub coordinate_violations: Vec<CoordinateViolation>,
    pub year_statistics: HashMap<i32, YearStatistics>,
}

#[derive(Debug, Clone)]
pub struct CoordinateViolation {
    pub row: usize,
    pub year: i32,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    LatitudeOutOfRange,
    LongitudeOutOfRange,
}

#[derive(Debug, Clone, Default)]
pub struct YearStatistics {
    pub total_records: usize,
    pub usable_records: usize,
    pub unusable_records: usize,
}

/// Checks enriched records before export: usability tallies per year,
/// plus bounds violations for coordinates that parsed but fall outside
/// the valid geographic ranges.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_records(&self, records: &[EnrichedRecord]) -> IntegrityReport {
        let mut report = IntegrityReport {
            total_records: records.len(),
            usable_records: 0,
            unusable_records: 0,
            missing_latitude: 0,
            missing_longitude: 0,
            coordinate_violations: Vec::new(),
            year_statistics: HashMap::new(),
        };

        for (row_number, record) in records.iter().enumerate() {
            let stats = report.year_statistics.entry(record.year).or_default();
            stats.total_records += 1;

            if record.is_usable() {
                report.usable_records += 1;
                stats.usable_records += 1;
            } else {
                report.unusable_records += 1;
                stats.unusable_records += 1;
            }

            if record.latitude.is_none() {
                report.missing_latitude += 1;
            }
            if record.longitude.is_none() {
                report.missing_longitude += 1;
            }

            if let Some(position) = record.position() {
                self.check_position(row_number + 1, record.year, &position, &mut report);
            }
        }

        report
    }

    fn check_position(
        &self,
        row: usize,
        year: i32,
        position: &Position,
        report: &mut IntegrityReport,
    ) {
        position
            .validate_bounds()
            .inspect_err(|error| {
                if let ProcessingError::Validation(errors) = error {
                    let fields = errors.field_errors();

                    if fields.contains_key("latitude") {
                        report.coordinate_violations.push(CoordinateViolation {
                            row,
                            year,
                            violation_type: ViolationType::LatitudeOutOfRange,
                            details: format!(
                                "latitude {} is outside valid range [{}, {}]",
                                position.latitude, MIN_LATITUDE, MAX_LATITUDE
                            ),
                        });
                    }

                    if fields.contains_key("longitude") {
                        report.coordinate_violations.push(CoordinateViolation {
                            row,
                            year,
                            violation_type: ViolationType::LongitudeOutOfRange,
                            details: format!(
                                "longitude {} is outside valid range [{}, {}]",
                                position.longitude, MIN_LONGITUDE, MAX_LONGITUDE
                            ),
                        });
                    }
                }
            })
            .ok();
    }

    /// Generate a summary report
    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coordinate Usability Report ===\n");
        summary.push_str(&format!("Total Records: {}\n", report.total_records));
        summary.push_str(&format!(
            "Usable Records: {} ({:.1}%)\n",
            report.usable_records,
            percentage(report.usable_records, report.total_records)
        ));
        summary.push_str(&format!(
            "Unusable Records: {} ({:.1}%)\n",
            report.unusable_records,
            percentage(report.unusable_records, report.total_records)
        ));
        summary.push_str(&format!("Missing Latitude: {}\n", report.missing_latitude));
        summary.push_str(&format!(
            "Missing Longitude: {}\n",
            report.missing_longitude
        ));
        summary.push_str(&format!(
            "Years Covered: {}\n",
            report.year_statistics.len()
        ));
        summary.push_str(&format!(
            "\nCoordinate Violations: {}\n",
            report.coordinate_violations.len()
        ));

        if !report.coordinate_violations.is_empty() {
            summary.push_str("\nTop 10 Violations:\n");
            for (i, violation) in report.coordinate_violations.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. Row {} ({}): {}\n",
                    i + 1,
                    violation.row,
                    violation.year,
                    violation.details
                ));
            }
        }

        summary
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
