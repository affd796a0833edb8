use chrono::NaiveDate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::DATE_FORMATS;

/// Parse an incident date, trying each accepted format in order.
pub fn parse_incident_date(raw: &str) -> Result<NaiveDate> {
    try_parse_date(raw).ok_or_else(|| ProcessingError::InvalidDate(raw.to_string()))
}

/// Parse attempt that reports failure as `None` instead of an error.
/// Used by column type inference, which probes values speculatively.
pub fn try_parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
