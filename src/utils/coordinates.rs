use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ProcessingError, Result};

/// Convert a degree-minute coordinate like `33° 30' S` to decimal degrees
///
/// An empty value means the coordinate was never recorded and maps to
/// `None`. The arithmetic stays in `Decimal` so repeating quotients keep
/// their full precision instead of collapsing to a float approximation.
///
/// # Examples
/// ```
/// use incident_mapper::utils::degrees_minutes_to_decimal;
/// use rust_decimal::Decimal;
///
/// let decimal = degrees_minutes_to_decimal("33° 30' S").unwrap().unwrap();
/// assert_eq!(decimal, Decimal::new(-335, 1));
/// ```
pub fn degrees_minutes_to_decimal(raw: &str) -> Result<Option<Decimal>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (degrees_part, rest) = trimmed.split_once('°').ok_or_else(|| {
        ProcessingError::InvalidCoordinate(format!(
            "Missing degree mark in '{}'. Expected format: \"D° M' H\"",
            trimmed
        ))
    })?;

    let (minutes_part, hemisphere) = rest.split_once('\'').ok_or_else(|| {
        ProcessingError::InvalidCoordinate(format!(
            "Missing minutes mark in '{}'. Expected format: \"D° M' H\"",
            trimmed
        ))
    })?;

    let degrees = Decimal::from_str(degrees_part.trim()).map_err(|_| {
        ProcessingError::InvalidCoordinate(format!(
            "Invalid degrees value: '{}'",
            degrees_part.trim()
        ))
    })?;

    // The hemisphere letter carries the sign
    if degrees < Decimal::ZERO {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Degrees must not be signed, got: '{}'",
            degrees_part.trim()
        )));
    }

    let minutes = Decimal::from_str(minutes_part.trim()).map_err(|_| {
        ProcessingError::InvalidCoordinate(format!(
            "Invalid minutes value: '{}'",
            minutes_part.trim()
        ))
    })?;

    let minutes_per_degree = Decimal::from(60);
    if minutes < Decimal::ZERO || minutes >= minutes_per_degree {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Minutes must be between 0 and 60, got: {}",
            minutes
        )));
    }

    let decimal_value = degrees
        .checked_add(minutes / minutes_per_degree)
        .ok_or_else(|| {
            ProcessingError::InvalidCoordinate(format!(
                "Degrees value too large: '{}'",
                degrees_part.trim()
            ))
        })?;

    match hemisphere.trim() {
        "N" | "E" => Ok(Some(decimal_value)),
        "S" | "W" => Ok(Some(-decimal_value)),
        other => Err(ProcessingError::InvalidCoordinate(format!(
            "Unknown hemisphere letter '{}' in '{}'",
            other, trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_southern_latitude() {
        let result = degrees_minutes_to_decimal("33° 30' S").unwrap();
        assert_eq!(result, Some(decimal("-33.5")));
    }

    #[test]
    fn test_eastern_longitude() {
        let result = degrees_minutes_to_decimal("18° 0' E").unwrap();
        assert_eq!(result, Some(decimal("18")));
    }

    #[test]
    fn test_all_hemispheres() {
        assert_eq!(
            degrees_minutes_to_decimal("10° 30' N").unwrap(),
            Some(decimal("10.5"))
        );
        assert_eq!(
            degrees_minutes_to_decimal("10° 30' S").unwrap(),
            Some(decimal("-10.5"))
        );
        assert_eq!(
            degrees_minutes_to_decimal("10° 30' E").unwrap(),
            Some(decimal("10.5"))
        );
        assert_eq!(
            degrees_minutes_to_decimal("10° 30' W").unwrap(),
            Some(decimal("-10.5"))
        );
    }

    #[test]
    fn test_repeating_quotient_keeps_precision() {
        // 20/60 has no finite binary form; the Decimal quotient must survive
        let result = degrees_minutes_to_decimal("7° 20' N").unwrap().unwrap();
        assert_eq!(result, decimal("7") + decimal("20") / decimal("60"));
        assert!(result.to_string().starts_with("7.33333333"));
    }

    #[test]
    fn test_fractional_minutes() {
        assert_eq!(
            degrees_minutes_to_decimal("12° 4.5' N").unwrap(),
            Some(decimal("12.075"))
        );
    }

    #[test]
    fn test_empty_value_is_absent() {
        assert_eq!(degrees_minutes_to_decimal("").unwrap(), None);
        assert_eq!(degrees_minutes_to_decimal("   ").unwrap(), None);
    }

    #[test]
    fn test_missing_markers() {
        assert!(degrees_minutes_to_decimal("33 30 S").is_err());
        assert!(degrees_minutes_to_decimal("33° 30 S").is_err());
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(degrees_minutes_to_decimal("abc° 30' S").is_err());
        assert!(degrees_minutes_to_decimal("33° xyz' S").is_err());
    }

    #[test]
    fn test_minutes_out_of_range() {
        assert!(degrees_minutes_to_decimal("33° 60' S").is_err());
        assert!(degrees_minutes_to_decimal("33° 75' S").is_err());
        assert!(degrees_minutes_to_decimal("33° -5' S").is_err());
    }

    #[test]
    fn test_oversized_degrees_rejected() {
        // Decimal::MAX parses as a degrees value, so the sum is checked too
        let result = degrees_minutes_to_decimal("79228162514264337593543950335° 45' N");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_hemisphere() {
        assert!(degrees_minutes_to_decimal("33° 30' X").is_err());
        assert!(degrees_minutes_to_decimal("33° 30' s").is_err());
        assert!(degrees_minutes_to_decimal("33° 30'").is_err());
    }

    #[test]
    fn test_signed_degrees_rejected() {
        assert!(degrees_minutes_to_decimal("-33° 30' S").is_err());
    }
}
