use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::geometry::{PointGeometry, Position};

/// One input row together with its derived year and parsed coordinates.
/// `fields` preserves the original cell values in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub fields: Vec<String>,
    pub year: i32,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl EnrichedRecord {
    pub fn new(
        fields: Vec<String>,
        year: i32,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> Self {
        Self {
            fields,
            year,
            latitude,
            longitude,
        }
    }

    /// A record is usable when both coordinates parsed.
    pub fn is_usable(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn position(&self) -> Option<Position> {
        let latitude = self.latitude?.to_f64()?;
        let longitude = self.longitude?.to_f64()?;
        Some(Position::new(latitude, longitude))
    }

    pub fn geometry(&self) -> Option<PointGeometry> {
        self.position()
            .map(|position| PointGeometry::new(position.longitude, position.latitude))
    }

    /// Row for the enriched CSV: the original cells with year, lat and
    /// lng appended. Absent coordinates become empty cells.
    pub fn csv_fields(&self) -> Vec<String> {
        let mut fields = self.fields.clone();
        fields.push(self.year.to_string());
        fields.push(self.latitude.map(|d| d.to_string()).unwrap_or_default());
        fields.push(self.longitude.map(|d| d.to_string()).unwrap_or_default());
        fields
    }
}
