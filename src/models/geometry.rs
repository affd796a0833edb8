use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::POINT_TYPE;

/// A parsed coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Position {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Range check backed by the derive attributes above.
    pub fn validate_bounds(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}

/// GeoJSON point geometry. Fields are declared in sorted-key order so
/// serialization matches a sorted-keys JSON dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],

    #[serde(rename = "type")]
    pub geometry_type: String,
}

impl PointGeometry {
    /// GeoJSON convention puts longitude first.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            coordinates: [longitude, latitude],
            geometry_type: POINT_TYPE.to_string(),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn position(&self) -> Position {
        Position::new(self.latitude(), self.longitude())
    }
}

/// Point geometries keyed by year. The map serializes transparently, and
/// the BTreeMap keeps the emitted keys sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoCollection {
    pub years: BTreeMap<String, Vec<PointGeometry>>,
}

impl GeoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the point list for a year, replacing any previous entry.
    pub fn insert_year(&mut self, year: i32, points: Vec<PointGeometry>) {
        self.years.insert(year.to_string(), points);
    }

    pub fn point_count(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
