use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::GeoCollection;

#[derive(Debug)]
pub struct GeoStatistics {
    pub total_points: usize,
    pub years_covered: usize,
    pub year_range: (String, String),
    pub points_per_year: Vec<(String, usize)>,
    pub geographic_bounds: GeographicBounds,
}

#[derive(Debug)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Reads a previously generated point map back in and summarizes it.
pub struct GeoAnalyzer;

impl GeoAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_file(&self, path: &Path) -> Result<GeoStatistics> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let collection: GeoCollection = serde_json::from_reader(reader)?;

        self.calculate_statistics(&collection)
    }

    pub fn calculate_statistics(&self, collection: &GeoCollection) -> Result<GeoStatistics> {
        if collection.is_empty() {
            return Err(ProcessingError::Config(
                "No year groups found in collection".to_string(),
            ));
        }

        let mut total_points = 0;
        let mut points_per_year = Vec::new();
        let mut bounds: Option<GeographicBounds> = None;

        for (year, points) in &collection.years {
            total_points += points.len();
            points_per_year.push((year.clone(), points.len()));

            for point in points {
                match bounds.as_mut() {
                    Some(bounds) => {
                        if point.latitude() < bounds.min_lat {
                            bounds.min_lat = point.latitude();
                        }
                        if point.latitude() > bounds.max_lat {
                            bounds.max_lat = point.latitude();
                        }
                        if point.longitude() < bounds.min_lon {
                            bounds.min_lon = point.longitude();
                        }
                        if point.longitude() > bounds.max_lon {
                            bounds.max_lon = point.longitude();
                        }
                    }
                    None => {
                        bounds = Some(GeographicBounds {
                            min_lat: point.latitude(),
                            max_lat: point.latitude(),
                            min_lon: point.longitude(),
                            max_lon: point.longitude(),
                        });
                    }
                }
            }
        }

        let geographic_bounds = bounds.ok_or_else(|| {
            ProcessingError::Config("No point geometries found in collection".to_string())
        })?;

        let first_year = collection.years.keys().next().cloned().unwrap_or_default();
        let last_year = collection
            .years
            .keys()
            .next_back()
            .cloned()
            .unwrap_or_default();

        Ok(GeoStatistics {
            total_points,
            years_covered: collection.year_count(),
            year_range: (first_year, last_year),
            points_per_year,
            geographic_bounds,
        })
    }
}

impl GeoStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Years: {} ({} to {})\n\
            Points: {} total\n\
            Latitude Range: {:.4} to {:.4}\n\
            Longitude Range: {:.4} to {:.4}",
            self.years_covered,
            self.year_range.0,
            self.year_range.1,
            self.total_points,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.min_lon,
            self.geographic_bounds.max_lon
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut summary = self.summary();

        summary.push_str("\n\nPoints per year:");
        for (year, count) in &self.points_per_year {
            summary.push_str(&format!("\n  {}: {}", year, count));
        }

        summary
    }
}

impl Default for GeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
