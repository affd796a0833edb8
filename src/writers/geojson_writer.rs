use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::GeoCollection;
use crate::processors::YearGroup;

/// Writes the year-keyed point map as JSON with sorted keys.
pub struct GeoJsonWriter;

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Build the exportable collection from year groups. Every year gets
    /// an entry; records missing a coordinate contribute no point.
    pub fn collect_points(&self, groups: &[YearGroup]) -> GeoCollection {
        let mut collection = GeoCollection::new();
        for group in groups {
            let points = group
                .records
                .iter()
                .filter_map(|record| record.geometry())
                .collect();
            collection.insert_year(group.year, points);
        }
        collection
    }

    /// Serialize the collection to `path`, creating parent directories
    /// as needed.
    pub fn write_collection(&self, collection: &GeoCollection, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, collection)?;
        writer.flush()?;

        Ok(())
    }
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
