pub mod geo_analyzer;

pub use geo_analyzer::{GeoAnalyzer, GeoStatistics, GeographicBounds};
