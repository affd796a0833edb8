/// File names
pub const INPUT_CSV_FILE: &str = "data.csv";
pub const ENRICHED_CSV_FILE: &str = "with_decimals.csv";
pub const GEOJSON_FILE: &str = "src/data/attacks.json";

/// Input columns consumed by the enricher
pub const DATE_COLUMN: &str = "Date";
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";

/// Columns appended to the enriched CSV
pub const YEAR_COLUMN: &str = "year";
pub const LAT_COLUMN: &str = "lat";
pub const LNG_COLUMN: &str = "lng";

/// Date formats accepted for the Date column, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// GeoJSON geometry type for incident locations
pub const POINT_TYPE: &str = "Point";

/// Geographic bounds in decimal degrees
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
