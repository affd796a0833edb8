pub mod geometry;
pub mod record;
pub mod table;

pub use geometry::{GeoCollection, PointGeometry, Position};
pub use record::EnrichedRecord;
pub use table::{ColumnType, DataTable};
