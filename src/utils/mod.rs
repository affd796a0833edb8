pub mod constants;
pub mod coordinates;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use coordinates::degrees_minutes_to_decimal;
pub use dates::{parse_incident_date, try_parse_date};
pub use progress::ProgressReporter;
