pub mod csv_reader;

pub use csv_reader::IncidentReader;
