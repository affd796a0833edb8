pub mod aggregator;
pub mod enricher;
pub mod integrity_checker;

pub use aggregator::{Aggregator, UsabilityCounts, YearCounts, YearGroup};
pub use enricher::Enricher;
pub use integrity_checker::{
    CoordinateViolation, IntegrityChecker, IntegrityReport, ViolationType, YearStatistics,
};
