use std::path::Path;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::analyzers::GeoAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{Aggregator, Enricher, IntegrityChecker};
use crate::readers::IncidentReader;
use crate::utils::constants::{ENRICHED_CSV_FILE, GEOJSON_FILE, INPUT_CSV_FILE};
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, GeoJsonWriter};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process { skip_invalid } => process(skip_invalid),
        Commands::Validate { skip_invalid } => validate(skip_invalid),
        Commands::Info => info(),
    }
}

/// Logging goes to stderr so the aggregate tables on stdout stay clean.
/// RUST_LOG overrides the flag-derived level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn process(skip_invalid: bool) -> Result<()> {
    println!("Processing incident data...");
    println!("Input file: {}", INPUT_CSV_FILE);

    let reader = IncidentReader::new();
    let table = reader.read_table(Path::new(INPUT_CSV_FILE))?;
    debug!(
        rows = table.len(),
        columns = table.headers.len(),
        "loaded input table"
    );

    println!("\nDetected columns:");
    print!("{}", table.column_summary());

    let progress = ProgressReporter::new_spinner("Enriching records...", false);
    let enricher = Enricher::with_skip_invalid(skip_invalid);
    let records = enricher.enrich(&table)?;
    progress.finish_with_message(&format!("Enriched {} records", records.len()));

    let aggregator = Aggregator::new();

    println!("\nIncidents by year:");
    print!("{}", aggregator.count_by_year(&records).to_csv());

    println!("\nIncidents by year and coordinate usability:");
    print!("{}", aggregator.count_by_usability(&records).to_table());

    let csv_writer = CsvWriter::new();
    csv_writer.write_records(&table.headers, &records, Path::new(ENRICHED_CSV_FILE))?;
    println!("\nWrote {} records to {}", records.len(), ENRICHED_CSV_FILE);

    let groups = aggregator.group_by_year(&records);
    let geojson_writer = GeoJsonWriter::new();
    let collection = geojson_writer.collect_points(&groups);
    geojson_writer.write_collection(&collection, Path::new(GEOJSON_FILE))?;
    println!(
        "Wrote {} points across {} years to {}",
        collection.point_count(),
        collection.year_count(),
        GEOJSON_FILE
    );

    println!("Processing complete!");
    Ok(())
}

fn validate(skip_invalid: bool) -> Result<()> {
    println!("Validating incident data...");
    println!("Input file: {}", INPUT_CSV_FILE);

    let reader = IncidentReader::new();
    let table = reader.read_table(Path::new(INPUT_CSV_FILE))?;

    println!("\nDetected columns:");
    print!("{}", table.column_summary());

    let progress = ProgressReporter::new_spinner("Checking records...", false);
    let records = Enricher::with_skip_invalid(skip_invalid).enrich(&table)?;
    let checker = IntegrityChecker::new();
    let report = checker.check_records(&records);
    progress.finish_with_message("Validation complete");

    println!("\n{}", checker.generate_summary(&report));

    if report.unusable_records == 0 && report.coordinate_violations.is_empty() {
        println!("✅ All records have usable coordinates");
    } else {
        println!(
            "⚠️  Found {} records without usable coordinates and {} bounds violations",
            report.unusable_records,
            report.coordinate_violations.len()
        );
    }

    Ok(())
}

fn info() -> Result<()> {
    println!("Analyzing GeoJSON file: {}", GEOJSON_FILE);

    let analyzer = GeoAnalyzer::new();
    let statistics = analyzer.analyze_file(Path::new(GEOJSON_FILE))?;

    println!("\n{}", statistics.detailed_summary());

    Ok(())
}
