use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "incident-mapper")]
#[command(about = "Converts geotagged incident reports into a year-partitioned GeoJSON point map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich data.csv and write with_decimals.csv plus the GeoJSON point map
    Process {
        #[arg(
            long,
            default_value = "false",
            help = "Treat malformed coordinate values as absent instead of aborting"
        )]
        skip_invalid: bool,
    },

    /// Check the input data without writing any output files
    Validate {
        #[arg(
            long,
            default_value = "false",
            help = "Treat malformed coordinate values as absent instead of aborting"
        )]
        skip_invalid: bool,
    },

    /// Display statistics about the generated GeoJSON file
    Info,
}
