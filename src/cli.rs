use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stormwater_rs::SlopeCategory;

/// Storm water balance for road catchments with rooftop harvesting,
/// hedgerows, mound beds and permeable pavement
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one scenario and print the headline metrics
    Evaluate {
        /// Scenario TOML file; the built-in defaults are used when omitted
        scenario: Option<PathBuf>,

        /// Override the design storm depth (mm)
        #[arg(short = 'p', long)]
        storm_depth: Option<f64>,

        /// Override the slope condition (low, moderate, steep)
        #[arg(long)]
        slope: Option<SlopeCategory>,

        /// Write the breakdown table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Re-evaluate a scenario over a range of storm depths
    Sweep {
        scenario: Option<PathBuf>,

        /// First storm depth (mm)
        #[arg(long, default_value_t = 20.0)]
        from: f64,

        /// Last storm depth (mm)
        #[arg(long, default_value_t = 200.0)]
        to: f64,

        /// Step between storm depths (mm)
        #[arg(long, default_value_t = 5.0)]
        step: f64,

        #[arg(long, default_value = "storm_sweep.csv")]
        csv: PathBuf,
    },

    /// Print the default scenario as TOML
    Defaults,
}

pub fn get_args() -> Args {
    Args::parse()
}
