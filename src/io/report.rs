use crate::balance::{BalanceResult, DistributionPart};
use crate::config::Scenario;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Everything a renderer needs for one evaluation.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub scenario: &'a Scenario,
    pub result: &'a BalanceResult,
    pub distribution: [DistributionPart; 5],
}

impl<'a> Report<'a> {
    pub fn new(scenario: &'a Scenario, result: &'a BalanceResult) -> Self {
        Report {
            generated_at: Utc::now(),
            scenario,
            result,
            distribution: result.distribution(),
        }
    }
}

pub fn write_json_report(
    path: &Path,
    scenario: &Scenario,
    result: &BalanceResult,
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &Report::new(scenario, result))?;
    Ok(())
}
