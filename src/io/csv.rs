use crate::balance::BalanceResult;
use crate::sweep::SweepPoint;
use csv::{Writer, WriterBuilder};
use std::error::Error;
use std::fs::File;
use std::path::Path;

// Create CSV writer with headers
pub fn create_csv_writer(path: &Path, header: &[&str]) -> Result<Writer<File>, Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    wtr.write_record(header)?;
    Ok(wtr)
}

// Field-by-field breakdown followed by the water distribution
pub fn write_breakdown_csv(path: &Path, result: &BalanceResult) -> Result<(), Box<dyn Error>> {
    let mut wtr = create_csv_writer(path, &["metric", "value"])?;

    for (metric, value) in result.breakdown_rows() {
        wtr.write_record(&[metric.to_string(), value.to_string()])?;
    }
    for part in result.distribution() {
        wtr.write_record(&[format!("Share: {}", part.label), part.share.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_sweep_csv(path: &Path, points: &[SweepPoint]) -> Result<(), Box<dyn Error>> {
    let mut wtr = create_csv_writer(
        path,
        &[
            "storm_depth_mm",
            "baseline_runoff_m3",
            "effective_runoff_m3",
            "captured_m3",
            "protection_score",
        ],
    )?;

    for point in points {
        wtr.write_record(&[
            point.storm_depth_mm.to_string(),
            point.baseline_runoff_m3.to_string(),
            point.effective_runoff_m3.to_string(),
            point.captured_m3.to_string(),
            point.protection_score.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
