use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

mod cli;

use cli::{Command, get_args};
use stormwater_rs::io::csv::{write_breakdown_csv, write_sweep_csv};
use stormwater_rs::io::report::write_json_report;
use stormwater_rs::sweep::{depth_range, storm_sweep_with};
use stormwater_rs::{Scenario, ScenarioDocument, SiteConfig, evaluate};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match get_args().command {
        Command::Evaluate {
            scenario,
            storm_depth,
            slope,
            csv,
            json,
        } => {
            let base = load_scenario(scenario.as_deref())?;
            let site = SiteConfig {
                storm_depth_mm: storm_depth.unwrap_or(base.site().storm_depth_mm),
                slope: slope.unwrap_or(base.site().slope),
                ..*base.site()
            };
            let scenario = base
                .with_site(site)
                .context("Invalid command line override")?;
            run_evaluate(&scenario, csv, json)
        }
        Command::Sweep {
            scenario,
            from,
            to,
            step,
            csv,
        } => {
            let scenario = load_scenario(scenario.as_deref())?;
            run_sweep(&scenario, from, to, step, &csv)
        }
        Command::Defaults => {
            let text = ScenarioDocument::default()
                .to_toml_string()
                .context("Failed to serialise default scenario")?;
            print!("{}", text);
            Ok(())
        }
    }
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => {
            info!("Loading scenario from {:?}", path);
            Scenario::load(path).with_context(|| format!("Failed to load scenario: {:?}", path))
        }
        None => {
            info!("No scenario file given, using defaults");
            Ok(Scenario::default())
        }
    }
}

fn run_evaluate(scenario: &Scenario, csv: Option<PathBuf>, json: Option<PathBuf>) -> Result<()> {
    let site = scenario.site();
    info!(
        "Evaluating P={} mm over {} m2 (CN {}, slope {})",
        site.storm_depth_mm, site.catchment_area_m2, site.base_curve_number, site.slope
    );

    let result = evaluate(scenario);

    println!("\nWater Balance:");
    println!("  Baseline runoff:          {:>10.1} m3", result.baseline_runoff_m3);
    println!("  Effective runoff:         {:>10.1} m3", result.effective_runoff_m3);
    println!("  Captured in tanks:        {:>10.1} m3", result.rooftop.captured_m3);
    println!("  Road protection score:    {:>10.0} / 100", result.protection_score);

    if let Some(path) = csv {
        write_breakdown_csv(&path, &result)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to write CSV: {:?}", path))?;
        info!("Breakdown saved to {:?}", path);
    }

    if let Some(path) = json {
        write_json_report(&path, scenario, &result)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to write JSON report: {:?}", path))?;
        info!("Report saved to {:?}", path);
    }

    Ok(())
}

fn run_sweep(scenario: &Scenario, from: f64, to: f64, step: f64, csv: &Path) -> Result<()> {
    let depths = depth_range(from, to, step).context("Invalid sweep range")?;

    let pb = ProgressBar::new(depths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} storms ({eta})")?
            .progress_chars("#>-"),
    );

    let points = storm_sweep_with(scenario, &depths, |_| pb.inc(1))?;
    pb.finish();

    write_sweep_csv(csv, &points)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("Failed to write CSV: {:?}", csv))?;

    info!(
        "Sweep of {} storms complete. Output saved to {:?}",
        points.len(),
        csv
    );
    Ok(())
}
