use crate::balance::evaluate;
use crate::config::Scenario;
use crate::error::{ConfigError, finite, positive};
use serde::Serialize;

/// Upper bound on the number of storm depths in one sweep.
pub const MAX_SWEEP_DEPTHS: usize = 10_000;

// One storm depth of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub storm_depth_mm: f64,
    pub baseline_runoff_m3: f64,
    pub effective_runoff_m3: f64,
    pub captured_m3: f64,
    pub protection_score: f64,
}

/// Storm depths from `from` to `to` inclusive in steps of `step` (all mm).
pub fn depth_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>, ConfigError> {
    positive("sweep.from", from)?;
    positive("sweep.step", step)?;
    if finite("sweep.to", to)? < from {
        return Err(ConfigError::OutOfRange {
            field: "sweep.to",
            value: to,
            range: "[from, inf)",
        });
    }

    // Index-based to avoid accumulating rounding error
    let steps = ((to - from) / step + 1e-9).floor();
    if steps >= MAX_SWEEP_DEPTHS as f64 {
        return Err(ConfigError::OutOfRange {
            field: "sweep.step",
            value: step,
            range: "[(to - from) / 10000, inf)",
        });
    }
    let count = steps as usize;
    Ok((0..=count).map(|i| from + step * i as f64).collect())
}

/// Re-evaluate `scenario` under each storm depth, calling `on_point` after
/// each evaluation (progress reporting hook).
pub fn storm_sweep_with<F>(
    scenario: &Scenario,
    depths: &[f64],
    mut on_point: F,
) -> Result<Vec<SweepPoint>, ConfigError>
where
    F: FnMut(&SweepPoint),
{
    let mut points = Vec::with_capacity(depths.len());
    for &depth in depths {
        let result = evaluate(&scenario.with_storm_depth(depth)?);
        let point = SweepPoint {
            storm_depth_mm: depth,
            baseline_runoff_m3: result.baseline_runoff_m3,
            effective_runoff_m3: result.effective_runoff_m3,
            captured_m3: result.rooftop.captured_m3,
            protection_score: result.protection_score,
        };
        on_point(&point);
        points.push(point);
    }
    Ok(points)
}

pub fn storm_sweep(scenario: &Scenario, depths: &[f64]) -> Result<Vec<SweepPoint>, ConfigError> {
    storm_sweep_with(scenario, depths, |_| {})
}
