//! Road protection score.
//!
//! An additive heuristic on a 0-100 scale, not a physical quantity. The
//! weights (40/20/20/20) are chosen by hand and each term is kept separately
//! so renderers can show where the points come from.
use serde::Serialize;

/// Guards the reduction ratio and storage utilisation against zero divisors.
pub const SCORE_EPSILON: f64 = 1e-9;

pub const FLOW_REDUCTION_WEIGHT: f64 = 40.0;
pub const STABILITY_WEIGHT: f64 = 20.0;
pub const DISPERSION_WEIGHT: f64 = 20.0;
pub const STORAGE_WEIGHT: f64 = 20.0;

/// What the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub baseline_runoff_m3: f64,
    pub effective_runoff_m3: f64,
    pub hedgerow_enabled: bool,
    /// Converted pavement fraction, 0 when pavement is disabled.
    pub pavement_converted_fraction: f64,
    /// Mound-bed (intercepted, capacity) in m³, when beds are enabled.
    pub mound_bed: Option<(f64, f64)>,
}

/// Weighted score terms, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Runoff reduction against the baseline.
    pub flow_reduction: f64,
    /// Hedgerows present (slope stability proxy).
    pub stability: f64,
    /// Permeable share of the catchment (less flow concentration).
    pub dispersion: f64,
    /// Mound-bed storage utilisation.
    pub storage_use: f64,
}

impl ScoreBreakdown {
    /// Sum of the terms clamped to [0, 100].
    pub fn total(&self) -> f64 {
        (self.flow_reduction + self.stability + self.dispersion + self.storage_use).clamp(0.0, 100.0)
    }
}

/// 1 - effective / baseline. A zero baseline gives 1.0 through the epsilon guard
/// when effective runoff is also zero.
pub fn reduction_ratio(baseline_runoff_m3: f64, effective_runoff_m3: f64) -> f64 {
    1.0 - effective_runoff_m3 / (baseline_runoff_m3 + SCORE_EPSILON)
}

pub fn protection_score(inputs: &ScoreInputs) -> ScoreBreakdown {
    let ratio = reduction_ratio(inputs.baseline_runoff_m3, inputs.effective_runoff_m3);

    let storage_use = match inputs.mound_bed {
        Some((intercepted, capacity)) => f64::min(1.0, intercepted / (capacity + SCORE_EPSILON)),
        None => 0.0,
    };

    ScoreBreakdown {
        flow_reduction: FLOW_REDUCTION_WEIGHT * f64::max(0.0, ratio),
        stability: if inputs.hedgerow_enabled {
            STABILITY_WEIGHT
        } else {
            0.0
        },
        dispersion: DISPERSION_WEIGHT * inputs.pavement_converted_fraction,
        storage_use: STORAGE_WEIGHT * storage_use,
    }
}
