use crate::config::MoundBedConfig;
use serde::Serialize;

/// Mound-bed storage and interception (m³).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MoundBedBalance {
    pub capacity_m3: f64,
    pub intercepted_m3: f64,
    pub overflow_m3: f64,
}

/// Water the buried cores can hold: gross core volume reduced by porosity and
/// by the unusable border fraction.
pub fn storage_capacity_m3(cfg: &MoundBedConfig) -> f64 {
    let core_m3 = f64::from(cfg.bed_count) * cfg.length_m * cfg.width_m * cfg.core_depth_m;
    core_m3 * cfg.porosity * (1.0 - cfg.border_loss)
}

/// Interception of the share of baseline runoff directed at the beds.
///
/// The beds take at most their storage capacity; whatever is directed at them
/// beyond that is overflow and remains surface runoff.
pub fn mound_bed_balance(baseline_runoff_m3: f64, config: Option<&MoundBedConfig>) -> MoundBedBalance {
    let Some(cfg) = config else {
        return MoundBedBalance::default();
    };

    let capacity_m3 = storage_capacity_m3(cfg);
    let directed_m3 = baseline_runoff_m3 * cfg.intercept_share;
    let intercepted_m3 = f64::min(directed_m3, capacity_m3);
    let overflow_m3 = f64::max(0.0, directed_m3 - intercepted_m3);

    MoundBedBalance {
        capacity_m3,
        intercepted_m3,
        overflow_m3,
    }
}
