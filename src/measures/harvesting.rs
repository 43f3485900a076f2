use crate::config::HarvestingConfig;
use crate::hydrology::{depth_to_volume_m3, litres_to_m3};
use serde::Serialize;

/// Rooftop rainwater harvesting balance (m³).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RooftopBalance {
    pub yield_m3: f64,
    pub capacity_m3: f64,
    pub captured_m3: f64,
    pub overflow_m3: f64,
}

/// Roof runoff after first-flush diversion, split into tank capture and overflow.
///
/// Overflow is not lost: it is routed to the ground and rejoins the effective
/// runoff total.
pub fn rooftop_balance(storm_depth_mm: f64, config: Option<&HarvestingConfig>) -> RooftopBalance {
    let Some(cfg) = config else {
        return RooftopBalance::default();
    };

    let harvestable_mm = f64::max(0.0, storm_depth_mm - cfg.first_flush_mm);
    let yield_m3 = depth_to_volume_m3(harvestable_mm, cfg.roof_area_m2);
    let capacity_m3 = litres_to_m3(cfg.unit_volume_l * f64::from(cfg.unit_count));
    let captured_m3 = f64::min(yield_m3, capacity_m3);
    let overflow_m3 = f64::max(0.0, yield_m3 - captured_m3);

    RooftopBalance {
        yield_m3,
        capacity_m3,
        captured_m3,
        overflow_m3,
    }
}
