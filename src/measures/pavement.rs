use crate::config::PermeablePavementConfig;
use crate::hydrology::depth_to_volume_m3;
use serde::Serialize;

/// Rainfall on the permeable sub-area and the part of it that soaks in (m³).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PavementInfiltration {
    pub incident_m3: f64,
    pub infiltrated_m3: f64,
}

/// Direct infiltration through the converted part of the catchment.
///
/// This water never becomes surface runoff and is removed from the combined
/// total, not redirected.
pub fn pavement_infiltration(
    storm_depth_mm: f64,
    catchment_area_m2: f64,
    config: Option<&PermeablePavementConfig>,
) -> PavementInfiltration {
    let Some(cfg) = config else {
        return PavementInfiltration::default();
    };

    let incident_m3 = depth_to_volume_m3(storm_depth_mm, catchment_area_m2 * cfg.converted_fraction);
    PavementInfiltration {
        incident_m3,
        infiltrated_m3: incident_m3 * cfg.infiltration_share,
    }
}
