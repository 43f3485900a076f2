use crate::config::HedgerowConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HedgerowInfiltration {
    /// Runoff left after mound-bed interception.
    pub remainder_m3: f64,
    pub infiltrated_m3: f64,
}

/// Extra infiltration along hedgerows.
///
/// Acts on the runoff remaining after mound-bed interception, never on raw
/// baseline runoff.
pub fn hedgerow_infiltration(
    baseline_runoff_m3: f64,
    mound_bed_intercepted_m3: f64,
    config: Option<&HedgerowConfig>,
) -> HedgerowInfiltration {
    let remainder_m3 = f64::max(0.0, baseline_runoff_m3 - mound_bed_intercepted_m3);
    let infiltrated_m3 = config.map_or(0.0, |cfg| remainder_m3 * cfg.infiltration_share);

    HedgerowInfiltration {
        remainder_m3,
        infiltrated_m3,
    }
}
