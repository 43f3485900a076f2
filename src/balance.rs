//! Water balance engine: one scenario in, one balance out.
//!
//! Pure and stateless. Re-evaluating after any input change is just another
//! call to [`evaluate`].
use crate::config::Scenario;
use crate::hydrology::{
    CurveNumberAdjustments, depth_to_volume_m3, effective_curve_number, scs_runoff_depth_mm,
};
use crate::measures::{
    HedgerowInfiltration, MoundBedBalance, PavementInfiltration, RooftopBalance,
    hedgerow_infiltration, mound_bed_balance, pavement_infiltration, rooftop_balance,
};
use crate::score::{SCORE_EPSILON, ScoreBreakdown, ScoreInputs, protection_score};
use log::debug;
use serde::Serialize;

/// Result of one evaluation. All volumes are in m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceResult {
    pub storm_depth_mm: f64,
    pub catchment_area_m2: f64,
    pub effective_curve_number: f64,
    pub baseline_runoff_mm: f64,
    pub baseline_runoff_m3: f64,
    pub rooftop: RooftopBalance,
    pub mound_bed: MoundBedBalance,
    pub pavement: PavementInfiltration,
    pub hedgerow: HedgerowInfiltration,
    pub effective_runoff_m3: f64,
    pub score: ScoreBreakdown,
    pub protection_score: f64,
}

/// One slice of the "where did the water go" split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionPart {
    pub label: &'static str,
    pub volume_m3: f64,
    /// Fraction of the summed parts, 0 when everything is zero.
    pub share: f64,
}

/// Combines the surface terms into effective runoff.
///
/// Floors after each subtraction, with the overflow terms outside the floors:
///
/// ```text
/// r1 = max(0, baseline - intercepted - hedgerow) + mound_overflow
/// r2 = max(0, r1 - pavement)
/// effective = r2 + roof_overflow
/// ```
pub fn combine_runoff(
    baseline_m3: f64,
    mound_intercepted_m3: f64,
    hedgerow_infiltrated_m3: f64,
    mound_overflow_m3: f64,
    pavement_infiltrated_m3: f64,
    roof_overflow_m3: f64,
) -> f64 {
    let r1 = f64::max(0.0, baseline_m3 - mound_intercepted_m3 - hedgerow_infiltrated_m3)
        + mound_overflow_m3;
    let r2 = f64::max(0.0, r1 - pavement_infiltrated_m3);
    r2 + roof_overflow_m3
}

/// Evaluate the water balance of a validated scenario.
pub fn evaluate(scenario: &Scenario) -> BalanceResult {
    let site = scenario.site();
    let measures = scenario.measures();
    let p = site.storm_depth_mm;

    let adjustments = CurveNumberAdjustments {
        hedgerow_reduction: measures.hedgerow.map(|h| h.cn_reduction),
        pavement: measures
            .permeable_pavement
            .map(|pp| (pp.cn_reduction, pp.converted_fraction)),
        slope_factor: site.slope.factor(),
    };
    let cn = effective_curve_number(site.base_curve_number, &adjustments);

    let baseline_runoff_mm = scs_runoff_depth_mm(p, cn);
    let baseline_runoff_m3 = depth_to_volume_m3(baseline_runoff_mm, site.catchment_area_m2);
    debug!(
        "baseline: cn={:.2} q={:.3} mm volume={:.3} m3",
        cn, baseline_runoff_mm, baseline_runoff_m3
    );

    let rooftop = rooftop_balance(p, measures.harvesting.as_ref());
    debug!(
        "rooftop: yield={:.3} captured={:.3} overflow={:.3}",
        rooftop.yield_m3, rooftop.captured_m3, rooftop.overflow_m3
    );

    let mound_bed = mound_bed_balance(baseline_runoff_m3, measures.mound_bed.as_ref());
    debug!(
        "mound beds: capacity={:.3} intercepted={:.3} overflow={:.3}",
        mound_bed.capacity_m3, mound_bed.intercepted_m3, mound_bed.overflow_m3
    );

    let pavement = pavement_infiltration(
        p,
        site.catchment_area_m2,
        measures.permeable_pavement.as_ref(),
    );
    let hedgerow = hedgerow_infiltration(
        baseline_runoff_m3,
        mound_bed.intercepted_m3,
        measures.hedgerow.as_ref(),
    );
    debug!(
        "infiltration: pavement={:.3} hedgerow={:.3}",
        pavement.infiltrated_m3, hedgerow.infiltrated_m3
    );

    let effective_runoff_m3 = combine_runoff(
        baseline_runoff_m3,
        mound_bed.intercepted_m3,
        hedgerow.infiltrated_m3,
        mound_bed.overflow_m3,
        pavement.infiltrated_m3,
        rooftop.overflow_m3,
    );

    let score = protection_score(&ScoreInputs {
        baseline_runoff_m3,
        effective_runoff_m3,
        hedgerow_enabled: measures.hedgerow.is_some(),
        pavement_converted_fraction: measures
            .permeable_pavement
            .map_or(0.0, |pp| pp.converted_fraction),
        mound_bed: measures
            .mound_bed
            .map(|_| (mound_bed.intercepted_m3, mound_bed.capacity_m3)),
    });
    let protection_score = score.total();
    debug!(
        "effective runoff={:.3} m3, score={:.1}",
        effective_runoff_m3, protection_score
    );

    BalanceResult {
        storm_depth_mm: p,
        catchment_area_m2: site.catchment_area_m2,
        effective_curve_number: cn,
        baseline_runoff_mm,
        baseline_runoff_m3,
        rooftop,
        mound_bed,
        pavement,
        hedgerow,
        effective_runoff_m3,
        score,
        protection_score,
    }
}

impl BalanceResult {
    /// Volume split across tanks, bed interception, pavement and hedgerow
    /// infiltration, and what is left as runoff.
    pub fn distribution(&self) -> [DistributionPart; 5] {
        let parts = [
            ("Tanks (rooftop)", self.rooftop.captured_m3),
            ("Mound-bed intercepted", self.mound_bed.intercepted_m3),
            ("Permeable infiltration", self.pavement.infiltrated_m3),
            ("Hedgerow infiltration", self.hedgerow.infiltrated_m3),
            ("Remaining runoff", self.effective_runoff_m3),
        ];
        let total: f64 = parts.iter().map(|(_, v)| v).sum::<f64>() + SCORE_EPSILON;

        parts.map(|(label, volume_m3)| DistributionPart {
            label,
            volume_m3,
            share: volume_m3 / total,
        })
    }

    /// Field-by-field breakdown as (metric, value) rows, unrounded.
    pub fn breakdown_rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Design storm depth (mm)", self.storm_depth_mm),
            ("Catchment area (m2)", self.catchment_area_m2),
            ("Effective CN (after measures)", self.effective_curve_number),
            ("Baseline runoff (m3)", self.baseline_runoff_m3),
            ("Rooftop yield (m3)", self.rooftop.yield_m3),
            ("Captured in tanks (m3)", self.rooftop.captured_m3),
            ("Rooftop overflow to ground (m3)", self.rooftop.overflow_m3),
            ("Mound-bed storage capacity (m3)", self.mound_bed.capacity_m3),
            ("Mound-bed intercepted (m3)", self.mound_bed.intercepted_m3),
            ("Mound-bed overflow (m3)", self.mound_bed.overflow_m3),
            ("Permeable direct infiltration (m3)", self.pavement.infiltrated_m3),
            ("Hedgerow extra infiltration (m3)", self.hedgerow.infiltrated_m3),
            ("Effective runoff after measures (m3)", self.effective_runoff_m3),
            ("Road protection score", self.protection_score),
        ]
    }
}
