use approx::assert_abs_diff_eq;
use stormwater_rs::{
    HarvestingConfig, HedgerowConfig, Measures, MoundBedConfig, PermeablePavementConfig,
    Scenario, SiteConfig, SlopeCategory, evaluate,
};

fn reference_site() -> SiteConfig {
    SiteConfig {
        storm_depth_mm: 80.0,
        catchment_area_m2: 3000.0,
        base_curve_number: 85.0,
        slope: SlopeCategory::Moderate,
    }
}

fn all_measures() -> Measures {
    Measures {
        harvesting: Some(HarvestingConfig::default()),
        hedgerow: Some(HedgerowConfig::default()),
        mound_bed: Some(MoundBedConfig::default()),
        permeable_pavement: Some(PermeablePavementConfig::default()),
    }
}

#[test]
fn reference_storm_without_measures() {
    let r = evaluate(&Scenario::new(reference_site(), Measures::none()).unwrap());

    // S = 44.82 mm, Ia = 8.965 mm, Q = 43.55 mm
    assert_abs_diff_eq!(r.effective_curve_number, 85.0);
    assert_abs_diff_eq!(r.baseline_runoff_mm, 43.553, epsilon = 1e-3);
    assert_abs_diff_eq!(r.baseline_runoff_m3, 130.66, epsilon = 0.01);
    assert_abs_diff_eq!(r.effective_runoff_m3, r.baseline_runoff_m3);
}

#[test]
fn hedgerow_lowers_curve_number_and_baseline() {
    let bare = evaluate(&Scenario::new(reference_site(), Measures::none()).unwrap());
    let measures = Measures {
        hedgerow: Some(HedgerowConfig {
            cn_reduction: 4.0,
            infiltration_share: 0.0,
        }),
        ..Measures::none()
    };
    let hedged = evaluate(&Scenario::new(reference_site(), measures).unwrap());

    assert_abs_diff_eq!(hedged.effective_curve_number, 81.0);
    assert!(hedged.baseline_runoff_m3 < bare.baseline_runoff_m3);
}

#[test]
fn rooftop_overflow_reference_case() {
    let measures = Measures {
        harvesting: Some(HarvestingConfig {
            roof_area_m2: 400.0,
            unit_volume_l: 1000.0,
            unit_count: 10,
            first_flush_mm: 2.0,
        }),
        ..Measures::none()
    };
    let r = evaluate(&Scenario::new(reference_site(), measures).unwrap());

    assert_abs_diff_eq!(r.rooftop.yield_m3, 31.2, epsilon = 1e-9);
    assert_abs_diff_eq!(r.rooftop.captured_m3, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(r.rooftop.overflow_m3, 21.2, epsilon = 1e-9);
    // Overflow rejoins the ground system
    assert_abs_diff_eq!(
        r.effective_runoff_m3,
        r.baseline_runoff_m3 + 21.2,
        epsilon = 1e-9
    );
}

#[test]
fn hedgerow_acts_after_mound_beds() {
    let measures = Measures {
        hedgerow: Some(HedgerowConfig {
            cn_reduction: 0.0,
            infiltration_share: 0.2,
        }),
        mound_bed: Some(MoundBedConfig {
            intercept_share: 0.5,
            ..MoundBedConfig::default()
        }),
        ..Measures::none()
    };
    let r = evaluate(&Scenario::new(reference_site(), measures).unwrap());

    let directed = 0.5 * r.baseline_runoff_m3;
    assert_abs_diff_eq!(r.mound_bed.capacity_m3, 36.72, epsilon = 1e-9);
    assert_abs_diff_eq!(r.mound_bed.intercepted_m3, 36.72, epsilon = 1e-9);
    assert_abs_diff_eq!(r.mound_bed.overflow_m3, directed - 36.72, epsilon = 1e-9);

    let remainder = r.baseline_runoff_m3 - 36.72;
    assert_abs_diff_eq!(r.hedgerow.infiltrated_m3, 0.2 * remainder, epsilon = 1e-9);
    assert_abs_diff_eq!(
        r.effective_runoff_m3,
        remainder - 0.2 * remainder + r.mound_bed.overflow_m3,
        epsilon = 1e-9
    );
}

#[test]
fn pavement_infiltration_can_zero_surface_runoff() {
    let site = SiteConfig {
        storm_depth_mm: 30.0,
        base_curve_number: 90.0,
        ..reference_site()
    };
    let measures = Measures {
        permeable_pavement: Some(PermeablePavementConfig {
            cn_reduction: 0.0,
            infiltration_share: 1.0,
            converted_fraction: 1.0,
        }),
        harvesting: Some(HarvestingConfig {
            unit_count: 0,
            ..HarvestingConfig::default()
        }),
        ..Measures::none()
    };
    let r = evaluate(&Scenario::new(site, measures).unwrap());

    assert!(r.baseline_runoff_m3 > 0.0);
    assert!(r.baseline_runoff_m3 < r.pavement.infiltrated_m3);
    // Floor applies before the rooftop overflow is added back
    assert_abs_diff_eq!(r.pavement.infiltrated_m3, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.effective_runoff_m3, r.rooftop.overflow_m3, epsilon = 1e-9);
}

#[test]
fn steep_slope_at_cn_100_never_exceeds_rainfall() {
    let mut last = 0.0;
    for tenth in 1..=2000 {
        let p = f64::from(tenth) / 10.0;
        let site = SiteConfig {
            storm_depth_mm: p,
            catchment_area_m2: 1000.0,
            base_curve_number: 100.0,
            slope: SlopeCategory::Steep,
        };
        let r = evaluate(&Scenario::new(site, Measures::none()).unwrap());

        assert!(r.effective_curve_number > 100.0);
        assert!(
            r.baseline_runoff_mm <= r.storm_depth_mm,
            "P={p}: runoff {} mm",
            r.baseline_runoff_mm
        );
        assert!(r.baseline_runoff_mm >= last, "P={p}: runoff fell to {}", r.baseline_runoff_mm);
        last = r.baseline_runoff_mm;
    }
}

#[test]
fn small_storm_produces_no_baseline_runoff() {
    let site = SiteConfig {
        storm_depth_mm: 5.0,
        base_curve_number: 70.0,
        ..reference_site()
    };
    let measures = Measures {
        harvesting: None,
        ..all_measures()
    };
    let r = evaluate(&Scenario::new(site, measures).unwrap());

    assert_eq!(r.baseline_runoff_m3, 0.0);
    assert_eq!(r.mound_bed.intercepted_m3, 0.0);
    assert_eq!(r.mound_bed.overflow_m3, 0.0);
    assert_eq!(r.hedgerow.infiltrated_m3, 0.0);
    assert_eq!(r.effective_runoff_m3, 0.0);
    // Zero over zero reads as full reduction, not a fault
    assert_abs_diff_eq!(r.score.flow_reduction, 40.0);
    assert!(r.protection_score <= 100.0);
}

#[test]
fn disabling_a_measure_zeroes_its_contribution() {
    let full = Scenario::new(reference_site(), all_measures()).unwrap();

    let r = evaluate(&full);
    assert!(r.rooftop.captured_m3 > 0.0);
    assert!(r.mound_bed.intercepted_m3 > 0.0);
    assert!(r.pavement.infiltrated_m3 > 0.0);
    assert!(r.hedgerow.infiltrated_m3 > 0.0);

    let mut m = all_measures();
    m.harvesting = None;
    let r = evaluate(&Scenario::new(reference_site(), m).unwrap());
    assert_eq!(r.rooftop.yield_m3, 0.0);
    assert_eq!(r.rooftop.captured_m3, 0.0);
    assert_eq!(r.rooftop.overflow_m3, 0.0);

    let mut m = all_measures();
    m.mound_bed = None;
    let r = evaluate(&Scenario::new(reference_site(), m).unwrap());
    assert_eq!(r.mound_bed.capacity_m3, 0.0);
    assert_eq!(r.mound_bed.intercepted_m3, 0.0);
    assert_eq!(r.mound_bed.overflow_m3, 0.0);
    assert_eq!(r.score.storage_use, 0.0);

    let mut m = all_measures();
    m.permeable_pavement = None;
    let r = evaluate(&Scenario::new(reference_site(), m).unwrap());
    assert_eq!(r.pavement.infiltrated_m3, 0.0);
    assert_eq!(r.score.dispersion, 0.0);

    let mut m = all_measures();
    m.hedgerow = None;
    let r = evaluate(&Scenario::new(reference_site(), m).unwrap());
    assert_eq!(r.hedgerow.infiltrated_m3, 0.0);
    assert_eq!(r.score.stability, 0.0);
}

#[test]
fn invariants_hold_across_input_grid() {
    let storms = [1.0, 10.0, 25.0, 80.0, 150.0, 300.0];
    let curve_numbers = [30.0, 55.0, 85.0, 98.0, 100.0];
    let slopes = [SlopeCategory::Low, SlopeCategory::Moderate, SlopeCategory::Steep];
    let shares = [0.0, 0.3, 1.0];
    let tank_counts = [0, 3, 200];
    let bed_counts = [0, 1, 50];

    for &storm in &storms {
        for &cn in &curve_numbers {
            for &slope in &slopes {
                for &share in &shares {
                    for (&tanks, &beds) in tank_counts.iter().zip(&bed_counts) {
                        let site = SiteConfig {
                            storm_depth_mm: storm,
                            catchment_area_m2: 2500.0,
                            base_curve_number: cn,
                            slope,
                        };
                        let measures = Measures {
                            harvesting: Some(HarvestingConfig {
                                unit_count: tanks,
                                ..HarvestingConfig::default()
                            }),
                            hedgerow: Some(HedgerowConfig {
                                cn_reduction: 10.0,
                                infiltration_share: share,
                            }),
                            mound_bed: Some(MoundBedConfig {
                                bed_count: beds,
                                intercept_share: share,
                                ..MoundBedConfig::default()
                            }),
                            permeable_pavement: Some(PermeablePavementConfig {
                                cn_reduction: 20.0,
                                infiltration_share: share,
                                converted_fraction: share,
                            }),
                        };
                        let r = evaluate(&Scenario::new(site, measures).unwrap());
                        let ctx = format!("P={storm} CN={cn} slope={slope} share={share} tanks={tanks} beds={beds}");

                        for v in [
                            r.baseline_runoff_m3,
                            r.rooftop.yield_m3,
                            r.rooftop.captured_m3,
                            r.rooftop.overflow_m3,
                            r.mound_bed.capacity_m3,
                            r.mound_bed.intercepted_m3,
                            r.mound_bed.overflow_m3,
                            r.pavement.infiltrated_m3,
                            r.hedgerow.infiltrated_m3,
                            r.effective_runoff_m3,
                        ] {
                            assert!(v >= 0.0 && v.is_finite(), "{ctx}: volume {v}");
                        }
                        assert!(r.rooftop.captured_m3 <= r.rooftop.capacity_m3, "{ctx}");
                        assert!(r.mound_bed.intercepted_m3 <= r.mound_bed.capacity_m3, "{ctx}");
                        assert!(
                            (0.0..=100.0).contains(&r.protection_score),
                            "{ctx}: score {}",
                            r.protection_score
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn evaluation_is_repeatable() {
    let s = Scenario::new(reference_site(), all_measures()).unwrap();
    assert_eq!(evaluate(&s), evaluate(&s));
}

#[test]
fn invalid_inputs_name_the_field() {
    let measures = Measures {
        permeable_pavement: Some(PermeablePavementConfig {
            converted_fraction: 1.2,
            ..PermeablePavementConfig::default()
        }),
        ..Measures::none()
    };
    let err = Scenario::new(reference_site(), measures).unwrap_err();
    assert_eq!(err.field(), Some("permeable_pavement.converted_fraction"));

    let measures = Measures {
        harvesting: Some(HarvestingConfig {
            roof_area_m2: -10.0,
            ..HarvestingConfig::default()
        }),
        ..Measures::none()
    };
    let err = Scenario::new(reference_site(), measures).unwrap_err();
    assert!(err.to_string().contains("harvesting.roof_area_m2"));
}
