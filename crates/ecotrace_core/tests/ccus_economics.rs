use ecotrace_core::{
    builtin_pathways, builtin_storage_sites, estimate_roi, rank_storage_sites,
    utilization_pathways, value_credits, CaptureSimulator, CcusError, EngineConfig, IndustryTable,
    StorageSite,
};

fn simulator() -> CaptureSimulator {
    CaptureSimulator::new(IndustryTable::builtin(), EngineConfig::default())
}

#[test]
fn cement_plant_capture_splits_65_35() {
    let analysis = simulator()
        .simulate("cement", 100_000.0)
        .expect("cement should be supported");

    assert_eq!(analysis.capture_efficiency_percent, 65.0);
    assert_eq!(analysis.capturable_tonnes, 65_000.0);
    assert_eq!(analysis.remaining_tonnes, 35_000.0);
    assert_eq!(analysis.reduction_percent, 65.0);
}

#[test]
fn unsupported_industry_fails_with_offending_type() {
    let err = simulator()
        .simulate("agriculture", 50_000.0)
        .expect_err("unknown industry must fail");
    assert_eq!(err, CcusError::UnsupportedIndustry("agriculture".to_string()));
}

#[test]
fn non_positive_emissions_fail() {
    let sim = simulator();
    for tonnes in [0.0, -100.0, f64::NAN] {
        let err = sim
            .simulate("cement", tonnes)
            .expect_err("invalid emissions must fail");
        assert!(matches!(err, CcusError::InvalidEmissions(_)));
    }
}

#[test]
fn sites_rank_by_capacity_descending_with_single_recommendation() {
    let ranked = rank_storage_sites(65_000.0, &builtin_storage_sites(), None)
        .expect("positive tonnage is valid");

    for pair in ranked.windows(2) {
        assert!(
            pair[0].total_capacity_mt >= pair[1].total_capacity_mt,
            "{} ranked above {} out of order",
            pair[0].region,
            pair[1].region
        );
    }

    assert_eq!(ranked[0].region, "Gujarat");
    let recommended_count = ranked.iter().filter(|site| site.recommended).count();
    assert_eq!(recommended_count, 1);
    assert!(ranked[0].recommended);
}

#[test]
fn preferred_region_outranks_larger_capacity() {
    let ranked = rank_storage_sites(65_000.0, &builtin_storage_sites(), Some("Jharkhand"))
        .expect("positive tonnage is valid");

    assert_eq!(ranked[0].region, "Jharkhand");
    assert!(ranked[0].recommended);
    assert_eq!(ranked[0].proximity_score, 1.0);
    // Remaining sites fall back to capacity order.
    assert_eq!(ranked[1].region, "Gujarat");
    assert_eq!(ranked[1].proximity_score, 0.5);
    assert_eq!(ranked.iter().filter(|site| site.recommended).count(), 1);
}

#[test]
fn empty_site_list_ranks_to_empty() {
    let ranked =
        rank_storage_sites(1_000.0, &[], Some("Gujarat")).expect("empty input is not an error");
    assert!(ranked.is_empty());
}

#[test]
fn ranking_rejects_non_positive_tonnage() {
    let err = rank_storage_sites(0.0, &builtin_storage_sites(), None)
        .expect_err("zero tonnage must fail");
    assert!(matches!(
        err,
        CcusError::InvalidInput {
            name: "co2_tonnes",
            ..
        }
    ));
}

#[test]
fn credits_value_is_price_times_tonnage() {
    let valuation = value_credits(65_000.0, 1_500.0, &EngineConfig::default())
        .expect("positive inputs are valid");
    assert_eq!(valuation.total_value, 97_500_000.0);
    assert_eq!(valuation.annual_revenue_potential, 97_500_000.0);

    for (stored, price) in [(0.0, 10.0), (-5.0, 10.0), (100.0, 0.0), (100.0, -1.0)] {
        assert!(value_credits(stored, price, &EngineConfig::default()).is_err());
    }
}

#[test]
fn roi_scenario_one_million_invested() {
    let roi = estimate_roi(1_000_000.0, 150_000.0, 10, &EngineConfig::default())
        .expect("non-zero inputs are valid");
    assert_eq!(roi.total_revenue, 1_500_000.0);
    assert_eq!(roi.net_profit, 500_000.0);
    assert_eq!(roi.roi_percent, 50.0);
    assert!((roi.payback_years - 6.67).abs() < 0.005);
}

#[test]
fn roi_reports_losses_without_clamping() {
    let roi = estimate_roi(1_000_000.0, 50_000.0, 10, &EngineConfig::default())
        .expect("non-zero inputs are valid");
    assert_eq!(roi.total_revenue, 500_000.0);
    assert_eq!(roi.net_profit, -500_000.0);
    assert_eq!(roi.roi_percent, -50.0);
}

#[test]
fn roi_division_by_zero_is_rejected() {
    let config = EngineConfig::default();
    let err = estimate_roi(0.0, 150_000.0, 10, &config).expect_err("zero investment");
    assert_eq!(err, CcusError::DivisionByZero { name: "investment" });

    let err = estimate_roi(1_000_000.0, 0.0, 10, &config).expect_err("zero revenue");
    assert_eq!(
        err,
        CcusError::DivisionByZero {
            name: "annual_revenue"
        }
    );
}

#[test]
fn pathways_rank_by_utilizable_tonnage_with_single_recommendation() {
    let ranked = utilization_pathways(1_000.0, &builtin_pathways(), &EngineConfig::default())
        .expect("positive tonnage is valid");

    for pair in ranked.windows(2) {
        assert!(
            pair[0].utilizable_co2_tonnes >= pair[1].utilizable_co2_tonnes,
            "{} ranked above {} out of order",
            pair[0].pathway,
            pair[1].pathway
        );
    }

    // 1000 t * 0.40 capacity * 90% efficiency.
    assert_eq!(ranked[0].pathway, "enhanced_oil_recovery");
    assert_eq!(ranked[0].utilizable_co2_tonnes, 360.0);
    assert!(ranked[0].recommended);
    assert_eq!(ranked.iter().filter(|p| p.recommended).count(), 1);
}

#[test]
fn pathway_ranking_rejects_non_positive_tonnage_and_handles_empty_catalog() {
    let config = EngineConfig::default();
    let err = utilization_pathways(-5.0, &builtin_pathways(), &config)
        .expect_err("negative tonnage must fail");
    assert!(matches!(
        err,
        CcusError::InvalidInput {
            name: "co2_tonnes",
            ..
        }
    ));

    let empty = utilization_pathways(100.0, &[], &config).expect("empty catalog is not an error");
    assert!(empty.is_empty());
}

#[test]
fn comprehensive_analysis_chains_capture_storage_utilization_and_credits() {
    let report = simulator()
        .comprehensive_analysis(
            "cement",
            100_000.0,
            &builtin_storage_sites(),
            &builtin_pathways(),
            Some("Rajasthan"),
            1_500.0,
        )
        .expect("valid inputs");

    assert_eq!(report.capture.capturable_tonnes, 65_000.0);
    assert_eq!(report.storage_options[0].region, "Rajasthan");
    assert!(report.storage_options[0].recommended);
    assert_eq!(report.utilization_options[0].pathway, "enhanced_oil_recovery");
    assert_eq!(report.utilization_options[0].utilizable_co2_tonnes, 23_400.0);
    assert!(report.utilization_options[0].recommended);
    assert_eq!(report.credits.stored_tonnes, 65_000.0);
    assert_eq!(report.credits.total_value, 97_500_000.0);
}

#[test]
fn comprehensive_analysis_values_credits_from_exact_capturable_tonnage() {
    // 10.03 t at 65% captures 6.5195 t exactly; the display field rounds to
    // 6.52 but downstream valuation must use the exact figure.
    let report = simulator()
        .comprehensive_analysis(
            "cement",
            10.03,
            &builtin_storage_sites(),
            &builtin_pathways(),
            None,
            100.0,
        )
        .expect("valid inputs");

    assert_eq!(report.capture.capturable_tonnes, 6.52);
    assert!((report.credits.stored_tonnes - 6.5195).abs() < 1e-9);
    assert!((report.credits.total_value - 651.95).abs() < 1e-9);
}

#[test]
fn ranked_sites_keep_the_capacity_identity() {
    let sites = vec![
        StorageSite::new("A", 10.0, 20.0, 5.0),
        StorageSite::new("B", 0.0, 50.0, 0.0),
    ];
    let ranked = rank_storage_sites(100.0, &sites, None).expect("valid input");
    for site in &ranked {
        assert_eq!(
            site.total_capacity_mt,
            site.depleted_wells_mt + site.saline_aquifers_mt + site.coal_seams_mt
        );
    }
    assert_eq!(ranked[0].region, "B");
}

#[test]
fn analysis_serializes_with_snake_case_fields() {
    let analysis = simulator()
        .simulate("power", 10_000.0)
        .expect("power should be supported");
    let json = serde_json::to_value(&analysis).expect("serializable");
    assert_eq!(json["industry_type"], "power");
    assert_eq!(json["capturable_tonnes"], 9_000.0);
    assert_eq!(json["remaining_tonnes"], 1_000.0);
}
