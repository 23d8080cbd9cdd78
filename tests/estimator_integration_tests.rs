//! End-to-end estimation scenarios.
//!
//! Exercises the full pipeline: JSON profile in, report out, including
//! the numeric parity cases the library's rounding contract is built
//! around.

use approx::assert_relative_eq;

use farm_carbon_rust::{
    classify_tier, season_for_month, CarbonEstimator, CropType, EmissionCategory, EmissionFactors,
    EmitterTier, EstimateError, FarmProfile, FertilizerType, IrrigationType, Season, SoilType,
};

fn estimator() -> CarbonEstimator {
    CarbonEstimator::new(EmissionFactors::india())
}

/// A profile as a UI form layer would hand it over, using the
/// user-facing labels.
fn profile_from_json(json: &str) -> FarmProfile {
    serde_json::from_str(json).expect("profile JSON should parse")
}

const RICE_ONE_HECTARE: &str = r#"{
    "crop_type": "Rice",
    "area_hectares": 1.0,
    "soil_type": "Loamy",
    "yield_tonnes_per_hectare": 4.0,
    "fertilizer_type": "Urea",
    "fertilizer_kg_per_year": 0.0,
    "pesticide_type": "Chemical",
    "pesticide_litres_per_year": 0.0,
    "irrigation_type": "Rainfed",
    "irrigation_hours_per_year": 0,
    "tractor_hours_per_year": 0,
    "crop_cycles_per_year": 1,
    "uses_renewable_energy": false,
    "uses_cover_cropping": false
}"#;

#[test]
fn rice_hectare_lands_in_medium_tier() {
    let profile = profile_from_json(RICE_ONE_HECTARE);
    let report = estimator().estimate(&profile).unwrap();

    assert_relative_eq!(
        report.category(EmissionCategory::CropCultivation),
        2.70,
        epsilon = 1e-12
    );
    assert_relative_eq!(report.total_emissions, 2.70, epsilon = 1e-12);
    assert_relative_eq!(report.per_hectare().unwrap(), 2.70, epsilon = 1e-12);
    assert_eq!(report.tier().unwrap(), EmitterTier::Medium);
    assert!(report.recommendations.iter().any(|r| r.contains("nitrogen-fixing")));
}

#[test]
fn cover_cropping_shaves_the_crop_term() {
    let mut profile = profile_from_json(RICE_ONE_HECTARE);
    profile.uses_cover_cropping = true;
    let report = estimator().estimate(&profile).unwrap();

    // 2.70 * 0.95 = 2.565, rounded half away from zero to 2.57
    assert_relative_eq!(report.total_emissions, 2.57, epsilon = 1e-12);
}

#[test]
fn zero_area_still_produces_a_breakdown() {
    let mut profile = profile_from_json(RICE_ONE_HECTARE);
    profile.area_hectares = 0.0;
    profile.fertilizer_kg_per_year = 1000.0;
    let report = estimator().estimate(&profile).unwrap();

    assert_relative_eq!(report.category(EmissionCategory::CropCultivation), 0.0);
    assert_relative_eq!(report.category(EmissionCategory::Fertilizers), 1.59);
    assert_relative_eq!(report.total_emissions, 1.59, epsilon = 1e-12);
    assert_eq!(report.per_hectare().unwrap_err(), EstimateError::UndefinedRate);
}

#[test]
fn urea_thousand_kg_triggers_fertilizer_recommendation() {
    let profile = FarmProfile {
        fertilizer_type: FertilizerType::Urea,
        fertilizer_kg_per_year: 1000.0,
        ..FarmProfile::default()
    };
    let report = estimator().estimate(&profile).unwrap();

    assert_relative_eq!(
        report.category(EmissionCategory::Fertilizers),
        1.59,
        epsilon = 1e-12
    );
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("bio-fertilizers")));
}

#[test]
fn total_always_matches_rounded_category_sum() {
    // Sweep a grid of farms; the invariant must hold everywhere.
    let mut checked = 0;
    for crop in CropType::ALL {
        for area in [0.0, 0.37, 13.5, 499.9] {
            for cycles in [1u32, 4] {
                let profile = FarmProfile {
                    crop_type: crop,
                    area_hectares: area,
                    fertilizer_kg_per_year: 432.1,
                    pesticide_litres_per_year: 55.5,
                    irrigation_type: IrrigationType::DieselPump,
                    irrigation_hours_per_year: 777,
                    tractor_hours_per_year: 333,
                    crop_cycles_per_year: cycles,
                    uses_renewable_energy: true,
                    uses_cover_cropping: true,
                    ..FarmProfile::default()
                };
                let report = estimator().estimate(&profile).unwrap();
                let sum: f64 = report.categories.iter().map(|c| c.tonnes_co2e).sum();
                assert_relative_eq!(report.total_emissions, sum, epsilon = 1e-9);
                for c in &report.categories {
                    assert!(c.tonnes_co2e >= 0.0);
                }
                checked += 1;
            }
        }
    }
    assert_eq!(checked, CropType::ALL.len() * 4 * 2);
}

#[test]
fn tier_never_drops_as_the_rate_grows() {
    let mut last = classify_tier(0.0);
    for step in 1..=600 {
        let tier = classify_tier(step as f64 * 0.01);
        assert!(tier >= last, "tier regressed at rate {}", step as f64 * 0.01);
        last = tier;
    }
    assert_eq!(last, EmitterTier::High);
}

#[test]
fn black_soil_sugarcane_rule_fires_first() {
    let profile = FarmProfile {
        crop_type: CropType::Sugarcane,
        soil_type: SoilType::BlackSoil,
        area_hectares: 2.0,
        ..FarmProfile::default()
    };
    let report = estimator().estimate(&profile).unwrap();

    assert!(report.recommendations.len() >= 2);
    assert!(report.recommendations[0].contains("organic compost"));
    assert!(report.recommendations[1].contains("nitrogen-fixing"));
}

#[test]
fn out_of_range_profile_is_rejected_end_to_end() {
    let mut profile = profile_from_json(RICE_ONE_HECTARE);
    profile.pesticide_litres_per_year = 500.5;
    let err = estimator().estimate(&profile).unwrap_err();
    assert!(matches!(
        err,
        EstimateError::InvalidInput { field: "pesticide_litres_per_year", .. }
    ));
}

#[test]
fn report_serializes_with_form_labels() {
    let profile = profile_from_json(RICE_ONE_HECTARE);
    let report = estimator().estimate(&profile).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let first = &json["categories"][0];
    assert_eq!(first["category"], "Crop Cultivation");
    assert_relative_eq!(first["tonnes_co2e"].as_f64().unwrap(), 2.70, epsilon = 1e-12);
    assert_relative_eq!(
        json["total_emissions"].as_f64().unwrap(),
        2.70,
        epsilon = 1e-12
    );
}

#[test]
fn batch_estimation_preserves_order_and_errors() {
    let good = profile_from_json(RICE_ONE_HECTARE);
    let bad = FarmProfile {
        area_hectares: -3.0,
        ..FarmProfile::default()
    };
    let results = estimator().estimate_many(&[good.clone(), bad, good]);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
    assert_eq!(
        results[0].as_ref().unwrap().total_emissions,
        results[2].as_ref().unwrap().total_emissions
    );
}

#[test]
fn seasons_cover_the_whole_year() {
    for month in 1..=12 {
        let season = season_for_month(month).unwrap();
        match month {
            6..=8 => assert_eq!(season, Season::Kharif),
            10..=12 => assert_eq!(season, Season::Rabi),
            _ => assert_eq!(season, Season::Zaid),
        }
    }
}
