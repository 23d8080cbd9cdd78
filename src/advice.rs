//! Threshold-rule recommendations.
//!
//! A fixed, ordered rule list. Every rule is evaluated independently and
//! every matching rule fires, in declaration order, without dedup.
//!
//! The thresholds compare the *unadjusted* fertilizer, irrigation, and
//! pesticide terms but the *adjusted* crop term. The asymmetry is
//! observed behavior of the reference tool and is preserved verbatim;
//! its intent is unverifiable from the source, so it is not "fixed".

use rust_decimal::Decimal;

use crate::estimator::CategoryTerms;
use crate::profile::{CropType, FarmProfile, SoilType};

/// Adjusted crop emission above this fires the crop-rotation rule.
fn crop_threshold() -> Decimal {
    Decimal::TWO
}

/// Unadjusted fertilizer emission above this fires the bio-fertilizer rule.
fn fertilizer_threshold() -> Decimal {
    Decimal::new(5, 1)
}

/// Unadjusted irrigation emission above this fires the drip-irrigation rule.
fn irrigation_threshold() -> Decimal {
    Decimal::new(5, 1)
}

/// Unadjusted pesticide emission above this fires the biopesticide rule.
fn pesticide_threshold() -> Decimal {
    Decimal::new(3, 1)
}

/// Evaluate the recommendation rules for one farm.
pub fn recommend(profile: &FarmProfile, terms: &CategoryTerms) -> Vec<String> {
    let mut recommendations = Vec::new();

    if profile.soil_type == SoilType::BlackSoil && profile.crop_type == CropType::Sugarcane {
        recommendations.push(
            "Since you are using Black Soil for Sugarcane, switching to organic compost \
             can reduce emissions by ~30%."
                .to_string(),
        );
    }
    if terms.adjusted_crop > crop_threshold() {
        recommendations
            .push("Rotate with nitrogen-fixing crops like pulses or apply cover cropping.".to_string());
    }
    if terms.fertilizer > fertilizer_threshold() {
        recommendations.push("Use precision farming or switch to bio-fertilizers.".to_string());
    }
    if terms.irrigation > irrigation_threshold() {
        recommendations.push("Switch to drip/micro irrigation and solar pumping.".to_string());
    }
    if terms.pesticide > pesticide_threshold() {
        recommendations.push("Use biopesticides or integrated pest management (IPM).".to_string());
    }

    recommendations
}
