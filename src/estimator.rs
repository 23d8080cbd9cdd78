//! Core emission estimation.
//!
//! Converts a [`FarmProfile`] into an [`EmissionReport`] deterministically.
//! The arithmetic runs on `rust_decimal::Decimal` so the reference tool's
//! rounding behavior is reproduced exactly: each category is rounded to
//! 2 dp (half away from zero) *before* summation, and the total is the
//! rounded sum of those already-rounded values. The double rounding can
//! drift up to ±0.01 from the unrounded sum; that drift is part of the
//! numeric contract, not a bug to fix.

use rayon::prelude::*;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::advice;
use crate::error::EstimateError;
use crate::factors::EmissionFactors;
use crate::profile::FarmProfile;
use crate::tier::{classify_tier, EmitterTier};

/// Reduction applied to the irrigation term when the farm runs on
/// solar/wind power.
const RENEWABLE_REDUCTION_PCT: u32 = 10;
/// Reduction applied to the crop-cultivation term when cover cropping
/// or green manure is in use.
const COVER_CROP_REDUCTION_PCT: u32 = 5;

/// The five report categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionCategory {
    #[serde(rename = "Crop Cultivation")]
    CropCultivation,
    Fertilizers,
    Pesticides,
    #[serde(rename = "Machinery Use")]
    MachineryUse,
    Irrigation,
}

impl EmissionCategory {
    pub const ALL: [EmissionCategory; 5] = [
        EmissionCategory::CropCultivation,
        EmissionCategory::Fertilizers,
        EmissionCategory::Pesticides,
        EmissionCategory::MachineryUse,
        EmissionCategory::Irrigation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmissionCategory::CropCultivation => "Crop Cultivation",
            EmissionCategory::Fertilizers => "Fertilizers",
            EmissionCategory::Pesticides => "Pesticides",
            EmissionCategory::MachineryUse => "Machinery Use",
            EmissionCategory::Irrigation => "Irrigation",
        }
    }
}

/// Unrounded per-category terms, both before and after the practice
/// adjustments. Kept on the report because the recommendation rules
/// deliberately mix the two: rules compare the *unadjusted*
/// fertilizer/pesticide/irrigation terms but the *adjusted* crop term
/// (observed source behavior, preserved as-is).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTerms {
    pub crop: Decimal,
    pub adjusted_crop: Decimal,
    pub fertilizer: Decimal,
    pub pesticide: Decimal,
    pub tractor: Decimal,
    pub irrigation: Decimal,
    pub adjusted_irrigation: Decimal,
}

impl CategoryTerms {
    /// Compute all terms for one profile. Total function over validated
    /// profiles; zero area simply zeroes the crop and irrigation terms.
    pub fn compute(
        factors: &EmissionFactors,
        profile: &FarmProfile,
    ) -> Result<CategoryTerms, EstimateError> {
        let area = to_decimal("area_hectares", profile.area_hectares)?;
        let fertilizer_kg = to_decimal("fertilizer_kg_per_year", profile.fertilizer_kg_per_year)?;
        let pesticide_l = to_decimal(
            "pesticide_litres_per_year",
            profile.pesticide_litres_per_year,
        )?;
        let irrigation_hours = Decimal::from(profile.irrigation_hours_per_year);
        let tractor_hours = Decimal::from(profile.tractor_hours_per_year);
        let cycles = Decimal::from(profile.crop_cycles_per_year);

        let crop = factors.crop.get(profile.crop_type) * area * cycles;
        let fertilizer =
            fertilizer_kg * factors.fertilizer.get(profile.fertilizer_type) / Decimal::ONE_THOUSAND;
        let pesticide =
            pesticide_l * factors.pesticide.get(profile.pesticide_type) / Decimal::ONE_THOUSAND;
        let tractor = tractor_hours * factors.tractor_per_hour / Decimal::ONE_THOUSAND;
        let irrigation = factors.irrigation.get(profile.irrigation_type) * irrigation_hours * area
            / Decimal::ONE_THOUSAND;

        // The two reductions never compound: renewable energy touches
        // only irrigation, cover cropping only crop cultivation.
        let renewable_reduction = if profile.uses_renewable_energy {
            Decimal::new(RENEWABLE_REDUCTION_PCT as i64, 2)
        } else {
            Decimal::ZERO
        };
        let cover_crop_reduction = if profile.uses_cover_cropping {
            Decimal::new(COVER_CROP_REDUCTION_PCT as i64, 2)
        } else {
            Decimal::ZERO
        };

        Ok(CategoryTerms {
            crop,
            adjusted_crop: crop * (Decimal::ONE - cover_crop_reduction),
            fertilizer,
            pesticide,
            tractor,
            irrigation,
            adjusted_irrigation: irrigation * (Decimal::ONE - renewable_reduction),
        })
    }

    /// The adjusted term feeding each report category, unrounded.
    pub fn category_value(&self, category: EmissionCategory) -> Decimal {
        match category {
            EmissionCategory::CropCultivation => self.adjusted_crop,
            EmissionCategory::Fertilizers => self.fertilizer,
            EmissionCategory::Pesticides => self.pesticide,
            EmissionCategory::MachineryUse => self.tractor,
            EmissionCategory::Irrigation => self.adjusted_irrigation,
        }
    }
}

/// One row of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryEmission {
    pub category: EmissionCategory,
    /// Tonnes CO2e per year, rounded to 2 dp.
    pub tonnes_co2e: f64,
}

/// The derived, stateless output of one estimation. Computed freshly per
/// request; nothing is cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionReport {
    /// Category breakdown in fixed display order.
    pub categories: [CategoryEmission; 5],
    /// Rounded sum of the five rounded category values.
    pub total_emissions: f64,
    /// Area the profile was computed with; zero makes the per-hectare
    /// rate undefined but the breakdown above still valid.
    pub area_hectares: f64,
    /// Threshold-rule recommendations, in rule declaration order, with
    /// every matching rule included (no dedup).
    pub recommendations: Vec<String>,
    /// Unrounded terms, for diagnostics and the recommendation rules.
    #[serde(skip)]
    pub terms: CategoryTerms,
}

impl EmissionReport {
    /// Breakdown value for one category.
    pub fn category(&self, category: EmissionCategory) -> f64 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.tonnes_co2e)
            .unwrap_or(0.0)
    }

    /// Rounded total divided by area (the reference tool divides the
    /// rounded total, not the unrounded sum).
    pub fn per_hectare(&self) -> Result<f64, EstimateError> {
        if self.area_hectares == 0.0 {
            return Err(EstimateError::UndefinedRate);
        }
        Ok(self.total_emissions / self.area_hectares)
    }

    pub fn tier(&self) -> Result<EmitterTier, EstimateError> {
        Ok(classify_tier(self.per_hectare()?))
    }
}

/// Stateless estimator holding an injected factor set.
#[derive(Debug, Clone, Default)]
pub struct CarbonEstimator {
    factors: EmissionFactors,
}

impl CarbonEstimator {
    pub fn new(factors: EmissionFactors) -> Self {
        CarbonEstimator { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Estimate one farm. Validates the profile first, then computes the
    /// category terms, applies the practice reductions, and rounds. Pure
    /// and synchronous; safe to call concurrently.
    pub fn estimate(&self, profile: &FarmProfile) -> Result<EmissionReport, EstimateError> {
        profile.validate()?;

        let terms = CategoryTerms::compute(&self.factors, profile)?;

        let mut categories = [CategoryEmission {
            category: EmissionCategory::CropCultivation,
            tonnes_co2e: 0.0,
        }; 5];
        let mut total = Decimal::ZERO;
        for (slot, category) in categories.iter_mut().zip(EmissionCategory::ALL) {
            let rounded = round2(terms.category_value(category));
            total += rounded;
            *slot = CategoryEmission {
                category,
                tonnes_co2e: to_f64(rounded),
            };
        }

        Ok(EmissionReport {
            categories,
            total_emissions: to_f64(round2(total)),
            area_hectares: profile.area_hectares,
            recommendations: advice::recommend(profile, &terms),
            terms,
        })
    }

    /// Estimate a batch of farms in parallel. Each element is estimated
    /// independently with the same semantics as [`Self::estimate`].
    pub fn estimate_many(
        &self,
        profiles: &[FarmProfile],
    ) -> Vec<Result<EmissionReport, EstimateError>> {
        profiles.par_iter().map(|p| self.estimate(p)).collect()
    }
}

/// Round to 2 dp, half away from zero. Matches the reference tool on the
/// documented cases (2.565 rounds to 2.57).
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, EstimateError> {
    // from_f64 takes the shortest round-trip representation, so a user
    // entry of 0.1 becomes the decimal 0.1, not its binary expansion.
    Decimal::from_f64(value).ok_or_else(|| EstimateError::not_finite(field))
}

fn to_f64(value: Decimal) -> f64 {
    // Conversion to f64 is total for any magnitude a Decimal can hold.
    value.to_f64().unwrap_or(f64::NAN)
}
