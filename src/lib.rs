//! Farm Carbon Estimator
//!
//! Deterministic carbon-footprint estimation for individual farms:
//! factor-table lookups, a five-category emission breakdown, emitter-tier
//! classification, and threshold-rule recommendations.
//!
//! - `profile`: closed input enums and the validated [`FarmProfile`]
//! - `factors`: immutable factor tables with the India defaults
//! - `estimator`: the core arithmetic and [`EmissionReport`]
//! - `tier`: per-hectare rate classification
//! - `advice`: ordered recommendation rules
//! - `advisory`: seasonal tips, scheme list, national benchmark
//!
//! All emission arithmetic runs on exact decimals so the published
//! rounding behavior (2 dp, half away from zero, categories rounded
//! before the total) is reproducible bit for bit.

pub mod advice;
pub mod advisory;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod profile;
pub mod tier;

// Re-export the common surface
pub use advisory::{season_for_month, Season, GOVERNMENT_SCHEMES, NATIONAL_AVERAGE_T_PER_HA};
pub use error::EstimateError;
pub use estimator::{
    CarbonEstimator, CategoryEmission, CategoryTerms, EmissionCategory, EmissionReport,
};
pub use factors::{EmissionFactors, FactorLibrary};
pub use profile::{
    CropType, FarmProfile, FertilizerType, IrrigationType, PesticideType, SoilType,
};
pub use tier::{classify_tier, EmitterTier};
