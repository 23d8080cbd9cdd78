//! Supplemental deterministic guidance.
//!
//! Calendar-season advisories, the static government-scheme list, and
//! the national per-hectare benchmark. All of it is table lookups; the
//! season is derived from an explicit month argument so callers decide
//! whether "now" means the wall clock or a reporting period.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// National average emission rate for comparison (tCO2e/ha/year).
pub const NATIONAL_AVERAGE_T_PER_HA: f64 = 2.2;

/// Government schemes relevant to low-carbon farming: (name, summary).
pub const GOVERNMENT_SCHEMES: &[(&str, &str)] = &[
    ("PM-KUSUM", "Solar pump subsidy"),
    ("Soil Health Card Yojana", "Free soil testing"),
    ("Paramparagat Krishi Vikas Yojana", "Organic farming support"),
];

/// Indian cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Monsoon season, June through August.
    Kharif,
    /// Winter season, October through December.
    Rabi,
    /// The remaining months.
    Zaid,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }

    pub fn advisory(&self) -> &'static str {
        match self {
            Season::Kharif => {
                "Kharif Season: High emissions likely due to rice cultivation. \
                 Consider alternate wetting/drying irrigation."
            }
            Season::Rabi => {
                "Rabi Season: Emissions lower; good time to introduce legumes \
                 for nitrogen fixation."
            }
            Season::Zaid => {
                "Zaid Season: Opportunity to grow cover crops and rejuvenate soil."
            }
        }
    }
}

/// Season for a calendar month (1-12).
pub fn season_for_month(month: u32) -> Result<Season, EstimateError> {
    match month {
        6..=8 => Ok(Season::Kharif),
        10..=12 => Ok(Season::Rabi),
        1..=5 | 9 => Ok(Season::Zaid),
        _ => Err(EstimateError::InvalidInput {
            field: "month",
            reason: format!("{} is outside the accepted range [1, 12]", month),
        }),
    }
}

/// Signed distance of a per-hectare rate from the national average;
/// negative means below average.
pub fn versus_national_average(per_hectare: f64) -> f64 {
    per_hectare - NATIONAL_AVERAGE_T_PER_HA
}
