//! Farm input model.
//!
//! All categorical inputs are closed enums so an unrecognized selection
//! is a construction-time error, never a runtime key-lookup fault. Each
//! enum parses from and serializes to the user-facing label the original
//! form widgets used ("Black Soil", "Organic Compost", "Diesel Pump").
//!
//! Numeric bounds mirror the form limits of the reference tool. They are
//! enforced by [`FarmProfile::validate`], which the estimator runs before
//! any arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

// ============================================================================
// Categorical inputs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Rice,
    Wheat,
    Sugarcane,
    Maize,
    Pulses,
    Cotton,
    Oilseeds,
    Vegetables,
    Fruits,
    Other,
}

impl CropType {
    pub const ALL: [CropType; 10] = [
        CropType::Rice,
        CropType::Wheat,
        CropType::Sugarcane,
        CropType::Maize,
        CropType::Pulses,
        CropType::Cotton,
        CropType::Oilseeds,
        CropType::Vegetables,
        CropType::Fruits,
        CropType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CropType::Rice => "Rice",
            CropType::Wheat => "Wheat",
            CropType::Sugarcane => "Sugarcane",
            CropType::Maize => "Maize",
            CropType::Pulses => "Pulses",
            CropType::Cotton => "Cotton",
            CropType::Oilseeds => "Oilseeds",
            CropType::Vegetables => "Vegetables",
            CropType::Fruits => "Fruits",
            CropType::Other => "Other",
        }
    }
}

impl FromStr for CropType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| EstimateError::unknown_label("crop_type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    #[serde(rename = "Black Soil")]
    BlackSoil,
    Laterite,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Clay,
        SoilType::BlackSoil,
        SoilType::Laterite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::BlackSoil => "Black Soil",
            SoilType::Laterite => "Laterite",
        }
    }
}

impl FromStr for SoilType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| EstimateError::unknown_label("soil_type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FertilizerType {
    Urea,
    #[serde(rename = "DAP")]
    Dap,
    Potash,
    #[serde(rename = "Organic Compost")]
    OrganicCompost,
}

impl FertilizerType {
    pub const ALL: [FertilizerType; 4] = [
        FertilizerType::Urea,
        FertilizerType::Dap,
        FertilizerType::Potash,
        FertilizerType::OrganicCompost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FertilizerType::Urea => "Urea",
            FertilizerType::Dap => "DAP",
            FertilizerType::Potash => "Potash",
            FertilizerType::OrganicCompost => "Organic Compost",
        }
    }
}

impl FromStr for FertilizerType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FertilizerType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| EstimateError::unknown_label("fertilizer_type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PesticideType {
    Chemical,
    Organic,
}

impl PesticideType {
    pub const ALL: [PesticideType; 2] = [PesticideType::Chemical, PesticideType::Organic];

    pub fn label(&self) -> &'static str {
        match self {
            PesticideType::Chemical => "Chemical",
            PesticideType::Organic => "Organic",
        }
    }
}

impl FromStr for PesticideType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PesticideType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| EstimateError::unknown_label("pesticide_type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrrigationType {
    Rainfed,
    #[serde(rename = "Electric Pump")]
    ElectricPump,
    #[serde(rename = "Diesel Pump")]
    DieselPump,
    #[serde(rename = "Solar Pump")]
    SolarPump,
}

impl IrrigationType {
    pub const ALL: [IrrigationType; 4] = [
        IrrigationType::Rainfed,
        IrrigationType::ElectricPump,
        IrrigationType::DieselPump,
        IrrigationType::SolarPump,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IrrigationType::Rainfed => "Rainfed",
            IrrigationType::ElectricPump => "Electric Pump",
            IrrigationType::DieselPump => "Diesel Pump",
            IrrigationType::SolarPump => "Solar Pump",
        }
    }
}

impl FromStr for IrrigationType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IrrigationType::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| EstimateError::unknown_label("irrigation_type", s))
    }
}

// ============================================================================
// Farm profile
// ============================================================================

/// Form bounds from the reference tool.
pub const AREA_HECTARES_MAX: f64 = 500.0;
pub const YIELD_T_PER_HA_MAX: f64 = 20.0;
pub const FERTILIZER_KG_MAX: f64 = 5000.0;
pub const PESTICIDE_LITRES_MAX: f64 = 500.0;
pub const IRRIGATION_HOURS_MAX: u32 = 2000;
pub const TRACTOR_HOURS_MAX: u32 = 1000;
pub const CROP_CYCLES_MIN: u32 = 1;
pub const CROP_CYCLES_MAX: u32 = 4;

/// One farm's inputs for a single estimation request. Immutable per
/// calculation; the estimator never writes back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub crop_type: CropType,
    /// Area under cultivation, hectares [0, 500].
    pub area_hectares: f64,
    pub soil_type: SoilType,
    /// Average yield, tonnes/hectare [0, 20]. Informational only; not
    /// used by the emission arithmetic.
    pub yield_tonnes_per_hectare: f64,
    pub fertilizer_type: FertilizerType,
    /// Fertilizer applied, kg/year [0, 5000].
    pub fertilizer_kg_per_year: f64,
    pub pesticide_type: PesticideType,
    /// Pesticide/insecticide applied, litres/year [0, 500].
    pub pesticide_litres_per_year: f64,
    pub irrigation_type: IrrigationType,
    /// Irrigation pump hours per year [0, 2000].
    pub irrigation_hours_per_year: u32,
    /// Tractor operating hours per year [0, 1000].
    pub tractor_hours_per_year: u32,
    /// Crop cycles per year [1, 4].
    pub crop_cycles_per_year: u32,
    /// Solar/wind power in use on the farm.
    pub uses_renewable_energy: bool,
    /// Cover cropping or green manure in use.
    pub uses_cover_cropping: bool,
}

impl Default for FarmProfile {
    fn default() -> Self {
        FarmProfile {
            crop_type: CropType::Rice,
            area_hectares: 0.0,
            soil_type: SoilType::Loamy,
            yield_tonnes_per_hectare: 0.0,
            fertilizer_type: FertilizerType::Urea,
            fertilizer_kg_per_year: 0.0,
            pesticide_type: PesticideType::Chemical,
            pesticide_litres_per_year: 0.0,
            irrigation_type: IrrigationType::Rainfed,
            irrigation_hours_per_year: 0,
            tractor_hours_per_year: 0,
            crop_cycles_per_year: 1,
            uses_renewable_energy: false,
            uses_cover_cropping: false,
        }
    }
}

impl FarmProfile {
    /// Check every numeric field against its form bounds and reject
    /// non-finite reals. The source tool trusted its UI widgets to
    /// constrain these; a standalone library cannot, so the contract is
    /// tightened here.
    pub fn validate(&self) -> Result<(), EstimateError> {
        check_real(
            "area_hectares",
            self.area_hectares,
            0.0,
            AREA_HECTARES_MAX,
        )?;
        check_real(
            "yield_tonnes_per_hectare",
            self.yield_tonnes_per_hectare,
            0.0,
            YIELD_T_PER_HA_MAX,
        )?;
        check_real(
            "fertilizer_kg_per_year",
            self.fertilizer_kg_per_year,
            0.0,
            FERTILIZER_KG_MAX,
        )?;
        check_real(
            "pesticide_litres_per_year",
            self.pesticide_litres_per_year,
            0.0,
            PESTICIDE_LITRES_MAX,
        )?;
        check_int(
            "irrigation_hours_per_year",
            self.irrigation_hours_per_year,
            0,
            IRRIGATION_HOURS_MAX,
        )?;
        check_int(
            "tractor_hours_per_year",
            self.tractor_hours_per_year,
            0,
            TRACTOR_HOURS_MAX,
        )?;
        check_int(
            "crop_cycles_per_year",
            self.crop_cycles_per_year,
            CROP_CYCLES_MIN,
            CROP_CYCLES_MAX,
        )?;
        Ok(())
    }
}

impl fmt::Display for FarmProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {:.2} ha of {} soil, {} cycle(s)/year",
            self.crop_type.label(),
            self.area_hectares,
            self.soil_type.label(),
            self.crop_cycles_per_year,
        )
    }
}

fn check_real(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::not_finite(field));
    }
    if value < min || value > max {
        return Err(EstimateError::out_of_range(field, value, min, max));
    }
    Ok(())
}

fn check_int(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), EstimateError> {
    if value < min || value > max {
        return Err(EstimateError::out_of_range(
            field,
            value as f64,
            min as f64,
            max as f64,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for crop in CropType::ALL {
            assert_eq!(crop.label().parse::<CropType>().unwrap(), crop);
        }
        for soil in SoilType::ALL {
            assert_eq!(soil.label().parse::<SoilType>().unwrap(), soil);
        }
        for fert in FertilizerType::ALL {
            assert_eq!(fert.label().parse::<FertilizerType>().unwrap(), fert);
        }
        for irr in IrrigationType::ALL {
            assert_eq!(irr.label().parse::<IrrigationType>().unwrap(), irr);
        }
    }

    #[test]
    fn test_serde_uses_form_labels() {
        let json = serde_json::to_string(&SoilType::BlackSoil).unwrap();
        assert_eq!(json, "\"Black Soil\"");
        let json = serde_json::to_string(&FertilizerType::Dap).unwrap();
        assert_eq!(json, "\"DAP\"");
        let back: IrrigationType = serde_json::from_str("\"Diesel Pump\"").unwrap();
        assert_eq!(back, IrrigationType::DieselPump);
    }

    #[test]
    fn test_unknown_label_is_invalid_input() {
        let err = "Red Soil".parse::<SoilType>().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "soil_type", .. }));
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let profile = FarmProfile {
            area_hectares: 500.0,
            fertilizer_kg_per_year: 5000.0,
            pesticide_litres_per_year: 500.0,
            irrigation_hours_per_year: 2000,
            tractor_hours_per_year: 1000,
            crop_cycles_per_year: 4,
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let profile = FarmProfile {
            area_hectares: 500.1,
            ..FarmProfile::default()
        };
        assert!(matches!(
            profile.validate().unwrap_err(),
            EstimateError::InvalidInput { field: "area_hectares", .. }
        ));

        let profile = FarmProfile {
            crop_cycles_per_year: 0,
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_err());

        let profile = FarmProfile {
            crop_cycles_per_year: 5,
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let profile = FarmProfile {
            fertilizer_kg_per_year: f64::NAN,
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_err());

        let profile = FarmProfile {
            area_hectares: f64::INFINITY,
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_err());
    }
}
