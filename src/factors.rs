//! Emission-factor configuration.
//!
//! The factor tables are part of the public numeric contract: the India
//! defaults below must stay literally identical to the reference tool's
//! tables or the output diverges. They are immutable once constructed
//! and injected into the estimator, so regional variants can be swapped
//! in without touching the computation.
//!
//! Units:
//! - crop: tonnes CO2e per hectare per cycle
//! - fertilizer: kg CO2e per kg product
//! - pesticide: kg CO2e per litre
//! - irrigation: kg CO2e per pump-hour per hectare
//! - tractor: kg CO2e per operating hour

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::profile::{CropType, FertilizerType, IrrigationType, PesticideType};

/// One complete factor set. All lookups are exhaustive matches over the
/// closed input enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub crop: CropFactors,
    pub fertilizer: FertilizerFactors,
    pub pesticide: PesticideFactors,
    pub irrigation: IrrigationFactors,
    /// kg CO2e per tractor operating hour.
    pub tractor_per_hour: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropFactors {
    pub rice: Decimal,
    pub wheat: Decimal,
    pub sugarcane: Decimal,
    pub maize: Decimal,
    pub pulses: Decimal,
    pub cotton: Decimal,
    pub oilseeds: Decimal,
    pub vegetables: Decimal,
    pub fruits: Decimal,
    pub other: Decimal,
}

impl CropFactors {
    pub fn get(&self, crop: CropType) -> Decimal {
        match crop {
            CropType::Rice => self.rice,
            CropType::Wheat => self.wheat,
            CropType::Sugarcane => self.sugarcane,
            CropType::Maize => self.maize,
            CropType::Pulses => self.pulses,
            CropType::Cotton => self.cotton,
            CropType::Oilseeds => self.oilseeds,
            CropType::Vegetables => self.vegetables,
            CropType::Fruits => self.fruits,
            CropType::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerFactors {
    pub urea: Decimal,
    pub dap: Decimal,
    pub potash: Decimal,
    pub organic_compost: Decimal,
}

impl FertilizerFactors {
    pub fn get(&self, fertilizer: FertilizerType) -> Decimal {
        match fertilizer {
            FertilizerType::Urea => self.urea,
            FertilizerType::Dap => self.dap,
            FertilizerType::Potash => self.potash,
            FertilizerType::OrganicCompost => self.organic_compost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PesticideFactors {
    pub chemical: Decimal,
    pub organic: Decimal,
}

impl PesticideFactors {
    pub fn get(&self, pesticide: PesticideType) -> Decimal {
        match pesticide {
            PesticideType::Chemical => self.chemical,
            PesticideType::Organic => self.organic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationFactors {
    pub rainfed: Decimal,
    pub electric_pump: Decimal,
    pub diesel_pump: Decimal,
    pub solar_pump: Decimal,
}

impl IrrigationFactors {
    pub fn get(&self, irrigation: IrrigationType) -> Decimal {
        match irrigation {
            IrrigationType::Rainfed => self.rainfed,
            IrrigationType::ElectricPump => self.electric_pump,
            IrrigationType::DieselPump => self.diesel_pump,
            IrrigationType::SolarPump => self.solar_pump,
        }
    }
}

impl EmissionFactors {
    /// The India factor table from the reference tool, verbatim.
    pub fn india() -> Self {
        EmissionFactors {
            crop: CropFactors {
                rice: Decimal::new(27, 1),
                wheat: Decimal::new(14, 1),
                sugarcane: Decimal::new(16, 1),
                maize: Decimal::new(12, 1),
                pulses: Decimal::new(8, 1),
                cotton: Decimal::new(19, 1),
                oilseeds: Decimal::new(11, 1),
                vegetables: Decimal::new(9, 1),
                fruits: Decimal::new(7, 1),
                other: Decimal::new(10, 1),
            },
            fertilizer: FertilizerFactors {
                urea: Decimal::new(159, 2),
                dap: Decimal::new(15, 1),
                potash: Decimal::new(5, 1),
                organic_compost: Decimal::new(2, 1),
            },
            pesticide: PesticideFactors {
                chemical: Decimal::new(50, 1),
                organic: Decimal::new(15, 1),
            },
            irrigation: IrrigationFactors {
                rainfed: Decimal::ZERO,
                electric_pump: Decimal::new(5, 1),
                diesel_pump: Decimal::new(15, 1),
                solar_pump: Decimal::new(1, 1),
            },
            tractor_per_hour: Decimal::new(25, 1),
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors::india()
    }
}

// ============================================================================
// Regional factor library
// ============================================================================

/// A JSON file holding one or more named regional factor sets:
///
/// ```json
/// { "india": { "crop": { "rice": 2.7, ... }, ... },
///   "punjab_pilot": { ... } }
/// ```
#[derive(Debug, Deserialize)]
pub struct FactorLibrary {
    #[serde(flatten)]
    regions: HashMap<String, EmissionFactors>,
}

impl FactorLibrary {
    /// Load a factor library from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read factor library: {:?}", path))?;
        FactorLibrary::from_json(&contents)
            .with_context(|| format!("Failed to parse factor library: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let library: FactorLibrary = serde_json::from_str(json)?;
        Ok(library)
    }

    /// Fetch one region's factor set, failing if the region is absent.
    pub fn region(&self, name: &str) -> Result<&EmissionFactors> {
        self.regions
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Region '{}' not found in factor library", name))
    }

    pub fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
