//! Fuel model catalog
//!
//! Indexed store of surface fuel model parameters: the 13 Anderson models,
//! the 40 standard models and the non-burnable models, plus slots for
//! user-defined custom models.
//!
//! # References
//! - Anderson, H.E. (1982). "Aids to determining fuel models for estimating fire behavior."
//!   USDA Forest Service General Technical Report INT-122.
//! - Scott, J.H., Burgan, R.E. (2005). "Standard fire behavior fuel models: a comprehensive set
//!   for use with Rothermel's surface fire spread model." USDA Forest Service RMRS-GTR-153.

use crate::core_types::units::LB_PER_SQ_FT_PER_TON_PER_ACRE;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest usable fuel model number (index 0 is never defined)
pub const MAX_FUEL_MODEL_NUMBER: usize = 256;

/// Parameters of a single surface fuel model, in base units (ft, lb/ft², Btu/lb, 1/ft)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelModelRecord {
    pub code: String,
    pub name: String,
    pub fuelbed_depth: f64,               // ft
    pub moisture_of_extinction_dead: f64, // fraction
    pub heat_of_combustion_dead: f64,     // Btu/lb
    pub heat_of_combustion_live: f64,     // Btu/lb
    pub fuel_load_one_hour: f64,          // lb/ft²
    pub fuel_load_ten_hour: f64,          // lb/ft²
    pub fuel_load_hundred_hour: f64,      // lb/ft²
    pub fuel_load_live_herbaceous: f64,   // lb/ft²
    pub fuel_load_live_woody: f64,        // lb/ft²
    pub savr_one_hour: f64,               // ft²/ft³
    pub savr_live_herbaceous: f64,        // ft²/ft³
    pub savr_live_woody: f64,             // ft²/ft³
    pub is_dynamic: bool,
    pub is_reserved: bool,
    pub is_defined: bool,
}

impl FuelModelRecord {
    /// True when every fuel load is zero (non-burnable)
    pub fn is_all_fuel_load_zero(&self) -> bool {
        self.fuel_load_one_hour == 0.0
            && self.fuel_load_ten_hour == 0.0
            && self.fuel_load_hundred_hour == 0.0
            && self.fuel_load_live_herbaceous == 0.0
            && self.fuel_load_live_woody == 0.0
    }
}

/// Reasons a catalog mutation is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelModelError {
    /// Number is outside 1..=256
    OutOfRange(i32),
    /// Slot holds a standard model or is held back for future standard models
    Reserved(i32),
}

impl fmt::Display for FuelModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelModelError::OutOfRange(n) => {
                write!(f, "fuel model {n} is outside 1..={MAX_FUEL_MODEL_NUMBER}")
            }
            FuelModelError::Reserved(n) => write!(f, "fuel model {n} is reserved"),
        }
    }
}

impl std::error::Error for FuelModelError {}

#[derive(Clone, Copy)]
enum LoadUnits {
    PoundsPerSquareFoot,
    TonsPerAcre,
}

/// Static table row. Loads are [1-h, 10-h, 100-h, live herb, live woody],
/// SAVR is [1-h, live herb, live woody].
struct StandardModel {
    number: usize,
    code: &'static str,
    name: &'static str,
    depth: f64,
    mext_dead: f64,
    heat_dead: f64,
    heat_live: f64,
    loads: [f64; 5],
    load_units: LoadUnits,
    savr: [f64; 3],
    dynamic: bool,
}

/// Slots held back for future standard models; never defined, never customizable
const RESERVED_UNDEFINED: [usize; 13] = [
    112, 125, 126, 127, 128, 129, 130, 205, 206, 207, 208, 209, 210,
];

#[rustfmt::skip]
const STANDARD_MODELS: &[StandardModel] = &[
    StandardModel { number: 1, code: "FM1", name: "Short grass [1]", depth: 1.0, mext_dead: 0.12, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.034, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [3500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 2, code: "FM2", name: "Timber grass and understory [2]", depth: 1.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.092, 0.046, 0.023, 0.023, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [3000.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 3, code: "FM3", name: "Tall grass [3]", depth: 2.5, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.138, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 4, code: "FM4", name: "Chaparral [4]", depth: 6.0, mext_dead: 0.2, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.23, 0.184, 0.092, 0.0, 0.23], load_units: LoadUnits::PoundsPerSquareFoot, savr: [2000.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 5, code: "FM5", name: "Brush [5]", depth: 2.0, mext_dead: 0.2, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.046, 0.023, 0.0, 0.0, 0.092], load_units: LoadUnits::PoundsPerSquareFoot, savr: [2000.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 6, code: "FM6", name: "Dormant brush, hardwood slash [6]", depth: 2.5, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.069, 0.115, 0.092, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1750.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 7, code: "FM7", name: "Southern rough [7]", depth: 2.5, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.052, 0.086, 0.069, 0.0, 0.017], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1750.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 8, code: "FM8", name: "Short needle litter [8]", depth: 0.2, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.069, 0.046, 0.115, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [2000.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 9, code: "FM9", name: "Long needle or hardwood litter [9]", depth: 0.2, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.134, 0.019, 0.007, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [2500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 10, code: "FM10", name: "Timber litter & understory [10]", depth: 1.0, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.138, 0.092, 0.23, 0.0, 0.092], load_units: LoadUnits::PoundsPerSquareFoot, savr: [2000.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 11, code: "FM11", name: "Light logging slash [11]", depth: 1.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.069, 0.207, 0.253, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 12, code: "FM12", name: "Medium logging slash [12]", depth: 2.3, mext_dead: 0.2, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.184, 0.644, 0.759, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 13, code: "FM13", name: "Heavy logging slash [13]", depth: 3.0, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.322, 1.058, 1.288, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 91, code: "NB1", name: "Urban, developed [91]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 92, code: "NB2", name: "Snow, ice [92]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 93, code: "NB3", name: "Agricultural [93]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 94, code: "NB4", name: "Future standard non-burnable [94]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 95, code: "NB5", name: "Future standard non-burnable [95]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 98, code: "NB8", name: "Open water [98]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 99, code: "NB9", name: "Bare ground [99]", depth: 1.0, mext_dead: 0.1, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.0, 0.0, 0.0, 0.0, 0.0], load_units: LoadUnits::PoundsPerSquareFoot, savr: [1500.0, 1500.0, 1500.0], dynamic: false },
    StandardModel { number: 101, code: "GR1", name: "Short, sparse, dry climate grass (D)", depth: 0.4, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.1, 0.0, 0.0, 0.3, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2200.0, 2000.0, 1500.0], dynamic: true },
    StandardModel { number: 102, code: "GR2", name: "Low load, dry climate grass (D)", depth: 1.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.1, 0.0, 0.0, 1.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1500.0], dynamic: true },
    StandardModel { number: 103, code: "GR3", name: "Low load, very coarse, humid climate grass (D)", depth: 2.0, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.1, 0.4, 0.0, 1.5, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1500.0, 1300.0, 1500.0], dynamic: true },
    StandardModel { number: 104, code: "GR4", name: "Moderate load, dry climate grass (D)", depth: 2.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.25, 0.0, 0.0, 1.9, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1500.0], dynamic: true },
    StandardModel { number: 105, code: "GR5", name: "Low load, humid climate grass (D)", depth: 1.5, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.4, 0.0, 0.0, 2.5, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1600.0, 1500.0], dynamic: true },
    StandardModel { number: 106, code: "GR6", name: "Moderate load, humid climate grass (D)", depth: 1.5, mext_dead: 0.4, heat_dead: 9000.0, heat_live: 9000.0, loads: [0.1, 0.0, 0.0, 3.4, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2200.0, 2000.0, 1500.0], dynamic: true },
    StandardModel { number: 107, code: "GR7", name: "High load, dry climate grass (D)", depth: 3.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.0, 0.0, 0.0, 5.4, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1500.0], dynamic: true },
    StandardModel { number: 108, code: "GR8", name: "High load, very coarse, humid climate grass (D)", depth: 4.0, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.5, 1.0, 0.0, 7.3, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1500.0, 1300.0, 1500.0], dynamic: true },
    StandardModel { number: 109, code: "GR9", name: "Very high load, humid climate grass (D)", depth: 5.0, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.0, 1.0, 0.0, 9.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1600.0, 1500.0], dynamic: true },
    StandardModel { number: 121, code: "GS1", name: "Low load, dry climate grass-shrub (D)", depth: 0.9, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.2, 0.0, 0.0, 0.5, 0.65], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1800.0], dynamic: true },
    StandardModel { number: 122, code: "GS2", name: "Moderate load, dry climate grass-shrub (D)", depth: 1.5, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.5, 0.5, 0.0, 0.6, 1.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1800.0], dynamic: true },
    StandardModel { number: 123, code: "GS3", name: "Moderate load, humid climate grass-shrub (D)", depth: 1.8, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.3, 0.25, 0.0, 1.45, 1.25], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1600.0, 1600.0], dynamic: true },
    StandardModel { number: 124, code: "GS4", name: "High load, humid climate grass-shrub (D)", depth: 2.1, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.9, 0.3, 0.1, 3.4, 7.1], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1600.0, 1600.0], dynamic: true },
    StandardModel { number: 141, code: "SH1", name: "Low load, dry climate shrub (D)", depth: 1.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.25, 0.25, 0.0, 0.15, 1.3], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 142, code: "SH2", name: "Moderate load, dry climate shrub (S)", depth: 1.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.35, 2.4, 0.75, 0.0, 3.85], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 143, code: "SH3", name: "Moderate load, humid climate shrub (S)", depth: 2.4, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.45, 3.0, 0.0, 0.0, 6.2], load_units: LoadUnits::TonsPerAcre, savr: [1600.0, 1800.0, 1400.0], dynamic: true },
    StandardModel { number: 144, code: "SH4", name: "Low load, humid climate timber-shrub (S)", depth: 3.0, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.85, 1.15, 0.2, 0.0, 2.55], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 145, code: "SH5", name: "High load, dry climate shrub (S)", depth: 6.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [3.6, 2.1, 0.0, 0.0, 2.9], load_units: LoadUnits::TonsPerAcre, savr: [750.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 146, code: "SH6", name: "Low load, humid climate shrub (S)", depth: 2.0, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [2.9, 1.45, 0.0, 0.0, 1.4], load_units: LoadUnits::TonsPerAcre, savr: [750.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 147, code: "SH7", name: "Very high load, dry climate shrub (S)", depth: 6.0, mext_dead: 0.15, heat_dead: 8000.0, heat_live: 8000.0, loads: [3.5, 5.3, 2.2, 0.0, 3.4], load_units: LoadUnits::TonsPerAcre, savr: [750.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 148, code: "SH8", name: "High load, humid climate shrub (S)", depth: 3.0, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [2.05, 3.4, 0.85, 0.0, 4.35], load_units: LoadUnits::TonsPerAcre, savr: [750.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 149, code: "SH9", name: "Very high load, humid climate shrub (D)", depth: 4.4, mext_dead: 0.4, heat_dead: 8000.0, heat_live: 8000.0, loads: [4.5, 2.45, 0.0, 1.55, 7.0], load_units: LoadUnits::TonsPerAcre, savr: [750.0, 1800.0, 1500.0], dynamic: true },
    StandardModel { number: 161, code: "TU1", name: "Light load, dry climate timber-grass-shrub (D)", depth: 0.6, mext_dead: 0.2, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.2, 0.9, 1.5, 0.2, 0.9], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 162, code: "TU2", name: "Moderate load, humid climate timber-shrub (S)", depth: 1.0, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.95, 1.8, 1.25, 0.0, 0.2], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 163, code: "TU3", name: "Moderate load, humid climate timber-grass-shrub (D)", depth: 1.3, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.1, 0.15, 0.25, 0.65, 1.1], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1600.0, 1400.0], dynamic: true },
    StandardModel { number: 164, code: "TU4", name: "Dwarf conifer understory (S)", depth: 0.5, mext_dead: 0.12, heat_dead: 8000.0, heat_live: 8000.0, loads: [4.5, 0.0, 0.0, 0.0, 2.0], load_units: LoadUnits::TonsPerAcre, savr: [2300.0, 1800.0, 2000.0], dynamic: true },
    StandardModel { number: 165, code: "TU5", name: "Very high load, dry climate timber-shrub (S)", depth: 1.0, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [4.0, 4.0, 3.0, 0.0, 3.0], load_units: LoadUnits::TonsPerAcre, savr: [1500.0, 1800.0, 750.0], dynamic: true },
    StandardModel { number: 181, code: "TL1", name: "Low load, compact conifer litter (S)", depth: 0.2, mext_dead: 0.3, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.0, 2.2, 3.6, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 182, code: "TL2", name: "Low load broadleaf litter (S)", depth: 0.2, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.4, 2.3, 2.2, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 183, code: "TL3", name: "Moderate load conifer litter (S)", depth: 0.3, mext_dead: 0.2, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.5, 2.2, 2.8, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 184, code: "TL4", name: "Small downed logs (S)", depth: 0.4, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.5, 1.5, 4.2, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 185, code: "TL5", name: "High load conifer litter (S)", depth: 0.6, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.15, 2.5, 4.4, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 160.0], dynamic: true },
    StandardModel { number: 186, code: "TL6", name: "High load broadleaf litter (S)", depth: 0.3, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [2.4, 1.2, 1.2, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 187, code: "TL7", name: "Large downed logs (S)", depth: 0.4, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [0.3, 1.4, 8.1, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 188, code: "TL8", name: "Long-needle litter (S)", depth: 0.3, mext_dead: 0.35, heat_dead: 8000.0, heat_live: 8000.0, loads: [5.8, 1.4, 1.1, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 189, code: "TL9", name: "Very high load broadleaf litter (S)", depth: 0.6, mext_dead: 0.35, heat_dead: 8000.0, heat_live: 8000.0, loads: [6.65, 3.3, 4.15, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [1800.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 201, code: "SB1", name: "Low load activity fuel (S)", depth: 1.0, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [1.5, 3.0, 11.0, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 202, code: "SB2", name: "Moderate load activity or low load blowdown (S)", depth: 1.0, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [4.5, 4.25, 4.0, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 203, code: "SB3", name: "High load activity fuel or moderate load blowdown (S)", depth: 1.2, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [5.5, 2.75, 3.0, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
    StandardModel { number: 204, code: "SB4", name: "High load blowdown (S)", depth: 2.7, mext_dead: 0.25, heat_dead: 8000.0, heat_live: 8000.0, loads: [5.25, 3.5, 5.25, 0.0, 0.0], load_units: LoadUnits::TonsPerAcre, savr: [2000.0, 1800.0, 1600.0], dynamic: true },
];

/// The fuel model catalog
///
/// Read-only once populated. Custom registration takes `&mut self`, so sharing
/// a catalog across threads (`&FuelModels`) is only possible after all writes
/// are done.
///
/// # Example
/// ```
/// use behave_surface_core::FuelModels;
///
/// let catalog = FuelModels::new();
/// assert!(catalog.is_defined(124));
/// assert_eq!(catalog.get_fuel_code(124), "GS4");
/// assert_eq!(catalog.fuel_model_number_for_code("GS4"), Some(124));
/// assert!(!catalog.is_defined(14));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelModels {
    records: Vec<FuelModelRecord>,
    #[serde(skip)]
    code_index: FxHashMap<String, usize>,
}

impl Default for FuelModels {
    fn default() -> Self {
        Self::new()
    }
}

impl FuelModels {
    /// Catalog populated with every standard model
    pub fn new() -> Self {
        let mut records = vec![FuelModelRecord::default(); MAX_FUEL_MODEL_NUMBER + 1];

        for model in STANDARD_MODELS {
            let factor = match model.load_units {
                LoadUnits::PoundsPerSquareFoot => 1.0,
                LoadUnits::TonsPerAcre => LB_PER_SQ_FT_PER_TON_PER_ACRE,
            };
            let load = |i: usize| model.loads[i] * factor;
            records[model.number] = FuelModelRecord {
                code: model.code.to_string(),
                name: model.name.to_string(),
                fuelbed_depth: model.depth,
                moisture_of_extinction_dead: model.mext_dead,
                heat_of_combustion_dead: model.heat_dead,
                heat_of_combustion_live: model.heat_live,
                fuel_load_one_hour: load(0),
                fuel_load_ten_hour: load(1),
                fuel_load_hundred_hour: load(2),
                fuel_load_live_herbaceous: load(3),
                fuel_load_live_woody: load(4),
                savr_one_hour: model.savr[0],
                savr_live_herbaceous: model.savr[1],
                savr_live_woody: model.savr[2],
                is_dynamic: model.dynamic,
                is_reserved: true,
                is_defined: true,
            };
        }
        for number in RESERVED_UNDEFINED {
            records[number].is_reserved = true;
        }

        let mut catalog = Self {
            records,
            code_index: FxHashMap::default(),
        };
        catalog.rebuild_code_index();
        catalog
    }

    /// Rebuild the code lookup (needed after deserializing)
    pub fn rebuild_code_index(&mut self) {
        self.code_index = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_defined)
            .map(|(n, r)| (r.code.clone(), n))
            .collect();
    }

    fn slot(number: i32) -> Option<usize> {
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=MAX_FUEL_MODEL_NUMBER).contains(n))
    }

    /// Record for a defined model, `None` otherwise
    pub fn record(&self, number: i32) -> Option<&FuelModelRecord> {
        Self::slot(number)
            .map(|n| &self.records[n])
            .filter(|r| r.is_defined)
    }

    /// Record for any number; undefined numbers read as an all-zero record
    pub(crate) fn record_or_empty(&self, number: i32) -> &FuelModelRecord {
        Self::slot(number).map_or(&self.records[0], |n| &self.records[n])
    }

    /// False outside 1..=256 and for slots never set
    pub fn is_defined(&self, number: i32) -> bool {
        self.record(number).is_some()
    }

    /// Reserved slots cannot take custom models
    pub fn is_reserved(&self, number: i32) -> bool {
        Self::slot(number).is_some_and(|n| self.records[n].is_reserved)
    }

    pub fn is_all_fuel_load_zero(&self, number: i32) -> bool {
        self.record_or_empty(number).is_all_fuel_load_zero()
    }

    /// Look up a model number by its code ("GS4" → 124)
    pub fn fuel_model_number_for_code(&self, code: &str) -> Option<i32> {
        self.code_index.get(code).map(|&n| n as i32)
    }

    /// Register a user-defined model in an unreserved slot
    ///
    /// # Errors
    /// `OutOfRange` outside 1..=256, `Reserved` for standard or held-back slots.
    pub fn set_custom_fuel_model(
        &mut self,
        number: i32,
        mut record: FuelModelRecord,
    ) -> Result<(), FuelModelError> {
        let slot = Self::slot(number).ok_or(FuelModelError::OutOfRange(number))?;
        if self.records[slot].is_reserved {
            tracing::warn!(
                number,
                code = %record.code,
                "Rejected custom fuel model for reserved slot"
            );
            return Err(FuelModelError::Reserved(number));
        }
        if self.records[slot].is_defined {
            let previous = std::mem::take(&mut self.records[slot].code);
            self.code_index.remove(&previous);
        }
        record.is_reserved = false;
        record.is_defined = true;
        self.code_index.insert(record.code.clone(), slot);
        self.records[slot] = record;
        Ok(())
    }

    /// Remove a custom model, leaving the slot undefined
    ///
    /// # Errors
    /// Same conditions as [`FuelModels::set_custom_fuel_model`].
    pub fn clear_custom_fuel_model(&mut self, number: i32) -> Result<(), FuelModelError> {
        let slot = Self::slot(number).ok_or(FuelModelError::OutOfRange(number))?;
        if self.records[slot].is_reserved {
            return Err(FuelModelError::Reserved(number));
        }
        if self.records[slot].is_defined {
            self.code_index.remove(&self.records[slot].code);
        }
        self.records[slot] = FuelModelRecord::default();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Accessors (undefined models read as zero)
    // ------------------------------------------------------------------------

    pub fn get_fuel_code(&self, number: i32) -> &str {
        &self.record_or_empty(number).code
    }

    pub fn get_fuel_name(&self, number: i32) -> &str {
        &self.record_or_empty(number).name
    }

    pub fn get_fuelbed_depth(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuelbed_depth
    }

    pub fn get_moisture_of_extinction_dead(&self, number: i32) -> f64 {
        self.record_or_empty(number).moisture_of_extinction_dead
    }

    pub fn get_heat_of_combustion_dead(&self, number: i32) -> f64 {
        self.record_or_empty(number).heat_of_combustion_dead
    }

    pub fn get_heat_of_combustion_live(&self, number: i32) -> f64 {
        self.record_or_empty(number).heat_of_combustion_live
    }

    pub fn get_fuel_load_one_hour(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuel_load_one_hour
    }

    pub fn get_fuel_load_ten_hour(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuel_load_ten_hour
    }

    pub fn get_fuel_load_hundred_hour(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuel_load_hundred_hour
    }

    pub fn get_fuel_load_live_herbaceous(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuel_load_live_herbaceous
    }

    pub fn get_fuel_load_live_woody(&self, number: i32) -> f64 {
        self.record_or_empty(number).fuel_load_live_woody
    }

    pub fn get_savr_one_hour(&self, number: i32) -> f64 {
        self.record_or_empty(number).savr_one_hour
    }

    pub fn get_savr_live_herbaceous(&self, number: i32) -> f64 {
        self.record_or_empty(number).savr_live_herbaceous
    }

    pub fn get_savr_live_woody(&self, number: i32) -> f64 {
        self.record_or_empty(number).savr_live_woody
    }

    /// False for undefined models
    pub fn get_is_dynamic(&self, number: i32) -> bool {
        self.record(number).is_some_and(|r| r.is_dynamic)
    }
}
