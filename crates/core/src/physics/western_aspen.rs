//! Western aspen fuel types
//!
//! Curing-dependent loads and SAVR for the five aspen fuel types, linearly
//! interpolated between tabulated curing levels.
//!
//! # References
//! - Brown, J.K., Simmerman, D.G. (1986). "Appraising fuels and flammability in western aspen:
//!   a prescribed fire guide." USDA Forest Service General Technical Report INT-205.

use crate::core_types::units::LB_PER_SQ_FT_PER_TON_PER_ACRE;

/// Number of aspen fuel types (1 = aspen/shrub, 2 = aspen/tall forb,
/// 3 = aspen/low forb, 4 = mixed/forb, 5 = mixed/shrub)
pub const ASPEN_FUEL_TYPES: usize = 5;

pub const MOISTURE_OF_EXTINCTION_DEAD: f64 = 0.25;
pub const HEAT_OF_COMBUSTION: f64 = 8000.0;
/// Dead 10-h SAVR (ft²/ft³)
pub const SAVR_DEAD_TEN_HOUR: f64 = 109.0;
/// Live herbaceous SAVR (ft²/ft³)
pub const SAVR_LIVE_HERBACEOUS: f64 = 2800.0;

const CURING_BREAKPOINTS: [f64; 6] = [0.0, 0.3, 0.5, 0.7, 0.9, 1.000000001];

const DEPTH: [f64; ASPEN_FUEL_TYPES] = [0.65, 0.30, 0.18, 0.50, 0.18];

// Loads in tons/acre
const LOAD_DEAD_ONE_HOUR: [[f64; 6]; ASPEN_FUEL_TYPES] = [
    [0.800, 0.893, 1.056, 1.218, 1.379, 1.4595],
    [0.738, 0.930, 1.056, 1.183, 1.309, 1.3720],
    [0.601, 0.645, 0.671, 0.699, 0.730, 0.7455],
    [0.880, 0.906, 1.037, 1.167, 1.300, 1.3665],
    [0.754, 0.797, 0.825, 0.854, 0.884, 0.8990],
];
const LOAD_DEAD_TEN_HOUR: [f64; ASPEN_FUEL_TYPES] = [0.975, 0.475, 1.035, 1.340, 1.115];
const LOAD_LIVE_HERBACEOUS: [[f64; 6]; ASPEN_FUEL_TYPES] = [
    [0.335, 0.234, 0.167, 0.100, 0.033, 0.000],
    [0.665, 0.465, 0.332, 0.199, 0.067, 0.000],
    [0.150, 0.105, 0.075, 0.045, 0.015, 0.000],
    [0.100, 0.070, 0.050, 0.030, 0.010, 0.000],
    [0.150, 0.105, 0.075, 0.045, 0.015, 0.000],
];
const LOAD_LIVE_WOODY: [[f64; 6]; ASPEN_FUEL_TYPES] = [
    [0.403, 0.403, 0.333, 0.283, 0.277, 0.274],
    [0.0; 6],
    [0.0; 6],
    [0.455, 0.455, 0.364, 0.290, 0.261, 0.2465],
    [0.0; 6],
];

const SAVR_DEAD_ONE_HOUR: [[f64; 6]; ASPEN_FUEL_TYPES] = [
    [1440.0, 1620.0, 1910.0, 2090.0, 2220.0, 2285.0],
    [1480.0, 1890.0, 2050.0, 2160.0, 2240.0, 2280.0],
    [1400.0, 1540.0, 1620.0, 1690.0, 1750.0, 1780.0],
    [1350.0, 1420.0, 1710.0, 1910.0, 2060.0, 2135.0],
    [1420.0, 1540.0, 1610.0, 1670.0, 1720.0, 1745.0],
];
const SAVR_LIVE_WOODY: [[f64; 6]; ASPEN_FUEL_TYPES] = [
    [2440.0, 2440.0, 2310.0, 2090.0, 1670.0, 1670.0],
    [2440.0; 6],
    [2440.0; 6],
    [2530.0, 2530.0, 2410.0, 2210.0, 1800.0, 1800.0],
    [2440.0; 6],
];
const DEFAULT_SAVR_DEAD_ONE_HOUR: f64 = 1440.0;
const DEFAULT_SAVR_LIVE_WOODY: f64 = 2440.0;

/// Table row for an aspen fuel type number, `None` outside 1..=5
fn fuel_type_index(aspen_fuel_model_number: i32) -> Option<usize> {
    usize::try_from(aspen_fuel_model_number - 1)
        .ok()
        .filter(|&i| i < ASPEN_FUEL_TYPES)
}

/// Linear interpolation of a tabulated value at the given curing level
///
/// Curing is clamped to [0, 1]. The last breakpoint sits just above 1 so a
/// fully cured stand still lands inside the final segment.
pub fn interpolate_by_curing(curing: f64, values: &[f64; 6]) -> f64 {
    let curing = curing.clamp(0.0, 1.0);
    let segment = (1..CURING_BREAKPOINTS.len())
        .find(|&i| curing < CURING_BREAKPOINTS[i])
        .unwrap_or(CURING_BREAKPOINTS.len() - 1);
    let upper = CURING_BREAKPOINTS[segment];
    let lower = CURING_BREAKPOINTS[segment - 1];
    let fraction = 1.0 - (upper - curing) / (upper - lower);
    values[segment - 1] + fraction * (values[segment] - values[segment - 1])
}

/// Fuelbed depth (ft); 0 for an unknown fuel type
pub fn fuelbed_depth(aspen_fuel_model_number: i32) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(0.0, |i| DEPTH[i])
}

/// Dead 0-¼" load (lb/ft²)
pub fn load_dead_one_hour(aspen_fuel_model_number: i32, curing: f64) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(0.0, |i| {
        interpolate_by_curing(curing, &LOAD_DEAD_ONE_HOUR[i]) * LB_PER_SQ_FT_PER_TON_PER_ACRE
    })
}

/// Dead ¼-1" load (lb/ft²), independent of curing
pub fn load_dead_ten_hour(aspen_fuel_model_number: i32) -> f64 {
    fuel_type_index(aspen_fuel_model_number)
        .map_or(0.0, |i| LOAD_DEAD_TEN_HOUR[i] * LB_PER_SQ_FT_PER_TON_PER_ACRE)
}

/// Live herbaceous load (lb/ft²)
pub fn load_live_herbaceous(aspen_fuel_model_number: i32, curing: f64) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(0.0, |i| {
        interpolate_by_curing(curing, &LOAD_LIVE_HERBACEOUS[i]) * LB_PER_SQ_FT_PER_TON_PER_ACRE
    })
}

/// Live woody load (lb/ft²)
pub fn load_live_woody(aspen_fuel_model_number: i32, curing: f64) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(0.0, |i| {
        interpolate_by_curing(curing, &LOAD_LIVE_WOODY[i]) * LB_PER_SQ_FT_PER_TON_PER_ACRE
    })
}

/// Dead 0-¼" SAVR (ft²/ft³)
pub fn savr_dead_one_hour(aspen_fuel_model_number: i32, curing: f64) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(DEFAULT_SAVR_DEAD_ONE_HOUR, |i| {
        interpolate_by_curing(curing, &SAVR_DEAD_ONE_HOUR[i])
    })
}

/// Live woody SAVR (ft²/ft³)
pub fn savr_live_woody(aspen_fuel_model_number: i32, curing: f64) -> f64 {
    fuel_type_index(aspen_fuel_model_number).map_or(DEFAULT_SAVR_LIVE_WOODY, |i| {
        interpolate_by_curing(curing, &SAVR_LIVE_WOODY[i])
    })
}
