//! Palmetto-gallberry understory fuel loads
//!
//! Empirical load and depth equations for southeastern US palmetto-gallberry
//! rough, driven by age of rough, understory height, palmetto coverage and
//! overstory basal area. All loads in lb/ft², floored at zero where the fitted
//! polynomial can go negative.
//!
//! # References
//! - Hough, W.A., Albini, F.A. (1978). "Predicting fire behavior in palmetto-gallberry fuel
//!   complexes." USDA Forest Service Research Paper SE-174.

use crate::core_types::surface_inputs::PalmettoGallberryInputs;

/// Dead fuel moisture of extinction (fraction)
pub const MOISTURE_OF_EXTINCTION_DEAD: f64 = 0.40;
/// Heat of combustion for both life states (Btu/lb)
pub const HEAT_OF_COMBUSTION: f64 = 8300.0;
/// Oven-dry particle densities (lb/ft³)
pub const FUEL_DENSITY_DEAD: f64 = 30.0;
pub const FUEL_DENSITY_LIVE: f64 = 46.0;
/// Total silica content (fraction)
pub const TOTAL_SILICA_CONTENT: f64 = 0.030;
/// Effective live silica content (fraction)
pub const SILICA_EFFECTIVE_LIVE: f64 = 0.015;

/// Dead [0-¼" , ¼-1", foliage, litter] and live [0-¼", ¼-1", foliage] loads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PalmettoGallberryLoads {
    pub dead_one_hour: f64,
    pub dead_ten_hour: f64,
    pub dead_foliage: f64,
    pub litter: f64,
    pub live_one_hour: f64,
    pub live_ten_hour: f64,
    pub live_foliage: f64,
}

/// Dead 0-¼" load
///
/// # Formula
/// ```text
/// w = -0.00121 + 0.00379·ln(age) + 0.00118·h²
/// ```
pub fn dead_one_hour_load(age_of_rough: f64, height_of_understory: f64) -> f64 {
    (-0.00121 + 0.00379 * age_of_rough.ln() + 0.00118 * height_of_understory * height_of_understory)
        .max(0.0)
}

/// Dead ¼-1" load
pub fn dead_ten_hour_load(age_of_rough: f64, palmetto_coverage: f64) -> f64 {
    (-0.00775 + 0.00021 * palmetto_coverage + 0.00007 * age_of_rough * age_of_rough).max(0.0)
}

/// Dead foliage load
pub fn dead_foliage_load(age_of_rough: f64, palmetto_coverage: f64) -> f64 {
    0.00221 * age_of_rough.powf(0.51263) * (0.02482 * palmetto_coverage).exp()
}

/// Litter (L layer) load
pub fn litter_load(age_of_rough: f64, overstory_basal_area: f64) -> f64 {
    (0.03632 + 0.0005336 * overstory_basal_area) * (1.0 - 0.25_f64.powf(age_of_rough))
}

/// Live 0-¼" load
pub fn live_one_hour_load(age_of_rough: f64, height_of_understory: f64) -> f64 {
    0.00546 + 0.00092 * age_of_rough + 0.00212 * height_of_understory * height_of_understory
}

/// Live ¼-1" load
pub fn live_ten_hour_load(age_of_rough: f64, height_of_understory: f64) -> f64 {
    (-0.02128
        + 0.00014 * age_of_rough * age_of_rough
        + 0.00314 * height_of_understory * height_of_understory)
        .max(0.0)
}

/// Live foliage load
pub fn live_foliage_load(
    age_of_rough: f64,
    palmetto_coverage: f64,
    height_of_understory: f64,
) -> f64 {
    (-0.0036
        + 0.00253 * age_of_rough
        + 0.00049 * palmetto_coverage
        + 0.00282 * height_of_understory * height_of_understory)
        .max(0.0)
}

/// Fuelbed depth is two thirds of the understory height (ft)
pub fn fuelbed_depth(height_of_understory: f64) -> f64 {
    2.0 * height_of_understory / 3.0
}

/// All seven loads for one stand
pub fn calculate_loads(inputs: &PalmettoGallberryInputs) -> PalmettoGallberryLoads {
    let age = inputs.age_of_rough;
    let height = inputs.height_of_understory;
    let coverage = inputs.palmetto_coverage;
    PalmettoGallberryLoads {
        dead_one_hour: dead_one_hour_load(age, height),
        dead_ten_hour: dead_ten_hour_load(age, coverage),
        dead_foliage: dead_foliage_load(age, coverage),
        litter: litter_load(age, inputs.overstory_basal_area),
        live_one_hour: live_one_hour_load(age, height),
        live_ten_hour: live_ten_hour_load(age, height),
        live_foliage: live_foliage_load(age, coverage, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_young_rough_floors_negative_loads() {
        // One-year rough with a short understory drives the 10-h fits negative
        assert_eq!(dead_ten_hour_load(1.0, 0.0), 0.0);
        assert_eq!(live_ten_hour_load(1.0, 0.5), 0.0);
        assert_eq!(dead_one_hour_load(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_loads_grow_with_age() {
        let young = calculate_loads(&PalmettoGallberryInputs {
            age_of_rough: 2.0,
            height_of_understory: 2.0,
            palmetto_coverage: 40.0,
            overstory_basal_area: 50.0,
        });
        let old = calculate_loads(&PalmettoGallberryInputs {
            age_of_rough: 15.0,
            height_of_understory: 2.0,
            palmetto_coverage: 40.0,
            overstory_basal_area: 50.0,
        });
        assert!(old.dead_foliage > young.dead_foliage);
        assert!(old.litter > young.litter);
        assert!(old.live_one_hour > young.live_one_hour);
    }

    #[test]
    fn test_litter_formula() {
        let expected = (0.03632 + 0.0005336 * 80.0) * (1.0 - 0.25_f64.powf(3.0));
        assert!((litter_load(3.0, 80.0) - expected).abs() < 1e-15);
        assert!((fuelbed_depth(3.0) - 2.0).abs() < 1e-15);
    }
}
