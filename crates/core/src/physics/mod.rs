//! Surface fire physics: fuelbed, reaction intensity, spread, fire shape

pub(crate) mod expected_spread_rate;
pub(crate) mod fire_size;
pub(crate) mod fire_spread;
pub(crate) mod fuelbed_intermediates;
pub(crate) mod palmetto_gallberry;
pub(crate) mod propagating_flux;
pub(crate) mod reaction_intensity;
pub(crate) mod two_fuel_models;
pub(crate) mod western_aspen;
pub(crate) mod wind_adjustment_factor;

// Result types handed out by the facade
pub use fire_size::FireEllipse;
pub use fire_spread::{SpreadResult, WindCoefficients};
pub use reaction_intensity::ReactionIntensity;
pub use two_fuel_models::TwoFuelModelsResult;
pub use wind_adjustment_factor::WindAdjustment;

// ============================================================================
// PUBLIC RE-EXPORTS FOR VALIDATION TESTING
// ============================================================================
// Integration tests check the individual equations against published values,
// so each physics step is reachable on its own.

/// Public re-exports of the fuelbed intermediates module
pub mod fuelbed_intermediates_validation {
    pub use super::fuelbed_intermediates::{
        calculate_fuelbed_intermediates, FuelParticles, FuelbedIntermediates, MAX_PARTICLES,
    };
}

/// Public re-exports of the reaction intensity and propagating flux modules
pub mod reaction_intensity_validation {
    pub use super::propagating_flux::calculate_propagating_flux;
    pub use super::reaction_intensity::{
        calculate_reaction_intensity, mineral_damping_coefficient, moisture_damping_coefficient,
    };
}

/// Public re-exports of the wind adjustment factor module
pub mod wind_adjustment_factor_validation {
    pub use super::wind_adjustment_factor::{
        calculate_wind_adjustment_factor, canopy_crown_fraction,
    };
}

/// Public re-exports of the fire spread module
pub mod fire_spread_validation {
    pub use super::fire_spread::{
        calculate_backing_spread_rate, calculate_eccentricity, calculate_fireline_intensity,
        calculate_flame_length, calculate_forward_spread_rate, calculate_length_to_width_ratio,
        calculate_residence_time, calculate_slope_factor, direction_from_upslope,
        spread_rate_at_vector, AZIMUTH_SNAP_TOLERANCE_DEGREES,
        DIRECTION_OF_INTEREST_TOLERANCE_DEGREES,
    };
}

/// Public re-exports of the fire size module
pub mod fire_size_validation {
    pub use super::fire_size::ellipse_perimeter;
}

/// Public re-exports of the two fuel models and expected spread rate modules
pub mod two_fuel_models_validation {
    pub use super::expected_spread_rate::expected_spread_rate;
    pub use super::two_fuel_models::{
        blend_spread_rates, calculate_two_fuel_models, EXCLUSIVE_COVERAGE,
    };
}

/// Public re-exports of the palmetto-gallberry module
pub mod palmetto_gallberry_validation {
    pub use super::palmetto_gallberry::{
        calculate_loads, dead_foliage_load, dead_one_hour_load, dead_ten_hour_load,
        fuelbed_depth, litter_load, live_foliage_load, live_one_hour_load, live_ten_hour_load,
        PalmettoGallberryLoads, FUEL_DENSITY_DEAD, FUEL_DENSITY_LIVE, HEAT_OF_COMBUSTION,
        MOISTURE_OF_EXTINCTION_DEAD, SILICA_EFFECTIVE_LIVE, TOTAL_SILICA_CONTENT,
    };
}

/// Public re-exports of the western aspen module
pub mod western_aspen_validation {
    pub use super::western_aspen::{
        fuelbed_depth, interpolate_by_curing, load_dead_one_hour, load_dead_ten_hour,
        load_live_herbaceous, load_live_woody, savr_dead_one_hour, savr_live_woody,
        ASPEN_FUEL_TYPES, HEAT_OF_COMBUSTION, MOISTURE_OF_EXTINCTION_DEAD, SAVR_DEAD_TEN_HOUR,
        SAVR_LIVE_HERBACEOUS,
    };
}
