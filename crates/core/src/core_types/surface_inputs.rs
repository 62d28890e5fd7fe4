//! Surface fire run inputs
//!
//! One `SurfaceInputs` value describes everything a surface run needs besides
//! the fuel model catalog: fuel selection, moistures, wind, topography and
//! canopy. The `update_*` helpers mirror the usual ways a run is configured and
//! reset the mode flags they do not set.

use crate::core_types::units::{Degrees, Feet, Fraction, MilesPerHour, MoistureContent};
use serde::{Deserialize, Serialize};

/// How the outputs of two fuel models sharing a cell are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TwoFuelModelsMethod {
    #[default]
    NoMethod,
    /// Coverage-weighted arithmetic mean of spread rates
    Arithmetic,
    /// Coverage-weighted harmonic mean of spread rates
    Harmonic,
    /// Expected spread rate through a random two-fuel landscape
    TwoDimensional,
}

/// Height at which the input wind speed was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindHeightInputMode {
    #[default]
    DirectMidflame,
    TwentyFoot,
    TenMeter,
}

/// Reference for wind direction, direction of interest and direction of maximum spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindAndSpreadOrientationMode {
    /// Clockwise from upslope; wind direction is where the wind pushes the fire
    #[default]
    RelativeToUpslope,
    /// Clockwise from compass north
    RelativeToNorth,
}

/// Units of the slope value handed to [`Topography::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlopeInputMode {
    Degrees,
    #[default]
    Percent,
}

/// Which canopy geometry feeds the wind adjustment factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindAdjustmentFactorCalculationMethod {
    #[default]
    UseCrownRatio,
    DontUseCrownRatio,
}

/// Branch taken by the wind adjustment factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindAdjustmentFactorShelterMethod {
    #[default]
    Unsheltered,
    Sheltered,
}

/// Per size class fuel moistures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelMoistures {
    pub one_hour: MoistureContent,
    pub ten_hour: MoistureContent,
    pub hundred_hour: MoistureContent,
    pub live_herbaceous: MoistureContent,
    pub live_woody: MoistureContent,
}

impl FuelMoistures {
    /// Build from percentages (6.0 = 6%)
    pub fn from_percent(
        one_hour: f64,
        ten_hour: f64,
        hundred_hour: f64,
        live_herbaceous: f64,
        live_woody: f64,
    ) -> Self {
        Self {
            one_hour: MoistureContent::from_percent(one_hour),
            ten_hour: MoistureContent::from_percent(ten_hour),
            hundred_hour: MoistureContent::from_percent(hundred_hour),
            live_herbaceous: MoistureContent::from_percent(live_herbaceous),
            live_woody: MoistureContent::from_percent(live_woody),
        }
    }
}

/// Open or midflame wind
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindInputs {
    pub speed: MilesPerHour,
    pub direction: Degrees,
    pub height_mode: WindHeightInputMode,
}

impl WindInputs {
    /// Direction is wrapped into [0, 360]
    pub fn new(speed: MilesPerHour, direction: Degrees, height_mode: WindHeightInputMode) -> Self {
        Self {
            speed,
            direction: direction.normalized_direction(),
            height_mode,
        }
    }
}

/// Slope (always stored in degrees) and aspect
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Topography {
    pub slope: Degrees,
    pub aspect: Degrees,
}

impl Topography {
    pub fn new(slope: f64, slope_mode: SlopeInputMode, aspect: Degrees) -> Self {
        let slope = match slope_mode {
            SlopeInputMode::Degrees => Degrees::new(slope),
            SlopeInputMode::Percent => Degrees::from_percent_slope(slope),
        };
        Self { slope, aspect }
    }
}

/// Overstory canopy used for wind sheltering
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Canopy {
    pub cover: Fraction,
    pub height: Feet,
    pub crown_ratio: Fraction,
}

/// Second fuel model sharing the cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoFuelModelsInputs {
    pub second_fuel_model_number: i32,
    /// Coverage of the first fuel model; the second covers the rest
    pub first_fuel_model_coverage: Fraction,
    pub method: TwoFuelModelsMethod,
}

/// Palmetto-gallberry understory parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PalmettoGallberryInputs {
    pub age_of_rough: f64,          // years
    pub height_of_understory: f64,  // ft
    pub palmetto_coverage: f64,     // percent
    pub overstory_basal_area: f64,  // ft²/acre
}

/// Western aspen fuel type and curing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WesternAspenInputs {
    /// Aspen fuel type 1..=5
    pub aspen_fuel_model_number: i32,
    pub curing_level: Fraction,
}

/// Fuelbed replacing the catalog model
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SpecialFuel {
    #[default]
    None,
    PalmettoGallberry(PalmettoGallberryInputs),
    WesternAspen(WesternAspenInputs),
}

/// Full input set for one surface run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceInputs {
    pub fuel_model_number: i32,
    pub moistures: FuelMoistures,
    pub wind: WindInputs,
    pub topography: Topography,
    pub canopy: Canopy,
    pub orientation_mode: WindAndSpreadOrientationMode,
    pub wind_adjustment_factor_method: WindAdjustmentFactorCalculationMethod,
    /// Replaces the computed factor for 20-ft and 10-m wind input
    pub user_provided_wind_adjustment_factor: Option<f64>,
    pub two_fuel_models: Option<TwoFuelModelsInputs>,
    pub special_fuel: SpecialFuel,
}

impl SurfaceInputs {
    /// Configure a single fuel model run; clears two-fuel and special-fuel modes
    pub fn update_surface_inputs(
        &mut self,
        fuel_model_number: i32,
        moistures: FuelMoistures,
        wind: WindInputs,
        topography: Topography,
        canopy: Canopy,
    ) {
        self.fuel_model_number = fuel_model_number;
        self.moistures = moistures;
        self.wind = WindInputs::new(wind.speed, wind.direction, wind.height_mode);
        self.topography = topography;
        self.canopy = canopy;
        self.two_fuel_models = None;
        self.special_fuel = SpecialFuel::None;
    }

    /// Configure a two fuel model run with `first_fuel_model_number` as the first model
    pub fn update_for_two_fuel_models(
        &mut self,
        first_fuel_model_number: i32,
        two_fuel_models: TwoFuelModelsInputs,
        moistures: FuelMoistures,
        wind: WindInputs,
        topography: Topography,
        canopy: Canopy,
    ) {
        self.update_surface_inputs(first_fuel_model_number, moistures, wind, topography, canopy);
        self.two_fuel_models = Some(two_fuel_models);
    }

    /// Configure a palmetto-gallberry run (no catalog model)
    pub fn update_for_palmetto_gallberry(
        &mut self,
        palmetto_gallberry: PalmettoGallberryInputs,
        moistures: FuelMoistures,
        wind: WindInputs,
        topography: Topography,
        canopy: Canopy,
    ) {
        self.update_surface_inputs(0, moistures, wind, topography, canopy);
        self.special_fuel = SpecialFuel::PalmettoGallberry(palmetto_gallberry);
    }

    /// Configure a western aspen run (no catalog model)
    pub fn update_for_western_aspen(
        &mut self,
        western_aspen: WesternAspenInputs,
        moistures: FuelMoistures,
        wind: WindInputs,
        topography: Topography,
        canopy: Canopy,
    ) {
        self.update_surface_inputs(0, moistures, wind, topography, canopy);
        self.special_fuel = SpecialFuel::WesternAspen(western_aspen);
    }

    pub fn is_using_two_fuel_models(&self) -> bool {
        self.two_fuel_models.is_some()
    }

    pub fn is_relative_to_north(&self) -> bool {
        self.orientation_mode == WindAndSpreadOrientationMode::RelativeToNorth
    }

    /// Wind direction clockwise from upslope, the frame the spread vectors use
    ///
    /// North-referenced wind is rotated by the current aspect at read time, so
    /// an aspect change after the wind was set is still honored.
    pub fn wind_direction_from_upslope(&self) -> f64 {
        match self.orientation_mode {
            WindAndSpreadOrientationMode::RelativeToUpslope => *self.wind.direction,
            WindAndSpreadOrientationMode::RelativeToNorth => {
                *self.wind.direction - *self.topography.aspect
            }
        }
    }

    /// Copy of these inputs pointed at a different catalog model
    pub(crate) fn with_fuel_model_number(&self, fuel_model_number: i32) -> Self {
        Self {
            fuel_model_number,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_inputs() -> SurfaceInputs {
        let mut inputs = SurfaceInputs::default();
        inputs.update_surface_inputs(
            124,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
            WindInputs::new(
                MilesPerHour::new(5.0),
                Degrees::new(-45.0),
                WindHeightInputMode::TwentyFoot,
            ),
            Topography::new(30.0, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy::default(),
        );
        inputs
    }

    #[test]
    fn test_update_normalizes_wind_direction() {
        let inputs = base_inputs();
        assert_eq!(*inputs.wind.direction, 315.0);
        assert!((*inputs.moistures.live_herbaceous - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_percent_slope_stored_as_degrees() {
        let inputs = base_inputs();
        let expected = (0.3_f64).atan().to_degrees();
        assert!((*inputs.topography.slope - expected).abs() < 1e-12);
    }

    #[test]
    fn test_north_wind_uses_current_aspect() {
        let mut inputs = base_inputs();
        inputs.orientation_mode = WindAndSpreadOrientationMode::RelativeToNorth;
        inputs.topography.aspect = Degrees::new(95.0);
        assert_eq!(inputs.wind_direction_from_upslope(), 220.0);

        inputs.topography.aspect = Degrees::new(15.0);
        assert_eq!(inputs.wind_direction_from_upslope(), 300.0);
    }

    #[test]
    fn test_special_fuel_updates_clear_catalog_model() {
        let mut inputs = base_inputs();
        inputs.update_for_palmetto_gallberry(
            PalmettoGallberryInputs {
                age_of_rough: 10.0,
                height_of_understory: 3.0,
                palmetto_coverage: 50.0,
                overstory_basal_area: 40.0,
            },
            inputs.moistures,
            inputs.wind,
            inputs.topography,
            inputs.canopy,
        );
        assert_eq!(inputs.fuel_model_number, 0);
        assert!(matches!(inputs.special_fuel, SpecialFuel::PalmettoGallberry(_)));

        // A plain update drops the special fuel again
        inputs.update_surface_inputs(
            1,
            inputs.moistures,
            inputs.wind,
            inputs.topography,
            inputs.canopy,
        );
        assert_eq!(inputs.special_fuel, SpecialFuel::None);
        assert!(!inputs.is_using_two_fuel_models());
    }
}
