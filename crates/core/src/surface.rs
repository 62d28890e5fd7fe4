//! Surface fire facade
//!
//! [`Surface`] owns one set of inputs and the latest result, and picks single
//! or two fuel model execution. [`calculate_surface_fire`] is the same run as
//! a pure function, which is what batch runs use.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core_types::fuel_model::FuelModels;
use crate::core_types::surface_inputs::{SurfaceInputs, TwoFuelModelsMethod};
use crate::core_types::units::{Degrees, Feet, FeetPerMinute, MilesPerHour};
use crate::physics::fire_size::FireEllipse;
use crate::physics::fire_spread::{calculate_forward_spread_rate, SpreadResult};
use crate::physics::two_fuel_models::{calculate_two_fuel_models, TwoFuelModelsResult};

/// Inputs rejected before a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    /// Two fuel models were requested without a blend method
    MissingTwoFuelModelsMethod,
    /// Direction of interest is NaN or infinite
    InvalidDirectionOfInterest(f64),
    /// User wind adjustment factor is outside [0, 1]
    InvalidWindAdjustmentFactor(f64),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::MissingTwoFuelModelsMethod => {
                write!(f, "two fuel models selected without a blend method")
            }
            SurfaceError::InvalidDirectionOfInterest(direction) => {
                write!(f, "direction of interest {direction} is not finite")
            }
            SurfaceError::InvalidWindAdjustmentFactor(factor) => {
                write!(f, "wind adjustment factor {factor} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Outputs of one surface run
///
/// For a two fuel model run `spread` holds the combined outputs and
/// `two_fuel_models` keeps both single-model runs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceFireResult {
    pub spread: SpreadResult,
    pub two_fuel_models: Option<TwoFuelModelsResult>,
}

impl SurfaceFireResult {
    /// Rate in the direction of interest, or of the head fire
    pub fn spread_rate(&self) -> FeetPerMinute {
        FeetPerMinute::from_raw(self.spread.spread_rate)
    }

    pub fn max_spread_rate(&self) -> FeetPerMinute {
        FeetPerMinute::from_raw(self.spread.max_spread_rate)
    }

    pub fn backing_spread_rate(&self) -> FeetPerMinute {
        FeetPerMinute::from_raw(self.spread.backing_spread_rate)
    }

    pub fn no_wind_no_slope_spread_rate(&self) -> FeetPerMinute {
        FeetPerMinute::from_raw(self.spread.no_wind_no_slope_spread_rate)
    }

    /// Heading of maximum spread in the run's orientation frame
    pub fn direction_of_max_spread(&self) -> Degrees {
        Degrees::new(self.spread.direction_of_max_spread)
    }

    pub fn flame_length(&self) -> Feet {
        Feet::from_raw(self.spread.flame_length)
    }

    /// Btu/ft/s
    pub fn fireline_intensity(&self) -> f64 {
        self.spread.fireline_intensity
    }

    /// Btu/ft²
    pub fn heat_per_unit_area(&self) -> f64 {
        self.spread.heat_per_unit_area
    }

    /// Btu/ft²/min
    pub fn reaction_intensity(&self) -> f64 {
        self.spread.reaction_intensity.total
    }

    /// min
    pub fn residence_time(&self) -> f64 {
        self.spread.residence_time
    }

    pub fn fire_length_to_width_ratio(&self) -> f64 {
        self.spread.length_to_width_ratio
    }

    pub fn fire_eccentricity(&self) -> f64 {
        self.spread.eccentricity
    }

    pub fn midflame_wind_speed(&self) -> MilesPerHour {
        FeetPerMinute::from_raw(self.spread.midflame_wind_speed).to_miles_per_hour()
    }

    pub fn effective_wind_speed(&self) -> MilesPerHour {
        FeetPerMinute::from_raw(self.spread.effective_wind_speed).to_miles_per_hour()
    }

    pub fn wind_speed_limit(&self) -> MilesPerHour {
        FeetPerMinute::from_raw(self.spread.wind_speed_limit).to_miles_per_hour()
    }

    pub fn is_wind_limit_exceeded(&self) -> bool {
        self.spread.is_wind_limit_exceeded
    }

    pub fn wind_adjustment_factor(&self) -> f64 {
        self.spread.wind_adjustment.factor
    }

    pub fn fuelbed_depth(&self) -> Feet {
        Feet::from_raw(self.spread.fuelbed_depth)
    }

    /// Rate toward `direction`, given in the run's orientation frame
    pub fn spread_rate_at_vector(&self, direction: Degrees) -> FeetPerMinute {
        FeetPerMinute::from_raw(self.spread.spread_rate_at_direction(*direction))
    }

    /// Fire ellipse after `elapsed_minutes`, grown from the head fire rate
    pub fn fire_size(&self, elapsed_minutes: f64) -> FireEllipse {
        FireEllipse::from_length_to_width_ratio(
            self.spread.max_spread_rate,
            self.spread.length_to_width_ratio,
            elapsed_minutes.max(0.0),
        )
    }

    pub fn elliptical_a(&self, elapsed_minutes: f64) -> Feet {
        Feet::from_raw(self.fire_size(elapsed_minutes).elliptical_a)
    }

    pub fn elliptical_b(&self, elapsed_minutes: f64) -> Feet {
        Feet::from_raw(self.fire_size(elapsed_minutes).elliptical_b)
    }

    pub fn elliptical_c(&self, elapsed_minutes: f64) -> Feet {
        Feet::from_raw(self.fire_size(elapsed_minutes).elliptical_c)
    }
}

fn validate(
    inputs: &SurfaceInputs,
    direction_of_interest: Option<f64>,
) -> Result<(), SurfaceError> {
    if let Some(direction) = direction_of_interest.filter(|d| !d.is_finite()) {
        return Err(SurfaceError::InvalidDirectionOfInterest(direction));
    }
    if let Some(factor) = inputs
        .user_provided_wind_adjustment_factor
        .filter(|f| !(0.0..=1.0).contains(f))
    {
        return Err(SurfaceError::InvalidWindAdjustmentFactor(factor));
    }
    if inputs
        .two_fuel_models
        .is_some_and(|two| two.method == TwoFuelModelsMethod::NoMethod)
    {
        return Err(SurfaceError::MissingTwoFuelModelsMethod);
    }
    Ok(())
}

/// Run the surface model for one input set
///
/// An undefined fuel model is not an error; it produces zero spread. Check
/// [`FuelModels::is_defined`] first when that matters.
///
/// # Errors
/// Returns [`SurfaceError`] for a two fuel model run without a blend method,
/// a non-finite direction of interest or a user wind adjustment factor
/// outside [0, 1].
pub fn calculate_surface_fire(
    fuel_models: &FuelModels,
    inputs: &SurfaceInputs,
    direction_of_interest: Option<Degrees>,
) -> Result<SurfaceFireResult, SurfaceError> {
    let direction_of_interest = direction_of_interest.map(|d| *d);
    validate(inputs, direction_of_interest)?;

    let result = match &inputs.two_fuel_models {
        Some(two_fuel_models) => {
            let two = calculate_two_fuel_models(
                fuel_models,
                inputs,
                two_fuel_models,
                direction_of_interest,
            );
            SurfaceFireResult {
                spread: two.blended,
                two_fuel_models: Some(two),
            }
        }
        None => SurfaceFireResult {
            spread: calculate_forward_spread_rate(fuel_models, inputs, direction_of_interest),
            two_fuel_models: None,
        },
    };
    Ok(result)
}

/// Stateful surface run: one input set, one catalog handle, the latest result
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use behave_surface_core::{FuelModels, Surface};
/// use behave_surface_core::core_types::surface_inputs::*;
/// use behave_surface_core::core_types::units::{Degrees, MilesPerHour};
///
/// let mut surface = Surface::new(Arc::new(FuelModels::new()));
/// surface.inputs_mut().update_surface_inputs(
///     124,
///     FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
///     WindInputs::new(MilesPerHour::new(5.0), Degrees::new(0.0), WindHeightInputMode::TwentyFoot),
///     Topography::new(30.0, SlopeInputMode::Percent, Degrees::new(0.0)),
///     Canopy::default(),
/// );
/// let result = surface.do_surface_run_in_direction_of_max_spread().unwrap();
/// assert!(*result.spread_rate() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    fuel_models: Arc<FuelModels>,
    inputs: SurfaceInputs,
    result: SurfaceFireResult,
}

impl Surface {
    pub fn new(fuel_models: Arc<FuelModels>) -> Self {
        Self {
            fuel_models,
            inputs: SurfaceInputs::default(),
            result: SurfaceFireResult::default(),
        }
    }

    pub fn fuel_models(&self) -> &FuelModels {
        &self.fuel_models
    }

    /// Catalog for editing custom models; clones it first if other handles share it
    pub fn fuel_models_mut(&mut self) -> &mut FuelModels {
        Arc::make_mut(&mut self.fuel_models)
    }

    pub fn is_fuel_model_defined(&self, fuel_model_number: i32) -> bool {
        self.fuel_models.is_defined(fuel_model_number)
    }

    pub fn inputs(&self) -> &SurfaceInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut SurfaceInputs {
        &mut self.inputs
    }

    pub fn set_inputs(&mut self, inputs: SurfaceInputs) {
        self.inputs = inputs;
    }

    /// Latest result (all zeros before the first run)
    pub fn result(&self) -> &SurfaceFireResult {
        &self.result
    }

    /// Run for a direction of interest given in the inputs' orientation frame
    ///
    /// # Errors
    /// See [`calculate_surface_fire`]. The previous result is kept on error.
    pub fn do_surface_run_in_direction_of_interest(
        &mut self,
        direction_of_interest: Degrees,
    ) -> Result<&SurfaceFireResult, SurfaceError> {
        self.run(Some(direction_of_interest))
    }

    /// Run reporting the head fire rate
    ///
    /// # Errors
    /// See [`calculate_surface_fire`]. The previous result is kept on error.
    pub fn do_surface_run_in_direction_of_max_spread(
        &mut self,
    ) -> Result<&SurfaceFireResult, SurfaceError> {
        self.run(None)
    }

    fn run(
        &mut self,
        direction_of_interest: Option<Degrees>,
    ) -> Result<&SurfaceFireResult, SurfaceError> {
        self.result =
            calculate_surface_fire(&self.fuel_models, &self.inputs, direction_of_interest)?;
        Ok(&self.result)
    }

    /// Rate toward `direction` from the latest run
    pub fn calculate_spread_rate_at_vector(&self, direction: Degrees) -> FeetPerMinute {
        self.result.spread_rate_at_vector(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::surface_inputs::{
        Canopy, FuelMoistures, SlopeInputMode, Topography, TwoFuelModelsInputs,
        WindHeightInputMode, WindInputs,
    };
    use crate::core_types::units::Fraction;
    use approx::assert_relative_eq;

    fn surface() -> Surface {
        let mut surface = Surface::new(Arc::new(FuelModels::new()));
        surface.inputs_mut().update_surface_inputs(
            124,
            FuelMoistures::from_percent(6.0, 7.0, 8.0, 60.0, 90.0),
            WindInputs::new(
                MilesPerHour::new(5.0),
                Degrees::new(0.0),
                WindHeightInputMode::TwentyFoot,
            ),
            Topography::new(30.0, SlopeInputMode::Percent, Degrees::new(0.0)),
            Canopy {
                cover: Fraction::new(0.5),
                height: Feet::new(30.0),
                crown_ratio: Fraction::new(0.5),
            },
        );
        surface
    }

    #[test]
    fn test_run_and_getters() {
        let mut surface = surface();
        let result = *surface.do_surface_run_in_direction_of_max_spread().unwrap();
        assert_relative_eq!(*result.spread_rate().to_chains_per_hour(), 8.876216, epsilon = 1e-6);
        assert_eq!(result.spread_rate(), result.max_spread_rate());
        assert!(*result.backing_spread_rate() < *result.spread_rate());
        assert_relative_eq!(
            *result.midflame_wind_speed(),
            5.0 * result.wind_adjustment_factor(),
            epsilon = 1e-12
        );
        assert_eq!(surface.result(), &result);
    }

    #[test]
    fn test_missing_two_fuel_method_rejected() {
        let mut surface = surface();
        let before = *surface.result();
        surface.inputs_mut().two_fuel_models = Some(TwoFuelModelsInputs {
            second_fuel_model_number: 1,
            first_fuel_model_coverage: Fraction::new(0.5),
            method: TwoFuelModelsMethod::NoMethod,
        });
        assert_eq!(
            surface.do_surface_run_in_direction_of_max_spread(),
            Err(SurfaceError::MissingTwoFuelModelsMethod)
        );
        assert_eq!(surface.result(), &before);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut surface = surface();
        assert!(matches!(
            surface.do_surface_run_in_direction_of_interest(Degrees::new(f64::NAN)),
            Err(SurfaceError::InvalidDirectionOfInterest(_))
        ));
        surface.inputs_mut().user_provided_wind_adjustment_factor = Some(1.5);
        assert_eq!(
            surface.do_surface_run_in_direction_of_max_spread(),
            Err(SurfaceError::InvalidWindAdjustmentFactor(1.5))
        );
    }

    #[test]
    fn test_undefined_fuel_model_runs_to_zero() {
        let mut surface = surface();
        surface.inputs_mut().fuel_model_number = 14;
        assert!(!surface.is_fuel_model_defined(14));
        let result = surface.do_surface_run_in_direction_of_max_spread().unwrap();
        assert_eq!(*result.spread_rate(), 0.0);
        assert_eq!(*result.flame_length(), 0.0);
    }

    #[test]
    fn test_custom_model_does_not_touch_shared_catalog() {
        let shared = Arc::new(FuelModels::new());
        let mut surface = Surface::new(Arc::clone(&shared));
        let record = shared.record(1).cloned().unwrap();
        surface.fuel_models_mut().set_custom_fuel_model(14, record).unwrap();
        assert!(surface.is_fuel_model_defined(14));
        assert!(!shared.is_defined(14));
    }
}
