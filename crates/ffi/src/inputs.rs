//! Input setters. Each one validates its arguments before touching the
//! instance, so a rejected call leaves the previous inputs in place.

use behave_surface_core::core_types::{
    Canopy, Degrees, Feet, Fraction, FuelMoistures, MilesPerHour, SlopeInputMode, Topography,
    TwoFuelModelsInputs, TwoFuelModelsMethod, WindAndSpreadOrientationMode, WindHeightInputMode,
    WindInputs,
};

use crate::error::{BehaveSurfaceErrorCode, DefaultBehaveSurfaceError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_surface_mut};
use crate::instance::BehaveSurfaceInstance;

fn non_negative(param_name: &str, value: f64) -> Result<f64, DefaultBehaveSurfaceError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DefaultBehaveSurfaceError::invalid_value(
            param_name,
            value,
            "must be finite and non-negative",
        ))
    }
}

fn finite(param_name: &str, value: f64) -> Result<f64, DefaultBehaveSurfaceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DefaultBehaveSurfaceError::invalid_value(param_name, value, "must be finite"))
    }
}

fn fraction(param_name: &str, value: f64) -> Result<Fraction, DefaultBehaveSurfaceError> {
    if (0.0..=1.0).contains(&value) {
        Ok(Fraction::new(value))
    } else {
        Err(DefaultBehaveSurfaceError::invalid_value(param_name, value, "must be in [0, 1]"))
    }
}

/// Select the catalog fuel model for single fuel model runs.
///
/// Returns `InvalidFuelModel` when the number has no catalog entry.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_fuel_model(
    ptr: *const BehaveSurfaceInstance,
    fuel_model_number: i32,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_surface_mut(instance, |surface| {
            if !surface.is_fuel_model_defined(fuel_model_number) {
                return Err(DefaultBehaveSurfaceError::undefined_fuel_model(fuel_model_number));
            }
            surface.inputs_mut().fuel_model_number = fuel_model_number;
            Ok(())
        })?
    })
}

/// Set dead and live fuel moistures, in percent.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_moistures(
    ptr: *const BehaveSurfaceInstance,
    one_hour: f64,
    ten_hour: f64,
    hundred_hour: f64,
    live_herbaceous: f64,
    live_woody: f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let moistures = FuelMoistures::from_percent(
            non_negative("one_hour", one_hour)?,
            non_negative("ten_hour", ten_hour)?,
            non_negative("hundred_hour", hundred_hour)?,
            non_negative("live_herbaceous", live_herbaceous)?,
            non_negative("live_woody", live_woody)?,
        );
        with_surface_mut(instance, |surface| surface.inputs_mut().moistures = moistures)
    })
}

/// Set wind speed (mph), direction (degrees) and measurement height.
///
/// `height_mode`: 0 = direct midflame, 1 = twenty foot, 2 = ten meter.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_wind(
    ptr: *const BehaveSurfaceInstance,
    speed_mph: f64,
    direction_degrees: f64,
    height_mode: u8,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let height_mode = match height_mode {
            0 => WindHeightInputMode::DirectMidflame,
            1 => WindHeightInputMode::TwentyFoot,
            2 => WindHeightInputMode::TenMeter,
            _ => return Err(DefaultBehaveSurfaceError::invalid_code("height_mode", height_mode, 2)),
        };
        let wind = WindInputs::new(
            MilesPerHour::new(non_negative("speed_mph", speed_mph)?),
            Degrees::new(finite("direction_degrees", direction_degrees)?),
            height_mode,
        );
        with_surface_mut(instance, |surface| surface.inputs_mut().wind = wind)
    })
}

/// Set slope steepness and aspect (degrees).
///
/// `slope_mode`: 0 = degrees, 1 = percent.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_slope(
    ptr: *const BehaveSurfaceInstance,
    slope: f64,
    slope_mode: u8,
    aspect_degrees: f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let slope_mode = match slope_mode {
            0 => SlopeInputMode::Degrees,
            1 => SlopeInputMode::Percent,
            _ => return Err(DefaultBehaveSurfaceError::invalid_code("slope_mode", slope_mode, 1)),
        };
        let topography = Topography::new(
            non_negative("slope", slope)?,
            slope_mode,
            Degrees::new(finite("aspect_degrees", aspect_degrees)?),
        );
        with_surface_mut(instance, |surface| surface.inputs_mut().topography = topography)
    })
}

/// Set canopy cover (fraction), canopy height (ft) and crown ratio (fraction).
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_canopy(
    ptr: *const BehaveSurfaceInstance,
    cover: f64,
    height_feet: f64,
    crown_ratio: f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let canopy = Canopy {
            cover: fraction("cover", cover)?,
            height: Feet::new(non_negative("height_feet", height_feet)?),
            crown_ratio: fraction("crown_ratio", crown_ratio)?,
        };
        with_surface_mut(instance, |surface| surface.inputs_mut().canopy = canopy)
    })
}

/// Choose the frame for wind direction, direction of interest and direction of maximum spread.
///
/// `orientation_mode`: 0 = relative to upslope, 1 = relative to north.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_orientation_mode(
    ptr: *const BehaveSurfaceInstance,
    orientation_mode: u8,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let orientation_mode = match orientation_mode {
            0 => WindAndSpreadOrientationMode::RelativeToUpslope,
            1 => WindAndSpreadOrientationMode::RelativeToNorth,
            _ => {
                return Err(DefaultBehaveSurfaceError::invalid_code(
                    "orientation_mode",
                    orientation_mode,
                    1,
                ))
            }
        };
        with_surface_mut(instance, |surface| {
            surface.inputs_mut().orientation_mode = orientation_mode;
        })
    })
}

/// Override the computed wind adjustment factor. A negative value removes the override.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_wind_adjustment_factor(
    ptr: *const BehaveSurfaceInstance,
    factor: f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let factor = if factor < 0.0 {
            None
        } else {
            Some(*fraction("factor", factor)?)
        };
        with_surface_mut(instance, |surface| {
            surface.inputs_mut().user_provided_wind_adjustment_factor = factor;
        })
    })
}

/// Blend the current fuel model with a second one sharing the cell.
///
/// `method`: 1 = arithmetic, 2 = harmonic, 3 = two-dimensional.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_set_two_fuel_models(
    ptr: *const BehaveSurfaceInstance,
    second_fuel_model_number: i32,
    first_fuel_model_coverage: f64,
    method: u8,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let method = match method {
            1 => TwoFuelModelsMethod::Arithmetic,
            2 => TwoFuelModelsMethod::Harmonic,
            3 => TwoFuelModelsMethod::TwoDimensional,
            _ => {
                return Err(DefaultBehaveSurfaceError::invalid_parameter(format!(
                    "Parameter 'method' must be 1-3, got {method}"
                )))
            }
        };
        let two_fuel_models = TwoFuelModelsInputs {
            second_fuel_model_number,
            first_fuel_model_coverage: fraction(
                "first_fuel_model_coverage",
                first_fuel_model_coverage,
            )?,
            method,
        };
        with_surface_mut(instance, |surface| {
            if !surface.is_fuel_model_defined(second_fuel_model_number) {
                return Err(DefaultBehaveSurfaceError::undefined_fuel_model(
                    second_fuel_model_number,
                ));
            }
            surface.inputs_mut().two_fuel_models = Some(two_fuel_models);
            Ok(())
        })?
    })
}

/// Return to single fuel model runs.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_clear_two_fuel_models(
    ptr: *const BehaveSurfaceInstance,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_surface_mut(instance, |surface| surface.inputs_mut().two_fuel_models = None)
    })
}
