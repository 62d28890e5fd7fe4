use behave_surface_core::core_types::Degrees;
use behave_surface_core::{FireEllipse, SurfaceFireResult};

use crate::error::{BehaveSurfaceErrorCode, DefaultBehaveSurfaceError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_surface, write_out};
use crate::instance::BehaveSurfaceInstance;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
/// FFI-friendly snapshot of the latest surface run.
/// Keep this layout stable for C/C++/C# consumers.
pub struct SurfaceFireOutputs {
    /// Rate toward the direction of interest, or the head rate (ft/min).
    pub spread_rate: f64,
    /// Head fire rate (ft/min).
    pub max_spread_rate: f64,
    /// Backing fire rate (ft/min).
    pub backing_spread_rate: f64,
    /// Heading of maximum spread in the instance's orientation frame (degrees).
    pub direction_of_max_spread: f64,
    /// Byram flame length (ft).
    pub flame_length: f64,
    /// Fireline intensity (Btu/ft/s).
    pub fireline_intensity: f64,
    /// Heat per unit area (Btu/ft²).
    pub heat_per_unit_area: f64,
    /// Total reaction intensity (Btu/ft²/min).
    pub reaction_intensity: f64,
    /// Flame residence time (min).
    pub residence_time: f64,
    pub length_to_width_ratio: f64,
    pub eccentricity: f64,
    /// Midflame wind speed (mph).
    pub midflame_wind_speed: f64,
    /// Effective wind speed (mph).
    pub effective_wind_speed: f64,
    /// Wind speed limit (mph).
    pub wind_speed_limit: f64,
    pub is_wind_limit_exceeded: bool,
    pub wind_adjustment_factor: f64,
}

impl From<&SurfaceFireResult> for SurfaceFireOutputs {
    fn from(result: &SurfaceFireResult) -> Self {
        Self {
            spread_rate: *result.spread_rate(),
            max_spread_rate: *result.max_spread_rate(),
            backing_spread_rate: *result.backing_spread_rate(),
            direction_of_max_spread: *result.direction_of_max_spread(),
            flame_length: *result.flame_length(),
            fireline_intensity: result.fireline_intensity(),
            heat_per_unit_area: result.heat_per_unit_area(),
            reaction_intensity: result.reaction_intensity(),
            residence_time: result.residence_time(),
            length_to_width_ratio: result.fire_length_to_width_ratio(),
            eccentricity: result.fire_eccentricity(),
            midflame_wind_speed: *result.midflame_wind_speed(),
            effective_wind_speed: *result.effective_wind_speed(),
            wind_speed_limit: *result.wind_speed_limit(),
            is_wind_limit_exceeded: result.is_wind_limit_exceeded(),
            wind_adjustment_factor: result.wind_adjustment_factor(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
/// Fire ellipse after an elapsed time, all lengths in ft and area in ft².
pub struct FireSizeOutputs {
    pub forward_spread_distance: f64,
    pub backing_spread_distance: f64,
    pub elliptical_a: f64,
    pub elliptical_b: f64,
    pub elliptical_c: f64,
    pub perimeter: f64,
    pub area: f64,
}

impl From<FireEllipse> for FireSizeOutputs {
    fn from(ellipse: FireEllipse) -> Self {
        Self {
            forward_spread_distance: ellipse.forward_spread_distance,
            backing_spread_distance: ellipse.backing_spread_distance,
            elliptical_a: ellipse.elliptical_a,
            elliptical_b: ellipse.elliptical_b,
            elliptical_c: ellipse.elliptical_c,
            perimeter: ellipse.perimeter,
            area: ellipse.area,
        }
    }
}

/// Copy the latest run's outputs into `out_outputs` (all zeros before the first run).
///
/// Thread-safe: acquires the `RwLock` read lock.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_surface_new`.
/// - `out_outputs` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_get_outputs(
    ptr: *const BehaveSurfaceInstance,
    out_outputs: *mut SurfaceFireOutputs,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let outputs = with_surface(instance, |surface| SurfaceFireOutputs::from(surface.result()))?;
        unsafe { write_out(out_outputs, "out_outputs", outputs) }
    })
}

/// Spread rate (ft/min) of the latest run toward `direction` (degrees).
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_surface_new`.
/// - `out_rate` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_get_spread_rate_at_vector(
    ptr: *const BehaveSurfaceInstance,
    direction: f64,
    out_rate: *mut f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        if !direction.is_finite() {
            return Err(DefaultBehaveSurfaceError::invalid_value(
                "direction",
                direction,
                "must be finite",
            ));
        }
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let rate = with_surface(instance, |surface| {
            *surface.calculate_spread_rate_at_vector(Degrees::new(direction))
        })?;
        unsafe { write_out(out_rate, "out_rate", rate) }
    })
}

/// Fire ellipse of the latest run after `elapsed_minutes`.
///
/// # Safety
/// - `ptr` must be null or a live pointer returned by `behave_surface_new`.
/// - `out_size` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_get_fire_size(
    ptr: *const BehaveSurfaceInstance,
    elapsed_minutes: f64,
    out_size: *mut FireSizeOutputs,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        if !(elapsed_minutes.is_finite() && elapsed_minutes >= 0.0) {
            return Err(DefaultBehaveSurfaceError::invalid_value(
                "elapsed_minutes",
                elapsed_minutes,
                "must be finite and non-negative",
            ));
        }
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let size = with_surface(instance, |surface| {
            FireSizeOutputs::from(surface.result().fire_size(elapsed_minutes))
        })?;
        unsafe { write_out(out_size, "out_size", size) }
    })
}
