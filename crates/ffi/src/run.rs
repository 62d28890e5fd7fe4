use behave_surface_core::core_types::Degrees;

use crate::error::{BehaveSurfaceErrorCode, DefaultBehaveSurfaceError};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_surface_mut};
use crate::instance::BehaveSurfaceInstance;

/// Run the surface model and report the spread rate toward `direction_of_interest`
/// (degrees, in the instance's orientation frame).
///
/// Thread-safe: acquires the `RwLock` write lock for the run. On error the
/// previous outputs are kept.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_do_run(
    ptr: *const BehaveSurfaceInstance,
    direction_of_interest: f64,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_surface_mut(instance, |surface| {
            surface
                .do_surface_run_in_direction_of_interest(Degrees::new(direction_of_interest))
                .map(|_| ())
                .map_err(DefaultBehaveSurfaceError::from)
        })?
    })
}

/// Run the surface model and report the head fire spread rate.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_do_run_max_spread(
    ptr: *const BehaveSurfaceInstance,
) -> BehaveSurfaceErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        with_surface_mut(instance, |surface| {
            surface
                .do_surface_run_in_direction_of_max_spread()
                .map(|_| ())
                .map_err(DefaultBehaveSurfaceError::from)
        })?
    })
}
