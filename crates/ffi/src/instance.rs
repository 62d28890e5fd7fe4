use behave_surface_core::{FuelModels, Surface};
use std::sync::{Arc, RwLock};

use crate::error::{BehaveSurfaceErrorCode, DefaultBehaveSurfaceError};
use crate::helpers::{clear_last_error, track_error};

/// One surface fire calculator: a fuel model catalog, the current inputs and
/// the latest result.
///
/// # Thread Safety
/// The surface is protected by an `RwLock`:
/// - **Multiple concurrent readers** (result getters): `.read()` lock
/// - **Exclusive writer** (input setters, runs, custom fuel models): `.write()` lock
///
/// ```cpp
/// BehaveSurfaceInstance* surface = nullptr;
/// if (behave_surface_new(&surface) != BehaveSurfaceErrorCode::Ok) {
///     return;
/// }
/// behave_surface_set_fuel_model(surface, 124);
/// behave_surface_set_moistures(surface, 6.0, 7.0, 8.0, 60.0, 90.0);
/// behave_surface_set_wind(surface, 5.0, 0.0, 1);
/// behave_surface_do_run_max_spread(surface);
/// SurfaceFireOutputs outputs;
/// behave_surface_get_outputs(surface, &outputs);
/// behave_surface_destroy(surface);
/// ```
pub struct BehaveSurfaceInstance {
    pub(crate) surface: RwLock<Surface>,
}

impl BehaveSurfaceInstance {
    pub(crate) fn new() -> Self {
        Self {
            surface: RwLock::new(Surface::new(Arc::new(FuelModels::new()))),
        }
    }
}

/// Create a surface instance with the standard fuel model catalog.
///
/// Returns
/// - `BehaveSurfaceErrorCode::Ok` (0) with a valid instance in `out_instance`
/// - `BehaveSurfaceErrorCode::NullPointer` when `out_instance` is null
///
/// # Safety
/// - `out_instance` must be null or a valid pointer to writable memory.
/// - The caller owns the returned instance and MUST call `behave_surface_destroy`
///   exactly once.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_new(
    out_instance: *mut *mut BehaveSurfaceInstance,
) -> BehaveSurfaceErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultBehaveSurfaceError::null_pointer("out_instance"));
    }

    unsafe {
        *out_instance = Box::into_raw(Box::new(BehaveSurfaceInstance::new()));
    }
    clear_last_error();
    BehaveSurfaceErrorCode::Ok
}

/// Destroy an instance created by `behave_surface_new`. Null is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `behave_surface_new`.
/// - The pointer MUST NOT be used again after this call.
#[no_mangle]
pub unsafe extern "C" fn behave_surface_destroy(ptr: *mut BehaveSurfaceInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: created by `Box::into_raw` in `behave_surface_new` and not freed yet.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

