//! C ABI over the surface fire core.
//!
//! Every exported function returns a `BehaveSurfaceErrorCode`; details of the
//! last failure on the calling thread are available from
//! `behave_surface_get_last_error`.

mod error;
mod helpers;
mod inputs;
mod instance;
mod queries;
mod run;

pub use error::{
    behave_surface_get_last_error, behave_surface_get_last_error_code, BehaveSurfaceErrorCode,
};
pub use inputs::{
    behave_surface_clear_two_fuel_models, behave_surface_set_canopy, behave_surface_set_fuel_model,
    behave_surface_set_moistures, behave_surface_set_orientation_mode, behave_surface_set_slope,
    behave_surface_set_two_fuel_models, behave_surface_set_wind,
    behave_surface_set_wind_adjustment_factor,
};
pub use instance::{behave_surface_destroy, behave_surface_new, BehaveSurfaceInstance};
pub use queries::{
    behave_surface_get_fire_size, behave_surface_get_outputs,
    behave_surface_get_spread_rate_at_vector, FireSizeOutputs, SurfaceFireOutputs,
};
pub use run::{behave_surface_do_run, behave_surface_do_run_max_spread};

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    const CHAINS_PER_HOUR_PER_FEET_PER_MINUTE: f64 = 60.0 / 66.0;

    fn new_instance() -> *mut BehaveSurfaceInstance {
        let mut instance = ptr::null_mut();
        assert_eq!(unsafe { behave_surface_new(&mut instance) }, BehaveSurfaceErrorCode::Ok);
        assert!(!instance.is_null());
        instance
    }

    fn configure_gs4(instance: *mut BehaveSurfaceInstance) {
        unsafe {
            assert_eq!(behave_surface_set_fuel_model(instance, 124), BehaveSurfaceErrorCode::Ok);
            assert_eq!(
                behave_surface_set_moistures(instance, 6.0, 7.0, 8.0, 60.0, 90.0),
                BehaveSurfaceErrorCode::Ok
            );
            assert_eq!(behave_surface_set_wind(instance, 5.0, 0.0, 1), BehaveSurfaceErrorCode::Ok);
            assert_eq!(
                behave_surface_set_slope(instance, 30.0, 1, 0.0),
                BehaveSurfaceErrorCode::Ok
            );
            assert_eq!(
                behave_surface_set_canopy(instance, 0.5, 30.0, 0.5),
                BehaveSurfaceErrorCode::Ok
            );
        }
    }

    #[test]
    fn test_run_through_c_api() {
        let instance = new_instance();
        configure_gs4(instance);

        let mut outputs = SurfaceFireOutputs::default();
        unsafe {
            assert_eq!(behave_surface_do_run_max_spread(instance), BehaveSurfaceErrorCode::Ok);
            assert_eq!(
                behave_surface_get_outputs(instance, &mut outputs),
                BehaveSurfaceErrorCode::Ok
            );
        }
        let chains_per_hour = outputs.spread_rate * CHAINS_PER_HOUR_PER_FEET_PER_MINUTE;
        assert!((chains_per_hour - 8.876216).abs() < 1e-5);
        assert!((outputs.fireline_intensity - 598.339039).abs() < 1e-5);

        let mut rate = 0.0;
        let mut size = FireSizeOutputs::default();
        unsafe {
            assert_eq!(
                behave_surface_get_spread_rate_at_vector(instance, 180.0, &mut rate),
                BehaveSurfaceErrorCode::Ok
            );
            assert_eq!(
                behave_surface_get_fire_size(instance, 60.0, &mut size),
                BehaveSurfaceErrorCode::Ok
            );
            behave_surface_destroy(instance);
        }
        assert!((rate - outputs.backing_spread_rate).abs() < 1e-9);
        assert!(size.elliptical_b > size.elliptical_a);
        assert!(behave_surface_get_last_error().is_null());
    }

    #[test]
    fn test_errors_are_reported() {
        let instance = new_instance();
        unsafe {
            assert_eq!(
                behave_surface_set_fuel_model(instance, 14),
                BehaveSurfaceErrorCode::InvalidFuelModel
            );
            let message = CStr::from_ptr(behave_surface_get_last_error());
            assert_eq!(message.to_str().unwrap(), "Fuel model 14 is not defined");
            assert_eq!(
                behave_surface_get_last_error_code(),
                BehaveSurfaceErrorCode::InvalidFuelModel
            );

            assert_eq!(
                behave_surface_set_canopy(instance, 1.5, 30.0, 0.5),
                BehaveSurfaceErrorCode::InvalidParameter
            );
            assert_eq!(
                behave_surface_set_wind(instance, 5.0, 0.0, 7),
                BehaveSurfaceErrorCode::InvalidParameter
            );
            assert_eq!(
                behave_surface_do_run(instance, f64::NAN),
                BehaveSurfaceErrorCode::InvalidParameter
            );
            assert_eq!(
                behave_surface_get_outputs(instance, ptr::null_mut()),
                BehaveSurfaceErrorCode::NullPointer
            );
            assert_eq!(
                behave_surface_do_run_max_spread(ptr::null()),
                BehaveSurfaceErrorCode::NullPointer
            );
            assert_eq!(behave_surface_new(ptr::null_mut()), BehaveSurfaceErrorCode::NullPointer);

            assert_eq!(behave_surface_do_run_max_spread(instance), BehaveSurfaceErrorCode::Ok);
            assert_eq!(behave_surface_get_last_error_code(), BehaveSurfaceErrorCode::Ok);
            behave_surface_destroy(instance);
        }
    }

    #[test]
    fn test_two_fuel_models_through_c_api() {
        let instance = new_instance();
        configure_gs4(instance);
        let mut single = SurfaceFireOutputs::default();
        let mut blended = SurfaceFireOutputs::default();
        unsafe {
            assert_eq!(behave_surface_do_run_max_spread(instance), BehaveSurfaceErrorCode::Ok);
            behave_surface_get_outputs(instance, &mut single);

            assert_eq!(
                behave_surface_set_two_fuel_models(instance, 1, 0.5, 1),
                BehaveSurfaceErrorCode::Ok
            );
            assert_eq!(behave_surface_do_run_max_spread(instance), BehaveSurfaceErrorCode::Ok);
            behave_surface_get_outputs(instance, &mut blended);
            assert_eq!(
                behave_surface_set_two_fuel_models(instance, 1, 0.5, 0),
                BehaveSurfaceErrorCode::InvalidParameter
            );
            assert_eq!(behave_surface_clear_two_fuel_models(instance), BehaveSurfaceErrorCode::Ok);
            behave_surface_destroy(instance);
        }
        assert!(blended.spread_rate != single.spread_rate);
        assert!(blended.spread_rate > 0.0);
    }
}
