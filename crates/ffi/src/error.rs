use behave_surface_core::{FuelModelError, SurfaceError};
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Error code passed across the FFI boundary
/// - `msg()` - Message kept for `behave_surface_get_last_error`
///
/// # Example
/// ```rust,ignore
/// let err = DefaultBehaveSurfaceError::null_pointer("ptr");
/// assert_eq!(err.code(), BehaveSurfaceErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'ptr' cannot be null");
/// ```
pub(crate) trait BehaveSurfaceError {
    fn code(&self) -> BehaveSurfaceErrorCode;

    fn msg(&self) -> &str;
}

/// Error code plus message, with constructors for each failure the C API reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultBehaveSurfaceError {
    code: BehaveSurfaceErrorCode,
    msg: String,
}

impl DefaultBehaveSurfaceError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: BehaveSurfaceErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    ///
    /// # Arguments
    /// * `lock_name` - The name of the lock that was poisoned (e.g., `"RwLock"`)
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: BehaveSurfaceErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for a fuel model number with no catalog entry.
    pub fn undefined_fuel_model(fuel_model_number: i32) -> Self {
        Self {
            code: BehaveSurfaceErrorCode::InvalidFuelModel,
            msg: format!("Fuel model {fuel_model_number} is not defined"),
        }
    }

    /// Create error for an out-of-range numeric argument.
    ///
    /// # Arguments
    /// * `param_name` - The name of the invalid parameter (e.g., `"canopy_cover"`)
    /// * `value` - The invalid value
    /// * `constraint` - Description of the constraint (e.g., `"must be in [0, 1]"`)
    pub fn invalid_value(param_name: &str, value: f64, constraint: &str) -> Self {
        Self::invalid_parameter(format!("Parameter '{param_name}' {constraint}, got {value}"))
    }

    /// Create error for an unknown enum code.
    pub fn invalid_code(param_name: &str, value: u8, max: u8) -> Self {
        Self::invalid_parameter(format!(
            "Parameter '{param_name}' must be 0-{max}, got {value}"
        ))
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: BehaveSurfaceErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl BehaveSurfaceError for DefaultBehaveSurfaceError {
    fn code(&self) -> BehaveSurfaceErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<SurfaceError> for DefaultBehaveSurfaceError {
    fn from(error: SurfaceError) -> Self {
        Self::invalid_parameter(error.to_string())
    }
}

impl From<FuelModelError> for DefaultBehaveSurfaceError {
    fn from(error: FuelModelError) -> Self {
        Self {
            code: BehaveSurfaceErrorCode::InvalidFuelModel,
            msg: error.to_string(),
        }
    }
}

/// FFI error codes returned by surface fire functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaveSurfaceErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Fuel model number is undefined, reserved or out of range for the operation.
    InvalidFuelModel = 3,

    /// Invalid parameter passed to function.
    InvalidParameter = 4,
}

impl From<DefaultBehaveSurfaceError> for BehaveSurfaceErrorCode {
    fn from(error: DefaultBehaveSurfaceError) -> Self {
        error.code
    }
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` is kept here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, BehaveSurfaceErrorCode)> =
        const { RefCell::new((None, BehaveSurfaceErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, BehaveSurfaceErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, BehaveSurfaceErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that
/// sets or clears the error. **DO NOT FREE THIS POINTER**.
///
/// Example:
/// ```cpp
/// BehaveSurfaceErrorCode err = behave_surface_set_fuel_model(surface, 14);
/// if (err != BehaveSurfaceErrorCode::Ok) {
///     printf("%s\n", behave_surface_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn behave_surface_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code on this thread.
#[no_mangle]
pub extern "C" fn behave_surface_get_last_error_code() -> BehaveSurfaceErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
