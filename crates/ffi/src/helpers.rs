use crate::error::{
    with_last_error_mut, BehaveSurfaceError, BehaveSurfaceErrorCode, DefaultBehaveSurfaceError,
};
use crate::instance::BehaveSurfaceInstance;
use behave_surface_core::Surface;
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl BehaveSurfaceError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl BehaveSurfaceError) -> BehaveSurfaceErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = BehaveSurfaceErrorCode::Ok;
    });
}

/// Record the error of a failed result; success clears the previous error.
pub(crate) fn track_result<T>(
    result: Result<T, DefaultBehaveSurfaceError>,
) -> Result<T, BehaveSurfaceErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Run an FFI body and collapse its result into an error code.
pub(crate) fn handle_ffi_result_error<F>(body: F) -> BehaveSurfaceErrorCode
where
    F: FnOnce() -> Result<(), DefaultBehaveSurfaceError>,
{
    match track_result(body()) {
        Ok(()) => BehaveSurfaceErrorCode::Ok,
        Err(code) => code,
    }
}

/// Borrow an instance from a raw pointer.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `behave_surface_new`.
pub(crate) unsafe fn instance_from_ptr<'a>(
    ptr: *const BehaveSurfaceInstance,
) -> Result<&'a BehaveSurfaceInstance, DefaultBehaveSurfaceError> {
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultBehaveSurfaceError::null_pointer("ptr"))
}

/// Write a value through an out-parameter.
///
/// # Safety
/// `out` must be null or valid for writes.
pub(crate) unsafe fn write_out<T>(
    out: *mut T,
    name: &str,
    value: T,
) -> Result<(), DefaultBehaveSurfaceError> {
    match unsafe { out.as_mut() } {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(DefaultBehaveSurfaceError::null_pointer(name)),
    }
}

/// Shared read access to the instance's surface.
pub(crate) fn with_surface<F, T>(
    instance: &BehaveSurfaceInstance,
    func: F,
) -> Result<T, DefaultBehaveSurfaceError>
where
    F: FnOnce(&Surface) -> T,
{
    let surface = instance
        .surface
        .read()
        .map_err(|_| DefaultBehaveSurfaceError::lock_poisoned("RwLock"))?;
    Ok(func(&surface))
}

/// Exclusive write access to the instance's surface.
pub(crate) fn with_surface_mut<F, T>(
    instance: &BehaveSurfaceInstance,
    func: F,
) -> Result<T, DefaultBehaveSurfaceError>
where
    F: FnOnce(&mut Surface) -> T,
{
    let mut surface = instance
        .surface
        .write()
        .map_err(|_| DefaultBehaveSurfaceError::lock_poisoned("RwLock"))?;
    Ok(func(&mut surface))
}
