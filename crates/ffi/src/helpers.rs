use crate::error::{with_last_error_mut, DefaultV3dError, V3dError, V3dErrorCode};
use std::ffi::CString;
use v3d_core::V3d;

/// Set the thread-local error message and code.
/// Accepts any type implementing `V3dError` trait.
pub(crate) fn set_last_error(error: &impl V3dError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl V3dError) -> V3dErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called by every pointer-taking function on success.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = V3dErrorCode::Ok;
    });
}

/// Run `func` on the vector behind `ptr`, or record a null-pointer error.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `V3d` that is not
/// aliased for the duration of the call.
pub(crate) unsafe fn with_vector_mut<F>(ptr: *mut V3d, param_name: &str, func: F) -> V3dErrorCode
where
    F: FnOnce(&mut V3d),
{
    // SAFETY: upheld by the caller; `as_mut` handles the null case.
    match unsafe { ptr.as_mut() } {
        Some(v) => {
            func(v);
            clear_last_error();
            V3dErrorCode::Ok
        }
        None => track_error(&DefaultV3dError::null_pointer(param_name)),
    }
}
