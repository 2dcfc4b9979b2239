use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - the error code passed back across the FFI boundary
/// - `msg()` - the human-readable message stored for `v3d_get_last_error`
///
/// # Example
/// ```ignore
/// let err = DefaultV3dError::null_pointer("out");
/// assert_eq!(err.code(), V3dErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out' cannot be null");
/// ```
pub(crate) trait V3dError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> V3dErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `V3dError` for the failure modes of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultV3dError {
    code: V3dErrorCode,
    msg: String,
}

impl DefaultV3dError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"v"`, `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: V3dErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a parameter that is present but unusable.
    ///
    /// # Arguments
    /// * `param_name` - The name of the invalid parameter
    /// * `message` - A description of the validation error
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self {
            code: V3dErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}': {message}"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `needed` - Bytes required, including the NUL terminator
    /// * `available` - Bytes the caller provided
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self {
            code: V3dErrorCode::BufferTooSmall,
            msg: format!("Output buffer too small: need {needed} bytes, got {available}"),
        }
    }
}

impl V3dError for DefaultV3dError {
    fn code(&self) -> V3dErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions that take pointers.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V3dErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function (e.g. an array that isn't 3 long).
    InvalidParameter = 2,

    /// Output buffer too small for the requested data.
    BufferTooSmall = 3,
}

impl From<DefaultV3dError> for V3dErrorCode {
    fn from(error: DefaultV3dError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is kept here so the pointer handed out by
    /// `v3d_get_last_error` stays valid until the next failing or clearing call.
    static LAST_ERROR: RefCell<(Option<CString>, V3dErrorCode)> = const { RefCell::new((None, V3dErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, V3dErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, V3dErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last pointer-taking call on this thread succeeded.
///
/// # Thread Safety
/// Error state is per-thread, so this is safe to call from any thread.
///
/// # Lifetime
/// The returned pointer is valid until the next pointer-taking `v3d_*` call
/// on this thread, or until the thread terminates.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// if (v3d_normalise_in_place(NULL) != V3dErrorCode_Ok) {
///     printf("normalise failed: %s\n", v3d_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn v3d_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`V3dErrorCode::Ok` if none).
#[no_mangle]
pub extern "C" fn v3d_get_last_error_code() -> V3dErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{clear_last_error, track_error};
    use std::ffi::CStr;

    #[test]
    fn constructors_set_code_and_message() {
        let err = DefaultV3dError::null_pointer("out");
        assert_eq!(err.code(), V3dErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'out' cannot be null");

        let err = DefaultV3dError::invalid_parameter("len", "expected 3");
        assert_eq!(V3dErrorCode::from(err), V3dErrorCode::InvalidParameter);

        let err = DefaultV3dError::buffer_too_small(20, 4);
        assert_eq!(err.msg(), "Output buffer too small: need 20 bytes, got 4");
    }

    #[test]
    fn last_error_roundtrip() {
        clear_last_error();
        assert!(v3d_get_last_error().is_null());
        assert_eq!(v3d_get_last_error_code(), V3dErrorCode::Ok);

        let code = track_error(&DefaultV3dError::null_pointer("v"));
        assert_eq!(code, V3dErrorCode::NullPointer);
        assert_eq!(v3d_get_last_error_code(), V3dErrorCode::NullPointer);

        // SAFETY: the pointer was just produced from a live CString in LAST_ERROR
        let msg = unsafe { CStr::from_ptr(v3d_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'v' cannot be null");

        clear_last_error();
        assert!(v3d_get_last_error().is_null());
    }
}
