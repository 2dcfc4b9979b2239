//! Raw array and text conversions for C callers.

use std::os::raw::c_char;
use std::ptr;
use std::slice;

use v3d_core::V3d;

use crate::error::{DefaultV3dError, V3dErrorCode};
use crate::helpers::{clear_last_error, track_error};

/// Build a vector from a `double` array that must hold exactly 3 values.
///
/// # Parameters
/// - `data`: pointer to `len` contiguous doubles
/// - `len`: number of doubles at `data`; anything but 3 is rejected
/// - `out`: receives the vector on success, untouched on failure
///
/// # Returns
/// - `V3dErrorCode::Ok` on success
/// - `V3dErrorCode::NullPointer` if `data` or `out` is null
/// - `V3dErrorCode::InvalidParameter` if `len != 3`
///
/// # Safety
/// - `data` must point to at least `len` readable doubles.
/// - `out` must point to writable memory for one `V3d`.
#[no_mangle]
pub unsafe extern "C" fn v3d_from_array(
    data: *const f64,
    len: usize,
    out: *mut V3d,
) -> V3dErrorCode {
    if data.is_null() {
        return track_error(&DefaultV3dError::null_pointer("data"));
    }
    if out.is_null() {
        return track_error(&DefaultV3dError::null_pointer("out"));
    }

    // SAFETY: non-null, and the caller guarantees `len` readable doubles.
    let values = unsafe { slice::from_raw_parts(data, len) };

    match V3d::try_from(values) {
        Ok(v) => {
            unsafe {
                *out = v;
            }
            clear_last_error();
            V3dErrorCode::Ok
        }
        Err(e) => track_error(&DefaultV3dError::invalid_parameter("len", &e.to_string())),
    }
}

/// Copy a vector into a caller-provided `double[3]` as `{x, y, z}`.
///
/// # Safety
/// `out` must point to writable memory for 3 doubles.
#[no_mangle]
pub unsafe extern "C" fn v3d_to_array(v: V3d, out: *mut f64) -> V3dErrorCode {
    if out.is_null() {
        return track_error(&DefaultV3dError::null_pointer("out"));
    }

    unsafe {
        ptr::copy_nonoverlapping(v.as_array().as_ptr(), out, 3);
    }
    clear_last_error();
    V3dErrorCode::Ok
}

/// Write `Vector3(x, y, z)` into `buf` as a NUL-terminated string.
///
/// # Parameters
/// - `v`: vector to format
/// - `buf`: destination buffer
/// - `buf_len`: size of `buf` in bytes, including room for the NUL
/// - `out_len`: optional (may be null); receives the text length excluding
///   the NUL, also when the buffer turns out to be too small
///
/// # Returns
/// - `V3dErrorCode::Ok` on success
/// - `V3dErrorCode::NullPointer` if `buf` is null
/// - `V3dErrorCode::BufferTooSmall` if the text plus NUL does not fit; `buf`
///   is left untouched
///
/// # Safety
/// - `buf` must point to `buf_len` writable bytes.
/// - `out_len` must be null or point to a writable `usize`.
///
/// Example (C)
/// ```c
/// char text[64];
/// size_t len = 0;
/// if (v3d_format(v3d_new(1.0, 2.0, 3.0), text, sizeof text, &len) == V3dErrorCode_Ok) {
///     puts(text); // Vector3(1, 2, 3)
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn v3d_format(
    v: V3d,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> V3dErrorCode {
    if buf.is_null() {
        return track_error(&DefaultV3dError::null_pointer("buf"));
    }

    let text = v.to_string();
    if !out_len.is_null() {
        unsafe {
            *out_len = text.len();
        }
    }

    let needed = text.len() + 1;
    if needed > buf_len {
        return track_error(&DefaultV3dError::buffer_too_small(needed, buf_len));
    }

    // SAFETY: `buf` holds at least `needed` bytes (checked above).
    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buf, text.len());
        *buf.add(text.len()) = 0;
    }
    clear_last_error();
    V3dErrorCode::Ok
}
