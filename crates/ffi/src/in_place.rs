//! Pointer-based functions that mutate a caller-owned vector.
//!
//! Each returns `V3dErrorCode::Ok` and clears the last error on success, or
//! `V3dErrorCode::NullPointer` (with a message for `v3d_get_last_error`) when
//! the receiver is null.
//!
//! # Safety
//! For every function here, `v` must be null or point to a valid, writable
//! `V3d` that no other thread touches during the call.

use v3d_core::V3d;

use crate::error::V3dErrorCode;
use crate::helpers::with_vector_mut;

/// Normalise `*v` in place.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_normalise_in_place(v: *mut V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.normalise_in_place();
        })
    }
}

/// Normalise `*v` in place unless it is already close to unit length.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_try_normalise_in_place(v: *mut V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.try_normalise_in_place();
        })
    }
}

/// Replace `*v` with `*v × other`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_cross_in_place(v: *mut V3d, other: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.cross_in_place(other);
        })
    }
}

/// Replace `*v` with its projection onto `onto`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_project_in_place(v: *mut V3d, onto: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.project_in_place(onto);
        })
    }
}

/// Replace `*v` with its rejection from `onto`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_reject_in_place(v: *mut V3d, onto: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.reject_in_place(onto);
        })
    }
}

/// Reflect `*v` across the line along `axis`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_mirror_in_place(v: *mut V3d, axis: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.mirror_in_place(axis);
        })
    }
}

/// Rotate `*v` by `angle` degrees about `axis`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_rotate_in_place(v: *mut V3d, angle: f64, axis: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.rotate_in_place(angle, axis);
        })
    }
}

/// Multiply `*v` componentwise by `other`.
///
/// # Safety
/// See the module docs.
#[no_mangle]
pub unsafe extern "C" fn v3d_mul_elems_in_place(v: *mut V3d, other: V3d) -> V3dErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            v.mul_elems_in_place(other);
        })
    }
}
