//! C ABI for the `v3d-core` vector type.
//!
//! `V3d` crosses the boundary by value: it is `#[repr(C)]` with three
//! contiguous doubles, so on the C side it is simply
//! `struct V3d { double x, y, z; }` and can be cast to `double[3]`.
//!
//! - By-value functions (`v3d_add`, `v3d_rotate`, ...) never fail; degenerate
//!   results carry `NaN` and can be checked with `v3d_is_valid`.
//! - Pointer functions (`v3d_*_in_place`, `v3d_from_array`, `v3d_to_array`,
//!   `v3d_format`) return a `V3dErrorCode` and record a per-thread message
//!   for `v3d_get_last_error`.
//!
//! The header `V3dFFI.h` is generated at the workspace root by `build.rs`.

mod conversion;
mod error;
mod helpers;
mod in_place;
mod values;

pub use conversion::{v3d_format, v3d_from_array, v3d_to_array};
pub use error::{v3d_get_last_error, v3d_get_last_error_code, V3dErrorCode};
pub use in_place::{
    v3d_cross_in_place, v3d_mirror_in_place, v3d_mul_elems_in_place, v3d_normalise_in_place,
    v3d_project_in_place, v3d_reject_in_place, v3d_rotate_in_place, v3d_try_normalise_in_place,
};
pub use v3d_core::V3d;
pub use values::{
    v3d_add, v3d_angle, v3d_constant, v3d_cross, v3d_distance, v3d_div, v3d_dot, v3d_equals,
    v3d_is_valid, v3d_length, v3d_length_squared, v3d_mirror, v3d_mul_elems, v3d_neg, v3d_new,
    v3d_normalise, v3d_project, v3d_reject, v3d_rotate, v3d_scale, v3d_sub, v3d_try_normalise,
    V3dConstant,
};
