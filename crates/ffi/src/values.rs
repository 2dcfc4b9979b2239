//! By-value vector functions.
//!
//! Nothing here takes a pointer, so nothing here can fail or touch the
//! last-error state. Degenerate inputs come back as vectors with `NaN`
//! components; check them with `v3d_is_valid`.

use v3d_core::V3d;

/// Named vectors available through `v3d_constant`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V3dConstant {
    /// `(0, 0, 0)`
    Zero = 0,
    /// `(1, 1, 1)`
    Unit = 1,
    /// `(1, 0, 0)`
    X = 2,
    /// `(0, 1, 0)`
    Y = 3,
    /// `(0, 0, 1)`
    Z = 4,
}

impl From<V3dConstant> for V3d {
    fn from(constant: V3dConstant) -> Self {
        match constant {
            V3dConstant::Zero => V3d::ZERO,
            V3dConstant::Unit => V3d::UNIT,
            V3dConstant::X => V3d::X,
            V3dConstant::Y => V3d::Y,
            V3dConstant::Z => V3d::Z,
        }
    }
}

/// Create a vector from its components.
#[no_mangle]
pub extern "C" fn v3d_new(x: f64, y: f64, z: f64) -> V3d {
    V3d::new(x, y, z)
}

/// Return one of the named vectors.
#[no_mangle]
pub extern "C" fn v3d_constant(constant: V3dConstant) -> V3d {
    constant.into()
}

/// `a + b`
#[no_mangle]
pub extern "C" fn v3d_add(a: V3d, b: V3d) -> V3d {
    a + b
}

/// `a - b`
#[no_mangle]
pub extern "C" fn v3d_sub(a: V3d, b: V3d) -> V3d {
    a - b
}

/// `-v`
#[no_mangle]
pub extern "C" fn v3d_neg(v: V3d) -> V3d {
    -v
}

/// `v * s`
#[no_mangle]
pub extern "C" fn v3d_scale(v: V3d, s: f64) -> V3d {
    v * s
}

/// `v / s`. Division by zero follows IEEE-754.
#[no_mangle]
pub extern "C" fn v3d_div(v: V3d, s: f64) -> V3d {
    v / s
}

/// Componentwise product.
#[no_mangle]
pub extern "C" fn v3d_mul_elems(a: V3d, b: V3d) -> V3d {
    a.mul_elems(b)
}

#[no_mangle]
pub extern "C" fn v3d_dot(a: V3d, b: V3d) -> f64 {
    a.dot(b)
}

/// Right-handed cross product `a × b`.
#[no_mangle]
pub extern "C" fn v3d_cross(a: V3d, b: V3d) -> V3d {
    a.cross(b)
}

#[no_mangle]
pub extern "C" fn v3d_length(v: V3d) -> f64 {
    v.length()
}

#[no_mangle]
pub extern "C" fn v3d_length_squared(v: V3d) -> f64 {
    v.length_squared()
}

#[no_mangle]
pub extern "C" fn v3d_distance(a: V3d, b: V3d) -> f64 {
    a.distance(b)
}

/// Angle between `a` and `b` in degrees. `NaN` if either has zero length.
#[no_mangle]
pub extern "C" fn v3d_angle(a: V3d, b: V3d) -> f64 {
    a.angle(b)
}

/// Unit vector in the direction of `v` (`NaN` components for zero).
#[no_mangle]
pub extern "C" fn v3d_normalise(v: V3d) -> V3d {
    v.normalise()
}

/// Normalise unless `v` is already within 0.001 of unit squared length.
#[no_mangle]
pub extern "C" fn v3d_try_normalise(v: V3d) -> V3d {
    v.try_normalise()
}

/// Component of `v` parallel to `onto`.
#[no_mangle]
pub extern "C" fn v3d_project(v: V3d, onto: V3d) -> V3d {
    v.project(onto)
}

/// Component of `v` perpendicular to `onto`.
#[no_mangle]
pub extern "C" fn v3d_reject(v: V3d, onto: V3d) -> V3d {
    v.reject(onto)
}

/// Reflect `v` across the line along `axis`.
#[no_mangle]
pub extern "C" fn v3d_mirror(v: V3d, axis: V3d) -> V3d {
    v.mirror(axis)
}

/// Rotate `v` by `angle` degrees about `axis`.
#[no_mangle]
pub extern "C" fn v3d_rotate(v: V3d, angle: f64, axis: V3d) -> V3d {
    v.rotate(angle, axis)
}

/// `true` when no component is `NaN`.
#[no_mangle]
pub extern "C" fn v3d_is_valid(v: V3d) -> bool {
    v.is_valid()
}

/// `true` when every axis of `a` and `b` is equal or differs by less than
/// `delta`, so identical vectors compare equal even with `delta = 0`.
#[no_mangle]
pub extern "C" fn v3d_equals(a: V3d, b: V3d, delta: f64) -> bool {
    a.equals(b, delta)
}
