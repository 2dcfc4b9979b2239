//! Conversions to and from the numeric ecosystem.
//!
//! - `nalgebra::Vector3<f64>` in both directions
//! - `approx` comparison traits, so `assert_relative_eq!` and friends work on
//!   whole vectors
//! - with the `bytemuck` feature: zero-copy views of `&[V3d]` as `&[f64]`

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::Vector3;

use crate::core_types::V3d;

impl From<Vector3<f64>> for V3d {
    fn from(v: Vector3<f64>) -> Self {
        V3d::new(v.x, v.y, v.z)
    }
}

impl From<V3d> for Vector3<f64> {
    fn from(v: V3d) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for V3d {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for V3d {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for V3d {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

/// Flatten a slice of vectors into `[x0, y0, z0, x1, ...]` without copying.
#[cfg(feature = "bytemuck")]
pub fn flatten(vectors: &[V3d]) -> &[f64] {
    bytemuck::cast_slice(vectors)
}

/// View packed `[x0, y0, z0, x1, ...]` data as vectors without copying.
///
/// # Errors
/// Fails when `data.len()` is not a multiple of 3 or the slice is not
/// aligned for `f64`.
#[cfg(feature = "bytemuck")]
pub fn unflatten(data: &[f64]) -> Result<&[V3d], bytemuck::PodCastError> {
    bytemuck::try_cast_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, assert_ulps_eq};

    #[test]
    fn nalgebra_roundtrip_keeps_components() {
        let v = V3d::new(1.0, -2.0, 3.5);
        let na: Vector3<f64> = v.into();
        assert_eq!((na.x, na.y, na.z), (1.0, -2.0, 3.5));
        assert_eq!(V3d::from(na), v);
    }

    #[test]
    fn approx_traits_compare_every_axis() {
        let a = V3d::new(1.0, 2.0, 3.0);
        assert_relative_eq!(a, V3d::new(1.0, 2.0, 3.0 + 1e-14), max_relative = 1e-12);
        assert_ulps_eq!(a, a);
        assert!(!a.abs_diff_eq(&V3d::new(1.0, 2.1, 3.0), 0.01));
        assert!(!a.abs_diff_eq(&V3d::new(1.0, 2.0, 3.1), 0.01));
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn flatten_and_unflatten_share_memory_layout() {
        let vectors = [V3d::new(1.0, 2.0, 3.0), V3d::new(4.0, 5.0, 6.0)];
        let flat = flatten(&vectors);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(unflatten(flat).unwrap(), &vectors);
        assert!(unflatten(&flat[..4]).is_err());
    }
}
