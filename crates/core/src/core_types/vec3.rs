//! Three-component `f64` vector value type.
//!
//! `V3d` is laid out exactly like `[f64; 3]` (`x`, `y`, `z` in that order, no
//! padding). The layout is asserted at compile time below, which is what makes
//! the borrowed array views and `Index` access sound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::{align_of, offset_of, size_of};
use std::ops::{Index, IndexMut};

use super::error::SliceLengthError;

/// 3D vector for positions, directions and offsets.
///
/// Operations come in two flavours:
/// - pure forms take `self` by value and return a new vector
///   (`v.normalise()`, or `V3d::normalise(v)` read as a static call)
/// - `_in_place` forms mutate the receiver and hand it back for chaining
///
/// A vector is only meaningful while [`V3d::is_valid`] holds. Degenerate
/// inputs (normalising zero, projecting onto zero) produce `NaN` components
/// instead of panicking, and callers are expected to check.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct V3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// Layout guard: the array views below reinterpret `V3d` as `[f64; 3]`.
const _: () = {
    assert!(size_of::<V3d>() == 3 * size_of::<f64>());
    assert!(align_of::<V3d>() == align_of::<[f64; 3]>());
    assert!(offset_of!(V3d, x) == 0);
    assert!(offset_of!(V3d, y) == size_of::<f64>());
    assert!(offset_of!(V3d, z) == 2 * size_of::<f64>());
};

impl V3d {
    /// `(0, 0, 0)`
    pub const ZERO: V3d = V3d::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`
    pub const UNIT: V3d = V3d::new(1.0, 1.0, 1.0);

    /// Unit vector along the x axis
    pub const X: V3d = V3d::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis
    pub const Y: V3d = V3d::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis
    pub const Z: V3d = V3d::new(0.0, 0.0, 1.0);

    /// Create a vector from its three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        V3d { x, y, z }
    }

    /// Overwrite all three components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Build a vector from a raw `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub const fn from_array(array: [f64; 3]) -> Self {
        V3d::new(array[0], array[1], array[2])
    }

    /// Copy the components out as `[x, y, z]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Borrow the vector as a contiguous `[f64; 3]`.
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        // SAFETY: `V3d` is `repr(C)` with three `f64` fields and no padding
        // (see the layout guard), so it has the same layout as `[f64; 3]`.
        unsafe { &*std::ptr::from_ref(self).cast::<[f64; 3]>() }
    }

    /// Mutably borrow the vector as a contiguous `[f64; 3]`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f64; 3] {
        // SAFETY: same layout argument as `as_array`; the exclusive borrow of
        // `self` is carried over to the returned reference.
        unsafe { &mut *std::ptr::from_mut(self).cast::<[f64; 3]>() }
    }
}

impl Index<usize> for V3d {
    type Output = f64;

    /// Component `0 => x`, `1 => y`, `2 => z`. Panics on any other index.
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for V3d {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.as_mut_array()[index]
    }
}

impl From<[f64; 3]> for V3d {
    fn from(array: [f64; 3]) -> Self {
        V3d::from_array(array)
    }
}

impl From<V3d> for [f64; 3] {
    fn from(v: V3d) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for V3d {
    type Error = SliceLengthError;

    /// Checked conversion from a slice that must hold exactly three values.
    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 3] = slice
            .try_into()
            .map_err(|_| SliceLengthError::new(slice.len()))?;
        Ok(V3d::from_array(array))
    }
}

impl AsRef<[f64; 3]> for V3d {
    fn as_ref(&self) -> &[f64; 3] {
        self.as_array()
    }
}

impl AsMut<[f64; 3]> for V3d {
    fn as_mut(&mut self) -> &mut [f64; 3] {
        self.as_mut_array()
    }
}

impl fmt::Display for V3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants() {
        assert_eq!(V3d::ZERO.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(V3d::UNIT.to_array(), [1.0, 1.0, 1.0]);
        assert_eq!(V3d::X.to_array(), [1.0, 0.0, 0.0]);
        assert_eq!(V3d::Y.to_array(), [0.0, 1.0, 0.0]);
        assert_eq!(V3d::Z.to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(V3d::default(), V3d::ZERO);
    }

    #[test]
    fn const_construction() {
        const V: V3d = V3d::new(1.0, 2.0, 3.0);
        const A: [f64; 3] = V.to_array();
        assert_eq!(A, [1.0, 2.0, 3.0]);
        assert_eq!(V3d::from_array(A), V);
    }

    #[test]
    fn set_overwrites_components() {
        let mut v = V3d::ZERO;
        v.set(4.0, -5.0, 6.5);
        assert_eq!(v, V3d::new(4.0, -5.0, 6.5));
    }

    #[test]
    fn exact_equality_has_no_tolerance() {
        let a = V3d::new(1.0, 2.0, 3.0);
        assert_eq!(a, V3d::new(1.0, 2.0, 3.0));
        assert_ne!(a, V3d::new(1.0, 2.0, 3.0 + 1e-12));
        assert_ne!(a, V3d::new(1.0, 2.0 + 1e-12, 3.0));
    }

    #[test]
    fn index_follows_xyz_layout() {
        let mut v = V3d::new(7.0, 8.0, 9.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[1], 8.0);
        assert_eq!(v[2], 9.0);

        v[1] = -1.0;
        assert_eq!(v.y, -1.0);

        v.as_mut_array()[2] = 42.0;
        assert_eq!(v.z, 42.0);
        assert_eq!(v.as_array(), &[7.0, -1.0, 42.0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_panics() {
        let v = V3d::UNIT;
        let _ = v[3];
    }

    #[test]
    fn slice_conversion_is_checked() {
        let data: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

        let v = V3d::try_from(&data[..3]).unwrap();
        assert_eq!(v, V3d::new(1.0, 2.0, 3.0));

        let err = V3d::try_from(&data[..]).unwrap_err();
        assert_eq!(err.len(), 4);
        assert!(V3d::try_from(&data[..2]).is_err());
        let empty: &[f64] = &[];
        assert!(V3d::try_from(empty).is_err());
    }

    #[test]
    fn array_conversions() {
        let v: V3d = [0.5, -0.5, 2.0].into();
        let back: [f64; 3] = v.into();
        assert_eq!(back, [0.5, -0.5, 2.0]);
        assert_eq!(v.as_ref(), &back);
    }

    #[test]
    fn display_format() {
        assert_eq!(V3d::new(1.0, 2.5, -3.0).to_string(), "Vector3(1, 2.5, -3)");
        assert_eq!(V3d::ZERO.to_string(), "Vector3(0, 0, 0)");
        assert_eq!(
            V3d::new(f64::NAN, f64::INFINITY, 0.1).to_string(),
            "Vector3(NaN, inf, 0.1)"
        );
    }
}
