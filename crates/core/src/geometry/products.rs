//! Dot, cross and elementwise products, plus the angle between two vectors.

use crate::core_types::V3d;

/// 2x2 determinant of the row-major matrix `[[a11, a12], [a21, a22]]`.
#[inline]
fn det(a11: f64, a12: f64, a21: f64, a22: f64) -> f64 {
    a11 * a22 - a12 * a21
}

impl V3d {
    /// Scalar (inner) product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: V3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`, expanded by cofactors.
    #[inline]
    #[must_use]
    pub fn cross(self, other: V3d) -> V3d {
        V3d::new(
            det(self.y, self.z, other.y, other.z),
            -det(self.x, self.z, other.x, other.z),
            det(self.x, self.y, other.x, other.y),
        )
    }

    /// In-place form of [`V3d::cross`]: replaces `self` with `self × other`.
    #[inline]
    pub fn cross_in_place(&mut self, other: V3d) -> &mut Self {
        *self = self.cross(other);
        self
    }

    /// Angle between two vectors in degrees, in `[0, 180]`.
    ///
    /// `NaN` if either vector has zero length.
    #[must_use]
    pub fn angle(self, other: V3d) -> f64 {
        (self.dot(other) / (self.length() * other.length()))
            .acos()
            .to_degrees()
    }

    /// Componentwise (Hadamard) product.
    ///
    /// Kept as a named method rather than `*` so it can't be mistaken for a
    /// dot or cross product.
    #[inline]
    #[must_use]
    pub fn mul_elems(self, other: V3d) -> V3d {
        V3d::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// In-place form of [`V3d::mul_elems`].
    #[inline]
    pub fn mul_elems_in_place(&mut self, other: V3d) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self
    }
}
