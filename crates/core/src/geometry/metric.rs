//! Length, distance, normalisation and validity checks.

use tracing::trace;

use crate::core_types::V3d;

impl V3d {
    /// `try_normalise` leaves a vector alone when its squared length is
    /// within this distance of 1.
    pub const NORMALISE_TOLERANCE: f64 = 0.001;

    /// `x² + y² + z²`. Prefer this over [`V3d::length`] for comparisons.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    #[must_use]
    pub fn distance(self, other: V3d) -> f64 {
        (self - other).length()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction; normalising it yields `NaN`
    /// components. Check [`V3d::is_valid`] when the input may be degenerate.
    #[inline]
    #[must_use]
    pub fn normalise(self) -> V3d {
        self / self.length()
    }

    /// In-place form of [`V3d::normalise`].
    #[inline]
    pub fn normalise_in_place(&mut self) -> &mut Self {
        *self /= self.length();
        self
    }

    /// Normalise unless the vector is already within
    /// [`NORMALISE_TOLERANCE`](Self::NORMALISE_TOLERANCE) of unit length.
    #[must_use]
    pub fn try_normalise(self) -> V3d {
        let mut v = self;
        v.try_normalise_in_place();
        v
    }

    /// In-place form of [`V3d::try_normalise`].
    pub fn try_normalise_in_place(&mut self) -> &mut Self {
        if (self.length_squared() - 1.0).abs() > Self::NORMALISE_TOLERANCE {
            self.normalise_in_place()
        } else {
            trace!(vector = %self, "already unit length, skipping normalisation");
            self
        }
    }

    /// True when no component is `NaN`.
    #[inline]
    pub fn is_valid(self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Fuzzy comparison: every axis must be equal or differ by less than
    /// `delta`. Axes are compared independently.
    pub fn equals(self, other: V3d, delta: f64) -> bool {
        let close = |a: f64, b: f64| a == b || (a - b).abs() < delta;
        close(self.x, other.x) && close(self.y, other.y) && close(self.z, other.z)
    }
}
