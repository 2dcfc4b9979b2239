//! Projection, rejection, mirroring and axis-angle rotation.
//!
//! # Rotation
//!
//! `rotate` splits the vector into the part parallel to the axis and the
//! part perpendicular to it (the rejection). Only the perpendicular part
//! turns: it is rebuilt from an orthonormal pair in the plane normal to the
//! axis, `n = normalise(perpendicular)` and `m = normalise(perpendicular × axis)`,
//! as `|perpendicular| · (n·cos θ + m·sin θ)`.
//!
//! Because `m` comes from `perpendicular × axis` (not `axis × perpendicular`),
//! a positive angle turns clockwise when looking down the axis towards the
//! origin. Rotating `X` by 90° about `Z` gives `-Y`.

use tracing::trace;

use crate::core_types::V3d;

impl V3d {
    /// Component of `self` parallel to `onto`.
    ///
    /// `NaN` when `onto` is the zero vector.
    #[must_use]
    pub fn project(self, onto: V3d) -> V3d {
        let onto = onto.normalise();
        self.dot(onto) * onto
    }

    /// In-place form of [`V3d::project`].
    pub fn project_in_place(&mut self, onto: V3d) -> &mut Self {
        *self = self.project(onto);
        self
    }

    /// Component of `self` perpendicular to `onto`: `self - project(self, onto)`.
    #[must_use]
    pub fn reject(self, onto: V3d) -> V3d {
        self - self.project(onto)
    }

    /// In-place form of [`V3d::reject`].
    pub fn reject_in_place(&mut self, onto: V3d) -> &mut Self {
        let parallel = self.project(onto);
        *self -= parallel;
        self
    }

    /// Reflect `self` across the line through the origin along `axis`.
    ///
    /// `axis` is used as given. With a non-unit axis the result is also
    /// scaled by `|axis|²` (on the parallel part), which callers can rely on.
    #[must_use]
    pub fn mirror(self, axis: V3d) -> V3d {
        let d = axis.dot(self);
        axis * (d + d) - self
    }

    /// In-place form of [`V3d::mirror`].
    pub fn mirror_in_place(&mut self, axis: V3d) -> &mut Self {
        *self = self.mirror(axis);
        self
    }

    /// Rotate `self` by `angle` degrees about `axis`.
    ///
    /// A vector lying on the axis (or the zero vector, or a zero axis) has no
    /// perpendicular part to turn and is returned unchanged.
    #[must_use]
    pub fn rotate(self, angle: f64, axis: V3d) -> V3d {
        let perpendicular = self.reject(axis);
        let perplen = perpendicular.length();
        let perpnorm = perpendicular / perplen;

        if !perpnorm.is_valid() {
            trace!(vector = %self, axis = %axis, "no perpendicular component, rotation is a no-op");
            return self;
        }

        let cross = perpendicular.cross(axis);

        let (sin, cos) = angle.to_radians().sin_cos();
        let rotated = perplen * (perpnorm * cos + cross.normalise() * sin);

        let parallel = self - perpendicular;
        parallel + rotated
    }

    /// In-place form of [`V3d::rotate`].
    pub fn rotate_in_place(&mut self, angle: f64, axis: V3d) -> &mut Self {
        *self = self.rotate(angle, axis);
        self
    }
}
