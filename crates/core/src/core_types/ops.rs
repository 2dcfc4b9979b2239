//! Arithmetic operators for [`V3d`].
//!
//! Everything is componentwise. Scalar multiplication works from either side;
//! scalar division is not special-cased, so dividing by zero yields `inf`/`NaN`
//! exactly as IEEE-754 says.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::V3d;

impl Add for V3d {
    type Output = V3d;
    #[inline]
    fn add(self, rhs: V3d) -> V3d {
        V3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for V3d {
    type Output = V3d;
    #[inline]
    fn sub(self, rhs: V3d) -> V3d {
        V3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for V3d {
    type Output = V3d;
    #[inline]
    fn neg(self) -> V3d {
        V3d::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for V3d {
    #[inline]
    fn add_assign(&mut self, rhs: V3d) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for V3d {
    #[inline]
    fn sub_assign(&mut self, rhs: V3d) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for V3d {
    type Output = V3d;
    #[inline]
    fn mul(self, rhs: f64) -> V3d {
        V3d::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<V3d> for f64 {
    type Output = V3d;
    #[inline]
    fn mul(self, rhs: V3d) -> V3d {
        rhs * self
    }
}

impl Div<f64> for V3d {
    type Output = V3d;
    #[inline]
    fn div(self, rhs: f64) -> V3d {
        V3d::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl MulAssign<f64> for V3d {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<f64> for V3d {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_neg() {
        let a = V3d::new(1.0, 2.0, 3.0);
        let b = V3d::new(-4.0, 0.5, 10.0);

        assert_eq!(a + b, V3d::new(-3.0, 2.5, 13.0));
        assert_eq!(a - b, V3d::new(5.0, 1.5, -7.0));
        assert_eq!(-a, V3d::new(-1.0, -2.0, -3.0));
        assert_eq!(-(-a), a);
    }

    #[test]
    fn compound_assignment_matches_pure_operators() {
        let a = V3d::new(1.0, 2.0, 3.0);
        let b = V3d::new(0.25, -8.0, 4.0);

        let mut v = a;
        v += b;
        assert_eq!(v, a + b);

        let mut v = a;
        v -= b;
        assert_eq!(v, a - b);

        let mut v = a;
        v *= 3.0;
        assert_eq!(v, a * 3.0);

        let mut v = a;
        v /= 4.0;
        assert_eq!(v, a / 4.0);
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let v = V3d::new(1.5, -2.0, 0.1);
        assert_eq!(2.5 * v, v * 2.5);
        assert_eq!(v * 2.0, V3d::new(3.0, -4.0, 0.2));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let v = V3d::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(!v.is_valid());
    }
}
