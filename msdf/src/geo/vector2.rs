/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// A 2-dimensional euclidean vector with double precision
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Vector2(pub f64, pub f64);

impl Vector2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Vector2 {
        Vector2(x, y)
    }

    ///
    /// A vector with both components set to the same value
    ///
    #[inline]
    pub fn splat(val: f64) -> Vector2 {
        Vector2(val, val)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// True if both components are exactly zero
    ///
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0 && self.1 == 0.0
    }

    ///
    /// The length of this vector
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        (self.0 * self.0 + self.1 * self.1).sqrt()
    }

    ///
    /// Returns a vector with the same direction and unit length
    ///
    /// The zero vector has no direction, so `(0, 1)` is returned for it instead.
    ///
    #[inline]
    pub fn normalize(&self) -> Vector2 {
        let len = self.length();

        if len == 0.0 {
            Vector2(0.0, 1.0)
        } else {
            Vector2(self.0 / len, self.1 / len)
        }
    }

    ///
    /// Returns a unit vector orthogonal to this one
    ///
    /// With `polarity` set the vector is rotated counter-clockwise (`(-y, x)`), otherwise clockwise (`(y, -x)`).
    /// A zero vector produces `(0, 1)` or `(0, -1)` respectively.
    ///
    #[inline]
    pub fn orthonormal(&self, polarity: bool) -> Vector2 {
        let len = self.length();

        match (len == 0.0, polarity) {
            (true, true) => Vector2(0.0, 1.0),
            (true, false) => Vector2(0.0, -1.0),
            (false, true) => Vector2(-self.1 / len, self.0 / len),
            (false, false) => Vector2(self.1 / len, -self.0 / len),
        }
    }

    ///
    /// Dot product of two vectors
    ///
    #[inline]
    pub fn dot(&self, other: Vector2) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    ///
    /// The 2D cross product (the z component of the 3D cross product)
    ///
    /// This is positive when `other` points to the left of `self`.
    ///
    #[inline]
    pub fn cross(&self, other: Vector2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign<Vector2> for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign<Vector2> for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2(-self.0, -self.1)
    }
}

impl Mul<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 * rhs.0, self.1 * rhs.1)
    }
}

impl Div<Vector2> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2(self.0 / rhs.0, self.1 / rhs.1)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2(self * rhs.0, self * rhs.1)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn div(self, rhs: f64) -> Vector2 {
        Vector2(self.0 / rhs, self.1 / rhs)
    }
}

impl Div<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2(self / rhs.0, self / rhs.1)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Vector2 {
        Vector2(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    #[inline]
    fn from(v: Vector2) -> (f64, f64) {
        (v.0, v.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_zero_vector() {
        assert!(Vector2(0.0, 0.0).normalize() == Vector2(0.0, 1.0));
    }

    #[test]
    fn orthonormal_polarity() {
        assert!(Vector2(2.0, 0.0).orthonormal(true) == Vector2(0.0, 1.0));
        assert!(Vector2(2.0, 0.0).orthonormal(false) == Vector2(0.0, -1.0));
        assert!(Vector2(0.0, 0.0).orthonormal(false) == Vector2(0.0, -1.0));
    }

    #[test]
    fn cross_is_positive_to_the_left() {
        assert!(Vector2(1.0, 0.0).cross(Vector2(0.0, 1.0)) > 0.0);
        assert!(Vector2(1.0, 0.0).cross(Vector2(0.0, -1.0)) < 0.0);
    }
}
