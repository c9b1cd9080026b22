/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::vector2::*;

///
/// An axis-aligned bounding box
///
/// `bottom` is the smallest y coordinate and `top` the largest, whichever way the y axis points.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    /// A box that encloses nothing: including any point makes it enclose exactly that point
    pub const EMPTY: Bounds = Bounds {
        left: f64::INFINITY,
        bottom: f64::INFINITY,
        right: f64::NEG_INFINITY,
        top: f64::NEG_INFINITY,
    };

    ///
    /// True if nothing has been added to this box yet
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.bottom > self.top
    }

    ///
    /// Grows the box so that it contains the specified point
    ///
    #[inline]
    pub fn include_point(&mut self, p: Vector2) {
        if p.0 < self.left {
            self.left = p.0;
        }
        if p.1 < self.bottom {
            self.bottom = p.1;
        }
        if p.0 > self.right {
            self.right = p.0;
        }
        if p.1 > self.top {
            self.top = p.1;
        }
    }

    ///
    /// Grows the box so that it contains another box
    ///
    pub fn include_bounds(&mut self, other: &Bounds) {
        if !other.is_empty() {
            self.include_point(Vector2(other.left, other.bottom));
            self.include_point(Vector2(other.right, other.top));
        }
    }

    #[inline]
    pub fn min(&self) -> Vector2 {
        Vector2(self.left, self.bottom)
    }

    #[inline]
    pub fn max(&self) -> Vector2 {
        Vector2(self.right, self.top)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::EMPTY
    }
}
