/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_color::*;
use super::edge_curve::*;
use super::edge_segment::*;
use crate::geo::*;

///
/// A straight line edge
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LinearSegment {
    pub points: [Vector2; 2],
    pub color: EdgeColor,
}

impl LinearSegment {
    pub fn new(p0: Vector2, p1: Vector2) -> LinearSegment {
        LinearSegment::with_color(p0, p1, EdgeColor::White)
    }

    pub fn with_color(p0: Vector2, p1: Vector2, color: EdgeColor) -> LinearSegment {
        LinearSegment {
            points: [p0, p1],
            color,
        }
    }
}

impl HasBoundingBox for LinearSegment {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        bounds.include_point(self.points[0]);
        bounds.include_point(self.points[1]);
    }
}

impl EdgeCurve for LinearSegment {
    #[inline]
    fn color(&self) -> EdgeColor {
        self.color
    }

    #[inline]
    fn set_color(&mut self, color: EdgeColor) {
        self.color = color;
    }

    #[inline]
    fn point(&self, t: f64) -> Vector2 {
        mix(self.points[0], self.points[1], t)
    }

    #[inline]
    fn direction(&self, _t: f64) -> Vector2 {
        self.points[1] - self.points[0]
    }

    #[inline]
    fn start_point(&self) -> Vector2 {
        self.points[0]
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        self.points[1]
    }

    fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64) {
        let [p0, p1] = self.points;

        let aq = origin - p0;
        let ab = p1 - p0;
        let param = aq.dot(ab) / ab.dot(ab);

        let eq = (if param > 0.5 { p1 } else { p0 }) - origin;
        let endpoint_distance = eq.length();

        if param > 0.0 && param < 1.0 {
            let ortho_distance = ab.orthonormal(true).dot(aq);
            if ortho_distance.abs() < endpoint_distance {
                return (SignedDistance::new(ortho_distance, 0.0), param);
            }
        }

        let distance = non_zero_sign(ab.cross(aq)) as f64 * endpoint_distance;
        let alignment = ab.normalize().dot(eq.normalize()).abs();

        (SignedDistance::new(distance, alignment), param)
    }

    fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        let one_third = self.point(1.0 / 3.0);
        let two_thirds = self.point(2.0 / 3.0);

        [
            LinearSegment::with_color(self.points[0], one_third, self.color).into(),
            LinearSegment::with_color(one_third, two_thirds, self.color).into(),
            LinearSegment::with_color(two_thirds, self.points[1], self.color).into(),
        ]
    }

    #[inline]
    fn move_start_point(&mut self, to: Vector2) {
        self.points[0] = to;
    }

    #[inline]
    fn move_end_point(&mut self, to: Vector2) {
        self.points[1] = to;
    }
}
