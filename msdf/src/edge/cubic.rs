/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_color::*;
use super::edge_curve::*;
use super::edge_segment::*;
use crate::consts::*;
use crate::geo::*;
use crate::roots::*;

///
/// A cubic bezier edge
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CubicSegment {
    pub points: [Vector2; 4],
    pub color: EdgeColor,
}

impl CubicSegment {
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> CubicSegment {
        CubicSegment::with_color(p0, p1, p2, p3, EdgeColor::White)
    }

    pub fn with_color(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2, color: EdgeColor) -> CubicSegment {
        CubicSegment {
            points: [p0, p1, p2, p3],
            color,
        }
    }

    ///
    /// Adds the extremes along one axis, given the derivative polynomial's coefficients for that axis
    ///
    fn extend_bounds_on_axis(&self, bounds: &mut Bounds, a: f64, b: f64, c: f64) {
        for t in solve_quadratic(a, b, c).iter() {
            if t > 0.0 && t < 1.0 {
                bounds.include_point(self.point(t));
            }
        }
    }
}

impl HasBoundingBox for CubicSegment {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        let [p0, p1, p2, p3] = self.points;

        bounds.include_point(p0);
        bounds.include_point(p3);

        let a0 = p1 - p0;
        let a1 = (p2 - p1 - a0) * 2.0;
        let a2 = p3 - p2 * 3.0 + p1 * 3.0 - p0;

        self.extend_bounds_on_axis(bounds, a2.0, a1.0, a0.0);
        self.extend_bounds_on_axis(bounds, a2.1, a1.1, a0.1);
    }
}

impl EdgeCurve for CubicSegment {
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
        let [p0, p1, p2, p3] = self.points;
        let p12 = mix(p1, p2, t);

        mix(mix(mix(p0, p1, t), p12, t), mix(p12, mix(p2, p3, t), t), t)
    }

    ///
    /// The tangent at `t`
    ///
    /// A handle that coincides with its endpoint gives a zero tangent at that end, in which case the
    /// direction towards the next control point along is used instead.
    ///
    fn direction(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.points;
        let tangent = mix(mix(p1 - p0, p2 - p1, t), mix(p2 - p1, p3 - p2, t), t);

        if tangent.is_zero() {
            if t == 0.0 {
                return p2 - p0;
            }
            if t == 1.0 {
                return p3 - p1;
            }
        }

        tangent
    }

    #[inline]
    fn start_point(&self) -> Vector2 {
        self.points[0]
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        self.points[3]
    }

    fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64) {
        let [p0, p1, p2, p3] = self.points;

        let qa = p0 - origin;
        let ab = p1 - p0;
        let br = p2 - p1 - ab;
        let as_ = p3 - p2 - (p2 - p1) - br;

        // Distance from the start point
        let start_dir = self.direction(0.0);
        let mut min_distance = non_zero_sign(start_dir.cross(origin - p0)) as f64 * qa.length();
        let mut param = -qa.dot(start_dir) / start_dir.dot(start_dir);

        // Distance from the end point
        let end_dir = self.direction(1.0);
        let distance = non_zero_sign(end_dir.cross(origin - p3)) as f64 * (p3 - origin).length();
        if distance.abs() < min_distance.abs() {
            min_distance = distance;
            param = (origin + end_dir - p3).dot(end_dir) / end_dir.dot(end_dir);
        }

        // There's no closed form for the interior, so refine several starting guesses with Newton's method
        for start in 0..=CUBIC_SEARCH_STARTS {
            let mut t = start as f64 / CUBIC_SEARCH_STARTS as f64;
            let mut step = 0;

            loop {
                let qpt = self.point(t) - origin;
                let distance = non_zero_sign(self.direction(t).cross(-qpt)) as f64 * qpt.length();

                if distance.abs() < min_distance.abs() {
                    min_distance = distance;
                    param = t;
                }

                if step == CUBIC_SEARCH_STEPS {
                    break;
                }

                let d1 = as_ * (3.0 * t * t) + br * (6.0 * t) + ab * 3.0;
                let d2 = as_ * (6.0 * t) + br * 6.0;
                t -= qpt.dot(d1) / (d1.dot(d1) + qpt.dot(d2));

                if !(0.0..=1.0).contains(&t) {
                    break;
                }

                step += 1;
            }
        }

        if (0.0..=1.0).contains(&param) {
            (SignedDistance::new(min_distance, 0.0), param)
        } else if param < 0.5 {
            let alignment = start_dir.normalize().dot(qa.normalize()).abs();
            (SignedDistance::new(min_distance, alignment), param)
        } else {
            let alignment = end_dir.normalize().dot((p3 - origin).normalize()).abs();
            (SignedDistance::new(min_distance, alignment), param)
        }
    }

    fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        let [p0, p1, p2, p3] = self.points;
        let one_third = self.point(1.0 / 3.0);
        let two_thirds = self.point(2.0 / 3.0);

        let first_handle = if p0 == p1 { p0 } else { mix(p0, p1, 1.0 / 3.0) };
        let last_handle = if p2 == p3 { p3 } else { mix(p2, p3, 2.0 / 3.0) };

        let a = mix(mix(p0, p1, 1.0 / 3.0), mix(p1, p2, 1.0 / 3.0), 1.0 / 3.0);
        let b = mix(
            mix(mix(p0, p1, 1.0 / 3.0), mix(p1, p2, 1.0 / 3.0), 1.0 / 3.0),
            mix(mix(p1, p2, 1.0 / 3.0), mix(p2, p3, 1.0 / 3.0), 1.0 / 3.0),
            2.0 / 3.0,
        );
        let c = mix(
            mix(mix(p0, p1, 2.0 / 3.0), mix(p1, p2, 2.0 / 3.0), 2.0 / 3.0),
            mix(mix(p1, p2, 2.0 / 3.0), mix(p2, p3, 2.0 / 3.0), 2.0 / 3.0),
            1.0 / 3.0,
        );
        let d = mix(mix(p1, p2, 2.0 / 3.0), mix(p2, p3, 2.0 / 3.0), 2.0 / 3.0);

        [
            CubicSegment::with_color(p0, first_handle, a, one_third, self.color).into(),
            CubicSegment::with_color(one_third, b, c, two_thirds, self.color).into(),
            CubicSegment::with_color(two_thirds, d, last_handle, p3, self.color).into(),
        ]
    }

    ///
    /// Moves the start point, carrying its handle along with it
    ///
    fn move_start_point(&mut self, to: Vector2) {
        self.points[1] += to - self.points[0];
        self.points[0] = to;
    }

    ///
    /// Moves the end point, carrying its handle along with it
    ///
    fn move_end_point(&mut self, to: Vector2) {
        self.points[2] += to - self.points[3];
        self.points[3] = to;
    }
}
