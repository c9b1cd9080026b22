/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_color::*;
use super::edge_curve::*;
use super::edge_segment::*;
use crate::geo::*;
use crate::roots::*;

///
/// A quadratic bezier edge
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct QuadraticSegment {
    pub points: [Vector2; 3],
    pub color: EdgeColor,
}

impl QuadraticSegment {
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2) -> QuadraticSegment {
        QuadraticSegment::with_color(p0, p1, p2, EdgeColor::White)
    }

    ///
    /// Creates a quadratic segment with a color
    ///
    /// A control point that coincides with one of the endpoints would leave the tangent at that end
    /// undefined, so it is moved to the midpoint of the two endpoints instead.
    ///
    pub fn with_color(p0: Vector2, p1: Vector2, p2: Vector2, color: EdgeColor) -> QuadraticSegment {
        let p1 = if p1 == p0 || p1 == p2 {
            (p0 + p2) * 0.5
        } else {
            p1
        };

        QuadraticSegment {
            points: [p0, p1, p2],
            color,
        }
    }
}

impl HasBoundingBox for QuadraticSegment {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        let [p0, p1, p2] = self.points;

        bounds.include_point(p0);
        bounds.include_point(p2);

        let bot = (p1 - p0) - (p2 - p1);

        if bot.0 != 0.0 {
            let param = (p1.0 - p0.0) / bot.0;
            if param > 0.0 && param < 1.0 {
                bounds.include_point(self.point(param));
            }
        }

        if bot.1 != 0.0 {
            let param = (p1.1 - p0.1) / bot.1;
            if param > 0.0 && param < 1.0 {
                bounds.include_point(self.point(param));
            }
        }
    }
}

impl EdgeCurve for QuadraticSegment {
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
        let [p0, p1, p2] = self.points;

        mix(mix(p0, p1, t), mix(p1, p2, t), t)
    }

    #[inline]
    fn direction(&self, t: f64) -> Vector2 {
        let [p0, p1, p2] = self.points;

        mix(p1 - p0, p2 - p1, t)
    }

    #[inline]
    fn start_point(&self) -> Vector2 {
        self.points[0]
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        self.points[2]
    }

    fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64) {
        let [p0, p1, p2] = self.points;

        let qa = p0 - origin;
        let ab = p1 - p0;
        let br = p0 + p2 - p1 - p1;

        // The nearest interior point is where the derivative of the squared distance is zero
        let roots = solve_cubic(
            br.dot(br),
            3.0 * ab.dot(br),
            2.0 * ab.dot(ab) + qa.dot(br),
            qa.dot(ab),
        );

        // Distance from the start point
        let mut min_distance = non_zero_sign(ab.cross(origin - p0)) as f64 * qa.length();
        let mut param = -qa.dot(ab) / ab.dot(ab);

        // Distance from the end point
        let end_dir = p2 - p1;
        let distance = non_zero_sign(end_dir.cross(origin - p2)) as f64 * (p2 - origin).length();
        if distance.abs() < min_distance.abs() {
            min_distance = distance;
            param = (origin - p1).dot(end_dir) / end_dir.dot(end_dir);
        }

        // Interior candidates
        for t in roots.iter() {
            if t > 0.0 && t < 1.0 {
                let endpoint = p0 + ab * (2.0 * t) + br * (t * t);
                let distance = non_zero_sign((p2 - p0).cross(origin - endpoint)) as f64 * (endpoint - origin).length();

                if distance.abs() <= min_distance.abs() {
                    min_distance = distance;
                    param = t;
                }
            }
        }

        if (0.0..=1.0).contains(&param) {
            (SignedDistance::new(min_distance, 0.0), param)
        } else if param < 0.5 {
            let alignment = ab.normalize().dot(qa.normalize()).abs();
            (SignedDistance::new(min_distance, alignment), param)
        } else {
            let alignment = end_dir.normalize().dot((p2 - origin).normalize()).abs();
            (SignedDistance::new(min_distance, alignment), param)
        }
    }

    fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        let [p0, p1, p2] = self.points;
        let one_third = self.point(1.0 / 3.0);
        let two_thirds = self.point(2.0 / 3.0);

        [
            QuadraticSegment::with_color(p0, mix(p0, p1, 1.0 / 3.0), one_third, self.color).into(),
            QuadraticSegment::with_color(
                one_third,
                mix(mix(p0, p1, 5.0 / 9.0), mix(p1, p2, 4.0 / 9.0), 0.5),
                two_thirds,
                self.color,
            )
            .into(),
            QuadraticSegment::with_color(two_thirds, mix(p1, p2, 2.0 / 3.0), p2, self.color).into(),
        ]
    }

    ///
    /// Moves the start point, shifting the control point along the end tangent so the tangent at
    /// the end point is unchanged
    ///
    fn move_start_point(&mut self, to: Vector2) {
        let [p0, p1, p2] = self.points;
        let original_start_dir = p0 - p1;

        let shift = (p0 - p1).cross(to - p0) / (p0 - p1).cross(p2 - p1);
        let mut new_p1 = p1 + (p2 - p1) * shift;

        // Keep the old control point if the shift is undefined or would reverse the start tangent
        if !shift.is_finite() || original_start_dir.dot(to - new_p1) < 0.0 {
            new_p1 = p1;
        }

        self.points = [to, new_p1, p2];
    }

    ///
    /// Moves the end point, shifting the control point along the start tangent so the tangent at
    /// the start point is unchanged
    ///
    fn move_end_point(&mut self, to: Vector2) {
        let [p0, p1, p2] = self.points;
        let original_end_dir = p2 - p1;

        let shift = (p2 - p1).cross(to - p2) / (p2 - p1).cross(p0 - p1);
        let mut new_p1 = p1 + (p0 - p1) * shift;

        if !shift.is_finite() || original_end_dir.dot(to - new_p1) < 0.0 {
            new_p1 = p1;
        }

        self.points = [p0, new_p1, to];
    }
}
