/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_color::*;
use super::edge_segment::*;
use crate::geo::*;

///
/// Operations supported by every kind of edge segment
///
pub trait EdgeCurve: HasBoundingBox {
    ///
    /// The channels this edge contributes to
    ///
    fn color(&self) -> EdgeColor;

    ///
    /// Changes the channels this edge contributes to
    ///
    fn set_color(&mut self, color: EdgeColor);

    ///
    /// The point at parameter `t` (0 is the start of the edge and 1 the end; other values extrapolate)
    ///
    fn point(&self, t: f64) -> Vector2;

    ///
    /// The (non-normalized) tangent at parameter `t`
    ///
    fn direction(&self, t: f64) -> Vector2;

    ///
    /// The minimum signed distance from `origin` to this edge, along with the curve parameter of the
    /// nearest point
    ///
    /// The parameter may lie outside 0..1 when the nearest point is an endpoint: it then indicates
    /// which side of that endpoint the origin is on, which `distance_to_pseudo_distance` relies upon.
    ///
    fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64);

    ///
    /// Splits this edge into three edges of the same kind that together trace the same curve
    ///
    fn split_in_thirds(&self) -> [EdgeSegment; 3];

    ///
    /// Moves the start point of this edge
    ///
    fn move_start_point(&mut self, to: Vector2);

    ///
    /// Moves the end point of this edge
    ///
    fn move_end_point(&mut self, to: Vector2);

    #[inline]
    fn start_point(&self) -> Vector2 {
        self.point(0.0)
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        self.point(1.0)
    }

    ///
    /// Converts a distance previously returned by `signed_distance` into a pseudo-distance
    ///
    /// When the nearest point is an endpoint and the origin lies beyond it, the distance is replaced
    /// by the distance to the tangent line through that endpoint, provided that is no farther away.
    /// This keeps the field continuous across the corner shared by two edges.
    ///
    fn distance_to_pseudo_distance(&self, distance: &mut SignedDistance, origin: Vector2, param: f64) {
        if param < 0.0 {
            let dir = self.direction(0.0).normalize();
            let aq = origin - self.point(0.0);
            let ts = aq.dot(dir);

            if ts < 0.0 {
                let pseudo_distance = dir.cross(aq);
                if pseudo_distance.abs() <= distance.distance.abs() {
                    distance.distance = pseudo_distance;
                    distance.dot = 0.0;
                }
            }
        } else if param > 1.0 {
            let dir = self.direction(1.0).normalize();
            let bq = origin - self.point(1.0);
            let ts = bq.dot(dir);

            if ts > 0.0 {
                let pseudo_distance = dir.cross(bq);
                if pseudo_distance.abs() <= distance.distance.abs() {
                    distance.distance = pseudo_distance;
                    distance.dot = 0.0;
                }
            }
        }
    }
}
