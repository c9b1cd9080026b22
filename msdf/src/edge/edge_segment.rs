/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::cubic::*;
use super::edge_color::*;
use super::edge_curve::*;
use super::linear::*;
use super::quadratic::*;
use crate::geo::*;

/// Calls the same expression on whichever kind of segment an `EdgeSegment` holds
macro_rules! each_kind {
    ($segment:expr, $edge:ident => $action:expr) => {
        match $segment {
            EdgeSegment::Linear($edge) => $action,
            EdgeSegment::Quadratic($edge) => $action,
            EdgeSegment::Cubic($edge) => $action,
        }
    };
}

///
/// One edge of a contour: a line, a quadratic bezier or a cubic bezier
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum EdgeSegment {
    Linear(LinearSegment),
    Quadratic(QuadraticSegment),
    Cubic(CubicSegment),
}

impl EdgeSegment {
    ///
    /// Creates a white line edge
    ///
    pub fn line(p0: Vector2, p1: Vector2) -> EdgeSegment {
        EdgeSegment::Linear(LinearSegment::new(p0, p1))
    }

    ///
    /// Creates a white quadratic edge
    ///
    pub fn quadratic(p0: Vector2, p1: Vector2, p2: Vector2) -> EdgeSegment {
        EdgeSegment::Quadratic(QuadraticSegment::new(p0, p1, p2))
    }

    ///
    /// Creates a white cubic edge
    ///
    pub fn cubic(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> EdgeSegment {
        EdgeSegment::Cubic(CubicSegment::new(p0, p1, p2, p3))
    }

    ///
    /// The control points of this edge, from the start point to the end point
    ///
    pub fn control_points(&self) -> &[Vector2] {
        each_kind!(self, edge => &edge.points[..])
    }

    ///
    /// Returns the same curve traced from the end point back to the start point
    ///
    pub fn reversed(&self) -> EdgeSegment {
        match self {
            EdgeSegment::Linear(edge) => {
                let [p0, p1] = edge.points;
                LinearSegment::with_color(p1, p0, edge.color).into()
            }
            EdgeSegment::Quadratic(edge) => {
                let [p0, p1, p2] = edge.points;
                QuadraticSegment::with_color(p2, p1, p0, edge.color).into()
            }
            EdgeSegment::Cubic(edge) => {
                let [p0, p1, p2, p3] = edge.points;
                CubicSegment::with_color(p3, p2, p1, p0, edge.color).into()
            }
        }
    }
}

impl From<LinearSegment> for EdgeSegment {
    #[inline]
    fn from(edge: LinearSegment) -> EdgeSegment {
        EdgeSegment::Linear(edge)
    }
}

impl From<QuadraticSegment> for EdgeSegment {
    #[inline]
    fn from(edge: QuadraticSegment) -> EdgeSegment {
        EdgeSegment::Quadratic(edge)
    }
}

impl From<CubicSegment> for EdgeSegment {
    #[inline]
    fn from(edge: CubicSegment) -> EdgeSegment {
        EdgeSegment::Cubic(edge)
    }
}

impl HasBoundingBox for EdgeSegment {
    #[inline]
    fn extend_bounds(&self, bounds: &mut Bounds) {
        each_kind!(self, edge => edge.extend_bounds(bounds))
    }
}

impl EdgeCurve for EdgeSegment {
    #[inline]
    fn color(&self) -> EdgeColor {
        each_kind!(self, edge => edge.color())
    }

    #[inline]
    fn set_color(&mut self, color: EdgeColor) {
        each_kind!(self, edge => edge.set_color(color))
    }

    #[inline]
    fn point(&self, t: f64) -> Vector2 {
        each_kind!(self, edge => edge.point(t))
    }

    #[inline]
    fn direction(&self, t: f64) -> Vector2 {
        each_kind!(self, edge => edge.direction(t))
    }

    #[inline]
    fn start_point(&self) -> Vector2 {
        each_kind!(self, edge => edge.start_point())
    }

    #[inline]
    fn end_point(&self) -> Vector2 {
        each_kind!(self, edge => edge.end_point())
    }

    #[inline]
    fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64) {
        each_kind!(self, edge => edge.signed_distance(origin))
    }

    #[inline]
    fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        each_kind!(self, edge => edge.split_in_thirds())
    }

    #[inline]
    fn move_start_point(&mut self, to: Vector2) {
        each_kind!(self, edge => edge.move_start_point(to))
    }

    #[inline]
    fn move_end_point(&mut self, to: Vector2) {
        each_kind!(self, edge => edge.move_end_point(to))
    }
}
