/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(dead_code)]

use msdf_field::*;

/// Length of the handles of a cubic quarter-circle of radius 1
pub const CIRCLE_K: f64 = 0.5522847498;

///
/// An axis-aligned square, wound counter-clockwise
///
pub fn square(min: f64, max: f64) -> Contour {
    Contour::from_edges(vec![
        EdgeSegment::line(Vector2(min, min), Vector2(max, min)),
        EdgeSegment::line(Vector2(max, min), Vector2(max, max)),
        EdgeSegment::line(Vector2(max, max), Vector2(min, max)),
        EdgeSegment::line(Vector2(min, max), Vector2(min, min)),
    ])
}

///
/// A circle made from four cubic curves, wound clockwise starting from the rightmost point
///
pub fn clockwise_circle(centre: Vector2, radius: f64) -> Contour {
    let k = CIRCLE_K * radius;
    let Vector2(cx, cy) = centre;

    Contour::from_edges(vec![
        EdgeSegment::cubic(Vector2(cx + radius, cy), Vector2(cx + radius, cy - k), Vector2(cx + k, cy - radius), Vector2(cx, cy - radius)),
        EdgeSegment::cubic(Vector2(cx, cy - radius), Vector2(cx - k, cy - radius), Vector2(cx - radius, cy - k), Vector2(cx - radius, cy)),
        EdgeSegment::cubic(Vector2(cx - radius, cy), Vector2(cx - radius, cy + k), Vector2(cx - k, cy + radius), Vector2(cx, cy + radius)),
        EdgeSegment::cubic(Vector2(cx, cy + radius), Vector2(cx + k, cy + radius), Vector2(cx + radius, cy + k), Vector2(cx + radius, cy)),
    ])
}

///
/// A square from 0 to 4 with a square hole from 1 to 3
///
pub fn square_with_hole() -> Shape {
    let mut hole = square(1.0, 3.0);
    hole.reverse();

    Shape::from_contours(vec![square(0.0, 4.0), hole])
}

pub fn close_to(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
