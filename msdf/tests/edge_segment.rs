/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

mod helpers;

use self::helpers::*;
use msdf_field::*;

fn nearest(contour: &Contour, origin: Vector2) -> SignedDistance {
    contour
        .edges
        .iter()
        .map(|edge| edge.signed_distance(origin).0)
        .fold(SignedDistance::INFINITE, |a, b| if b < a { b } else { a })
}

fn assert_split_matches(edge: EdgeSegment) {
    let parts = edge.split_in_thirds();

    assert!(parts[0].start_point() == edge.start_point());
    assert!(parts[0].end_point() == parts[1].start_point());
    assert!(parts[1].end_point() == parts[2].start_point());
    assert!(parts[2].end_point() == edge.end_point());

    for (idx, part) in parts.iter().enumerate() {
        let on_part = part.point(0.5);
        let on_edge = edge.point((idx as f64 + 0.5) / 3.0);

        assert!(part.color() == edge.color());
        assert!((on_part - on_edge).length() < 1e-9, "{:?} {:?}", on_part, on_edge);
    }
}

#[test]
fn linear_end_points_are_exact() {
    let p0 = Vector2(0.1, 0.7);
    let p1 = Vector2(13.3, -2.9);
    let edge = EdgeSegment::line(p0, p1);

    assert!(edge.point(0.0) == p0);
    assert!(edge.point(1.0) == p1);
}

#[test]
fn linear_distance_is_positive_on_the_left() {
    let edge = EdgeSegment::line(Vector2(0.0, 0.0), Vector2(2.0, 0.0));

    let (above, param) = edge.signed_distance(Vector2(1.0, 1.0));
    assert!(above.distance == 1.0);
    assert!(above.dot == 0.0);
    assert!(param == 0.5);

    let (below, _) = edge.signed_distance(Vector2(1.0, -1.0));
    assert!(below.distance == -1.0);
}

#[test]
fn linear_distance_beyond_end_point() {
    let edge = EdgeSegment::line(Vector2(0.0, 0.0), Vector2(2.0, 0.0));
    let (distance, param) = edge.signed_distance(Vector2(3.0, 0.0));

    assert!(distance.distance == 1.0);
    assert!(distance.dot == 1.0);
    assert!(param == 1.5);
}

#[test]
fn pseudo_distance_extends_the_end_tangent() {
    let edge = EdgeSegment::line(Vector2(0.0, 0.0), Vector2(2.0, 0.0));
    let origin = Vector2(3.0, 0.5);
    let (mut distance, param) = edge.signed_distance(origin);

    assert!(close_to(distance.distance, 1.25f64.sqrt(), 1e-12));

    edge.distance_to_pseudo_distance(&mut distance, origin, param);
    assert!(close_to(distance.distance, 0.5, 1e-12));
    assert!(distance.dot == 0.0);
}

#[test]
fn pseudo_distance_leaves_interior_points_alone() {
    let edge = EdgeSegment::line(Vector2(0.0, 0.0), Vector2(2.0, 0.0));
    let origin = Vector2(1.5, -0.25);
    let (mut distance, param) = edge.signed_distance(origin);
    let before = distance;

    edge.distance_to_pseudo_distance(&mut distance, origin, param);
    assert!(distance == before);
}

#[test]
fn degenerate_quadratic_is_repaired() {
    let edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(0.0, 0.0), Vector2(2.0, 4.0));
    assert!(edge.control_points()[1] == Vector2(1.0, 2.0));

    let edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(2.0, 4.0), Vector2(2.0, 4.0));
    assert!(edge.control_points()[1] == Vector2(1.0, 2.0));
    assert!(!edge.direction(1.0).is_zero());
}

#[test]
fn quadratic_distance_at_apex() {
    let edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 2.0), Vector2(2.0, 0.0));
    let (distance, param) = edge.signed_distance(Vector2(1.0, 2.0));

    assert!(close_to(distance.distance, 1.0, 1e-9));
    assert!(close_to(param, 0.5, 1e-9));
}

#[test]
fn quadratic_bounds_include_apex() {
    let edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 2.0), Vector2(2.0, 0.0));
    let bounds = edge.bounding_box();

    assert!(bounds.left == 0.0);
    assert!(bounds.right == 2.0);
    assert!(bounds.bottom == 0.0);
    assert!(close_to(bounds.top, 1.0, 1e-12));
}

#[test]
fn circle_distance_from_centre() {
    let circle = clockwise_circle(Vector2(0.0, 0.0), 1.0);
    let distance = nearest(&circle, Vector2(0.0, 0.0));

    // Clockwise, so the inside is negative
    assert!(distance.distance < 0.0);
    assert!(close_to(distance.distance, -1.0, 1e-3), "{:?}", distance);
}

#[test]
fn circle_distance_just_outside() {
    let circle = clockwise_circle(Vector2(0.0, 0.0), 1.0);
    let distance = nearest(&circle, Vector2(1.05, 0.0));

    assert!(distance.distance > 0.0);
    assert!(close_to(distance.distance, 0.05, 1e-3), "{:?}", distance);

    let diagonal = nearest(&circle, Vector2(0.8, 0.8));
    assert!(diagonal.distance > 0.0);
    assert!(close_to(diagonal.distance, 0.8f64.hypot(0.8) - 1.0, 1e-3), "{:?}", diagonal);
}

#[test]
fn circle_bounds() {
    let bounds = clockwise_circle(Vector2(2.0, 3.0), 1.0).bounding_box();

    assert!(close_to(bounds.left, 1.0, 1e-9));
    assert!(close_to(bounds.right, 3.0, 1e-9));
    assert!(close_to(bounds.bottom, 2.0, 1e-9));
    assert!(close_to(bounds.top, 4.0, 1e-9));
}

#[test]
fn split_linear_in_thirds() {
    assert_split_matches(EdgeSegment::line(Vector2(1.0, 2.0), Vector2(4.0, -1.0)));
}

#[test]
fn split_quadratic_in_thirds() {
    assert_split_matches(EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 3.0), Vector2(3.0, 1.0)));
}

#[test]
fn split_cubic_in_thirds() {
    let mut edge = EdgeSegment::cubic(Vector2(0.0, 0.0), Vector2(1.0, 3.0), Vector2(2.0, -2.0), Vector2(4.0, 1.0));
    edge.set_color(EdgeColor::Magenta);

    assert_split_matches(edge);
}

#[test]
fn move_quadratic_start_keeps_tangents() {
    let mut edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0));
    edge.move_start_point(Vector2(0.0, 0.5));

    let sqrt_half = 0.5f64.sqrt();
    let start_dir = edge.direction(0.0).normalize();
    let end_dir = edge.direction(1.0).normalize();

    assert!(edge.start_point() == Vector2(0.0, 0.5));
    assert!(edge.end_point() == Vector2(2.0, 0.0));
    assert!((start_dir - Vector2(sqrt_half, sqrt_half)).length() < 1e-12);
    assert!((end_dir - Vector2(sqrt_half, -sqrt_half)).length() < 1e-12);
}

#[test]
fn move_quadratic_end_keeps_start_tangent() {
    let mut edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0));
    edge.move_end_point(Vector2(2.0, 0.5));

    let sqrt_half = 0.5f64.sqrt();
    let start_dir = edge.direction(0.0).normalize();

    assert!(edge.control_points() == &[Vector2(0.0, 0.0), Vector2(1.25, 1.25), Vector2(2.0, 0.5)]);
    assert!((start_dir - Vector2(sqrt_half, sqrt_half)).length() < 1e-12);
}

#[test]
fn move_quadratic_start_past_control_point() {
    // Sliding the control point along the end tangent would reverse the start tangent here
    let mut edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0));
    edge.move_start_point(Vector2(3.0, 2.0));

    assert!(edge.control_points() == &[Vector2(3.0, 2.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0)]);
}

#[test]
fn move_straight_quadratic_start() {
    // The tangents are parallel so there is no shift that keeps them both
    let mut edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 0.0), Vector2(2.0, 0.0));
    edge.move_start_point(Vector2(0.0, 1.0));

    assert!(edge.control_points() == &[Vector2(0.0, 1.0), Vector2(1.0, 0.0), Vector2(2.0, 0.0)]);
}

#[test]
fn cubic_direction_with_collapsed_handles() {
    let start = EdgeSegment::cubic(Vector2(0.0, 0.0), Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0));
    let end = EdgeSegment::cubic(Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 0.0), Vector2(2.0, 0.0));

    assert!(start.direction(0.0) == Vector2(1.0, 1.0));
    assert!(end.direction(1.0) == Vector2(1.0, -1.0));
}

#[test]
fn move_cubic_end_carries_handle() {
    let mut edge = EdgeSegment::cubic(Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(2.0, 1.0), Vector2(3.0, 0.0));
    edge.move_end_point(Vector2(4.0, 1.0));

    assert!(edge.control_points() == &[Vector2(0.0, 0.0), Vector2(1.0, 1.0), Vector2(3.0, 2.0), Vector2(4.0, 1.0)]);
}

#[test]
fn reversed_edge_swaps_sign() {
    let edge = EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, 2.0), Vector2(2.0, 0.0));
    let reversed = edge.reversed();
    let origin = Vector2(1.0, 0.25);

    let (forward, _) = edge.signed_distance(origin);
    let (backward, _) = reversed.signed_distance(origin);

    assert!(close_to(forward.distance, -backward.distance, 1e-9));
}
