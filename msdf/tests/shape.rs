/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

mod helpers;

use self::helpers::*;
use msdf_field::*;

#[test]
fn counter_clockwise_square_winds_positive() {
    assert!(square(0.0, 1.0).winding() == 1);
}

#[test]
fn reversed_square_winds_negative() {
    let mut contour = square(0.0, 1.0);
    contour.reverse();

    assert!(contour.winding() == -1);
    assert!(Shape::from_contours(vec![contour]).validate());
}

#[test]
fn clockwise_circle_winds_negative() {
    assert!(clockwise_circle(Vector2(5.0, 5.0), 2.0).winding() == -1);
}

#[test]
fn empty_contour_has_no_winding() {
    assert!(Contour::new().winding() == 0);
}

#[test]
fn two_edge_lens_winding() {
    let lens = Contour::from_edges(vec![
        EdgeSegment::quadratic(Vector2(0.0, 0.0), Vector2(1.0, -1.0), Vector2(2.0, 0.0)),
        EdgeSegment::quadratic(Vector2(2.0, 0.0), Vector2(1.0, 1.0), Vector2(0.0, 0.0)),
    ]);

    assert!(lens.winding() == 1);
}

#[test]
fn single_edge_loop_winding() {
    let contour = Contour::from_edges(vec![EdgeSegment::cubic(
        Vector2(0.0, 0.0),
        Vector2(2.0, 0.0),
        Vector2(2.0, 2.0),
        Vector2(0.0, 0.0),
    )]);

    assert!(contour.winding() == 1);
}

#[test]
fn normalize_splits_single_edge_contours() {
    let mut shape = Shape::from_contours(vec![
        Contour::from_edges(vec![EdgeSegment::cubic(
            Vector2(0.0, 0.0),
            Vector2(2.0, 0.0),
            Vector2(2.0, 2.0),
            Vector2(0.0, 0.0),
        )]),
        square(3.0, 4.0),
    ]);

    shape.normalize();

    assert!(shape.contours[0].len() == 3);
    assert!(shape.contours[1].len() == 4);
    assert!(shape.validate());
    assert!(shape.contours[0].winding() == 1);
}

#[test]
fn discontinuous_contour_fails_validation() {
    let shape = Shape::from_contours(vec![
        square(0.0, 1.0),
        Contour::from_edges(vec![
            EdgeSegment::line(Vector2(0.0, 0.0), Vector2(1.0, 0.0)),
            EdgeSegment::line(Vector2(2.0, 0.0), Vector2(0.0, 0.0)),
        ]),
    ]);

    assert!(!shape.validate());
    assert!(shape.check() == Err(ShapeError::Discontinuous { contour: 1, edge: 1 }));
}

#[test]
fn shape_bounds_cover_all_contours() {
    let shape = Shape::from_contours(vec![square(0.0, 1.0), square(2.0, 5.0)]);
    let bounds = shape.bounds();

    assert!(bounds == Bounds { left: 0.0, bottom: 0.0, right: 5.0, top: 5.0 });
    assert!(Shape::new().bounds().is_empty());
}

#[test]
fn build_square_from_outline() {
    let shape = shape_from_outline(vec![
        OutlineOp::Move(Vector2(0.0, 0.0)),
        OutlineOp::Line(Vector2(1.0, 0.0)),
        OutlineOp::Line(Vector2(1.0, 1.0)),
        OutlineOp::Line(Vector2(0.0, 1.0)),
        OutlineOp::Close,
    ])
    .unwrap();

    assert!(shape.contours.len() == 1);
    assert!(shape.contours[0] == square(0.0, 1.0));
}

#[test]
fn builder_closes_open_contours() {
    let mut builder = ShapeBuilder::new();

    builder.move_to(Vector2(0.0, 0.0));
    builder.quad_to(Vector2(1.0, -1.0), Vector2(2.0, 0.0)).unwrap();
    builder.move_to(Vector2(5.0, 5.0));
    builder.cubic_to(Vector2(6.0, 5.0), Vector2(6.0, 6.0), Vector2(5.0, 6.0)).unwrap();

    let shape = builder.build();

    assert!(shape.contours.len() == 2);
    assert!(shape.contours[0].len() == 2);
    assert!(shape.contours[1].len() == 2);
    assert!(shape.validate());
}

#[test]
fn builder_skips_empty_contours_and_degenerate_edges() {
    let shape = shape_from_outline(vec![
        OutlineOp::Move(Vector2(0.0, 0.0)),
        OutlineOp::Move(Vector2(1.0, 1.0)),
        OutlineOp::Line(Vector2(1.0, 1.0)),
        OutlineOp::Line(Vector2(2.0, 1.0)),
        OutlineOp::Line(Vector2(2.0, 2.0)),
        OutlineOp::Close,
    ])
    .unwrap();

    assert!(shape.contours.len() == 1);
    assert!(shape.contours[0].len() == 3);
}

#[test]
fn edges_need_a_start_point() {
    let mut builder = ShapeBuilder::new();

    assert!(builder.line_to(Vector2(1.0, 1.0)) == Err(ShapeError::NoCurrentPoint));
    assert!(shape_from_outline(vec![OutlineOp::Quadratic(Vector2(1.0, 1.0), Vector2(2.0, 0.0))]) == Err(ShapeError::NoCurrentPoint));
}

#[test]
fn builder_respects_inverse_y_axis() {
    let mut builder = ShapeBuilder::new().with_inverse_y_axis(true);
    builder.move_to(Vector2(0.0, 0.0));
    builder.line_to(Vector2(1.0, 0.0)).unwrap();
    builder.line_to(Vector2(1.0, 1.0)).unwrap();

    let shape = builder.build();

    assert!(shape.inverse_y_axis);
    assert!(shape.edge_count() == 3);
}
