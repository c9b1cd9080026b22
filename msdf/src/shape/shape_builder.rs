/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::contour::*;
use super::outline_op::*;
use super::shape::*;
use crate::edge::*;
use crate::error::*;
use crate::geo::*;

///
/// Builds a `Shape` from a sequence of move, line and curve commands
///
/// Contours are closed automatically: if a contour does not finish where it started, a line back
/// to its start point is added when the next contour begins or the shape is built.
///
#[derive(Clone, Debug, Default)]
pub struct ShapeBuilder {
    shape: Shape,
    contour: Contour,
    start_point: Option<Vector2>,
    position: Option<Vector2>,
}

impl ShapeBuilder {
    pub fn new() -> ShapeBuilder {
        ShapeBuilder::default()
    }

    ///
    /// Sets whether the y axis of the shape being built points down
    ///
    pub fn with_inverse_y_axis(mut self, inverse_y_axis: bool) -> ShapeBuilder {
        self.shape.inverse_y_axis = inverse_y_axis;
        self
    }

    ///
    /// Starts a new contour at the specified point
    ///
    pub fn move_to(&mut self, point: Vector2) {
        self.close();

        self.start_point = Some(point);
        self.position = Some(point);
    }

    ///
    /// Adds a straight edge from the current position
    ///
    pub fn line_to(&mut self, point: Vector2) -> Result<(), ShapeError> {
        let position = self.position.ok_or(ShapeError::NoCurrentPoint)?;

        if position != point {
            self.contour.add_edge(LinearSegment::new(position, point));
        }
        self.position = Some(point);

        Ok(())
    }

    ///
    /// Adds a quadratic edge from the current position
    ///
    pub fn quad_to(&mut self, control: Vector2, point: Vector2) -> Result<(), ShapeError> {
        let position = self.position.ok_or(ShapeError::NoCurrentPoint)?;

        if position != point || control != point {
            self.contour.add_edge(QuadraticSegment::new(position, control, point));
        }
        self.position = Some(point);

        Ok(())
    }

    ///
    /// Adds a cubic edge from the current position
    ///
    pub fn cubic_to(&mut self, control1: Vector2, control2: Vector2, point: Vector2) -> Result<(), ShapeError> {
        let position = self.position.ok_or(ShapeError::NoCurrentPoint)?;

        if position != point || control1 != point || control2 != point {
            self.contour.add_edge(CubicSegment::new(position, control1, control2, point));
        }
        self.position = Some(point);

        Ok(())
    }

    ///
    /// Finishes the current contour, adding a line back to its start point if needed
    ///
    pub fn close(&mut self) {
        if let (Some(start_point), Some(position)) = (self.start_point, self.position) {
            if !self.contour.is_empty() && start_point != position {
                self.contour.add_edge(LinearSegment::new(position, start_point));
            }
        }

        if !self.contour.is_empty() {
            let contour = std::mem::take(&mut self.contour);
            self.shape.add_contour(contour);
        }

        self.position = self.start_point;
    }

    ///
    /// Applies a single outline command
    ///
    pub fn apply(&mut self, op: OutlineOp) -> Result<(), ShapeError> {
        match op {
            OutlineOp::Move(point) => self.move_to(point),
            OutlineOp::Line(point) => self.line_to(point)?,
            OutlineOp::Quadratic(control, point) => self.quad_to(control, point)?,
            OutlineOp::Cubic(control1, control2, point) => self.cubic_to(control1, control2, point)?,
            OutlineOp::Close => self.close(),
        }

        Ok(())
    }

    ///
    /// Closes any open contour and returns the finished shape
    ///
    pub fn build(mut self) -> Shape {
        self.close();

        log::trace!(
            "Built shape with {} contours and {} edges",
            self.shape.contours.len(),
            self.shape.edge_count()
        );

        self.shape
    }
}

///
/// Creates a shape from a sequence of outline commands
///
pub fn shape_from_outline(ops: impl IntoIterator<Item = OutlineOp>) -> Result<Shape, ShapeError> {
    let mut builder = ShapeBuilder::new();

    for op in ops {
        builder.apply(op)?;
    }

    Ok(builder.build())
}
