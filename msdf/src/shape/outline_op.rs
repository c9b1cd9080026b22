/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Commands that describe an outline, in the form produced by font outline decomposition
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutlineOp {
    /// Starts a new contour at a point
    Move(Vector2),

    /// Straight line to a point
    Line(Vector2),

    /// Quadratic curve to a point, with one control point
    Quadratic(Vector2, Vector2),

    /// Cubic curve to a point, with two control points
    Cubic(Vector2, Vector2, Vector2),

    /// Closes the current contour
    Close,
}
