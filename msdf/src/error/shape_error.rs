/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Problems with the geometry of a shape
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ShapeError {
    /// An edge was added to an outline before a start point was set with a move
    NoCurrentPoint,

    /// An edge does not start where the previous edge in its contour ended
    Discontinuous { contour: usize, edge: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NoCurrentPoint => write!(f, "edge added before the outline had a start point"),
            ShapeError::Discontinuous { contour, edge } => {
                write!(f, "edge {} of contour {} does not start where the previous edge ends", edge, contour)
            }
        }
    }
}

impl Error for ShapeError {}
