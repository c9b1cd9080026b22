/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Edge segments
//!
//! An edge is one piece of a contour: a line, a quadratic bezier or a cubic bezier. `EdgeSegment`
//! is a closed enum over the three kinds, and each kind also exists as its own type. All of them
//! implement `EdgeCurve`, which provides the point, direction and signed distance queries used by
//! the field generators.
//!
//! Signed distances are positive when the point lies to the left of the edge's direction of travel.
//! A contour that winds counter-clockwise therefore has positive distances inside it.
//!
//! Every edge carries an `EdgeColor` that says which channels of a multi-channel distance field
//! it contributes to.
//!

mod cubic;
mod edge_color;
mod edge_curve;
mod edge_segment;
mod linear;
mod quadratic;

pub use self::cubic::*;
pub use self::edge_color::*;
pub use self::edge_curve::*;
pub use self::edge_segment::*;
pub use self::linear::*;
pub use self::quadratic::*;
