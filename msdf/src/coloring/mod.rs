/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Edge coloring
//!
//! A multi-channel distance field keeps corners sharp by making sure the two edges that meet at a
//! corner never share all of their channels. `edge_coloring_simple()` finds the corners of each
//! contour and assigns colors so that each corner falls on a change of color.
//!
//! Coloring is driven by an explicit seed, so the same shape, threshold and seed always produce
//! the same colors.
//!

mod edge_coloring_simple;
mod switch_color;

pub use self::edge_coloring_simple::*;
