/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Vector2` is the 2D double-precision vector used throughout the crate for control points,
//! directions and sample positions. `Bounds` describes an axis-aligned bounding box and
//! `HasBoundingBox` is implemented by edges, contours and shapes so a running box can be grown
//! over any of them.
//!
//! `SignedDistance` is the value that nearest-edge searches minimize.
//!
//! The scalar helpers (`sign`, `non_zero_sign`, `median`, `mix`) are shared by the distance
//! queries and the field generators.
//!

mod arithmetic;
mod bounds;
mod has_bounds;
mod signed_distance;
mod vector2;

pub use self::arithmetic::*;
pub use self::bounds::*;
pub use self::has_bounds::*;
pub use self::signed_distance::*;
pub use self::vector2::*;
