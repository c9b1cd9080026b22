/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Contours and shapes
//!
//! A `Contour` is a closed loop of edges and a `Shape` is a set of contours that together describe
//! an outline such as a font glyph. Contours may overlap or nest: which areas are inside is decided
//! by each contour's winding, so holes are made by winding the inner contour the opposite way.
//!
//! ```
//! # use msdf_field::*;
//! #
//! let mut builder = ShapeBuilder::new();
//! builder.move_to(Vector2(0.0, 0.0));
//! builder.line_to(Vector2(1.0, 0.0)).unwrap();
//! builder.line_to(Vector2(1.0, 1.0)).unwrap();
//! builder.line_to(Vector2(0.0, 1.0)).unwrap();
//! builder.close();
//!
//! let shape = builder.build();
//! assert!(shape.validate());
//! assert!(shape.contours[0].winding() == 1);
//! ```
//!

mod contour;
mod outline_op;
mod shape;
mod shape_builder;

pub use self::contour::*;
pub use self::outline_op::*;
pub use self::shape::*;
pub use self::shape_builder::*;
