/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `msdf_field` generates signed distance fields and multi-channel signed distance fields from vector outlines
//!
//! A distance field stores, for every pixel, how far the pixel is from the nearest edge of a shape. Rendering
//! one with a simple threshold at 0.5 reproduces the shape at any scale. A multi-channel field spreads the
//! edges of the shape across the red, green and blue channels, and taking the median of the three channels
//! keeps corners sharp where a single channel would round them off.
//!
//! # Getting started
//!
//! Shapes are usually built from the move/line/curve commands supplied by a font or vector outline, either
//! with a `ShapeBuilder` or with `shape_from_outline()`. Once built, call `normalize()` on the shape, assign
//! colors to its edges using `edge_coloring_simple()` and then call one of the generators:
//!
//! * `generate_sdf()` produces a conventional signed distance field
//! * `generate_pseudo_sdf()` produces a signed pseudo-distance field, where the distance near the end of an edge
//!   is measured to the line extending it
//! * `generate_msdf()` produces a multi-channel field, and also corrects pixels where the channels disagree
//!
//! Each generator also has a `_legacy` form that takes the nearest edge of the whole shape, which is simpler
//! but gives incorrect results where contours overlap each other.
//!
//! ```
//! # use msdf_field::*;
//! #
//! let mut builder = ShapeBuilder::new();
//! builder.move_to(Vector2(0.0, 0.0));
//! builder.line_to(Vector2(1.0, 0.0)).unwrap();
//! builder.quad_to(Vector2(1.0, 1.0), Vector2(0.0, 1.0)).unwrap();
//! builder.close();
//!
//! let mut shape = builder.build();
//! shape.normalize();
//! edge_coloring_simple(&mut shape, 3.0, 0);
//!
//! let mut sdf = Bitmap::<f32>::new(32, 32);
//! generate_sdf(&mut sdf, &shape, 0.125, Vector2(32.0, 32.0), Vector2(0.0, 0.0));
//! ```
//!
//! # Feature flags
//!
//! * `multithreading` - generate rows of the output in parallel using `rayon` (on by default)
//! * `extra_checks` - check internal invariants at runtime (these are always checked in tests)
//!

#[macro_use]
mod test_assert;

mod consts;

pub mod coloring;
pub mod edge;
pub mod error;
pub mod generate;
pub mod geo;
pub mod roots;
pub mod shape;

pub use self::coloring::*;
pub use self::consts::*;
pub use self::edge::*;
pub use self::error::*;
pub use self::generate::*;
pub use self::geo::*;
pub use self::roots::*;
pub use self::shape::*;
