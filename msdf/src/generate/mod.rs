/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Distance field generation
//!
//! The generators sample a shape at the centre of every pixel of a bitmap. A pixel at `(x, y)` is
//! mapped into shape space as `(x + 0.5, y + 0.5) / scale - translate`, and the signed distance found
//! there is stored as `distance / range + 0.5`: 0.5 is exactly on an edge, larger values are inside
//! the shape and smaller values are outside it. Values are not clamped.
//!
//! ```
//! # use msdf_field::*;
//! #
//! let mut shape = shape_from_outline(vec![
//!     OutlineOp::Move(Vector2(0.0, 0.0)),
//!     OutlineOp::Line(Vector2(1.0, 0.0)),
//!     OutlineOp::Line(Vector2(1.0, 1.0)),
//!     OutlineOp::Line(Vector2(0.0, 1.0)),
//!     OutlineOp::Close,
//! ]).unwrap();
//!
//! shape.normalize();
//! edge_coloring_simple(&mut shape, 3.0, 0);
//!
//! let mut msdf = Bitmap::<F32Rgb>::new(16, 16);
//! generate_msdf(&mut msdf, &shape, 0.25, Vector2(16.0, 16.0), Vector2(0.0, 0.0), DEFAULT_EDGE_THRESHOLD);
//!
//! assert!(msdf[(8, 8)].median() > 0.5);
//! ```
//!
//! When contours overlap, each contour's own winding decides which side of it is inside, and the
//! contour nearest to the pixel that disagrees with the overall result is allowed to override it.
//! This gives correct results for shapes with holes and for self-overlapping glyphs. The `_legacy`
//! functions skip this step and simply use the nearest edge of the whole shape.
//!
//! Rows are generated in parallel when the `multithreading` feature is enabled.
//!

mod bitmap;
mod config;
mod edge_point;
mod error_correction;
mod legacy;
mod msdf;
mod overlap;
mod pseudo_sdf;
mod scan;
mod sdf;

pub use self::bitmap::*;
pub use self::config::*;
pub use self::error_correction::*;
pub use self::legacy::*;
pub use self::msdf::*;
pub use self::pseudo_sdf::*;
pub use self::sdf::*;
