/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::contour::*;
use crate::edge::*;
use crate::error::*;
use crate::geo::*;

///
/// A vector outline made up of closed contours
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Shape {
    pub contours: Vec<Contour>,

    /// True if the shape's y axis points down: rows of generated bitmaps are then written bottom to top
    pub inverse_y_axis: bool,
}

impl Shape {
    pub fn new() -> Shape {
        Shape {
            contours: vec![],
            inverse_y_axis: false,
        }
    }

    pub fn from_contours(contours: Vec<Contour>) -> Shape {
        Shape {
            contours,
            inverse_y_axis: false,
        }
    }

    ///
    /// Adds a contour to this shape
    ///
    pub fn add_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    ///
    /// The total number of edges in all of the contours
    ///
    pub fn edge_count(&self) -> usize {
        self.contours.iter().map(|contour| contour.len()).sum()
    }

    ///
    /// The bounding box of every contour in this shape
    ///
    pub fn bounds(&self) -> Bounds {
        self.bounding_box()
    }

    ///
    /// Prepares the shape for distance field generation
    ///
    /// Corner detection needs at least two edges in a contour to compare directions, so any contour
    /// made from a single edge is split into three.
    ///
    pub fn normalize(&mut self) {
        for contour in self.contours.iter_mut() {
            if contour.len() == 1 {
                contour.edges = contour.edges[0].split_in_thirds().to_vec();
            }
        }
    }

    ///
    /// Checks that every contour is closed and continuous, reporting the first edge that is not
    ///
    pub fn check(&self) -> Result<(), ShapeError> {
        for (contour_idx, contour) in self.contours.iter().enumerate() {
            let mut corner = match contour.edges.last() {
                Some(last) => last.end_point(),
                None => continue,
            };

            for (edge_idx, edge) in contour.edges.iter().enumerate() {
                if edge.start_point() != corner {
                    return Err(ShapeError::Discontinuous {
                        contour: contour_idx,
                        edge: edge_idx,
                    });
                }

                corner = edge.end_point();
            }
        }

        Ok(())
    }

    ///
    /// Performs basic checks to determine if this represents a valid shape
    ///
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Shape failed validation: {}", err);
                false
            }
        }
    }
}

impl HasBoundingBox for Shape {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        for contour in self.contours.iter() {
            contour.extend_bounds(bounds);
        }
    }
}
