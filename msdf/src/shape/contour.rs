/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::edge::*;
use crate::geo::*;

use itertools::*;

///
/// A single closed loop of edges
///
/// Each edge starts where the previous one ended, and the last edge ends where the first starts.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Contour {
    pub edges: Vec<EdgeSegment>,
}

impl Contour {
    pub fn new() -> Contour {
        Contour { edges: vec![] }
    }

    pub fn from_edges(edges: Vec<EdgeSegment>) -> Contour {
        Contour { edges }
    }

    ///
    /// Adds an edge to the end of this contour
    ///
    pub fn add_edge(&mut self, edge: impl Into<EdgeSegment>) {
        self.edges.push(edge.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    ///
    /// The orientation of this contour: 1 if it winds counter-clockwise, -1 if it winds clockwise and
    /// 0 if it has no area (or no edges)
    ///
    /// Short contours are sampled at extra points along their edges so that one or two curved edges
    /// still enclose an area.
    ///
    pub fn winding(&self) -> i32 {
        let total = match self.edges.len() {
            0 => return 0,

            1 => {
                let edge = &self.edges[0];
                let a = edge.point(0.0);
                let b = edge.point(1.0 / 3.0);
                let c = edge.point(2.0 / 3.0);

                a.cross(b) + b.cross(c) + c.cross(a)
            }

            2 => {
                let a = self.edges[0].point(0.0);
                let b = self.edges[0].point(0.5);
                let c = self.edges[1].point(0.0);
                let d = self.edges[1].point(0.5);

                a.cross(b) + b.cross(c) + c.cross(d) + d.cross(a)
            }

            _ => self
                .edges
                .iter()
                .map(|edge| edge.start_point())
                .circular_tuple_windows()
                .map(|(a, b): (Vector2, Vector2)| a.cross(b))
                .sum(),
        };

        sign(total)
    }

    ///
    /// Reverses the direction of this contour (which also reverses its winding)
    ///
    pub fn reverse(&mut self) {
        let reversed = self.edges.iter().rev().map(|edge| edge.reversed()).collect();
        self.edges = reversed;
    }
}

impl HasBoundingBox for Contour {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        for edge in self.edges.iter() {
            edge.extend_bounds(bounds);
        }
    }
}
