/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::edge::*;
use crate::geo::*;

///
/// Tracks the nearest edge found so far while scanning a contour or a shape
///
#[derive(Copy, Clone, Debug)]
pub(crate) struct EdgePoint<'a> {
    pub min_distance: SignedDistance,
    pub near_edge: Option<&'a EdgeSegment>,
    pub near_param: f64,
}

impl<'a> Default for EdgePoint<'a> {
    fn default() -> Self {
        EdgePoint {
            min_distance: SignedDistance::INFINITE,
            near_edge: None,
            near_param: 0.0,
        }
    }
}

impl<'a> EdgePoint<'a> {
    ///
    /// Replaces the nearest edge if the supplied distance is strictly closer
    ///
    #[inline]
    pub fn consider(&mut self, edge: &'a EdgeSegment, distance: SignedDistance, param: f64) {
        if distance < self.min_distance {
            self.min_distance = distance;
            self.near_edge = Some(edge);
            self.near_param = param;
        }
    }

    ///
    /// Takes the nearest edge from another point if it's strictly closer than this one
    ///
    #[inline]
    pub fn merge(&mut self, other: &EdgePoint<'a>) {
        if other.min_distance < self.min_distance {
            *self = *other;
        }
    }

    ///
    /// Extends the nearest edge beyond its end points, turning the distance into a pseudo-distance
    ///
    #[inline]
    pub fn to_pseudo_distance(&mut self, origin: Vector2) {
        if let Some(edge) = self.near_edge {
            edge.distance_to_pseudo_distance(&mut self.min_distance, origin, self.near_param);
        }
    }
}

/// The channels of a multi-channel field, in output order
pub(crate) const CHANNELS: [EdgeColor; 3] = [EdgeColor::Red, EdgeColor::Green, EdgeColor::Blue];

///
/// Finds the nearest of a set of edges to a point
///
pub(crate) fn nearest_edge<'a>(edges: impl IntoIterator<Item = &'a EdgeSegment>, origin: Vector2) -> EdgePoint<'a> {
    let mut nearest = EdgePoint::default();

    for edge in edges {
        let (distance, param) = edge.signed_distance(origin);
        nearest.consider(edge, distance, param);
    }

    nearest
}

///
/// Finds the nearest edge to a point separately for each of the red, green and blue channels
///
/// An edge is only considered for a channel if its color includes that channel.
///
pub(crate) fn nearest_edge_per_channel<'a>(edges: impl IntoIterator<Item = &'a EdgeSegment>, origin: Vector2, nearest: &mut [EdgePoint<'a>; 3]) {
    for edge in edges {
        let (distance, param) = edge.signed_distance(origin);
        let color = edge.color();

        for (channel, point) in CHANNELS.iter().zip(nearest.iter_mut()) {
            if color.intersects(*channel) {
                point.consider(edge, distance, param);
            }
        }
    }
}
