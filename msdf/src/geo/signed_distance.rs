/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;

///
/// A signed distance paired with an alignment score
///
/// Distances are ordered by magnitude. When two magnitudes are exactly equal (which happens when two
/// adjacent edges share the endpoint nearest to a point), the one with the lower alignment score is
/// closer. Interior points of a curve have an alignment of 0, so they always win such ties against
/// endpoints.
///
#[derive(Copy, Clone, Debug)]
pub struct SignedDistance {
    /// The distance, positive if the point is to the left of the edge
    pub distance: f64,

    /// How closely the offset to the point lines up with the edge's end tangent (0 for interior points)
    pub dot: f64,
}

impl SignedDistance {
    /// Farther away than any real distance: the starting point for a nearest-edge search
    pub const INFINITE: SignedDistance = SignedDistance {
        distance: -1e240,
        dot: 1.0,
    };

    #[inline]
    pub fn new(distance: f64, dot: f64) -> SignedDistance {
        SignedDistance { distance, dot }
    }
}

impl Default for SignedDistance {
    fn default() -> Self {
        SignedDistance::INFINITE
    }
}

///
/// Two signed distances are equal when they are equally close, whichever side of the edge they are on
///
impl PartialEq for SignedDistance {
    #[inline]
    fn eq(&self, other: &SignedDistance) -> bool {
        self.distance.abs() == other.distance.abs() && self.dot == other.dot
    }
}

impl PartialOrd for SignedDistance {
    #[inline]
    fn partial_cmp(&self, other: &SignedDistance) -> Option<Ordering> {
        match self.distance.abs().partial_cmp(&other.distance.abs()) {
            Some(Ordering::Equal) => self.dot.partial_cmp(&other.dot),
            ordering => ordering,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn magnitude_is_compared_first() {
        assert!(SignedDistance::new(-1.0, 0.9) < SignedDistance::new(2.0, 0.0));
        assert!(SignedDistance::new(1.0, 0.0) < SignedDistance::INFINITE);
    }

    #[test]
    fn alignment_breaks_ties() {
        assert!(SignedDistance::new(1.0, 0.0) < SignedDistance::new(-1.0, 0.5));
        assert!(!(SignedDistance::new(1.0, 0.5) < SignedDistance::new(-1.0, 0.5)));
    }
}
