/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// The distance from a pixel to a single contour, as tracked by one of the generators
///
pub(crate) trait ContourDistance: Copy {
    /// The value used when no contour has been found
    const INFINITE: Self;

    /// The single signed distance used to compare this value against others
    fn distance(&self) -> f64;
}

impl ContourDistance for f64 {
    const INFINITE: f64 = -1e240;

    #[inline]
    fn distance(&self) -> f64 {
        *self
    }
}

///
/// Per-channel distances for a multi-channel field, along with their median
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct MultiDistance {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub med: f64,
}

impl MultiDistance {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> MultiDistance {
        MultiDistance { r, g, b, med: median(r, g, b) }
    }
}

impl ContourDistance for MultiDistance {
    const INFINITE: MultiDistance = MultiDistance {
        r: -1e240,
        g: -1e240,
        b: -1e240,
        med: -1e240,
    };

    #[inline]
    fn distance(&self) -> f64 {
        self.med
    }
}

///
/// Combines the distances from each contour into the distance for the whole shape
///
/// `windings` and `contour_distances` are parallel slices. The nearest positive distance to a
/// counter-clockwise contour is compared against the nearest negative distance to a clockwise one and
/// the nearer of the two decides which side of the shape the pixel is on. Among the contours with that
/// winding, the one reaching furthest to that side (without passing the opposite candidate) is chosen,
/// and finally any contour with a different winding that is closer still overrides the result.
///
pub(crate) fn resolve_overlap<TDistance: ContourDistance>(windings: &[i32], contour_distances: &[TDistance]) -> TDistance {
    let mut pos_dist = -1e240f64;
    let mut neg_dist = 1e240f64;
    let mut pos_contour = None;
    let mut neg_contour = None;

    for (idx, (contour_winding, contour_distance)) in windings.iter().zip(contour_distances.iter()).enumerate() {
        let distance = contour_distance.distance();

        if *contour_winding > 0 && distance >= 0.0 && distance.abs() < pos_dist.abs() {
            pos_dist = distance;
            pos_contour = Some(idx);
        }
        if *contour_winding < 0 && distance <= 0.0 && distance.abs() < neg_dist.abs() {
            neg_dist = distance;
            neg_contour = Some(idx);
        }
    }

    let mut result = TDistance::INFINITE;
    let mut winding = 0;

    if pos_dist >= 0.0 && pos_dist.abs() <= neg_dist.abs() {
        if let Some(idx) = pos_contour {
            result = contour_distances[idx];
        }
        winding = 1;

        for (contour_winding, contour_distance) in windings.iter().zip(contour_distances.iter()) {
            let distance = contour_distance.distance();
            if *contour_winding > 0 && distance > result.distance() && distance.abs() < neg_dist.abs() {
                result = *contour_distance;
            }
        }
    } else if neg_dist <= 0.0 && neg_dist.abs() <= pos_dist.abs() {
        if let Some(idx) = neg_contour {
            result = contour_distances[idx];
        }
        winding = -1;

        for (contour_winding, contour_distance) in windings.iter().zip(contour_distances.iter()) {
            let distance = contour_distance.distance();
            if *contour_winding < 0 && distance < result.distance() && distance.abs() < pos_dist.abs() {
                result = *contour_distance;
            }
        }
    }

    for (contour_winding, contour_distance) in windings.iter().zip(contour_distances.iter()) {
        if *contour_winding != winding && contour_distance.distance().abs() < result.distance().abs() {
            result = *contour_distance;
        }
    }

    result
}
