/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::switch_color::*;
use crate::edge::*;
use crate::geo::*;
use crate::shape::*;

use smallvec::*;

///
/// True if two normalized directions meet at a corner
///
#[inline]
fn is_corner(a_dir: Vector2, b_dir: Vector2, cross_threshold: f64) -> bool {
    a_dir.dot(b_dir) <= 0.0 || a_dir.cross(b_dir).abs() > cross_threshold
}

///
/// Finds the indexes of the edges that start at a corner
///
fn find_corners(contour: &Contour, cross_threshold: f64) -> SmallVec<[usize; 8]> {
    let mut corners = smallvec![];

    if let Some(last) = contour.edges.last() {
        let mut prev_direction = last.direction(1.0);

        for (index, edge) in contour.edges.iter().enumerate() {
            if is_corner(prev_direction.normalize(), edge.direction(0.0).normalize(), cross_threshold) {
                corners.push(index);
            }

            prev_direction = edge.direction(1.0);
        }
    }

    corners
}

///
/// Colors a contour with a single corner
///
/// The colors run from the corner around to the corner again, so the three colors must each get
/// a separate edge. Contours with fewer than three edges have their edges split to make this possible.
///
fn color_teardrop(contour: &mut Contour, corner: usize, seed: &mut u64) {
    let mut colors = [EdgeColor::White, EdgeColor::White, EdgeColor::Black];
    switch_color(&mut colors[0], seed, EdgeColor::Black);
    colors[2] = colors[0];
    switch_color(&mut colors[2], seed, EdgeColor::Black);

    let edge_count = contour.len();

    if edge_count >= 3 {
        let m = edge_count as f64;

        for i in 0..edge_count {
            let color_idx = (3.0 + 2.875 * i as f64 / (m - 1.0) - 1.4375 + 0.5).floor() as i64 - 3;
            contour.edges[(corner + i) % edge_count].set_color(colors[(color_idx + 1) as usize]);
        }
    } else if edge_count >= 1 {
        // Split the edges into thirds, starting from the corner
        let mut parts: SmallVec<[EdgeSegment; 6]> = smallvec![];

        parts.extend(contour.edges[corner].split_in_thirds());
        if edge_count >= 2 {
            parts.extend(contour.edges[1 - corner].split_in_thirds());
        }

        let parts_per_color = parts.len() / 3;
        for (idx, part) in parts.iter_mut().enumerate() {
            part.set_color(colors[idx / parts_per_color]);
        }

        contour.edges = parts.into_vec();
    }
}

///
/// Colors a contour with two or more corners, switching color at each corner
///
fn color_corners(contour: &mut Contour, corners: &[usize], seed: &mut u64) {
    let corner_count = corners.len();
    let start = corners[0];
    let edge_count = contour.len();

    let mut spline = 0;
    let mut color = EdgeColor::White;
    switch_color(&mut color, seed, EdgeColor::Black);
    let initial_color = color;

    for i in 0..edge_count {
        let index = (start + i) % edge_count;

        if spline + 1 < corner_count && corners[spline + 1] == index {
            spline += 1;

            // The last run of edges must also differ from the first run, which it meets at the start corner
            let banned = if spline == corner_count - 1 {
                initial_color
            } else {
                EdgeColor::Black
            };
            switch_color(&mut color, seed, banned);
        }

        contour.edges[index].set_color(color);
    }
}

///
/// Assigns colors to the edges of a shape so it can be used to generate a multi-channel distance field
///
/// `angle_threshold` is the largest angle (in radians) between two edges that is still considered a
/// corner: 3.0 (about 172 degrees) is a typical value. The seed makes the choice of colors reproducible,
/// and 0 is the usual choice.
///
/// Contours with one corner or with a single edge may have their edges split.
///
pub fn edge_coloring_simple(shape: &mut Shape, angle_threshold: f64, seed: u64) {
    let cross_threshold = angle_threshold.sin();
    let mut seed = seed;

    for contour in shape.contours.iter_mut() {
        let corners = find_corners(contour, cross_threshold);

        log::trace!("Coloring contour with {} edges and {} corners", contour.len(), corners.len());

        match corners.len() {
            0 => {
                // Smooth contour
                for edge in contour.edges.iter_mut() {
                    edge.set_color(EdgeColor::White);
                }
            }

            1 => color_teardrop(contour, corners[0], &mut seed),

            _ => color_corners(contour, &corners, &mut seed),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn right_angle_is_a_corner() {
        let cross_threshold = 3.0f64.sin();

        assert!(is_corner(Vector2(1.0, 0.0), Vector2(0.0, 1.0), cross_threshold));
        assert!(!is_corner(Vector2(1.0, 0.0), Vector2(1.0, 0.0), cross_threshold));
    }
}
