/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bitmap::*;
use crate::geo::*;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

///
/// Number of channels in a pixel that are on the inside of the shape
///
#[inline]
fn inside_count(pixel: &F32Rgb) -> usize {
    [pixel.r, pixel.g, pixel.b].iter().filter(|channel| **channel > 0.5).count()
}

///
/// True if every channel is strictly on the same side of the edge
///
#[inline]
fn is_uniform(pixel: &F32Rgb) -> bool {
    (pixel.r > 0.5 && pixel.g > 0.5 && pixel.b > 0.5) || (pixel.r < 0.5 && pixel.g < 0.5 && pixel.b < 0.5)
}

///
/// True if a channel moves from one side of the edge to the other between two pixels
///
#[inline]
fn flips(a: f32, b: f32) -> bool {
    (a > 0.5) != (b > 0.5) && (a < 0.5) != (b < 0.5)
}

///
/// Determines whether a pixel and its neighbour have a spurious discontinuity between them
///
/// This happens when both pixels agree about being inside or outside the shape, but two of their channels
/// swap sides by more than the threshold. Of the pair, only the pixel whose remaining channel is further
/// from the edge is reported.
///
fn pixel_clash(a: &F32Rgb, b: &F32Rgb, threshold: f64) -> bool {
    if (inside_count(a) >= 2) != (inside_count(b) >= 2) {
        return false;
    }

    // A change between 0 and 1 or between 2 and 3 channels is a real edge
    if is_uniform(a) || is_uniform(b) {
        return false;
    }

    // (a, b) pairs for the two changing channels, then the channel that stays put
    let (first, second, remaining) = if flips(a.r, b.r) {
        if flips(a.g, b.g) {
            ((a.r, b.r), (a.g, b.g), (a.b, b.b))
        } else if flips(a.b, b.b) {
            ((a.r, b.r), (a.b, b.b), (a.g, b.g))
        } else {
            return false;
        }
    } else if flips(a.g, b.g) && flips(a.b, b.b) {
        ((a.g, b.g), (a.b, b.b), (a.r, b.r))
    } else {
        return false;
    };

    ((first.0 - first.1).abs() as f64) >= threshold
        && ((second.0 - second.1).abs() as f64) >= threshold
        && (remaining.0 - 0.5).abs() >= (remaining.1 - 0.5).abs()
}

///
/// True if the pixel at (x, y) clashes with any of its horizontal or vertical neighbours
///
fn is_clashing(bitmap: &Bitmap<F32Rgb>, x: usize, y: usize, threshold: Vector2) -> bool {
    let pixel = &bitmap[(x, y)];
    let width = bitmap.width();
    let height = bitmap.height();

    (x > 0 && pixel_clash(pixel, &bitmap[(x - 1, y)], threshold.x()))
        || (x + 1 < width && pixel_clash(pixel, &bitmap[(x + 1, y)], threshold.x()))
        || (y > 0 && pixel_clash(pixel, &bitmap[(x, y - 1)], threshold.y()))
        || (y + 1 < height && pixel_clash(pixel, &bitmap[(x, y + 1)], threshold.y()))
}

///
/// Finds every clashing pixel in a bitmap without modifying it
///
fn find_clashes(bitmap: &Bitmap<F32Rgb>, threshold: Vector2) -> Vec<(usize, usize)> {
    let width = bitmap.width();

    #[cfg(feature = "multithreading")]
    let rows = (0..bitmap.height()).into_par_iter();

    #[cfg(not(feature = "multithreading"))]
    let rows = 0..bitmap.height();

    #[cfg(feature = "multithreading")]
    let clashes = rows.flat_map_iter(|y| (0..width).filter(move |x| is_clashing(bitmap, *x, y, threshold)).map(move |x| (x, y)));

    #[cfg(not(feature = "multithreading"))]
    let clashes = rows.flat_map(|y| (0..width).filter(move |x| is_clashing(bitmap, *x, y, threshold)).map(move |x| (x, y)));

    clashes.collect()
}

///
/// Removes artifacts from a multi-channel distance field where neighbouring pixels disagree about which
/// channels are inside the shape
///
/// Every clashing pixel is found first, and only then are they replaced with the median of their channels, so
/// fixing one pixel never affects whether its neighbours are detected. `threshold` is the minimum change in
/// a channel (per pixel, in field units) along the x and y axes for it to count as a discontinuity.
///
pub fn msdf_error_correction(output: &mut Bitmap<F32Rgb>, threshold: Vector2) {
    let clashes = find_clashes(output, threshold);

    log::trace!("msdf_error_correction: {} clashing pixels", clashes.len());

    for (x, y) in clashes {
        let pixel = &mut output[(x, y)];
        let median = pixel.median();

        *pixel = F32Rgb::new(median, median, median);
    }
}
