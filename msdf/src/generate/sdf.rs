/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bitmap::*;
use super::config::*;
use super::edge_point::*;
use super::overlap::*;
use super::scan::*;
use crate::geo::*;
use crate::shape::*;

///
/// Generates a conventional single-channel signed distance field
///
/// `output` is filled in place: a pixel at `(x, y)` samples the shape at `(x + 0.5, y + 0.5) / scale - translate`.
///
pub fn generate_sdf(output: &mut Bitmap<f32>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2) {
    generate_sdf_with_config(output, shape, &GeneratorConfig::new(range, scale, translate))
}

///
/// Generates a single-channel signed distance field using the settings in a generator configuration
///
pub fn generate_sdf_with_config(output: &mut Bitmap<f32>, shape: &Shape, config: &GeneratorConfig) {
    log::debug!("generate_sdf: {}x{} pixels, {} contours", output.width(), output.height(), shape.contours.len());

    let windings = shape.contours.iter().map(|contour| contour.winding()).collect::<Vec<_>>();

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        let mut contour_distances = Vec::with_capacity(shape.contours.len());

        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);

            contour_distances.clear();
            contour_distances.extend(shape.contours.iter().map(|contour| nearest_edge(&contour.edges, p).min_distance.distance));

            *pixel = config.field_value(resolve_overlap(&windings, &contour_distances));
        }
    });
}
