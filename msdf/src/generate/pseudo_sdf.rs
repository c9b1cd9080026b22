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
/// Generates a single-channel signed pseudo-distance field
///
/// Near the ends of an edge, the distance is measured to the line extending the edge rather than to its end
/// point, which keeps corners sharp when the field is rendered.
///
pub fn generate_pseudo_sdf(output: &mut Bitmap<f32>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2) {
    generate_pseudo_sdf_with_config(output, shape, &GeneratorConfig::new(range, scale, translate))
}

///
/// Generates a single-channel signed pseudo-distance field using the settings in a generator configuration
///
pub fn generate_pseudo_sdf_with_config(output: &mut Bitmap<f32>, shape: &Shape, config: &GeneratorConfig) {
    log::debug!("generate_pseudo_sdf: {}x{} pixels, {} contours", output.width(), output.height(), shape.contours.len());

    let windings = shape.contours.iter().map(|contour| contour.winding()).collect::<Vec<_>>();

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        let mut contour_distances = Vec::with_capacity(shape.contours.len());

        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);

            contour_distances.clear();
            contour_distances.extend(shape.contours.iter().map(|contour| {
                let mut nearest = nearest_edge(&contour.edges, p);
                nearest.to_pseudo_distance(p);
                nearest.min_distance.distance
            }));

            *pixel = config.field_value(resolve_overlap(&windings, &contour_distances));
        }
    });
}
