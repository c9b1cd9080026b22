/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bitmap::*;
use super::config::*;
use super::edge_point::*;
use super::error_correction::*;
use super::overlap::*;
use super::scan::*;
use crate::geo::*;
use crate::shape::*;

///
/// Generates a multi-channel signed distance field
///
/// Edge colors must already have been assigned (see `edge_coloring_simple`). Each channel stores the
/// pseudo-distance to the nearest edge of that channel's color, and the median of the three channels
/// reproduces the shape with sharp corners.
///
/// Error correction runs afterwards unless `edge_threshold` is 0 or less (`DEFAULT_EDGE_THRESHOLD` is
/// the usual value).
///
pub fn generate_msdf(output: &mut Bitmap<F32Rgb>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2, edge_threshold: f64) {
    let config = GeneratorConfig::new(range, scale, translate).with_edge_threshold(edge_threshold);
    generate_msdf_with_config(output, shape, &config)
}

///
/// Generates a multi-channel signed distance field using the settings in a generator configuration
///
pub fn generate_msdf_with_config(output: &mut Bitmap<F32Rgb>, shape: &Shape, config: &GeneratorConfig) {
    log::debug!("generate_msdf: {}x{} pixels, {} contours", output.width(), output.height(), shape.contours.len());

    let windings = shape.contours.iter().map(|contour| contour.winding()).collect::<Vec<_>>();

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        let mut contour_distances = Vec::with_capacity(shape.contours.len());

        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);
            let mut shape_nearest = [EdgePoint::default(); 3];

            contour_distances.clear();
            for contour in shape.contours.iter() {
                let mut nearest = [EdgePoint::default(); 3];
                nearest_edge_per_channel(&contour.edges, p, &mut nearest);

                for (shape_channel, contour_channel) in shape_nearest.iter_mut().zip(nearest.iter()) {
                    shape_channel.merge(contour_channel);
                }

                nearest.iter_mut().for_each(|channel| channel.to_pseudo_distance(p));
                contour_distances.push(MultiDistance::new(
                    nearest[0].min_distance.distance,
                    nearest[1].min_distance.distance,
                    nearest[2].min_distance.distance,
                ));
            }

            shape_nearest.iter_mut().for_each(|channel| channel.to_pseudo_distance(p));

            let mut distance = resolve_overlap(&windings, &contour_distances);

            // When the nearest edges of the whole shape agree with the chosen contour, their channels are used
            let shape_distance = MultiDistance::new(
                shape_nearest[0].min_distance.distance,
                shape_nearest[1].min_distance.distance,
                shape_nearest[2].min_distance.distance,
            );
            if shape_distance.med == distance.med {
                distance = shape_distance;
            }

            *pixel = F32Rgb {
                r: config.field_value(distance.r),
                g: config.field_value(distance.g),
                b: config.field_value(distance.b),
            };
        }
    });

    if let Some(threshold) = config.error_correction_threshold() {
        msdf_error_correction(output, threshold);
    }
}
