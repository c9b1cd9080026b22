/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Single-scan generators. These treat the shape as one set of edges and take the nearest
//! edge overall, which works well for simple outlines but gives wrong results where contours overlap.
//!

use super::bitmap::*;
use super::config::*;
use super::edge_point::*;
use super::error_correction::*;
use super::scan::*;
use crate::geo::*;
use crate::shape::*;

///
/// Generates a single-channel signed distance field from the nearest edge of the whole shape
///
pub fn generate_sdf_legacy(output: &mut Bitmap<f32>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2) {
    let config = GeneratorConfig::new(range, scale, translate);

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);
            let nearest = nearest_edge(shape.contours.iter().flat_map(|contour| contour.edges.iter()), p);

            *pixel = config.field_value(nearest.min_distance.distance);
        }
    });
}

///
/// Generates a single-channel signed pseudo-distance field from the nearest edge of the whole shape
///
pub fn generate_pseudo_sdf_legacy(output: &mut Bitmap<f32>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2) {
    let config = GeneratorConfig::new(range, scale, translate);

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);
            let mut nearest = nearest_edge(shape.contours.iter().flat_map(|contour| contour.edges.iter()), p);
            nearest.to_pseudo_distance(p);

            *pixel = config.field_value(nearest.min_distance.distance);
        }
    });
}

///
/// Generates a multi-channel signed distance field from the nearest edge of each color in the whole shape
///
pub fn generate_msdf_legacy(output: &mut Bitmap<F32Rgb>, shape: &Shape, range: f64, scale: Vector2, translate: Vector2, edge_threshold: f64) {
    let config = GeneratorConfig::new(range, scale, translate).with_edge_threshold(edge_threshold);

    scan_rows(output, shape.inverse_y_axis, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let p = config.pixel_position(x, y);
            let mut nearest = [EdgePoint::default(); 3];

            nearest_edge_per_channel(shape.contours.iter().flat_map(|contour| contour.edges.iter()), p, &mut nearest);
            nearest.iter_mut().for_each(|channel| channel.to_pseudo_distance(p));

            *pixel = F32Rgb {
                r: config.field_value(nearest[0].min_distance.distance),
                g: config.field_value(nearest[1].min_distance.distance),
                b: config.field_value(nearest[2].min_distance.distance),
            };
        }
    });

    if let Some(threshold) = config.error_correction_threshold() {
        msdf_error_correction(output, threshold);
    }
}
