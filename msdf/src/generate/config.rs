/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

///
/// Settings for mapping a shape onto the pixels of a distance field
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GeneratorConfig {
    /// The distance (in shape units) that maps to a change of 1.0 in the output
    pub range: f64,

    /// Pixels per shape unit along each axis
    pub scale: Vector2,

    /// Offset applied to shape coordinates after scaling the pixel position
    pub translate: Vector2,

    /// Threshold for multi-channel error correction, 0 or less to turn the correction off
    pub edge_threshold: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            range: 1.0,
            scale: Vector2(1.0, 1.0),
            translate: Vector2(0.0, 0.0),
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl GeneratorConfig {
    pub fn new(range: f64, scale: Vector2, translate: Vector2) -> GeneratorConfig {
        GeneratorConfig {
            range,
            scale,
            translate,
            ..GeneratorConfig::default()
        }
    }

    pub fn with_edge_threshold(self, edge_threshold: f64) -> GeneratorConfig {
        GeneratorConfig {
            edge_threshold,
            ..self
        }
    }

    ///
    /// The position in shape space of the centre of a pixel
    ///
    #[inline]
    pub fn pixel_position(&self, x: usize, y: usize) -> Vector2 {
        Vector2(x as f64 + 0.5, y as f64 + 0.5) / self.scale - self.translate
    }

    ///
    /// Converts a distance in shape units to a field value
    ///
    #[inline]
    pub fn field_value(&self, distance: f64) -> f32 {
        (distance / self.range + 0.5) as f32
    }

    ///
    /// The per-axis threshold (in field units) used by error correction, if it's enabled
    ///
    pub fn error_correction_threshold(&self) -> Option<Vector2> {
        if self.edge_threshold > 0.0 {
            Some(self.edge_threshold / (self.scale * self.range))
        } else {
            None
        }
    }
}
