/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use std::ops::*;

///
/// A pixel of a multi-channel distance field
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct F32Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl F32Rgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> F32Rgb {
        F32Rgb { r, g, b }
    }

    ///
    /// The median of the three channels, which is the value a renderer reads from a multi-channel field
    ///
    #[inline]
    pub fn median(&self) -> f32 {
        median(self.r, self.g, self.b)
    }
}

///
/// A rectangular grid of pixels, stored row by row
///
#[derive(Clone, PartialEq, Debug)]
pub struct Bitmap<TPixel> {
    width: usize,
    height: usize,
    pixels: Vec<TPixel>,
}

impl<TPixel: Copy + Default> Bitmap<TPixel> {
    ///
    /// Creates a bitmap with every pixel set to the default value
    ///
    pub fn new(width: usize, height: usize) -> Bitmap<TPixel> {
        Bitmap {
            width,
            height,
            pixels: vec![TPixel::default(); width * height],
        }
    }
}

impl<TPixel> Bitmap<TPixel> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// All of the pixels, row by row
    ///
    #[inline]
    pub fn pixels(&self) -> &[TPixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [TPixel] {
        &mut self.pixels
    }

    ///
    /// The pixel at a position, or None if the position is outside the bitmap
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&TPixel> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x)
        } else {
            None
        }
    }

    ///
    /// The pixels in a single row, or None if the row is outside the bitmap
    ///
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[TPixel]> {
        if y < self.height {
            self.pixels.get((y * self.width)..((y + 1) * self.width))
        } else {
            None
        }
    }

    ///
    /// Consumes the bitmap and returns its pixels, row by row
    ///
    pub fn into_pixels(self) -> Vec<TPixel> {
        self.pixels
    }
}

impl<TPixel> Index<(usize, usize)> for Bitmap<TPixel> {
    type Output = TPixel;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &TPixel {
        &self.pixels[y * self.width + x]
    }
}

impl<TPixel> IndexMut<(usize, usize)> for Bitmap<TPixel> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut TPixel {
        &mut self.pixels[y * self.width + x]
    }
}
