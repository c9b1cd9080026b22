/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bitmap::*;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

///
/// Calls `row_fn(y, row)` for every row of a bitmap, where `y` is the row's position in shape space
///
/// When `inverse_y_axis` is set, the first row of storage is the top of the shape rather than the bottom.
///
pub(crate) fn scan_rows<TPixel, TRowFn>(output: &mut Bitmap<TPixel>, inverse_y_axis: bool, row_fn: TRowFn)
where
    TPixel: Send,
    TRowFn: Fn(usize, &mut [TPixel]) + Send + Sync,
{
    let width = output.width();
    let height = output.height();

    if width == 0 || height == 0 {
        return;
    }

    test_assert!(output.pixels().len() == width * height);

    let shape_y = move |row: usize| if inverse_y_axis { height - 1 - row } else { row };

    #[cfg(feature = "multithreading")]
    {
        output
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, pixels)| row_fn(shape_y(row), pixels));
    }

    #[cfg(not(feature = "multithreading"))]
    {
        output
            .pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .for_each(|(row, pixels)| row_fn(shape_y(row), pixels));
    }
}
