/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bounds::*;

///
/// Trait implemented by types that have a bounding box associated with them
///
pub trait HasBoundingBox {
    ///
    /// Grows a running bounding box so that it encloses this item
    ///
    fn extend_bounds(&self, bounds: &mut Bounds);

    ///
    /// Returns the bounding box that encloses this item
    ///
    fn bounding_box(&self) -> Bounds {
        let mut bounds = Bounds::EMPTY;
        self.extend_bounds(&mut bounds);

        bounds
    }
}
