/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::edge::*;

/// Colors that a new run of edges can start with
const START_COLORS: [EdgeColor; 3] = [EdgeColor::Cyan, EdgeColor::Magenta, EdgeColor::Yellow];

///
/// Changes a color to a different two-channel color, avoiding any single channel it shares with `banned`
///
/// Each call consumes some of the seed, which decides which of the possible colors is picked.
///
pub(crate) fn switch_color(color: &mut EdgeColor, seed: &mut u64, banned: EdgeColor) {
    let combined = *color & banned;

    if matches!(combined, EdgeColor::Red | EdgeColor::Green | EdgeColor::Blue) {
        *color = combined ^ EdgeColor::White;
        return;
    }

    if *color == EdgeColor::Black || *color == EdgeColor::White {
        *color = START_COLORS[(*seed % 3) as usize];
        *seed /= 3;
        return;
    }

    let shifted = (color.bits() as u32) << (1 + (*seed & 1));
    *color = EdgeColor::from_bits(((shifted | (shifted >> 3)) & 7) as u8);
    *seed >>= 1;
}
