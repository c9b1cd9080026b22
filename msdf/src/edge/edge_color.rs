/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// The set of channels (red, green, blue) an edge belongs to
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum EdgeColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl EdgeColor {
    ///
    /// Creates a color from a channel mask (bits above the lowest three are ignored)
    ///
    #[inline]
    pub fn from_bits(bits: u8) -> EdgeColor {
        match bits & 7 {
            0 => EdgeColor::Black,
            1 => EdgeColor::Red,
            2 => EdgeColor::Green,
            3 => EdgeColor::Yellow,
            4 => EdgeColor::Blue,
            5 => EdgeColor::Magenta,
            6 => EdgeColor::Cyan,
            _ => EdgeColor::White,
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    ///
    /// True if every channel in `other` is also in this color
    ///
    #[inline]
    pub fn contains(self, other: EdgeColor) -> bool {
        (self.bits() & other.bits()) == other.bits()
    }

    ///
    /// True if this color includes at least one of the channels in `other`
    ///
    #[inline]
    pub fn intersects(self, other: EdgeColor) -> bool {
        (self.bits() & other.bits()) != 0
    }
}

impl Default for EdgeColor {
    fn default() -> Self {
        EdgeColor::White
    }
}

impl From<u8> for EdgeColor {
    #[inline]
    fn from(bits: u8) -> EdgeColor {
        EdgeColor::from_bits(bits)
    }
}

impl From<EdgeColor> for u8 {
    #[inline]
    fn from(color: EdgeColor) -> u8 {
        color.bits()
    }
}

impl BitAnd for EdgeColor {
    type Output = EdgeColor;

    #[inline]
    fn bitand(self, rhs: EdgeColor) -> EdgeColor {
        EdgeColor::from_bits(self.bits() & rhs.bits())
    }
}

impl BitOr for EdgeColor {
    type Output = EdgeColor;

    #[inline]
    fn bitor(self, rhs: EdgeColor) -> EdgeColor {
        EdgeColor::from_bits(self.bits() | rhs.bits())
    }
}

impl BitXor for EdgeColor {
    type Output = EdgeColor;

    #[inline]
    fn bitxor(self, rhs: EdgeColor) -> EdgeColor {
        EdgeColor::from_bits(self.bits() ^ rhs.bits())
    }
}
