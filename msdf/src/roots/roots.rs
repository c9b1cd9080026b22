/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::*;

///
/// The real solutions of a polynomial equation
///
#[derive(Clone, Debug, PartialEq)]
pub enum Roots {
    /// Every value is a solution (all of the coefficients were zero)
    Infinite,

    /// A finite list of real solutions (possibly empty)
    Finite(SmallVec<[f64; 3]>),
}

impl Roots {
    ///
    /// No real solutions
    ///
    #[inline]
    pub fn none() -> Roots {
        Roots::Finite(smallvec![])
    }

    ///
    /// The number of solutions, or -1 if there are infinitely many
    ///
    #[inline]
    pub fn count(&self) -> i32 {
        match self {
            Roots::Infinite => -1,
            Roots::Finite(roots) => roots.len() as i32,
        }
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Roots::Infinite)
    }

    ///
    /// The finite solutions (empty when there are infinitely many)
    ///
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Roots::Infinite => &[],
            Roots::Finite(roots) => roots,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl '_ + Iterator<Item = f64> {
        self.as_slice().iter().copied()
    }
}
