/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Real roots of low-degree polynomials
//!
//! The solvers here never fail: a polynomial with no real roots produces an empty list, and a
//! polynomial whose coefficients are all zero (so every value is a root) produces `Roots::Infinite`,
//! which reports a count of `-1`. Callers must check for this case rather than assuming at least
//! one root exists.
//!
//! Leading coefficients that are very close to zero cause the solver to fall through to the
//! next-lowest degree.
//!

mod roots;
mod solve;

pub use self::roots::*;
pub use self::solve::*;
