/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Returns 1 for positive values, -1 for negative values and 0 for zero
///
#[inline]
pub fn sign(n: f64) -> i32 {
    (0.0 < n) as i32 - (n < 0.0) as i32
}

///
/// Returns 1 for non-negative values and -1 for negative values
///
#[inline]
pub fn non_zero_sign(n: f64) -> i32 {
    if n >= 0.0 {
        1
    } else {
        -1
    }
}

///
/// Returns the middle of three values
///
#[inline]
pub fn median<T: Copy + PartialOrd>(a: T, b: T, c: T) -> T {
    max(min(a, b), min(max(a, b), c))
}

///
/// Weighted average of `a` and `b` (`weight` = 0 gives `a`, 1 gives `b`)
///
#[inline]
pub fn mix<T>(a: T, b: T, weight: f64) -> T
where
    T: Mul<f64, Output = T> + Add<T, Output = T>,
{
    a * (1.0 - weight) + b * weight
}

#[inline]
fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
