/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::roots::*;
use crate::consts::*;

use smallvec::*;

use std::f64::consts::PI;

///
/// Solves `a*x + b = 0`
///
pub fn solve_linear(a: f64, b: f64) -> Roots {
    if a.abs() < SOLVER_EPSILON {
        if b == 0.0 {
            Roots::Infinite
        } else {
            Roots::none()
        }
    } else {
        Roots::Finite(smallvec![-b / a])
    }
}

///
/// Solves `a*x^2 + b*x + c = 0`
///
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    if a.abs() < SOLVER_EPSILON {
        return solve_linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant > 0.0 {
        let discriminant = discriminant.sqrt();

        Roots::Finite(smallvec![
            (-b + discriminant) / (2.0 * a),
            (-b - discriminant) / (2.0 * a)
        ])
    } else if discriminant == 0.0 {
        Roots::Finite(smallvec![-b / (2.0 * a)])
    } else {
        Roots::none()
    }
}

///
/// Solves `x^3 + a*x^2 + b*x + c = 0`
///
fn solve_cubic_normed(a: f64, b: f64, c: f64) -> Roots {
    let a2 = a * a;
    let q = (a2 - 3.0 * b) / 9.0;
    let r = (a * (2.0 * a2 - 9.0 * b) + 27.0 * c) / 54.0;
    let r2 = r * r;
    let q3 = q * q * q;

    if r2 < q3 {
        // Three real roots
        let t = (r / q3.sqrt()).clamp(-1.0, 1.0).acos();
        let a = a / 3.0;
        let q = -2.0 * q.sqrt();

        Roots::Finite(smallvec![
            q * (t / 3.0).cos() - a,
            q * ((t + 2.0 * PI) / 3.0).cos() - a,
            q * ((t - 2.0 * PI) / 3.0).cos() - a
        ])
    } else {
        // Cardano: one real root, plus a double root if the imaginary part vanishes
        let mut aa = -(r.abs() + (r2 - q3).sqrt()).powf(1.0 / 3.0);
        if r < 0.0 {
            aa = -aa;
        }
        let bb = if aa == 0.0 { 0.0 } else { q / aa };
        let a = a / 3.0;

        let x0 = aa + bb - a;
        let x1 = -0.5 * (aa + bb) - a;
        let imaginary = 0.5 * 3.0f64.sqrt() * (aa - bb);

        if imaginary.abs() < SOLVER_EPSILON {
            Roots::Finite(smallvec![x0, x1])
        } else {
            Roots::Finite(smallvec![x0])
        }
    }
}

///
/// Solves `a*x^3 + b*x^2 + c*x + d = 0`
///
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots {
    if a.abs() < SOLVER_EPSILON {
        solve_quadratic(b, c, d)
    } else {
        solve_cubic_normed(b / a, c / a, d / a)
    }
}
