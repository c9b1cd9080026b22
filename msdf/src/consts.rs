/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Leading coefficients smaller than this are treated as zero by the polynomial solvers
pub const SOLVER_EPSILON: f64 = 1e-14;

/// Number of starting points for the iterative nearest-point search on a cubic curve
pub const CUBIC_SEARCH_STARTS: usize = 4;

/// Number of Newton steps taken from each starting point on a cubic curve (more steps give more precision)
pub const CUBIC_SEARCH_STEPS: usize = 4;

/// Default edge threshold for MSDF error correction (slightly above 1 so the correction is always active)
pub const DEFAULT_EDGE_THRESHOLD: f64 = 1.00000001;
