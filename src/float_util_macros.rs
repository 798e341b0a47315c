/*

float_util_macros.rs - Utility macros for floating-point comparisons
Copyright (C) 2024  The Sidim Authors

This file is part of Sidim.

Sidim is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, version 3 of the License.

Sidim is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Sidim.  If not, see <https://www.gnu.org/licenses/>.

*/

//! Helper macros for comparing [f64] magnitudes in tests

/// Relative tolerance used when none is given.
pub(crate) const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Assert that two floats agree to within a relative tolerance.
///
/// The tolerance is relative to the larger magnitude, so the same default
/// works for atomic masses and for light-years.
macro_rules! assert_close {
    ( $a:expr, $b:expr ) => {
        $crate::float_util_macros::assert_close!(
            $a,
            $b,
            $crate::float_util_macros::DEFAULT_TOLERANCE
        )
    };
    ( $a:expr, $b:expr, $tol:expr ) => {{
        let (a, b): (f64, f64) = ($a, $b);
        let scale = a.abs().max(b.abs());
        assert!(
            a == b || (a - b).abs() <= $tol * scale,
            "`{}` = {} is not close to `{}` = {}",
            stringify!($a),
            a,
            stringify!($b),
            b,
        );
    }};
}

// Required to be able to import macros in other modules
pub(crate) use assert_close;
