/*

functions.rs - Mathematical functions on quantities for Sidim
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

//! Mathematical functions
//!
//! Each function pairs the scalar operation on the magnitude with the
//! matching [dimension algebra][crate::dimension] on the dimension. They are
//! available both as free functions and as methods on [`Quantity`].

use crate::{dimension::DimensionError, quantity::Quantity};

/// Raise a quantity to an integer power.
///
/// Every dimension exponent is multiplied by `n`. A negative `n` gives the
/// reciprocal, and `n = 0` gives a dimensionless `1` whatever the operand.
///
/// # Errors
///
/// Returns [`DimensionError::ExponentOverflow`] if a scaled exponent leaves
/// the range of `i32`, e.g. an area raised to `i32::MAX`.
pub fn pow(q: Quantity, n: i32) -> Result<Quantity, DimensionError> {
    let dim = q.dim.scale(n)?;
    let mag = if n == 0 { 1.0 } else { q.mag.powf(f64::from(n)) };
    Ok(Quantity::new(mag, dim))
}

/// Square root of a quantity.
///
/// A negative magnitude gives NaN.
///
/// # Errors
///
/// Returns [`DimensionError::OddExponentRoot`] if any exponent of the
/// quantity's dimension is odd.
pub fn sqrt(q: Quantity) -> Result<Quantity, DimensionError> {
    let dim = q.dim.halve()?;
    Ok(Quantity::new(q.mag.sqrt(), dim))
}

/// Absolute value of a quantity. The dimension is unchanged.
pub fn abs(q: Quantity) -> Quantity {
    Quantity::new(q.mag.abs(), q.dim)
}

impl Quantity {
    /// See [`pow()`].
    pub fn powi(self, n: i32) -> Result<Self, DimensionError> {
        pow(self, n)
    }

    /// See [`sqrt()`].
    pub fn sqrt(self) -> Result<Self, DimensionError> {
        sqrt(self)
    }

    /// See [`abs()`].
    pub fn abs(self) -> Self {
        abs(self)
    }
}
