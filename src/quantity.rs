/*

quantity.rs - Dimensioned quantities for Sidim
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

/*!
# Physical quantities

A [`Quantity`] is a magnitude in SI base units tagged with the [`Dimension`]
of the physical quantity it measures.

Multiplication and division always succeed, and derive the dimension of the
result from the operands. Addition, subtraction and comparison only make
sense between quantities of the same dimension, so they return a
[`Result`] which holds a [`DimensionError`] when the dimensions differ:

```
use sidim::{dimension::Dimension, unit::UnitLiterals};

let distance = 10.0.m();
let time = 2.0.s();
let speed = distance / time;
assert_eq!(speed.magnitude(), 5.0);
assert_eq!(speed.dimension(), Dimension::VELOCITY);

assert!((distance + time).is_err());
```

Floating-point edge cases are not errors. Dividing by a zero-magnitude
quantity gives an infinite or NaN magnitude, which propagates through later
arithmetic exactly as IEEE-754 specifies.
*/

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{
    dimension::{Dimension, DimensionError},
    operation::Operation,
};

/// # Physical quantity
///
/// Represents an amount of some physical quantity, e.g. *5 meters*.
///
/// The magnitude is always stored in SI base units; unit scale factors are
/// applied once at construction (see [`crate::unit`]) and never kept. There is
/// deliberately no `From<f64>` implementation, so a bare number can't turn into
/// a quantity by accident.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub(crate) mag: f64,
    pub(crate) dim: Dimension,
}

impl Quantity {
    /// Create a new [Quantity] from a magnitude in SI base units.
    pub const fn new(mag: f64, dim: Dimension) -> Self {
        Self { mag, dim }
    }

    /// Create a dimensionless [Quantity], i.e. a plain number.
    pub const fn dimensionless(mag: f64) -> Self {
        Self::new(mag, Dimension::new())
    }

    /// Magnitude in SI base units.
    pub const fn magnitude(&self) -> f64 {
        self.mag
    }

    pub const fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dim.is_dimensionless()
    }

    /// # Add two quantities of the same dimension.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(self, rhs: Self) -> Result<Self, DimensionError> {
        self.dim.ensure_same(rhs.dim, Operation::Add)?;
        Ok(Self::new(self.mag + rhs.mag, self.dim))
    }

    /// # Subtract a quantity of the same dimension.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, DimensionError> {
        self.dim.ensure_same(rhs.dim, Operation::Subtract)?;
        Ok(Self::new(self.mag - rhs.mag, self.dim))
    }

    /// # Multiply two quantities.
    ///
    /// Same as `*`, which panics where this returns an error.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::ExponentOverflow`] if a dimension exponent
    /// leaves the range of `i32`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, DimensionError> {
        Ok(Self::new(self.mag * rhs.mag, self.dim.add(rhs.dim)?))
    }

    /// # Divide by a quantity.
    ///
    /// Same as `/`, which panics where this returns an error.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::ExponentOverflow`] if a dimension exponent
    /// leaves the range of `i32`.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DimensionError> {
        Ok(Self::new(self.mag / rhs.mag, self.dim.subtract(rhs.dim)?))
    }

    /// # Three-way comparison.
    ///
    /// Every relational test on quantities is derived from this function.
    /// The inner [`Option`] follows [`f64::partial_cmp`]: `+0.0` and `-0.0`
    /// compare equal, and anything compared with NaN is unordered.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] if the dimensions differ.
    pub fn compare(&self, other: &Self) -> Result<Option<Ordering>, DimensionError> {
        self.dim.ensure_same(other.dim, Operation::Compare)?;
        Ok(self.mag.partial_cmp(&other.mag))
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(self.compare(other)? == Some(Ordering::Equal))
    }

    pub fn try_ne(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(self.compare(other)? != Some(Ordering::Equal))
    }

    pub fn try_lt(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(matches!(self.compare(other)?, Some(Ordering::Less)))
    }

    pub fn try_le(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(matches!(
            self.compare(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn try_gt(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(matches!(self.compare(other)?, Some(Ordering::Greater)))
    }

    pub fn try_ge(&self, other: &Self) -> Result<bool, DimensionError> {
        Ok(matches!(
            self.compare(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

// Quantities of different dimensions are never equal, and never ordered.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.mag == other.mag
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok().flatten()
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.mag * rhs.mag, self.dim * rhs.dim)
    }
}

impl Div for Quantity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.mag / rhs.mag, self.dim / rhs.dim)
    }
}

impl Add for Quantity {
    type Output = Result<Self, DimensionError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Quantity {
    type Output = Result<Self, DimensionError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.mag, self.dim)
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.mag * rhs, self.dim)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Self::Output {
        Quantity::new(self * rhs.mag, rhs.dim)
    }
}

impl Div<f64> for Quantity {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.mag / rhs, self.dim)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Self::Output {
        Quantity::new(self / rhs.mag, -rhs.dim)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{dimension::BaseQuantity, float_util_macros::assert_close};

    fn length(mag: f64) -> Quantity {
        Quantity::new(mag, Dimension::LENGTH)
    }

    fn time(mag: f64) -> Quantity {
        Quantity::new(mag, Dimension::TIME)
    }

    #[test]
    fn product_and_quotient_dimensions() {
        let a = Quantity::new(3.0, Dimension::FORCE);
        let b = length(2.0);
        assert_eq!((a * b).dimension(), Dimension::FORCE.add(Dimension::LENGTH).unwrap());
        assert_eq!((a * b).dimension(), Dimension::ENERGY);
        assert_eq!(
            (a / b).dimension(),
            Dimension::FORCE.subtract(Dimension::LENGTH).unwrap()
        );
        assert_close!(((a * b) / b).magnitude(), a.magnitude());
    }

    #[test]
    fn checked_product_overflow() {
        let a = Quantity::new(2.0, Dimension::from_exponents([0, 0, i32::MIN, 0, 0, 0, 0]));
        assert_eq!(
            a.checked_div(time(1.0)),
            Err(DimensionError::ExponentOverflow {
                slot: BaseQuantity::Time
            })
        );
        assert_eq!(
            a.checked_mul(time(4.0)).unwrap(),
            Quantity::new(8.0, Dimension::from_exponents([0, 0, i32::MIN + 1, 0, 0, 0, 0]))
        );
        assert_eq!(length(3.0).checked_mul(length(2.0)).unwrap(), length(3.0) * length(2.0));
    }

    #[test]
    fn kinetic_energy() {
        let mass = Quantity::new(70.0, Dimension::MASS);
        let velocity = length(10.0) / time(2.0);
        assert_eq!(velocity.magnitude(), 5.0);

        let energy = 0.5 * mass * velocity * velocity;
        assert_eq!(energy.magnitude(), 875.0);
        assert_eq!(energy.dimension(), Dimension::ENERGY);
    }

    #[test]
    fn addition_requires_same_dimension() {
        let sum = (length(1.5) + length(2.0)).unwrap();
        assert_eq!(sum, length(3.5));
        let diff = (length(1.5) - length(2.0)).unwrap();
        assert_eq!(diff, length(-0.5));

        let err = (length(1.0) + time(1.0)).unwrap_err();
        assert_eq!(
            err,
            DimensionError::DimensionMismatch {
                operation: Operation::Add,
                lhs: Dimension::LENGTH,
                rhs: Dimension::TIME,
            }
        );
        assert!(matches!(
            length(1.0).checked_sub(time(1.0)),
            Err(DimensionError::DimensionMismatch {
                operation: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn non_finite_propagation() {
        let inf = length(1.0) / time(0.0);
        assert!(inf.magnitude().is_infinite());
        assert_eq!(inf.dimension(), Dimension::VELOCITY);

        let nan = length(0.0) / length(0.0);
        assert!(nan.magnitude().is_nan());
        assert!(nan.is_dimensionless());

        let sum = (length(f64::NAN) + length(1.0)).unwrap();
        assert!(sum.magnitude().is_nan());
    }

    #[test]
    fn scalar_operations() {
        let q = Quantity::new(4.0, Dimension::PRESSURE);
        assert_eq!(q * 1.0, q);
        assert_eq!(q / 1.0, q);
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!((q * 0.0).magnitude(), 0.0);
        assert_eq!((q * 0.0).dimension(), Dimension::PRESSURE);
        assert!((q / 0.0).magnitude().is_infinite());
        assert_eq!(-q, Quantity::new(-4.0, Dimension::PRESSURE));

        let inverse = 1.0 / time(4.0);
        assert_eq!(inverse.magnitude(), 0.25);
        assert_eq!(inverse.dimension(), Dimension::FREQUENCY);
    }

    #[test]
    fn ordering() {
        let values: Vec<Quantity> = [-3.0, -0.5, 0.0, 2.0, 1e9].map(length).to_vec();
        for a in &values {
            assert!(a.try_eq(a).unwrap());
            assert!(a.try_le(a).unwrap());
            for b in &values {
                if a.try_le(b).unwrap() && b.try_le(a).unwrap() {
                    assert_eq!(a, b);
                }
                for c in &values {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
        assert!(length(1.0).try_lt(&length(2.0)).unwrap());
        assert!(length(2.0).try_gt(&length(1.0)).unwrap());
        assert!(length(2.0).try_ge(&length(2.0)).unwrap());
    }

    #[test]
    fn signed_zero_and_nan() {
        assert_eq!(length(0.0), length(-0.0));
        assert!(length(0.0).try_eq(&length(-0.0)).unwrap());

        let nan = length(f64::NAN);
        let one = length(1.0);
        assert!(!nan.try_eq(&nan).unwrap());
        assert!(nan.try_ne(&nan).unwrap());
        assert!(nan.try_ne(&one).unwrap());
        for result in [
            nan.try_lt(&one),
            nan.try_le(&one),
            nan.try_gt(&one),
            nan.try_ge(&one),
            one.try_lt(&nan),
            one.try_ge(&nan),
        ] {
            assert!(!result.unwrap());
        }
        let other_nan = length(f64::NAN);
        assert!(nan != other_nan);
        assert_eq!(nan.partial_cmp(&one), None);
    }

    #[test]
    fn comparing_different_dimensions() {
        assert!(matches!(
            length(1.0).compare(&time(1.0)),
            Err(DimensionError::DimensionMismatch {
                operation: Operation::Compare,
                ..
            })
        ));
        assert!(length(1.0).try_lt(&time(2.0)).is_err());
        assert_eq!(length(1.0).partial_cmp(&time(1.0)), None);
        assert!(length(1.0) != time(1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let q = Quantity::new(-9.81, Dimension::ACCELERATION);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
