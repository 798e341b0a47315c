/*

dimension.rs - Dimension vectors and their algebra for Sidim
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

//! Dimension handling for Sidim.
//!
//! A [`Dimension`] identifies the physical kind of a quantity as a vector of
//! integer exponents, one per SI [base quantity][BaseQuantity]. Velocity is
//! `m·s^-1`, force is `kg·m·s^-2`, and so on.
//!
//! ## Algebra
//!
//! Dimensions form an abelian group:
//!  - multiplying two quantities [adds][Dimension::add] their exponents
//!  - dividing two quantities [subtracts][Dimension::subtract] them
//!  - raising to an integer power [scales][Dimension::scale] them
//!  - a square root [halves][Dimension::halve] them, which only works when
//!    every exponent is even
//!
//! The all-zero vector is the identity and marks a *dimensionless* value.

use std::ops::{Div, Index, Mul, Neg};

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};
use thiserror::Error;

use crate::operation::Operation;

/// Base quantity/dimension type.
///
/// Each variant represents one of the seven [SI base quantities][1]. The
/// declaration order is the slot order of a [`Dimension`] and the order in
/// which dimensions are printed.
///
/// [1]: https://en.wikipedia.org/wiki/SI_base_unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseQuantity {
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseQuantity {
    /// Symbol of the SI base unit measuring this quantity.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseQuantity::Mass => "kg",
            BaseQuantity::Length => "m",
            BaseQuantity::Time => "s",
            BaseQuantity::Current => "A",
            BaseQuantity::Temperature => "K",
            BaseQuantity::AmountOfSubstance => "mol",
            BaseQuantity::LuminousIntensity => "cd",
        }
    }
}

/// Dimension specifier.
///
/// Stores an array of exponents indexed by base quantities. Two dimensions
/// are equal only when all seven exponents match.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension([i32; BaseQuantity::COUNT]);

impl Dimension {
    /// Create a new empty (dimensionless) dimension
    pub const fn new() -> Self {
        Self([0; BaseQuantity::COUNT])
    }

    /// Create a dimension from exponents in slot order:
    /// mass, length, time, current, temperature, amount, luminous intensity.
    pub const fn from_exponents(exponents: [i32; BaseQuantity::COUNT]) -> Self {
        Self(exponents)
    }

    /// Dimension of a single base quantity, i.e. a vector with one `1` slot.
    pub const fn base(bq: BaseQuantity) -> Self {
        let mut exponents = [0; BaseQuantity::COUNT];
        exponents[bq as usize] = 1;
        Self(exponents)
    }

    /// Exponents in slot order.
    pub const fn exponents(&self) -> [i32; BaseQuantity::COUNT] {
        self.0
    }

    /// Test whether the dimension is dimensionless.
    ///
    /// A quantity with a dimensionless dimension is just a numerical value.
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|x| *x == 0)
    }

    /// Dimension of a product: elementwise sum of exponents.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::ExponentOverflow`] if an exponent leaves the
    /// range of `i32`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Result<Self, DimensionError> {
        self.try_zip_with(rhs, i32::checked_add)
    }

    /// Dimension of a quotient: elementwise difference of exponents.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::ExponentOverflow`] if an exponent leaves the
    /// range of `i32`.
    pub fn subtract(self, rhs: Self) -> Result<Self, DimensionError> {
        self.try_zip_with(rhs, i32::checked_sub)
    }

    /// Raise a dimension to an integer power.
    ///
    /// Multiplies each base quantity's exponent by `n`. A power of zero gives
    /// the dimensionless vector.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::ExponentOverflow`] if an exponent leaves the
    /// range of `i32`.
    pub fn scale(self, n: i32) -> Result<Self, DimensionError> {
        self.try_zip_with(Self::new(), |x, _| x.checked_mul(n))
    }

    /// Dimension of a square root: every exponent divided by two.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::OddExponentRoot`] listing every base quantity
    /// whose exponent is odd, since half-integer exponents can't be
    /// represented.
    pub fn halve(self) -> Result<Self, DimensionError> {
        let slots: Vec<BaseQuantity> = BaseQuantity::iter()
            .filter(|bq| self[*bq] % 2 != 0)
            .collect();
        if !slots.is_empty() {
            tracing::debug!(dimension = %self, ?slots, "square root of odd dimension");
            return Err(DimensionError::OddExponentRoot {
                dimension: self,
                slots,
            });
        }
        Ok(self.map(|x| x / 2))
    }

    /// Check that `rhs` is identical to this dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] naming `operation` and
    /// both vectors when they differ.
    pub fn ensure_same(self, rhs: Self, operation: Operation) -> Result<(), DimensionError> {
        if self == rhs {
            Ok(())
        } else {
            tracing::debug!(%operation, lhs = %self, rhs = %rhs, "dimension mismatch");
            Err(DimensionError::DimensionMismatch {
                operation,
                lhs: self,
                rhs,
            })
        }
    }

    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        let mut result = self;
        for x in result.0.iter_mut() {
            *x = f(*x);
        }
        result
    }

    fn try_zip_with(
        self,
        rhs: Self,
        f: impl Fn(i32, i32) -> Option<i32>,
    ) -> Result<Self, DimensionError> {
        let mut result = Self::new();
        for slot in BaseQuantity::iter() {
            let i = slot as usize;
            result.0[i] = f(self.0[i], rhs.0[i]).ok_or_else(|| {
                tracing::debug!(lhs = %self, rhs = %rhs, %slot, "exponent overflow");
                DimensionError::ExponentOverflow { slot }
            })?;
        }
        Ok(result)
    }
}

/// Named dimensions of derived quantities.
impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new();

    pub const MASS: Self = Self::base(BaseQuantity::Mass);
    pub const LENGTH: Self = Self::base(BaseQuantity::Length);
    pub const TIME: Self = Self::base(BaseQuantity::Time);
    pub const CURRENT: Self = Self::base(BaseQuantity::Current);
    pub const TEMPERATURE: Self = Self::base(BaseQuantity::Temperature);
    pub const AMOUNT: Self = Self::base(BaseQuantity::AmountOfSubstance);
    pub const LUMINOSITY: Self = Self::base(BaseQuantity::LuminousIntensity);

    // Mechanics
    pub const AREA: Self = Self([0, 2, 0, 0, 0, 0, 0]);
    pub const VOLUME: Self = Self([0, 3, 0, 0, 0, 0, 0]);
    pub const VELOCITY: Self = Self([0, 1, -1, 0, 0, 0, 0]);
    pub const ACCELERATION: Self = Self([0, 1, -2, 0, 0, 0, 0]);
    pub const MOMENTUM: Self = Self([1, 1, -1, 0, 0, 0, 0]);
    pub const FORCE: Self = Self([1, 1, -2, 0, 0, 0, 0]);
    pub const ENERGY: Self = Self([1, 2, -2, 0, 0, 0, 0]);
    pub const POWER: Self = Self([1, 2, -3, 0, 0, 0, 0]);
    pub const PRESSURE: Self = Self([1, -1, -2, 0, 0, 0, 0]);
    pub const FREQUENCY: Self = Self([0, 0, -1, 0, 0, 0, 0]);
    pub const DENSITY: Self = Self([1, -3, 0, 0, 0, 0, 0]);
    pub const DYNAMIC_VISCOSITY: Self = Self([1, -1, -1, 0, 0, 0, 0]);
    pub const KINEMATIC_VISCOSITY: Self = Self([0, 2, -1, 0, 0, 0, 0]);
    /// J·s; angular momentum and the Planck constant
    pub const ACTION: Self = Self([1, 2, -1, 0, 0, 0, 0]);

    // Electromagnetism
    pub const CHARGE: Self = Self([0, 0, 1, 1, 0, 0, 0]);
    pub const VOLTAGE: Self = Self([1, 2, -3, -1, 0, 0, 0]);
    pub const RESISTANCE: Self = Self([1, 2, -3, -2, 0, 0, 0]);
    pub const CAPACITANCE: Self = Self([-1, -2, 4, 2, 0, 0, 0]);
    pub const INDUCTANCE: Self = Self([1, 2, -2, -2, 0, 0, 0]);
    pub const MAGNETIC_FLUX: Self = Self([1, 2, -2, -1, 0, 0, 0]);
    pub const MAGNETIC_FIELD: Self = Self([1, 0, -2, -1, 0, 0, 0]);
    /// S = 1/Ω
    pub const CONDUCTANCE: Self = Self([-1, -2, 3, 2, 0, 0, 0]);
    /// V/m
    pub const ELECTRIC_FIELD: Self = Self([1, 1, -3, -1, 0, 0, 0]);

    // Thermodynamics
    pub const ENTROPY: Self = Self([1, 2, -2, 0, -1, 0, 0]);
    pub const SPECIFIC_HEAT: Self = Self([0, 2, -2, 0, -1, 0, 0]);
    pub const THERMAL_CONDUCTIVITY: Self = Self([1, 1, -3, 0, -1, 0, 0]);

    // Chemistry
    pub const MOLAR_MASS: Self = Self([1, 0, 0, 0, 0, -1, 0]);
    pub const CONCENTRATION: Self = Self([0, -3, 0, 0, 0, 1, 0]);
    pub const CATALYTIC_ACTIVITY: Self = Self([0, 0, -1, 0, 0, 1, 0]);
    pub const MOLAR_ENERGY: Self = Self([1, 2, -2, 0, 0, -1, 0]);
    pub const MOLAR_ENTROPY: Self = Self([1, 2, -2, 0, -1, -1, 0]);

    // Radiation and dosimetry
    /// Bq = 1/s, dimensionally the same as hertz
    pub const RADIOACTIVE_ACTIVITY: Self = Self::FREQUENCY;
    /// J/kg; gray and sievert
    pub const ABSORBED_DOSE: Self = Self([0, 2, -2, 0, 0, 0, 0]);

    // Photometry
    /// lm = cd·sr, and the steradian is dimensionless
    pub const LUMINOUS_FLUX: Self = Self::LUMINOSITY;
    /// lx = cd/m²
    pub const ILLUMINANCE: Self = Self([0, -2, 0, 0, 0, 0, 1]);
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new()
    }
}

// The operators panic when an exponent overflows, the way integer and
// `Duration` arithmetic do. Use `add`, `subtract` and `scale` to get the error.

impl Mul for Dimension {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.add(rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl Div for Dimension {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self.subtract(rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl Neg for Dimension {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl Index<BaseQuantity> for Dimension {
    type Output = i32;

    fn index(&self, index: BaseQuantity) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl From<[i32; BaseQuantity::COUNT]> for Dimension {
    fn from(src: [i32; BaseQuantity::COUNT]) -> Self {
        Self(src)
    }
}

/// Errors raised when an operation is physically meaningless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Cannot apply `{operation}` to quantities of different dimensions `{lhs}` and `{rhs}`")]
    DimensionMismatch {
        operation: Operation,
        lhs: Dimension,
        rhs: Dimension,
    },

    #[error("Cannot take the square root of `{dimension}`: odd exponent for {}", join_slots(.slots))]
    OddExponentRoot {
        dimension: Dimension,
        slots: Vec<BaseQuantity>,
    },

    #[error("Exponent of {slot} is out of range")]
    ExponentOverflow { slot: BaseQuantity },
}

fn join_slots(slots: &[BaseQuantity]) -> String {
    slots
        .iter()
        .map(|bq| bq.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
