/*

format.rs - Formatting for printing values in Sidim
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

//! Formatting for [Dimension] and [Quantity]
//!
//! A quantity prints as `<magnitude> [<dimension>]`, e.g. `9.81 [m·s^-2]`.
//! The dimension lists base unit symbols in the order `kg m s A K mol cd`,
//! skips zero exponents, writes an exponent of 1 as the bare symbol, and
//! joins symbols with `·`. A dimensionless value prints `1` in the brackets.
//!
//! Composite units such as joules are never recognized; energy prints as
//! `kg·m^2·s^-2`.

use std::fmt::{self, Display};

use strum::IntoEnumIterator;

use crate::{
    dimension::{BaseQuantity, Dimension},
    quantity::Quantity,
};

/// Separator between base unit symbols.
pub const SEPARATOR: &str = "\u{b7}";

/// Printed in place of an empty dimension.
pub const DIMENSIONLESS_MARKER: &str = "1";

/// Magnitudes outside `[SCIENTIFIC_BELOW, SCIENTIFIC_FROM)` are formatted in
/// scientific notation by [`Formatter`], so that they don't round to zero or
/// print dozens of digits.
pub const SCIENTIFIC_BELOW: f64 = 1e-3;
pub const SCIENTIFIC_FROM: f64 = 1e9;

pub trait Formatter {
    fn format(&self, precision: usize) -> String;
}

impl Formatter for f64 {
    fn format(&self, precision: usize) -> String {
        let abs = self.abs();
        if abs.is_finite() && abs != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&abs) {
            format!("{:.*e}", precision, self)
        } else {
            format!("{:.*}", precision, self)
        }
    }
}

impl Formatter for Dimension {
    /// Dimensions have no numeric part, so `precision` is ignored.
    fn format(&self, _precision: usize) -> String {
        self.to_string()
    }
}

impl Formatter for Quantity {
    fn format(&self, precision: usize) -> String {
        format!("{} [{}]", self.mag.format(precision), self.dim)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str(DIMENSIONLESS_MARKER);
        }
        let parts: Vec<String> = BaseQuantity::iter()
            .filter(|bq| self[*bq] != 0)
            .map(|bq| match self[bq] {
                1 => bq.symbol().to_string(),
                exp => format!("{}^{}", bq.symbol(), exp),
            })
            .collect();
        f.write_str(&parts.join(SEPARATOR))
    }
}

impl Display for Quantity {
    /// Honours a precision given in the format string, e.g. `{:.2}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} [{}]", precision, self.mag, self.dim),
            None => write!(f, "{} [{}]", self.mag, self.dim),
        }
    }
}
