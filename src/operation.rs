/*

operation.rs - Checked operations for Sidim
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

//! Operations which can fail a dimension check

use strum_macros::Display;

/// # Dimension-checked operation
///
/// Names the operation that rejected its operands, so that a
/// [`DimensionError`][1] can say what was attempted.
///
/// [1]: crate::dimension::DimensionError
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// ## Arithmetic addition
    #[strum(serialize = "+")]
    Add,

    /// ## Arithmetic subtraction
    #[strum(serialize = "-")]
    Subtract,

    /// ## Three-way comparison
    ///
    /// Covers all six relational operators, which are derived from it.
    #[strum(serialize = "<=>")]
    Compare,

    /// ## Convert units
    ///
    /// Express a quantity as a number of some named unit.
    #[strum(serialize = "to")]
    Convert,
}
