/*

lib.rs - Sidim library crate
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

// Don't allow unwrapping Results and Options
#![deny(clippy::unwrap_used)]
// Warn about additional compiler diagnostics. These don't affect the behavior
// or performance of Sidim, but they generally lead to cleaner code.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    unreachable_pub,
    unused_extern_crates,
    macro_use_extern_crate
)]

//! # Sidim
//!
//! Sidim is a dimensional analysis library for SI quantities.
//!
//! A [`Quantity`][1] is a magnitude in SI base units tagged with the
//! [`Dimension`][2] it measures. Arithmetic derives the dimension of every
//! result, and physically meaningless operations (adding a length to a time,
//! taking the square root of a velocity) are reported as a
//! [`DimensionError`][3] instead of producing a silently wrong number.
//!
//! ```
//! use sidim::{dimension::Dimension, unit::UnitLiterals};
//!
//! let mass = 70.0.kg();
//! let velocity = 10.0.m() / 2.0.s();
//! let energy = 0.5 * mass * velocity * velocity;
//! assert_eq!(energy.magnitude(), 875.0);
//! assert_eq!(energy.dimension(), Dimension::ENERGY);
//! assert_eq!(energy.to_string(), "875 [kg·m^2·s^-2]");
//! ```
//!
//! [1]: crate::quantity::Quantity
//! [2]: crate::dimension::Dimension
//! [3]: crate::dimension::DimensionError

pub mod constants;
pub mod dimension;
pub mod ecs;
#[cfg(test)]
mod float_util_macros;
pub mod format;
pub mod functions;
pub mod operation;
pub mod quantity;
pub mod unit;
