/*

constants.rs - Physical constants for Sidim
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

//! Physical constants
//!
//! Values marked [exact][Provenance::Exact] are fixed by the 2019 SI
//! redefinition. The others are CODATA 2018 recommended values and carry
//! measurement uncertainty.

use crate::{dimension::Dimension, quantity::Quantity};

// Dimensions that only these constants have
const GRAVITATION: Dimension = Dimension::from_exponents([-1, 3, -2, 0, 0, 0, 0]);
const INVERSE_AMOUNT: Dimension = Dimension::from_exponents([0, 0, 0, 0, 0, -1, 0]);
const RADIANT_EXITANCE_PER_K4: Dimension = Dimension::from_exponents([1, 0, -3, 0, -4, 0, 0]);

/// Speed of light in vacuum, m/s
pub const C: Quantity = Quantity::new(299_792_458.0, Dimension::VELOCITY);
/// Planck constant, J·s
pub const H: Quantity = Quantity::new(6.62607015e-34, Dimension::ACTION);
/// Reduced Planck constant, J·s
pub const HBAR: Quantity = Quantity::new(1.054571817e-34, Dimension::ACTION);
/// Elementary charge, C
pub const E: Quantity = Quantity::new(1.602176634e-19, Dimension::CHARGE);
/// Boltzmann constant, J/K
pub const K_B: Quantity = Quantity::new(1.380649e-23, Dimension::ENTROPY);
/// Molar gas constant, J/(mol·K)
pub const R: Quantity = Quantity::new(8.314462618, Dimension::MOLAR_ENTROPY);
/// Avogadro constant, 1/mol
pub const N_A: Quantity = Quantity::new(6.02214076e23, INVERSE_AMOUNT);

/// Electron mass, kg
pub const M_E: Quantity = Quantity::new(9.1093837015e-31, Dimension::MASS);
/// Proton mass, kg
pub const M_P: Quantity = Quantity::new(1.67262192369e-27, Dimension::MASS);
/// Neutron mass, kg
pub const M_N: Quantity = Quantity::new(1.67492749804e-27, Dimension::MASS);
/// Newtonian constant of gravitation, m³/(kg·s²)
pub const G: Quantity = Quantity::new(6.67430e-11, GRAVITATION);
/// Stefan-Boltzmann constant, W/(m²·K⁴)
pub const SIGMA: Quantity = Quantity::new(5.670374419e-8, RADIANT_EXITANCE_PER_K4);

/// Where the value of a constant comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Defined exactly by the SI, or derived only from exact constants
    Exact,
    /// CODATA 2018 measured value
    Measured,
}

/// A named entry in [`CONSTANTS`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstant {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: Quantity,
    pub provenance: Provenance,
}

macro_rules! constants {
    ( $( $symbol:ident $name:literal $provenance:ident ),* $(,)? ) => {
        /// Every physical constant with its provenance.
        pub const CONSTANTS: &[PhysicalConstant] = &[ $(
            PhysicalConstant {
                name: $name,
                symbol: stringify!($symbol),
                value: $symbol,
                provenance: Provenance::$provenance,
            },
        )* ];
    };
}

constants! {
    C     "speed of light in vacuum"             Exact,
    H     "Planck constant"                      Exact,
    HBAR  "reduced Planck constant"              Exact,
    E     "elementary charge"                    Exact,
    K_B   "Boltzmann constant"                   Exact,
    R     "molar gas constant"                   Exact,
    N_A   "Avogadro constant"                    Exact,
    M_E   "electron mass"                        Measured,
    M_P   "proton mass"                          Measured,
    M_N   "neutron mass"                         Measured,
    G     "Newtonian constant of gravitation"    Measured,
    SIGMA "Stefan-Boltzmann constant"            Exact,
}
