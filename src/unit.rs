/*

unit.rs - Named units for Sidim
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

//! # Unit handling
//!
//! Units are named amounts of physical quantities. They only exist at the
//! boundary: a value given in some unit is turned into a [`Quantity`] in SI
//! base units, and the unit is forgotten.
//!
//! ## What makes a [`UnitEntry`]
//!
//! A unit has four parts:
//!   1. A symbol
//!   2. A dimension
//!   3. A scale
//!   4. An offset
//!
//! The *symbol* is the short name of the unit, e.g. `km` or `degF`.
//!
//! The *dimension* of a unit defines the physical quantity that it
//! represents. A newton has the dimension `kg·m·s^-2`.
//!
//! The *scale* of a unit is the ratio between the unit and the underlying
//! SI base units. A kilometer has a scale of `1000`.
//!
//! The *offset* is added after scaling. Only the two affine temperature
//! scales, `degC` and `degF`, have one. Once converted, a temperature is an
//! ordinary absolute quantity in kelvin, so the difference of two Celsius
//! values is a correct temperature delta, while their sum is well-typed but
//! physically meaningless.
//!
//! ## Constructing quantities
//!
//! The [`UnitLiterals`] trait gives every [`f64`] one method per unit:
//!
//! ```
//! use sidim::unit::UnitLiterals;
//!
//! let energy = 1.0.kcal();
//! assert_eq!(energy.magnitude(), 4184.0);
//!
//! let freezing = 0.0.degC();
//! assert_eq!(freezing.magnitude(), 273.15);
//! ```
//!
//! A unit can also be found by its exact symbol with [`lookup()`] or
//! [`Quantity::from_unit()`]. The symbol `in` is spelled `inch` and `min` is
//! spelled `minute` as method names, because `in` is a keyword and
//! [`f64::min`] would shadow the trait method.

use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{
    dimension::{Dimension, DimensionError},
    operation::Operation,
    quantity::Quantity,
};

/// # Named unit
///
/// See the [module-level documentation][1] for details.
///
/// [1]: crate::unit
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UnitEntry {
    /// Symbol of the unit, e.g. `kWh`
    pub symbol: &'static str,

    /// Physical quantity the unit measures
    pub dimension: Dimension,

    /// Number of SI base units in one of this unit
    pub scale: f64,

    /// Amount added after scaling; zero for all but the affine temperatures
    pub offset: f64,
}

impl UnitEntry {
    /// # Create a new unit entry
    pub const fn new(symbol: &'static str, dimension: Dimension, scale: f64, offset: f64) -> Self {
        Self {
            symbol,
            dimension,
            scale,
            offset,
        }
    }

    /// Whether the unit has an additive offset.
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// # Convert a raw value in this unit to a [`Quantity`].
    ///
    /// Computes `raw * scale + offset`, giving a magnitude in SI base units.
    pub fn apply(&self, raw: f64) -> Quantity {
        Quantity::new(raw * self.scale + self.offset, self.dimension)
    }

    /// # Inverse of [`apply()`][Self::apply].
    ///
    /// Expresses `q` as a number of this unit.
    ///
    /// ## Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] if `q` doesn't measure
    /// the same physical quantity as this unit.
    pub fn descale(&self, q: &Quantity) -> Result<f64, DimensionError> {
        q.dimension().ensure_same(self.dimension, Operation::Convert)?;
        Ok((q.magnitude() - self.offset) / self.scale)
    }
}

impl Display for UnitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

macro_rules! unit_table {
    (@offset) => { 0.0 };
    (@offset $offset:expr) => { $offset };
    ( $( $method:ident $symbol:literal => $dim:ident, $scale:expr $(, offset $offset:expr)? );* $(;)? ) => {
        /// Every named unit, grouped by the quantity it measures.
        pub static UNITS: &[UnitEntry] = &[
            $( UnitEntry::new($symbol, Dimension::$dim, $scale, unit_table!(@offset $($offset)?)), )*
        ];

        /// # Unit constructors
        ///
        /// Replaces unit-suffixed literals: `9.81.m()` instead of `9.81_m`.
        /// Each method converts `self`, given in the named unit, to a
        /// [`Quantity`] in SI base units.
        #[allow(non_snake_case)]
        pub trait UnitLiterals {
            $(
                #[doc = concat!("`self` in `", $symbol, "`.")]
                fn $method(self) -> Quantity;
            )*
        }

        #[allow(non_snake_case)]
        impl UnitLiterals for f64 {
            $(
                fn $method(self) -> Quantity {
                    UnitEntry::new($symbol, Dimension::$dim, $scale, unit_table!(@offset $($offset)?))
                        .apply(self)
                }
            )*
        }
    };
}

// Factors come from the 2019 SI redefinition, the international yard and
// pound agreement, and IAU/IUPAC definitions. Don't round them.
unit_table! {
    // Mass
    kg      "kg"    => MASS, 1.0;
    g       "g"     => MASS, 1e-3;
    mg      "mg"    => MASS, 1e-6;
    Da      "Da"    => MASS, 1.66053906660e-27;
    u       "u"     => MASS, 1.66053906660e-27;
    tonne   "tonne" => MASS, 1e3;
    lb      "lb"    => MASS, 0.45359237;
    lbm     "lbm"   => MASS, 0.45359237;
    oz      "oz"    => MASS, 0.028349523125;
    slug    "slug"  => MASS, 14.593902937;

    // Length
    m       "m"     => LENGTH, 1.0;
    km      "km"    => LENGTH, 1e3;
    cm      "cm"    => LENGTH, 1e-2;
    mm      "mm"    => LENGTH, 1e-3;
    inch    "in"    => LENGTH, 0.0254;
    ft      "ft"    => LENGTH, 0.3048;
    yd      "yd"    => LENGTH, 0.9144;
    mi      "mi"    => LENGTH, 1609.344;
    nmi     "nmi"   => LENGTH, 1852.0;
    au      "au"    => LENGTH, 1.495978707e11;
    ly      "ly"    => LENGTH, 9.4607304725808e15;
    pc      "pc"    => LENGTH, 3.085677581491367e16;
    kpc     "kpc"   => LENGTH, 3.085677581491367e19;
    Mpc     "Mpc"   => LENGTH, 3.085677581491367e22;

    // Time
    s       "s"     => TIME, 1.0;
    ms      "ms"    => TIME, 1e-3;
    us      "us"    => TIME, 1e-6;
    minute  "min"   => TIME, 60.0;
    hr      "hr"    => TIME, 3600.0;
    day     "day"   => TIME, 86400.0;
    yr      "yr"    => TIME, 31557600.0;

    // Current
    A       "A"     => CURRENT, 1.0;
    mA      "mA"    => CURRENT, 1e-3;
    uA      "uA"    => CURRENT, 1e-6;
    nA      "nA"    => CURRENT, 1e-9;

    // Temperature, absolute in kelvin
    K       "K"     => TEMPERATURE, 1.0;
    degC    "degC"  => TEMPERATURE, 1.0, offset 273.15;
    degF    "degF"  => TEMPERATURE, 5.0 / 9.0, offset 273.15 - 32.0 * 5.0 / 9.0;

    // Amount of substance
    mol     "mol"   => AMOUNT, 1.0;
    mmol    "mmol"  => AMOUNT, 1e-3;

    // Luminous intensity
    cd      "cd"    => LUMINOSITY, 1.0;

    // Force
    N       "N"     => FORCE, 1.0;
    kN      "kN"    => FORCE, 1e3;
    lbf     "lbf"   => FORCE, 4.4482216152605;

    // Energy
    J       "J"     => ENERGY, 1.0;
    kJ      "kJ"    => ENERGY, 1e3;
    cal     "cal"   => ENERGY, 4.184;
    kcal    "kcal"  => ENERGY, 4184.0;
    eV      "eV"    => ENERGY, 1.602176634e-19;
    meV     "meV"   => ENERGY, 1.602176634e-22;
    MeV     "MeV"   => ENERGY, 1.602176634e-13;
    GeV     "GeV"   => ENERGY, 1.602176634e-10;
    Wh      "Wh"    => ENERGY, 3600.0;
    kWh     "kWh"   => ENERGY, 3.6e6;
    BTU     "BTU"   => ENERGY, 1055.05585262;

    // Power
    W       "W"     => POWER, 1.0;
    kW      "kW"    => POWER, 1e3;
    MW      "MW"    => POWER, 1e6;
    hp      "hp"    => POWER, 745.69987158227022;

    // Pressure
    Pa      "Pa"    => PRESSURE, 1.0;
    kPa     "kPa"   => PRESSURE, 1e3;
    MPa     "MPa"   => PRESSURE, 1e6;
    bar     "bar"   => PRESSURE, 1e5;
    atm     "atm"   => PRESSURE, 101325.0;
    psi     "psi"   => PRESSURE, 6894.757293168;
    torr    "torr"  => PRESSURE, 101325.0 / 760.0;
    mmHg    "mmHg"  => PRESSURE, 133.322387415;

    // Frequency
    Hz      "Hz"    => FREQUENCY, 1.0;
    kHz     "kHz"   => FREQUENCY, 1e3;
    MHz     "MHz"   => FREQUENCY, 1e6;
    GHz     "GHz"   => FREQUENCY, 1e9;

    // Volume
    L       "L"     => VOLUME, 1e-3;
    mL      "mL"    => VOLUME, 1e-6;

    // Area
    b       "b"     => AREA, 1e-28;

    // Velocity
    kn      "kn"    => VELOCITY, 1852.0 / 3600.0;

    // Voltage
    MV      "MV"    => VOLTAGE, 1e6;
    kV      "kV"    => VOLTAGE, 1e3;
    V       "V"     => VOLTAGE, 1.0;
    mV      "mV"    => VOLTAGE, 1e-3;
    uV      "uV"    => VOLTAGE, 1e-6;

    // Charge
    C       "C"     => CHARGE, 1.0;
    mC      "mC"    => CHARGE, 1e-3;
    uC      "uC"    => CHARGE, 1e-6;
    nC      "nC"    => CHARGE, 1e-9;
    pC      "pC"    => CHARGE, 1e-12;

    // Electromagnetism
    Wb      "Wb"    => MAGNETIC_FLUX, 1.0;
    T       "T"     => MAGNETIC_FIELD, 1.0;
    H       "H"     => INDUCTANCE, 1.0;
    mH      "mH"    => INDUCTANCE, 1e-3;
    uH      "uH"    => INDUCTANCE, 1e-6;
    nH      "nH"    => INDUCTANCE, 1e-9;
    F       "F"     => CAPACITANCE, 1.0;
    mF      "mF"    => CAPACITANCE, 1e-3;
    uF      "uF"    => CAPACITANCE, 1e-6;
    nF      "nF"    => CAPACITANCE, 1e-9;
    pF      "pF"    => CAPACITANCE, 1e-12;
    Mohm    "Mohm"  => RESISTANCE, 1e6;
    kohm    "kohm"  => RESISTANCE, 1e3;
    ohm     "ohm"   => RESISTANCE, 1.0;
    mohm    "mohm"  => RESISTANCE, 1e-3;
    S       "S"     => CONDUCTANCE, 1.0;

    // Radiation and dosimetry
    Bq      "Bq"    => RADIOACTIVE_ACTIVITY, 1.0;
    Ci      "Ci"    => RADIOACTIVE_ACTIVITY, 3.7e10;
    Gy      "Gy"    => ABSORBED_DOSE, 1.0;
    Sv      "Sv"    => ABSORBED_DOSE, 1.0;

    // Photometry
    lm      "lm"    => LUMINOUS_FLUX, 1.0;
    lx      "lx"    => ILLUMINANCE, 1.0;
}

static UNIT_INDEX: Lazy<HashMap<&'static str, &'static UnitEntry>> =
    Lazy::new(|| UNITS.iter().map(|unit| (unit.symbol, unit)).collect());

/// Look up a unit by its exact symbol.
///
/// No prefix stripping or plural handling is done; `"km"` is found because
/// it is in [`UNITS`], `"kilometers"` is not.
pub fn lookup(symbol: &str) -> Option<&'static UnitEntry> {
    UNIT_INDEX.get(symbol).copied()
}

/// Convert a value between two units measuring the same quantity.
///
/// # Errors
///
/// Returns [`DimensionError::DimensionMismatch`] if the units don't conform.
pub fn convert(value: f64, from: &UnitEntry, to: &UnitEntry) -> Result<f64, DimensionError> {
    to.descale(&from.apply(value))
}

impl Quantity {
    /// Create a quantity from a value in the unit named `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if no unit has that symbol.
    pub fn from_unit(value: f64, symbol: &str) -> Result<Self, UnitError> {
        lookup(symbol)
            .map(|unit| unit.apply(value))
            .ok_or_else(|| UnitError::UnknownUnit(symbol.to_owned()))
    }

    /// Express this quantity as a number of `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::DimensionMismatch`] if the quantity and the
    /// unit have different dimensions.
    pub fn value_in(&self, unit: &UnitEntry) -> Result<f64, DimensionError> {
        unit.descale(self)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit `{0}`")]
    UnknownUnit(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::float_util_macros::assert_close;

    fn unit(symbol: &str) -> &'static UnitEntry {
        lookup(symbol).unwrap()
    }

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<&str> = UNITS.iter().map(|unit| unit.symbol).collect();
        assert_eq!(symbols.len(), UNITS.len());
        assert_eq!(UNIT_INDEX.len(), UNITS.len());
    }

    #[test]
    fn only_temperatures_are_affine() {
        let affine: Vec<&str> = UNITS
            .iter()
            .filter(|unit| unit.is_affine())
            .map(|unit| unit.symbol)
            .collect();
        assert_eq!(affine, vec!["degC", "degF"]);
    }

    #[test]
    fn ratio_units_round_trip() {
        for entry in UNITS.iter().filter(|unit| !unit.is_affine()) {
            for v in [1.0, -2.5, 70.0, 1234.5678, 1e-3] {
                let q = entry.apply(v);
                assert_eq!(q.dimension(), entry.dimension);
                assert_close!(q.magnitude() / entry.scale, v);
                assert_close!(q.value_in(entry).unwrap(), v);
            }
        }
    }

    #[test]
    fn affine_units_round_trip() {
        for symbol in ["degC", "degF"] {
            for v in [-40.0, 0.0, 37.0, 100.0] {
                let q = Quantity::from_unit(v, symbol).unwrap();
                assert_close!(q.value_in(unit(symbol)).unwrap(), v, 1e-9);
            }
        }
    }

    /// Reference values which are exact by definition.
    #[test]
    fn documented_factors() {
        let cases: Vec<(Quantity, f64)> = vec![
            (1.0.kcal(), 4184.0),
            (1.0.cal(), 4.184),
            (1.0.kWh(), 3.6e6),
            (1.0.eV(), 1.602176634e-19),
            (1.0.lb(), 0.45359237),
            (16.0.oz(), 0.45359237),
            (1.0.inch(), 0.0254),
            (12.0.inch(), 0.3048),
            (1.0.mi(), 1609.344),
            (1.0.nmi(), 1852.0),
            (1.0.au(), 149_597_870_700.0),
            (2.0.minute(), 120.0),
            (1.0.yr(), 365.25 * 86400.0),
            (1.0.atm(), 101_325.0),
            (760.0.torr(), 101_325.0),
            (1.0.bar(), 100_000.0),
            (1.0.kn(), 1852.0 / 3600.0),
            (2.0.L(), 0.002),
            (1.0.Ci(), 3.7e10),
            (1.0.Mohm(), 1e6),
            (1.0.mohm(), 1e-3),
        ];
        for (q, expected) in cases {
            assert_close!(q.magnitude(), expected);
        }
    }

    #[test]
    fn dimensions_by_category() {
        let cases = [
            ("g", Dimension::MASS),
            ("Mpc", Dimension::LENGTH),
            ("day", Dimension::TIME),
            ("nA", Dimension::CURRENT),
            ("degF", Dimension::TEMPERATURE),
            ("mmol", Dimension::AMOUNT),
            ("cd", Dimension::LUMINOSITY),
            ("lbf", Dimension::FORCE),
            ("BTU", Dimension::ENERGY),
            ("hp", Dimension::POWER),
            ("psi", Dimension::PRESSURE),
            ("GHz", Dimension::FREQUENCY),
            ("mL", Dimension::VOLUME),
            ("b", Dimension::AREA),
            ("kn", Dimension::VELOCITY),
            ("uV", Dimension::VOLTAGE),
            ("pC", Dimension::CHARGE),
            ("Wb", Dimension::MAGNETIC_FLUX),
            ("T", Dimension::MAGNETIC_FIELD),
            ("nH", Dimension::INDUCTANCE),
            ("pF", Dimension::CAPACITANCE),
            ("kohm", Dimension::RESISTANCE),
            ("S", Dimension::CONDUCTANCE),
            ("Bq", Dimension::FREQUENCY),
            ("Sv", Dimension::ABSORBED_DOSE),
            ("lm", Dimension::LUMINOSITY),
            ("lx", Dimension::ILLUMINANCE),
        ];
        for (symbol, dim) in cases {
            assert_eq!(unit(symbol).dimension, dim, "unit `{}`", symbol);
        }
    }

    #[test]
    fn literal_methods_match_table() {
        let pairs: Vec<(Quantity, &str)> = vec![
            (3.0.kg(), "kg"),
            (3.0.Da(), "Da"),
            (3.0.pc(), "pc"),
            (3.0.us(), "us"),
            (3.0.degF(), "degF"),
            (3.0.MeV(), "MeV"),
            (3.0.meV(), "meV"),
            (3.0.mmHg(), "mmHg"),
            (3.0.uF(), "uF"),
            (3.0.Gy(), "Gy"),
        ];
        for (q, symbol) in pairs {
            assert_eq!(q, unit(symbol).apply(3.0));
        }
    }

    #[test]
    fn temperatures() {
        assert_eq!(0.0.degC().magnitude(), 273.15);
        assert_close!(32.0.degF().magnitude(), 273.15);
        assert_close!(212.0.degF().magnitude(), 373.15);
        assert_close!((-40.0).degF().magnitude(), (-40.0).degC().magnitude());

        // Offsets cancel in a difference
        let boiling = 100.0.degC();
        let hotter = (boiling + 100.0.K()).unwrap();
        assert_close!((hotter - boiling).unwrap().magnitude(), 100.0);
        assert_close!((200.0.degC() - 100.0.degC()).unwrap().magnitude(), 100.0);

        // ...but not in a sum, which is well-typed yet meaningless
        let sum = (0.0.degC() + 100.0.degC()).unwrap();
        assert_close!(sum.magnitude(), 646.3);
        assert_eq!(sum.dimension(), Dimension::TEMPERATURE);
    }

    #[test]
    fn conversion() {
        assert_close!(convert(1.0, unit("mi"), unit("km")).unwrap(), 1.609344);
        assert_close!(convert(100.0, unit("degC"), unit("degF")).unwrap(), 212.0, 1e-9);
        assert_close!(convert(1.0, unit("kWh"), unit("kJ")).unwrap(), 3600.0);
        assert!(matches!(
            convert(1.0, unit("m"), unit("s")),
            Err(DimensionError::DimensionMismatch {
                operation: Operation::Convert,
                ..
            })
        ));
    }

    #[test]
    fn lookup_by_symbol() {
        assert_eq!(lookup("in").unwrap().scale, 0.0254);
        assert_eq!(lookup("min").unwrap().scale, 60.0);
        assert!(lookup("kilometers").is_none());
        assert_eq!(
            Quantity::from_unit(1.0, "furlong"),
            Err(UnitError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(Quantity::from_unit(2.0, "km").unwrap(), 2000.0.m());
    }
}
