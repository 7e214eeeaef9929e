//! The CLDR operand-symbol set.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Serialize;

/// A plural operand symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Absolute value of the number.
    N,
    /// Integer digits.
    I,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Visible fraction digits as an integer, with trailing zeros.
    F,
    /// Visible fraction digits as an integer, without trailing zeros.
    T,
    /// Compact decimal exponent.
    E,
    /// Synonym for `e`.
    C,
}

impl Operand {
    /// All symbol names, as they appear in rule data.
    pub const NAMES: [&'static str; 8] = ["n", "i", "v", "w", "f", "t", "e", "c"];

    pub fn as_str(self) -> &'static str {
        match self {
            Operand::N => "n",
            Operand::I => "i",
            Operand::V => "v",
            Operand::W => "w",
            Operand::F => "f",
            Operand::T => "t",
            Operand::E => "e",
            Operand::C => "c",
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Operand::N),
            "i" => Ok(Operand::I),
            "v" => Ok(Operand::V),
            "w" => Ok(Operand::W),
            "f" => Ok(Operand::F),
            "t" => Ok(Operand::T),
            "e" => Ok(Operand::E),
            "c" => Ok(Operand::C),
            _ => Err(()),
        }
    }
}

/// A number decomposed into CLDR operands.
///
/// Fields are `f64` so that rule arithmetic behaves the same for every
/// operand. For an integer input `v`, `w`, `f` and `t` are zero and `i`
/// equals `n`.
///
/// ```
/// use istring::plural::Operands;
///
/// let ops = Operands::from(-2.25);
/// assert_eq!((ops.n, ops.i, ops.v, ops.f), (2.25, 2.0, 2.0, 25.0));
///
/// let ops = Operands::from(7_i64);
/// assert_eq!((ops.n, ops.i, ops.v, ops.f), (7.0, 7.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Operands {
    pub n: f64,
    pub i: f64,
    pub v: f64,
    pub w: f64,
    pub f: f64,
    pub t: f64,
    pub e: f64,
}

impl Operands {
    /// Decompose an integer.
    pub fn from_integer(number: i64) -> Self {
        let n = number.unsigned_abs() as f64;
        Self::whole(n)
    }

    /// Decompose a float using its shortest decimal rendering.
    ///
    /// Trailing zeros are never visible in that rendering, so `w == v` and
    /// `t == f`.
    pub fn from_float(number: f64) -> Self {
        let n = number.abs();
        if !n.is_finite() {
            return Self::whole(n);
        }
        let rendered = n.to_string();
        let Some((integer, fraction)) = rendered.split_once('.') else {
            return Self::whole(n);
        };
        let i = integer.parse::<f64>().unwrap_or(f64::NAN);
        let v = fraction.len() as f64;
        let f = fraction.parse::<f64>().unwrap_or(f64::NAN);
        Operands {
            n,
            i,
            v,
            w: v,
            f,
            t: f,
            e: 0.0,
        }
    }

    fn whole(n: f64) -> Self {
        Operands {
            n,
            i: n.trunc(),
            v: 0.0,
            w: 0.0,
            f: 0.0,
            t: 0.0,
            e: 0.0,
        }
    }

    /// Look up a single operand.
    pub fn get(&self, operand: Operand) -> f64 {
        match operand {
            Operand::N => self.n,
            Operand::I => self.i,
            Operand::V => self.v,
            Operand::W => self.w,
            Operand::F => self.f,
            Operand::T => self.t,
            Operand::E | Operand::C => self.e,
        }
    }
}

impl From<i64> for Operands {
    fn from(number: i64) -> Self {
        Operands::from_integer(number)
    }
}

impl From<f64> for Operands {
    fn from(number: f64) -> Self {
        Operands::from_float(number)
    }
}
