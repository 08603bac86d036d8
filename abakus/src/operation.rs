//! The six supported arithmetic operations.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An arithmetic operation on two `f64` operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Power,
}

impl Operation {
    /// All operations in menu order (menu code `1` to `6`).
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// The operator symbol, e.g. `"**"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
        }
    }

    /// The label used in menus, e.g. `"Addition"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Modulo => "Modulo",
            Self::Power => "Power",
        }
    }

    /// The menu code (`"1"` to `"6"`) selecting this operation.
    #[must_use]
    pub const fn menu_code(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::Subtract => "2",
            Self::Multiply => "3",
            Self::Divide => "4",
            Self::Modulo => "5",
            Self::Power => "6",
        }
    }

    /// Look up an operation by its menu code.
    #[must_use]
    pub fn from_menu_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.menu_code() == code)
    }

    /// Look up an operation by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Division and modulo by zero are reported as errors. Everything else
    /// follows `f64` arithmetic, so overflow results in an infinity and invalid
    /// powers in `NaN`.
    ///
    /// The remainder is floored: its sign follows the divisor.
    #[allow(clippy::float_cmp)]
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(Error::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
            Self::Modulo if rhs == 0.0 => Err(Error::ModuloByZero),
            Self::Modulo => Ok(floored_rem(lhs, rhs)),
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

#[allow(clippy::float_cmp)]
fn floored_rem(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    if rem == 0.0 {
        0.0_f64.copysign(rhs)
    } else if (rem < 0.0) != (rhs < 0.0) {
        rem + rhs
    } else {
        rem
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts a symbol (`"*"`) or a menu code (`"3"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_symbol(s)
            .or_else(|| Self::from_menu_code(s))
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}
