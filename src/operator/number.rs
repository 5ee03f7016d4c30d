//! A dynamically typed numeric value.

use std::fmt;

use super::{Arithmetic, Operand, Operator};
use crate::error::ArithmeticError;

/// An integer or a float, decided per value.
///
/// Combining two `Integer`s keeps integer semantics, so division truncates
/// toward zero. If either operand is a `Float` the operation is carried out
/// in floating point. An integer raised to a negative integer power also
/// yields a `Float`.
///
/// # Examples
///
/// ```rust
/// use enumerable::{Arithmetic, Number, Operator};
///
/// assert_eq!(Number::from(7).apply(Operator::Divide, Number::from(2)), Ok(Number::Integer(3)));
/// assert_eq!(Number::from(7).apply(Operator::Divide, Number::from(2.0)), Ok(Number::Float(3.5)));
/// assert_eq!(Number::from(2).apply(Operator::Power, Number::from(-1)), Ok(Number::Float(0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Number {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
}

impl Number {
    /// Returns `true` for `Integer`.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the integer value, if this is an `Integer`.
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(value),
            Self::Float(_) => None,
        }
    }

    /// Widens the value to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
        }
    }
}

impl Arithmetic for Number {
    fn apply(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
        match (self, rhs) {
            (Self::Integer(_), Self::Integer(exponent))
                if operator == Operator::Power && exponent < 0 =>
            {
                self.to_f64().apply(operator, rhs.to_f64()).map(Self::Float)
            }
            (Self::Integer(left), Self::Integer(right)) => {
                left.apply(operator, right).map(Self::Integer)
            }
            (left, right) => left
                .to_f64()
                .apply(operator, right.to_f64())
                .map(Self::Float),
        }
    }
}

/// Integer tokens become `Integer` seeds and other numeric tokens `Float`
/// seeds.
impl Operand for Number {
    fn operate(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
        self.apply(operator, rhs)
    }

    fn from_token(token: &str) -> Option<Self> {
        token
            .parse()
            .map(Self::Integer)
            .or_else(|_| token.parse().map(Self::Float))
            .ok()
    }
}
