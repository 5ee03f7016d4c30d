//! Named arithmetic operators and their dispatch.
//!
//! A reduction can be driven by one of five named operators instead of a
//! closure. The [`Operator`] enum names them; the [`Arithmetic`] trait says
//! how a type combines two operands under each of them. [`Operand`] is what
//! a reduction asks of its element type: operator dispatch for arithmetic
//! types and an `Unsupported` error for everything else.
//!
//! Integer types use checked arithmetic so that overflow, division by zero
//! and negative exponents surface as [`ArithmeticError`]s instead of panics.
//! Division truncates toward zero for integers and is fractional for floats.
//! [`Number`] mixes the two: it keeps integer semantics while both operands
//! are integers and switches to floating point as soon as one is not.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::{Arithmetic, Number, Operator};
//!
//! let operator: Operator = "-".parse().unwrap();
//! assert_eq!(operator, Operator::Subtract);
//!
//! assert_eq!(7_i64.apply(Operator::Divide, 2), Ok(3));
//! assert_eq!(7.0_f64.apply(Operator::Divide, 2.0), Ok(3.5));
//! assert_eq!(
//!     Number::Integer(7).apply(Operator::Divide, Number::Float(2.0)),
//!     Ok(Number::Float(3.5))
//! );
//! ```

mod number;

use std::fmt;
use std::str::FromStr;

pub use number::Number;

use crate::error::{ArithmeticError, UnknownOperatorError};

/// One of the five arithmetic operators a reduction can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `-`
    Subtract,
    /// `**`
    Power,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Multiply,
        Self::Divide,
        Self::Subtract,
        Self::Power,
    ];

    /// Returns the operator's symbolic token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::Operator;
    ///
    /// assert_eq!(Operator::Power.symbol(), "**");
    /// ```
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Subtract => "-",
            Self::Power => "**",
        }
    }

    /// Returns the operator's word token.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Subtract => "subtract",
            Self::Power => "power",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// Parses a symbolic (`+`) or word (`add`) token, optionally prefixed with
/// `:`.
impl FromStr for Operator {
    type Err = UnknownOperatorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bare = token.strip_prefix(':').unwrap_or(token);
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == bare || operator.name() == bare)
            .ok_or_else(|| UnknownOperatorError {
                token: token.to_owned(),
            })
    }
}

/// Types that can be combined under an [`Operator`].
///
/// `apply` computes `self <operator> rhs`, in that operand order.
pub trait Arithmetic: Sized {
    /// Applies `operator` with `self` on the left and `rhs` on the right.
    ///
    /// # Errors
    ///
    /// Returns an [`ArithmeticError`] when the operation is undefined for the
    /// operands or its result is not representable.
    fn apply(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError>;
}

fn signed_exponent<T>(exponent: T, type_name: &'static str) -> Result<u32, ArithmeticError>
where
    T: TryInto<u32> + PartialOrd + Default,
{
    if exponent < T::default() {
        return Err(ArithmeticError::NegativeExponent { type_name });
    }
    unsigned_exponent(exponent, type_name)
}

fn unsigned_exponent<T>(exponent: T, type_name: &'static str) -> Result<u32, ArithmeticError>
where
    T: TryInto<u32>,
{
    exponent
        .try_into()
        .map_err(|_| ArithmeticError::Overflow {
            operator: Operator::Power,
            type_name,
        })
}

macro_rules! impl_integer_arithmetic {
    ($exponent:ident => $($integer:ty),* $(,)?) => {
        $(
            impl Arithmetic for $integer {
                fn apply(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
                    const TYPE_NAME: &str = stringify!($integer);
                    let overflow = || ArithmeticError::Overflow {
                        operator,
                        type_name: TYPE_NAME,
                    };
                    match operator {
                        Operator::Add => self.checked_add(rhs).ok_or_else(overflow),
                        Operator::Subtract => self.checked_sub(rhs).ok_or_else(overflow),
                        Operator::Multiply => self.checked_mul(rhs).ok_or_else(overflow),
                        Operator::Divide => {
                            if rhs == 0 {
                                return Err(ArithmeticError::DivisionByZero);
                            }
                            self.checked_div(rhs).ok_or_else(overflow)
                        }
                        Operator::Power => {
                            let exponent = $exponent(rhs, TYPE_NAME)?;
                            self.checked_pow(exponent).ok_or_else(overflow)
                        }
                    }
                }
            }
        )*
    };
}

impl_integer_arithmetic!(signed_exponent => i8, i16, i32, i64, i128, isize);
impl_integer_arithmetic!(unsigned_exponent => u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_arithmetic {
    ($($float:ty),* $(,)?) => {
        $(
            impl Arithmetic for $float {
                #[inline]
                fn apply(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
                    Ok(match operator {
                        Operator::Add => self + rhs,
                        Operator::Subtract => self - rhs,
                        Operator::Multiply => self * rhs,
                        Operator::Divide => self / rhs,
                        Operator::Power => self.powf(rhs),
                    })
                }
            }
        )*
    };
}

impl_float_arithmetic!(f32, f64);

/// Strings only define `+`, as concatenation.
impl Arithmetic for String {
    fn apply(mut self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
        match operator {
            Operator::Add => {
                self.push_str(&rhs);
                Ok(self)
            }
            _ => Err(ArithmeticError::Unsupported {
                operator,
                type_name: "String",
            }),
        }
    }
}

/// Element types a reduction can run over.
///
/// A reduction may be driven by a named operator, and a textual argument
/// that names no operator becomes the seed. Both need help from the element
/// type, which this trait provides. Every method has a default, so a type
/// that supports no operator and has no textual form needs only an empty
/// impl:
///
/// ```rust
/// use enumerable::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point(i32, i32);
///
/// impl Operand for Point {}
///
/// let points = [Point(1, 2), Point(3, 4)];
/// let sum = points.view().inject(
///     None,
///     None,
///     Some(|left: Point, right: Point| Point(left.0 + right.0, left.1 + right.1)),
/// );
/// assert_eq!(sum, Ok(Point(4, 6)));
/// assert!(points.view().inject_operator(Operator::Add).is_err());
/// ```
pub trait Operand: Sized {
    /// Applies `operator` with `self` on the left and `rhs` on the right.
    ///
    /// # Errors
    ///
    /// The default rejects every operator with
    /// [`ArithmeticError::Unsupported`].
    fn operate(self, operator: Operator, _rhs: Self) -> Result<Self, ArithmeticError> {
        Err(ArithmeticError::Unsupported {
            operator,
            type_name: std::any::type_name::<Self>(),
        })
    }

    /// Builds a seed from a token that names no operator.
    fn from_token(_token: &str) -> Option<Self> {
        None
    }

    /// Returns the value's textual form, checked for an operator name when
    /// the value is passed as an argument.
    fn as_token(&self) -> Option<&str> {
        None
    }
}

macro_rules! impl_numeric_operand {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Operand for $numeric {
                #[inline]
                fn operate(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
                    self.apply(operator, rhs)
                }

                fn from_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }
            }
        )*
    };
}

impl_numeric_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Operand for String {
    fn operate(self, operator: Operator, rhs: Self) -> Result<Self, ArithmeticError> {
        self.apply(operator, rhs)
    }

    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_owned())
    }

    fn as_token(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Operand for bool {}
impl Operand for char {}
impl<T: ?Sized> Operand for &T {}
impl<T> Operand for Vec<T> {}
impl<T> Operand for Option<T> {}

macro_rules! impl_tuple_operand {
    ($(($($element:ident),+)),* $(,)?) => {
        $(
            impl<$($element),+> Operand for ($($element,)+) {}
        )*
    };
}

impl_tuple_operand!((A, B), (A, B, C), (A, B, C, D));
