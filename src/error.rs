//! Error types for reductions.
//!
//! Only the reducer can fail. Its failures are synchronous and abandon the
//! whole reduction; no partial accumulator is returned.

use crate::operator::Operator;

/// A failure while applying an [`Operator`] to two operands.
///
/// # Examples
///
/// ```rust
/// use enumerable::{Arithmetic, ArithmeticError, Operator};
///
/// assert_eq!(7_i32.apply(Operator::Divide, 0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(ArithmeticError::DivisionByZero.to_string(), "divided by 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Integer division with a zero divisor.
    #[error("divided by 0")]
    DivisionByZero,

    /// The result does not fit in the operand type.
    #[error("{type_name} overflow applying `{operator}`")]
    Overflow {
        /// The operator being applied.
        operator: Operator,
        /// The operand type.
        type_name: &'static str,
    },

    /// An integer raised to a negative power.
    #[error("negative exponent for {type_name} power")]
    NegativeExponent {
        /// The operand type.
        type_name: &'static str,
    },

    /// The operator is not defined for the operand type.
    #[error("`{operator}` is not defined for {type_name}")]
    Unsupported {
        /// The operator being applied.
        operator: Operator,
        /// The operand type.
        type_name: &'static str,
    },
}

/// A failure of [`Enumerable::inject`](crate::Enumerable::inject) and its
/// variants.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(
///     empty.view().inject_operator(Operator::Add),
///     Err(ReduceError::EmptyWithoutSeed)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// The container is empty and no seed was supplied, so there is no
    /// first element to start from.
    #[error("cannot reduce an empty container without a seed")]
    EmptyWithoutSeed,

    /// Neither a recognised operator nor a combining function was supplied.
    #[error("no operator or combining function supplied")]
    MissingCombinator,

    /// The positional arguments name two operators or two seeds.
    #[error("ambiguous inject arguments: {reason}")]
    AmbiguousArguments {
        /// Which role was supplied twice.
        reason: &'static str,
    },

    /// A token names no operator and cannot be read as a seed of the
    /// element type.
    #[error("token `{token}` names no operator and is not a valid seed")]
    InvalidToken {
        /// The rejected token.
        token: String,
    },

    /// A combination step failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A token that does not name one of the five operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator token `{token}`")]
pub struct UnknownOperatorError {
    /// The rejected token.
    pub token: String,
}

static_assertions::assert_impl_all!(ReduceError: std::error::Error, Send, Sync, Clone);
static_assertions::assert_impl_all!(ArithmeticError: std::error::Error, Send, Sync, Copy);
