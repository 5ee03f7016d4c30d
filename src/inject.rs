//! Argument classification and accumulation for reductions.
//!
//! `inject` accepts up to two positional arguments and an optional combining
//! function, in any of these shapes:
//!
//! | Arguments                  | Seed          | Combinator  | Traversal starts at |
//! |----------------------------|---------------|-------------|---------------------|
//! | function                   | first element | function    | second element      |
//! | seed, function             | seed          | function    | first element       |
//! | operator                   | first element | operator    | second element      |
//! | operator, seed             | seed          | operator    | first element       |
//! | seed, operator             | seed          | operator    | first element       |
//!
//! An argument selects the operator when it names one of the five operators,
//! whether it is passed as an [`Operator`], a token, or a string value.
//! Every other argument is the seed; a token is read into the element type
//! through [`Operand::from_token`].
//!
//! [`Reduction::classify`] resolves the shape once, up front, into a
//! [`Reduction`] record; the accumulation loop never inspects the arguments
//! again.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::{Combinator, InjectArg, Operator, Reduction};
//!
//! let reduction = Reduction::classify(
//!     Some(InjectArg::Value(3)),
//!     Some(InjectArg::token("-")),
//!     None::<fn(i32, i32) -> i32>,
//! )
//! .unwrap();
//!
//! assert_eq!(reduction.seed, Some(3));
//! assert!(matches!(reduction.combinator, Combinator::Operator(Operator::Subtract)));
//! assert_eq!(reduction.run(vec![1, 2, 3]), Ok(-3));
//! ```

use crate::error::ReduceError;
use crate::operator::{Operand, Operator};

/// One positional argument to `inject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectArg<T> {
    /// An operator, already parsed.
    Operator(Operator),
    /// A textual token. It selects an operator if it names one and is read
    /// as the seed otherwise.
    Token(String),
    /// A seed value, unless its textual form names an operator.
    Value(T),
}

/// The role an argument plays once classified.
enum Role<T> {
    Operator(Operator),
    Seed(T),
}

impl<T> InjectArg<T> {
    /// Creates a [`InjectArg::Token`].
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }
}

impl<T: Operand> InjectArg<T> {
    fn into_role(self) -> Result<Role<T>, ReduceError> {
        match self {
            Self::Operator(operator) => Ok(Role::Operator(operator)),
            Self::Token(token) => {
                if let Ok(operator) = token.parse() {
                    return Ok(Role::Operator(operator));
                }
                tracing::trace!(%token, "reading token that names no operator as the seed");
                T::from_token(&token)
                    .map(Role::Seed)
                    .ok_or(ReduceError::InvalidToken { token })
            }
            Self::Value(value) => {
                let named = value
                    .as_token()
                    .and_then(|token| token.parse::<Operator>().ok());
                Ok(named.map_or(Role::Seed(value), Role::Operator))
            }
        }
    }
}

impl<T> From<Operator> for InjectArg<T> {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

/// The binary operation folding elements into the accumulator.
#[derive(Debug, Clone)]
pub enum Combinator<F> {
    /// A named arithmetic operator.
    Operator(Operator),
    /// An arbitrary combining function `(accumulator, element) -> accumulator`.
    Function(F),
}

impl<F> Combinator<F> {
    /// Returns the operator, if this combinator is one.
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(operator) => Some(*operator),
            Self::Function(_) => None,
        }
    }
}

/// A classified reduction: an optional explicit seed and a combinator.
#[derive(Debug, Clone)]
pub struct Reduction<T, F> {
    /// The explicit seed. When absent the first element is the seed and the
    /// traversal starts from the second.
    pub seed: Option<T>,
    /// How the accumulator is combined with each element.
    pub combinator: Combinator<F>,
}

impl<T, F> Reduction<T, F> {
    /// Classifies the positional arguments of `inject`.
    ///
    /// An argument is the operator selector if it names one of the five
    /// operators, in either position: an [`InjectArg::Operator`], a token, or
    /// a value whose [`Operand::as_token`] form is an operator name. Every
    /// other argument is the seed. A recognised operator takes precedence
    /// over `function`.
    ///
    /// # Errors
    ///
    /// - [`ReduceError::InvalidToken`] if a token names no operator and
    ///   [`Operand::from_token`] cannot read it as a seed.
    /// - [`ReduceError::AmbiguousArguments`] if two operators or two seeds
    ///   are supplied.
    /// - [`ReduceError::MissingCombinator`] if there is neither an operator
    ///   nor a function.
    pub fn classify(
        first: Option<InjectArg<T>>,
        second: Option<InjectArg<T>>,
        function: Option<F>,
    ) -> Result<Self, ReduceError>
    where
        T: Operand,
    {
        let mut operator = None;
        let mut seed = None;

        for argument in [first, second].into_iter().flatten() {
            match argument.into_role()? {
                Role::Operator(selected) => {
                    if operator.replace(selected).is_some() {
                        return Err(ReduceError::AmbiguousArguments {
                            reason: "two operators supplied",
                        });
                    }
                }
                Role::Seed(value) => {
                    if seed.replace(value).is_some() {
                        return Err(ReduceError::AmbiguousArguments {
                            reason: "two seeds supplied",
                        });
                    }
                }
            }
        }

        let combinator = match (operator, function) {
            (Some(operator), _) => Combinator::Operator(operator),
            (None, Some(function)) => Combinator::Function(function),
            (None, None) => return Err(ReduceError::MissingCombinator),
        };

        tracing::trace!(
            seeded = seed.is_some(),
            operator = ?combinator.operator(),
            "classified inject arguments"
        );
        Ok(Self { seed, combinator })
    }

    /// Folds `elements` left to right and returns the final accumulator.
    ///
    /// # Errors
    ///
    /// - [`ReduceError::EmptyWithoutSeed`] if there is no seed and
    ///   `elements` is empty.
    /// - [`ReduceError::Arithmetic`] if an operator step fails; the
    ///   remaining elements are not visited.
    pub fn run<I>(self, elements: I) -> Result<T, ReduceError>
    where
        I: IntoIterator<Item = T>,
        T: Operand,
        F: FnMut(T, T) -> T,
    {
        let Self { seed, combinator } = self;
        match combinator {
            Combinator::Operator(operator) => accumulate(seed, elements, |accumulator, element| {
                accumulator
                    .operate(operator, element)
                    .map_err(ReduceError::from)
            }),
            Combinator::Function(mut function) => {
                accumulate(seed, elements, |accumulator, element| {
                    Ok(function(accumulator, element))
                })
            }
        }
    }
}

/// Seeds the accumulator, explicitly or from the first element, and folds
/// the remaining elements into it with `step`.
pub(crate) fn accumulate<T, I, F>(seed: Option<T>, elements: I, step: F) -> Result<T, ReduceError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Result<T, ReduceError>,
{
    let mut elements = elements.into_iter();
    let seed = match seed {
        Some(seed) => seed,
        None => elements.next().ok_or(ReduceError::EmptyWithoutSeed)?,
    };
    elements.try_fold(seed, step).inspect_err(|error| {
        tracing::debug!(%error, "reduction failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithmeticError;
    use rstest::rstest;

    type Function = fn(i32, i32) -> i32;

    fn multiply(accumulator: i32, element: i32) -> i32 {
        accumulator * element
    }

    #[rstest]
    fn classify_function_only() {
        let reduction = Reduction::<i32, Function>::classify(None, None, Some(multiply)).unwrap();
        assert_eq!(reduction.seed, None);
        assert!(matches!(reduction.combinator, Combinator::Function(_)));
    }

    #[rstest]
    fn classify_seed_and_function() {
        let reduction =
            Reduction::<i32, Function>::classify(Some(InjectArg::Value(2)), None, Some(multiply))
                .unwrap();
        assert_eq!(reduction.seed, Some(2));
        assert!(matches!(reduction.combinator, Combinator::Function(_)));
    }

    #[rstest]
    #[case(Some(InjectArg::Value(3)), Some(InjectArg::token("-")))]
    #[case(Some(InjectArg::token("-")), Some(InjectArg::Value(3)))]
    #[case(Some(InjectArg::Value(3)), Some(InjectArg::Operator(Operator::Subtract)))]
    #[case(Some(InjectArg::token(":-")), Some(InjectArg::Value(3)))]
    fn classify_operator_and_seed_in_either_order(
        #[case] first: Option<InjectArg<i32>>,
        #[case] second: Option<InjectArg<i32>>,
    ) {
        let reduction = Reduction::<i32, Function>::classify(first, second, None).unwrap();
        assert_eq!(reduction.seed, Some(3));
        assert_eq!(reduction.combinator.operator(), Some(Operator::Subtract));
    }

    #[rstest]
    fn classify_operator_in_second_position_alone() {
        let reduction =
            Reduction::<i32, Function>::classify(None, Some(Operator::Add.into()), None).unwrap();
        assert_eq!(reduction.seed, None);
        assert_eq!(reduction.combinator.operator(), Some(Operator::Add));
    }

    #[rstest]
    fn classify_operator_wins_over_function() {
        let reduction = Reduction::<i32, Function>::classify(
            Some(InjectArg::token("+")),
            None,
            Some(multiply),
        )
        .unwrap();
        assert_eq!(reduction.combinator.operator(), Some(Operator::Add));
    }

    #[rstest]
    fn classify_unrecognised_token_becomes_seed() {
        let reduction =
            Reduction::<i32, Function>::classify(Some(InjectArg::token("5")), None, Some(multiply))
                .unwrap();
        assert_eq!(reduction.seed, Some(5));
        assert!(matches!(reduction.combinator, Combinator::Function(_)));
    }

    #[rstest]
    fn classify_string_token_becomes_seed() {
        let reduction = Reduction::<String, fn(String, String) -> String>::classify(
            Some(InjectArg::token("x")),
            None,
            Some(|memo, word| memo + &word),
        )
        .unwrap();
        assert_eq!(reduction.seed, Some(String::from("x")));
        assert_eq!(
            reduction.run(vec![String::from("a"), String::from("b")]),
            Ok(String::from("xab"))
        );
    }

    #[rstest]
    fn classify_string_value_naming_operator_selects_it() {
        let reduction = Reduction::<String, fn(String, String) -> String>::classify(
            Some(InjectArg::Value(String::from("+"))),
            None,
            None,
        )
        .unwrap();
        assert_eq!(reduction.seed, None);
        assert_eq!(reduction.combinator.operator(), Some(Operator::Add));
    }

    #[rstest]
    fn classify_token_seed_and_operator_in_either_order() {
        let reduction = Reduction::<i32, Function>::classify(
            Some(InjectArg::token("-")),
            Some(InjectArg::token("10")),
            None,
        )
        .unwrap();
        assert_eq!(reduction.seed, Some(10));
        assert_eq!(reduction.run(vec![1, 2, 3]), Ok(4));
    }

    #[rstest]
    fn classify_token_that_is_no_seed_fails() {
        let result =
            Reduction::<i32, Function>::classify(Some(InjectArg::token("%")), None, Some(multiply));
        assert_eq!(
            result.err(),
            Some(ReduceError::InvalidToken {
                token: String::from("%")
            })
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(InjectArg::Value(3)))]
    #[case(Some(InjectArg::token("3")))]
    fn classify_without_combinator_fails(#[case] first: Option<InjectArg<i32>>) {
        let result = Reduction::<i32, Function>::classify(first, None, None);
        assert!(matches!(result, Err(ReduceError::MissingCombinator)));
    }

    #[rstest]
    fn classify_token_seed_and_value_seed_are_two_seeds() {
        let result = Reduction::<i32, Function>::classify(
            Some(InjectArg::token("1")),
            Some(InjectArg::Value(2)),
            Some(multiply),
        );
        assert!(matches!(
            result,
            Err(ReduceError::AmbiguousArguments { reason: "two seeds supplied" })
        ));
    }

    #[rstest]
    fn classify_two_seeds_fails() {
        let result = Reduction::<i32, Function>::classify(
            Some(InjectArg::Value(1)),
            Some(InjectArg::Value(2)),
            Some(multiply),
        );
        assert!(matches!(
            result,
            Err(ReduceError::AmbiguousArguments { reason: "two seeds supplied" })
        ));
    }

    #[rstest]
    fn classify_two_operators_fails() {
        let result = Reduction::<i32, Function>::classify(
            Some(InjectArg::token("+")),
            Some(InjectArg::Operator(Operator::Multiply)),
            None,
        );
        assert!(matches!(
            result,
            Err(ReduceError::AmbiguousArguments { reason: "two operators supplied" })
        ));
    }

    #[rstest]
    #[case(None, vec![1, 2, 3], Ok(-4))]
    #[case(Some(3), vec![1, 2, 3], Ok(-3))]
    #[case(Some(3), vec![], Ok(3))]
    #[case(None, vec![9], Ok(9))]
    #[case(None, vec![], Err(ReduceError::EmptyWithoutSeed))]
    fn run_subtract(
        #[case] seed: Option<i32>,
        #[case] elements: Vec<i32>,
        #[case] expected: Result<i32, ReduceError>,
    ) {
        let reduction: Reduction<i32, Function> = Reduction {
            seed,
            combinator: Combinator::Operator(Operator::Subtract),
        };
        assert_eq!(reduction.run(elements), expected);
    }

    #[rstest]
    fn run_function_with_seed() {
        let reduction: Reduction<i32, Function> = Reduction {
            seed: Some(2),
            combinator: Combinator::Function(multiply),
        };
        assert_eq!(reduction.run(vec![1, 2, 3]), Ok(12));
    }

    #[rstest]
    fn run_stops_at_first_arithmetic_failure() {
        let mut visited = Vec::new();
        let elements = [4, 0, 2].into_iter().inspect(|element| visited.push(*element));
        let reduction: Reduction<i32, Function> = Reduction {
            seed: Some(100),
            combinator: Combinator::Operator(Operator::Divide),
        };
        assert_eq!(
            reduction.run(elements),
            Err(ReduceError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(visited, vec![4, 0]);
    }

    #[rstest]
    fn accumulate_without_seed_starts_from_first_element() {
        let mut steps = Vec::new();
        let result = accumulate(None, vec![1, 2, 3], |accumulator, element| {
            steps.push((accumulator, element));
            Ok(accumulator + element)
        });
        assert_eq!(result, Ok(6));
        assert_eq!(steps, vec![(1, 2), (3, 3)]);
    }
}
