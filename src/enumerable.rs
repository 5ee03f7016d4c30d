//! Traversal and aggregation operations.
//!
//! This module provides the [`Enumerable`] extension trait. It is
//! implemented for every [`Visit`] type, so every operation below works the
//! same way over ordered sequences and associative containers. Each is
//! written in terms of [`Visit::visit`] or of operations already defined
//! here:
//!
//! - `each` is the visiting primitive with the control flow hidden
//! - `each_with_index`, `select`, `all`, `any`, `count_by`, `count_value`,
//!   `map` are built on `each`
//! - `none` is built on `visit` directly, since it is the one operation that
//!   stops as soon as the answer is known
//! - `inject` and `fold` thread an owned accumulator through the units
//!
//! Operations that take a callback also have a callback-free form returning
//! an [`Enumerator`]. The callback-free form never visits anything and never
//! stands for an empty result.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use enumerable::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! assert!(numbers.view().all(|number| *number < 4));
//! assert_eq!(numbers.view().count_by(|number| *number > 1), 2);
//! assert_eq!(numbers.view().map(|number| number * 10), vec![10, 20, 30]);
//!
//! let letters: BTreeMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
//! let even = letters.view().select(|(_, value)| *value % 2 == 0);
//! assert_eq!(even.len(), 1);
//! assert!(letters.view().none(|(key, _)| *key == "z"));
//! ```

use std::ops::ControlFlow;

use crate::enumerator::{Enumerator, Indexed};
use crate::error::ReduceError;
use crate::inject::{InjectArg, Reduction, accumulate};
use crate::operator::{Operand, Operator};
use crate::view::{Rebuild, Visit};

/// The three quantifiers.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let numbers = [1, 2, 3];
/// assert!(numbers.view().quantify(Quantifier::Any, |number| *number == 3));
/// assert!(!Quantifier::None.without_predicate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Every unit satisfies the predicate.
    All,
    /// At least one unit satisfies the predicate.
    Any,
    /// No unit satisfies the predicate.
    None,
}

impl Quantifier {
    /// Returns the answer given when no predicate is supplied.
    ///
    /// `All` and `Any` are treated as trivially satisfied and `None` as its
    /// negation, regardless of the container's contents. In particular `Any`
    /// answers `true` even for an empty container.
    pub const fn without_predicate(self) -> bool {
        match self {
            Self::All | Self::Any => true,
            Self::None => false,
        }
    }
}

/// Traversal and aggregation operations over any [`Visit`].
///
/// All operations read their input without modifying it and return newly
/// built values.
pub trait Enumerable: Visit {
    /// Invokes `callback` once per unit, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use enumerable::prelude::*;
    ///
    /// let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let mut lines = Vec::new();
    /// map.view().each(|(key, value)| lines.push(format!("Key: {key}, Value: {value}")));
    /// assert_eq!(lines, vec!["Key: a, Value: 1", "Key: b, Value: 2"]);
    /// ```
    fn each<F>(&self, mut callback: F)
    where
        F: FnMut(Self::Unit),
    {
        tracing::trace!(units = ?self.unit_count(), "visiting units");
        let _ = self.visit(|unit| {
            callback(unit);
            ControlFlow::Continue(())
        });
    }

    /// Returns a lazy handle over the units instead of visiting them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = [1, 2, 3];
    /// let enumerator = numbers.view().to_enum();
    /// assert_eq!(enumerator.size(), Some(3));
    /// assert_eq!(enumerator.iter().copied().sum::<i32>(), 6);
    /// ```
    fn to_enum(&self) -> Enumerator<Self::Units> {
        Enumerator::new(self.units())
    }

    /// Invokes `callback` with each unit and its zero-based position.
    ///
    /// Positions count logical units, so a map's pairs are numbered
    /// `0, 1, 2, ...` just like a sequence's elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let words = ["cat", "sheep"];
    /// let mut lines = Vec::new();
    /// words.view().each_with_index(|word, index| lines.push(format!("{index}:{word}")));
    /// assert_eq!(lines, vec!["0:cat", "1:sheep"]);
    /// ```
    fn each_with_index<F>(&self, mut callback: F)
    where
        F: FnMut(Self::Unit, usize),
    {
        let mut index = 0;
        self.each(|unit| {
            callback(unit, index);
            index += 1;
        });
    }

    /// Returns a lazy handle over `(unit, index)` pairs.
    fn each_with_index_enum(&self) -> Enumerator<Indexed<Self::Units>> {
        Enumerator::new(Indexed::new(self.units()))
    }

    /// Returns a new container of the same shape holding the units for
    /// which `predicate` holds, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    ///
    /// use enumerable::prelude::*;
    ///
    /// let numbers = vec![1, 2, 3];
    /// assert_eq!(numbers.view().select(|number| *number % 2 == 1), vec![1, 3]);
    ///
    /// let map: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let selected = map.view().select(|(_, value)| *value == 2);
    /// assert_eq!(selected, HashMap::from([("b", 2)]));
    /// ```
    fn select<P>(&self, mut predicate: P) -> <Self as Rebuild>::Container
    where
        Self: Rebuild,
        P: FnMut(Self::Unit) -> bool,
    {
        let mut survivors = Vec::new();
        self.each(|unit| {
            if predicate(unit) {
                survivors.push(unit);
            }
        });
        tracing::trace!(kept = survivors.len(), "rebuilding selected units");
        <Self as Rebuild>::rebuild(survivors)
    }

    /// The callback-free form of [`select`](Enumerable::select): a lazy
    /// handle over every unit, identical to [`to_enum`](Enumerable::to_enum).
    fn select_enum(&self) -> Enumerator<Self::Units> {
        self.to_enum()
    }

    /// Returns `true` if `predicate` holds for every unit.
    ///
    /// Every unit is visited even after a failing one. An empty container
    /// answers `true`.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Unit) -> bool,
    {
        let mut holds = true;
        self.each(|unit| {
            if !predicate(unit) {
                holds = false;
            }
        });
        holds
    }

    /// Returns `true` if `predicate` holds for at least one unit.
    ///
    /// Every unit is visited even after a matching one.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Unit) -> bool,
    {
        let mut holds = false;
        self.each(|unit| {
            if predicate(unit) {
                holds = true;
            }
        });
        holds
    }

    /// Returns `true` if `predicate` holds for no unit.
    ///
    /// Traversal stops at the first matching unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = [1, 5, 2, 3];
    /// let mut visited = 0;
    /// let none = numbers.view().none(|number| {
    ///     visited += 1;
    ///     *number == 5
    /// });
    /// assert!(!none);
    /// assert_eq!(visited, 2);
    /// ```
    fn none<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Unit) -> bool,
    {
        let flow = self.visit(|unit| {
            if predicate(unit) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        if flow.is_break() {
            tracing::trace!("none stopped at the first matching unit");
        }
        flow.is_continue()
    }

    /// Evaluates `quantifier` with `predicate`.
    fn quantify<P>(&self, quantifier: Quantifier, predicate: P) -> bool
    where
        P: FnMut(Self::Unit) -> bool,
    {
        match quantifier {
            Quantifier::All => self.all(predicate),
            Quantifier::Any => self.any(predicate),
            Quantifier::None => self.none(predicate),
        }
    }

    /// Evaluates `quantifier` without a predicate.
    ///
    /// See [`Quantifier::without_predicate`]; the container is not visited.
    fn quantify_without_predicate(&self, quantifier: Quantifier) -> bool {
        quantifier.without_predicate()
    }

    /// Returns the number of units.
    ///
    /// Uses the container's own size when it exposes one and counts by
    /// visiting otherwise.
    fn count(&self) -> usize {
        self.unit_count().unwrap_or_else(|| {
            let mut total = 0;
            self.each(|_| total += 1);
            total
        })
    }

    /// Returns the number of units for which `predicate` holds.
    fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Self::Unit) -> bool,
    {
        let mut matched = 0;
        self.each(|unit| {
            if predicate(unit) {
                matched += 1;
            }
        });
        matched
    }

    /// Returns the number of units equal to `value`.
    ///
    /// Units are compared exactly as they are visited: an element for a
    /// sequence, a whole `(key, value)` pair for an associative container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!([1, 2, 1].view().count_value(&1), 2);
    ///
    /// let map: BTreeMap<&str, i32> = [("a", 1), ("b", 1)].into_iter().collect();
    /// assert_eq!(map.view().count_value((&"b", &1)), 1);
    /// ```
    fn count_value<Q>(&self, value: Q) -> usize
    where
        Self::Unit: PartialEq<Q>,
    {
        self.count_by(|unit| unit == value)
    }

    /// Returns a `Vec` of `transform` applied to each unit, in order.
    ///
    /// The result is always a sequence, whatever the input shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use enumerable::prelude::*;
    ///
    /// let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let pairs = map.view().map(|(key, value)| (*key, *value));
    /// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    /// ```
    fn map<B, F>(&self, mut transform: F) -> Vec<B>
    where
        F: FnMut(Self::Unit) -> B,
    {
        let mut mapped = Vec::with_capacity(self.unit_count().unwrap_or_default());
        self.each(|unit| mapped.push(transform(unit)));
        tracing::trace!(mapped = mapped.len(), "mapped units");
        mapped
    }

    /// The callback-free form of [`map`](Enumerable::map): a lazy handle
    /// over every unit, identical to [`to_enum`](Enumerable::to_enum).
    fn map_enum(&self) -> Enumerator<Self::Units> {
        self.to_enum()
    }

    /// Left-folds the units into an accumulator that starts at `seed`.
    ///
    /// The accumulator type is independent of the unit type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use enumerable::prelude::*;
    ///
    /// let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    /// let total = map.view().fold(0, |sum, (_, value)| sum + value);
    /// assert_eq!(total, 6);
    /// ```
    fn fold<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, Self::Unit) -> A,
    {
        self.units().fold(seed, function)
    }

    /// Reduces the units to one value, classifying the arguments first.
    ///
    /// `first` and `second` are the positional arguments: at most one
    /// operator selector and at most one seed, in either order. `function`
    /// is the combining function used when no operator is selected. See
    /// [`Reduction::classify`] for the rules.
    ///
    /// Without a seed the first unit is the seed and the traversal starts at
    /// the second; with a seed the traversal starts at the first.
    ///
    /// Any element type implementing [`Operand`] can be reduced with a
    /// function, including the `(key, value)` pairs of an associative
    /// container. Types without arithmetic reject operators at the first
    /// combination step.
    ///
    /// # Errors
    ///
    /// - [`ReduceError::InvalidToken`], [`ReduceError::AmbiguousArguments`]
    ///   or [`ReduceError::MissingCombinator`] from classification.
    /// - [`ReduceError::EmptyWithoutSeed`] for an empty container without a
    ///   seed.
    /// - [`ReduceError::Arithmetic`] when an operator step fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = [1, 2, 3];
    /// let result = numbers.view().inject(
    ///     Some(InjectArg::Value(3)),
    ///     Some(InjectArg::token("-")),
    ///     None::<fn(i32, i32) -> i32>,
    /// );
    /// assert_eq!(result, Ok(-3));
    /// ```
    fn inject<F>(
        &self,
        first: Option<InjectArg<<Self as Rebuild>::Owned>>,
        second: Option<InjectArg<<Self as Rebuild>::Owned>>,
        function: Option<F>,
    ) -> Result<<Self as Rebuild>::Owned, ReduceError>
    where
        Self: Rebuild,
        <Self as Rebuild>::Owned: Operand,
        F: FnMut(<Self as Rebuild>::Owned, <Self as Rebuild>::Owned) -> <Self as Rebuild>::Owned,
    {
        Reduction::classify(first, second, function)?
            .run(self.units().map(<Self as Rebuild>::to_owned_unit))
    }

    /// Reduces with `function`, seeding from the first unit.
    ///
    /// Unlike [`inject`](Enumerable::inject) this places no arithmetic
    /// requirement on the units.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyWithoutSeed`] for an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let words = ["cat", "sheep", "bear"];
    /// let longest = words
    ///     .view()
    ///     .inject_with(|memo, word| if memo.len() > word.len() { memo } else { word });
    /// assert_eq!(longest, Ok("sheep"));
    /// ```
    fn inject_with<F>(&self, mut function: F) -> Result<<Self as Rebuild>::Owned, ReduceError>
    where
        Self: Rebuild,
        F: FnMut(<Self as Rebuild>::Owned, <Self as Rebuild>::Owned) -> <Self as Rebuild>::Owned,
    {
        accumulate(
            None,
            self.units().map(<Self as Rebuild>::to_owned_unit),
            |accumulator, element| Ok(function(accumulator, element)),
        )
    }

    /// Reduces with `function`, starting from `seed` and visiting every
    /// unit.
    ///
    /// # Errors
    ///
    /// None in practice; the `Result` matches the other reducers.
    fn inject_seeded<F>(
        &self,
        seed: <Self as Rebuild>::Owned,
        mut function: F,
    ) -> Result<<Self as Rebuild>::Owned, ReduceError>
    where
        Self: Rebuild,
        F: FnMut(<Self as Rebuild>::Owned, <Self as Rebuild>::Owned) -> <Self as Rebuild>::Owned,
    {
        accumulate(
            Some(seed),
            self.units().map(<Self as Rebuild>::to_owned_unit),
            |accumulator, element| Ok(function(accumulator, element)),
        )
    }

    /// Reduces with a named operator, seeding from the first unit.
    ///
    /// A single unit is returned unchanged, even for types without
    /// arithmetic, since no combination step runs.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyWithoutSeed`] for an empty container, or
    /// [`ReduceError::Arithmetic`] when a step fails.
    fn inject_operator(&self, operator: Operator) -> Result<<Self as Rebuild>::Owned, ReduceError>
    where
        Self: Rebuild,
        <Self as Rebuild>::Owned: Operand,
    {
        self.inject(
            Some(InjectArg::Operator(operator)),
            None,
            None::<fn(<Self as Rebuild>::Owned, <Self as Rebuild>::Owned) -> <Self as Rebuild>::Owned>,
        )
    }

    /// Reduces with a named operator, starting from `seed` and visiting
    /// every unit.
    ///
    /// # Errors
    ///
    /// [`ReduceError::Arithmetic`] when a step fails.
    fn inject_operator_seeded(
        &self,
        operator: Operator,
        seed: <Self as Rebuild>::Owned,
    ) -> Result<<Self as Rebuild>::Owned, ReduceError>
    where
        Self: Rebuild,
        <Self as Rebuild>::Owned: Operand,
    {
        self.inject(
            Some(InjectArg::Value(seed)),
            Some(InjectArg::Operator(operator)),
            None::<fn(<Self as Rebuild>::Owned, <Self as Rebuild>::Owned) -> <Self as Rebuild>::Owned>,
        )
    }
}

impl<V: Visit> Enumerable for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithmeticError;
    use crate::operator::Number;
    use crate::view::AsView;
    use rstest::rstest;
    use std::collections::{BTreeMap, HashMap};

    fn letters() -> BTreeMap<&'static str, i32> {
        [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
    }

    // =========================================================================
    // each / each_with_index
    // =========================================================================

    #[rstest]
    fn each_visits_in_order() {
        let mut seen = Vec::new();
        [1, 2, 3].view().each(|number| seen.push(*number));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn each_on_empty_never_calls_back() {
        let empty: Vec<String> = Vec::new();
        let mut calls = 0;
        empty.view().each(|_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(empty.view().to_enum().next(), None);
    }

    #[rstest]
    fn each_with_index_numbers_map_pairs_not_slots() {
        let map = letters();
        let mut seen = Vec::new();
        map.view()
            .each_with_index(|(key, value), index| seen.push((*key, *value, index)));
        assert_eq!(seen, vec![("a", 1, 0), ("b", 2, 1), ("c", 3, 2)]);
    }

    #[rstest]
    fn each_with_index_enum_is_restartable() {
        let words = ["cat", "sheep", "bear"];
        let mut enumerator = words.view().each_with_index_enum();
        assert_eq!(enumerator.next(), Some((&"cat", 0)));
        enumerator.rewind();
        let all: Vec<_> = enumerator.collect();
        assert_eq!(all, vec![(&"cat", 0), (&"sheep", 1), (&"bear", 2)]);
    }

    #[rstest]
    #[case(BTreeMap::new(), Vec::new())]
    #[case(letters(), vec![("a", 1), ("b", 2), ("c", 3)])]
    fn to_enum_over_map_yields_pairs(
        #[case] map: BTreeMap<&'static str, i32>,
        #[case] expected: Vec<(&'static str, i32)>,
    ) {
        let view = map.view();
        let mut enumerator = view.to_enum();
        assert_eq!(enumerator.size(), Some(expected.len()));

        let first_pass: Vec<_> = enumerator.by_ref().map(|(key, value)| (*key, *value)).collect();
        assert_eq!(first_pass, expected);
        assert_eq!(enumerator.next(), None);

        enumerator.rewind();
        let second_pass: Vec<_> = enumerator.map(|(key, value)| (*key, *value)).collect();
        assert_eq!(second_pass, expected);
    }

    #[rstest]
    fn each_with_index_enum_over_map_numbers_pairs() {
        let map = letters();
        let mut enumerator = map.view().each_with_index_enum();
        assert_eq!(enumerator.size(), Some(3));
        assert_eq!(enumerator.next(), Some(((&"a", &1), 0)));

        enumerator.rewind();
        let indexed: Vec<_> = enumerator
            .map(|((key, value), index)| (*key, *value, index))
            .collect();
        assert_eq!(indexed, vec![("a", 1, 0), ("b", 2, 1), ("c", 3, 2)]);
    }

    #[rstest]
    fn enumerators_over_empty_hash_map_are_empty_not_absent() {
        let empty: HashMap<String, i32> = HashMap::new();
        let view = empty.view();

        let mut plain = view.to_enum();
        assert_eq!(plain.size(), Some(0));
        assert_eq!(plain.peek(), None);
        assert_eq!(plain.rewind().next(), None);

        let mut indexed = view.each_with_index_enum();
        assert_eq!(indexed.size(), Some(0));
        assert_eq!(indexed.next(), None);

        let selected: Enumerator<_> = view.select_enum();
        assert_eq!(selected.size(), Some(0));
        assert_eq!(selected.iter().count(), 0);
    }

    #[rstest]
    fn select_enum_over_hash_map_yields_every_pair() {
        let map: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
        let mut enumerator = map.view().select_enum();
        assert_eq!(enumerator.size(), Some(2));

        let mut pairs: Vec<_> = enumerator.by_ref().map(|(key, value)| (*key, *value)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("a", 1), ("b", 2)]);

        enumerator.rewind();
        let indexes: Vec<_> = enumerator.with_index().map(|(_, index)| index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    // =========================================================================
    // select
    // =========================================================================

    #[rstest]
    fn select_keeps_order() {
        let numbers = vec![5, 2, 7, 4, 1];
        assert_eq!(numbers.view().select(|number| *number > 3), vec![5, 7, 4]);
        assert_eq!(numbers, vec![5, 2, 7, 4, 1]);
    }

    #[rstest]
    fn select_on_map_returns_map() {
        let selected = letters().view().select(|(_, value)| *value == 2);
        let expected: BTreeMap<&str, i32> = [("b", 2)].into_iter().collect();
        assert_eq!(selected, expected);
    }

    #[rstest]
    fn select_nothing_returns_empty_container() {
        let map: HashMap<&str, i32> = HashMap::from([("a", 1)]);
        assert!(map.view().select(|_| false).is_empty());
    }

    #[rstest]
    fn select_enum_is_not_empty_result() {
        let numbers = [1, 2, 3];
        let enumerator = numbers.view().select_enum();
        assert_eq!(enumerator.size(), Some(3));
    }

    // =========================================================================
    // quantifiers
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3], true)]
    #[case(vec![1, 5, 3], false)]
    #[case(vec![], true)]
    fn all_below_four(#[case] numbers: Vec<i32>, #[case] expected: bool) {
        assert_eq!(numbers.view().all(|number| *number < 4), expected);
    }

    #[rstest]
    fn all_visits_every_unit() {
        let mut visited = 0;
        let holds = [9, 1, 1].view().all(|number| {
            visited += 1;
            *number < 4
        });
        assert!(!holds);
        assert_eq!(visited, 3);
    }

    #[rstest]
    #[case(vec![1, 2, 3], false)]
    #[case(vec![4], true)]
    #[case(vec![], false)]
    fn any_equal_to_four(#[case] numbers: Vec<i32>, #[case] expected: bool) {
        assert_eq!(numbers.view().any(|number| *number == 4), expected);
    }

    #[rstest]
    fn any_on_map_keys() {
        assert!(!letters().view().any(|(key, _)| *key == "z"));
        assert!(letters().view().any(|(key, _)| *key == "c"));
    }

    #[rstest]
    fn none_on_map_keys() {
        assert!(!letters().view().none(|(key, _)| *key == "c"));
        assert!(letters().view().none(|(key, _)| *key == "z"));
    }

    #[rstest]
    fn none_on_empty_is_true() {
        let empty: Vec<i32> = Vec::new();
        assert!(empty.view().none(|_| true));
    }

    #[rstest]
    #[case(Quantifier::All, true)]
    #[case(Quantifier::Any, true)]
    #[case(Quantifier::None, false)]
    fn without_predicate_ignores_contents(#[case] quantifier: Quantifier, #[case] expected: bool) {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.view().quantify_without_predicate(quantifier), expected);
        assert_eq!([0, 0].view().quantify_without_predicate(quantifier), expected);
    }

    #[rstest]
    #[case(Quantifier::All, false)]
    #[case(Quantifier::Any, true)]
    #[case(Quantifier::None, false)]
    fn quantify_dispatches(#[case] quantifier: Quantifier, #[case] expected: bool) {
        assert_eq!(
            [1, 2, 3].view().quantify(quantifier, |number| *number == 2),
            expected
        );
    }

    // =========================================================================
    // count
    // =========================================================================

    #[rstest]
    fn count_modes() {
        let numbers = [1, 2, 3];
        assert_eq!(numbers.view().count(), 3);
        assert_eq!(numbers.view().count_value(&1), 1);
        assert_eq!(numbers.view().count_by(|number| *number > 1), 2);
    }

    #[rstest]
    fn count_by_on_map_values() {
        assert_eq!(letters().view().count_by(|(_, value)| *value % 2 != 0), 2);
    }

    #[rstest]
    fn count_value_compares_whole_pairs() {
        let map = letters();
        assert_eq!(map.view().count_value((&"a", &1)), 1);
        assert_eq!(map.view().count_value((&"a", &2)), 0);
    }

    // =========================================================================
    // map
    // =========================================================================

    #[rstest]
    fn map_scales_elements() {
        assert_eq!([1, 2, 3].view().map(|number| number * 10), vec![10, 20, 30]);
    }

    #[rstest]
    fn map_over_map_returns_pairs_in_order() {
        let map = letters();
        let pairs = map.view().map(|(key, value)| (key, value));
        assert_eq!(pairs, vec![(&"a", &1), (&"b", &2), (&"c", &3)]);
    }

    #[rstest]
    fn map_enum_yields_units() {
        let numbers = [1, 2];
        let units: Vec<_> = numbers.view().map_enum().collect();
        assert_eq!(units, vec![&1, &2]);
    }

    // =========================================================================
    // fold / inject
    // =========================================================================

    #[rstest]
    fn fold_sums_map_values() {
        assert_eq!(letters().view().fold(0, |sum, (_, value)| sum + value), 6);
    }

    #[rstest]
    fn inject_operator_without_seed() {
        assert_eq!([1, 2, 3].view().inject_operator(Operator::Subtract), Ok(-4));
    }

    #[rstest]
    fn inject_operator_with_seed() {
        assert_eq!(
            [1, 2, 3].view().inject_operator_seeded(Operator::Subtract, 3),
            Ok(-3)
        );
    }

    #[rstest]
    fn inject_with_function_without_seed() {
        assert_eq!(
            [1, 2, 3].view().inject_with(|memo, number| memo - number),
            Ok(-4)
        );
    }

    #[rstest]
    fn inject_seeded_function() {
        assert_eq!(
            [1, 2, 3].view().inject_seeded(2, |memo, number| memo * number),
            Ok(12)
        );
    }

    #[rstest]
    #[case(Operator::Add, 6)]
    #[case(Operator::Multiply, 6)]
    #[case(Operator::Divide, 0)]
    #[case(Operator::Power, 1)]
    fn inject_each_operator(#[case] operator: Operator, #[case] expected: i64) {
        assert_eq!([1_i64, 2, 3].view().inject_operator(operator), Ok(expected));
    }

    #[rstest]
    fn inject_number_promotes_to_float() {
        let numbers = [Number::Integer(9), Number::Float(2.0)];
        assert_eq!(
            numbers.view().inject_operator(Operator::Divide),
            Ok(Number::Float(4.5))
        );
    }

    #[rstest]
    fn inject_strings_concatenate() {
        let words = vec![String::from("cat"), String::from("sheep")];
        assert_eq!(
            words.view().inject_operator(Operator::Add),
            Ok(String::from("catsheep"))
        );
    }

    #[rstest]
    fn inject_strings_reject_subtraction() {
        let words = vec![String::from("cat"), String::from("sheep")];
        assert_eq!(
            words.view().inject_operator(Operator::Subtract),
            Err(ReduceError::Arithmetic(ArithmeticError::Unsupported {
                operator: Operator::Subtract,
                type_name: "String"
            }))
        );
    }

    #[rstest]
    fn inject_on_empty_without_seed_fails() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(
            empty.view().inject_with(|memo, number| memo + number),
            Err(ReduceError::EmptyWithoutSeed)
        );
        assert_eq!(
            empty.view().inject_operator(Operator::Add),
            Err(ReduceError::EmptyWithoutSeed)
        );
    }

    #[rstest]
    fn inject_on_empty_with_seed_returns_seed() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.view().inject_seeded(7, |memo, number| memo + number), Ok(7));
        assert_eq!(empty.view().inject_operator_seeded(Operator::Add, 7), Ok(7));
    }

    #[rstest]
    fn inject_on_map_pairs() {
        let map = letters();
        let result = map
            .view()
            .inject_with(|(key, total), (_, value)| (key, total + value));
        assert_eq!(result, Ok(("a", 6)));
    }

    #[rstest]
    fn inject_with_seed_and_function_over_map() {
        let map = letters();
        let result = map.view().inject(
            Some(InjectArg::Value(("total", 10))),
            None,
            Some(|(key, total): (&'static str, i32), (_, value): (&'static str, i32)| {
                (key, total + value)
            }),
        );
        assert_eq!(result, Ok(("total", 16)));
    }

    #[rstest]
    fn inject_function_only_over_words() {
        let words = ["cat", "sheep", "bear"];
        let longest = words.view().inject(
            None,
            None,
            Some(|memo: &'static str, word: &'static str| {
                if memo.len() > word.len() { memo } else { word }
            }),
        );
        assert_eq!(longest, Ok("sheep"));
    }

    #[rstest]
    fn inject_operator_over_map_pairs_is_unsupported() {
        let map = letters();
        let result = map.view().inject_operator(Operator::Add);
        assert_eq!(
            result,
            Err(ReduceError::Arithmetic(ArithmeticError::Unsupported {
                operator: Operator::Add,
                type_name: std::any::type_name::<(&str, i32)>(),
            }))
        );
    }

    #[rstest]
    fn inject_token_seed_for_strings() {
        let words = vec![String::from("a"), String::from("b")];
        let joined = words.view().inject(
            Some(InjectArg::token("x")),
            None,
            Some(|memo: String, word: String| memo + &word),
        );
        assert_eq!(joined, Ok(String::from("xab")));
    }

    #[rstest]
    fn inject_string_value_naming_operator() {
        let words = vec![String::from("a"), String::from("b")];
        let joined = words.view().inject(
            Some(InjectArg::Value(String::from("+"))),
            None,
            None::<fn(String, String) -> String>,
        );
        assert_eq!(joined, Ok(String::from("ab")));
    }

    #[rstest]
    fn inject_numeric_token_seed() {
        let result = [1, 2, 3].view().inject(
            Some(InjectArg::token(":*")),
            Some(InjectArg::token("2")),
            None::<fn(i32, i32) -> i32>,
        );
        assert_eq!(result, Ok(12));
    }

    #[rstest]
    fn inject_does_not_mutate_input() {
        let numbers = vec![1, 2, 3];
        let _ = numbers.view().inject_operator(Operator::Multiply);
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
