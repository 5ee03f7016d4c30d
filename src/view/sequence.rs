//! The ordered-sequence shape.

use super::{Rebuild, Visit};

/// A borrowed view of an ordered sequence.
///
/// Each unit is a reference to one element, visited in index order.
/// Filtering rebuilds into a `Vec<T>`.
///
/// # Examples
///
/// ```rust
/// use enumerable::view::{SequenceView, Visit};
///
/// let words = ["cat", "sheep", "bear"];
/// let view = SequenceView::new(&words);
/// assert_eq!(view.units().last(), Some(&"bear"));
/// ```
#[derive(Debug)]
pub struct SequenceView<'a, T> {
    elements: &'a [T],
}

impl<'a, T> SequenceView<'a, T> {
    /// Creates a view over `elements`.
    #[inline]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Returns the underlying slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<T> Clone for SequenceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceView<'_, T> {}

impl<'a, T> Visit for SequenceView<'a, T> {
    type Unit = &'a T;
    type Units = std::slice::Iter<'a, T>;

    #[inline]
    fn units(&self) -> Self::Units {
        self.elements.iter()
    }

    #[inline]
    fn unit_count(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

impl<'a, T: Clone> Rebuild for SequenceView<'a, T> {
    type Owned = T;
    type Container = Vec<T>;

    #[inline]
    fn to_owned_unit(unit: Self::Unit) -> Self::Owned {
        unit.clone()
    }

    fn rebuild<I>(units: I) -> Self::Container
    where
        I: IntoIterator<Item = Self::Unit>,
    {
        units.into_iter().cloned().collect()
    }
}
