//! Container shapes and the visiting primitive.
//!
//! This module provides the single traversal primitive every operation in
//! the crate is built on, together with the two container shapes it
//! supports:
//!
//! - [`SequenceView`]: an ordered sequence, visited one `&T` at a time
//! - [`PairView`]: an associative container, visited one `(&K, &V)` pair at
//!   a time
//!
//! Containers are turned into views through [`AsView`]. Only slices (and
//! therefore `Vec` and arrays) and the maps implementing [`PairSource`] have
//! a view, so an unsupported shape is rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::ops::ControlFlow;
//!
//! use enumerable::view::{AsView, Visit};
//!
//! let mut seen = Vec::new();
//! let _ = [1, 2, 3].view().visit(|number| {
//!     seen.push(*number);
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(seen, vec![1, 2, 3]);
//!
//! let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let pairs: Vec<_> = map.view().units().collect();
//! assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
//! ```

mod pair;
mod sequence;

use std::ops::ControlFlow;

pub use pair::{PairSource, PairView};
pub use sequence::SequenceView;

/// The visiting primitive.
///
/// A `Visit` hands every logical unit of a container to a callback, in the
/// container's iteration order. For ordered sequences a unit is one element;
/// for associative containers a unit is one key/value pair.
///
/// # Required Methods
///
/// - `units`: a fresh, restartable iterator over the units
///
/// # Provided Methods
///
/// - `visit`: drives a callback over the units, stopping on
///   [`ControlFlow::Break`]
/// - `unit_count`: the number of units, when the container knows it without
///   a traversal
pub trait Visit {
    /// One logical unit of the container, borrowed from it.
    type Unit: Copy;

    /// A restartable iterator over the units.
    type Units: Iterator<Item = Self::Unit> + Clone;

    /// Returns a fresh iterator positioned before the first unit.
    fn units(&self) -> Self::Units;

    /// Invokes `callback` once per unit, in order.
    ///
    /// Returns [`ControlFlow::Break`] if the callback asked to stop early,
    /// [`ControlFlow::Continue`] once every unit has been visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    ///
    /// use enumerable::view::{AsView, Visit};
    ///
    /// let mut visited = 0;
    /// let flow = [1, 2, 3, 4].view().visit(|number| {
    ///     visited += 1;
    ///     if *number == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert!(flow.is_break());
    /// assert_eq!(visited, 2);
    /// ```
    fn visit<F>(&self, mut callback: F) -> ControlFlow<()>
    where
        F: FnMut(Self::Unit) -> ControlFlow<()>,
    {
        for unit in self.units() {
            if callback(unit).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Returns the number of units if the container exposes its size.
    #[inline]
    fn unit_count(&self) -> Option<usize> {
        None
    }
}

/// A [`Visit`] whose units can be copied out of the container.
///
/// Operations that produce owned output, such as filtering into a container
/// of the same shape or folding into an owned accumulator, require this.
pub trait Rebuild: Visit {
    /// The owned form of a unit.
    type Owned;

    /// The container of the same shape produced from surviving units.
    type Container;

    /// Copies a borrowed unit out of the container.
    fn to_owned_unit(unit: Self::Unit) -> Self::Owned;

    /// Builds a new container of the same shape from `units`, in order.
    fn rebuild<I>(units: I) -> Self::Container
    where
        I: IntoIterator<Item = Self::Unit>;
}

/// Conversion from a container into its view.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
///
/// use enumerable::view::{AsView, Visit};
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(numbers.view().unit_count(), Some(3));
///
/// let map: HashMap<&str, i32> = HashMap::from([("a", 1)]);
/// assert_eq!(map.view().unit_count(), Some(1));
/// ```
pub trait AsView {
    /// The view type borrowed from the container.
    type View<'a>: Visit
    where
        Self: 'a;

    /// Borrows the container as a view.
    fn view(&self) -> Self::View<'_>;
}

impl<T> AsView for [T] {
    type View<'a>
        = SequenceView<'a, T>
    where
        Self: 'a;

    #[inline]
    fn view(&self) -> Self::View<'_> {
        SequenceView::new(self)
    }
}

impl<K, V, S> AsView for std::collections::HashMap<K, V, S> {
    type View<'a>
        = PairView<'a, Self>
    where
        Self: 'a;

    #[inline]
    fn view(&self) -> Self::View<'_> {
        PairView::new(self)
    }
}

impl<K, V> AsView for std::collections::BTreeMap<K, V> {
    type View<'a>
        = PairView<'a, Self>
    where
        Self: 'a;

    #[inline]
    fn view(&self) -> Self::View<'_> {
        PairView::new(self)
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> AsView for indexmap::IndexMap<K, V, S> {
    type View<'a>
        = PairView<'a, Self>
    where
        Self: 'a;

    #[inline]
    fn view(&self) -> Self::View<'_> {
        PairView::new(self)
    }
}

static_assertions::assert_impl_all!(SequenceView<'static, String>: Copy, Send, Sync);
static_assertions::assert_impl_all!(
    PairView<'static, std::collections::BTreeMap<String, i32>>: Copy, Send, Sync
);
