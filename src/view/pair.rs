//! The associative-container shape.

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};

use super::{Rebuild, Visit};

/// A key/value container with a stable iteration order.
///
/// Implementations must yield every pair exactly once, and repeated calls to
/// [`pairs`](PairSource::pairs) on an unmodified container must yield the
/// pairs in the same order.
pub trait PairSource {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// A restartable iterator over borrowed pairs.
    type Pairs<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)> + Clone
    where
        Self: 'a;

    /// Returns an iterator over the pairs in iteration order.
    fn pairs(&self) -> Self::Pairs<'_>;

    /// Returns the number of pairs.
    fn pair_count(&self) -> usize;
}

impl<K, V, S> PairSource for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }

    #[inline]
    fn pair_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> PairSource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }

    #[inline]
    fn pair_count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> PairSource for indexmap::IndexMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn pairs(&self) -> Self::Pairs<'_> {
        self.iter()
    }

    #[inline]
    fn pair_count(&self) -> usize {
        self.len()
    }
}

/// A borrowed view of an associative container.
///
/// Each unit is a whole `(&K, &V)` pair; a key is never visited apart from
/// its value. Filtering rebuilds into the same map type by re-inserting the
/// surviving pairs.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use enumerable::view::{PairView, Visit};
///
/// let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
/// let view = PairView::new(&map);
/// assert_eq!(view.units().next(), Some((&"a", &1)));
/// assert_eq!(view.unit_count(), Some(3));
/// ```
#[derive(Debug)]
pub struct PairView<'a, M: ?Sized> {
    container: &'a M,
}

impl<'a, M: ?Sized> PairView<'a, M> {
    /// Creates a view over `container`.
    #[inline]
    pub const fn new(container: &'a M) -> Self {
        Self { container }
    }

    /// Returns the underlying container.
    #[inline]
    pub const fn container(&self) -> &'a M {
        self.container
    }
}

impl<M: ?Sized> Clone for PairView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for PairView<'_, M> {}

impl<'a, M> Visit for PairView<'a, M>
where
    M: PairSource + ?Sized + 'a,
{
    type Unit = (&'a M::Key, &'a M::Value);
    type Units = M::Pairs<'a>;

    #[inline]
    fn units(&self) -> Self::Units {
        self.container.pairs()
    }

    #[inline]
    fn unit_count(&self) -> Option<usize> {
        Some(self.container.pair_count())
    }
}

impl<'a, M> Rebuild for PairView<'a, M>
where
    M: PairSource + FromIterator<(M::Key, M::Value)> + 'a,
    M::Key: Clone,
    M::Value: Clone,
{
    type Owned = (M::Key, M::Value);
    type Container = M;

    #[inline]
    fn to_owned_unit((key, value): Self::Unit) -> Self::Owned {
        (key.clone(), value.clone())
    }

    fn rebuild<I>(units: I) -> Self::Container
    where
        I: IntoIterator<Item = Self::Unit>,
    {
        units.into_iter().map(Self::to_owned_unit).collect()
    }
}
