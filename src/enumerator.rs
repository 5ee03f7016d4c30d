//! Lazy, restartable traversal handles.
//!
//! Every operation that is called without a callback returns an
//! [`Enumerator`] instead of visiting anything. The handle remembers where
//! the traversal starts, so it can be consumed step by step as an
//! [`Iterator`], rewound, or traversed again in full.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let mut enumerator = numbers.view().to_enum();
//!
//! assert_eq!(enumerator.next(), Some(&1));
//! assert_eq!(enumerator.peek(), Some(&2));
//!
//! enumerator.rewind();
//! let all: Vec<_> = enumerator.collect();
//! assert_eq!(all, vec![&1, &2, &3]);
//! ```

/// A lazy handle over a traversal.
///
/// An `Enumerator` owns two copies of the underlying iterator: the origin,
/// which never moves, and a cursor advanced by [`Iterator::next`].
#[derive(Debug, Clone)]
pub struct Enumerator<I> {
    origin: I,
    cursor: I,
}

impl<I> Enumerator<I>
where
    I: Iterator + Clone,
{
    /// Creates an enumerator positioned before the first unit of `origin`.
    pub fn new(origin: I) -> Self {
        let cursor = origin.clone();
        Self { origin, cursor }
    }

    /// Moves the cursor back to the first unit.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor = self.origin.clone();
        self
    }

    /// Returns the unit the cursor would yield next, without advancing.
    pub fn peek(&self) -> Option<I::Item> {
        self.cursor.clone().next()
    }

    /// Returns the total number of units when it is known without a
    /// traversal.
    pub fn size(&self) -> Option<usize> {
        match self.origin.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }

    /// Traverses every unit from the start, leaving the cursor untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = [1, 2, 3];
    /// let mut enumerator = numbers.view().to_enum();
    /// let _ = enumerator.next();
    ///
    /// let mut total = 0;
    /// enumerator.each(|number| total += number);
    /// assert_eq!(total, 6);
    /// assert_eq!(enumerator.next(), Some(&2));
    /// ```
    pub fn each<F>(&self, callback: F)
    where
        F: FnMut(I::Item),
    {
        self.origin.clone().for_each(callback);
    }

    /// Returns an enumerator over `(unit, index)` pairs.
    pub fn with_index(&self) -> Enumerator<Indexed<I>> {
        Enumerator::new(Indexed::new(self.origin.clone()))
    }

    /// Returns a fresh iterator over every unit.
    pub fn iter(&self) -> I {
        self.origin.clone()
    }
}

impl<I: Iterator> Iterator for Enumerator<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I> IntoIterator for &Enumerator<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.origin.clone()
    }
}

/// An iterator pairing each unit with its zero-based position.
///
/// Positions count logical units: one per element of a sequence, one per
/// key/value pair of an associative container.
#[derive(Debug, Clone)]
pub struct Indexed<I> {
    inner: I,
    position: usize,
}

impl<I> Indexed<I> {
    /// Wraps `inner`, starting positions at zero.
    pub const fn new(inner: I) -> Self {
        Self { inner, position: 0 }
    }
}

impl<I: Iterator> Iterator for Indexed<I> {
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.inner.next()?;
        let index = self.position;
        self.position += 1;
        Some((unit, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
