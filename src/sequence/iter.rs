use super::route::Route;
use super::Sequence;
use crate::{Error, Result};
use std::iter::FusedIterator;

/// A read-only walk over a [`Sequence`] in one of its six orders.
///
/// A traversal is either positioned on a valid element or exhausted. It starts
/// exhausted when the sequence is empty, otherwise on the first element of its
/// order. Once exhausted it stays exhausted: [`advance`](Self::advance) becomes
/// a no-op and [`current`](Self::current) fails with [`Error::OutOfRange`].
///
/// Orders that depend on element values or on the element count snapshot their
/// index permutation when the traversal is created. The traversal borrows the
/// sequence for its whole lifetime, so the snapshot cannot go stale.
pub struct Traversal<'a, T> {
    seq: &'a Sequence<T>,
    route: Route,
    cursor: usize,
    done: bool,
}

impl<'a, T> Traversal<'a, T> {
    #[inline]
    pub(super) fn new(seq: &'a Sequence<T>, route: Route) -> Self {
        Self {
            done: seq.is_empty(),
            cursor: 0,
            seq,
            route,
        }
    }

    /// The element the traversal is positioned on.
    ///
    /// Fails with [`Error::OutOfRange`] once the traversal is exhausted.
    #[inline]
    pub fn current(&self) -> Result<&'a T> {
        if self.done {
            return Err(Error::OutOfRange);
        }
        self.seq.get(self.route.index_at(self.cursor, self.seq.len()))
    }

    /// Moves to the next element of this order, or into the exhausted state
    /// after the last one. Advancing an exhausted traversal does nothing.
    #[inline]
    pub fn advance(&mut self) {
        if self.done {
            return;
        }
        self.cursor += 1;
        if self.cursor == self.seq.len() {
            self.done = true;
        }
    }

    /// Returns `true` if no elements remain.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    /// The amount of elements left to visit, including the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        self.seq.len() - self.cursor
    }
}

/// Two traversals of the same order are equal iff both are exhausted, or both
/// are positioned on the same cursor. Traversals of different orders are never
/// equal.
impl<T> PartialEq for Traversal<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        if self.route != other.route {
            return false;
        }
        match (self.done, other.done) {
            (true, true) => true,
            (false, false) => self.cursor == other.cursor,
            _ => false,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current().ok()?;
        self.advance();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining();
        (left, Some(left))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.remaining()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
