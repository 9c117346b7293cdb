pub mod iter;
mod route;

use crate::sequence::iter::Traversal;
use crate::sequence::route::Route;
use crate::{Error, Result};
use std::fmt;
use std::fmt::Display;

/// An insertion-ordered collection of elements that can be walked in six
/// different orders without duplicating its storage.
///
/// Elements keep the order they were pushed in. The value based traversals
/// (ascending, descending, side-cross) compute an index permutation once when
/// the traversal is created; middle-out derives its permutation from positions
/// alone. Every traversal borrows the sequence, so mutating it while a
/// traversal is live does not compile.
#[derive(Debug, Clone, Default)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the amount of items in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value at the end of the sequence.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Gets the element at `index` in insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// Gets the element at `index` in insertion order, mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        Ok(&mut self.items[index])
    }

    /// Returns the first element in insertion order.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element in insertion order.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes all items, preserving the allocated space.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes the first element equal to `value`, shifting all following
    /// elements to the left.
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let pos = self
            .items
            .iter()
            .position(|item| item == value)
            .ok_or(Error::NotFound)?;
        self.items.remove(pos);
        Ok(())
    }

    /// Walks the sequence in insertion order.
    #[inline]
    pub fn iter(&self) -> Traversal<'_, T> {
        Traversal::new(self, Route::Forward)
    }

    /// Walks the sequence in reverse insertion order.
    #[inline]
    pub fn iter_reverse(&self) -> Traversal<'_, T> {
        Traversal::new(self, Route::Backward)
    }

    /// Walks the sequence from the smallest to the largest value. Equal values
    /// keep their insertion order.
    #[inline]
    pub fn iter_ascending(&self) -> Traversal<'_, T>
    where
        T: Ord,
    {
        Traversal::new(self, Route::ascending(&self.items))
    }

    /// Walks the sequence from the largest to the smallest value. Equal values
    /// keep their insertion order.
    #[inline]
    pub fn iter_descending(&self) -> Traversal<'_, T>
    where
        T: Ord,
    {
        Traversal::new(self, Route::descending(&self.items))
    }

    /// Walks the sequence alternating between the smallest and largest
    /// remaining values: smallest, largest, second smallest, second largest
    /// and so on inward.
    #[inline]
    pub fn iter_side_cross(&self) -> Traversal<'_, T>
    where
        T: Ord,
    {
        Traversal::new(self, Route::side_cross(&self.items))
    }

    /// Walks the sequence from the middle position outward, alternating left
    /// and right. Only positions matter for this order, not values.
    #[inline]
    pub fn iter_middle_out(&self) -> Traversal<'_, T> {
        Traversal::new(self, Route::middle_out(self.len()))
    }

    /// Returns an error if `index` is not within the bounds of the sequence.
    #[inline]
    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }
}

impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
