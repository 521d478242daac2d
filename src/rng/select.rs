//! Selection over ordered, indexable collections.

use std::collections::VecDeque;

use crate::error::{RandomError, RandomResult};

/// Capability required by `choice`: a length and an element accessor.
///
/// Implemented for slices, arrays, `Vec` and `VecDeque`. Anything that is not
/// an ordered, indexable collection is rejected at compile time.
pub trait Indexable {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Indexable for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Indexable for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Indexable for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

/// Non-zero length of `items`, or [`RandomError::IndexRange`] when empty.
pub(crate) fn checked_len<C: Indexable + ?Sized>(items: &C) -> RandomResult<usize> {
    match items.len() {
        0 => Err(RandomError::empty()),
        len => Ok(len),
    }
}

pub(crate) fn pick<C: Indexable + ?Sized>(items: &C, index: usize) -> RandomResult<&C::Item> {
    items.get(index).ok_or(RandomError::IndexRange {
        index,
        len: items.len(),
    })
}
