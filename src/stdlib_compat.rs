//! Standard library compatibility layer
//!
//! Conversions and iterators that let [`DAryHeap`] stand in for
//! `std::collections::BinaryHeap<Reverse<T>>`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: this is a min-heap, so no `Reverse` wrapper is
//!   needed for ascending order. Use `compare::Compare::rev` for max-heap
//!   behaviour.
//! - **Fan-out**: conversions produce a binary heap; use
//!   [`DAryHeap::from_vec_with_fanout`] for other fan-outs.
//!
//! # Example
//!
//! ```rust
//! use d_heap::DAryHeap;
//!
//! let mut heap: DAryHeap<i32> = vec![5, 3, 7].into();
//! heap.extend([1, 9]);
//! assert_eq!(heap.peek_min(), Ok(&1));
//!
//! let sorted: Vec<_> = heap.into_iter_sorted().collect();
//! assert_eq!(sorted, vec![1, 3, 5, 7, 9]);
//! ```

use std::iter::FusedIterator;

use compare::Compare;

use crate::dary::DAryHeap;

impl<T: Ord> From<Vec<T>> for DAryHeap<T> {
    /// Builds a binary heap in linear time
    fn from(items: Vec<T>) -> Self {
        DAryHeap::from_vec(items)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for DAryHeap<T> {
    fn from(items: [T; N]) -> Self {
        DAryHeap::from_vec(Vec::from(items))
    }
}

impl<T, C: Compare<T>> From<DAryHeap<T, C>> for Vec<T> {
    /// Returns the elements in layout order
    fn from(heap: DAryHeap<T, C>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord> FromIterator<T> for DAryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DAryHeap::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for DAryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for DAryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T>> IntoIterator for DAryHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in layout order, like `BinaryHeap::into_iter`
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a DAryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> DAryHeap<T, C> {
    /// Consumes the heap, yielding elements in ascending order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Removes elements in ascending order as the iterator is advanced
    ///
    /// Elements not yet yielded when the iterator is dropped stay in the
    /// heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }
}

/// Owning iterator returned by [`DAryHeap::into_iter_sorted`]
pub struct IntoIterSorted<T, C: Compare<T>> {
    heap: DAryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

/// Draining iterator returned by [`DAryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut DAryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}
