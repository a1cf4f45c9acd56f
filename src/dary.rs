//! D-ary min-heap implementation
//!
//! A d-ary heap is an implicit tree stored in a contiguous array where every
//! node has up to `d` children. Compared to a binary heap, a wider fan-out
//! makes the tree shallower (`log_d n` levels), so `insert` does fewer
//! comparisons while `extract_min` scans more children per level.
//!
//! Positions are 1-based (see [`crate::index`]); position `p` is stored at
//! `data[p - 1]`, so the backing `Vec` never holds a placeholder element.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                   |
//! |---------------|------------------------------|
//! | `insert`      | O(log_d n), amortized growth |
//! | `extract_min` | O(d log_d n)                 |
//! | `peek_min`    | O(1)                         |
//! | `from_vec`    | O(n)                         |
//!
//! # Example
//!
//! ```rust
//! use d_heap::DAryHeap;
//!
//! let mut heap = DAryHeap::with_fanout(4).unwrap();
//! heap.insert(17);
//! heap.insert(5);
//! heap.insert(23);
//!
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(17));
//! assert_eq!(heap.len(), 1);
//! ```

use std::fmt;

use compare::{natural, Compare, Natural};

use crate::index::{Fanout, ROOT};
use crate::traits::{HeapError, MinHeap};

/// Number of slots allocated by the non-sized constructors
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest factor storage is multiplied by on growth
const MAX_GROWTH_FACTOR: usize = 8;

/// A d-ary min-heap ordered by a comparator
///
/// The comparator defaults to [`Natural`], the element type's `Ord` order.
/// Any `compare::Compare<T>` works, including closures of type
/// `Fn(&T, &T) -> Ordering` and reversed comparators for max-heap behaviour.
#[derive(Clone)]
pub struct DAryHeap<T, C: Compare<T> = Natural<T>> {
    /// Elements in layout order; position `p` lives at `data[p - 1]`
    data: Vec<T>,
    fanout: Fanout,
    cmp: C,
}

impl<T: Ord> DAryHeap<T> {
    /// Creates an empty binary heap (`d = 2`)
    pub fn new() -> Self {
        Self::with_config(Fanout::BINARY, DEFAULT_CAPACITY, natural())
    }

    /// Creates an empty heap where every node has up to `fanout` children
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `fanout < 2`.
    pub fn with_fanout(fanout: usize) -> Result<Self, HeapError> {
        Self::with_capacity(fanout, DEFAULT_CAPACITY)
    }

    /// Creates an empty heap with room for `capacity` elements before the
    /// first growth
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `fanout < 2`.
    pub fn with_capacity(fanout: usize, capacity: usize) -> Result<Self, HeapError> {
        Ok(Self::with_config(Fanout::new(fanout)?, capacity, natural()))
    }

    /// Builds a binary heap from an arbitrary sequence in linear time
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::build(items, Fanout::BINARY, natural())
    }

    /// Builds a heap with the given fan-out from an arbitrary sequence in
    /// linear time
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `fanout < 2`.
    pub fn from_vec_with_fanout(items: Vec<T>, fanout: usize) -> Result<Self, HeapError> {
        Ok(Self::build(items, Fanout::new(fanout)?, natural()))
    }
}

impl<T, C: Compare<T>> DAryHeap<T, C> {
    /// Creates an empty heap from an already validated fan-out
    pub fn with_config(fanout: Fanout, capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            fanout,
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use d_heap::DAryHeap;
    ///
    /// // Max-heap by comparing in reverse
    /// let mut heap = DAryHeap::with_comparator(3, |a: &i32, b: &i32| b.cmp(a)).unwrap();
    /// heap.insert(1);
    /// heap.insert(9);
    /// heap.insert(4);
    /// assert_eq!(heap.extract_min(), Ok(9));
    /// ```
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `fanout < 2`.
    pub fn with_comparator(fanout: usize, cmp: C) -> Result<Self, HeapError> {
        Ok(Self::with_config(Fanout::new(fanout)?, DEFAULT_CAPACITY, cmp))
    }

    /// Builds a heap ordered by `cmp` from an arbitrary sequence in linear
    /// time
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `fanout < 2`.
    pub fn from_vec_with_comparator(
        items: Vec<T>,
        fanout: usize,
        cmp: C,
    ) -> Result<Self, HeapError> {
        Ok(Self::build(items, Fanout::new(fanout)?, cmp))
    }

    fn build(mut data: Vec<T>, fanout: Fanout, cmp: C) -> Self {
        let len = data.len();
        // ceil(len * 1.1) + 2 slots, so a few inserts follow without growth
        let headroom = len.div_ceil(10) + 2;
        data.reserve_exact(headroom);

        tracing::debug!(len, fanout = fanout.get(), "building heap from sequence");

        let mut heap = Self { data, fanout, cmp };
        heap.build_heap();
        heap
    }

    /// Restores heap order over the whole array by sifting down every
    /// internal node, last one first
    fn build_heap(&mut self) {
        if let Some(last) = self.fanout.last_internal(self.data.len()) {
            for position in (ROOT..=last).rev() {
                self.sift_down(position);
            }
        }
    }

    /// Returns the number of children per node
    pub fn fanout(&self) -> usize {
        self.fanout.get()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold before it grows
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Logically empties the heap
    ///
    /// Elements are dropped immediately; allocated storage is kept for reuse.
    pub fn make_empty(&mut self) {
        self.data.clear();
    }

    /// Inserts an element
    ///
    /// When storage is full it grows to `capacity * min(fanout, 8) + 1` slots
    /// before the new leaf is appended and sifted up.
    pub fn insert(&mut self, item: T) {
        self.reserve_for_insert();
        self.data.push(item);
        self.sift_up(self.data.len());
    }

    fn reserve_for_insert(&mut self) {
        if self.data.len() < self.data.capacity() {
            return;
        }
        let old_capacity = self.data.capacity();
        let factor = self.fanout.get().min(MAX_GROWTH_FACTOR);
        let target = old_capacity.max(1).saturating_mul(factor).saturating_add(1);
        self.data.reserve_exact(target - self.data.len());
        tracing::trace!(
            old_capacity,
            new_capacity = self.data.capacity(),
            fanout = self.fanout.get(),
            "grew heap storage"
        );
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the minimum element
    ///
    /// The last leaf takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let min = self.data.swap_remove(ROOT - 1);
        if !self.data.is_empty() {
            self.sift_down(ROOT);
        }
        Ok(min)
    }

    /// Returns the element at 1-based `position` in layout order, or `None`
    /// outside `1..=len`
    pub fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|i| self.data.get(i))
    }

    /// Returns the parent position of `child`, or `None` for the root
    pub fn parent_index(&self, child: usize) -> Option<usize> {
        self.fanout.parent(child)
    }

    /// Returns the position of the leftmost child of `parent`
    ///
    /// The result does not depend on the heap's current length.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `parent < 1`.
    pub fn first_child_index(&self, parent: usize) -> Result<usize, HeapError> {
        self.fanout.first_child(parent)
    }

    /// Returns the position of the smallest child of `parent`, or `None` if
    /// `parent` has no children in the current heap
    ///
    /// Among equal children the leftmost wins.
    pub fn min_child_index(&self, parent: usize) -> Option<usize> {
        let mut children = self.fanout.children(parent, self.data.len());
        let first = children.next()?;
        Some(children.fold(first, |min, child| {
            if self.less_at(child, min) {
                child
            } else {
                min
            }
        }))
    }

    /// Checks that no child compares less than its parent
    pub fn is_heap_ordered(&self) -> bool {
        (ROOT + 1..=self.data.len()).all(|child| {
            self.fanout
                .parent(child)
                .map_or(true, |parent| !self.less_at(child, parent))
        })
    }

    /// Returns the elements in layout order (position 1 first)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in layout order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in layout order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    #[inline]
    fn less_at(&self, a: usize, b: usize) -> bool {
        self.cmp.compares_lt(&self.data[a - 1], &self.data[b - 1])
    }

    /// Moves the element at `position` toward the root while it is smaller
    /// than its parent
    fn sift_up(&mut self, mut position: usize) {
        while let Some(parent) = self.fanout.parent(position) {
            if !self.less_at(position, parent) {
                break;
            }
            self.data.swap(position - 1, parent - 1);
            position = parent;
        }
    }

    /// Moves the element at `position` toward the leaves while its smallest
    /// child is strictly smaller
    fn sift_down(&mut self, mut position: usize) {
        while let Some(child) = self.min_child_index(position) {
            if !self.less_at(child, position) {
                break;
            }
            self.data.swap(position - 1, child - 1);
            position = child;
        }
    }
}

impl<T, C: Compare<T>> MinHeap<T> for DAryHeap<T, C> {
    fn len(&self) -> usize {
        DAryHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        DAryHeap::is_empty(self)
    }

    fn insert(&mut self, item: T) {
        DAryHeap::insert(self, item)
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        DAryHeap::peek_min(self)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        DAryHeap::extract_min(self)
    }

    fn make_empty(&mut self) {
        DAryHeap::make_empty(self)
    }
}

impl<T: Ord> Default for DAryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for DAryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DAryHeap")
            .field("fanout", &self.fanout.get())
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
