//! Common traits for heap data structures
//!
//! This module provides the public contract shared by the heaps in this crate:
//!
//! - [`HeapError`]: the error taxonomy for construction, position queries and
//!   removal from an empty heap
//! - [`MinHeap`]: the min-priority-queue interface (`insert`, `peek_min`,
//!   `extract_min`, ...)
//!
//! Unlike `std::collections::BinaryHeap`, removal from an empty heap is an
//! error rather than `None`, so callers that need the distinction between
//! "empty" and "present" get it from the error value.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An argument was outside its domain: a fan-out below 2, a position
    /// below 1, or a position whose children cannot be addressed.
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// The rejected value
        value: usize,
    },
    /// `peek_min` or `extract_min` was called on an empty heap
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument { argument, value } => {
                write!(f, "invalid argument `{argument}`: {value}")
            }
            HeapError::Underflow => write!(f, "heap underflow: the heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Min-priority-queue interface
///
/// The element itself is the priority; ordering comes from the heap's
/// comparator. Only the minimum can be removed.
///
/// # Example
///
/// ```rust
/// use d_heap::{DAryHeap, HeapError, MinHeap};
///
/// fn drain<H: MinHeap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(x) = heap.extract_min() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut heap = DAryHeap::with_fanout(3).unwrap();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
/// ```
pub trait MinHeap<T> {
    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) comparisons, amortized O(1) storage growth.
    fn insert(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is
    /// left unchanged.
    fn extract_min(&mut self) -> Result<T, HeapError>;

    /// Logically empties the heap without releasing its storage
    fn make_empty(&mut self);
}
