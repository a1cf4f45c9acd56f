//! D-ary Heap Priority Queue for Rust
//!
//! This crate provides a d-ary min-heap: an array-backed implicit tree in
//! which every node has up to `d` children. `d = 2` is the textbook binary
//! heap; wider fan-outs trade cheaper inserts for more comparisons per level
//! on extraction.
//!
//! # Features
//!
//! - **Configurable fan-out**: any `d >= 2`, fixed at construction
//! - **Linear-time bulk construction** from an arbitrary `Vec`
//! - **Pluggable ordering** through [`compare::Compare`], defaulting to `Ord`
//! - **Exposed position arithmetic** ([`Fanout::parent`], [`Fanout::first_child`])
//!   using 1-based positions
//!
//! # Example
//!
//! ```rust
//! use d_heap::{DAryHeap, HeapError};
//!
//! let mut heap = DAryHeap::with_fanout(4).unwrap();
//! for x in [17, 23, 5, 12] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.parent_index(18), Some(5));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.peek_min(), Ok(&12));
//!
//! heap.make_empty();
//! assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
//! ```
//!
//! The heap is a plain single-owner value with no internal synchronization;
//! wrap it in a `Mutex` to share it across threads.

pub mod dary;
pub mod index;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Compare, Natural};
pub use dary::DAryHeap;
pub use index::Fanout;
pub use traits::{HeapError, MinHeap};
