//! Position arithmetic for d-ary trees stored in a flat array
//!
//! Positions are 1-based: the root lives at position 1 and position 0 is
//! never a node. With fan-out `d`, the children of position `p` occupy the
//! contiguous run
//!
//! ```text
//! first_child(p) = (p - 1) * d + 2   ..=   first_child(p) + d - 1
//! ```
//!
//! and every position `c >= 2` has parent `(c - 2) / d + 1`. The two maps are
//! inverses: `parent(first_child(p) + k) == p` for `0 <= k < d`.
//!
//! For `d = 4` the layout looks like:
//!
//! ```text
//!                    1
//!       /        /       \        \
//!      2        3         4        5
//!   6..=9   10..=13   14..=17   18..=21
//! ```

use std::ops::RangeInclusive;

use crate::traits::HeapError;

/// Position of the root node
pub const ROOT: usize = 1;

/// Number of children per node, validated to be at least 2
///
/// # Example
///
/// ```rust
/// use d_heap::Fanout;
///
/// let quad = Fanout::new(4).unwrap();
/// assert_eq!(quad.parent(18), Some(5));
/// assert_eq!(quad.first_child(5), Ok(18));
/// assert!(Fanout::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fanout(usize);

impl Fanout {
    /// Plain binary heap layout
    pub const BINARY: Fanout = Fanout(2);

    /// Validates a fan-out
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `d < 2`.
    pub fn new(d: usize) -> Result<Self, HeapError> {
        if d < 2 {
            return Err(HeapError::InvalidArgument {
                argument: "fanout",
                value: d,
            });
        }
        Ok(Fanout(d))
    }

    /// Returns the fan-out as a plain integer
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the parent position of `child`, or `None` for the root
    /// (and for the non-position 0).
    #[inline]
    pub fn parent(self, child: usize) -> Option<usize> {
        if child <= ROOT {
            None
        } else {
            Some((child - 2) / self.0 + 1)
        }
    }

    /// Returns the position of the leftmost child of `parent`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `parent < 1`, or if the
    /// child position does not fit in `usize`.
    #[inline]
    pub fn first_child(self, parent: usize) -> Result<usize, HeapError> {
        let invalid = HeapError::InvalidArgument {
            argument: "parent",
            value: parent,
        };
        if parent < ROOT {
            return Err(invalid);
        }
        (parent - 1)
            .checked_mul(self.0)
            .and_then(|offset| offset.checked_add(2))
            .ok_or(invalid)
    }

    /// Returns the positions of the children of `parent` that exist in a
    /// heap of `len` elements
    ///
    /// The range is empty when `parent` is a leaf or not a position.
    pub fn children(self, parent: usize, len: usize) -> RangeInclusive<usize> {
        match self.first_child(parent) {
            Ok(first) if first <= len => {
                let last = first.saturating_add(self.0 - 1).min(len);
                first..=last
            }
            // `1..=0` is the canonical empty inclusive range here
            _ => 1..=0,
        }
    }

    /// Returns the last position with at least one child in a heap of
    /// `len` elements, i.e. the parent of the last leaf.
    #[inline]
    pub fn last_internal(self, len: usize) -> Option<usize> {
        self.parent(len)
    }
}

impl Default for Fanout {
    fn default() -> Self {
        Fanout::BINARY
    }
}

impl TryFrom<usize> for Fanout {
    type Error = HeapError;

    fn try_from(d: usize) -> Result<Self, Self::Error> {
        Fanout::new(d)
    }
}

impl From<Fanout> for usize {
    fn from(fanout: Fanout) -> usize {
        fanout.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fanout(d: usize) -> Fanout {
        Fanout::new(d).unwrap()
    }

    #[test]
    fn test_rejects_small_fanout() {
        assert_eq!(
            Fanout::new(0),
            Err(HeapError::InvalidArgument {
                argument: "fanout",
                value: 0
            })
        );
        assert!(Fanout::new(1).is_err());
        assert!(Fanout::new(2).is_ok());
        assert!(Fanout::new(3).is_ok());
    }

    #[test]
    fn test_parent_quaternary() {
        let d = fanout(4);
        assert_eq!(d.parent(18), Some(5));
        assert_eq!(d.parent(21), Some(5));
        assert_eq!(d.parent(22), Some(6));
        assert_eq!(d.parent(6), Some(2));
        assert_eq!(d.parent(2), Some(1));
    }

    #[test]
    fn test_parent_binary() {
        let d = Fanout::BINARY;
        assert_eq!(d.parent(2), Some(1));
        assert_eq!(d.parent(3), Some(1));
        assert_eq!(d.parent(8), Some(4));
        assert_eq!(d.parent(9), Some(4));
        assert_eq!(d.parent(12), Some(6));
        assert_eq!(d.parent(13), Some(6));
    }

    #[test]
    fn test_parent_ternary() {
        let d = fanout(3);
        assert_eq!(d.parent(17), Some(6));
        assert_eq!(d.parent(9), Some(3));
        assert_eq!(d.parent(13), Some(4));
        assert_eq!(d.parent(3), Some(1));
    }

    #[test]
    fn test_root_has_no_parent() {
        for d in 2..8 {
            assert_eq!(fanout(d).parent(1), None);
            assert_eq!(fanout(d).parent(0), None);
        }
    }

    #[test]
    fn test_first_child() {
        let d = fanout(4);
        assert_eq!(d.first_child(1), Ok(2));
        assert_eq!(d.first_child(2), Ok(6));
        assert_eq!(d.first_child(5), Ok(18));
        assert_eq!(d.first_child(6), Ok(22));
        assert_eq!(d.first_child(7), Ok(26));

        let d = Fanout::BINARY;
        assert_eq!(d.first_child(1), Ok(2));
        assert_eq!(d.first_child(2), Ok(4));
        assert_eq!(d.first_child(3), Ok(6));
        assert_eq!(d.first_child(4), Ok(8));

        let d = fanout(3);
        assert_eq!(d.first_child(1), Ok(2));
        assert_eq!(d.first_child(2), Ok(5));
        assert_eq!(d.first_child(4), Ok(11));
        assert_eq!(d.first_child(6), Ok(17));
    }

    #[test]
    fn test_first_child_of_zero_is_invalid() {
        assert_eq!(
            fanout(4).first_child(0),
            Err(HeapError::InvalidArgument {
                argument: "parent",
                value: 0
            })
        );
    }

    #[test]
    fn test_first_child_overflow_is_invalid() {
        assert!(fanout(4).first_child(usize::MAX).is_err());
    }

    #[test]
    fn test_parent_inverts_first_child() {
        for d in 2..10 {
            let f = fanout(d);
            for p in 1..200 {
                let first = f.first_child(p).unwrap();
                for k in 0..d {
                    assert_eq!(f.parent(first + k), Some(p));
                }
            }
        }
    }

    #[test]
    fn test_children_clipped_to_len() {
        let d = fanout(4);
        assert_eq!(d.children(1, 10), 2..=5);
        assert_eq!(d.children(2, 8), 6..=8);
        assert!(d.children(3, 9).is_empty());
        assert!(d.children(0, 9).is_empty());
        assert!(d.children(1, 1).is_empty());
    }

    #[test]
    fn test_last_internal() {
        assert_eq!(fanout(3).last_internal(5), Some(2));
        assert_eq!(Fanout::BINARY.last_internal(7), Some(3));
        assert_eq!(Fanout::BINARY.last_internal(1), None);
        assert_eq!(Fanout::BINARY.last_internal(0), None);
    }
}
