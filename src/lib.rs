//! A B-tree list, plus the fixed-capacity inline vector that backs its
//! nodes.
//!
//! This crate provides two cooperating sequence containers:
//!
//! - [`SVec`]: a bounded vector with compile-time capacity, stored
//!   entirely inline.  It never allocates, and it never grows beyond
//!   its capacity: operations that would do so report
//!   [`Error::CapacityExceeded`] instead.
//! - [`BList`]: an ordered sequence backed by a shallow tree whose
//!   nodes buffer their entries in `SVec`s.  Positional lookup,
//!   insertion, and removal anywhere in the sequence run in O(log n),
//!   and iteration is bidirectional.
//!
//! The two are designed together: every tree node's element buffer and
//! child buffer is an `SVec`, so the list's rebalancing operations are
//! expressed as bulk moves between inline vectors.
//!
//! # Example
//!
//! ```
//! use blist::BList;
//!
//! let mut list: BList<i32> = (0..1000).collect();
//!
//! list.insert(500, -1);
//! assert_eq!(list[500], -1);
//!
//! list.remove(500);
//! assert!(list.iter().copied().eq(0..1000));
//! ```

mod blist;
mod svec;
mod tree;

pub mod iter;

pub use crate::blist::BList;
pub use crate::svec::SVec;

/// Error type for operations on [`SVec`].
///
/// [`BList`] itself has no recoverable failure modes beyond those of
/// the element type; out-of-range positional access panics, as it does
/// for the standard containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested size or insertion would exceed the vector's
    /// compile-time capacity.
    #[error("capacity exceeded: requested {requested} slots, but only {capacity} available")]
    CapacityExceeded {
        /// Total number of slots the operation would have needed.
        requested: usize,
        /// The vector's fixed capacity.
        capacity: usize,
    },

    /// A checked positional access was out of bounds.
    #[error("index out of range: index {index} is beyond length {len}")]
    OutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The length at the time of the access.
        len: usize,
    },
}

/// Result type for operations on [`SVec`].
pub type Result<T> = std::result::Result<T, Error>;
