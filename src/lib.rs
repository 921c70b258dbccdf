//! Mergeable Priority Queue for Rust
//!
//! This crate provides a priority queue backed by a leftist heap, a
//! heap-ordered binary tree whose leftward bias keeps the right spine
//! O(log n) long. Two heaps can merge in logarithmic time, which
//! array-backed binary heaps cannot do, and the ordering comes from a
//! stored comparator that is allowed to fail: an operation whose
//! comparison fails rolls the heap back to the exact state it had
//! before the call.
//!
//! # Features
//!
//! - **Max-heap by default**: with [`NaturalOrder`] the pop order
//!   matches `std::collections::BinaryHeap`
//! - **O(log n) merge**: [`merge`](LeftistHeap::merge) moves one heap
//!   into another by walking only the two right spines
//! - **Custom orderings**: any `Fn(&T, &T) -> Result<Ordering, E>`
//!   closure is a [`Comparator`]; [`Reversed`] flips one for a
//!   min-heap
//! - **Fallible comparison with rollback**: `try_push`, `try_pop` and
//!   `try_merge` report the comparator's error and leave the heap
//!   untouched, handing a rejected element back to the caller
//! - **Deep-tree safe**: drop, clone and clear never recurse, so
//!   degenerate spines from sorted input cannot overflow the stack
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistHeap;
//!
//! let mut ready: LeftistHeap<u32> = [2, 9, 4].into_iter().collect();
//! let mut arrived: LeftistHeap<u32> = [7, 1].into_iter().collect();
//!
//! ready.merge(&mut arrived);
//! assert!(arrived.is_empty());
//! assert_eq!(ready.len(), 5);
//! assert_eq!(ready.pop(), Some(9));
//! assert_eq!(ready.pop(), Some(7));
//! ```

pub mod leftist;
pub mod traits;

// Re-export the working surface for convenience
pub use leftist::LeftistHeap;
pub use traits::{Comparator, HeapError, NaturalOrder, PushError, Reversed};
