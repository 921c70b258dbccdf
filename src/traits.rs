//! Comparison trait and error types for the heap
//!
//! This module provides the pieces shared by every heap operation:
//!
//! - [`Comparator`]: the ordering relation the heap is built around.
//!   Unlike [`Ord`], a comparator is a stored value and its comparison
//!   is *fallible*: `try_cmp` may report an error instead of an
//!   [`Ordering`], and every heap operation that runs the comparator
//!   rolls back to its pre-call state when that happens.
//! - [`NaturalOrder`]: the default comparator, delegating to [`Ord`]
//!   and never failing.
//! - [`Reversed`]: an adapter inverting any comparator (the usual way
//!   to get a min-heap).
//! - [`HeapError`] / [`PushError`]: the error types surfaced by
//!   [`try_pop`](crate::LeftistHeap::try_pop) and
//!   [`try_push`](crate::LeftistHeap::try_push).

use std::cmp::Ordering;
use std::convert::Infallible;
use std::error;
use std::fmt;

/// A stored, fallible ordering relation over `T`.
///
/// `try_cmp(a, b)` returning `Ordering::Less` means `a` ranks below
/// `b`, i.e. `b` is the one nearer the top of the heap. When every
/// comparison succeeds the relation must be a total order, exactly as
/// for [`Ord`]. The heap never retries a failed comparison.
///
/// Any `Fn(&T, &T) -> Result<Ordering, E>` closure is a comparator,
/// which is the easiest way to order by a projection or to make a
/// comparison that can fail:
///
/// ```rust
/// use leftist_heap::LeftistHeap;
///
/// #[derive(Debug, PartialEq)]
/// struct NotComparable;
///
/// // f64 is only partially ordered: NaN makes the comparison fail.
/// let total = |a: &f64, b: &f64| a.partial_cmp(b).ok_or(NotComparable);
///
/// let mut heap = LeftistHeap::with_comparator(total);
/// heap.try_push(0.5).unwrap();
/// heap.try_push(1.5).unwrap();
/// assert_eq!(heap.peek(), Some(&1.5));
///
/// // The failed push hands the element back and leaves the heap alone.
/// let err = heap.try_push(f64::NAN).unwrap_err();
/// assert!(err.item.is_nan());
/// assert_eq!(err.error, NotComparable);
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Comparator<T> {
    /// The failure the comparison can report.
    ///
    /// Use [`Infallible`] for comparisons that cannot fail; the heap
    /// then additionally exposes the plain `push`/`pop`/`merge`
    /// surface.
    type Error;

    /// Compares two elements, or reports why it cannot.
    fn try_cmp(&self, a: &T, b: &T) -> Result<Ordering, Self::Error>;
}

/// The default comparator: [`Ord::cmp`], never failing.
///
/// With `NaturalOrder` the heap is a max-heap over `T: Ord`, matching
/// `std::collections::BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    type Error = Infallible;

    fn try_cmp(&self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// Inverts the ordering of another comparator.
///
/// `Reversed(NaturalOrder)` turns the heap into a min-heap:
///
/// ```rust
/// use leftist_heap::{LeftistHeap, NaturalOrder, Reversed};
///
/// let mut heap = LeftistHeap::with_comparator(Reversed(NaturalOrder));
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(heap.pop(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    type Error = C::Error;

    fn try_cmp(&self, a: &T, b: &T) -> Result<Ordering, C::Error> {
        self.0.try_cmp(a, b).map(Ordering::reverse)
    }
}

impl<T, E, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    fn try_cmp(&self, a: &T, b: &T) -> Result<Ordering, E> {
        self(a, b)
    }
}

/// Error type for [`try_pop`](crate::LeftistHeap::try_pop)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError<E> {
    /// The heap holds no elements
    Empty,
    /// The comparator failed; the heap was restored to its pre-call state
    Compare(E),
}

impl<E> fmt::Display for HeapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::Compare(_) => write!(f, "comparator failed; heap left unchanged"),
        }
    }
}

impl<E: error::Error + 'static> error::Error for HeapError<E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HeapError::Empty => None,
            HeapError::Compare(e) => Some(e),
        }
    }
}

/// Error type for [`try_push`](crate::LeftistHeap::try_push)
///
/// A failed push never links the new element into the heap, so the
/// element is handed back here instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushError<T, E> {
    /// The element that was not inserted
    pub item: T,
    /// The comparator failure that rejected it
    pub error: E,
}

impl<T, E> fmt::Display for PushError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comparator failed during push; element returned to caller")
    }
}

impl<T: fmt::Debug, E: error::Error + 'static> error::Error for PushError<T, E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
