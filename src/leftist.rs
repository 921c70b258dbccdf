//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree biased to the left:
//! every node's left child has a null-path length at least that of its
//! right child. The bias keeps the right spine at most `log2(n + 1)`
//! nodes long, and every operation here is a thin wrapper around one
//! primitive, `meld`, which only ever walks right spines.
//!
//! The heap orders elements through a stored [`Comparator`], and a
//! comparator is allowed to fail. Any operation whose comparison fails
//! rolls the heap back to the state it had before the call, hands the
//! not-yet-inserted element back where there is one, and reports the
//! comparator's error.
//!
//! # Time Complexity
//! - Push: O(log n) worst case, O(1) for an ascending sequence
//! - Pop: O(log n)
//! - Peek: O(1)
//! - Merge: O(log n), proportional to the two right spines
//!
//! # References
//! - Crane, C. A. (1972). "Linear Lists and Priority Queues as
//!   Balanced Binary Trees" (introduced leftist trees)
//! - Knuth, "The Art of Computer Programming", Vol. 3, §5.2.3

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::traits::{Comparator, HeapError, NaturalOrder, PushError};

/// One owned tree node.
///
/// `dist` caches the null-path length: the number of nodes on the
/// shortest path down to a missing child. A leaf has `dist == 1`; an
/// absent node counts as 0. The leftist bias is `npl(left) >=
/// npl(right)` at every node, and `dist` is always `npl(right) + 1`.
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
    dist: u32,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn singleton(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
            dist: 1,
        })
    }
}

fn npl<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |node| node.dist)
}

/// Failure bubbling out of `meld`.
///
/// Carries the comparator error together with both input trees,
/// returned exactly as they were passed in, so every caller can
/// reinstall them and leave the heap untouched.
struct MeldError<T, E> {
    error: E,
    first: Link<T>,
    second: Link<T>,
}

/// A mergeable max-priority queue backed by a leftist tree.
///
/// With the default [`NaturalOrder`] comparator this behaves like
/// `std::collections::BinaryHeap`: `pop` returns the greatest element
/// first. Unlike `BinaryHeap`, two heaps [`merge`](LeftistHeap::merge)
/// in O(log n), and the comparator is a stored value that may fail,
/// with every operation rolling back cleanly when it does.
///
/// # Example
///
/// ```rust
/// use leftist_heap::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(4);
///
/// assert_eq!(heap.peek(), Some(&4));
/// assert_eq!(heap.pop(), Some(4));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
pub struct LeftistHeap<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> LeftistHeap<T> {
    /// Creates an empty heap ordered by [`Ord`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftist_heap::LeftistHeap;
    ///
    /// let mut heap = LeftistHeap::new();
    /// heap.push("plum");
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn new() -> Self {
        LeftistHeap::with_comparator(NaturalOrder)
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator.
    ///
    /// Any `Fn(&T, &T) -> Result<Ordering, E>` closure works, as does
    /// [`Reversed`](crate::Reversed) for a min-heap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use std::convert::Infallible;
    /// use leftist_heap::LeftistHeap;
    ///
    /// let by_len = |a: &&str, b: &&str| Ok::<_, Infallible>(a.len().cmp(&b.len()));
    /// let mut heap = LeftistHeap::with_comparator(by_len);
    /// heap.push("fig");
    /// heap.push("banana");
    /// heap.push("pear");
    /// assert_eq!(heap.pop(), Some("banana"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        LeftistHeap {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the top element without removing it, or `None` if the
    /// heap is empty. Runs no comparisons.
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.item)
    }

    /// Borrows the stored comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every element, keeping the comparator.
    ///
    /// Teardown is iterative, so clearing is safe on trees of any
    /// depth.
    pub fn clear(&mut self) {
        trace!(dropped = self.len, "cleared heap");
        self.len = 0;
        drop_tree(self.root.take());
    }
}

impl<T, C: Comparator<T>> LeftistHeap<T, C> {
    /// Inserts an element.
    ///
    /// # Errors
    ///
    /// If the comparator fails, the heap is left exactly as it was and
    /// the element travels back to the caller inside the
    /// [`PushError`].
    ///
    /// # Time Complexity
    /// O(log n) comparisons worst case; an ascending sequence costs
    /// O(1) per push.
    pub fn try_push(&mut self, item: T) -> Result<(), PushError<T, C::Error>> {
        let node = Node::singleton(item);
        match Self::meld(&self.cmp, self.root.take(), Some(node)) {
            Ok(root) => {
                self.root = root;
                self.len += 1;
                trace!(len = self.len, "pushed element");
                Ok(())
            }
            Err(MeldError {
                error,
                first,
                second,
            }) => {
                self.root = first;
                trace!("comparison failed; push rolled back");
                let node = match second {
                    Some(node) => node,
                    // A failing meld hands both inputs back, and the
                    // fresh singleton was the second one.
                    None => unreachable!("meld dropped the pushed node"),
                };
                Err(PushError {
                    item: node.item,
                    error,
                })
            }
        }
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if there is nothing to pop.
    /// [`HeapError::Compare`] if melding the two subtrees fails; the
    /// popped element is reattached and the heap is left exactly as it
    /// was.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn try_pop(&mut self) -> Result<T, HeapError<C::Error>> {
        let mut root = match self.root.take() {
            Some(root) => root,
            None => return Err(HeapError::Empty),
        };
        let left = root.left.take();
        let right = root.right.take();
        match Self::meld(&self.cmp, left, right) {
            Ok(rest) => {
                self.root = rest;
                self.len -= 1;
                trace!(len = self.len, "popped element");
                Ok(root.item)
            }
            Err(MeldError {
                error,
                first,
                second,
            }) => {
                // Both children come back untouched; the old root's
                // cached dist is still correct for them.
                root.left = first;
                root.right = second;
                self.root = Some(root);
                trace!("comparison failed; pop rolled back");
                Err(HeapError::Compare(error))
            }
        }
    }

    /// Moves every element of `other` into `self`, leaving `other`
    /// empty. The destination's comparator decides the merged order,
    /// so both heaps should have been built under an equivalent
    /// relation. Merging a heap into itself is ruled out at compile
    /// time by the two `&mut` borrows.
    ///
    /// # Errors
    ///
    /// If the comparator fails, both heaps are left exactly as they
    /// were.
    ///
    /// # Time Complexity
    /// O(log n) in the total size, proportional to the two right
    /// spines.
    pub fn try_merge(&mut self, other: &mut Self) -> Result<(), C::Error> {
        match Self::meld(&self.cmp, self.root.take(), other.root.take()) {
            Ok(root) => {
                self.root = root;
                self.len += other.len;
                other.len = 0;
                trace!(len = self.len, "merged heaps");
                Ok(())
            }
            Err(MeldError {
                error,
                first,
                second,
            }) => {
                self.root = first;
                other.root = second;
                trace!("comparison failed; merge rolled back");
                Err(error)
            }
        }
    }

    /// Checks every structural invariant: heap order along each edge,
    /// the leftist bias `npl(left) >= npl(right)`, the cached `dist`
    /// values, and the stored length. Returns false on the first
    /// violation or if the comparator fails.
    ///
    /// Intended for tests and debugging; walks the whole tree without
    /// recursing.
    pub fn verify_internal_structure(&self) -> bool {
        let mut count = 0usize;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            count += 1;
            if node.dist != npl(&node.right) + 1 || npl(&node.left) < npl(&node.right) {
                return false;
            }
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                match self.cmp.try_cmp(&node.item, &child.item) {
                    Ok(Ordering::Less) | Err(_) => return false,
                    Ok(_) => {}
                }
                stack.push(child);
            }
        }
        count == self.len
    }

    /// Melds two heap-ordered leftist trees under `cmp`.
    ///
    /// On success the returned tree owns every node of both inputs. On
    /// failure nothing has been restructured: the error carries both
    /// trees back exactly as they were passed, so the caller can
    /// reinstall them. Each level runs its comparison and the whole
    /// recursive meld below it before writing any pointer or dist, so
    /// a failure can only happen while the trees are still intact.
    ///
    /// Recursion steps down right spines only, which the leftist bias
    /// bounds at O(log n).
    fn meld(cmp: &C, first: Link<T>, second: Link<T>) -> Result<Link<T>, MeldError<T, C::Error>> {
        let (mut a, mut b) = match (first, second) {
            (None, tree) | (tree, None) => return Ok(tree),
            (Some(a), Some(b)) => (a, b),
        };

        // Decide which root survives before touching either tree. On
        // a tie the first argument wins, so pop prefers the left
        // subtree's root.
        let swapped = match cmp.try_cmp(&a.item, &b.item) {
            Ok(Ordering::Less) => {
                mem::swap(&mut a, &mut b);
                true
            }
            Ok(_) => false,
            Err(error) => {
                return Err(MeldError {
                    error,
                    first: Some(a),
                    second: Some(b),
                })
            }
        };

        let detached = a.right.take();
        match Self::meld(cmp, detached, Some(b)) {
            Ok(melded) => {
                a.right = melded;
                if npl(&a.left) < npl(&a.right) {
                    mem::swap(&mut a.left, &mut a.right);
                }
                a.dist = npl(&a.right) + 1;
                Ok(Some(a))
            }
            Err(mut failed) => {
                // Reattach the detached subtree, then undo the swap so
                // the trees travel back in argument order.
                a.right = failed.first.take();
                let b = failed.second.take();
                let (first, second) = if swapped {
                    (b, Some(a))
                } else {
                    (Some(a), b)
                };
                Err(MeldError {
                    error: failed.error,
                    first,
                    second,
                })
            }
        }
    }
}

/// The infallible surface, available whenever the comparator cannot
/// fail. [`NaturalOrder`] and any `Infallible`-erroring closure
/// qualify.
impl<T, C: Comparator<T, Error = Infallible>> LeftistHeap<T, C> {
    /// Inserts an element.
    ///
    /// # Time Complexity
    /// O(log n); an ascending sequence costs O(1) per push.
    pub fn push(&mut self, item: T) {
        match self.try_push(item) {
            Ok(()) => {}
            Err(err) => match err.error {},
        }
    }

    /// Removes and returns the top element, or `None` if the heap is
    /// empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        match self.try_pop() {
            Ok(item) => Some(item),
            Err(HeapError::Empty) => None,
            Err(HeapError::Compare(never)) => match never {},
        }
    }

    /// Moves every element of `other` into `self`, leaving `other`
    /// empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leftist_heap::LeftistHeap;
    ///
    /// let mut evens: LeftistHeap<i32> = [0, 2, 4].into_iter().collect();
    /// let mut odds: LeftistHeap<i32> = [1, 3, 5].into_iter().collect();
    ///
    /// evens.merge(&mut odds);
    /// assert_eq!(evens.len(), 6);
    /// assert_eq!(evens.peek(), Some(&5));
    /// assert!(odds.is_empty());
    /// ```
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn merge(&mut self, other: &mut Self) {
        match self.try_merge(other) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        LeftistHeap::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    fn clone(&self) -> Self {
        LeftistHeap {
            root: clone_tree(&self.root),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        drop_tree(self.root.take());
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T, Error = Infallible>> Extend<T> for LeftistHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C> FromIterator<T> for LeftistHeap<T, C>
where
    C: Default + Comparator<T, Error = Infallible>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = LeftistHeap::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

/// Deep-copies a tree with an explicit worklist of destination slots.
fn clone_tree<T: Clone>(root: &Link<T>) -> Link<T> {
    let mut cloned = None;
    let mut stack = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, &mut cloned));
    }
    while let Some((node, slot)) = stack.pop() {
        let copy = slot.insert(Box::new(Node {
            item: node.item.clone(),
            left: None,
            right: None,
            dist: node.dist,
        }));
        if let Some(right) = node.right.as_deref() {
            stack.push((right, &mut copy.right));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, &mut copy.left));
        }
    }
    cloned
}

/// Tears a tree down without recursing.
///
/// An ascending push sequence builds a left spine as long as the heap
/// itself, deep enough that `Box`'s recursive drop would overflow the
/// stack. Detaching both children before a node drops keeps the
/// recursion depth constant.
fn drop_tree<T>(root: Link<T>) {
    let mut worklist = Vec::new();
    worklist.extend(root);
    while let Some(mut node) = worklist.pop() {
        worklist.extend(node.left.take());
        worklist.extend(node.right.take());
    }
}
