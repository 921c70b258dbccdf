//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load. Sorted input
//! gets special attention because it degenerates the tree into a long
//! left spine.

use leftist_heap::LeftistHeap;

use std::collections::BinaryHeap;

/// Deterministic pseudo-random numbers without pulling in a crate.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

#[test]
fn test_massive_push_pop() {
    let mut heap = LeftistHeap::new();

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert!(heap.verify_internal_structure());

    for i in (0..10_000).rev() {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_descending_input() {
    let mut heap = LeftistHeap::new();

    for i in (0..10_000).rev() {
        heap.push(i);
    }
    assert!(heap.verify_internal_structure());

    for i in (0..10_000).rev() {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_alternating_ops() {
    let mut heap = LeftistHeap::new();

    // Two pushes, one pop, five thousand times over.
    for i in 0..5_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert!(heap.pop().is_some());
    }
    assert_eq!(heap.len(), 5_000);
    assert!(heap.verify_internal_structure());

    let mut last = i32::MAX;
    while let Some(v) = heap.pop() {
        assert!(v <= last);
        last = v;
    }
    assert!(heap.is_empty());
}

#[test]
fn test_large_merge() {
    let mut evens = LeftistHeap::new();
    let mut odds = LeftistHeap::new();

    for i in 0..5_000 {
        evens.push(i * 2);
        odds.push(i * 2 + 1);
    }

    evens.merge(&mut odds);
    assert_eq!(evens.len(), 10_000);
    assert!(odds.is_empty());
    assert!(evens.verify_internal_structure());

    for i in (0..10_000).rev() {
        assert_eq!(evens.pop(), Some(i));
    }
}

#[test]
fn test_repeated_merge_accumulation() {
    let mut combined = LeftistHeap::new();

    for chunk in 0..100 {
        let mut piece = LeftistHeap::new();
        for i in 0..100 {
            piece.push(chunk * 100 + i);
        }
        combined.merge(&mut piece);
        assert!(piece.is_empty());
    }

    assert_eq!(combined.len(), 10_000);
    assert!(combined.verify_internal_structure());

    let mut last = i32::MAX;
    let mut count = 0;
    while let Some(v) = combined.pop() {
        assert!(v <= last);
        last = v;
        count += 1;
    }
    assert_eq!(count, 10_000);
}

/// Ascending input chains every old tree off as a left child, so this
/// heap is one 200_000-node-deep spine. Verification, clone, clear,
/// and drop all have to walk it without recursing.
#[test]
fn test_deep_spine_survives_clone_clear_drop() {
    let mut heap: LeftistHeap<u32> = (0..200_000).collect();
    assert_eq!(heap.len(), 200_000);
    assert!(heap.verify_internal_structure());

    let mut copy = heap.clone();
    assert_eq!(copy.len(), 200_000);
    assert_eq!(copy.pop(), Some(199_999));
    assert_eq!(copy.pop(), Some(199_998));

    copy.clear();
    assert!(copy.is_empty());

    assert_eq!(heap.pop(), Some(199_999));
    drop(heap);
}

#[test]
fn test_owned_payloads_drop_cleanly() {
    let mut heap = LeftistHeap::new();

    for i in 0..10_000 {
        heap.push(format!("{i:08}"));
    }
    assert_eq!(heap.len(), 10_000);

    assert_eq!(heap.pop().as_deref(), Some("00009999"));
    assert_eq!(heap.pop().as_deref(), Some("00009998"));

    // The remaining 9_998 strings go down with the heap.
    drop(heap);
}

/// Random mixed workload cross-checked against std's BinaryHeap.
#[test]
fn test_mixed_workload_matches_binary_heap() {
    let mut lcg = Lcg::new(0x5EED);
    let mut heap = LeftistHeap::new();
    let mut model = BinaryHeap::new();

    for step in 0..50_000u32 {
        let roll = lcg.next();
        if roll % 3 == 0 {
            assert_eq!(heap.pop(), model.pop());
        } else {
            let value = (roll >> 16) as i32 % 1_000;
            heap.push(value);
            model.push(value);
        }

        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek(), model.peek());
        if step % 5_000 == 0 {
            assert!(heap.verify_internal_structure());
        }
    }

    while let Some(v) = heap.pop() {
        assert_eq!(Some(v), model.pop());
    }
    assert!(model.is_empty());
}
