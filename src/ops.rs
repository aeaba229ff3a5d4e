// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations composed from the heap's push and pop.

use compare::Compare;
use tracing::{debug, trace};

use crate::{pop_root, BinaryHeap, HeapError, HeapOrder, Result};

/// Builds a max heap holding every item of `items`.
///
/// Items are pushed one at a time in iteration order, so the stored layout is the one
/// repeated [`BinaryHeap::push`] calls would produce.
///
/// # Examples
///
/// ```
/// use comparator_heap::from_sequence;
///
/// let heap = from_sequence(vec![3, 1, 6, 5, 2, 4]);
/// assert_eq!(heap.len(), 6);
/// assert_eq!(heap.peek(), Some(&6));
/// ```
pub fn from_sequence<T, I>(items: I) -> BinaryHeap<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut heap = BinaryHeap::max_heap();
    heap.extend(items);
    heap
}

/// Returns the item of rank `n` in priority order, where rank 1 is the root.
///
/// The heap is not modified: selection pops from a copy of its storage that is ordered by
/// the heap's own comparator.
///
/// # Errors
///
/// Returns [`HeapError::InvalidRank`] unless `1 <= n <= heap.len()`.
///
/// # Examples
///
/// ```
/// use comparator_heap::{from_sequence, nth_largest, HeapError};
///
/// let heap = from_sequence(vec![3, 1, 6, 5, 2, 4]);
/// assert_eq!(nth_largest(&heap, 3), Ok(4));
/// assert_eq!(nth_largest(&heap, 7), Err(HeapError::InvalidRank { rank: 7, len: 6 }));
/// ```
pub fn nth_largest<T, C>(heap: &BinaryHeap<T, C>, n: usize) -> Result<T>
where
    T: Clone,
    C: Compare<T>,
{
    let len = heap.len();
    if n == 0 || n > len {
        debug!(rank = n, len, "rejecting out of range rank");
        return Err(HeapError::InvalidRank { rank: n, len });
    }
    trace!(rank = n, len, "selecting by rank");

    let mut scratch = heap.as_slice().to_vec();
    let mut nth = None;
    for _ in 0..n {
        nth = pop_root(&mut scratch, heap.comparator());
    }
    nth.ok_or(HeapError::InvalidRank { rank: n, len })
}

/// Returns a new heap holding every item of `a` followed by every item of `b`.
///
/// The result is a max heap when the first stored item of `a` is greater than its second,
/// and a min heap otherwise (including when `a` has fewer than two items). The orientation
/// of `b` is never inspected. Items are pushed in storage order and duplicates are kept.
/// Neither input is modified.
///
/// # Examples
///
/// ```
/// use comparator_heap::{merge, BinaryHeap, HeapOrder};
///
/// let mut a = BinaryHeap::max_heap();
/// a.extend(vec![7, 5, 3]);
/// let mut b = BinaryHeap::max_heap();
/// b.extend(vec![6, 4, 2]);
///
/// let merged = merge(&a, &b);
/// assert_eq!(merged.order(), HeapOrder::Max);
/// assert_eq!(merged.len(), 6);
/// assert_eq!(merged.peek(), Some(&7));
/// ```
pub fn merge<T, C, D>(a: &BinaryHeap<T, C>, b: &BinaryHeap<T, D>) -> BinaryHeap<T>
where
    T: Ord + Clone,
    C: Compare<T>,
    D: Compare<T>,
{
    let order = match a.as_slice() {
        [first, second, ..] if first > second => HeapOrder::Max,
        _ => HeapOrder::Min,
    };
    debug!(?order, left = a.len(), right = b.len(), "merging heaps");

    let mut merged = BinaryHeap::with_capacity_and_comparator(a.len() + b.len(), order);
    merged.extend(a.iter().cloned());
    merged.extend(b.iter().cloned());
    merged
}
