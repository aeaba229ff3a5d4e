// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue implemented with a binary heap whose order is decided by a comparator.
//!
//! A `BinaryHeap` keeps the item that wins under its comparator at the root. The comparator
//! is fixed at construction: [`HeapOrder::Min`] puts the smallest item on top,
//! [`HeapOrder::Max`] the greatest, and any [`Compare`] implementation (including plain
//! `Fn(&T, &T) -> Ordering` closures) can define an arbitrary total order.
//!
//! Insertion and removal have `O(log n)` time complexity. Retrieving the root is `O(1)`.
//!
//! Three operations are built on top of the heap: [`from_sequence`] bulk-loads a max heap,
//! [`nth_largest`] selects the item of a given rank without touching the heap, and [`merge`]
//! combines two heaps into a new one.
//!
//! ```
//! use comparator_heap::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::min_heap();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.remove(), Ok(1));
//! assert_eq!(heap.remove(), Ok(3));
//! assert_eq!(heap.remove(), Ok(5));
//! assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter;
use std::slice;
use std::vec;

use compare::{natural, Compare};

mod error;
mod ops;

pub use error::{HeapError, Result};
pub use ops::{from_sequence, merge, nth_largest};

// The heap is a complete binary tree stored level by level in a Vec:
//
//            (0)
//          /     \
//       (1)       (2)
//      /   \     /   \
//    (3)   (4) (5)   (6)
//
// The children of offset i live at 2i+1 and 2i+2, its parent at (i-1)/2.
// A parent never loses to either of its children under the comparator,
// so the winning item is always at offset 0.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// The first `v.len() - 1` items are considered a valid heap
/// and the last item is to be inserted.
fn sift_up<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut node = v.len() - 1;
    while node > 0 {
        let par = parent(node);
        // The parent already wins, nothing to do anymore.
        if cmp.compares_gt(&v[node], &v[par]) {
            return;
        }
        v.swap(node, par);
        node = par;
    }
}

/// The root of an otherwise valid heap has been replaced with some other
/// value. This function restores the heap order.
fn sift_down<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let mut node = 0;
    loop {
        let c1 = node * 2 + 1;
        let c2 = node * 2 + 2;
        let mut best = node;
        if c1 < v.len() && cmp.compares_lt(&v[c1], &v[best]) {
            best = c1;
        }
        if c2 < v.len() && cmp.compares_lt(&v[c2], &v[best]) {
            best = c2;
        }
        if best == node {
            return;
        }
        v.swap(node, best);
        node = best;
    }
}

/// Takes the root out of a valid heap, moving the last item into its place.
fn pop_root<T, C: Compare<T>>(v: &mut Vec<T>, cmp: &C) -> Option<T> {
    if v.is_empty() {
        return None;
    }
    let root = v.swap_remove(0);
    sift_down(v, cmp);
    Some(root)
}

fn is_heap<T, C: Compare<T>>(v: &[T], cmp: &C) -> bool {
    (1..v.len()).all(|child| cmp.compares_le(&v[parent(child)], &v[child]))
}

/// The orientation of a heap over naturally ordered items.
///
/// `Min` keeps the smallest item at the root, `Max` the greatest. Both heaps built by
/// [`BinaryHeap::min_heap`] and [`BinaryHeap::max_heap`] share this comparator type, so a
/// value of either orientation fits in the same `BinaryHeap<T>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    Min,
    #[default]
    Max,
}

impl<T: Ord + ?Sized> Compare<T> for HeapOrder {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        match *self {
            HeapOrder::Min => natural().compare(l, r),
            HeapOrder::Max => natural().compare(r, l),
        }
    }
}

/// A priority queue implemented with a binary heap.
///
/// The item at the root compares less than or equal to every other item under the heap's
/// comparator. It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct BinaryHeap<T, C = HeapOrder> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Returns an empty heap whose root is its smallest item.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::min_heap();
    /// heap.extend(vec![4, 2, 9]);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn min_heap() -> BinaryHeap<T> {
        Self::with_comparator(HeapOrder::Min)
    }

    /// Returns an empty heap whose root is its greatest item.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_heap();
    /// heap.extend(vec![4, 2, 9]);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    pub fn max_heap() -> BinaryHeap<T> {
        Self::with_comparator(HeapOrder::Max)
    }

    /// Returns the orientation this heap was built with.
    pub fn order(&self) -> HeapOrder {
        self.cmp
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Returns a max heap containing all the items of the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&6));
    /// ```
    fn from(vec: Vec<T>) -> BinaryHeap<T> {
        Self::from_vec_and_comparator(vec, HeapOrder::Max)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use comparator_heap::BinaryHeap;
    ///
    /// // Shortest word first.
    /// let mut heap = BinaryHeap::with_comparator(|a: &String, b: &String| -> Ordering {
    ///     a.len().cmp(&b.len())
    /// });
    /// heap.push("heap".to_string());
    /// heap.push("a".to_string());
    /// heap.push("tree".to_string());
    /// assert_eq!(heap.remove(), Ok("a".to_string()));
    /// ```
    pub fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// The result is the same as pushing the items one at a time in vector order.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> BinaryHeap<T, C> {
        for to in 2..vec.len() + 1 {
            sift_up(&mut vec[..to], &cmp);
        }
        let heap = BinaryHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns the comparator that orders this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator visiting all items in the heap in storage order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns the backing storage, laid out as a complete binary tree
    /// (children of `i` at `2i + 1` and `2i + 2`).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a reference to the item at the root of the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Pushes an item onto the heap.
    ///
    /// The item rises until it meets a parent that beats it under the comparator, or reaches
    /// the root. Ties rise.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        sift_up(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Removes the item at the root of the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty; the heap is left untouched.
    pub fn remove(&mut self) -> Result<T> {
        self.pop().ok_or(HeapError::EmptyContainer)
    }

    /// Removes the item at the root of the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let root = pop_root(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
        root
    }

    /// Consumes the heap and returns its items as a vector in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its items in the order `pop` would yield them.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = pop_root(&mut self.data, &self.cmp) {
            sorted.push(item);
        }
        sorted
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in storage order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item compares less than its parent.
    fn is_valid(&self) -> bool {
        is_heap(&self.data, &self.cmp)
    }
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `BinaryHeap` in storage order.
///
/// Acquire through [`BinaryHeap::iter`].
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.0.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `BinaryHeap` in storage order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `BinaryHeap` in storage order.
///
/// Acquire through [`BinaryHeap::drain`].
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.data.into_iter())
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use rand::{thread_rng, Rng};

    use super::{BinaryHeap, HeapError, HeapOrder};

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        for order in [HeapOrder::Min, HeapOrder::Max] {
            for _ in 0..100 {
                let mut heap = BinaryHeap::with_comparator(order);
                for _ in 0..100 {
                    heap.push(rng.gen::<u32>());
                }
                let sorted = heap.into_sorted_vec();
                assert_eq!(sorted.len(), 100);
                for pair in sorted.windows(2) {
                    match order {
                        HeapOrder::Min => assert!(pair[0] <= pair[1]),
                        HeapOrder::Max => assert!(pair[0] >= pair[1]),
                    }
                }
            }
        }
    }

    #[test]
    fn fuzz_push_remove_keeps_order() {
        let mut rng = thread_rng();
        let mut heap = BinaryHeap::min_heap();
        for round in 0..1000 {
            let len = heap.len();
            if rng.gen_bool(0.6) {
                heap.push(rng.gen_range(0..50u8));
                assert_eq!(heap.len(), len + 1);
            } else if len > 0 {
                let root = *heap.peek().unwrap();
                assert_eq!(heap.remove(), Ok(root));
                assert_eq!(heap.len(), len - 1);
            } else {
                assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
                assert_eq!(heap.len(), 0);
            }
            assert!(heap.is_valid(), "invalid heap after round {}", round);
        }
    }

    #[test]
    fn test_new_heaps_are_empty() {
        let min = BinaryHeap::<i32>::min_heap();
        let max = BinaryHeap::<i32>::max_heap();
        let custom: BinaryHeap<i32, _> = BinaryHeap::with_comparator(|a: &i32, b: &i32| a.cmp(b));
        assert!(min.is_empty());
        assert_eq!(max.len(), 0);
        assert_eq!(custom.len(), 0);
        assert_eq!(min.order(), HeapOrder::Min);
        assert_eq!(max.order(), HeapOrder::Max);
    }

    #[test]
    fn test_remove_empty() {
        let mut heap = BinaryHeap::<i32>::max_heap();
        assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
    }

    // Inserting 44, 29, 58, 2, 98, 11, 65, 3, 68, 99 into a max heap leaves
    //
    //              [99]
    //           /        \
    //       [98]          [65]
    //      /    \        /    \
    //   [58]    [68]  [11]    [44]
    //   /  \    /
    // [2]  [3] [29]
    #[test]
    fn test_max_heap_insert_and_remove_layout() {
        let inserts = [44, 29, 58, 2, 98, 11, 65, 3, 68, 99];
        let after_insert: [&[i32]; 10] = [
            &[44],
            &[44, 29],
            &[58, 29, 44],
            &[58, 29, 44, 2],
            &[98, 58, 44, 2, 29],
            &[98, 58, 44, 2, 29, 11],
            &[98, 58, 65, 2, 29, 11, 44],
            &[98, 58, 65, 3, 29, 11, 44, 2],
            &[98, 68, 65, 58, 29, 11, 44, 2, 3],
            &[99, 98, 65, 58, 68, 11, 44, 2, 3, 29],
        ];
        let after_remove: [&[i32]; 10] = [
            &[98, 68, 65, 58, 29, 11, 44, 2, 3],
            &[68, 58, 65, 3, 29, 11, 44, 2],
            &[65, 58, 44, 3, 29, 11, 2],
            &[58, 29, 44, 3, 2, 11],
            &[44, 29, 11, 3, 2],
            &[29, 3, 11, 2],
            &[11, 3, 2],
            &[3, 2],
            &[2],
            &[],
        ];
        let removed = [99, 98, 68, 65, 58, 44, 29, 11, 3, 2];

        let mut heap = BinaryHeap::max_heap();
        for (item, expected) in inserts.iter().zip(after_insert.iter()) {
            heap.push(*item);
            assert_eq!(heap.as_slice(), *expected);
        }
        for (item, expected) in removed.iter().zip(after_remove.iter()) {
            assert_eq!(heap.remove(), Ok(*item));
            assert_eq!(heap.as_slice(), *expected);
        }
        assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
    }

    #[test]
    fn test_custom_comparator() {
        // Highest priority first, earliest arrival breaks ties.
        let mut heap = BinaryHeap::with_comparator(|a: &(u8, char), b: &(u8, char)| -> Ordering {
            b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1))
        });
        heap.push((1, 'b'));
        heap.push((3, 'c'));
        heap.push((3, 'a'));
        heap.push((2, 'd'));

        assert_eq!(heap.peek(), Some(&(3, 'a')));
        let order: Vec<char> = heap.into_sorted_vec().into_iter().map(|(_, name)| name).collect();
        assert_eq!(order, ['a', 'c', 'd', 'b']);
    }

    #[test]
    fn test_from_vec() {
        let heap = BinaryHeap::<i32>::from(vec![]);
        assert_eq!(heap.peek(), None);

        let heap = BinaryHeap::from(vec![2]);
        assert_eq!(heap.peek(), Some(&2));

        let heap = BinaryHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.peek(), Some(&3));

        let mut pushed = BinaryHeap::max_heap();
        pushed.extend(&[44, 29, 58, 2, 98, 11, 65, 3, 68, 99]);
        let bulk = BinaryHeap::from(vec![44, 29, 58, 2, 98, 11, 65, 3, 68, 99]);
        assert_eq!(bulk.as_slice(), pushed.as_slice());
    }

    #[test]
    fn test_is_valid() {
        fn new(data: Vec<i32>) -> BinaryHeap<i32> {
            BinaryHeap { data, cmp: HeapOrder::Min }
        }

        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![1, 5, 2]).is_valid());
        assert!(new(vec![1, 5, 2, 6, 5]).is_valid());

        assert!(!new(vec![2, 1]).is_valid());
        assert!(!new(vec![1, 5, 0]).is_valid());
        assert!(!new(vec![1, 5, 2, 6, 5, 1]).is_valid());
        assert!(!new(vec![1, 5, 2, 3]).is_valid());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut heap = BinaryHeap::from(vec![3, 1, 2]);
        let copy = heap.clone();
        heap.push(10);
        assert_eq!(heap.len(), 4);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.peek(), Some(&3));
    }

    #[test]
    fn test_iterators() {
        let mut heap = BinaryHeap::min_heap();
        heap.extend(vec![5, 3, 8, 1]);
        assert_eq!(heap.iter().len(), 4);
        assert_eq!((&heap).into_iter().copied().min(), Some(1));
        assert_eq!(format!("{:?}", heap), format!("{:?}", heap.as_slice()));

        let mut drained: Vec<_> = heap.drain().collect();
        drained.sort();
        assert_eq!(drained, [1, 3, 5, 8]);
        assert!(heap.is_empty());

        let collected: BinaryHeap<i32> = vec![4, 7, 2].into_iter().collect();
        assert_eq!(collected.order(), HeapOrder::Max);
        assert_eq!(collected.peek(), Some(&7));
        let mut items = collected.into_vec();
        items.sort();
        assert_eq!(items, [2, 4, 7]);
    }
}
