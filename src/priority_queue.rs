//! Binary max-heap ordered by a caller supplied comparator
//!
//! [`std::collections::BinaryHeap`] needs an [`Ord`] implementation on the element.
//! Boards have no natural total order and the searches want to rank the same type
//! differently (fewest conflicts first, most attacked queen first), so the ordering
//! is a value of the queue instead.

use crate::errors::EmptyQueueError;
use std::cmp::Ordering;
use std::fmt;

const DEFAULT_CAPACITY: usize = 10;

/// A max-heap. [`remove_max`](PriorityQueue::remove_max) returns the greatest element
/// according to the comparator `F`.
///
/// Successive extractions are non-increasing. Among equal elements no order is promised.
///
/// ```
/// use nqueens::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &i32, b: &i32| b.cmp(a));
/// queue.add(3);
/// queue.add(1);
/// queue.add(2);
/// assert_eq!(queue.remove_max(), Ok(1));
/// ```
pub struct PriorityQueue<T, F = fn(&T, &T) -> Ordering> {
    // heap positions are 1-based: the element at position `p` lives in `items[p - 1]`,
    // its children at positions `2p` and `2p + 1`
    items: Vec<T>,
    compare: F,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates a queue ordered by the elements' [`Ord`] implementation.
    pub fn with_ord() -> Self {
        PriorityQueue {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            compare: Ord::cmp,
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::with_ord()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty queue ranking elements by `compare`.
    pub fn new(compare: F) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            compare,
        }
    }

    /// Inserts an element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.percolate_up(self.items.len());
    }

    /// Removes and returns the greatest element.
    pub fn remove_max(&mut self) -> Result<T, EmptyQueueError> {
        if self.items.is_empty() {
            return Err(EmptyQueueError);
        }
        // the last element takes the place of the root
        let max = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(1);
        }
        Ok(max)
    }

    /// Returns the greatest element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.items.first().ok_or(EmptyQueueError)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of elements in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn less(&self, pos_a: usize, pos_b: usize) -> bool {
        (self.compare)(&self.items[pos_a - 1], &self.items[pos_b - 1]) == Ordering::Less
    }

    fn percolate_up(&mut self, mut child: usize) {
        while child > 1 {
            let parent = child / 2;
            if !self.less(parent, child) {
                break;
            }
            self.items.swap(parent - 1, child - 1);
            child = parent;
        }
    }

    fn percolate_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let mut child = parent * 2;
            if child > len {
                break;
            }
            // promote the larger child
            if child < len && self.less(child, child + 1) {
                child += 1;
            }
            if !self.less(parent, child) {
                break;
            }
            self.items.swap(parent - 1, child - 1);
            parent = child;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish()
    }
}
