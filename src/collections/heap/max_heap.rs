//! `MaxHeap` — a binary max-heap over `Ord` elements.
//!
//! Stored as an implicit complete binary tree in a `Vec`: the children of
//! slot `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.

use core::fmt;

/// A binary heap whose root is always the greatest element.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert` | \(O(\log n)\) |
/// | `delete` | \(O(\log n)\) |
/// | `peek` | \(O(1)\) |
#[derive(Clone)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

#[inline(always)]
fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

#[inline(always)]
fn left_child(idx: usize) -> usize {
    2 * idx + 1
}

#[inline(always)]
fn right_child(idx: usize) -> usize {
    2 * idx + 2
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap by inserting each element in turn.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let iter = elements.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        for element in iter {
            heap.insert(element);
        }
        heap
    }

    /// Inserts `element`, restoring the heap property by sifting it up.
    pub fn insert(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the greatest element.
    ///
    /// The last leaf replaces the root and is sifted down.
    pub fn delete(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Returns the greatest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(top) = self.delete() {
            sorted.push(top);
        }
        sorted.reverse();
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let up = parent(node);
            if self.data[node] > self.data[up] {
                self.data.swap(node, up);
                node = up;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(node);
            let right = right_child(node);

            let mut greatest = node;
            if left < len && self.data[left] > self.data[greatest] {
                greatest = left;
            }
            if right < len && self.data[right] > self.data[greatest] {
                greatest = right;
            }
            if greatest == node {
                break;
            }
            self.data.swap(node, greatest);
            node = greatest;
        }
    }
}

impl<T> MaxHeap<T> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
