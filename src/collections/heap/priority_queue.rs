//! `PriorityQueue` — a binary heap ordered by a caller-supplied predicate.
//!
//! The predicate `higher(a, b)` answers "does `a` come out before `b`?".
//! Passing `|a, b| a > b` gives a max-queue, `|a, b| a < b` a min-queue, and
//! any other strict ordering works the same way.

use core::fmt;

/// Predicate type used by the [`PriorityQueue::max`] and [`PriorityQueue::min`] constructors.
pub type OrdPriority<T> = fn(&T, &T) -> bool;

/// A priority queue over arbitrary elements.
pub struct PriorityQueue<T, F> {
    elements: Vec<T>,
    higher: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `higher`.
    pub fn new(higher: F) -> Self {
        Self {
            elements: Vec::new(),
            higher,
        }
    }

    /// Creates a queue holding `elements`, heapified bottom-up in \(O(n)\).
    pub fn from_elements(elements: Vec<T>, higher: F) -> Self {
        let mut queue = Self { elements, higher };
        for idx in (0..queue.elements.len() / 2).rev() {
            queue.sift_down(idx);
        }
        queue
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the highest-priority element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Adds `element` to the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the highest-priority element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let element = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        element
    }

    #[inline]
    fn is_higher(&self, a: usize, b: usize) -> bool {
        (self.higher)(&self.elements[a], &self.elements[b])
    }

    /// Index of whichever of `parent` and `child` ranks higher.
    fn highest_of(&self, parent: usize, child: usize) -> usize {
        if child < self.elements.len() && self.is_higher(child, parent) {
            child
        } else {
            parent
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.is_higher(idx, parent) {
                break;
            }
            self.elements.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let target = self.highest_of(self.highest_of(idx, left), right);
            if target == idx {
                break;
            }
            self.elements.swap(idx, target);
            idx = target;
        }
    }
}

impl<T: Ord> PriorityQueue<T, OrdPriority<T>> {
    /// A queue that yields the greatest element first.
    pub fn max() -> Self {
        Self::new(|a, b| a > b)
    }

    /// A queue that yields the least element first.
    pub fn min() -> Self {
        Self::new(|a, b| a < b)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.elements.len())
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
