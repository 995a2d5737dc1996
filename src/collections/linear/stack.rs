//! `Stack` — an unbounded LIFO container.
//!
//! Backed by a `Vec`, whose tail is the top of the stack.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push` | \(O(1)\) amortized |
//! | `pop` | \(O(1)\) |
//! | `peek` | \(O(1)\) |
//! | `is_empty` | \(O(1)\) |

use core::fmt;

/// A last-in, first-out stack.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `value` onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down to the bottom.
    pub fn iter(&self) -> core::iter::Rev<core::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Returns the elements in push order (bottom first, top last).
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the stack, returning its elements bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every element in iteration order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    /// Framed dump, top element first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---Stack---")?;
        for item in self.iter() {
            writeln!(f, "{item}")?;
        }
        write!(f, "-----------")
    }
}
