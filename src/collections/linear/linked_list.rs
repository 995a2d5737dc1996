//! `LinkedList` — a singly linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, so the
//! list needs no owning pointer chains and no `unsafe`. Removed nodes go onto
//! a free list and their slots are reused by later insertions.
//!
//! The list tracks both head and tail, which makes `append` and `prepend`
//! \(O(1)\). `delete` and `contains` are linear scans.

use core::fmt;

/// A slot in the node arena.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Free(Option<usize>), // next free slot
}

/// A singly linked list.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

/// Iterator over the values of a [`LinkedList`], head first.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.slots[idx] {
            Slot::Occupied { value, next } => {
                self.current = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.value(idx))
    }

    /// Returns the last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.value(idx))
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Adds `value` at the end of the list.
    pub fn append(&mut self, value: T) {
        let idx = self.alloc(value);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Adds `value` at the start of the list.
    pub fn prepend(&mut self, value: T) {
        let idx = self.alloc(value);
        self.set_next(idx, self.head);
        if self.head.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.next(head);
        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.release(head)
    }

    fn value(&self, idx: usize) -> Option<&T> {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }

    fn next(&self, idx: usize) -> Option<usize> {
        match &self.slots[idx] {
            Slot::Occupied { next, .. } => *next,
            Slot::Free(_) => None,
        }
    }

    fn set_next(&mut self, idx: usize, link: Option<usize>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[idx] {
            *next = link;
        }
    }

    /// Takes a free slot (or grows the arena) and stores `value` in it.
    fn alloc(&mut self, value: T) -> usize {
        let slot = Slot::Occupied { value, next: None };
        match self.free_head {
            Some(idx) => {
                if let Slot::Free(next_free) = self.slots[idx] {
                    self.free_head = next_free;
                }
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Moves slot `idx` onto the free list and returns its value.
    ///
    /// Callers unlink the node before releasing it.
    fn release(&mut self, idx: usize) -> Option<T> {
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first node holding `value`.
    ///
    /// Returns `false` when no node matches.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(idx) = current {
            if self.value(idx) == Some(value) {
                let next = self.next(idx);
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(idx) {
                    self.tail = prev;
                }
                self.len -= 1;
                self.release(idx);
                return true;
            }
            prev = current;
            current = self.next(idx);
        }
        false
    }

    /// Returns `true` if some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Renders `-->a-->b-->c`; an empty list renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "-->{value}")?;
        }
        Ok(())
    }
}
