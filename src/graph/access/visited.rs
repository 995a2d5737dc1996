//! Visited sets for graph traversals.
//!
//! Vertices in this crate carry arbitrary hashable payloads, so membership is
//! tracked by hashing rather than by a dense bitset over indices.

use std::collections::HashSet;
use std::hash::Hash;

/// A set of vertices already reached by a traversal.
#[derive(Debug)]
pub(crate) struct VisitedSet<V> {
    seen: HashSet<V>,
}

impl<V: Eq + Hash + Clone> VisitedSet<V> {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    ///
    /// The vertex is cloned only on first visit.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &V) -> bool {
        if self.seen.contains(vertex) {
            return false;
        }
        self.seen.insert(vertex.clone());
        true
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }
}
