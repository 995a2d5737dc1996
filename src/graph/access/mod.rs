//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so the search routines can share bookkeeping
//! (visited sets) without exposing it as part of the public API surface.

pub(crate) mod visited;
