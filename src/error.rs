//! Error types for fallible graph mutations.
//!
//! Lookups and container underflow are reported as `Option`/empty results, so
//! the only fallible surface is edge insertion against a foreign vertex.

use core::fmt;

/// Result alias used by graph mutation methods.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// The error type for graph mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex was not created by this graph instance.
    ///
    /// Either its index is out of range, or the stored vertex at that index
    /// carries a different payload.
    UnknownVertex {
        /// Index carried by the rejected vertex.
        index: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { index } => {
                write!(f, "unknown vertex {index}: not created by this graph")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vertex_display() {
        let err = GraphError::UnknownVertex { index: 7 };
        assert_eq!(err.to_string(), "unknown vertex 7: not created by this graph");
    }

    #[test]
    fn test_error_is_boxable() {
        let boxed: Box<dyn std::error::Error> = Box::new(GraphError::UnknownVertex { index: 0 });
        assert!(boxed.source().is_none());
    }
}
