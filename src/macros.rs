//! Internal logging macros.
//!
//! Structured events go through `tracing` when the `tracing` feature is
//! enabled. Without it the macros expand to nothing and the arguments are
//! never evaluated.

/// Emits a `tracing` event at the given level when the `tracing` feature is on.
///
/// ```ignore
/// trace_event!(trace, index = vertex.index(), "dfs backtrack");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use trace_event;
