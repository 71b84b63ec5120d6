//! Error types for fragment conversion.
//!
//! Conversion is deterministic, so nothing here is retried: a repeated call
//! with identical input fails identically.

use thiserror::Error;

/// A failure inside the markup host itself (the document handle or its
/// parsing primitive). Propagated unchanged; fragment conversion has no
/// fallback document context to recover with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host could not parse markup into the container.
    #[error("document handle failure: {0}")]
    Handle(String),
}

/// A failure of one conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// The parsed fragment produced fewer wrapper nesting levels than its
    /// context table entry requires. Definitive input-validation failure.
    #[error("fragment produced {reached} wrapper level(s) where {expected} were expected")]
    MalformedFragment {
        /// Unwrap depth demanded by the context table entry.
        expected: usize,
        /// Levels actually descended before last-child came up empty.
        reached: usize,
    },

    /// The markup host failed; see [`HostError`].
    #[error(transparent)]
    Host(#[from] HostError),
}
