//! Fragment tree builder module.

/// Fragment tree builder implementation.
pub mod core;

pub use core::{FragmentParser, ParseIssue, print_tree};
