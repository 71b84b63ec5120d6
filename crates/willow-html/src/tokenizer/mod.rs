//! Fragment tokenizer module.
//!
//! Implements the subset of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard that trusted fragment markup needs.

/// Tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use core::FragmentTokenizer;
pub use token::{Attribute, Token};
