//! HTML fragment to DOM node conversion.
//!
//! # Scope
//!
//! This crate implements the two halves of fragment conversion:
//! - **Self-Closing-Tag Normalizer** ([`normalize`]) - rewrites shorthand
//!   self-closing tags of non-void elements (`<table/>`) into explicit
//!   open/close pairs (`<table></table>`), leaving void elements untouched
//! - **Context-Aware Fragment Builder** ([`build_nodes`]) - wraps fragments
//!   whose root element needs a specific ancestor to parse correctly (a
//!   `<tr>` must sit inside `<table><thead>…`), parses through a
//!   [`MarkupHost`], unwinds the synthetic wrapper, and returns the resulting
//!   sibling nodes
//!
//! Composition is the caller's job: feed raw markup through [`normalize`]
//! first, then hand the result to [`build_nodes`]. The returned nodes are
//! detached; [`insert_nodes`] moves them into a live parent.
//!
//! Input is trusted. No sanitization is performed, and the normalizer is a
//! single textual pass, not a parser (see [`normalize`] for the known
//! limitation around `/>` inside quoted attribute values).

/// Fragment building over a markup host.
pub mod build;
/// The context table of ancestor wrappers.
pub mod context;
/// Error types for fragment conversion.
pub mod error;
/// The self-closing-tag normalizer.
pub mod normalize;

pub use build::{MarkupHost, build_nodes, insert_nodes};
pub use context::{CONTEXT_TAGS, WrapContext, first_tag_name};
pub use error::{FragmentError, HostError};
pub use normalize::normalize;
