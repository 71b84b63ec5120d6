//! HTML tokenizer and tree builder for trusted fragment markup.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data and tag states
//!   - Attribute parsing (double-quoted, single-quoted, unquoted)
//!   - Comment handling
//! - **Fragment Tree Builder** - a stack-based builder that appends parsed
//!   content under a caller-supplied container element
//! - **Document handle** - create detached elements and assign raw markup
//!   (`set_inner_html`), the capability fragment conversion builds on
//!
//! Input is trusted: fragments are assumed well-formed, so recoverable
//! anomalies (stray end tags, elements left open at end of input) are
//! reported as parse issues rather than failures.
//!
//! # Not Implemented
//!
//! - Character reference decoding
//! - DOCTYPE, CDATA, script data, and RCDATA/RAWTEXT states
//! - Tag-soup recovery (foster parenting, adoption agency, implied tags)

/// Document handle over the DOM arena.
pub mod document;
/// Fragment tree builder.
pub mod parser;
/// HTML element classification tables.
pub mod tags;
/// Fragment tokenizer.
pub mod tokenizer;

pub use document::Document;
pub use parser::{FragmentParser, ParseIssue, print_tree};
pub use tags::{VOID_ELEMENTS, is_void_element};
pub use tokenizer::{Attribute, FragmentTokenizer, Token};
