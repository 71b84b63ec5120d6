//! The self-closing-tag normalizer.
//!
//! Markup-to-tree hosts following the HTML parsing rules do not treat
//! arbitrary self-closing syntax the way authors expect: `<table/>` opens a
//! table and silently swallows everything after it. Rewriting shorthand
//! self-closing tags into explicit open/close pairs before parsing sidesteps
//! that, while leaving genuinely void elements (`<br/>`, `<img/>`) alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use willow_html::is_void_element;

/// One shorthand self-closing tag: open angle bracket, tag name, anything
/// that isn't a `>`, then `/>`. Group 1 is the open-tag portion without the
/// trailing `/>`, group 2 the tag name.
static SELF_CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<(\w+)[^>]*?)/>").expect("SELF_CLOSING_TAG: hardcoded regex is valid")
});

/// Rewrite every shorthand self-closing non-void tag into an explicit
/// open/close pair, preserving attributes and the original-case tag name in
/// the generated closing tag. Void elements pass through byte-for-byte.
///
/// ```
/// use willow_fragment::normalize;
///
/// assert_eq!(normalize("<table/>"), "<table></table>");
/// assert_eq!(normalize("<br/>"), "<br/>");
/// ```
///
/// Purely textual and infallible: input without shorthand self-closing tags
/// comes back unchanged (borrowed, not copied), and a second application is
/// always a no-op.
///
/// Known limitation: matching is a single pass over the text, so a quoted
/// attribute value containing `/>` (e.g. `<div data-x="a/>b">`) is
/// mis-rewritten. Trusted fragment markup does not contain such values.
#[must_use]
pub fn normalize(html: &str) -> Cow<'_, str> {
    SELF_CLOSING_TAG.replace_all(html, |caps: &Captures<'_>| {
        let all = &caps[0];
        let front = &caps[1];
        let tag = &caps[2];
        if is_void_element(tag) {
            all.to_string()
        } else {
            format!("{front}></{tag}>")
        }
    })
}
