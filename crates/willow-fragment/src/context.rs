//! The context table of ancestor wrappers.
//!
//! HTML assigns some elements meaning only inside a specific ancestor: a
//! bare `<tr>` handed to a fragment parser does not produce a row. Each
//! table entry pairs the synthetic ancestor markup to wrap around a fragment
//! with the number of wrapper levels to descend past (via last-child) after
//! parsing, to get back to the fragment's own nodes.

use std::sync::LazyLock;

use regex::Regex;

/// The closed set of tag names that need an ancestor context.
///
/// Kept in sync with [`WrapContext::for_tag`]; any tag not listed here parses
/// as-is with no wrapping.
pub const CONTEXT_TAGS: &[&str] = &[
    "td", "th", "tr", "option", "optgroup", "legend", "thead", "tbody", "tfoot", "colgroup",
    "caption", "col",
];

/// First tag name in the markup: `<` followed by word characters.
static FIRST_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w+)").expect("FIRST_TAG: hardcoded regex is valid"));

/// Extract the first tag name token from a fragment, if any.
///
/// Returns the name exactly as written; callers match it case-insensitively.
#[must_use]
pub fn first_tag_name(html: &str) -> Option<&str> {
    FIRST_TAG
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A synthetic ancestor context for one fragment root tag.
///
/// Invariant: `depth` equals exactly the number of nesting levels `prefix`
/// introduces, so descending `depth` last-children from the parse container
/// lands on the element whose children are the fragment's own nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapContext {
    /// Number of wrapper levels to descend past after parsing.
    pub depth: usize,
    /// Markup placed before the fragment.
    pub prefix: &'static str,
    /// Markup placed after the fragment.
    pub suffix: &'static str,
}

impl WrapContext {
    /// The default context: no wrapping, no descent. Correct for ordinary
    /// block and inline elements that parse fine at the top level.
    pub const NONE: WrapContext = WrapContext {
        depth: 0,
        prefix: "",
        suffix: "",
    };

    /// Look up the context for a fragment's first tag name
    /// (ASCII case-insensitive). Tags outside the closed set get
    /// [`WrapContext::NONE`].
    #[must_use]
    pub fn for_tag(tag: &str) -> WrapContext {
        match tag.to_ascii_lowercase().as_str() {
            "td" | "th" => WrapContext {
                depth: 3,
                prefix: "<table><tbody><tr>",
                suffix: "</tr></tbody></table>",
            },
            "tr" => WrapContext {
                depth: 2,
                prefix: "<table><thead>",
                suffix: "</thead></table>",
            },
            "option" | "optgroup" => WrapContext {
                depth: 1,
                prefix: "<select multiple>",
                suffix: "</select>",
            },
            "legend" => WrapContext {
                depth: 1,
                prefix: "<fieldset>",
                suffix: "</fieldset>",
            },
            "thead" | "tbody" | "tfoot" | "colgroup" | "caption" => WrapContext {
                depth: 1,
                prefix: "<table>",
                suffix: "</table>",
            },
            // The empty tbody keeps the colgroup as the table's last child
            // while matching where a parser would place row content.
            "col" => WrapContext {
                depth: 2,
                prefix: "<table><tbody></tbody><colgroup>",
                suffix: "</colgroup></table>",
            },
            _ => WrapContext::NONE,
        }
    }
}
