//! Static classification tables for HTML element names.

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified for
/// void elements."
///
/// Self-closing syntax is legal for these names and must be left alone by the
/// self-closing-tag normalizer; the tree builder never gives them children.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Returns true if `name` is a void element, matched ASCII case-insensitively.
///
/// Tag names in markup may appear in any case (`<BR/>`), so membership is
/// case-insensitive even though the table stores lowercase names.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|&void| void.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_membership() {
        assert!(is_void_element("br"));
        assert!(is_void_element("img"));
        assert!(!is_void_element("table"));
        assert!(!is_void_element("option"));
    }

    #[test]
    fn test_void_membership_is_case_insensitive() {
        assert!(is_void_element("BR"));
        assert!(is_void_element("Input"));
    }
}
