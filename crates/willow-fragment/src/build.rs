//! Fragment building over a markup host.
//!
//! [`build_nodes`] needs only four capabilities from its document
//! collaborator, captured by [`MarkupHost`]: create a detached container
//! element, assign raw markup to it (parsing into a child tree), read a last
//! child, and read an ordered child list. [`willow_html::Document`] provides
//! all four; tests substitute inert hosts through the same trait.

use willow_dom::NodeId;
use willow_html::Document;

use crate::context::{WrapContext, first_tag_name};
use crate::error::{FragmentError, HostError};

/// The document capability fragment building runs against.
///
/// "Parse trusted HTML text into a detached tree rooted at a given element" -
/// any host with an equivalent capability can serve.
pub trait MarkupHost {
    /// Create one detached container element for a single conversion call.
    fn create_container(&mut self) -> NodeId;

    /// Parse `markup` and install the resulting tree as `element`'s children,
    /// replacing any existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host's parsing primitive is unavailable
    /// or fails. Recoverable parse anomalies in trusted input are not errors.
    fn set_markup(&mut self, element: NodeId, markup: &str) -> Result<(), HostError>;

    /// An element's last child, if any.
    fn last_child(&self, element: NodeId) -> Option<NodeId>;

    /// An element's child node list, in document order.
    fn child_nodes(&self, element: NodeId) -> Vec<NodeId>;
}

impl MarkupHost for Document {
    fn create_container(&mut self) -> NodeId {
        self.create_element("div")
    }

    fn set_markup(&mut self, element: NodeId, markup: &str) -> Result<(), HostError> {
        // Trusted input: parse issues are warned and recovered inside the
        // parser, never surfaced as host failures.
        let _issues = self.set_inner_html(element, markup);
        Ok(())
    }

    fn last_child(&self, element: NodeId) -> Option<NodeId> {
        Document::last_child(self, element)
    }

    fn child_nodes(&self, element: NodeId) -> Vec<NodeId> {
        Document::child_nodes(self, element)
    }
}

/// Build the detached node sequence for an HTML fragment.
///
/// The fragment's first tag name selects a [`WrapContext`]; the fragment is
/// parsed with that context's ancestor markup around it, the synthetic
/// wrapper levels are stripped by descending last-children, and the final
/// element's children come back in document order, ready for insertion.
///
/// Callers wanting self-closing shorthand repaired run
/// [`crate::normalize`] over the markup first; this function does not.
///
/// # Errors
///
/// [`FragmentError::MalformedFragment`] if the parse produced fewer wrapper
/// levels than the context requires; [`FragmentError::Host`] if the host's
/// parsing primitive failed.
pub fn build_nodes(host: &mut impl MarkupHost, html: &str) -> Result<Vec<NodeId>, FragmentError> {
    let context = first_tag_name(html).map_or(WrapContext::NONE, WrapContext::for_tag);

    let container = host.create_container();
    let wrapped = format!("{}{html}{}", context.prefix, context.suffix);
    host.set_markup(container, &wrapped)?;

    let mut current = container;
    for level in 0..context.depth {
        current = host
            .last_child(current)
            .ok_or(FragmentError::MalformedFragment {
                expected: context.depth,
                reached: level,
            })?;
    }

    Ok(host.child_nodes(current))
}

/// Move built nodes under `parent`, preserving their order.
///
/// The sequence returned by [`build_nodes`] still hangs off the transient
/// parse container; this detaches each node from wherever it sits and
/// appends it to `parent`. The abandoned wrapper skeleton stays in the
/// arena until the document is dropped, which call-scoped conversion makes
/// harmless.
pub fn insert_nodes(doc: &mut Document, parent: NodeId, nodes: &[NodeId]) {
    let tree = doc.tree_mut();
    for &node in nodes {
        if let Some(old_parent) = tree.parent(node) {
            tree.remove_child(old_parent, node);
        }
        tree.append_child(parent, node);
    }
}
