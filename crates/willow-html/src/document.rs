//! The document handle fragment conversion builds on.
//!
//! [`Document`] owns a [`DomTree`] arena and exposes the small capability set
//! a markup host needs: create a detached element, assign raw markup to an
//! element (parsing it into a child tree), and read an element's children.

use willow_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::parser::{FragmentParser, ParseIssue};
use crate::tokenizer::FragmentTokenizer;

/// An owning handle over a DOM arena.
///
/// Nodes created through the handle start out detached; the caller decides
/// where (and whether) to attach them. Each `Document` is independent, so
/// callers wanting an inert off-screen context simply construct a fresh one.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tree: DomTree,
}

impl Document {
    /// Create an empty document (a lone Document node in the arena).
    #[must_use]
    pub fn new() -> Self {
        Document {
            tree: DomTree::new(),
        }
    }

    /// [§ 4.5 createElement](https://dom.spec.whatwg.org/#dom-document-createelement)
    ///
    /// Create a detached element with the given tag name and no attributes.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.tree
            .alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Create a detached text node with the given data.
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.tree.alloc(NodeType::Text(data.to_string()))
    }

    /// [HTML § innerHTML](https://html.spec.whatwg.org/multipage/dynamic-markup-insertion.html#dom-innerhtml)
    ///
    /// Replace `element`'s children with the tree parsed from `markup`.
    /// Delegates tokenization and tree construction to this crate's fragment
    /// machinery; the markup is trusted, so anomalies come back as
    /// [`ParseIssue`]s rather than errors.
    pub fn set_inner_html(&mut self, element: NodeId, markup: &str) -> Vec<ParseIssue> {
        self.tree.remove_children(element);

        let mut tokenizer = FragmentTokenizer::new(markup.to_string());
        tokenizer.run();
        let parser = FragmentParser::new(tokenizer.into_tokens());
        parser.parse_into(&mut self.tree, element)
    }

    /// An element's child node list, in document order.
    #[must_use]
    pub fn child_nodes(&self, element: NodeId) -> Vec<NodeId> {
        self.tree.children(element).to_vec()
    }

    /// An element's last child, if any.
    #[must_use]
    pub fn last_child(&self, element: NodeId) -> Option<NodeId> {
        self.tree.last_child(element)
    }

    /// Borrow the underlying arena.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutably borrow the underlying arena (for insertion by the caller).
    pub const fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
