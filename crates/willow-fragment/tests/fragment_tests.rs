//! Integration tests for fragment conversion: normalizer, context table,
//! node building, and insertion.

use willow_dom::NodeId;
use willow_fragment::{
    CONTEXT_TAGS, FragmentError, HostError, MarkupHost, WrapContext, build_nodes, insert_nodes,
    normalize,
};
use willow_html::Document;

/// Helper to get the tag name of a built node.
fn tag_name(doc: &Document, id: NodeId) -> String {
    doc.tree()
        .as_element(id)
        .expect("element node")
        .tag_name
        .clone()
}

// ========== normalizer ==========

#[test]
fn test_void_self_closing_left_unchanged() {
    assert_eq!(normalize("<br/>"), "<br/>");
    assert_eq!(normalize("<img src=\"a.png\"/>"), "<img src=\"a.png\"/>");
    assert_eq!(normalize("<INPUT/>"), "<INPUT/>");
}

#[test]
fn test_non_void_self_closing_expanded() {
    assert_eq!(normalize("<table/>"), "<table></table>");
    assert_eq!(normalize("<div/>"), "<div></div>");
}

#[test]
fn test_expansion_preserves_tag_case() {
    assert_eq!(normalize("<Table/>"), "<Table></Table>");
}

#[test]
fn test_normalize_is_idempotent() {
    let input = "<option>A</option><table/><br/>";
    let once = normalize(input).into_owned();
    let twice = normalize(&once).into_owned();
    assert_eq!(once, twice);
}

// ========== context-aware building ==========

#[test]
fn test_table_row_context() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<tr><td>x</td></tr>").expect("build");

    assert_eq!(nodes.len(), 1);
    assert_eq!(tag_name(&doc, nodes[0]), "tr");
}

#[test]
fn test_option_list_context_preserves_order() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<option>A</option><option>B</option>").expect("build");

    assert_eq!(nodes.len(), 2);
    assert_eq!(tag_name(&doc, nodes[0]), "option");
    assert_eq!(tag_name(&doc, nodes[1]), "option");
    assert_eq!(doc.tree().text_content(nodes[0]), "A");
    assert_eq!(doc.tree().text_content(nodes[1]), "B");
}

#[test]
fn test_table_cell_context() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<td>cell</td><td>cell2</td>").expect("build");

    assert_eq!(nodes.len(), 2);
    assert_eq!(tag_name(&doc, nodes[0]), "td");
    assert_eq!(tag_name(&doc, nodes[1]), "td");
}

#[test]
fn test_uncontexted_tag_passes_through() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<div>hi</div>").expect("build");

    assert_eq!(nodes.len(), 1);
    assert_eq!(tag_name(&doc, nodes[0]), "div");
    assert_eq!(doc.tree().text_content(nodes[0]), "hi");
}

#[test]
fn test_plain_text_fragment() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "just text").expect("build");

    assert_eq!(nodes.len(), 1);
    assert_eq!(doc.tree().as_text(nodes[0]), Some("just text"));
}

#[test]
fn test_normalize_then_build_composition() {
    // The trailing <table/>, once expanded, is dropped by the select
    // wrapper's content model and must not corrupt the option count.
    let mut doc = Document::new();
    let markup = normalize("<option>Yoshi</option><option>Kuma</option><table/>");
    let nodes = build_nodes(&mut doc, &markup).expect("build");

    assert_eq!(nodes.len(), 2);
    assert_eq!(doc.tree().text_content(nodes[0]), "Yoshi");
    assert_eq!(doc.tree().text_content(nodes[1]), "Kuma");
}

#[test]
fn test_wrapper_depth_matches_wrapper_nesting() {
    // Invariant: every context entry's depth equals the nesting its own
    // wrapper markup introduces, so empty fragments unwrap cleanly.
    for tag in CONTEXT_TAGS {
        let context = WrapContext::for_tag(tag);
        let mut doc = Document::new();
        let container = doc.create_element("div");
        let wrapper = format!("{}{}", context.prefix, context.suffix);
        let _ = doc.set_inner_html(container, &wrapper);

        let mut current = container;
        for level in 0..context.depth {
            current = doc
                .last_child(current)
                .unwrap_or_else(|| panic!("{tag}: wrapper too shallow at level {level}"));
        }
        assert_eq!(
            doc.child_nodes(current).len(),
            0,
            "{tag}: empty fragment should unwrap to an empty child list"
        );
    }
}

// ========== insertion glue ==========

#[test]
fn test_insert_nodes_moves_built_nodes() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<option>A</option><option>B</option>").expect("build");

    let select = doc.create_element("select");
    insert_nodes(&mut doc, select, &nodes);

    let children = doc.child_nodes(select);
    assert_eq!(children, nodes);
    for &node in &nodes {
        assert_eq!(doc.tree().parent(node), Some(select));
    }
}

#[test]
fn test_insert_nodes_preserves_document_order() {
    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, "<tr><td>1</td></tr><tr><td>2</td></tr>").expect("build");
    assert_eq!(nodes.len(), 2);

    let tbody = doc.create_element("tbody");
    insert_nodes(&mut doc, tbody, &nodes);

    let rows = doc.child_nodes(tbody);
    assert_eq!(doc.tree().text_content(rows[0]), "1");
    assert_eq!(doc.tree().text_content(rows[1]), "2");
}

// ========== error paths, via alternate hosts ==========

/// A host whose parser silently produces nothing, leaving every container
/// childless. Descending past it must fail as malformed input, not panic.
struct ShallowHost {
    doc: Document,
}

impl MarkupHost for ShallowHost {
    fn create_container(&mut self) -> NodeId {
        self.doc.create_element("div")
    }

    fn set_markup(&mut self, _element: NodeId, _markup: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn last_child(&self, element: NodeId) -> Option<NodeId> {
        self.doc.last_child(element)
    }

    fn child_nodes(&self, element: NodeId) -> Vec<NodeId> {
        self.doc.child_nodes(element)
    }
}

#[test]
fn test_too_shallow_parse_is_malformed_fragment() {
    let mut host = ShallowHost {
        doc: Document::new(),
    };
    let result = build_nodes(&mut host, "<tr><td>x</td></tr>");

    assert_eq!(
        result,
        Err(FragmentError::MalformedFragment {
            expected: 2,
            reached: 0,
        })
    );
}

/// A host whose parsing primitive is unavailable.
struct BrokenHost {
    doc: Document,
}

impl MarkupHost for BrokenHost {
    fn create_container(&mut self) -> NodeId {
        self.doc.create_element("div")
    }

    fn set_markup(&mut self, _element: NodeId, _markup: &str) -> Result<(), HostError> {
        Err(HostError::Handle("parser offline".to_string()))
    }

    fn last_child(&self, element: NodeId) -> Option<NodeId> {
        self.doc.last_child(element)
    }

    fn child_nodes(&self, element: NodeId) -> Vec<NodeId> {
        self.doc.child_nodes(element)
    }
}

#[test]
fn test_host_failure_propagates_unchanged() {
    let mut host = BrokenHost {
        doc: Document::new(),
    };
    let result = build_nodes(&mut host, "<div>x</div>");

    assert_eq!(
        result,
        Err(FragmentError::Host(HostError::Handle(
            "parser offline".to_string()
        )))
    );
}
