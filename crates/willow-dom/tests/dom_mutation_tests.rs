//! Tests for DOM tree mutation methods: append_child, insert_before, remove_child.

use willow_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

// ========== append_child ==========

#[test]
fn test_append_child_sets_relationships() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "span");
    let b = alloc_element(&mut tree, "em");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(b));
}

#[test]
fn test_alloc_starts_detached() {
    let mut tree = DomTree::new();
    let orphan = alloc_element(&mut tree, "td");

    assert_eq!(tree.parent(orphan), None);
    assert_eq!(tree.children(orphan), &[]);
    assert!(!tree.is_descendant_of(orphan, NodeId::ROOT));
}

// ========== remove_child ==========

#[test]
fn test_remove_child_single_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent).len(), 1);

    tree.remove_child(parent, child);

    assert_eq!(tree.children(parent).len(), 0);
    assert_eq!(tree.parent(child), None);
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    // a and c are stitched together
    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
    assert_eq!(tree.parent(b), None);
}

#[test]
fn test_remove_child_not_a_child_is_noop() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    let other = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);
    tree.append_child(NodeId::ROOT, other);

    let child = alloc_element(&mut tree, "li");
    tree.append_child(other, child);

    tree.remove_child(parent, child);

    // child is still attached to `other`
    assert_eq!(tree.parent(child), Some(other));
    assert_eq!(tree.children(other), &[child]);
}

#[test]
fn test_remove_children_empties_parent() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "select");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "option");
    let b = alloc_element(&mut tree, "option");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    tree.remove_children(parent);

    assert_eq!(tree.children(parent), &[]);
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), None);
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "tr");
    tree.append_child(NodeId::ROOT, parent);

    let b = alloc_element(&mut tree, "td");
    tree.append_child(parent, b);

    let a = alloc_element(&mut tree, "td");
    tree.insert_before(parent, a, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
}

#[test]
fn test_insert_before_middle() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, c);

    let b = alloc_element(&mut tree, "b");
    tree.insert_before(parent, b, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(b), Some(a));
}

#[test]
fn test_insert_before_missing_reference_appends() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    tree.append_child(parent, a);

    let stranger = alloc_element(&mut tree, "s");
    let b = alloc_element(&mut tree, "b");
    tree.insert_before(parent, b, stranger);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.next_sibling(a), Some(b));
}

// ========== queries ==========

#[test]
fn test_text_content_concatenates_in_order() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, p);

    let hello = tree.alloc(NodeType::Text("Hello ".to_string()));
    let em = alloc_element(&mut tree, "em");
    let world = tree.alloc(NodeType::Text("world".to_string()));
    tree.append_child(p, hello);
    tree.append_child(p, em);
    tree.append_child(em, world);

    assert_eq!(tree.text_content(p), "Hello world");
}

#[test]
fn test_element_attr_lookup() {
    let mut tree = DomTree::new();
    let mut data = ElementData::new("input");
    let _ = data.attrs.insert("type".to_string(), "text".to_string());
    let input = tree.alloc(NodeType::Element(data));

    let element = tree.as_element(input).expect("element data");
    assert_eq!(element.attr("type"), Some("text"));
    assert_eq!(element.attr("value"), None);
}
