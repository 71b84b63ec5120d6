use willow_common::warning::warn_once;
use willow_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tags::is_void_element;
use crate::tokenizer::Token;

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// A recoverable anomaly encountered while building the fragment tree.
/// Trusted input means these are reported, not fatal.
#[derive(Debug, Clone)]
pub struct ParseIssue {
    /// Description of the anomaly.
    pub message: String,
    /// Index into the token stream where this was encountered.
    pub token_index: usize,
}

/// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
///
/// Builds a node tree from a token stream, appending everything under a
/// caller-supplied container element.
///
/// This is deliberately not the full document tree-construction machinery:
/// there are no insertion modes, no implied `<html>`/`<head>`/`<body>`
/// scaffolding, and no tag-soup recovery. The container plays the role of the
/// fragment parsing algorithm's *context element*
/// ([§ 13.4](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments)):
/// tokens are inserted relative to it and the stack of open elements starts
/// with it.
pub struct FragmentParser {
    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    ///
    /// Stores `NodeId`s into the arena. The container sits at the bottom and
    /// is never popped.
    stack_of_open_elements: Vec<NodeId>,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    /// Pending character data, coalesced into a single text node on flush.
    pending_text: String,

    /// Anomalies encountered during building.
    issues: Vec<ParseIssue>,
}

impl FragmentParser {
    /// Create a parser for the given token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        FragmentParser {
            stack_of_open_elements: Vec::new(),
            tokens,
            token_index: 0,
            pending_text: String::new(),
            issues: Vec::new(),
        }
    }

    /// Build the fragment under `container`, consuming the parser.
    ///
    /// All parsed nodes become descendants of `container` in the given tree.
    /// Returns the anomalies encountered; an empty vector means the markup was
    /// well-formed.
    pub fn parse_into(mut self, tree: &mut DomTree, container: NodeId) -> Vec<ParseIssue> {
        self.stack_of_open_elements.push(container);

        while self.token_index < self.tokens.len() {
            let token = self.tokens[self.token_index].clone();
            self.process_token(tree, container, &token);
            self.token_index += 1;
            if token.is_eof() {
                break;
            }
        }

        self.issues
    }

    fn process_token(&mut self, tree: &mut DomTree, container: NodeId, token: &Token) {
        match token {
            // "A character token that is U+0000 NULL"
            // "Parse error. Ignore the token."
            Token::Character { data: '\0' } => {
                self.record_issue("unexpected null character");
            }

            // "Any other character token - Insert the token's character."
            //
            // [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
            // "If there is a Text node immediately before the adjusted insertion
            // location, then append data to that Text node's data." Coalescing
            // into `pending_text` achieves the same single-text-node result.
            Token::Character { data } => {
                self.pending_text.push(*data);
            }

            // [§ 13.2.6.1 Insert a comment](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-comment)
            Token::Comment { data } => {
                self.flush_text(tree);
                let comment = tree.alloc(NodeType::Comment(data.clone()));
                tree.append_child(self.current_node(), comment);
            }

            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                self.flush_text(tree);

                // [§ 13.2.6.4.16 The "in select" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselect)
                //
                // "Anything else - Parse error. Ignore the token."
                //
                // A select element only admits option, optgroup, and hr content;
                // anything else is dropped so it cannot corrupt the option list.
                if self.has_open_select(tree) && !matches!(name.as_str(), "option" | "optgroup" | "hr") {
                    self.record_issue(&format!("ignored <{name}> inside select"));
                    return;
                }

                // [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
                let mut attrs = AttributesMap::new();
                for attr in attributes {
                    let _ = attrs.insert(attr.name.clone(), attr.value.clone());
                }
                let element = tree.alloc(NodeType::Element(ElementData {
                    tag_name: name.clone(),
                    attrs,
                }));
                tree.append_child(self.current_node(), element);

                // Void elements never receive children; a self-closing flag on
                // any other element is acknowledged by not pushing it either.
                // "Immediately pop the current node off the stack of open
                // elements" per the void-element prose in § 13.2.6.4.7.
                if !is_void_element(name) && !*self_closing {
                    self.stack_of_open_elements.push(element);
                }
            }

            Token::EndTag { name, .. } => {
                self.flush_text(tree);
                self.close_element(tree, container, name);
            }

            Token::EndOfFile => {
                self.flush_text(tree);
                // Anything still open above the container was never closed.
                // Trusted input: auto-close and report.
                while self.stack_of_open_elements.len() > 1 {
                    let open = self.stack_of_open_elements.pop();
                    if let Some(id) = open
                        && let Some(data) = tree.as_element(id)
                    {
                        self.record_issue(&format!(
                            "element <{}> left open at end of input",
                            data.tag_name
                        ));
                    }
                }
            }
        }
    }

    /// [§ 13.2.6.4.7 "in body" - Any other end tag](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// "If node is an HTML element with the same tag name as the token, then...
    /// pop all the nodes from the current node up to node, including node, then
    /// stop these steps." A stray end tag with no matching open element is a
    /// parse error and is ignored.
    fn close_element(&mut self, tree: &DomTree, container: NodeId, name: &str) {
        let matched = self
            .stack_of_open_elements
            .iter()
            .skip(1) // the container is not closable from inside the fragment
            .rev()
            .position(|&id| {
                tree.as_element(id)
                    .is_some_and(|data| data.tag_name.eq_ignore_ascii_case(name))
            });

        let Some(depth_from_top) = matched else {
            self.record_issue(&format!(
                "stray end tag </{name}> with no matching open element"
            ));
            return;
        };

        // Pop everything above the matched element, then the element itself.
        for _ in 0..depth_from_top {
            if let Some(popped) = self.stack_of_open_elements.pop()
                && popped != container
                && let Some(data) = tree.as_element(popped)
            {
                self.record_issue(&format!(
                    "end tag </{name}> implicitly closed <{}>",
                    data.tag_name
                ));
            }
        }
        let _ = self.stack_of_open_elements.pop();
    }

    /// True if a `select` element is somewhere on the stack of open elements.
    ///
    /// Approximates [§ 13.2.4.2 "have a particular element in select scope"](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-select-scope);
    /// good enough without optgroup nesting subtleties, which trusted
    /// fragments don't exercise.
    fn has_open_select(&self, tree: &DomTree) -> bool {
        self.stack_of_open_elements.iter().skip(1).any(|&id| {
            tree.as_element(id)
                .is_some_and(|data| data.tag_name.eq_ignore_ascii_case("select"))
        })
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#current-node)
    /// "The current node is the bottommost node in this stack of open elements."
    fn current_node(&self) -> NodeId {
        *self
            .stack_of_open_elements
            .last()
            .expect("stack always holds the container")
    }

    /// Flush pending character data as a single text node under the current node.
    fn flush_text(&mut self, tree: &mut DomTree) {
        if self.pending_text.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.pending_text);
        let text = tree.alloc(NodeType::Text(data));
        tree.append_child(self.current_node(), text);
    }

    fn record_issue(&mut self, message: &str) {
        warn_once("HTML", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }
}

/// Print a subtree for debugging, one node per line, indented by depth.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Document => {
                println!("{prefix}Document");
            }
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    println!("{prefix}<{}>", data.tag_name);
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n");
                println!("{prefix}\"{display}\"");
            }
            NodeType::Comment(data) => {
                println!("{prefix}<!-- {data} -->");
            }
        }
        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}
