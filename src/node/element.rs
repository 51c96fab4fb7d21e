//! Element type - HTML elements with attributes and children
//!
//! The core building block of the markup tree.

use compact_str::CompactString;

use crate::attr::{Attr, Attrs, AttrsExt};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Element attributes, in output order
    pub attrs: Attrs,
    /// Child nodes (elements and text only, never attributes or groups)
    pub children: Children,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Children::new(),
        }
    }

    /// Create an element from a mixed node list.
    ///
    /// Groups are flattened, `Attr` nodes become attributes and everything
    /// else becomes a child, preserving order within each channel.
    pub fn from_nodes(tag: impl Into<CompactString>, nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut elem = Self::new(tag);
        elem.extend(nodes);
        elem
    }

    /// Absorb a node into this element according to its kind.
    pub fn push(&mut self, node: Node) {
        match node {
            Node::Attr(attr) => self.attrs.merge_attr(attr),
            Node::Group(nodes) => self.extend(nodes),
            Node::Text(text) if text.is_empty() => {}
            other => self.children.push(other),
        }
    }

    /// Absorb every node of a list.
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for node in nodes {
            self.push(node);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Add or merge an attribute
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        self.attrs.merge_attr(Attr::new(name, value));
        self
    }

    /// Add a boolean attribute
    pub fn flag(mut self, name: impl Into<CompactString>) -> Self {
        self.attrs.merge_attr(Attr::flag(name));
        self
    }

    /// Add a boolean attribute only when `on` is true
    pub fn flag_if(self, on: bool, name: impl Into<CompactString>) -> Self {
        if on { self.flag(name) } else { self }
    }

    /// Add an attribute only when the value is non-empty
    pub fn attr_nonempty(self, name: impl Into<CompactString>, value: &str) -> Self {
        if value.is_empty() { self } else { self.attr(name, value) }
    }

    /// Append prepared attributes in order
    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        for attr in attrs {
            self.attrs.merge_attr(attr);
        }
        self
    }

    /// Set the `id` attribute
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set (or extend) the `class` attribute
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Add a node (attribute, group, element or text)
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node.into());
        self
    }

    /// Add several nodes
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.extend(nodes);
        self
    }

    /// Add an escaped text child
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push(Node::Text(Text::new(content)));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Get the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Get the `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    /// Check if the class list contains a token
    pub fn has_class(&self, token: &str) -> bool {
        self.class()
            .is_some_and(|c| c.split_ascii_whitespace().any(|t| t == token))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Other helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
                Node::Attr(_) | Node::Group(_) => {}
            }
        }
    }

    /// Find the first element matching predicate (depth-first, self included)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_in(&predicate)
    }

    fn find_in<F>(&self, predicate: &F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children_elements().find_map(|e| e.find_in(predicate))
    }

    /// Find all elements matching predicate (depth-first, self included)
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut results = Vec::new();
        self.collect_matching(&predicate, &mut results);
        results
    }

    fn collect_matching<'a, F>(&'a self, predicate: &F, results: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(self) {
            results.push(self);
        }
        for child in self.children_elements() {
            child.collect_matching(predicate, results);
        }
    }
}
