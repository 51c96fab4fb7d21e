//! Node types for component markup.
//!
//! This module provides `Element`, `Node` and `Text`. A `Node` is the unit
//! every component consumes and produces:
//!
//! - `Element`: a tag with attributes and children
//! - `Text`: escaped or raw character data
//! - `Attr`: an attribute that attaches to the enclosing element
//! - `Group`: a sibling list that flattens into its parent
//!
//! `Attr` and `Group` only exist while a tree is being assembled;
//! `Element::from_nodes` lifts them into their final place.

mod element;
mod text;

pub use element::Element;
pub use text::{Text, TextKind};

use smallvec::SmallVec;

use crate::attr::Attr;

/// Node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Attr(Attr),
    Group(Vec<Node>),
}

impl Node {
    impl_enum_accessors!(element: Element, text: Text, attr: Attr, group: Vec<Node>);

    /// Escaped text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(Text::new(content))
    }

    /// Raw text node, written without escaping
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Text(Text::raw(content))
    }

    /// Sibling group, flattened into the parent element
    pub fn group(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Group(nodes.into_iter().collect())
    }

    /// Node that renders to nothing
    #[inline]
    pub fn none() -> Self {
        Self::Group(Vec::new())
    }

    /// Include `node` only when `cond` holds
    pub fn when(cond: bool, node: impl Into<Node>) -> Self {
        if cond { node.into() } else { Self::none() }
    }

    /// Check if this node produces no output
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Element(_) | Self::Attr(_) => false,
            Self::Text(t) => t.is_empty(),
            Self::Group(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(e) => e.text_content(),
            Self::Text(t) => t.content.clone(),
            Self::Attr(_) => String::new(),
            Self::Group(nodes) => nodes.iter().map(Node::text_content).collect(),
        }
    }

    /// First element matching predicate, searching groups transparently
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        match self {
            Self::Element(e) => e.find(predicate),
            Self::Group(nodes) => nodes.iter().find_map(|n| n.find(predicate)),
            Self::Text(_) | Self::Attr(_) => None,
        }
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

// =============================================================================
// Conversions
// =============================================================================

impl From<Element> for Node {
    #[inline]
    fn from(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    #[inline]
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Attr> for Node {
    #[inline]
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Node {
    #[inline]
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<Vec<Node>> for Node {
    #[inline]
    fn from(nodes: Vec<Node>) -> Self {
        Self::Group(nodes)
    }
}

impl From<Option<Node>> for Node {
    #[inline]
    fn from(node: Option<Node>) -> Self {
        node.unwrap_or_else(Node::none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node = Node::from(Element::new("div"));
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("div"));

        let attr = Node::from(Attr::flag("disabled"));
        assert!(attr.is_attr());
        assert!(attr.as_group().is_none());
    }

    #[test]
    fn test_node_when_and_none() {
        assert!(Node::when(false, "hidden").is_empty());
        assert_eq!(Node::when(true, "shown"), Node::text("shown"));
        assert!(Node::none().is_empty());
        assert!(Node::group([Node::text(""), Node::none()]).is_empty());
        assert_eq!(Node::from(None::<Node>), Node::none());
    }

    #[test]
    fn test_text_content_through_groups() {
        let node = Node::group([
            Node::text("a"),
            Element::new("b").text("c").into(),
            Node::Attr(Attr::new("id", "x")),
        ]);
        assert_eq!(node.text_content(), "ac");
        assert!(node.find(|e| e.tag == "b").is_some());
    }
}
