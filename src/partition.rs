//! Splitting mixed node lists into attributes and content.
//!
//! Constructors that take a single node list have to decide which nodes are
//! attributes of the outer element and which are content. [`split`] does this
//! by node kind. [`split_rendered`] reproduces the older behaviour of
//! trial-rendering each node and inspecting its text, for callers that still
//! pass pre-rendered attribute fragments as raw text.

use crate::attr::Attrs;
use crate::node::Node;
use crate::render::{RenderConfig, render_to_string};

/// Split nodes by kind: `Attr` nodes become attributes, groups are
/// flattened, everything else is content. Order is kept in both channels.
pub fn split(nodes: impl IntoIterator<Item = Node>) -> (Attrs, Vec<Node>) {
    let mut attrs = Attrs::new();
    let mut content = Vec::new();
    split_into(nodes, &mut attrs, &mut content);
    (attrs, content)
}

fn split_into(nodes: impl IntoIterator<Item = Node>, attrs: &mut Attrs, content: &mut Vec<Node>) {
    for node in nodes {
        match node {
            Node::Attr(attr) => attrs.push(attr),
            Node::Group(inner) => split_into(inner, attrs, content),
            other => content.push(other),
        }
    }
}

/// Text predicate used by [`is_attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Contains `=`, or is exactly `disabled`
    #[default]
    Generic,
    /// Contains `=`, `title` or `id`
    Badge,
    /// Contains `=` and no angle brackets
    Markup,
}

impl Heuristic {
    fn matches(self, output: &str) -> bool {
        match self {
            Self::Generic => output.contains('=') || output.trim() == "disabled",
            Self::Badge => {
                output.contains('=') || output.contains("title") || output.contains("id")
            }
            Self::Markup => {
                output.contains('=') && !output.contains('<') && !output.contains('>')
            }
        }
    }
}

/// Trial-render `node` and classify the output.
///
/// Any text that contains `=` is treated as an attribute, including prose
/// such as `1 + 1 = 2`.
pub fn is_attribute(node: &Node, heuristic: Heuristic) -> bool {
    if node.is_attr() {
        return true;
    }
    let output = render_to_string(node, &RenderConfig::default());
    let hit = heuristic.matches(&output);
    if hit && node.is_text() {
        tracing::debug!(?heuristic, text = %output, "text node classified as attribute");
    }
    hit
}

/// Split nodes with the trial-render heuristic.
///
/// Returns `(attribute_like, content)`. Attribute-like nodes that are not
/// real `Attr` nodes keep their node kind; callers place them ahead of the
/// content.
pub fn split_rendered(
    nodes: impl IntoIterator<Item = Node>,
    heuristic: Heuristic,
) -> (Vec<Node>, Vec<Node>) {
    nodes
        .into_iter()
        .partition(|node| is_attribute(node, heuristic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;
    use crate::html;

    #[test]
    fn test_split_by_kind() {
        let (attrs, content) = split([
            html::id("x"),
            html::text("a = b"),
            Node::group([html::disabled(), html::text("c")]),
        ]);
        assert_eq!(attrs, vec![Attr::new("id", "x"), Attr::flag("disabled")]);
        assert_eq!(content, vec![Node::text("a = b"), Node::text("c")]);
    }

    #[test]
    fn test_generic_heuristic() {
        assert!(is_attribute(&html::title("t"), Heuristic::Generic));
        assert!(is_attribute(&Node::raw("disabled"), Heuristic::Generic));
        assert!(is_attribute(&Node::text("1 + 1 = 2"), Heuristic::Generic));
        assert!(!is_attribute(&Node::text("Hello"), Heuristic::Generic));
    }

    #[test]
    fn test_badge_and_markup_heuristics() {
        assert!(is_attribute(&Node::text("tooltip title"), Heuristic::Badge));
        assert!(!is_attribute(&Node::text("New"), Heuristic::Badge));

        let elem: Node = html::span().attr("class", "x").into();
        assert!(is_attribute(&elem, Heuristic::Generic));
        assert!(!is_attribute(&elem, Heuristic::Markup));
        assert!(is_attribute(&Node::raw(r#"data-x="1""#), Heuristic::Markup));
    }

    #[test]
    fn test_split_rendered_keeps_order() {
        let (attr_like, content) = split_rendered(
            [
                Node::text("Hello"),
                Node::raw(r#"data-role="x""#),
                Node::text("World"),
            ],
            Heuristic::Generic,
        );
        assert_eq!(attr_like, vec![Node::raw(r#"data-role="x""#)]);
        assert_eq!(content, vec![Node::text("Hello"), Node::text("World")]);
    }
}
