//! Breadcrumb navigation.
//!
//! ```ignore
//! let trail = Breadcrumb::new([
//!     BreadcrumbItem::link("/", "Home"),
//!     BreadcrumbItem::link("/docs", "Docs"),
//!     BreadcrumbItem::new("Install"),
//! ])
//! .with_separator(">");
//! ```

use compact_str::CompactString;

use crate::attr::{Attr, Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::modifier::{Modifier, Size};
use crate::node::{Element, Node};
use crate::partition::{self, Heuristic};

/// One entry of a breadcrumb trail, rendered as `<li>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    li: Element,
}

impl BreadcrumbItem {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            li: html::li().child(content),
        }
    }

    /// Adopt a node from a mixed list. An `li` element is already an item
    /// and is kept as is; anything else is wrapped.
    fn adopt(node: Node) -> Self {
        match node {
            Node::Element(elem) if elem.tag == "li" => Self { li: *elem },
            other => Self::new(other),
        }
    }

    /// Item wrapping `<a href="..">text</a>`.
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(html::a().attr("href", href).text(text))
    }
}

impl Component for BreadcrumbItem {
    fn to_node(&self) -> Node {
        self.li.clone().into()
    }

    fn apply_modifier(&mut self, _modifier: &Modifier) {}
}

impl_into_node!(BreadcrumbItem);

/// `<nav class="breadcrumbs"><ol>..</ol></nav>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    classes: Classes,
    attrs: Attrs,
    items: Vec<BreadcrumbItem>,
    separator: String,
}

impl Breadcrumb {
    /// Trail from items. Pass an `aria-label` or other attributes with
    /// [`with_attr`](Self::with_attr).
    pub fn new(items: impl IntoIterator<Item = BreadcrumbItem>) -> Self {
        Self {
            classes: Classes::new("breadcrumbs"),
            attrs: Attrs::new(),
            items: items.into_iter().collect(),
            separator: String::new(),
        }
    }

    /// Trail from a mixed node list: `Attr` nodes become attributes of
    /// the `nav`, `li` elements (rendered items) pass through and every
    /// other node is wrapped as an item.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let (attrs, content) = partition::split(nodes.into_iter().map(Into::into));
        Self {
            attrs,
            ..Self::new(content.into_iter().map(BreadcrumbItem::adopt))
        }
    }

    /// Trail from a node list classified by trial rendering.
    ///
    /// Only `Attr` nodes reach the `nav`. Text that merely looks like an
    /// attribute stays an item. Input order is kept.
    pub fn from_legacy<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut trail = Self::new([]);
        for node in nodes.into_iter().map(Into::into) {
            match node {
                Node::Attr(attr) => trail.attrs.merge_attr(attr),
                Node::Group(inner) => {
                    let nested = Self::from_legacy(inner);
                    for attr in nested.attrs {
                        trail.attrs.merge_attr(attr);
                    }
                    trail.items.extend(nested.items);
                }
                other => {
                    if partition::is_attribute(&other, Heuristic::Markup) {
                        tracing::debug!("attribute-like node kept as breadcrumb item");
                    }
                    trail.items.push(BreadcrumbItem::adopt(other));
                }
            }
        }
        trail
    }

    pub fn item(mut self, item: BreadcrumbItem) -> Self {
        self.items.push(item);
        self
    }

    /// Custom separator, emitted as `data-separator`.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.apply_modifier(&size.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push_custom(class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        self.attrs.merge_attr(Attr::new(name, value));
        self
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }
}

impl Component for Breadcrumb {
    fn to_node(&self) -> Node {
        let list = html::ol().children(self.items.iter().map(Node::from));
        html::nav()
            .attrs([self.classes.to_attr()])
            .attrs(self.attrs.iter().cloned())
            .attr_nonempty("data-separator", &self.separator)
            .child(list)
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Size(s) => self.classes.set(Axis::Size, format!("breadcrumbs-{s}")),
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }
}

impl_into_node!(Breadcrumb);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breadcrumb_trail() {
        let trail = Breadcrumb::new([
            BreadcrumbItem::link("/", "Home"),
            BreadcrumbItem::new("Install"),
        ])
        .with_separator(">")
        .with_attr("aria-label", "Breadcrumb")
        .with_size(Size::Small);
        assert_eq!(
            trail.render_to_string(),
            r#"<nav class="breadcrumbs breadcrumbs-sm" aria-label="Breadcrumb" data-separator="&gt;"><ol><li><a href="/">Home</a></li><li>Install</li></ol></nav>"#
        );
    }

    #[test]
    fn test_breadcrumb_from_nodes() {
        let trail = Breadcrumb::from_nodes([html::aria("label", "Trail"), "A".into(), "B".into()]);
        assert_eq!(trail.items().len(), 2);
        assert_eq!(
            trail.render_to_string(),
            r#"<nav class="breadcrumbs" aria-label="Trail"><ol><li>A</li><li>B</li></ol></nav>"#
        );
    }

    #[test]
    fn test_from_nodes_keeps_items_unwrapped() {
        let trail = Breadcrumb::from_nodes([
            html::aria("label", "Trail"),
            BreadcrumbItem::link("/", "Home").into(),
            BreadcrumbItem::new("Docs").into(),
            "Install".into(),
        ]);
        assert_eq!(
            trail.render_to_string(),
            concat!(
                r#"<nav class="breadcrumbs" aria-label="Trail"><ol>"#,
                r#"<li><a href="/">Home</a></li><li>Docs</li><li>Install</li>"#,
                "</ol></nav>"
            )
        );
    }

    #[test]
    fn test_from_legacy_keeps_order() {
        let trail = Breadcrumb::from_legacy([
            Node::from(BreadcrumbItem::new("Home")),
            BreadcrumbItem::link("/docs", "Docs").into(),
            html::text("Install"),
            html::id("crumbs"),
        ]);
        assert_eq!(
            trail.render_to_string(),
            concat!(
                r#"<nav class="breadcrumbs" id="crumbs"><ol>"#,
                r#"<li>Home</li><li><a href="/docs">Docs</a></li><li>Install</li>"#,
                "</ol></nav>"
            )
        );
    }

    #[test]
    fn test_breadcrumb_ignores_color() {
        let trail = Breadcrumb::new([]).with([crate::modifier::Color::Error]);
        assert_eq!(
            trail.render_to_string(),
            r#"<nav class="breadcrumbs"><ol></ol></nav>"#
        );
    }
}
