//! Tag constructors and attribute helpers.
//!
//! Tag functions return an empty [`Element`] ready for the builder API.
//! Attribute functions return [`Node::Attr`] so they can be mixed freely
//! with content in any node list.
//!
//! ```ignore
//! use flyon_vdom::html::{self, class, id};
//!
//! let node = Element::from_nodes("div", [id("main"), class("card"), "Hello".into()]);
//! let link = html::a().attr("href", "/").text("Home");
//! ```

use compact_str::CompactString;

use crate::attr::Attr;
use crate::node::{Element, Node};

// =============================================================================
// Tag constructors
// =============================================================================

macro_rules! tags {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("Empty `<", stringify!($tag), ">` element")]
            #[inline]
            pub fn $tag() -> Element {
                Element::new(stringify!($tag))
            }
        )*
    };
}

tags!(
    div, span, input, textarea, select, option, button, label, ul, ol, li, a, nav, progress,
    blockquote, cite, h1, h2, h3, h4, h5, h6, p, strong, em, small, code, pre, hr, aside, img,
    header, footer,
);

/// Element with an arbitrary tag name
#[inline]
pub fn element(tag: impl Into<CompactString>) -> Element {
    Element::new(tag)
}

// =============================================================================
// Attribute helpers
// =============================================================================

macro_rules! value_attrs {
    ($($fn_name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $attr, "=\"...\"` attribute")]
            #[inline]
            pub fn $fn_name(value: impl Into<String>) -> Node {
                Node::Attr(Attr::new($attr, value))
            }
        )*
    };
}

macro_rules! flag_attrs {
    ($($fn_name:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("Boolean `", $attr, "` attribute")]
            #[inline]
            pub fn $fn_name() -> Node {
                Node::Attr(Attr::flag($attr))
            }
        )*
    };
}

value_attrs! {
    class => "class",
    id => "id",
    name => "name",
    type_ => "type",
    value => "value",
    placeholder => "placeholder",
    accept => "accept",
    href => "href",
    for_ => "for",
    src => "src",
    alt => "alt",
    rows => "rows",
    cols => "cols",
    min => "min",
    max => "max",
    step => "step",
    title => "title",
    role => "role",
}

flag_attrs! {
    checked => "checked",
    disabled => "disabled",
    multiple => "multiple",
    readonly => "readonly",
    required => "required",
    selected => "selected",
}

/// Generic `name="value"` attribute
#[inline]
pub fn attr(name: impl Into<CompactString>, value: impl Into<String>) -> Node {
    Node::Attr(Attr::new(name, value))
}

/// Generic boolean attribute
#[inline]
pub fn flag(name: impl Into<CompactString>) -> Node {
    Node::Attr(Attr::flag(name))
}

/// `aria-<name>="value"` attribute
pub fn aria(name: &str, value: impl Into<String>) -> Node {
    attr(format!("aria-{name}"), value)
}

/// `data-<name>="value"` attribute
pub fn data(name: &str, value: impl Into<String>) -> Node {
    attr(format!("data-{name}"), value)
}

// =============================================================================
// Content helpers
// =============================================================================

/// Escaped text node
#[inline]
pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}

/// Raw text node
#[inline]
pub fn raw(content: impl Into<String>) -> Node {
    Node::raw(content)
}

/// Sibling group
#[inline]
pub fn group(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::group(nodes)
}

/// Conditional inclusion
#[inline]
pub fn when(cond: bool, node: impl Into<Node>) -> Node {
    Node::when(cond, node)
}
