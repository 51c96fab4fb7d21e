//! HTML rendering
//!
//! Serializes node trees to HTML. Rendering is a single recursive pass that
//! writes directly to the sink; the only failure is the sink itself.

use std::convert::Infallible;
use std::fmt;
use std::io;

use crate::attr::{Attr, Attrs};
use crate::error::RenderResult;
use crate::node::{Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit void elements as `<input />` instead of `<input>`.
    pub self_close_void: bool,
}

impl RenderConfig {
    /// HTML5 output (`<input>`).
    pub const HTML5: Self = Self {
        self_close_void: false,
    };

    /// XHTML-compatible output (`<input />`).
    pub const XHTML: Self = Self {
        self_close_void: true,
    };

    /// Create a new config.
    pub const fn new(self_close_void: bool) -> Self {
        Self { self_close_void }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::HTML5
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Destination for rendered markup.
trait Sink {
    type Error;

    fn put(&mut self, s: &str) -> Result<(), Self::Error>;
}

impl Sink for String {
    type Error = Infallible;

    #[inline]
    fn put(&mut self, s: &str) -> Result<(), Infallible> {
        self.push_str(s);
        Ok(())
    }
}

struct IoSink<'a, W: io::Write + ?Sized>(&'a mut W);

impl<W: io::Write + ?Sized> Sink for IoSink<'_, W> {
    type Error = io::Error;

    #[inline]
    fn put(&mut self, s: &str) -> io::Result<()> {
        self.0.write_all(s.as_bytes())
    }
}

impl Sink for fmt::Formatter<'_> {
    type Error = fmt::Error;

    #[inline]
    fn put(&mut self, s: &str) -> fmt::Result {
        self.write_str(s)
    }
}

// =============================================================================
// Public entry points
// =============================================================================

/// Render a node to an `io::Write` sink.
///
/// Stops at the first write error; whatever was already written stays
/// in the sink.
pub fn render<W>(node: &Node, config: &RenderConfig, w: &mut W) -> RenderResult<()>
where
    W: io::Write + ?Sized,
{
    write_node(node, config, &mut IoSink(w))?;
    Ok(())
}

/// Render a node to an in-memory string.
pub fn render_to_string(node: &Node, config: &RenderConfig) -> String {
    let mut output = String::new();
    let Ok(()) = write_node(node, config, &mut output);
    output
}

/// Render a node to HTML bytes.
pub fn render_to_bytes(node: &Node, config: &RenderConfig) -> Vec<u8> {
    render_to_string(node, config).into_bytes()
}

/// Render many nodes on the rayon thread pool, preserving input order.
#[cfg(feature = "parallel")]
pub fn render_all(nodes: &[Node], config: &RenderConfig) -> Vec<String> {
    use rayon::prelude::*;

    nodes
        .par_iter()
        .map(|node| render_to_string(node, config))
        .collect()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, &RenderConfig::default(), f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(self, &RenderConfig::default(), f)
    }
}

// =============================================================================
// Tree walk
// =============================================================================

fn write_node<S: Sink>(node: &Node, config: &RenderConfig, out: &mut S) -> Result<(), S::Error> {
    match node {
        Node::Element(elem) => write_element(elem, config, out),
        Node::Text(text) if text.is_raw() => out.put(&text.content),
        Node::Text(text) => write_escaped(&text.content, false, out),
        // Standalone attribute (not lifted into an element)
        Node::Attr(attr) => write_attr(attr, out),
        Node::Group(nodes) => {
            for child in nodes {
                write_node(child, config, out)?;
            }
            Ok(())
        }
    }
}

fn write_element<S: Sink>(
    elem: &Element,
    config: &RenderConfig,
    out: &mut S,
) -> Result<(), S::Error> {
    out.put("<")?;
    out.put(&elem.tag)?;
    write_attrs(&elem.attrs, out)?;

    if is_void_element(&elem.tag) {
        return out.put(if config.self_close_void { " />" } else { ">" });
    }

    out.put(">")?;
    for child in &elem.children {
        write_node(child, config, out)?;
    }
    out.put("</")?;
    out.put(&elem.tag)?;
    out.put(">")
}

fn write_attrs<S: Sink>(attrs: &Attrs, out: &mut S) -> Result<(), S::Error> {
    for attr in attrs {
        write_attr(attr, out)?;
    }
    Ok(())
}

fn write_attr<S: Sink>(attr: &Attr, out: &mut S) -> Result<(), S::Error> {
    out.put(" ")?;
    out.put(&attr.name)?;
    if let Some(value) = &attr.value {
        out.put("=\"")?;
        write_escaped(value, true, out)?;
        out.put("\"")?;
    }
    Ok(())
}

/// Write `s`, escaping `& < >` (and `"` inside attribute values).
fn write_escaped<S: Sink>(s: &str, in_attr: bool, out: &mut S) -> Result<(), S::Error> {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if in_attr => "&quot;",
            _ => continue,
        };
        out.put(&s[last..i])?;
        out.put(entity)?;
        last = i + c.len_utf8();
    }
    out.put(&s[last..])
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let Ok(()) = write_escaped(s, false, &mut result);
    result
}

/// Escape attribute value special characters.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let Ok(()) = write_escaped(s, true, &mut result);
    result
}

/// Check if element is a void element (no closing tag).
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html;

    #[test]
    fn test_render_simple_element() {
        let node: Node = html::div().with_id("main").with_class("card").text("Hi").into();
        let out = render_to_string(&node, &RenderConfig::default());
        assert_eq!(out, r#"<div id="main" class="card">Hi</div>"#);
    }

    #[test]
    fn test_void_element_syntax() {
        let node: Node = html::input().attr("type", "checkbox").flag("checked").into();
        assert_eq!(
            render_to_string(&node, &RenderConfig::HTML5),
            r#"<input type="checkbox" checked>"#
        );
        assert_eq!(
            render_to_string(&node, &RenderConfig::XHTML),
            r#"<input type="checkbox" checked />"#
        );
    }

    #[test]
    fn test_standalone_attr_and_group() {
        assert_eq!(html::attr("title", "x").to_string(), r#" title="x""#);
        assert_eq!(html::disabled().to_string(), " disabled");
        let group = Node::group([Node::text("a"), Node::raw("<b>b</b>")]);
        assert_eq!(group.to_string(), "a<b>b</b>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_render_to_io_sink() {
        let node: Node = html::p().text("é & ü").into();
        let mut buf = Vec::new();
        render(&node, &RenderConfig::default(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "<p>é &amp; ü</p>");
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let node: Node = html::div().into();
        let err = render(&node, &RenderConfig::default(), &mut Broken).unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_render_all_keeps_order() {
        let nodes: Vec<Node> = (0..32).map(|i| Node::text(i.to_string())).collect();
        let out = render_all(&nodes, &RenderConfig::default());
        assert_eq!(out[0], "0");
        assert_eq!(out[31], "31");
    }
}
