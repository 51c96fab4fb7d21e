//! Blockquote with optional attribution.

use super::shell::{Shell, impl_shell_builders};
use crate::component::Component;
use crate::html;
use crate::modifier::{Color, Modifier, Size, Variant};
use crate::node::Node;

/// Quotation block (`<blockquote class="blockquote">`).
///
/// When an author or source is set, a `<cite>` reading `author, source`
/// is appended after the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockquote {
    shell: Shell,
    author: String,
    source: String,
}

impl Blockquote {
    fn from_shell(shell: Shell) -> Self {
        Self {
            shell,
            author: String::new(),
            source: String::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.shell.apply_global("blockquote", &color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.shell.apply_global("blockquote", &size.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.shell.apply_global("blockquote", &variant.into());
        self
    }

    fn citation(&self) -> Option<String> {
        match (self.author.is_empty(), self.source.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.author.clone()),
            (true, false) => Some(self.source.clone()),
            (false, false) => Some(format!("{}, {}", self.author, self.source)),
        }
    }
}

impl_shell_builders!(Blockquote, base = "blockquote", heuristic = Generic);

impl Component for Blockquote {
    fn to_node(&self) -> Node {
        let cite = self.citation().map(|text| Node::from(html::cite().text(text)));
        self.shell.element("blockquote").child(cite).into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        if !self.shell.apply_global("blockquote", modifier) {
            self.shell.apply_extra(modifier);
        }
    }
}
