//! Text elements with utility classes.
//!
//! Typography has no base class. Color and Size map to `text-<token>`,
//! alignment to `text-<align>` and weight to `font-<weight>`.

use std::fmt;

use super::shell::{Shell, impl_shell_builders};
use crate::classes::Axis;
use crate::component::Component;
use crate::modifier::{Color, Modifier, Size};
use crate::node::Node;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Thin,
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
    Extrabold,
}

impl FontWeight {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
            Self::Extrabold => "extrabold",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

const TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "strong", "em", "small", "code", "pre",
];

/// A heading, paragraph or inline text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    tag: &'static str,
    shell: Shell,
}

impl Typography {
    fn from_shell(shell: Shell) -> Self {
        Self { tag: "div", shell }
    }

    /// Text element with the given tag. Unsupported tags render as `div`.
    pub fn with_tag<I>(tag: &str, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let tag = TAGS.iter().copied().find(|t| *t == tag).unwrap_or("div");
        Self {
            tag,
            ..Self::new(nodes)
        }
    }

    /// The tag this element renders with.
    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.apply_modifier(&size.into());
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.shell.facet(Axis::Align, format!("text-{align}"));
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.shell.facet(Axis::Weight, format!("font-{weight}"));
        self
    }
}

macro_rules! tag_shorthands {
    ($($tag:ident),* $(,)?) => {
        impl Typography {
            $(
                #[doc = concat!("`<", stringify!($tag), ">` text element")]
                pub fn $tag<I>(nodes: I) -> Self
                where
                    I: IntoIterator,
                    I::Item: Into<Node>,
                {
                    Self::with_tag(stringify!($tag), nodes)
                }
            )*
        }
    };
}

tag_shorthands!(h1, h2, h3, h4, h5, h6, p, span, strong, em, small, code, pre);

impl_shell_builders!(Typography, base = "", heuristic = Markup);

impl Component for Typography {
    fn to_node(&self) -> Node {
        self.shell.element(self.tag).into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(c) => self.shell.facet(Axis::Color, format!("text-{c}")),
            Modifier::Size(s) => self.shell.facet(Axis::Size, format!("text-{s}")),
            other => self.shell.apply_extra(other),
        }
    }
}
