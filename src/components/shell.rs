//! Shared storage for container-style components.
//!
//! Most display components are a single element holding a class list,
//! caller attributes and caller content. `Shell` keeps those three parts and
//! builds the outer element in the canonical order: `class` first, then
//! caller attributes, then component attributes, then content.

use compact_str::CompactString;

use crate::attr::{Attr, Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::modifier::Modifier;
use crate::node::{Element, Node};
use crate::partition::{self, Heuristic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shell {
    pub(crate) classes: Classes,
    pub(crate) attrs: Attrs,
    pub(crate) children: Vec<Node>,
}

impl Shell {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            classes: Classes::new(base),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn from_nodes<I>(base: &str, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let (attrs, children) = partition::split(nodes.into_iter().map(Into::into));
        Self {
            attrs,
            children,
            ..Self::new(base)
        }
    }

    pub(crate) fn from_parts(
        base: &str,
        attrs: impl IntoIterator<Item = Attr>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        let mut shell = Self::new(base);
        for attr in attrs {
            shell.attrs.merge_attr(attr);
        }
        shell.children.extend(children);
        shell
    }

    /// Attribute-like nodes that are not real attributes stay in the child
    /// list, ahead of the content.
    pub(crate) fn from_rendered<I>(base: &str, nodes: I, heuristic: Heuristic) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let (attr_like, content) =
            partition::split_rendered(nodes.into_iter().map(Into::into), heuristic);
        let mut shell = Self::new(base);
        for node in attr_like {
            match node {
                Node::Attr(attr) => shell.attrs.merge_attr(attr),
                other => shell.children.push(other),
            }
        }
        shell.children.extend(content);
        shell
    }

    #[inline]
    pub(crate) fn facet(&mut self, axis: Axis, class: impl Into<CompactString>) {
        self.classes.set(axis, class);
    }

    /// `<prefix>-<token>` on the matching axis for Color, Size and Variant.
    ///
    /// Returns false for modifiers on other axes.
    pub(crate) fn apply_global(&mut self, prefix: &str, modifier: &Modifier) -> bool {
        let (axis, token) = match modifier {
            Modifier::Color(c) => (Axis::Color, c.token()),
            Modifier::Size(s) => (Axis::Size, s.token()),
            Modifier::Variant(v) => (Axis::Variant, v.token()),
            _ => return false,
        };
        self.facet(axis, compact_str::format_compact!("{prefix}-{token}"));
        true
    }

    /// Custom class and extra attribute modifiers.
    pub(crate) fn apply_extra(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }

    /// Outer element with class and caller attributes, no children.
    /// An empty class list emits no `class` attribute.
    pub(crate) fn open(&self, tag: &str) -> Element {
        let class = (!self.classes.is_empty()).then(|| self.classes.to_attr());
        Element::new(tag)
            .attrs(class)
            .attrs(self.attrs.iter().cloned())
    }

    /// Outer element with class, caller attributes and content.
    pub(crate) fn element(&self, tag: &str) -> Element {
        self.open(tag).children(self.children.iter().cloned())
    }
}

/// Implements the constructors and generic builders of a component that
/// stores its outer element in a `shell: Shell` field.
///
/// The type must provide `fn from_shell(shell: Shell) -> Self`.
macro_rules! impl_shell_builders {
    ($name:ident, base = $base:literal, heuristic = $heuristic:ident) => {
        impl $name {
            /// Create from a mixed node list.
            ///
            /// `Attr` nodes become attributes of the outer element; everything
            /// else is content.
            pub fn new<I>(nodes: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$crate::node::Node>,
            {
                Self::from_shell($crate::components::shell::Shell::from_nodes($base, nodes))
            }

            /// Create from explicit attribute and content channels.
            pub fn from_parts(
                attrs: impl IntoIterator<Item = $crate::attr::Attr>,
                children: impl IntoIterator<Item = $crate::node::Node>,
            ) -> Self {
                Self::from_shell($crate::components::shell::Shell::from_parts(
                    $base, attrs, children,
                ))
            }

            /// Create from a node list classified by trial rendering.
            pub fn from_legacy<I>(nodes: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$crate::node::Node>,
            {
                Self::from_shell($crate::components::shell::Shell::from_rendered(
                    $base,
                    nodes,
                    $crate::partition::Heuristic::$heuristic,
                ))
            }

            /// Append custom classes after the modifier classes.
            pub fn with_class(mut self, class: &str) -> Self {
                self.shell.classes.push_custom(class);
                self
            }

            /// Add or replace an attribute on the outer element.
            pub fn with_attr(
                mut self,
                name: impl Into<::compact_str::CompactString>,
                value: impl Into<String>,
            ) -> Self {
                $crate::attr::AttrsExt::merge_attr(
                    &mut self.shell.attrs,
                    $crate::attr::Attr::new(name, value),
                );
                self
            }

            /// Append a content node.
            pub fn child(mut self, node: impl Into<$crate::node::Node>) -> Self {
                self.shell.children.push(node.into());
                self
            }
        }

        impl_into_node!($name);
    };
}

pub(crate) use impl_shell_builders;

/// Declares a component whose only styling is `<base>-<token>` for the
/// global Color, Size and Variant axes.
macro_rules! prefixed_component {
    (
        $(#[$meta:meta])*
        $name:ident { tag: $tag:literal, base: $base:literal, heuristic: $heuristic:ident }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            shell: $crate::components::shell::Shell,
        }

        impl $name {
            fn from_shell(shell: $crate::components::shell::Shell) -> Self {
                Self { shell }
            }

            #[doc = concat!("Set the color (`", $base, "-<color>`).")]
            pub fn with_color(mut self, color: $crate::modifier::Color) -> Self {
                self.shell.apply_global($base, &color.into());
                self
            }

            #[doc = concat!("Set the size (`", $base, "-<size>`).")]
            pub fn with_size(mut self, size: $crate::modifier::Size) -> Self {
                self.shell.apply_global($base, &size.into());
                self
            }

            #[doc = concat!("Set the variant (`", $base, "-<variant>`).")]
            pub fn with_variant(mut self, variant: $crate::modifier::Variant) -> Self {
                self.shell.apply_global($base, &variant.into());
                self
            }
        }

        $crate::components::shell::impl_shell_builders!($name, base = $base, heuristic = $heuristic);

        impl $crate::component::Component for $name {
            fn to_node(&self) -> $crate::node::Node {
                self.shell.element($tag).into()
            }

            fn apply_modifier(&mut self, modifier: &$crate::modifier::Modifier) {
                if !self.shell.apply_global($base, modifier) {
                    self.shell.apply_extra(modifier);
                }
            }
        }
    };
}

pub(crate) use prefixed_component;
