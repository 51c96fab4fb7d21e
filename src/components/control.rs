//! Shared storage for form controls.
//!
//! A control keeps its class list, the prefix used for Color and Size
//! classes, and caller attributes that are emitted after the typed ones.

use compact_str::{CompactString, format_compact};

use crate::attr::{Attr, Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::modifier::{Color, Modifier, Size};

/// How a control treats the default Color (Primary) and Size (Medium).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Defaults {
    /// Primary and Medium never emit a class.
    Elide,
    /// Any explicitly applied value emits a class.
    Explicit,
    /// Primary emits a class, Medium does not.
    ElideSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Control {
    pub(crate) classes: Classes,
    pub(crate) attrs: Attrs,
    prefix: &'static str,
    defaults: Defaults,
}

impl Control {
    pub(crate) fn new(base: &str, prefix: &'static str, defaults: Defaults) -> Self {
        Self {
            classes: Classes::new(base),
            attrs: Attrs::new(),
            prefix,
            defaults,
        }
    }

    fn elides(&self, axis: Axis) -> bool {
        match self.defaults {
            Defaults::Elide => true,
            Defaults::Explicit => false,
            Defaults::ElideSize => axis == Axis::Size,
        }
    }

    fn facet(&mut self, axis: Axis, token: &str, is_default: bool) {
        let class = if is_default && self.elides(axis) {
            CompactString::default()
        } else {
            format_compact!("{}-{token}", self.prefix)
        };
        self.classes.set(axis, class);
    }

    pub(crate) fn apply(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(c) => self.facet(Axis::Color, c.token(), *c == Color::Primary),
            Modifier::Size(s) => self.facet(Axis::Size, s.token(), *s == Size::Medium),
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }

    pub(crate) fn class_attr(&self) -> Attr {
        self.classes.to_attr()
    }

    pub(crate) fn extra_attrs(&self) -> impl Iterator<Item = Attr> + '_ {
        self.attrs.iter().cloned()
    }
}

/// Consuming setters for plain fields. String fields are declared as
/// `impl Into<String>`.
macro_rules! setters {
    ($($(#[$meta:meta])* $fn_name:ident => $field:ident : $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[allow(clippy::useless_conversion)]
            pub fn $fn_name(mut self, value: $ty) -> Self {
                self.$field = value.into();
                self
            }
        )*
    };
}

pub(crate) use setters;

/// Color, size, class and attribute builders for a type holding a
/// `control: Control` field, plus its `Component` impl.
///
/// The type must provide `fn build(&self) -> Element`.
macro_rules! impl_control {
    ($name:ident) => {
        impl $name {
            pub fn with_color(mut self, color: $crate::modifier::Color) -> Self {
                self.control.apply(&color.into());
                self
            }

            pub fn with_size(mut self, size: $crate::modifier::Size) -> Self {
                self.control.apply(&size.into());
                self
            }

            /// Append custom classes after the modifier classes.
            pub fn with_class(mut self, class: &str) -> Self {
                self.control.classes.push_custom(class);
                self
            }

            /// Extra attribute, emitted after the typed attributes in
            /// insertion order.
            pub fn with_attr(
                mut self,
                name: impl Into<::compact_str::CompactString>,
                value: impl Into<String>,
            ) -> Self {
                $crate::attr::AttrsExt::merge_attr(
                    &mut self.control.attrs,
                    $crate::attr::Attr::new(name, value),
                );
                self
            }
        }

        impl $crate::component::Component for $name {
            fn to_node(&self) -> $crate::node::Node {
                self.build().into()
            }

            fn apply_modifier(&mut self, modifier: &$crate::modifier::Modifier) {
                self.control.apply(modifier);
            }
        }

        impl_into_node!($name);
    };
}

pub(crate) use impl_control;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elide_defaults() {
        let mut control = Control::new("input input-bordered", "input", Defaults::Elide);
        control.apply(&Color::Error.into());
        control.apply(&Color::Primary.into());
        control.apply(&Size::Medium.into());
        assert_eq!(control.classes.to_class_string(), "input input-bordered");
    }

    #[test]
    fn test_explicit_defaults() {
        let mut control = Control::new("toggle", "toggle", Defaults::Explicit);
        control.apply(&Color::Primary.into());
        control.apply(&Size::Medium.into());
        control.apply(&Modifier::class("ml-2"));
        assert_eq!(
            control.classes.to_class_string(),
            "toggle toggle-primary toggle-md ml-2"
        );
    }

    #[test]
    fn test_variant_ignored() {
        let mut control = Control::new("radio", "radio", Defaults::Elide);
        control.apply(&crate::modifier::Variant::Ghost.into());
        assert_eq!(control.classes.to_class_string(), "radio");
    }
}
