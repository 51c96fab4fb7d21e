//! Two-state toggle that swaps between an "on" and an "off" node.

use compact_str::format_compact;

use crate::attr::{Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{Color, Modifier};
use crate::node::Node;

/// `<label class="swap">` wrapping a checkbox, `div.swap-on` and
/// `div.swap-off`.
///
/// The checkbox id is `<id>-toggle` and the label's `for` points at it.
/// Primary is the framework default and emits no color class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    id: String,
    on: Node,
    off: Node,
    active: bool,
    classes: Classes,
    attrs: Attrs,
}

impl Swap {
    pub fn new(on: impl Into<Node>, off: impl Into<Node>) -> Self {
        Self {
            id: generate_id(),
            on: on.into(),
            off: off.into(),
            active: false,
            classes: Classes::new("swap"),
            attrs: Attrs::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Start in the "on" state.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.classes.set_flag("swap-rotate", rotate);
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.classes.set_flag("swap-flip", flip);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push_custom(class);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }
}

impl Component for Swap {
    fn to_node(&self) -> Node {
        let toggle = self.toggle_id();
        html::label()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .attr("for", toggle.as_str())
            .attrs(self.attrs.iter().cloned())
            .child(
                html::input()
                    .attr("type", "checkbox")
                    .attr("id", toggle)
                    .attr("class", "swap-input")
                    .flag_if(self.active, "checked"),
            )
            .child(html::div().attr("class", "swap-on").child(self.on.clone()))
            .child(html::div().attr("class", "swap-off").child(self.off.clone()))
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(Color::Primary) => self.classes.set(Axis::Color, ""),
            Modifier::Color(c) => self.classes.set(Axis::Color, format_compact!("swap-{c}")),
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }
}

impl_into_node!(Swap);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_swap_markup() {
        let swap = Swap::new("ON", "OFF").with_id("s1").with_active(true);
        assert_eq!(
            swap.render_to_string(),
            concat!(
                r#"<label id="s1" class="swap" for="s1-toggle">"#,
                r#"<input type="checkbox" id="s1-toggle" class="swap-input" checked>"#,
                r#"<div class="swap-on">ON</div><div class="swap-off">OFF</div>"#,
                "</label>"
            )
        );
    }

    #[test]
    fn test_rotate_flip_independent() {
        let swap = Swap::new("a", "b").with_rotate(true).with_flip(true);
        assert!(swap.render_to_string().contains(r#"class="swap swap-rotate swap-flip""#));
        let flip_only = swap.with_rotate(false);
        assert!(flip_only.render_to_string().contains(r#"class="swap swap-flip""#));
    }

    #[test]
    fn test_color_primary_elided() {
        let swap = Swap::new("a", "b").with_color(Color::Success);
        assert!(swap.render_to_string().contains(r#"class="swap swap-success""#));
        let primary = swap.with([Color::Primary]);
        assert!(primary.render_to_string().contains(r#"class="swap""#));
        assert!(!primary.render_to_string().contains("checked"));
    }

    #[test]
    fn test_label_targets_checkbox() {
        let node = Swap::new("a", "b").to_node();
        let input = node.find(|e| e.tag == "input").and_then(|e| e.id());
        let label = node.find(|e| e.tag == "label").and_then(|e| e.get_attr("for"));
        assert_eq!(input, label);
    }
}
