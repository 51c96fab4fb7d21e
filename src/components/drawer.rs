//! Off-canvas sidebar driven by a hidden checkbox.

use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{DrawerSide, Modifier};
use crate::node::Node;

fn toggle_target(drawer_id: &str) -> String {
    format!("{drawer_id}-toggle")
}

/// `<div class="drawer drawer-start" data-component="drawer">`.
///
/// Holds a checkbox `<id>-toggle`, the main content wrapper and the side
/// wrapper. The side wrapper starts with an overlay label targeting the
/// checkbox unless the overlay is turned off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawer {
    id: String,
    side: DrawerSide,
    open: bool,
    overlay: bool,
    content: Node,
    sidebar: Node,
    classes: Classes,
}

impl Drawer {
    pub fn new(content: impl Into<Node>, sidebar: impl Into<Node>) -> Self {
        let mut drawer = Self {
            id: generate_id(),
            side: DrawerSide::Left,
            open: false,
            overlay: true,
            content: content.into(),
            sidebar: sidebar.into(),
            classes: Classes::new("drawer"),
        };
        drawer.apply_modifier(&DrawerSide::Left.into());
        drawer
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_side(mut self, side: DrawerSide) -> Self {
        self.apply_modifier(&side.into());
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push_custom(class);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn side(&self) -> DrawerSide {
        self.side
    }

    pub fn toggle_id(&self) -> String {
        toggle_target(&self.id)
    }
}

impl Component for Drawer {
    fn to_node(&self) -> Node {
        let toggle = self.toggle_id();
        let overlay = self.overlay.then(|| {
            html::label()
                .attr("for", toggle.as_str())
                .attr("class", "drawer-overlay")
                .attr("aria-label", "close sidebar")
        });
        let side = html::div()
            .attr("class", "drawer-side")
            .child(overlay.map(Node::from))
            .child(
                html::aside()
                    .attr("class", "bg-base-200 min-h-full w-80 p-4")
                    .child(self.sidebar.clone()),
            );
        html::div()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .attr("data-component", "drawer")
            .child(
                html::input()
                    .attr("type", "checkbox")
                    .attr("id", toggle.as_str())
                    .attr("class", "drawer-toggle")
                    .flag_if(self.open, "checked"),
            )
            .child(
                html::div()
                    .attr("class", "drawer-content flex flex-col")
                    .child(self.content.clone()),
            )
            .child(side)
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::DrawerSide(side) => {
                self.side = *side;
                self.classes.set(Axis::Position, side.token());
            }
            Modifier::Class(class) => self.classes.push_custom(class),
            _ => {}
        }
    }
}

impl_into_node!(Drawer);

/// Label that opens the drawer `drawer_id`.
pub fn drawer_toggle_button(drawer_id: &str, text: impl Into<String>) -> Node {
    html::label()
        .attr("for", toggle_target(drawer_id))
        .attr("class", "btn btn-square btn-ghost drawer-button")
        .attr("aria-label", "toggle drawer")
        .text(text)
        .into()
}

/// Label that closes the drawer `drawer_id`.
pub fn drawer_close_button(drawer_id: &str, text: impl Into<String>) -> Node {
    html::label()
        .attr("for", toggle_target(drawer_id))
        .attr("class", "btn btn-sm btn-circle btn-ghost absolute right-2 top-2")
        .attr("aria-label", "close drawer")
        .text(text)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drawer_default_markup() {
        let drawer = Drawer::new("Main", "Side").with_id("nav");
        assert_eq!(
            drawer.render_to_string(),
            concat!(
                r#"<div id="nav" class="drawer drawer-start" data-component="drawer">"#,
                r#"<input type="checkbox" id="nav-toggle" class="drawer-toggle">"#,
                r#"<div class="drawer-content flex flex-col">Main</div>"#,
                r#"<div class="drawer-side">"#,
                r#"<label for="nav-toggle" class="drawer-overlay" aria-label="close sidebar"></label>"#,
                r#"<aside class="bg-base-200 min-h-full w-80 p-4">Side</aside>"#,
                "</div></div>"
            )
        );
    }

    #[test]
    fn test_drawer_right_open_without_overlay() {
        let html = Drawer::new("Main", "Side")
            .with_side(DrawerSide::Right)
            .with_open(true)
            .with_overlay(false)
            .render_to_string();
        assert!(html.contains(r#"class="drawer drawer-end" data-component="drawer""#));
        assert!(html.contains(r#"class="drawer-toggle" checked"#));
        assert!(!html.contains("drawer-overlay"));
    }

    #[test]
    fn test_helpers_target_toggle() {
        let drawer = Drawer::new("m", "s");
        let open = drawer_toggle_button(drawer.id(), "Menu");
        let close = drawer_close_button(drawer.id(), "x");
        let target = drawer.toggle_id();
        for node in [open, close] {
            assert_eq!(
                node.as_element().and_then(|e| e.get_attr("for")),
                Some(target.as_str())
            );
        }
    }
}
