//! Menu attached to a trigger button.
//!
//! Markup targets the FlyonUI dropdown plugin (the Preline `HSDropdown`
//! runtime): the container, trigger and menu carry `data-hs-dropdown`,
//! `data-hs-dropdown-toggle` and `data-hs-dropdown-menu`. No other marker
//! convention is emitted.

use compact_str::format_compact;

use crate::attr::{Attr, Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{DropdownPosition, Modifier};
use crate::node::Node;

const MENU_CLASS: &str = "dropdown-menu dropdown-open:opacity-100 hidden min-w-60";
const AUTO_CLOSE: Axis = Axis::Flag("auto-close");

/// `<div class="dropdown relative inline-flex" data-hs-dropdown>` holding a
/// `<button>` trigger and a `<ul role="menu">`.
///
/// The trigger id is `<id>-toggle` and the menu is labelled by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    id: String,
    trigger: Node,
    items: Vec<Node>,
    classes: Classes,
    attrs: Attrs,
    position: DropdownPosition,
    auto_close: bool,
    disabled: bool,
}

impl Dropdown {
    pub fn new<I>(trigger: impl Into<Node>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut dropdown = Self {
            id: format!("dropdown-{}", generate_id()),
            trigger: trigger.into(),
            items: items.into_iter().map(Into::into).collect(),
            classes: Classes::new("dropdown relative inline-flex"),
            attrs: Attrs::new(),
            position: DropdownPosition::Bottom,
            auto_close: true,
            disabled: false,
        };
        dropdown.apply_modifier(&DropdownPosition::Bottom.into());
        dropdown.set_auto_close(true);
        dropdown
    }

    fn set_auto_close(&mut self, on: bool) {
        self.auto_close = on;
        let class = if on { "[--auto-close:inside]" } else { "[--auto-close:outside]" };
        self.classes.set(AUTO_CLOSE, class);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_position(mut self, position: DropdownPosition) -> Self {
        self.apply_modifier(&position.into());
        self
    }

    /// Close when an item inside the menu is clicked. When off, only an
    /// outside click closes the menu.
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.set_auto_close(auto_close);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push_custom(class);
        self
    }

    pub fn with_attr(
        mut self,
        name: impl Into<compact_str::CompactString>,
        value: impl Into<String>,
    ) -> Self {
        self.attrs.merge_attr(Attr::new(name, value));
        self
    }

    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> DropdownPosition {
        self.position
    }

    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }
}

impl Component for Dropdown {
    fn to_node(&self) -> Node {
        let toggle = self.toggle_id();
        let trigger = html::button()
            .attr("id", toggle.as_str())
            .attr("type", "button")
            .attr("class", "dropdown-toggle")
            .flag("data-hs-dropdown-toggle")
            .attr("aria-expanded", "false")
            .attr("aria-haspopup", "true")
            .flag_if(self.disabled, "disabled")
            .child(self.trigger.clone());
        let menu = html::ul()
            .attr("class", MENU_CLASS)
            .flag("data-hs-dropdown-menu")
            .attr("role", "menu")
            .attr("aria-orientation", "vertical")
            .attr("aria-labelledby", toggle)
            .children(self.items.iter().cloned());
        html::div()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .flag("data-hs-dropdown")
            .attrs(self.attrs.iter().cloned())
            .child(trigger)
            .child(menu)
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::DropdownPosition(position) => {
                self.position = *position;
                // Bottom is the plugin default and needs no class.
                let class = match position {
                    DropdownPosition::Bottom => "",
                    other => other.token(),
                };
                self.classes.set(Axis::Position, class);
            }
            Modifier::Size(size) => {
                self.classes.set(Axis::Size, format_compact!("dropdown-{size}"));
            }
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }
}

impl_into_node!(Dropdown);

/// Menu entry `<li><a class="dropdown-item" role="menuitem">`.
///
/// Attribute nodes among `content` (an `href`, say) land on the anchor.
pub fn dropdown_item<I>(content: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    html::li()
        .child(
            html::a()
                .attr("class", "dropdown-item")
                .attr("role", "menuitem")
                .children(content.into_iter().map(Into::into)),
        )
        .into()
}

/// Horizontal rule between menu groups.
pub fn dropdown_divider() -> Node {
    html::li()
        .child(html::hr().attr("class", "my-1"))
        .into()
}

/// Non-interactive group heading.
pub fn dropdown_header(text: impl Into<String>) -> Node {
    html::li()
        .child(
            html::div()
                .attr("class", "dropdown-header font-semibold text-base-content/70")
                .text(text),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Size;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dropdown_markup() {
        let dropdown = Dropdown::new(
            "Actions",
            [
                dropdown_header("File"),
                dropdown_item([html::href("/open"), html::text("Open")]),
                dropdown_divider(),
            ],
        )
        .with_id("dd");
        assert_eq!(
            dropdown.render_to_string(),
            concat!(
                r#"<div id="dd" class="dropdown relative inline-flex [--auto-close:inside]" data-hs-dropdown>"#,
                r#"<button id="dd-toggle" type="button" class="dropdown-toggle" data-hs-dropdown-toggle aria-expanded="false" aria-haspopup="true">Actions</button>"#,
                r#"<ul class="dropdown-menu dropdown-open:opacity-100 hidden min-w-60" data-hs-dropdown-menu role="menu" aria-orientation="vertical" aria-labelledby="dd-toggle">"#,
                r#"<li><div class="dropdown-header font-semibold text-base-content/70">File</div></li>"#,
                r#"<li><a class="dropdown-item" role="menuitem" href="/open">Open</a></li>"#,
                r#"<li><hr class="my-1"></li>"#,
                "</ul></div>"
            )
        );
    }

    #[test]
    fn test_position_and_auto_close() {
        let dropdown = Dropdown::new("x", Vec::<Node>::new())
            .with_position(DropdownPosition::TopEnd)
            .with_auto_close(false);
        assert_eq!(dropdown.position(), DropdownPosition::TopEnd);
        assert!(dropdown.render_to_string().contains(
            r#"class="dropdown relative inline-flex dropdown-top dropdown-end [--auto-close:outside]""#
        ));
    }

    #[test]
    fn test_disabled_trigger_and_size() {
        let html = Dropdown::new("x", Vec::<Node>::new())
            .with_disabled(true)
            .with([Size::Small])
            .render_to_string();
        assert!(html.contains(r#"aria-haspopup="true" disabled>"#));
        assert!(html.contains("dropdown-sm"));
    }

    #[test]
    fn test_menu_labelled_by_trigger() {
        let dropdown = Dropdown::new("x", [dropdown_item(["a"])]);
        let node = dropdown.to_node();
        let trigger = node.find(|e| e.tag == "button").and_then(|e| e.id());
        let label = node
            .find(|e| e.tag == "ul")
            .and_then(|e| e.get_attr("aria-labelledby"));
        assert_eq!(trigger, label);
        assert!(dropdown.id().starts_with("dropdown-"));
    }
}
