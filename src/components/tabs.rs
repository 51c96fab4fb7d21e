//! Tab bar with linked panels.

use compact_str::format_compact;

use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{Color, Modifier, Size, TabsSize, TabsVariant};
use crate::node::Node;

/// One tab and its panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub content: Node,
    pub active: bool,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: content.into(),
            active: false,
        }
    }

    /// Tab shown on first render.
    pub fn active(id: impl Into<String>, label: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            active: true,
            ..Self::new(id, label, content)
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn link(&self) -> Node {
        let class = if self.active { "tab tab-active" } else { "tab" };
        html::a()
            .attr("class", class)
            .attr("href", format!("#{}", self.id))
            .attr("data-tab-id", self.id.as_str())
            .text(self.label.as_str())
            .into()
    }

    fn panel(&self) -> Node {
        let class = if self.active { "tab-content" } else { "tab-content hidden" };
        html::div()
            .attr("id", self.id.as_str())
            .attr("class", class)
            .attr("data-tab-panel", self.id.as_str())
            .child(self.content.clone())
            .into()
    }
}

/// `<div class="tabs-container" data-component="tabs">` holding the tab
/// bar and the panel list. Inactive panels carry the `hidden` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    id: String,
    items: Vec<TabItem>,
    classes: Classes,
}

impl Tabs {
    pub fn new(items: impl IntoIterator<Item = TabItem>) -> Self {
        Self {
            id: generate_id(),
            items: items.into_iter().collect(),
            classes: Classes::new("tabs"),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_variant(mut self, variant: TabsVariant) -> Self {
        self.apply_modifier(&variant.into());
        self
    }

    pub fn with_size(mut self, size: TabsSize) -> Self {
        self.apply_modifier(&size.into());
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

    pub fn item(mut self, item: TabItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }
}

/// Global sizes map onto the four tab sizes; ExtraLarge falls back to Medium.
fn tabs_size(size: Size) -> TabsSize {
    match size {
        Size::ExtraSmall => TabsSize::ExtraSmall,
        Size::Small => TabsSize::Small,
        Size::Large => TabsSize::Large,
        Size::Medium | Size::ExtraLarge => TabsSize::Medium,
    }
}

impl Component for Tabs {
    fn to_node(&self) -> Node {
        let bar = html::div()
            .attrs([self.classes.to_attr()])
            .children(self.items.iter().map(TabItem::link));
        let panels = html::div()
            .attr("class", "tab-content-container")
            .children(self.items.iter().map(TabItem::panel));
        html::div()
            .attr("id", self.id.as_str())
            .attr("class", "tabs-container")
            .attr("data-component", "tabs")
            .child(bar)
            .child(panels)
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::TabsVariant(v) => self.classes.set(Axis::Variant, v.token()),
            Modifier::TabsSize(s) => self.classes.set(Axis::Size, s.token()),
            Modifier::Size(s) => self.classes.set(Axis::Size, tabs_size(*s).token()),
            Modifier::Color(c) => self.classes.set(Axis::Color, format_compact!("tabs-{c}")),
            Modifier::Class(class) => self.classes.push_custom(class),
            _ => {}
        }
    }
}

impl_into_node!(Tabs);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tabs_markup() {
        let tabs = Tabs::new([
            TabItem::active("t1", "One", "First"),
            TabItem::new("t2", "Two", "Second"),
        ])
        .with_id("tabs")
        .with_variant(TabsVariant::Lifted)
        .with_size(TabsSize::Small);
        assert_eq!(
            tabs.render_to_string(),
            concat!(
                r#"<div id="tabs" class="tabs-container" data-component="tabs">"#,
                r#"<div class="tabs tabs-lifted tabs-sm">"#,
                r##"<a class="tab tab-active" href="#t1" data-tab-id="t1">One</a>"##,
                r##"<a class="tab" href="#t2" data-tab-id="t2">Two</a>"##,
                "</div>",
                r#"<div class="tab-content-container">"#,
                r#"<div id="t1" class="tab-content" data-tab-panel="t1">First</div>"#,
                r#"<div id="t2" class="tab-content hidden" data-tab-panel="t2">Second</div>"#,
                "</div></div>"
            )
        );
    }

    #[test]
    fn test_single_tab_hidden_unless_active() {
        let active = Tabs::new([TabItem::active("only", "Only", "x")]).render_to_string();
        assert!(active.contains(r#"class="tab-content" data-tab-panel="only""#));
        let inactive = Tabs::new([TabItem::new("only", "Only", "x")]).render_to_string();
        assert!(inactive.contains(r#"class="tab-content hidden" data-tab-panel="only""#));
    }

    #[test]
    fn test_global_size_maps_to_tabs_size() {
        let tabs = Tabs::new([]).with_id("t").with(modifiers![Size::Large]);
        assert!(tabs.render_to_string().contains(r#"class="tabs tabs-lg""#));
        let medium = tabs.with(modifiers![Size::ExtraLarge]);
        assert!(medium.render_to_string().contains(r#"<div class="tabs">"#));
    }
}
