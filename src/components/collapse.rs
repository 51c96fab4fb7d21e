//! Single collapsible section driven by a hidden checkbox.

use compact_str::format_compact;

use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{Color, Modifier};
use crate::node::{Element, Node};

/// Open/close marker drawn next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CollapseIndicator {
    #[default]
    Arrow,
    Plus,
}

impl CollapseIndicator {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Arrow => "collapse-arrow",
            Self::Plus => "collapse-plus",
        }
    }
}

/// Toggle input shared by collapse and accordion items.
pub(crate) fn toggle_input(kind: &str, id: &str, name: Option<&str>, checked: bool) -> Element {
    let mut input = html::input().attr("type", kind).attr("id", id);
    if let Some(name) = name {
        input = input.attr("name", name);
    }
    input
        .attr("class", "collapse-toggle")
        .flag_if(checked, "checked")
}

/// Clickable title targeting the toggle input `target`.
pub(crate) fn title_label(target: &str, title: &str) -> Element {
    html::label()
        .attr("for", target)
        .attr("class", "collapse-title text-xl font-medium cursor-pointer")
        .text(title)
}

pub(crate) fn content_panel(content: &Node) -> Element {
    html::div()
        .attr("class", "collapse-content")
        .child(html::div().attr("class", "pb-2").child(content.clone()))
}

/// `<div class="collapse collapse-arrow" data-component="collapse">`.
///
/// The toggle checkbox has id `<id>-toggle` and the title label targets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapse {
    id: String,
    title: String,
    content: Node,
    open: bool,
    indicator: Option<CollapseIndicator>,
    classes: Classes,
}

impl Collapse {
    pub fn new(title: impl Into<String>, content: impl Into<Node>) -> Self {
        let mut collapse = Self {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            open: false,
            indicator: None,
            classes: Classes::new("collapse"),
        };
        collapse.set_indicator(Some(CollapseIndicator::Arrow));
        collapse
    }

    fn set_indicator(&mut self, indicator: Option<CollapseIndicator>) {
        self.indicator = indicator;
        self.classes
            .set(Axis::Kind, indicator.map_or("", CollapseIndicator::class));
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Show the arrow marker. Turning it on removes the plus marker.
    pub fn with_arrow(mut self, on: bool) -> Self {
        if on {
            self.set_indicator(Some(CollapseIndicator::Arrow));
        } else if self.indicator == Some(CollapseIndicator::Arrow) {
            self.set_indicator(None);
        }
        self
    }

    /// Show the plus marker. Turning it on removes the arrow marker.
    pub fn with_plus(mut self, on: bool) -> Self {
        if on {
            self.set_indicator(Some(CollapseIndicator::Plus));
        } else if self.indicator == Some(CollapseIndicator::Plus) {
            self.set_indicator(None);
        }
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

    pub fn indicator(&self) -> Option<CollapseIndicator> {
        self.indicator
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }
}

impl Component for Collapse {
    fn to_node(&self) -> Node {
        let toggle = self.toggle_id();
        html::div()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .attr("data-component", "collapse")
            .child(toggle_input("checkbox", &toggle, None, self.open))
            .child(title_label(&toggle, &self.title))
            .child(content_panel(&self.content))
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(c) => self.classes.set(Axis::Color, format_compact!("collapse-{c}")),
            Modifier::Class(class) => self.classes.push_custom(class),
            _ => {}
        }
    }
}

impl_into_node!(Collapse);
