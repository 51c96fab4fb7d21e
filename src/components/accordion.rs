//! Group of collapsible sections.
//!
//! In single-open mode every item renders a radio input named
//! `<id>-accordion`, so opening one closes the others. In multiple-open
//! mode each item gets its own checkbox named `<id>-accordion-<item id>`.

use compact_str::format_compact;

use super::collapse::{content_panel, title_label, toggle_input};
use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{Color, Modifier};
use crate::node::Node;

/// One section of an [`Accordion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    pub content: Node,
    pub open: bool,
}

impl AccordionItem {
    /// Closed item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            open: false,
        }
    }

    /// Item rendered open.
    pub fn open(id: impl Into<String>, title: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            open: true,
            ..Self::new(id, title, content)
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// `<div class="collapse-group" data-component="accordion">`.
///
/// Several open items in single-open mode are emitted as given; browsers
/// keep only the last checked radio of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    id: String,
    items: Vec<AccordionItem>,
    multiple: bool,
    classes: Classes,
    item_classes: Classes,
}

impl Accordion {
    pub fn new(items: impl IntoIterator<Item = AccordionItem>) -> Self {
        Self {
            id: generate_id(),
            items: items.into_iter().collect(),
            multiple: false,
            classes: Classes::new("collapse-group"),
            item_classes: Classes::new("collapse collapse-arrow"),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Allow several items to be open at once.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Color of every item (`collapse-<color>`).
    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push_custom(class);
        self
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    fn item_node(&self, item: &AccordionItem) -> Node {
        let (kind, name) = if self.multiple {
            ("checkbox", format!("{}-accordion-{}", self.id, item.id))
        } else {
            ("radio", format!("{}-accordion", self.id))
        };
        html::div()
            .attrs([self.item_classes.to_attr()])
            .attr("data-accordion-item", item.id.as_str())
            .child(toggle_input(kind, &item.id, Some(&name), item.open))
            .child(title_label(&item.id, &item.title))
            .child(content_panel(&item.content))
            .into()
    }
}

impl Component for Accordion {
    fn to_node(&self) -> Node {
        if !self.multiple {
            let open = self.items.iter().filter(|item| item.open).count();
            if open > 1 {
                tracing::warn!(
                    id = %self.id,
                    open,
                    "single-open accordion has several open items; only the last stays checked"
                );
            }
        }
        let mode = if self.multiple { "data-multiple" } else { "data-single" };
        html::div()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .attr("data-component", "accordion")
            .attr(mode, "true")
            .children(self.items.iter().map(|item| self.item_node(item)))
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(c) => self
                .item_classes
                .set(Axis::Color, format_compact!("collapse-{c}")),
            Modifier::Class(class) => self.classes.push_custom(class),
            _ => {}
        }
    }
}

impl_into_node!(Accordion);
