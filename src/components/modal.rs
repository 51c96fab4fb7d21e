//! Dialog overlay.
//!
//! ```ignore
//! let confirm = Modal::new("Delete file?", ["This cannot be undone."])
//!     .with_size(ModalSize::Small)
//!     .with_actions([
//!         modal_close_action("Cancel", Color::Neutral),
//!         modal_action("Delete", Color::Error, [html::attr("hx-delete", "/file/1")]),
//!     ]);
//! ```

use crate::attr::{Attr, Attrs, AttrsExt};
use crate::classes::{Axis, Classes};
use crate::component::Component;
use crate::html;
use crate::id::generate_id;
use crate::modifier::{Color, Modifier, ModalPosition, ModalSize, Size};
use crate::node::Node;

const BASE: &str = "overlay modal overlay-open:opacity-100 overlay-open:duration-300";

/// `<div role="dialog" aria-modal="true">` wrapping
/// `modal-dialog > modal-content > (header, body, footer)`.
///
/// The header holds an `<h3 id="<id>-title">` and, when closable, a close
/// button with `data-overlay="#<id>"`. The footer is only emitted when
/// there are actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    id: String,
    title: String,
    content: Vec<Node>,
    actions: Vec<Node>,
    classes: Classes,
    dialog_classes: Classes,
    attrs: Attrs,
    size: ModalSize,
    closable: bool,
    backdrop: bool,
    open: bool,
    keyboard: bool,
}

impl Modal {
    pub fn new<I>(title: impl Into<String>, content: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut classes = Classes::new(BASE);
        classes.set_flag("hidden", true);
        Self {
            id: format!("modal-{}", generate_id()),
            title: title.into(),
            content: content.into_iter().map(Into::into).collect(),
            actions: Vec::new(),
            classes,
            dialog_classes: Classes::new("modal-dialog"),
            attrs: Attrs::new(),
            size: ModalSize::Default,
            closable: true,
            backdrop: true,
            open: false,
            keyboard: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.apply_modifier(&size.into());
        self
    }

    pub fn with_position(mut self, position: ModalPosition) -> Self {
        self.apply_modifier(&position.into());
        self
    }

    /// Show the header close button. A modal that is not closable also
    /// opts out of keyboard dismissal.
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Render visible; closed modals carry the `hidden` class.
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self.classes.set_flag("hidden", !open);
        self
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Footer buttons, see [`modal_action`] and [`modal_close_action`].
    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
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

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> ModalSize {
        self.size
    }

    pub fn title_id(&self) -> String {
        format!("{}-title", self.id)
    }

    fn header(&self) -> Option<Node> {
        let title = (!self.title.is_empty()).then(|| {
            html::h3()
                .attr("id", self.title_id())
                .attr("class", "modal-title")
                .text(self.title.as_str())
        });
        let close = self.closable.then(|| {
            html::button()
                .attr("type", "button")
                .attr("class", "btn btn-text btn-circle btn-sm absolute end-3 top-3")
                .attr("data-overlay", format!("#{}", self.id))
                .attr("aria-label", "Close")
                .child(html::span().attr("class", "icon-[tabler--x] size-4"))
        });
        if title.is_none() && close.is_none() {
            return None;
        }
        Some(
            html::div()
                .attr("class", "modal-header")
                .child(title.map(Node::from))
                .child(close.map(Node::from))
                .into(),
        )
    }
}

/// Global sizes map onto dialog widths; other values select Medium.
fn modal_size(size: Size) -> ModalSize {
    match size {
        Size::Small => ModalSize::Small,
        Size::Large => ModalSize::Large,
        _ => ModalSize::Medium,
    }
}

impl Component for Modal {
    fn to_node(&self) -> Node {
        let body = html::div()
            .attr("class", "modal-body")
            .children(self.content.iter().cloned());
        let footer = (!self.actions.is_empty()).then(|| {
            html::div()
                .attr("class", "modal-footer")
                .children(self.actions.iter().cloned())
        });
        let content = html::div()
            .attr("class", "modal-content")
            .child(self.header())
            .child(body)
            .child(footer.map(Node::from));
        let dialog = html::div()
            .attrs([self.dialog_classes.to_attr()])
            .child(content);
        html::div()
            .attr("id", self.id.as_str())
            .attrs([self.classes.to_attr()])
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attrs(
                (!self.title.is_empty()).then(|| Attr::new("aria-labelledby", self.title_id())),
            )
            .attr("tabindex", "-1")
            .attrs(
                (!self.keyboard || !self.closable)
                    .then(|| Attr::new("data-overlay-keyboard", "false")),
            )
            .attrs((!self.backdrop).then(|| Attr::new("data-overlay-backdrop", "false")))
            .attrs(self.attrs.iter().cloned())
            .child(dialog)
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::ModalSize(size) => {
                self.size = *size;
                self.dialog_classes.set(Axis::Size, size.token());
            }
            Modifier::Size(size) => self.apply_modifier(&modal_size(*size).into()),
            Modifier::ModalPosition(position) => {
                self.classes.set(Axis::Position, position.token());
            }
            Modifier::Class(class) => self.classes.push_custom(class),
            Modifier::Attr(attr) => self.attrs.merge_attr(attr.clone()),
            _ => {}
        }
    }
}

impl_into_node!(Modal);

/// Footer button `btn btn-<color>` with extra attribute nodes.
pub fn modal_action<I>(text: impl Into<String>, color: Color, attrs: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    html::button()
        .attr("type", "button")
        .attr("class", format!("btn btn-{color}"))
        .children(attrs.into_iter().map(Into::into))
        .text(text)
        .into()
}

/// Footer button that also carries the `modal-close` marker class.
pub fn modal_close_action(text: impl Into<String>, color: Color) -> Node {
    modal_action(text, color, [html::class("modal-close")])
}
