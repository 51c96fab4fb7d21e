//! Inline validation message.

use super::shell::Shell;
use crate::attr::{Attr, AttrsExt};
use crate::classes::Axis;
use crate::component::Component;
use crate::html;
use crate::modifier::{Modifier, ValidationType};
use crate::node::Node;

/// `<label class="label-text-alt text-error">message</label>`.
///
/// Hidden by default; a hidden message renders nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    shell: Shell,
    id: String,
    message: String,
    kind: ValidationType,
    visible: bool,
}

impl Default for FormValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidation {
    pub fn new() -> Self {
        let mut validation = Self {
            shell: Shell::new("label-text-alt"),
            id: String::new(),
            message: String::new(),
            kind: ValidationType::Error,
            visible: false,
        };
        validation.apply_modifier(&ValidationType::Error.into());
        validation
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_type(mut self, kind: ValidationType) -> Self {
        self.apply_modifier(&kind.into());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.shell.classes.push_custom(class);
        self
    }

    pub fn with_attr(
        mut self,
        name: impl Into<compact_str::CompactString>,
        value: impl Into<String>,
    ) -> Self {
        self.shell.attrs.merge_attr(Attr::new(name, value));
        self
    }

    pub fn kind(&self) -> ValidationType {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for FormValidation {
    fn to_node(&self) -> Node {
        if !self.visible {
            return Node::none();
        }
        html::label()
            .attrs([self.shell.classes.to_attr()])
            .attr_nonempty("id", &self.id)
            .attrs(self.shell.attrs.iter().cloned())
            .text(self.message.as_str())
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::ValidationType(kind) => {
                self.kind = *kind;
                self.shell.facet(Axis::Kind, format!("text-{kind}"));
            }
            other => self.shell.apply_extra(other),
        }
    }
}

impl_into_node!(FormValidation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_renders_nothing() {
        let validation = FormValidation::new()
            .with_message("x")
            .with_type(ValidationType::Error)
            .with_visible(false);
        assert_eq!(validation.render_to_string(), "");
    }

    #[test]
    fn test_visible_message() {
        let validation = FormValidation::new()
            .with_id("email-error")
            .with_message("Looks good")
            .with_type(ValidationType::Success)
            .with_visible(true)
            .with_attr("aria-live", "polite");
        assert_eq!(
            validation.render_to_string(),
            r#"<label class="label-text-alt text-success" id="email-error" aria-live="polite">Looks good</label>"#
        );
    }

    #[test]
    fn test_default_type_is_error() {
        let validation = FormValidation::new().with_message("Bad").with_visible(true);
        assert_eq!(validation.kind(), ValidationType::Error);
        assert!(validation.render_to_string().contains("text-error"));
    }
}
