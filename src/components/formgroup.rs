//! Labeled form field wrapper.

use super::shell::Shell;
use crate::attr::{Attr, AttrsExt};
use crate::component::Component;
use crate::html;
use crate::modifier::Modifier;
use crate::node::Node;

/// `<div class="form-control">` holding a label, an optional description,
/// the wrapped control and an optional error message.
///
/// The control is kept as a node and spliced into the tree as is.
///
/// ```ignore
/// let field = FormGroup::new()
///     .with_label("Email")
///     .with_required(true)
///     .with_input(Input::new().with_type(InputType::Email));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormGroup {
    shell: Shell,
    id: String,
    label: String,
    description: String,
    required: bool,
    error: String,
    input: Option<Node>,
}

impl Default for FormGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGroup {
    pub fn new() -> Self {
        Self {
            shell: Shell::new("form-control"),
            id: String::new(),
            label: String::new(),
            description: String::new(),
            required: false,
            error: String::new(),
            input: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append ` *` to the label.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// Wrapped control; any component or node.
    pub fn with_input(mut self, input: impl Into<Node>) -> Self {
        self.input = Some(input.into());
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

    pub fn input(&self) -> Option<&Node> {
        self.input.as_ref()
    }

    fn note(class: &str, text: &str) -> Option<Node> {
        (!text.is_empty()).then(|| html::label().attr("class", class).text(text).into())
    }
}

impl Component for FormGroup {
    fn to_node(&self) -> Node {
        let label = (!self.label.is_empty()).then(|| {
            html::label()
                .attr("class", "label-text")
                .text(self.label.as_str())
                .child(Node::when(self.required, " *"))
        });
        let mut outer = html::div().attrs([self.shell.classes.to_attr()]);
        outer = outer
            .attr_nonempty("id", &self.id)
            .attrs(self.shell.attrs.iter().cloned());
        outer
            .child(label.map(Node::from))
            .child(Self::note("label-text-alt", &self.description))
            .child(self.input.clone())
            .child(Self::note("label-text-alt text-error", &self.error))
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        self.shell.apply_extra(modifier);
    }
}

impl_into_node!(FormGroup);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Input;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_group_full() {
        let group = FormGroup::new()
            .with_id("g1")
            .with_label("Email")
            .with_required(true)
            .with_description("We never share it")
            .with_input(Input::new().with_name("email"))
            .with_error("Required");
        assert_eq!(
            group.render_to_string(),
            concat!(
                r#"<div class="form-control" id="g1">"#,
                r#"<label class="label-text">Email *</label>"#,
                r#"<label class="label-text-alt">We never share it</label>"#,
                r#"<input type="text" class="input input-bordered" name="email">"#,
                r#"<label class="label-text-alt text-error">Required</label>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_form_group_input_is_a_node() {
        let group = FormGroup::new().with_input(Input::new().with_id("x"));
        let node = group.to_node();
        let input = node.find(|e| e.tag == "input");
        assert_eq!(input.and_then(|e| e.id()), Some("x"));
    }

    #[test]
    fn test_form_group_empty() {
        assert_eq!(
            FormGroup::new().render_to_string(),
            r#"<div class="form-control"></div>"#
        );
    }
}
