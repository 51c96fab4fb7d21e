//! Multi-line text control.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// `<textarea class="textarea" rows="3" cols="50">`.
///
/// The value is rendered as the element's text content. A zero `rows` or
/// `cols` omits the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textarea {
    control: Control,
    id: String,
    name: String,
    value: String,
    placeholder: String,
    rows: u32,
    cols: u32,
    disabled: bool,
    readonly: bool,
    required: bool,
}

impl Default for Textarea {
    fn default() -> Self {
        Self::new()
    }
}

impl Textarea {
    pub fn new() -> Self {
        Self {
            control: Control::new("textarea", "textarea", Defaults::Explicit),
            id: String::new(),
            name: String::new(),
            value: String::new(),
            placeholder: String::new(),
            rows: 3,
            cols: 50,
            disabled: false,
            readonly: false,
            required: false,
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_value => value: impl Into<String>,
        with_placeholder => placeholder: impl Into<String>,
        with_rows => rows: u32,
        with_cols => cols: u32,
        with_disabled => disabled: bool,
        with_readonly => readonly: bool,
        with_required => required: bool,
    }

    fn build(&self) -> Element {
        let mut elem = html::textarea()
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("placeholder", &self.placeholder);
        if self.rows > 0 {
            elem = elem.attr("rows", self.rows.to_string());
        }
        if self.cols > 0 {
            elem = elem.attr("cols", self.cols.to_string());
        }
        elem.flag_if(self.disabled, "disabled")
            .flag_if(self.readonly, "readonly")
            .flag_if(self.required, "required")
            .attrs(self.control.extra_attrs())
            .text(self.value.as_str())
    }
}

impl_control!(Textarea);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::modifier::Color;

    #[test]
    fn test_textarea_defaults() {
        assert_eq!(
            Textarea::new().render_to_string(),
            r#"<textarea class="textarea" rows="3" cols="50"></textarea>"#
        );
    }

    #[test]
    fn test_textarea_value_is_escaped_content() {
        let area = Textarea::new()
            .with_name("bio")
            .with_rows(0)
            .with_value("a < b")
            .with_color(Color::Primary);
        assert_eq!(
            area.render_to_string(),
            r#"<textarea class="textarea textarea-primary" name="bio" cols="50">a &lt; b</textarea>"#
        );
    }
}
