//! `<select>` control with options.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::{Element, Node};

/// One `<option>` of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn to_node(&self) -> Node {
        html::option()
            .attr("value", self.value.as_str())
            .flag_if(self.selected, "selected")
            .flag_if(self.disabled, "disabled")
            .text(self.label.as_str())
            .into()
    }
}

/// `<select class="select select-bordered">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    control: Control,
    id: String,
    name: String,
    value: String,
    disabled: bool,
    required: bool,
    multiple: bool,
    /// Visible rows; 0 omits the attribute
    visible_rows: u32,
    options: Vec<SelectOption>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    pub fn new() -> Self {
        Self {
            control: Control::new("select select-bordered", "select", Defaults::Elide),
            id: String::new(),
            name: String::new(),
            value: String::new(),
            disabled: false,
            required: false,
            multiple: false,
            visible_rows: 0,
            options: Vec::new(),
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_value => value: impl Into<String>,
        with_disabled => disabled: bool,
        with_required => required: bool,
        with_multiple => multiple: bool,
        /// Number of visible rows (`size` attribute).
        with_visible_rows => visible_rows: u32,
    }

    /// Replace the option list.
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Append one option.
    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    fn build(&self) -> Element {
        let mut elem = html::select()
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("value", &self.value)
            .flag_if(self.disabled, "disabled")
            .flag_if(self.required, "required")
            .flag_if(self.multiple, "multiple");
        if self.visible_rows > 0 {
            elem = elem.attr("size", self.visible_rows.to_string());
        }
        elem.attrs(self.control.extra_attrs())
            .children(self.options.iter().map(SelectOption::to_node))
    }
}

impl_control!(Select);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::modifier::Size;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_options() {
        let select = Select::new()
            .with_name("fruit")
            .with_options([
                SelectOption::new("", "Pick one").disabled(true),
                SelectOption::new("apple", "Apple").selected(true),
                SelectOption::new("pear", "Pear"),
            ])
            .with_size(Size::Small);
        assert_eq!(
            select.render_to_string(),
            concat!(
                r#"<select class="select select-bordered select-sm" name="fruit">"#,
                r#"<option value="" disabled>Pick one</option>"#,
                r#"<option value="apple" selected>Apple</option>"#,
                r#"<option value="pear">Pear</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_select_multiple_rows() {
        let select = Select::new()
            .with_multiple(true)
            .with_visible_rows(4)
            .option(SelectOption::new("a", "A"));
        assert_eq!(
            select.render_to_string(),
            r#"<select class="select select-bordered" multiple size="4"><option value="a">A</option></select>"#
        );
    }

    #[test]
    fn test_select_options_are_copied() {
        let base = Select::new().option(SelectOption::new("a", "A"));
        let more = base.clone().option(SelectOption::new("b", "B"));
        assert_eq!(base.options().len(), 1);
        assert_eq!(more.options().len(), 2);
    }
}
