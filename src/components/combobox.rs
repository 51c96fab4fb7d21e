//! Text input with a selectable option menu.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::{Element, Node};

/// Classes of the option menu shared by [`Combobox`] and
/// [`Autocomplete`](super::Autocomplete).
pub(crate) const MENU_CLASS: &str = "dropdown-content menu bg-base-100 rounded-box z-[1] w-52 p-2 shadow";

/// One entry of a combobox or autocomplete menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComboboxOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl ComboboxOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// `<div class="dropdown">` holding a text input and, when options exist,
/// a `<ul>` menu whose items carry `data-value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combobox {
    control: Control,
    id: String,
    name: String,
    placeholder: String,
    value: String,
    disabled: bool,
    options: Vec<ComboboxOption>,
}

impl Default for Combobox {
    fn default() -> Self {
        Self::new()
    }
}

impl Combobox {
    pub fn new() -> Self {
        Self {
            control: Control::new("input input-bordered", "input", Defaults::Explicit),
            id: String::new(),
            name: String::new(),
            placeholder: String::new(),
            value: String::new(),
            disabled: false,
            options: Vec::new(),
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_placeholder => placeholder: impl Into<String>,
        with_value => value: impl Into<String>,
        with_disabled => disabled: bool,
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = ComboboxOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn options(&self) -> &[ComboboxOption] {
        &self.options
    }

    fn item(option: &ComboboxOption) -> Node {
        html::li()
            .attr("class", "dropdown-item")
            .attr("data-value", option.value.as_str())
            .flag_if(option.disabled, "disabled")
            .text(option.label.as_str())
            .into()
    }

    fn build(&self) -> Element {
        let input = html::input()
            .attr("type", "text")
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("placeholder", &self.placeholder)
            .attr_nonempty("value", &self.value)
            .flag_if(self.disabled, "disabled")
            .attrs(self.control.extra_attrs());
        let menu = (!self.options.is_empty()).then(|| {
            html::ul()
                .attr("class", MENU_CLASS)
                .children(self.options.iter().map(Self::item))
        });
        html::div()
            .attr("class", "dropdown")
            .child(input)
            .child(menu.map(Node::from))
    }
}

impl_control!(Combobox);
