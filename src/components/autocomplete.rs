//! Text input with a suggestion menu.

use super::combobox::{ComboboxOption, MENU_CLASS};
use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::{Element, Node};

/// Suggestion entry; same shape as a combobox option.
pub type AutocompleteOption = ComboboxOption;

/// `<div class="dropdown">` holding a text input and a suggestion `<ul>`.
///
/// The menu is always emitted, even when empty. Suggestions render as
/// links carrying `data-value`. Primary color and Medium size emit no class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocomplete {
    control: Control,
    id: String,
    name: String,
    placeholder: String,
    value: String,
    disabled: bool,
    options: Vec<AutocompleteOption>,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new()
    }
}

impl Autocomplete {
    pub fn new() -> Self {
        Self {
            control: Control::new("input input-bordered", "input", Defaults::Elide),
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

    pub fn with_options(mut self, options: impl IntoIterator<Item = AutocompleteOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Suggestions whose value and label are the same string.
    pub fn with_suggestions<I, S>(self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_options(suggestions.into_iter().map(|s| {
            let s = s.into();
            AutocompleteOption::new(s.clone(), s)
        }))
    }

    pub fn options(&self) -> &[AutocompleteOption] {
        &self.options
    }

    fn item(option: &AutocompleteOption) -> Node {
        let link = html::a()
            .attr("href", "#")
            .attr("data-value", option.value.as_str())
            .flag_if(option.disabled, "aria-disabled")
            .text(option.label.as_str());
        html::li().child(link).into()
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
        let menu = html::ul()
            .attr("class", MENU_CLASS)
            .children(self.options.iter().map(Self::item));
        html::div().attr("class", "dropdown").child(input).child(menu)
    }
}

impl_control!(Autocomplete);
