//! Switch-style checkbox.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// `<input type="checkbox" class="toggle">`.
///
/// Color and size classes are emitted whenever set, including Primary
/// and Medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    control: Control,
    id: String,
    name: String,
    value: String,
    checked: bool,
    disabled: bool,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Toggle {
    pub fn new() -> Self {
        Self {
            control: Control::new("toggle", "toggle", Defaults::Explicit),
            id: String::new(),
            name: String::new(),
            value: String::new(),
            checked: false,
            disabled: false,
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_value => value: impl Into<String>,
        with_checked => checked: bool,
        with_disabled => disabled: bool,
    }

    fn build(&self) -> Element {
        html::input()
            .attr("type", "checkbox")
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("value", &self.value)
            .flag_if(self.checked, "checked")
            .flag_if(self.disabled, "disabled")
            .attrs(self.control.extra_attrs())
    }
}

impl_control!(Toggle);
