//! Checkbox and radio inputs.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

macro_rules! choice_input {
    ($(#[$meta:meta])* $name:ident { input_type: $ty:literal, base: $base:literal }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            control: Control,
            id: String,
            name: String,
            value: String,
            checked: bool,
            disabled: bool,
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    control: Control::new($base, $base, Defaults::Elide),
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

            pub fn is_checked(&self) -> bool {
                self.checked
            }

            fn build(&self) -> Element {
                html::input()
                    .attr("type", $ty)
                    .attrs([self.control.class_attr()])
                    .attr_nonempty("id", &self.id)
                    .attr_nonempty("name", &self.name)
                    .attr_nonempty("value", &self.value)
                    .flag_if(self.checked, "checked")
                    .flag_if(self.disabled, "disabled")
                    .attrs(self.control.extra_attrs())
            }
        }

        impl_control!($name);
    };
}

choice_input! {
    /// `<input type="checkbox" class="checkbox">`.
    Checkbox { input_type: "checkbox", base: "checkbox" }
}

choice_input! {
    /// `<input type="radio" class="radio">`.
    Radio { input_type: "radio", base: "radio" }
}
