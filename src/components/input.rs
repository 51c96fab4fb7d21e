//! Text-like `<input>` control.

use std::fmt;

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// `type` attribute of an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Url,
    Tel,
    Search,
    Date,
    Time,
    DatetimeLocal,
}

impl InputType {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// `<input class="input input-bordered">`.
///
/// Primary color and Medium size are the defaults and emit no class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    control: Control,
    kind: InputType,
    id: String,
    name: String,
    value: String,
    placeholder: String,
    disabled: bool,
    readonly: bool,
    required: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            control: Control::new("input input-bordered", "input", Defaults::Elide),
            kind: InputType::Text,
            id: String::new(),
            name: String::new(),
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            readonly: false,
            required: false,
        }
    }

    setters! {
        with_type => kind: InputType,
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_value => value: impl Into<String>,
        with_placeholder => placeholder: impl Into<String>,
        with_disabled => disabled: bool,
        with_readonly => readonly: bool,
        with_required => required: bool,
    }

    pub fn kind(&self) -> InputType {
        self.kind
    }

    fn build(&self) -> Element {
        html::input()
            .attr("type", self.kind.token())
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("value", &self.value)
            .attr_nonempty("placeholder", &self.placeholder)
            .flag_if(self.disabled, "disabled")
            .flag_if(self.readonly, "readonly")
            .flag_if(self.required, "required")
            .attrs(self.control.extra_attrs())
    }
}

impl_control!(Input);
