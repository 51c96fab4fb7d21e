//! File picker.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// `<input type="file" class="file-input">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    control: Control,
    id: String,
    name: String,
    accept: String,
    multiple: bool,
    disabled: bool,
}

impl Default for FileInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileInput {
    pub fn new() -> Self {
        Self {
            control: Control::new("file-input", "file-input", Defaults::Explicit),
            id: String::new(),
            name: String::new(),
            accept: String::new(),
            multiple: false,
            disabled: false,
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        /// Accepted types, e.g. `image/*,.pdf`.
        with_accept => accept: impl Into<String>,
        with_multiple => multiple: bool,
        with_disabled => disabled: bool,
    }

    fn build(&self) -> Element {
        html::input()
            .attr("type", "file")
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("accept", &self.accept)
            .flag_if(self.multiple, "multiple")
            .flag_if(self.disabled, "disabled")
            .attrs(self.control.extra_attrs())
    }
}

impl_control!(FileInput);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::modifier::Size;

    #[test]
    fn test_file_input() {
        let input = FileInput::new()
            .with_name("docs")
            .with_accept("image/*,.pdf")
            .with_multiple(true)
            .with_size(Size::Small);
        assert_eq!(
            input.render_to_string(),
            r#"<input type="file" class="file-input file-input-sm" name="docs" accept="image/*,.pdf" multiple>"#
        );
    }
}
