//! Range slider.

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// `<input type="range" class="range">`.
///
/// Bounds, step and value are written in their shortest decimal form
/// (`0.5`, `100`). They are not validated: a zero step or a value outside
/// `min..=max` is emitted unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    control: Control,
    id: String,
    name: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    disabled: bool,
}

impl Default for Range {
    fn default() -> Self {
        Self::new()
    }
}

impl Range {
    /// Slider over `0..=100` with step 1, starting at 50.
    pub fn new() -> Self {
        Self {
            control: Control::new("range", "range", Defaults::Elide),
            id: String::new(),
            name: String::new(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 50.0,
            disabled: false,
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_min => min: f64,
        with_max => max: f64,
        with_step => step: f64,
        with_value => value: f64,
        with_disabled => disabled: bool,
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    fn build(&self) -> Element {
        html::input()
            .attr("type", "range")
            .attrs([self.control.class_attr()])
            .attr("min", self.min.to_string())
            .attr("max", self.max.to_string())
            .attr("step", self.step.to_string())
            .attr("value", self.value.to_string())
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .flag_if(self.disabled, "disabled")
            .attrs(self.control.extra_attrs())
    }
}

impl_control!(Range);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::modifier::Color;

    #[test]
    fn test_range_defaults() {
        assert_eq!(
            Range::new().render_to_string(),
            r#"<input type="range" class="range" min="0" max="100" step="1" value="50">"#
        );
    }

    #[test]
    fn test_range_float_bounds() {
        let range = Range::new()
            .with_min(0.5)
            .with_max(10.5)
            .with_step(0.25)
            .with_value(5.75);
        assert_eq!(
            range.render_to_string(),
            r#"<input type="range" class="range" min="0.5" max="10.5" step="0.25" value="5.75">"#
        );
    }

    #[test]
    fn test_range_passes_nonsense_through() {
        let range = Range::new()
            .with_step(0.0)
            .with_value(-3.0)
            .with_name("vol")
            .with_color(Color::Warning);
        assert_eq!(
            range.render_to_string(),
            r#"<input type="range" class="range range-warning" min="0" max="100" step="0" value="-3" name="vol">"#
        );
    }
}
