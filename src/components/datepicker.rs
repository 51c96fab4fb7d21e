//! Native date input.

use chrono::NaiveDate;

use super::control::{Control, Defaults, impl_control, setters};
use crate::html;
use crate::node::Element;

/// Wire format of `<input type="date">` values.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// `<input type="date" class="input input-bordered">`.
///
/// `value`, `min` and `max` are written as `YYYY-MM-DD`. A `min` later than
/// `max` is emitted as given. Medium size emits no class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    control: Control,
    id: String,
    name: String,
    placeholder: String,
    value: Option<NaiveDate>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    disabled: bool,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    pub fn new() -> Self {
        Self {
            control: Control::new("input input-bordered", "input", Defaults::ElideSize),
            id: String::new(),
            name: String::new(),
            placeholder: String::new(),
            value: None,
            min: None,
            max: None,
            disabled: false,
        }
    }

    setters! {
        with_id => id: impl Into<String>,
        with_name => name: impl Into<String>,
        with_placeholder => placeholder: impl Into<String>,
        with_disabled => disabled: bool,
    }

    pub fn with_value(mut self, date: NaiveDate) -> Self {
        self.value = Some(date);
        self
    }

    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min = Some(date);
        self
    }

    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max = Some(date);
        self
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    fn build(&self) -> Element {
        let mut elem = html::input()
            .attr("type", "date")
            .attrs([self.control.class_attr()])
            .attr_nonempty("id", &self.id)
            .attr_nonempty("name", &self.name)
            .attr_nonempty("placeholder", &self.placeholder);
        if let Some(date) = self.value {
            elem = elem.attr("value", date.format(DATE_FORMAT).to_string());
        }
        elem = elem.flag_if(self.disabled, "disabled");
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(date) = bound {
                elem = elem.attr(name, date.format(DATE_FORMAT).to_string());
            }
        }
        elem.attrs(self.control.extra_attrs())
    }
}

impl_control!(DatePicker);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::modifier::{Color, Size};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_datepicker_empty() {
        assert_eq!(
            DatePicker::new().render_to_string(),
            r#"<input type="date" class="input input-bordered">"#
        );
    }

    #[test]
    fn test_datepicker_iso_dates() {
        let picker = DatePicker::new()
            .with_name("start")
            .with_value(date(2024, 3, 7))
            .with_min_date(date(2024, 1, 1))
            .with_max_date(date(2024, 12, 31))
            .with_color(Color::Primary)
            .with_attr("data-locale", "en");
        assert_eq!(
            picker.render_to_string(),
            r#"<input type="date" class="input input-bordered input-primary" name="start" value="2024-03-07" min="2024-01-01" max="2024-12-31" data-locale="en">"#
        );
    }

    #[test]
    fn test_datepicker_medium_size_elided() {
        let medium = DatePicker::new().with_size(Size::Medium);
        assert_eq!(
            medium.render_to_string(),
            r#"<input type="date" class="input input-bordered">"#
        );
        let large = medium.with_size(Size::Large);
        assert!(large.render_to_string().contains(r#"class="input input-bordered input-lg""#));
    }

    #[test]
    fn test_datepicker_inverted_bounds_pass_through() {
        let picker = DatePicker::new()
            .with_min_date(date(2025, 1, 1))
            .with_max_date(date(2024, 1, 1));
        let html = picker.render_to_string();
        assert!(html.contains(r#"min="2025-01-01" max="2024-01-01""#));
    }
}
