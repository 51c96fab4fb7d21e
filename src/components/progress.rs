//! Progress bar.

use compact_str::CompactString;

use super::shell::Shell;
use crate::attr::{Attr, AttrsExt};
use crate::component::Component;
use crate::modifier::{Color, Modifier, Size};
use crate::node::Node;

/// `<progress class="progress" max=".." value="..">`.
///
/// Values are passed through unchanged; a value outside `0..=max` is left
/// for the browser to clamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    shell: Shell,
    value: Option<i64>,
    max: i64,
}

impl Progress {
    /// Determinate progress out of 100.
    pub fn new(value: i64) -> Self {
        Self {
            shell: Shell::new("progress"),
            value: Some(value),
            max: 100,
        }
    }

    /// Indeterminate progress: `value` is omitted.
    pub fn indeterminate() -> Self {
        Self {
            value: None,
            ..Self::new(0)
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.shell.apply_global("progress", &color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.shell.apply_global("progress", &size.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.shell.classes.push_custom(class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        self.shell.attrs.merge_attr(Attr::new(name, value));
        self
    }

    pub fn is_indeterminate(&self) -> bool {
        self.value.is_none()
    }
}

impl Component for Progress {
    fn to_node(&self) -> Node {
        let mut elem = crate::html::progress()
            .attrs([self.shell.classes.to_attr()])
            .attr("max", self.max.to_string());
        if let Some(value) = self.value {
            elem = elem.attr("value", value.to_string());
        }
        elem.attrs(self.shell.attrs.iter().cloned()).into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("progress", modifier);
            }
            other => self.shell.apply_extra(other),
        }
    }
}

impl_into_node!(Progress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_boundaries() {
        assert_eq!(
            Progress::new(0).render_to_string(),
            r#"<progress class="progress" max="100" value="0"></progress>"#
        );
        assert_eq!(
            Progress::new(50).with_max(50).render_to_string(),
            r#"<progress class="progress" max="50" value="50"></progress>"#
        );
        assert_eq!(
            Progress::indeterminate().render_to_string(),
            r#"<progress class="progress" max="100"></progress>"#
        );
    }

    #[test]
    fn test_progress_out_of_range_passes_through() {
        let html = Progress::new(150).with_color(Color::Success).render_to_string();
        assert_eq!(
            html,
            r#"<progress class="progress progress-success" max="100" value="150"></progress>"#
        );
    }

    #[test]
    fn test_progress_ignores_variant() {
        let bar = Progress::new(10).with([crate::modifier::Variant::Outline]);
        assert!(!bar.render_to_string().contains("outline"));
    }
}
