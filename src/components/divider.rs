//! Divider line with optional label.

use super::shell::{Shell, impl_shell_builders};
use crate::classes::Axis;
use crate::component::Component;
use crate::modifier::{Color, DividerOrientation, Modifier};
use crate::node::Node;

/// `<div class="divider">` with optional text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divider {
    shell: Shell,
}

impl Divider {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_orientation(mut self, orientation: DividerOrientation) -> Self {
        self.apply_modifier(&orientation.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::from_shell(Shell::new("divider"))
    }
}

impl_shell_builders!(Divider, base = "divider", heuristic = Markup);

impl Component for Divider {
    fn to_node(&self) -> Node {
        self.shell.element("div").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) => {
                self.shell.apply_global("divider", modifier);
            }
            Modifier::DividerOrientation(o) => {
                self.shell.facet(Axis::Orientation, format!("divider-{o}"));
            }
            other => self.shell.apply_extra(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_default() {
        assert_eq!(Divider::default().render_to_string(), r#"<div class="divider"></div>"#);
    }

    #[test]
    fn test_divider_label_orientation_color() {
        let divider = Divider::new(["OR"])
            .with_orientation(DividerOrientation::Horizontal)
            .with_color(Color::Secondary);
        assert_eq!(
            divider.render_to_string(),
            r#"<div class="divider divider-horizontal divider-secondary">OR</div>"#
        );
    }
}
