//! Tooltip wrapper.

use super::shell::{Shell, impl_shell_builders};
use crate::classes::Axis;
use crate::component::Component;
use crate::modifier::{Color, Modifier, TooltipPosition};
use crate::node::Node;

/// Element with a hover tooltip (`<div class="tooltip" data-tip="...">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    shell: Shell,
    tip: String,
}

impl Tooltip {
    fn from_shell(shell: Shell) -> Self {
        Self {
            shell,
            tip: String::new(),
        }
    }

    /// Tooltip text, emitted as `data-tip`.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_position(mut self, position: TooltipPosition) -> Self {
        self.apply_modifier(&position.into());
        self
    }

    /// Keep the tooltip visible.
    pub fn with_open(mut self, open: bool) -> Self {
        self.shell.classes.set_flag("tooltip-open", open);
        self
    }
}

impl_shell_builders!(Tooltip, base = "tooltip", heuristic = Markup);

impl Component for Tooltip {
    fn to_node(&self) -> Node {
        self.shell
            .open("div")
            .attr_nonempty("data-tip", &self.tip)
            .children(self.shell.children.iter().cloned())
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(c) => self.shell.facet(Axis::Color, format!("tooltip-{c}")),
            Modifier::TooltipPosition(p) => {
                self.shell.facet(Axis::Position, format!("tooltip-{p}"));
            }
            other => self.shell.apply_extra(other),
        }
    }
}
