//! Loading placeholders: Skeleton, Spinner, Loading.

use super::shell::{Shell, impl_shell_builders};
use crate::classes::Axis;
use crate::component::Component;
use crate::modifier::{Color, LoadingType, Modifier, SkeletonShape, Size, SpinnerType};
use crate::node::Node;

// =============================================================================
// Skeleton
// =============================================================================

/// Placeholder block (`<div class="skeleton">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    shell: Shell,
}

impl Skeleton {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_shape(mut self, shape: SkeletonShape) -> Self {
        self.apply_modifier(&shape.into());
        self
    }

    pub fn with_pulse(mut self, on: bool) -> Self {
        self.shell.classes.set_flag("skeleton-pulse", on);
        self
    }

    pub fn with_wave(mut self, on: bool) -> Self {
        self.shell.classes.set_flag("skeleton-wave", on);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.apply_modifier(&size.into());
        self
    }
}

impl_shell_builders!(Skeleton, base = "skeleton", heuristic = Markup);

impl Component for Skeleton {
    fn to_node(&self) -> Node {
        self.shell.element("div").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("skeleton", modifier);
            }
            Modifier::SkeletonShape(shape) => {
                self.shell.facet(Axis::Shape, format!("skeleton-{shape}"));
            }
            other => self.shell.apply_extra(other),
        }
    }
}

// =============================================================================
// Spinner
// =============================================================================

/// Animated spinner (`<span class="loading">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    shell: Shell,
}

impl Spinner {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_type(mut self, kind: SpinnerType) -> Self {
        self.apply_modifier(&kind.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.apply_modifier(&size.into());
        self
    }
}

impl_shell_builders!(Spinner, base = "loading", heuristic = Markup);

impl Component for Spinner {
    fn to_node(&self) -> Node {
        self.shell.element("span").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("loading", modifier);
            }
            Modifier::SpinnerType(SpinnerType::Default) => self.shell.facet(Axis::Kind, ""),
            Modifier::SpinnerType(kind) => {
                self.shell.facet(Axis::Kind, format!("loading-{kind}"));
            }
            other => self.shell.apply_extra(other),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loading indicator whose type class is emitted verbatim
/// (`<span class="loading loading-dots">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loading {
    shell: Shell,
}

impl Loading {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_type(mut self, kind: LoadingType) -> Self {
        self.apply_modifier(&kind.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.apply_modifier(&size.into());
        self
    }
}

impl_shell_builders!(Loading, base = "loading", heuristic = Markup);

impl Component for Loading {
    fn to_node(&self) -> Node {
        self.shell.element("span").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("loading", modifier);
            }
            Modifier::LoadingType(kind) => self.shell.facet(Axis::Kind, kind.token()),
            other => self.shell.apply_extra(other),
        }
    }
}
