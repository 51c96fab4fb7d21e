//! Data display: Stats, Timeline, Indicator, Rating.

use super::shell::{Shell, impl_shell_builders};
use crate::classes::Axis;
use crate::component::Component;
use crate::modifier::{
    Color, IndicatorPosition, Modifier, Size, StatsOrientation, TimelineOrientation,
};
use crate::node::Node;

// =============================================================================
// Stats
// =============================================================================

/// Group of statistics (`<div class="stats">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    shell: Shell,
}

impl Stats {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_orientation(mut self, orientation: StatsOrientation) -> Self {
        self.apply_modifier(&orientation.into());
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

impl_shell_builders!(Stats, base = "stats", heuristic = Markup);

impl Component for Stats {
    fn to_node(&self) -> Node {
        self.shell.element("div").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("stats", modifier);
            }
            Modifier::StatsOrientation(o) => self.shell.facet(Axis::Orientation, o.token()),
            other => self.shell.apply_extra(other),
        }
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Event timeline (`<ul class="timeline">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    shell: Shell,
}

impl Timeline {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_orientation(mut self, orientation: TimelineOrientation) -> Self {
        self.apply_modifier(&orientation.into());
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.shell.classes.set_flag("timeline-compact", compact);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.apply_modifier(&color.into());
        self
    }
}

impl_shell_builders!(Timeline, base = "timeline", heuristic = Markup);

impl Component for Timeline {
    fn to_node(&self) -> Node {
        self.shell.element("ul").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) => {
                self.shell.apply_global("timeline", modifier);
            }
            Modifier::TimelineOrientation(o) => self.shell.facet(Axis::Orientation, o.token()),
            other => self.shell.apply_extra(other),
        }
    }
}

// =============================================================================
// Indicator
// =============================================================================

/// Wrapper that pins a badge to a corner (`<span class="indicator">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    shell: Shell,
}

impl Indicator {
    fn from_shell(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn with_position(mut self, position: IndicatorPosition) -> Self {
        self.apply_modifier(&position.into());
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

impl_shell_builders!(Indicator, base = "indicator", heuristic = Markup);

impl Component for Indicator {
    fn to_node(&self) -> Node {
        self.shell.element("span").into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("indicator", modifier);
            }
            Modifier::IndicatorPosition(p) => self.shell.facet(Axis::Position, p.token()),
            other => self.shell.apply_extra(other),
        }
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Star rating (`<div class="rating" data-rating="3">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    shell: Shell,
    value: i64,
}

impl Rating {
    fn from_shell(shell: Shell) -> Self {
        Self { shell, value: 0 }
    }

    /// Rating value, emitted as `data-rating`.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    pub fn value(&self) -> i64 {
        self.value
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

impl_shell_builders!(Rating, base = "rating", heuristic = Markup);

impl Component for Rating {
    fn to_node(&self) -> Node {
        crate::html::div()
            .attrs([self.shell.classes.to_attr()])
            .attr("data-rating", self.value.to_string())
            .attrs(self.shell.attrs.iter().cloned())
            .children(self.shell.children.iter().cloned())
            .into()
    }

    fn apply_modifier(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Color(_) | Modifier::Size(_) => {
                self.shell.apply_global("rating", modifier);
            }
            other => self.shell.apply_extra(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html;

    #[test]
    fn test_stats_orientation() {
        let stats = Stats::new([html::div().with_class("stat").text("42")])
            .with_orientation(StatsOrientation::Horizontal);
        assert_eq!(
            stats.render_to_string(),
            r#"<div class="stats stats-horizontal"><div class="stat">42</div></div>"#
        );
    }

    #[test]
    fn test_timeline_compact_ignores_size() {
        let timeline = Timeline::new([html::li().text("Step")])
            .with_orientation(TimelineOrientation::Vertical)
            .with_compact(true)
            .with([Size::Large]);
        assert_eq!(
            timeline.render_to_string(),
            r#"<ul class="timeline timeline-vertical timeline-compact"><li>Step</li></ul>"#
        );
    }

    #[test]
    fn test_indicator_position_override() {
        let indicator = Indicator::new(["x"]).with(modifiers![
            IndicatorPosition::TopStart,
            IndicatorPosition::BottomEnd
        ]);
        assert_eq!(
            indicator.render_to_string(),
            r#"<span class="indicator indicator-bottom-end">x</span>"#
        );
    }

    #[test]
    fn test_rating_value() {
        let rating = Rating::new([html::id("r")]).with_value(4).with_color(Color::Warning);
        assert_eq!(
            rating.render_to_string(),
            r#"<div class="rating rating-warning" data-rating="4" id="r"></div>"#
        );
    }
}
