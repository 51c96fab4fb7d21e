//! Class list composition
//!
//! A component's `class` attribute is built from three ordered parts:
//!
//! 1. base tokens, fixed at construction (`btn`, `card`, ...)
//! 2. facet classes, one slot per [`Axis`]; writing an axis again replaces
//!    the slot's value but keeps the position of its first write
//! 3. custom classes supplied by the caller, in insertion order

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::Attr;

/// Independent style dimension a facet class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Color,
    Size,
    Variant,
    Shape,
    Position,
    Orientation,
    Kind,
    Align,
    Weight,
    /// Per-component boolean styles (pulse, compact, rotate, ...)
    Flag(&'static str),
}

/// Ordered class list with per-axis override semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    base: SmallVec<[CompactString; 2]>,
    facets: SmallVec<[(Axis, CompactString); 4]>,
    custom: Vec<CompactString>,
}

impl Classes {
    /// Class list with the given base class string (may hold several tokens).
    pub fn new(base: &str) -> Self {
        Self {
            base: base.split_ascii_whitespace().map(CompactString::from).collect(),
            ..Self::default()
        }
    }

    /// Set the class for an axis. An empty class hides the slot.
    pub fn set(&mut self, axis: Axis, class: impl Into<CompactString>) {
        let class = class.into();
        match self.facets.iter_mut().find(|(a, _)| *a == axis) {
            Some((_, slot)) => *slot = class,
            None => self.facets.push((axis, class)),
        }
    }

    /// Toggle a boolean style class.
    pub fn set_flag(&mut self, name: &'static str, on: bool) {
        self.set(Axis::Flag(name), if on { name } else { "" });
    }

    /// Remove an axis entirely.
    pub fn clear(&mut self, axis: Axis) {
        self.facets.retain(|(a, _)| *a != axis);
    }

    /// Current class for an axis, if set and non-empty.
    pub fn get(&self, axis: Axis) -> Option<&str> {
        self.facets
            .iter()
            .find(|(a, c)| *a == axis && !c.is_empty())
            .map(|(_, c)| c.as_str())
    }

    /// Append caller-supplied classes (whitespace separated).
    pub fn push_custom(&mut self, class: &str) {
        self.custom
            .extend(class.split_ascii_whitespace().map(CompactString::from));
    }

    /// Iterate the final tokens in output order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let base = self.base.iter().map(CompactString::as_str);
        let facets = self
            .facets
            .iter()
            .filter(|(_, c)| !c.is_empty())
            .map(|(_, c)| c.as_str());
        let custom = self.custom.iter().map(CompactString::as_str);
        base.chain(facets).chain(custom)
    }

    /// Check if no token would be emitted.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Check if the composed list contains a token.
    pub fn contains(&self, token: &str) -> bool {
        self.iter()
            .flat_map(str::split_ascii_whitespace)
            .any(|t| t == token)
    }

    /// Space-joined class string.
    pub fn to_class_string(&self) -> String {
        let mut out = String::new();
        for token in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
        out
    }

    /// `class` attribute for the composed list.
    pub fn to_attr(&self) -> Attr {
        Attr::new("class", self.to_class_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_base_facets_custom() {
        let mut classes = Classes::new("btn");
        classes.push_custom("w-full");
        classes.set(Axis::Color, "btn-primary");
        classes.set(Axis::Size, "btn-lg");
        assert_eq!(classes.to_class_string(), "btn btn-primary btn-lg w-full");
    }

    #[test]
    fn test_same_axis_last_write_wins() {
        let mut classes = Classes::new("btn");
        classes.set(Axis::Color, "btn-primary");
        classes.set(Axis::Size, "btn-sm");
        classes.set(Axis::Color, "btn-error");
        assert_eq!(classes.to_class_string(), "btn btn-error btn-sm");
        assert_eq!(classes.get(Axis::Color), Some("btn-error"));
    }

    #[test]
    fn test_empty_and_flag_slots() {
        let mut classes = Classes::new("tabs");
        classes.set(Axis::Variant, "");
        classes.set_flag("tabs-compact", true);
        assert_eq!(classes.to_class_string(), "tabs tabs-compact");
        assert!(classes.get(Axis::Variant).is_none());

        classes.set_flag("tabs-compact", false);
        classes.clear(Axis::Variant);
        assert_eq!(classes.to_class_string(), "tabs");
    }

    #[test]
    fn test_contains_multi_token_base() {
        let classes = Classes::new("dropdown relative inline-flex");
        assert!(classes.contains("dropdown"));
        assert!(classes.contains("inline-flex"));
        assert!(!classes.contains("relative inline-flex"));
        assert_eq!(classes.to_attr(), Attr::new("class", "dropdown relative inline-flex"));
    }
}
