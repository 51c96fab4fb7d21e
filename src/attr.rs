//! Attribute system for elements
//!
//! - `Attr` is a name with an optional value; `None` is a boolean attribute
//! - `Attrs` is a plain `Vec<Attr>`, kept in insertion order so output is diffable

use compact_str::CompactString;

/// A single HTML attribute.
///
/// A `None` value renders as bare presence (`disabled`, `checked`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: CompactString,
    pub value: Option<String>,
}

impl Attr {
    /// Attribute with a value: `name="value"`.
    pub fn new(name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Boolean attribute rendered as bare presence.
    pub fn flag(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Check if this is a boolean (value-less) attribute
    #[inline]
    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }

    /// Attribute value, empty for boolean attributes.
    #[inline]
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Element attributes in insertion order.
pub type Attrs = Vec<Attr>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name (empty string for boolean attributes)
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update in place)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<String>);

    /// Set a boolean attribute (insert or update in place)
    fn set_flag(&mut self, name: impl Into<CompactString>);

    /// Insert or update a prepared attribute.
    ///
    /// `class` is special-cased: a second class list is appended to the
    /// first instead of replacing it.
    fn merge_attr(&mut self, attr: Attr);

    /// Remove an attribute by name, returning it if present
    fn remove_attr(&mut self, name: &str) -> Option<Attr>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|a| a.name == name)
            .map(Attr::value_str)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|a| a.name == name)
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<String>) {
        let attr = Attr::new(name, value);
        if let Some(slot) = self.iter_mut().find(|a| a.name == attr.name) {
            slot.value = attr.value;
        } else {
            self.push(attr);
        }
    }

    fn set_flag(&mut self, name: impl Into<CompactString>) {
        let attr = Attr::flag(name);
        if let Some(slot) = self.iter_mut().find(|a| a.name == attr.name) {
            slot.value = None;
        } else {
            self.push(attr);
        }
    }

    fn merge_attr(&mut self, attr: Attr) {
        match self.iter_mut().find(|a| a.name == attr.name) {
            Some(slot) if attr.name == "class" => {
                let extra = attr.value_str();
                if extra.is_empty() {
                    return;
                }
                match &mut slot.value {
                    Some(existing) if !existing.is_empty() => {
                        existing.push(' ');
                        existing.push_str(extra);
                    }
                    other => *other = Some(extra.to_string()),
                }
            }
            Some(slot) => slot.value = attr.value,
            None => self.push(attr),
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<Attr> {
        self.iter()
            .position(|a| a.name == name)
            .map(|pos| self.remove(pos))
    }
}

// =============================================================================
// Tests
// =============================================================================
