//! Text node type
//!
//! Text content nodes in the markup tree, either escaped on output or raw.

// =============================================================================
// Text
// =============================================================================

/// How text content is written to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    /// HTML special characters are escaped
    #[default]
    Escaped,
    /// Written verbatim (pre-rendered markup)
    Raw,
}

/// Text content node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Output treatment
    pub kind: TextKind,
}

impl Text {
    /// Create a new escaped text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Escaped,
        }
    }

    /// Create a raw text node, written without escaping
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Raw,
        }
    }

    /// Check if this node bypasses escaping
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.kind == TextKind::Raw
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get text length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let text = Text::new("hello");
        assert!(!text.is_raw());
        assert_eq!(text.len(), 5);

        let raw = Text::raw("<b>x</b>");
        assert!(raw.is_raw());
        assert!(!raw.is_empty());
    }
}
