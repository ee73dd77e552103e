//! Entity mentions produced by a linguistic analyzer

use crate::label::EntityLabel;

/// A span of text recognized as a named entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    /// Surface text of the span, as the analyzer produced it
    pub text: String,

    /// Category assigned by the analyzer
    pub label: EntityLabel,
}

impl EntityMention {
    /// Create a new mention
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// Create a mention from a label name, e.g. `("Paris", "GPE")`
    pub fn labeled(text: impl Into<String>, label: &str) -> Self {
        Self::new(text, EntityLabel::parse(label))
    }

    /// The text with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}
