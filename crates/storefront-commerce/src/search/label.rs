//! Pluralized count labels ("1 Product", "27 Products").

use serde::{Deserialize, Serialize};

/// Singular/plural nouns for a count label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountLabel {
    /// Noun used when the count is exactly one.
    pub singular: String,
    /// Noun used for every other count, zero included.
    pub plural: String,
}

impl CountLabel {
    /// Create a label with custom nouns.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Format `count` with the matching noun.
    pub fn format(&self, count: usize) -> String {
        let noun = if count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        format!("{} {}", count, noun)
    }
}

impl Default for CountLabel {
    fn default() -> Self {
        Self::new("Product", "Products")
    }
}
