//! Word document model.

use serde::{Deserialize, Serialize};

/// Title given to a document that was never named.
pub const UNTITLED: &str = "Untitled document";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The single persisted Word document.
pub struct WordDocument {
    /// Document title.
    pub title: String,
    /// Plain-text body.
    pub body: String,
}

impl Default for WordDocument {
    fn default() -> Self {
        Self {
            title: UNTITLED.to_string(),
            body: String::new(),
        }
    }
}

impl WordDocument {
    /// Whitespace-separated word count of the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Character count of the body, counting Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_ignore_repeated_whitespace() {
        let doc = WordDocument {
            body: "  Hello,\n\tworld  again ".to_string(),
            ..WordDocument::default()
        };
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.char_count(), 23);
    }

    #[test]
    fn empty_document_has_no_words() {
        let doc = WordDocument::default();
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.char_count(), 0);
        assert_eq!(doc.title, UNTITLED);
    }

    #[test]
    fn character_count_is_not_byte_length() {
        let doc = WordDocument {
            body: "héllo wörld".to_string(),
            ..WordDocument::default()
        };
        assert_eq!(doc.char_count(), 11);
    }
}
