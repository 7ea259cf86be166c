//! Indexable documents
//!
//! Each topic explanation becomes one document. Explanations are a few
//! sentences long, so they are indexed whole rather than split.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A document with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Document {
    /// Unique identifier for this document
    pub id: String,
    /// The text that gets embedded and handed to the generator as context
    pub content: String,
    /// Metadata about the source topic
    pub metadata: DocumentMetadata,
}

/// Metadata associated with a document
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct DocumentMetadata {
    /// Topic label the document was built from
    pub topic: String,
    /// Position of the topic within its catalogue (0-indexed)
    pub position: usize,
}

impl Document {
    /// Build a document whose id is derived from its topic and content.
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        let content = content.into();
        Self {
            id: generate_id(&metadata.topic, &content),
            content,
            metadata,
        }
    }

    /// Topic label of the source record.
    pub fn topic(&self) -> &str {
        &self.metadata.topic
    }
}

fn generate_id(topic: &str, content: &str) -> String {
    let mut hasher = DefaultHasher::new();
    topic.hash(&mut hasher);
    content.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(topic: &str) -> DocumentMetadata {
        DocumentMetadata {
            topic: topic.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_same_input_same_id() {
        let a = Document::new("content", meta("A"));
        let b = Document::new("content", meta("A"));
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_topic_changes_id() {
        let a = Document::new("content", meta("A"));
        let b = Document::new("content", meta("B"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_topic_accessor() {
        let doc = Document::new("text", meta("Binary"));
        assert_eq!(doc.topic(), "Binary");
    }
}
