//! Study topics
//!
//! A catalogue of `{topic, explanation}` records, fixed once built. It backs
//! both resolution variants: exact lookup for the dictionary resolver and
//! indexable documents for the retrieval resolver.
//!
//! # Topic files
//!
//! Extra topics can be loaded from TOML and added after the built-in ones:
//!
//! ```toml
//! [[topic]]
//! name = "Recursion"
//! explanation = "Recursion is when a function calls itself..."
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::document::{Document, DocumentMetadata};
use crate::{Error, Result};

mod builtin;

/// A single topic and its explanation
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TopicRecord {
    #[serde(rename = "name")]
    pub topic: String,
    pub explanation: String,
}

impl TopicRecord {
    pub fn new(topic: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            explanation: explanation.into(),
        }
    }
}

#[derive(Deserialize)]
struct TopicFile {
    #[serde(default)]
    topic: Vec<TopicRecord>,
}

/// Immutable, ordered set of topics with unique names.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    records: Vec<TopicRecord>,
}

impl TopicCatalog {
    /// Catalogue with the built-in Binary, Database and Photosynthesis topics.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(builtin::builtin_records())
    }

    /// Build a catalogue, keeping the first record for any repeated name.
    pub fn from_records(records: impl IntoIterator<Item = TopicRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for record in records {
            if seen.insert(record.topic.clone()) {
                kept.push(record);
            } else {
                warn!(topic = %record.topic, "duplicate topic ignored");
            }
        }

        Self { records: kept }
    }

    /// Load a catalogue from a TOML topic file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Parse a catalogue from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: TopicFile =
            toml::from_str(text).map_err(|e| Error::Config(format!("invalid topic file: {e}")))?;

        if file.topic.is_empty() {
            return Err(Error::Config("topic file defines no topics".to_string()));
        }

        Ok(Self::from_records(file.topic))
    }

    /// Append the records of `extra` after this catalogue's own.
    ///
    /// Names already present keep their existing explanation.
    #[must_use]
    pub fn extended(self, extra: TopicCatalog) -> Self {
        Self::from_records(self.records.into_iter().chain(extra.records))
    }

    /// Exact, case-sensitive lookup by topic name.
    pub fn lookup(&self, name: &str) -> Option<&TopicRecord> {
        self.records.iter().find(|r| r.topic == name)
    }

    /// Topic names in catalogue order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.topic.as_str())
    }

    pub fn records(&self) -> &[TopicRecord] {
        &self.records
    }

    /// One document per topic, explanation as content.
    pub fn documents(&self) -> Vec<Document> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                Document::new(
                    record.explanation.clone(),
                    DocumentMetadata {
                        topic: record.topic.clone(),
                        position,
                    },
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
