//! Vector storage backends
//!
//! # Storage Model
//!
//! Each stored item consists of:
//! - Document: the topic explanation and its metadata
//! - Embedding: the vector representation
//!
//! # Usage
//!
//! ```ignore
//! use smartstudy_lib::store::{VectorStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//!
//! // Insert documents with their embeddings
//! store.insert(&documents, &embeddings)?;
//!
//! // Search by vector similarity
//! let results = store.search(&query_embedding, 4)?;
//! ```

use std::cmp::Ordering;

use crate::document::Document;
use crate::embed::Embedding;
use crate::Result;

/// A search result with similarity score
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched document
    pub document: Document,
    /// Similarity score (higher is more similar)
    /// For cosine similarity: -1.0 to 1.0
    pub score: f32,
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by score; equal scores rank the earlier catalogue position (then
/// the smaller id) higher, so ties resolve the same way on every run.
impl Ord for SearchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| {
                other
                    .document
                    .metadata
                    .position
                    .cmp(&self.document.metadata.position)
            })
            .then_with(|| other.document.id.cmp(&self.document.id))
    }
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchResult {}

/// Trait for vector storage backends
pub trait VectorStore: Send + Sync {
    /// Insert documents with their embeddings
    ///
    /// # Arguments
    /// * `documents` - The documents to store
    /// * `embeddings` - Corresponding embeddings (must be same length)
    fn insert(&mut self, documents: &[Document], embeddings: &[Embedding]) -> Result<()>;

    /// Search for similar documents
    ///
    /// # Returns
    /// Top-k results sorted by similarity (highest first)
    fn search(&self, query_embedding: &Embedding, k: usize) -> Result<Vec<SearchResult>>;

    /// Get total number of stored documents
    fn len(&self) -> usize;

    /// Check if store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored data
    fn clear(&mut self);
}

mod memory;

pub use memory::*;
