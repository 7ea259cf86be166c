use std::collections::{BinaryHeap, HashMap};

use crate::document::Document;
use crate::embed::Embedding;
use crate::store::{SearchResult, VectorStore};
use crate::{Error, Result};

/// In-memory vector store.
///
/// Brute-force cosine similarity over every stored document. The topic
/// catalogue is tiny, so there is nothing to gain from an ANN index.
pub struct MemoryStore {
    entries: HashMap<String, (Document, Embedding)>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorStore for MemoryStore {
    fn insert(&mut self, documents: &[Document], embeddings: &[Embedding]) -> Result<()> {
        if documents.len() != embeddings.len() {
            return Err(Error::Store(format!(
                "{} documents but {} embeddings",
                documents.len(),
                embeddings.len()
            )));
        }

        for (document, embedding) in documents.iter().zip(embeddings) {
            self.entries
                .insert(document.id.clone(), (document.clone(), embedding.clone()));
        }
        Ok(())
    }

    fn search(&self, query: &Embedding, k: usize) -> Result<Vec<SearchResult>> {
        let mut results = BinaryHeap::with_capacity(self.entries.len());

        for (document, embedding) in self.entries.values() {
            if embedding.len() != query.len() {
                return Err(Error::Store(format!(
                    "query has {} dimensions, index has {}",
                    query.len(),
                    embedding.len()
                )));
            }

            results.push(SearchResult {
                document: document.clone(),
                score: cosine_similarity(query, embedding),
            });
        }

        Ok(results
            .into_sorted_vec()
            .into_iter()
            .rev()
            .take(k)
            .collect())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] where 1 means identical direction.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
