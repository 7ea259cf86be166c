//! High-level search interface
//!
//! Combines embedder and store into a unified search API.
//!
//! # Usage
//!
//! ```ignore
//! use smartstudy_lib::search::SearchEngine;
//!
//! let mut engine = SearchEngine::new(embedder, store);
//! engine.index(&catalog.documents())?;
//! let results = engine.search("how do plants make food", 4)?;
//! ```

use tracing::debug;

use crate::document::Document;
use crate::embed::Embedder;
use crate::store::{SearchResult, VectorStore};
use crate::Result;

/// Search engine combining an embedder with a vector store.
pub struct SearchEngine<E: Embedder, S: VectorStore> {
    embedder: E,
    store: S,
}

impl<E: Embedder, S: VectorStore> SearchEngine<E, S> {
    #[must_use]
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    /// Index documents by computing embeddings and storing them.
    pub fn index(&mut self, documents: &[Document]) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = documents.iter().map(|d| d.content.as_str()).collect();
        let embeddings = self.embedder.embed_documents(&texts)?;
        self.store.insert(documents, &embeddings)?;

        debug!(
            documents = documents.len(),
            model = self.embedder.model_name(),
            "indexed documents"
        );
        Ok(())
    }

    /// Search for documents similar to the query.
    pub fn search(&mut self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embedder.embed_query(query)?;
        let results = self.store.search(&query_embedding, k)?;

        debug!(k, hits = results.len(), "searched index");
        Ok(results)
    }

    /// Returns the number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no documents are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
