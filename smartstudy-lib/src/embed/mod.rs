//! Text embedding
//!
//! Two embedders are provided:
//!
//! - [`MiniLmEmbedder`]: `sentence-transformers/all-MiniLM-L6-v2` via the
//!   fastembed crate (ONNX runtime). 384 dimensions.
//! - [`HashEmbedder`]: deterministic bag-of-words feature hashing. No model
//!   download, used for offline runs and tests.
//!
//! # Usage
//!
//! ```ignore
//! use smartstudy_lib::embed::{Embedder, MiniLmEmbedder};
//!
//! let mut embedder = MiniLmEmbedder::new()?;
//!
//! // Embed documents (for indexing)
//! let doc_embeddings = embedder.embed_documents(&["Binary is a number system..."])?;
//!
//! // Embed query (for searching)
//! let query_embedding = embedder.embed_query("how do plants make food")?;
//! ```

use crate::Result;

/// A vector embedding - fixed size array of floats
pub type Embedding = Vec<f32>;

/// Trait for text embedding models
pub trait Embedder: Send + Sync {
    /// Embed multiple documents for indexing
    fn embed_documents(&mut self, texts: &[&str]) -> Result<Vec<Embedding>>;

    /// Embed a single query for searching
    fn embed_query(&mut self, text: &str) -> Result<Embedding>;

    /// Returns the embedding dimension
    fn dimension(&self) -> usize;

    /// Returns the model name/identifier
    fn model_name(&self) -> &str;
}

mod hash;
mod minilm;

pub use hash::*;
pub use minilm::*;
