use std::hash::{DefaultHasher, Hash, Hasher};

use crate::embed::{Embedder, Embedding};
use crate::{Error, Result};

/// Feature-hashing embedder.
///
/// Lowercases the text, splits it into alphanumeric words and counts each
/// word into one of `dimension` buckets. The vector is L2-normalised, so
/// cosine similarity reduces to weighted word overlap. Deterministic across
/// runs of the same binary.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub const DEFAULT_DIMENSION: usize = 512;

    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidInput(
                "embedding dimension must be positive".to_string(),
            ));
        }
        Ok(Self { dimension })
    }

    fn embed_one(&self, text: &str) -> Embedding {
        let mut vector = vec![0.0f32; self.dimension];

        for word in words(text) {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
        }
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

impl Embedder for HashEmbedder {
    fn model_name(&self) -> &str {
        "feature-hash"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed_documents(&mut self, texts: &[&str]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn embed_query(&mut self, text: &str) -> Result<Embedding> {
        Ok(self.embed_one(text))
    }
}
