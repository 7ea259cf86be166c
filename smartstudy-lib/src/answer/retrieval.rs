use tracing::info;

use crate::answer::{prompt, Answer, AnswerSource, Resolver};
use crate::embed::Embedder;
use crate::generate::{GenerationParams, Generator};
use crate::search::SearchEngine;
use crate::store::VectorStore;
use crate::topic::TopicCatalog;
use crate::{Error, Result};

/// Retrieval-augmented resolver.
///
/// Every catalogue topic is indexed up front. A query retrieves the closest
/// topics, which are stuffed into a single prompt for the generator. The
/// best match is reported as the answer's source topic.
pub struct RetrievalResolver<E: Embedder, S: VectorStore, G: Generator> {
    engine: SearchEngine<E, S>,
    generator: G,
    params: GenerationParams,
    top_k: usize,
}

impl<E: Embedder, S: VectorStore, G: Generator> RetrievalResolver<E, S, G> {
    pub const DEFAULT_TOP_K: usize = 4;

    /// Index `catalog` into `engine` and build a resolver over it.
    pub fn new(mut engine: SearchEngine<E, S>, catalog: &TopicCatalog, generator: G) -> Result<Self> {
        engine.index(&catalog.documents())?;

        Ok(Self {
            engine,
            generator,
            params: GenerationParams::default(),
            top_k: Self::DEFAULT_TOP_K,
        })
    }

    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn engine(&self) -> &SearchEngine<E, S> {
        &self.engine
    }
}

impl<E: Embedder, S: VectorStore, G: Generator> Resolver for RetrievalResolver<E, S, G> {
    fn name(&self) -> &str {
        "retrieval"
    }

    fn resolve(&mut self, query: &str) -> Result<Answer> {
        if self.engine.is_empty() {
            return Err(Error::Store("index is empty".to_string()));
        }

        let results = self.engine.search(query, self.top_k)?;
        let best = results
            .first()
            .ok_or_else(|| Error::Store("search returned no documents".to_string()))?;
        let source = AnswerSource::Retrieved {
            topic: best.document.topic().to_string(),
            score: best.score,
        };

        let text = self
            .generator
            .generate(&prompt::stuff(query, &results), &self.params)?;

        info!(%source, model = self.generator.model_name(), "resolved by retrieval");

        Ok(Answer {
            query: query.to_string(),
            text,
            source,
        })
    }
}
