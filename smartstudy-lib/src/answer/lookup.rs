use tracing::info;

use crate::answer::{prompt, Answer, AnswerSource, Resolver};
use crate::generate::{GenerationParams, Generator};
use crate::topic::TopicCatalog;
use crate::Result;

/// Dictionary resolver with generation fallback.
///
/// A query that names a catalogue topic exactly (case-sensitive) gets the
/// stored explanation verbatim. Anything else is sent to the generator.
pub struct LookupResolver<G: Generator> {
    catalog: TopicCatalog,
    generator: G,
    params: GenerationParams,
}

impl<G: Generator> LookupResolver<G> {
    pub fn new(catalog: TopicCatalog, generator: G) -> Self {
        Self {
            catalog,
            generator,
            params: GenerationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }
}

impl<G: Generator> Resolver for LookupResolver<G> {
    fn name(&self) -> &str {
        "lookup"
    }

    fn resolve(&mut self, query: &str) -> Result<Answer> {
        if let Some(record) = self.catalog.lookup(query) {
            info!(topic = %record.topic, "resolved from dictionary");
            return Ok(Answer {
                query: query.to_string(),
                text: record.explanation.clone(),
                source: AnswerSource::Dictionary {
                    topic: record.topic.clone(),
                },
            });
        }

        let text = self
            .generator
            .generate(&prompt::fallback(query), &self.params)?;

        info!(model = self.generator.model_name(), "resolved by generation");

        Ok(Answer {
            query: query.to_string(),
            text,
            source: AnswerSource::Generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::stub::{FailingGenerator, StubGenerator};
    use crate::Error;

    fn resolver() -> LookupResolver<StubGenerator> {
        LookupResolver::new(TopicCatalog::builtin(), StubGenerator::replying("Generated text."))
    }

    #[test]
    fn test_known_topics_return_stored_text() {
        let mut resolver = resolver();
        let catalog = TopicCatalog::builtin();

        for record in catalog.records() {
            let answer = resolver.resolve(&record.topic).unwrap();
            assert_eq!(answer.text, record.explanation);
            assert_eq!(
                answer.source,
                AnswerSource::Dictionary {
                    topic: record.topic.clone()
                }
            );
        }
        assert!(resolver.generator.prompts.is_empty());
    }

    #[test]
    fn test_unknown_topic_generates() {
        let mut resolver = resolver();
        let answer = resolver.resolve("Recursion").unwrap();

        assert_eq!(answer.text, "Generated text.");
        assert_eq!(answer.source, AnswerSource::Generated);
        assert_eq!(resolver.generator.prompts.len(), 1);
        assert!(resolver.generator.prompts[0].contains("\"Recursion\""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut resolver = resolver();
        let answer = resolver.resolve("binary").unwrap();
        assert_eq!(answer.source, AnswerSource::Generated);
    }

    #[test]
    fn test_invalid_params_rejected_on_fallback() {
        let params = GenerationParams {
            num_return_sequences: 0,
            ..Default::default()
        };
        let mut resolver = resolver().with_params(params);

        assert!(resolver.resolve("Binary").is_ok());
        assert!(matches!(resolver.resolve("Recursion"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_generation_failure_propagates() {
        let mut resolver = LookupResolver::new(TopicCatalog::builtin(), FailingGenerator);
        assert!(matches!(resolver.resolve("Recursion"), Err(Error::Generation(_))));
    }
}
