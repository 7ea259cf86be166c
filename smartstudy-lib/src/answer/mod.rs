//! Answer resolution
//!
//! Two resolvers turn a query into an answer:
//!
//! ```text
//! RetrievalResolver:  Query -> Search -> "stuff" prompt -> Generator -> Answer
//! LookupResolver:     Query -> Catalogue (exact) --hit--> Answer
//!                                            \--miss--> Generator -> Answer
//! ```

use std::fmt;

mod lookup;
pub mod prompt;
mod retrieval;

pub use lookup::*;
pub use retrieval::*;

use crate::Result;

/// Where an answer came from
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerSource {
    /// Generated from retrieved context; `topic` is the best match
    Retrieved { topic: String, score: f32 },
    /// Stored explanation returned verbatim
    Dictionary { topic: String },
    /// Generated without stored context
    Generated,
}

impl AnswerSource {
    /// Topic label the answer is based on, if any.
    pub fn topic(&self) -> Option<&str> {
        match self {
            Self::Retrieved { topic, .. } | Self::Dictionary { topic } => Some(topic),
            Self::Generated => None,
        }
    }
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieved { topic, score } => write!(f, "retrieved:{topic} ({score:.3})"),
            Self::Dictionary { topic } => write!(f, "dictionary:{topic}"),
            Self::Generated => f.write_str("generated"),
        }
    }
}

/// A resolved answer to one query
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub query: String,
    pub text: String,
    pub source: AnswerSource,
}

/// Turns a query into an answer.
pub trait Resolver {
    fn resolve(&mut self, query: &str) -> Result<Answer>;

    /// Short name of the resolution strategy
    fn name(&self) -> &str;
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&mut self, query: &str) -> Result<Answer> {
        (**self).resolve(query)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_topic() {
        let retrieved = AnswerSource::Retrieved {
            topic: "Binary".to_string(),
            score: 0.5,
        };
        assert_eq!(retrieved.topic(), Some("Binary"));
        assert_eq!(AnswerSource::Generated.topic(), None);
    }

    #[test]
    fn test_source_display() {
        let source = AnswerSource::Dictionary {
            topic: "Database".to_string(),
        };
        assert_eq!(source.to_string(), "dictionary:Database");
    }
}
