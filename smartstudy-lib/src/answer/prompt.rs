//! Fixed prompt templates.

use crate::store::SearchResult;

/// Build the "stuff" prompt: all retrieved context, then the question.
pub fn stuff(question: &str, context: &[SearchResult]) -> String {
    let context = context
        .iter()
        .map(|r| r.document.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Use the following pieces of context to answer the question at the end. \
         If you don't know the answer, just say that you don't know, \
         don't try to make up an answer.\n\n\
         {context}\n\n\
         Question: {question}\n\
         Helpful Answer:"
    )
}

/// Build the prompt used when a topic is not in the catalogue.
pub fn fallback(topic: &str) -> String {
    format!(
        "Explain the college topic \"{topic}\" in simple terms for a student. \
         Cover what it is, why it matters, and give one example.\n\nExplanation:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DocumentMetadata};

    fn result(content: &str) -> SearchResult {
        SearchResult {
            document: Document::new(content, DocumentMetadata::default()),
            score: 1.0,
        }
    }

    #[test]
    fn test_stuff_joins_context_in_order() {
        let prompt = stuff("What?", &[result("first"), result("second")]);

        assert!(prompt.contains("first\n\nsecond"));
        assert!(prompt.ends_with("Question: What?\nHelpful Answer:"));
    }

    #[test]
    fn test_fallback_embeds_topic() {
        assert!(fallback("Recursion").contains("\"Recursion\""));
    }
}
