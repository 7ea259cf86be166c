//! One study interaction: resolve, display, persist.
//!
//! # Usage
//!
//! ```ignore
//! use smartstudy_lib::{answer::LookupResolver, notes::NoteWriter, session::StudySession};
//!
//! let resolver = LookupResolver::new(catalog, generator);
//! let mut session = StudySession::new(resolver, NoteWriter::default());
//!
//! if let Some(interaction) = session.ask("Binary")? {
//!     println!("{}", interaction.display);
//! }
//! ```

use tracing::debug;

use crate::answer::{Answer, AnswerSource, Resolver};
use crate::format::{self, DEFAULT_WIDTH};
use crate::notes::NoteWriter;
use crate::Result;

/// Result of a single answered query
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub answer: Answer,
    /// Answer text as it should be shown to the user; wrapped unless the
    /// answer was synthesized from retrieved context
    pub display: String,
}

/// Runs queries through a resolver and records the answers.
pub struct StudySession<R: Resolver> {
    resolver: R,
    notes: NoteWriter,
    wrap_width: usize,
}

impl<R: Resolver> StudySession<R> {
    pub fn new(resolver: R, notes: NoteWriter) -> Self {
        Self {
            resolver,
            notes,
            wrap_width: DEFAULT_WIDTH,
        }
    }

    /// Set the display wrap width for lookup answers; 0 shows them unwrapped.
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Answer `query` and append it to the notes file.
    ///
    /// An empty query is ignored: nothing is resolved or written and
    /// `Ok(None)` is returned. If resolution fails, nothing is written.
    pub fn ask(&mut self, query: &str) -> Result<Option<Interaction>> {
        if query.is_empty() {
            debug!("empty query ignored");
            return Ok(None);
        }

        let answer = self.resolver.resolve(query)?;
        let display = match answer.source {
            AnswerSource::Retrieved { .. } => answer.text.clone(),
            AnswerSource::Dictionary { .. } | AnswerSource::Generated => {
                format::wrap(&answer.text, self.wrap_width)
            }
        };
        self.notes.append(&answer.query, &answer.text)?;

        Ok(Some(Interaction { answer, display }))
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn notes(&self) -> &NoteWriter {
        &self.notes
    }
}
