//! SmartStudy - explanations for college topics
//!
//! # Architecture
//!
//! ```text
//! Retrieval:  TopicCatalog -> Embedder -> Store
//!                                           |
//!             Query -> Embedder -> Search <-+-> prompt -> Generator -+
//!                                                                    |
//! Lookup:     Query -> TopicCatalog --miss--> prompt -> Generator ---+-> Answer
//!                           \--hit-------------------------------------^
//!
//! Answer -> wrap (display) + NoteWriter (append)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use smartstudy_lib::{
//!     answer::LookupResolver, generate::OllamaGenerator, notes::NoteWriter,
//!     session::StudySession, topic::TopicCatalog,
//! };
//!
//! let generator = OllamaGenerator::new("http://localhost:11434", "llama3.2:1b", None)?;
//! let resolver = LookupResolver::new(TopicCatalog::builtin(), generator);
//! let mut session = StudySession::new(resolver, NoteWriter::default());
//!
//! if let Some(interaction) = session.ask("Binary")? {
//!     println!("{}", interaction.display);
//! }
//! ```

pub mod answer;
pub mod config;
pub mod document;
pub mod embed;
pub mod error;
pub mod format;
pub mod generate;
pub mod notes;
pub mod search;
pub mod session;
pub mod store;
pub mod topic;

pub use error::{Error, Result};
