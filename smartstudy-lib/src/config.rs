//! Configuration
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) is a valid configuration.
//!
//! ```toml
//! notes_path = "study_notes.txt"
//! wrap_width = 80
//! top_k = 4
//!
//! [generator]
//! endpoint = "http://localhost:11434"
//! model = "llama3.2:1b"
//!
//! [generation]
//! max_length = 200
//! temperature = 0.7
//! top_p = 0.9
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_WIDTH;
use crate::generate::{GenerationParams, OllamaGenerator};
use crate::notes::DEFAULT_NOTES_PATH;
use crate::topic::TopicCatalog;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File that answered queries are appended to
    pub notes_path: PathBuf,
    /// Display wrap width; 0 disables wrapping
    pub wrap_width: usize,
    /// Documents retrieved per query in retrieval mode
    pub top_k: usize,
    /// Optional TOML topic file whose records are added to the built-in topics
    pub topics_path: Option<PathBuf>,
    pub generator: GeneratorConfig,
    pub generation: GenerationParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_path: PathBuf::from(DEFAULT_NOTES_PATH),
            wrap_width: DEFAULT_WIDTH,
            top_k: 4,
            topics_path: None,
            generator: GeneratorConfig::default(),
            generation: GenerationParams::default(),
        }
    }
}

/// Where and how to reach the text generation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    /// Request timeout; unset means wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2:1b".to_string(),
            timeout_secs: None,
        }
    }
}

impl GeneratorConfig {
    /// Endpoint with a scheme, accepting bare `host:port` as `OLLAMA_HOST` allows.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("http://{}", self.endpoint)
        }
    }

    pub fn build(&self) -> Result<OllamaGenerator> {
        OllamaGenerator::new(
            &self.endpoint_url(),
            &self.model,
            self.timeout_secs.map(Duration::from_secs),
        )
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        config.generation.validate()?;
        Ok(config)
    }

    /// Topic catalogue: the built-in topics plus any from the configured topic file.
    pub fn catalog(&self) -> Result<TopicCatalog> {
        let builtin = TopicCatalog::builtin();
        match &self.topics_path {
            Some(path) => Ok(builtin.extended(TopicCatalog::from_toml_file(path)?)),
            None => Ok(builtin),
        }
    }
}
