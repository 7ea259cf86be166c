//! Text generation
//!
//! Generation is a black box: a prompt and fixed sampling parameters go in,
//! raw text comes out. Output is neither validated nor post-processed.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sampling parameters passed to the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Maximum number of tokens to generate
    pub max_length: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Number of sequences sampled; only the first is used
    pub num_return_sequences: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
            top_p: 0.9,
            num_return_sequences: 1,
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<()> {
        if self.num_return_sequences == 0 {
            return Err(Error::InvalidInput(
                "num_return_sequences must be at least 1".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(Error::InvalidInput("max_length must be positive".to_string()));
        }
        Ok(())
    }
}

/// Trait for text generation backends
pub trait Generator {
    /// Generate a completion for `prompt`.
    fn generate(&mut self, prompt: &str, params: &GenerationParams) -> Result<String>;

    /// Returns the model name/identifier
    fn model_name(&self) -> &str;
}

mod ollama;

pub use ollama::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        GenerationParams::default().validate().unwrap();
    }

    #[test]
    fn test_zero_sequences_rejected() {
        let params = GenerationParams {
            num_return_sequences: 0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let params: GenerationParams = toml::from_str("temperature = 0.2").unwrap();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_length, 200);
    }
}
