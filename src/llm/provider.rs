//! LLM provider factory

use std::sync::Arc;

use crate::core::{Config, ProviderType};
use crate::llm::traits::LLMProvider;
use crate::llm::{OllamaClient, OpenAiClient};

/// Create a new LLM provider based on configuration
pub fn create_provider(config: &Config) -> Arc<dyn LLMProvider> {
    match config.provider {
        ProviderType::OpenAi => Arc::new(OpenAiClient::from_config(config)),
        ProviderType::Ollama => Arc::new(OllamaClient::from_config(config)),
    }
}
