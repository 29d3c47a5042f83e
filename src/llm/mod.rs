//! LLM module - Language Model integrations
//!
//! Provides abstractions for different LLM backends with OpenAI as the primary.

pub mod ollama;
pub mod openai;
pub mod provider;
pub mod traits;

pub use ollama::OllamaClient;
pub use openai::OpenAiClient;
pub use provider::create_provider;
pub use traits::{GenerateOptions, LLMProvider, LLMResponse, TokenUsage};

const LOG_PREVIEW_CHARS: usize = 500;

/// Shorten request/response bodies for debug logs
pub(crate) fn truncate_for_log(content: &str) -> String {
    if content.chars().count() > LOG_PREVIEW_CHARS {
        let preview: String = content.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        content.to_string()
    }
}
