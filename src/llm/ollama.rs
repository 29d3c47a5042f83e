//! Ollama client implementation
//!
//! Async HTTP client for the Ollama chat API with tool calling support.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::core::{Config, Message, Result, ToolCall, ToolDefinition, WayfarerError};
use crate::llm::traits::{GenerateOptions, LLMProvider, LLMResponse, TokenUsage};
use crate::llm::truncate_for_log;

/// Ollama API client
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

/// Ollama chat request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<&'a [ToolDefinition]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
    stream: bool,
}

/// Ollama message format
#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    #[serde(default)]
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OllamaToolCall>>,
    /// Set on `tool` messages; Ollama pairs results with calls by function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_name: Option<String>,
}

/// Ollama tool call format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OllamaToolCall {
    function: OllamaFunction,
}

/// Ollama function in tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OllamaFunction {
    name: String,
    arguments: serde_json::Value,
}

/// Ollama generation options
#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Ollama chat response (non-streaming)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: OllamaMessage,
    model: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama models list response
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
}

/// Model information
#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

impl OllamaClient {
    /// Create a new Ollama client from configuration
    pub fn from_config(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.ollama.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.ollama_url(),
        }
    }

    /// Create a client with custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Convert a transcript to Ollama format
    ///
    /// Ollama issues no call ids, so each `tool` message is labelled with the
    /// function name of the assistant call it answers.
    fn to_ollama_messages(messages: &[Message]) -> Vec<OllamaMessage> {
        let mut call_names: HashMap<&str, &str> = HashMap::new();

        messages
            .iter()
            .map(|msg| {
                let tool_calls = msg.tool_calls.as_ref().map(|calls| {
                    calls
                        .iter()
                        .map(|tc| {
                            call_names.insert(&tc.id, &tc.name);
                            OllamaToolCall {
                                function: OllamaFunction {
                                    name: tc.name.clone(),
                                    arguments: tc.arguments.clone(),
                                },
                            }
                        })
                        .collect()
                });

                let tool_name = msg
                    .tool_call_id
                    .as_deref()
                    .and_then(|id| call_names.get(id))
                    .map(|name| name.to_string());

                OllamaMessage {
                    role: msg.role.clone(),
                    content: msg.content.clone(),
                    tool_calls,
                    tool_name,
                }
            })
            .collect()
    }

    fn connect_error(&self, e: reqwest::Error) -> WayfarerError {
        if e.is_connect() {
            WayfarerError::provider(format!(
                "Cannot connect to Ollama at {}. Is it running?",
                self.base_url
            ))
        } else {
            WayfarerError::from(e)
        }
    }

    /// Convert Ollama response to LLMResponse
    fn to_llm_response(response: ChatResponse) -> LLMResponse {
        let tool_calls = response
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, tc)| ToolCall {
                id: format!("ollama_call_{}", i),
                name: tc.function.name,
                arguments: tc.function.arguments,
            })
            .collect();

        let usage = match (response.prompt_eval_count, response.eval_count) {
            (Some(prompt), Some(completion)) => Some(TokenUsage {
                prompt_tokens: prompt,
                completion_tokens: completion,
                total_tokens: prompt + completion,
            }),
            _ => None,
        };

        LLMResponse {
            content: response.message.content,
            tool_calls,
            usage,
            model: response.model,
        }
    }
}

#[async_trait]
impl LLMProvider for OllamaClient {
    async fn chat_with_tools(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: Option<GenerateOptions>,
    ) -> Result<LLMResponse> {
        let request = ChatRequest {
            model,
            messages: Self::to_ollama_messages(messages),
            tools: if tools.is_empty() { None } else { Some(tools) },
            options: options.map(|opts| OllamaOptions {
                temperature: opts.temperature,
            }),
            stream: false,
        };

        tracing::debug!(
            model,
            tools = tools.len(),
            "ollama request: {}",
            truncate_for_log(&serde_json::to_string(&request)?)
        );

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 && error_text.contains("not found") {
                return Err(WayfarerError::ModelNotFound(model.to_string()));
            }

            return Err(WayfarerError::provider(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!("ollama response: {}", truncate_for_log(&response_text));

        let chat_response: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| WayfarerError::provider(format!("Failed to parse response: {}", e)))?;

        Ok(Self::to_llm_response(chat_response))
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;

        if !response.status().is_success() {
            return Err(WayfarerError::provider("Failed to list models"));
        }

        let models_response: ModelsResponse = response.json().await?;
        Ok(models_response.models.into_iter().map(|m| m.name).collect())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::with_base_url("http://localhost:11434");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_message_conversion() {
        let converted = OllamaClient::to_ollama_messages(&[Message::user("Hello")]);
        assert_eq!(converted[0].role, "user");
        assert_eq!(converted[0].content, "Hello");
        assert!(converted[0].tool_calls.is_none());
        assert!(converted[0].tool_name.is_none());
    }

    #[test]
    fn test_tool_results_carry_function_name() {
        let transcript = vec![
            Message::user("Hotels in Rome?"),
            Message::assistant_with_tools(
                "",
                vec![
                    ToolCall::new("ollama_call_0", "suggest_hotels", json!({"destination": "Rome"})),
                    ToolCall::new("ollama_call_1", "get_flights", json!({"origin": "Oslo"})),
                ],
            ),
            Message::tool("ollama_call_1", "Flights from Oslo..."),
            Message::tool("ollama_call_0", "Hotels in Rome..."),
            // a later turn reuses positional ids for a different tool
            Message::assistant_with_tools(
                "",
                vec![ToolCall::new("ollama_call_0", "get_attractions", json!({"city": "Rome"}))],
            ),
            Message::tool("ollama_call_0", "Attractions in Rome..."),
        ];

        let converted = OllamaClient::to_ollama_messages(&transcript);
        let names: Vec<Option<&str>> = converted.iter().map(|m| m.tool_name.as_deref()).collect();
        assert_eq!(
            names,
            vec![
                None,
                None,
                Some("get_flights"),
                Some("suggest_hotels"),
                None,
                Some("get_attractions")
            ]
        );

        let wire = serde_json::to_value(&converted[2]).unwrap();
        assert_eq!(wire["role"], "tool");
        assert_eq!(wire["tool_name"], "get_flights");
        assert!(serde_json::to_value(&converted[0]).unwrap().get("tool_name").is_none());
    }

    #[test]
    fn test_tool_calls_get_positional_ids() {
        let raw = serde_json::json!({
            "model": "qwen3:8b",
            "message": {
                "role": "assistant",
                "content": "",
                "tool_calls": [
                    {"function": {"name": "get_flights", "arguments": {"origin": "Paris"}}},
                    {"function": {"name": "suggest_hotels", "arguments": {"budget": "luxury"}}}
                ]
            },
            "prompt_eval_count": 40,
            "eval_count": 8
        });
        let parsed: ChatResponse = serde_json::from_value(raw).unwrap();
        let response = OllamaClient::to_llm_response(parsed);

        assert_eq!(response.tool_calls.len(), 2);
        assert_eq!(response.tool_calls[1].id, "ollama_call_1");
        assert_eq!(response.tool_calls[1].name, "suggest_hotels");
        assert_eq!(response.usage.unwrap().total_tokens, 48);
    }
}
