//! Chat session lifecycle
//!
//! A session is one chat connection. Starting it builds the travel crew and
//! keeps the orchestrator; every incoming message is handed to the runner
//! independently of the ones before it.

use std::sync::Arc;

use crate::agent::crew::build_travel_crew;
use crate::agent::definition::AgentDefinition;
use crate::agent::runner::Runner;
use crate::core::{Config, Result};
use crate::llm::LLMProvider;

/// Author shown on welcome and answer messages
pub const ASSISTANT_AUTHOR: &str = "Travel Assistant";
/// Author shown on error messages
pub const SYSTEM_AUTHOR: &str = "System";

pub const WELCOME_MESSAGE: &str = "**Welcome to Travel Assistant!** 🌍✈️

I can help with:
- Destination ideas
- Flight & hotel bookings
- Local attractions & restaurants

Where would you like to go today?";

/// A message rendered back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub content: String,
    /// Agent that produced the reply, when one did
    pub source_agent: Option<String>,
}

impl ChatMessage {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            source_agent: None,
        }
    }

    pub fn with_source(mut self, agent: impl Into<String>) -> Self {
        self.source_agent = Some(agent.into());
        self
    }
}

/// State held for one chat connection
pub struct ChatSession {
    orchestrator: Arc<AgentDefinition>,
    runner: Runner,
}

impl ChatSession {
    /// Start a session and produce the welcome message
    pub fn start(config: &Config, provider: Arc<dyn LLMProvider>) -> Result<(Self, ChatMessage)> {
        let orchestrator = build_travel_crew(&config.models)?;
        let runner = Runner::from_settings(provider, &config.agent);

        tracing::debug!(
            orchestrator = orchestrator.name(),
            specialists = orchestrator.handoffs().len(),
            "session started"
        );

        let session = Self {
            orchestrator,
            runner,
        };
        Ok((session, ChatMessage::new(ASSISTANT_AUTHOR, WELCOME_MESSAGE)))
    }

    /// Handle one user message
    ///
    /// Never fails: runner errors are rendered as a "System" message.
    pub async fn on_message(&self, content: &str) -> ChatMessage {
        match self.runner.run(&self.orchestrator, content).await {
            Ok(result) => {
                ChatMessage::new(ASSISTANT_AUTHOR, result.final_output).with_source(result.last_agent)
            }
            Err(e) => {
                tracing::error!("request failed: {}", e);
                ChatMessage::new(SYSTEM_AUTHOR, format!("Error processing request: {}", e))
            }
        }
    }

    /// The agent every message is sent to
    pub fn orchestrator(&self) -> &Arc<AgentDefinition> {
        &self.orchestrator
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }
}
