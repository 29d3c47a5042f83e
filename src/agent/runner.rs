//! Agent runner
//!
//! Drives a single user input through an agent graph. Each turn asks the
//! current agent's model for a reply; function tools are executed and fed
//! back, a `transfer_to_*` call switches the current agent, and the first
//! reply without tool calls is the final output.

use std::sync::Arc;

use serde_json::json;

use crate::agent::definition::AgentDefinition;
use crate::agent::loop_state::{RunItem, RunState};
use crate::core::config::AgentSettings;
use crate::core::{Result, ToolCall, WayfarerError};
use crate::llm::{GenerateOptions, LLMProvider};

/// Model calls allowed per input unless configured otherwise
pub const DEFAULT_MAX_TURNS: usize = 10;

const MULTIPLE_HANDOFFS: &str = "Multiple handoffs detected, ignoring this one.";
const EMPTY_REPLY: &str = "I apologize, but I couldn't generate a response.";

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Text of the last agent's final reply
    pub final_output: String,
    /// Name of the agent that produced `final_output`
    pub last_agent: String,
    /// Model calls made
    pub turns: usize,
    /// Everything that happened, in order
    pub items: Vec<RunItem>,
}

impl RunResult {
    /// Agents that handled the run, starting with the entry agent
    pub fn handoff_path(&self) -> Vec<&str> {
        let mut path: Vec<&str> = Vec::new();
        for item in &self.items {
            if let RunItem::Handoff { from, to } = item {
                if path.is_empty() {
                    path.push(from);
                }
                path.push(to);
            }
        }
        path
    }
}

/// Runs agents against an LLM provider
#[derive(Clone)]
pub struct Runner {
    provider: Arc<dyn LLMProvider>,
    max_turns: usize,
    options: GenerateOptions,
}

impl Runner {
    /// Create a runner with default limits
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider,
            max_turns: DEFAULT_MAX_TURNS,
            options: GenerateOptions::default(),
        }
    }

    /// Create a runner using the agent settings from configuration
    pub fn from_settings(provider: Arc<dyn LLMProvider>, settings: &AgentSettings) -> Self {
        Self::new(provider)
            .with_max_turns(settings.max_turns)
            .with_options(GenerateOptions {
                temperature: settings.temperature,
            })
    }

    /// Set maximum model calls per run
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set generation options passed on every call
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Run `agent` on `input` until some agent gives a final answer
    pub async fn run(&self, agent: &Arc<AgentDefinition>, input: &str) -> Result<RunResult> {
        let mut state = RunState::new(Arc::clone(agent), input, self.max_turns);

        tracing::info!(agent = agent.name(), "run started");

        loop {
            if !state.has_turns_left() {
                tracing::warn!(max_turns = self.max_turns, "run exhausted its turns");
                return Err(WayfarerError::MaxTurnsExceeded(self.max_turns));
            }
            state.next_turn();

            let current = Arc::clone(&state.current_agent);
            let tools = current.tool_definitions();

            tracing::debug!(
                turn = state.turn,
                agent = current.name(),
                model = current.model(),
                tools = tools.len(),
                "calling model"
            );

            let response = self
                .provider
                .chat_with_tools(
                    current.model(),
                    &state.messages(),
                    &tools,
                    Some(self.options.clone()),
                )
                .await?;

            if response.tool_calls.is_empty() {
                let output = if response.content.trim().is_empty() {
                    EMPTY_REPLY.to_string()
                } else {
                    response.content
                };
                state.record_final(&output);

                tracing::info!(
                    agent = current.name(),
                    turns = state.turn,
                    "run finished"
                );

                return Ok(RunResult {
                    final_output: output,
                    last_agent: current.name().to_string(),
                    turns: state.turn,
                    items: state.items,
                });
            }

            state.record_tool_calls(&response.content, &response.tool_calls);

            let mut handoff_target: Option<Arc<AgentDefinition>> = None;
            for call in &response.tool_calls {
                match current.find_handoff(&call.name) {
                    Some(_) if handoff_target.is_some() => {
                        tracing::debug!(tool = %call.name, "ignoring extra handoff");
                        state.answer_call(call, MULTIPLE_HANDOFFS);
                    }
                    Some(target) => {
                        tracing::info!(from = current.name(), to = target.name(), "handoff");
                        state.answer_call(call, json!({ "assistant": target.name() }).to_string());
                        handoff_target = Some(Arc::clone(target));
                    }
                    None => self.run_tool(&mut state, &current, call),
                }
            }

            if let Some(target) = handoff_target {
                state.handoff(target);
            }
        }
    }

    /// Execute one function tool; failures are reported to the model, not raised
    fn run_tool(&self, state: &mut RunState, agent: &AgentDefinition, call: &ToolCall) {
        match agent.tools().execute(call) {
            Ok(result) => {
                tracing::debug!(
                    agent = agent.name(),
                    tool = %call.name,
                    success = result.success,
                    "tool finished"
                );
                state.record_tool_output(call, result.success, result.output);
            }
            Err(e) => {
                tracing::warn!(agent = agent.name(), tool = %call.name, "tool failed: {}", e);
                state.record_tool_output(call, false, format!("Error: {}", e));
            }
        }
    }
}
