//! Agent loop state management
//!
//! Tracks one run: the active agent, the shared transcript, and the items
//! produced along the way.

use std::sync::Arc;

use serde::Serialize;

use crate::agent::definition::AgentDefinition;
use crate::core::{Message, ToolCall};

/// Something that happened during a run, tagged with the agent responsible
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunItem {
    /// The model asked for a function tool
    ToolCall { agent: String, tool_name: String },
    /// A function tool returned
    ToolOutput {
        agent: String,
        tool_name: String,
        success: bool,
        output: String,
    },
    /// Control moved to another agent
    Handoff { from: String, to: String },
    /// The model answered in text
    MessageOutput { agent: String, content: String },
}

/// State of the agent loop for a single input
#[derive(Debug, Clone)]
pub struct RunState {
    /// Model calls made so far
    pub turn: usize,
    /// Maximum allowed model calls
    pub max_turns: usize,
    /// Agent answering the next turn
    pub current_agent: Arc<AgentDefinition>,
    /// Transcript without system prompt, shared across handoffs
    pub transcript: Vec<Message>,
    /// Items produced so far
    pub items: Vec<RunItem>,
}

impl RunState {
    /// Start a run on `agent` with the user's input
    pub fn new(agent: Arc<AgentDefinition>, input: &str, max_turns: usize) -> Self {
        Self {
            turn: 0,
            max_turns,
            current_agent: agent,
            transcript: vec![Message::user(input)],
            items: Vec::new(),
        }
    }

    /// Check whether another model call is allowed
    pub fn has_turns_left(&self) -> bool {
        self.turn < self.max_turns
    }

    /// Increment the turn counter
    pub fn next_turn(&mut self) {
        self.turn += 1;
    }

    /// Messages for the current agent: its instructions, then the transcript
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.transcript.len() + 1);
        messages.push(Message::system(self.current_agent.instructions()));
        messages.extend(self.transcript.iter().cloned());
        messages
    }

    /// Record an assistant turn that requested tools
    pub fn record_tool_calls(&mut self, content: &str, tool_calls: &[ToolCall]) {
        let agent = self.current_agent.name().to_string();
        self.transcript
            .push(Message::assistant_with_tools(content, tool_calls.to_vec()));
        for call in tool_calls {
            if self.current_agent.find_handoff(&call.name).is_none() {
                self.items.push(RunItem::ToolCall {
                    agent: agent.clone(),
                    tool_name: call.name.clone(),
                });
            }
        }
    }

    /// Record the output of a function tool
    pub fn record_tool_output(&mut self, call: &ToolCall, success: bool, output: String) {
        self.items.push(RunItem::ToolOutput {
            agent: self.current_agent.name().to_string(),
            tool_name: call.name.clone(),
            success,
            output: output.clone(),
        });
        self.transcript.push(Message::tool(&call.id, output));
    }

    /// Answer a tool call without logging it as a tool run
    pub fn answer_call(&mut self, call: &ToolCall, output: impl Into<String>) {
        self.transcript.push(Message::tool(&call.id, output));
    }

    /// Switch the active agent
    pub fn handoff(&mut self, target: Arc<AgentDefinition>) {
        self.items.push(RunItem::Handoff {
            from: self.current_agent.name().to_string(),
            to: target.name().to_string(),
        });
        self.current_agent = target;
    }

    /// Record the final text answer
    pub fn record_final(&mut self, content: &str) {
        self.items.push(RunItem::MessageOutput {
            agent: self.current_agent.name().to_string(),
            content: content.to_string(),
        });
        self.transcript.push(Message::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str) -> Arc<AgentDefinition> {
        Arc::new(
            AgentDefinition::builder(name)
                .model("gpt-3.5-turbo")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_turn_budget() {
        let mut state = RunState::new(agent("Local Guide"), "hi", 2);
        assert!(state.has_turns_left());

        state.next_turn();
        assert!(state.has_turns_left());

        state.next_turn();
        assert!(!state.has_turns_left());
    }

    #[test]
    fn test_messages_use_current_agent_instructions() {
        let mut state = RunState::new(agent("Travel Designer"), "Plan a trip", 10);
        state.handoff(agent("Local Guide"));

        let messages = state.messages();
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Local Guide"));
        assert_eq!(messages[1].content, "Plan a trip");
        assert_eq!(
            state.items,
            vec![RunItem::Handoff {
                from: "Travel Designer".to_string(),
                to: "Local Guide".to_string(),
            }]
        );
    }

    #[test]
    fn test_tool_output_is_linked_to_call() {
        let mut state = RunState::new(agent("Booking Agent"), "flights?", 10);
        let call = ToolCall::new("call_1", "get_flights", serde_json::json!({}));
        state.record_tool_calls("", std::slice::from_ref(&call));
        state.record_tool_output(&call, true, "ok".to_string());

        assert_eq!(state.transcript.len(), 3);
        assert_eq!(state.transcript[2].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(state.items.len(), 2);
    }
}
