//! Agent definitions
//!
//! An agent is a named bundle of instructions, a model, the tools it may call
//! and the agents it may hand the conversation to. Definitions are immutable
//! once built and shared behind `Arc`.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use crate::core::{Result, ToolDefinition, WayfarerError};
use crate::tools::{Tool, ToolRegistry};

/// Configuration of a single agent
#[derive(Debug)]
pub struct AgentDefinition {
    name: String,
    instructions: String,
    model: String,
    tools: ToolRegistry,
    handoffs: Vec<Arc<AgentDefinition>>,
    handoff_description: Option<String>,
}

/// Builder for creating agent definitions
pub struct AgentBuilder {
    name: String,
    instructions: Option<String>,
    model: Option<String>,
    tools: ToolRegistry,
    handoffs: Vec<Arc<AgentDefinition>>,
    handoff_description: Option<String>,
}

/// Name of the function tool that transfers control to `agent_name`
///
/// "Booking Agent" becomes `transfer_to_booking_agent`.
pub fn handoff_tool_name(agent_name: &str) -> String {
    let snake: String = agent_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("transfer_to_{}", snake)
}

impl AgentBuilder {
    /// Create a new builder with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: None,
            model: None,
            tools: ToolRegistry::new(),
            handoffs: Vec::new(),
            handoff_description: None,
        }
    }

    /// Set the system instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Add a tool
    pub fn tool(mut self, tool: impl Tool + 'static) -> Self {
        self.tools.register(Arc::new(tool));
        self
    }

    /// Add an agent this one may hand off to
    pub fn handoff(mut self, agent: Arc<AgentDefinition>) -> Self {
        self.handoffs.push(agent);
        self
    }

    /// Describe this agent to the agents that hand off to it
    pub fn handoff_description(mut self, description: impl Into<String>) -> Self {
        self.handoff_description = Some(description.into());
        self
    }

    /// Build the definition
    pub fn build(self) -> Result<AgentDefinition> {
        if self.name.trim().is_empty() {
            return Err(WayfarerError::config("Agent name must not be empty"));
        }

        let model = self.model.ok_or_else(|| {
            WayfarerError::config(format!("Agent '{}' has no model", self.name))
        })?;

        let mut seen = HashSet::new();
        for target in &self.handoffs {
            let tool_name = handoff_tool_name(target.name());
            if self.tools.contains(&tool_name) || !seen.insert(tool_name.clone()) {
                return Err(WayfarerError::config(format!(
                    "Agent '{}' declares '{}' twice",
                    self.name, tool_name
                )));
            }
        }

        Ok(AgentDefinition {
            instructions: self
                .instructions
                .unwrap_or_else(|| format!("You are a helpful agent named '{}'.", self.name)),
            name: self.name,
            model,
            tools: self.tools,
            handoffs: self.handoffs,
            handoff_description: self.handoff_description,
        })
    }
}

impl AgentDefinition {
    /// Create a builder
    pub fn builder(name: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Tools this agent may call directly
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn handoffs(&self) -> &[Arc<AgentDefinition>] {
        &self.handoffs
    }

    /// Find the handoff target behind a `transfer_to_*` tool name
    pub fn find_handoff(&self, tool_name: &str) -> Option<&Arc<AgentDefinition>> {
        self.handoffs
            .iter()
            .find(|target| handoff_tool_name(target.name()) == tool_name)
    }

    /// Function definitions offered to the model: own tools, then one per handoff
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions = self.tools.definitions();
        definitions.extend(self.handoffs.iter().map(|target| target.as_handoff_tool()));
        definitions
    }

    fn as_handoff_tool(&self) -> ToolDefinition {
        let description = match &self.handoff_description {
            Some(extra) => format!(
                "Handoff to the {} agent to handle the request. {}",
                self.name, extra
            ),
            None => format!("Handoff to the {} agent to handle the request.", self.name),
        };

        ToolDefinition::function(
            handoff_tool_name(&self.name),
            description,
            json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        )
    }
}
