//! Tool registry - manages and dispatches tool calls
//!
//! Each agent owns a registry holding exactly the tools it may call.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{Result, ToolCall, ToolDefinition, ToolResult, WayfarerError};

/// A function the model can call during a turn
pub trait Tool: Send + Sync {
    /// Name the model uses to call this tool
    fn name(&self) -> &str;

    /// What the tool does, shown to the model
    fn description(&self) -> &str;

    /// JSON Schema for the arguments
    fn parameters(&self) -> serde_json::Value;

    /// Run the tool
    fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult>;

    /// The function definition sent to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters())
    }
}

/// Fetch a required string argument or fail with `InvalidArguments`
pub fn required_arg(tool_call: &ToolCall, key: &str) -> Result<String> {
    tool_call.get_string(key).ok_or_else(|| {
        WayfarerError::invalid_arguments(
            &tool_call.name,
            format!("missing required argument '{}'", key),
        )
    })
}

/// Registry of available tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    /// Tools indexed by name, ordered so definitions are stable across turns
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get all tool definitions
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check whether a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool call
    ///
    /// Unknown tools yield a failed result rather than an error so the model
    /// can recover on its next turn.
    pub fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult> {
        match self.tools.get(&tool_call.name) {
            Some(tool) => tool.execute(tool_call),
            None => Ok(ToolResult::failure(
                &tool_call.name,
                format!("Unknown tool: {}", tool_call.name),
            )),
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tools.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{FlightsTool, HotelsTool};
    use serde_json::json;

    fn booking_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(HotelsTool));
        registry.register(Arc::new(FlightsTool));
        registry
    }

    #[test]
    fn test_definitions_are_sorted_by_name() {
        let names: Vec<String> = booking_registry()
            .definitions()
            .into_iter()
            .map(|d| d.function.name)
            .collect();
        assert_eq!(names, vec!["get_flights", "suggest_hotels"]);
    }

    #[test]
    fn test_unknown_tool_is_a_failed_result() {
        let result = booking_registry()
            .execute(&ToolCall::new("c1", "get_attractions", json!({"city": "Paris"})))
            .unwrap();
        assert!(!result.success);
        assert!(result.output.contains("Unknown tool"));
    }

    #[test]
    fn test_required_arg() {
        let call = ToolCall::new("c1", "get_flights", json!({"origin": "Paris"}));
        assert_eq!(required_arg(&call, "origin").unwrap(), "Paris");
        assert!(matches!(
            required_arg(&call, "destination"),
            Err(WayfarerError::InvalidArguments { .. })
        ));
    }
}
