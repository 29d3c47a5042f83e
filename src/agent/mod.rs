//! Agent module - agent definitions, the run loop and chat sessions
//!
//! Contains the travel crew and the runner that moves a request between its agents.

pub mod crew;
pub mod definition;
pub mod loop_state;
pub mod runner;
pub mod session;

pub use crew::{build_travel_crew, describe_crew};
pub use definition::{handoff_tool_name, AgentBuilder, AgentDefinition};
pub use loop_state::{RunItem, RunState};
pub use runner::{RunResult, Runner, DEFAULT_MAX_TURNS};
pub use session::{ChatMessage, ChatSession};
