//! Wayfarer - Travel Planning Chat Assistant
//!
//! A small agent crew that plans trips: a "Travel Designer" orchestrator
//! hands each request to a destination expert, a booking agent, or a local
//! guide. The specialists answer with mock flight, hotel, attraction and
//! restaurant data.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **LLM**: LLM provider abstraction with OpenAI and Ollama backends
//! - **Tools**: Tool registry and the mock travel tools
//! - **Agent**: Agent definitions, the runner, and chat sessions
//! - **CLI**: Command-line interface and REPL
//!
//! # Usage
//!
//! ```rust,no_run
//! use wayfarer::agent::ChatSession;
//! use wayfarer::core::Config;
//! use wayfarer::llm::create_provider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load().unwrap_or_default();
//!     let (session, welcome) = ChatSession::start(&config, create_provider(&config)).unwrap();
//!     println!("{}", welcome.content);
//!
//!     let reply = session.on_message("Find me flights from Paris to Tokyo on 2024-01-01").await;
//!     println!("{}", reply.content);
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod core;
pub mod llm;
pub mod tools;

// Re-export commonly used items
pub use agent::{ChatMessage, ChatSession, Runner};
pub use cli::Repl;
pub use core::{Config, Result, WayfarerError};
