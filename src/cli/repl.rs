//! Interactive REPL for Wayfarer
//!
//! Stands in for a chat UI: starts a session, prints its welcome message,
//! then forwards each line to the session and prints the reply.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::agent::{ChatMessage, ChatSession};
use crate::cli::commands::{handle_command, CommandResult};
use crate::core::{Config, Result};
use crate::llm::{create_provider, LLMProvider};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    config: Config,
    provider: Arc<dyn LLMProvider>,
    session: ChatSession,
    welcome: ChatMessage,
}

impl Repl {
    /// Create a REPL with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = create_provider(&config);
        let (session, welcome) = ChatSession::start(&config, Arc::clone(&provider))?;
        Ok(Self {
            config,
            provider,
            session,
            welcome,
        })
    }

    /// Run the REPL
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();
        render(&self.welcome);

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("You: ");
            stdout.flush()?;

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => {
                    // EOF (Ctrl+D)
                    println!("\nGoodbye!");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    continue;
                }
            }

            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match handle_command(input, &self.session, &self.config).await {
                Ok(CommandResult::Exit) => {
                    println!("\nGoodbye!");
                    break;
                }
                Ok(CommandResult::Reset) => {
                    let (session, welcome) =
                        ChatSession::start(&self.config, Arc::clone(&self.provider))?;
                    self.session = session;
                    render(&welcome);
                }
                Ok(CommandResult::Handled(output)) => {
                    println!("{}\n", output);
                }
                Ok(CommandResult::Continue(input)) => {
                    let reply = self.session.on_message(&input).await;
                    render(&reply);
                }
                Err(e) => {
                    eprintln!("Command error: {}\n", e);
                }
            }
        }

        Ok(())
    }

    /// Print the startup banner
    fn print_banner(&self) {
        println!(
            r#"
╔═══════════════════════════════════════════╗
║                                           ║
║   W A Y F A R E R                         ║
║   Travel planning with specialist agents  ║
║                                           ║
╚═══════════════════════════════════════════╝
"#
        );
        println!("Provider: {}", self.provider.name());
        println!("Models:");
        println!("  Orchestrator: {}", self.config.models.orchestrator);
        println!("  Specialists:  {}", self.config.models.specialist);
        println!();
        println!("Commands: help, new, agents, status, exit");
        println!("───────────────────────────────────────────────");
    }
}

/// Format a chat message for the terminal
pub fn format_message(message: &ChatMessage) -> String {
    match &message.source_agent {
        Some(agent) => format!("{} [{}]:\n{}", message.author, agent, message.content),
        None => format!("{}:\n{}", message.author, message.content),
    }
}

fn render(message: &ChatMessage) {
    println!("\n{}\n", format_message(message));
}
