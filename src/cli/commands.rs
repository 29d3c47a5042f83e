//! CLI commands
//!
//! Special commands that can be executed in the REPL.

use crate::agent::{describe_crew, ChatSession};
use crate::core::{Config, Result};

/// Result of parsing a command
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Continue processing as normal input
    Continue(String),
    /// Command was handled, show output
    Handled(String),
    /// Exit the REPL
    Exit,
    /// Start a fresh session
    Reset,
}

/// Parse and handle special commands
pub async fn handle_command(
    input: &str,
    session: &ChatSession,
    config: &Config,
) -> Result<CommandResult> {
    let input = input.trim();

    // Only bare words and slash commands are commands; "help me book a hotel" is a request
    if !input.starts_with('/') && input.contains(char::is_whitespace) {
        return Ok(CommandResult::Continue(input.to_string()));
    }

    let cmd = input
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_start_matches('/')
        .to_lowercase();

    match cmd.as_str() {
        "exit" | "quit" | "q" => Ok(CommandResult::Exit),

        "new" | "reset" => Ok(CommandResult::Reset),

        "help" | "?" => Ok(CommandResult::Handled(help_text())),

        "models" => {
            let provider = session.runner().provider();
            let models = provider.list_models().await?;
            let output = format!(
                "Models on {}:\n{}\n\nCurrent:\n  Orchestrator: {}\n  Specialists:  {}",
                provider.name(),
                models
                    .iter()
                    .map(|m| format!("  - {}", m))
                    .collect::<Vec<_>>()
                    .join("\n"),
                config.models.orchestrator,
                config.models.specialist
            );
            Ok(CommandResult::Handled(output))
        }

        "agents" => Ok(CommandResult::Handled(describe_crew(session.orchestrator()))),

        "tools" => {
            let mut output = String::from("Tools by agent:\n");
            for agent in session.orchestrator().handoffs() {
                for definition in agent.tools().definitions() {
                    output.push_str(&format!(
                        "  {:<20} {:<18} {}\n",
                        agent.name(),
                        definition.function.name,
                        definition.function.description
                    ));
                }
            }
            Ok(CommandResult::Handled(output.trim_end().to_string()))
        }

        "status" => {
            let status = format!(
                "Wayfarer Status:\n\
                 ─────────────────────────────\n\
                 Provider:     {}\n\
                 Orchestrator: {}\n\
                 Specialists:  {}\n\
                 Max turns:    {}\n\
                 Config file:  {}",
                session.runner().provider().name(),
                config.models.orchestrator,
                config.models.specialist,
                session.runner().max_turns(),
                Config::config_file().display()
            );
            Ok(CommandResult::Handled(status))
        }

        "config" => Ok(CommandResult::Handled(format!(
            "# {}\n{}",
            Config::config_file().display(),
            Config::default_config_toml()
        ))),

        "save" => {
            let path = config.save()?;
            Ok(CommandResult::Handled(format!(
                "Configuration saved to {}",
                path.display()
            )))
        }

        _ => {
            // Not a command, treat as normal input
            if input.starts_with('/') {
                Ok(CommandResult::Handled(format!(
                    "Unknown command: {}. Type 'help' for available commands.",
                    cmd
                )))
            } else {
                Ok(CommandResult::Continue(input.to_string()))
            }
        }
    }
}

/// Generate help text
fn help_text() -> String {
    r#"Wayfarer Commands:
─────────────────────────────────────────────
  help, ?          Show this help message
  exit, quit, q    Exit Wayfarer
  new, reset       Start a new chat session
  status           Show provider and models
  models           List models the provider offers
  agents           Show the agent crew
  tools            List tools per agent
  config           Show the default config file
  save             Save the current configuration

Keyboard Shortcuts:
  Ctrl+D           Exit Wayfarer

Tips:
  - The Travel Designer hands your request to a specialist
  - Flight and hotel data is simulated
─────────────────────────────────────────────"#
        .to_string()
}
