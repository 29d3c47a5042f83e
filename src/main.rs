//! Wayfarer - Travel Planning Chat Assistant
//!
//! Main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfarer::cli::repl::format_message;
use wayfarer::core::ProviderType;
use wayfarer::llm::create_provider;
use wayfarer::{ChatSession, Config, Repl};

/// Wayfarer - Travel Planning Chat Assistant
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model for the Travel Designer orchestrator
    #[arg(long, short = 'o')]
    orchestrator: Option<String>,

    /// Model for the specialist agents
    #[arg(long, short = 's')]
    specialist: Option<String>,

    /// LLM backend (openai or ollama)
    #[arg(long)]
    provider: Option<ProviderType>,

    /// Maximum model calls per message
    #[arg(long)]
    max_turns: Option<usize>,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,

    /// Single prompt mode (non-interactive)
    #[arg(long, short = 'p')]
    prompt: Option<String>,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration; a broken config file is reported once logging is up
    let (mut config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Apply CLI overrides
    if let Some(orchestrator) = args.orchestrator {
        config.models.orchestrator = orchestrator;
    }

    if let Some(specialist) = args.specialist {
        config.models.specialist = specialist;
    }

    if let Some(provider) = args.provider {
        config.provider = provider;
    }

    if let Some(max_turns) = args.max_turns {
        config.agent.max_turns = max_turns;
    }

    if args.debug {
        config.agent.debug = true;
    }

    init_tracing(config.agent.debug);

    if let Some(e) = load_error {
        tracing::warn!(
            path = %Config::config_file().display(),
            "ignoring config file, using defaults: {}",
            e
        );
    }

    // Single prompt mode
    if let Some(prompt) = args.prompt {
        let (session, _) = ChatSession::start(&config, create_provider(&config))?;
        let reply = session.on_message(&prompt).await;
        println!("{}", format_message(&reply));
        return Ok(());
    }

    // Interactive REPL mode
    let mut repl = Repl::with_config(config)?;
    repl.run().await?;

    Ok(())
}
