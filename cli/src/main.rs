//! # Banter Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Banter CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the `ask`, `chat` or `serve` shell
//!
//! ## Architecture
//!
//! - `engine`: The response engine (intent, math, similarity, selection)
//! - `commands`: Shells that feed utterances to the engine
//! - `core`: Configuration and error types
//! - `common`: Shared terminal helpers
//!
//! ## Examples
//!
//! ```bash
//! banter ask "how can you help me"
//! banter --seed 7 chat
//! banter -v serve --port 9000
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Shells: ask, chat, serve
mod common; // Shared terminal helpers
mod core; // Config and errors
mod engine; // Response selection

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "banter",
    about = "💬 Banter: keyword and TF-IDF chat agent",
    long_about = "Answers free-text utterances with greetings, farewells, arithmetic results,\n\
                  or the closest sentence from a configurable response corpus.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of .banter.toml / the user config.
    #[arg(long, global = true, env = "BANTER_CONFIG")]
    config: Option<String>,
    /// Seed for greeting/farewell reply selection, for reproducible output.
    #[arg(long, global = true, env = "BANTER_SEED")]
    seed: Option<u64>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let options = commands::EngineOptions {
        config_path: cli.config,
        seed: cli.seed,
    };
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, &options).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, &options).await,
        Commands::Serve(args) => commands::serve::handle_serve(args, &options).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
