//! # Banter Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! One-shot shell: the words given on the command line form a single
//! utterance, the reply goes to stdout.
//!
//! ```bash
//! banter ask what is 2+2
//! banter ask "how can you help me"
//! ```
//!
use super::EngineOptions;
use crate::core::error::{BanterError, Result};
use anyhow::anyhow;
use clap::Parser;
use tracing::debug;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The utterance to answer. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// # Handle Ask Command (`handle_ask`)
///
/// ## Errors
///
/// Returns `BanterError::EmptyUtterance` if the joined text is blank, or any
/// configuration error from loading the engine.
pub async fn handle_ask(args: AskArgs, options: &EngineOptions) -> Result<()> {
    let joined = args.text.join(" ");
    let utterance = joined.trim();
    if utterance.is_empty() {
        return Err(anyhow!(BanterError::EmptyUtterance));
    }

    let (_, engine) = options.load()?;
    debug!("Answering one-shot utterance: {:?}", utterance);
    println!("{}", engine.handle_utterance(utterance));
    Ok(())
}
