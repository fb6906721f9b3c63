//! # Banter Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Interactive shell over stdin/stdout, one utterance per line:
//! - The configured welcome line is printed first (unless `--quiet`).
//! - Lines are trimmed; blank lines never reach the engine.
//! - Each turn prints `Bot: <reply>`. When stdin is not a terminal the input
//!   is echoed as `You: <line>` so piped transcripts read naturally.
//! - The session ends at end of input or right after a farewell reply.
//!
use super::EngineOptions;
use crate::common::ui::{display_message, Speaker};
use crate::core::error::Result;
use crate::engine::{Intent, ResponseSelector};
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Skip the welcome line.
    #[arg(long, short)]
    pub quiet: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the engine and runs a session on the process's stdin/stdout.
pub async fn handle_chat(args: ChatArgs, options: &EngineOptions) -> Result<()> {
    let (config, engine) = options.load()?;
    let welcome = (!args.quiet).then_some(config.shell.welcome.as_str());
    let echo_input = !std::io::stdin().is_terminal();

    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let turns = run_session(&engine, welcome, echo_input, reader, &mut stdout).await?;
    info!("Chat session ended after {} turn(s).", turns);
    Ok(())
}

/// # Run Session (`run_session`)
///
/// ## Arguments
///
/// * `engine`: The response selector answering each line.
/// * `welcome`: Optional opening line from the bot.
/// * `echo_input`: Whether to print `You: <line>` before each reply.
/// * `reader`: Line source.
/// * `out`: Transcript sink.
///
/// ## Returns
///
/// * `Result<usize>`: Number of utterances answered.
pub async fn run_session<G, R, W>(
    engine: &ResponseSelector<G>,
    welcome: Option<&str>,
    echo_input: bool,
    reader: R,
    out: &mut W,
) -> Result<usize>
where
    G: Rng,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(welcome) = welcome {
        display_message(out, Speaker::Bot, welcome)?;
    }

    let mut lines = reader.lines();
    let mut turns = 0;
    while let Some(line) = lines.next_line().await.context("Failed to read input line")? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if echo_input {
            display_message(out, Speaker::User, message)?;
        }
        let reply = engine.respond(message);
        display_message(out, Speaker::Bot, &reply.text)?;
        turns += 1;

        if reply.intent == Intent::Farewell {
            break;
        }
    }
    Ok(turns)
}
