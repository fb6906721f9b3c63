//! # Banter HTTP Service
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exposes the response engine over HTTP for clients that cannot embed it:
//!
//! - `POST /chat` with `{"message": "..."}` → `{"reply": "...", "intent": "plain"}`
//! - `GET /health` → `{"status": "ok", "corpus_size": 8}`
//!
//! ## Architecture
//!
//! - `handle_serve` merges command-line flags over the `[server]` config section
//! - `server_logic` builds the Axum router and runs it until Ctrl+C / SIGTERM
//!
//! One engine instance is shared by all requests. Similarity scoring works
//! on a per-call copy of the corpus, so concurrent requests never interfere.
//!
//! ## Examples
//!
//! ```bash
//! banter serve --port 9000
//! curl -s localhost:9000/chat -H 'content-type: application/json' -d '{"message":"what is 2+2"}'
//! ```
//!
use super::EngineOptions;
use crate::core::config::ServerSettings;
use crate::core::error::Result;
use clap::Parser;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

/// Router, handlers and the server loop.
pub mod server_logic;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Flags left unset fall back to the `[server]` config section.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on. The next free port is used if it is taken.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind, e.g. `0.0.0.0` for all interfaces.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl ServerConfig {
    /// Command-line flags win over file settings.
    pub fn merge(args: &ServeArgs, settings: &ServerSettings) -> Self {
        Self {
            host: args.host.unwrap_or(settings.host),
            port: args.port.unwrap_or(settings.port),
            enable_cors: settings.enable_cors && !args.no_cors,
        }
    }
}

/// # Handle Serve Command (`handle_serve`)
///
/// Loads configuration, builds the shared engine and runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs, options: &EngineOptions) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);
    let (config, engine) = options.load()?;
    let server_config = ServerConfig::merge(&args, &config.server);
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(Arc::new(engine), server_config).await
}
