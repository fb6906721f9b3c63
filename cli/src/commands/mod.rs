//! # Banter Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the shells that sit in front of the response
//! engine. Each shell owns its own I/O and calls the engine once per
//! utterance; none of them holds conversation state between calls.
//!
//! ## Command Groups
//!
//! - `ask`: Answer a single utterance given on the command line
//! - `chat`: Interactive session over stdin/stdout
//! - `serve`: HTTP JSON service
//!
//! All three load configuration and build the engine the same way, through
//! `EngineOptions`.
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::engine::{self, Engine};
use tracing::info;

/// Answer one utterance and exit.
pub mod ask;
/// Interactive read-reply loop.
pub mod chat;
/// HTTP service exposing the engine.
pub mod serve;

/// Global options that decide how the engine is built.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Explicit config file; skips project/user discovery.
    pub config_path: Option<String>,
    /// Seed for greeting/farewell pool draws.
    pub seed: Option<u64>,
}

impl EngineOptions {
    /// Loads the effective configuration and builds an engine from it.
    pub fn load(&self) -> Result<(Config, Engine)> {
        let config = config::load_config(self.config_path.as_deref())?;
        let engine = engine::build_engine(&config, self.seed);
        info!(
            "Engine ready: {} corpus sentences, seed {:?}",
            engine.corpus().len(),
            self.seed
        );
        Ok((config, engine))
    }
}
