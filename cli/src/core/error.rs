//! # Banter Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types shared by the Banter shells and the
//! configuration layer. User-facing failures inside the response engine
//! (unparseable math, no lexical match) never surface here: the engine turns
//! them into friendly reply strings. What remains are failures that should stop
//! a command, such as a broken config file or a server that cannot bind.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BanterError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! if config.corpus.sentences.is_empty() {
//!     return Err(anyhow!(BanterError::Config("corpus is empty".into())));
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Banter application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BanterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Nothing to answer: the utterance is empty.")]
    EmptyUtterance,

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
