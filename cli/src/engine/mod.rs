//! # Banter Response Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The engine maps a free-text utterance to exactly one reply string. It is
//! the only part of Banter with real logic; the `commands` module only wraps
//! it in a REPL or an HTTP service.
//!
//! ## Architecture
//!
//! Components, leaves first:
//! - `normalizer` (+ `lemmatizer`): lowercase, strip punctuation, tokenize, lemmatize
//! - `stop_words`: words ignored by similarity scoring
//! - `intent`: farewell / greeting / math / plain classification
//! - `math`: arithmetic evaluation for math intents
//! - `similarity`: TF-IDF cosine matching against the corpus
//! - `selector`: orchestration; the `handle_utterance` boundary
//!
//! Data flow: utterance → `IntentClassifier` → (pool draw | math | similarity) → reply.
//!
//! ## Usage
//!
//! ```rust
//! let config = config::load_config(None)?;
//! let engine = Engine::from_config(&config);
//! println!("{}", engine.handle_utterance("what is 2+2"));
//! ```
//!
pub mod intent;
pub mod lemmatizer;
pub mod math;
pub mod normalizer;
pub mod selector;
pub mod similarity;
pub mod stop_words;

pub use intent::Intent;
pub use selector::ResponseSelector;

/// The selector as used by the shells, with an OS- or seed-initialized generator.
pub type Engine = ResponseSelector<rand::rngs::StdRng>;

/// Builds the shell engine, reproducible when `seed` is given.
pub fn build_engine(config: &crate::core::config::Config, seed: Option<u64>) -> Engine {
    match seed {
        Some(seed) => ResponseSelector::seeded(config, seed),
        None => ResponseSelector::from_config(config),
    }
}
