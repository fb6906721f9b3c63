//! # Banter UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal rendering for chat transcripts. Every line is prefixed with its
//! speaker so a session reads like:
//!
//! ```text
//! Bot: Hello! How can I help you today?
//! You: what is 2+2
//! Bot: The result is: 4
//! ```
//!
use std::fmt;
use std::io::{self, Write};

/// Who said a line in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("You"),
            Speaker::Bot => f.write_str("Bot"),
        }
    }
}

/// Writes one transcript line and flushes, so interactive users see it at once.
pub fn display_message<W: Write>(out: &mut W, speaker: Speaker, message: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", speaker, message)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_prefixes_speaker() {
        let mut buffer = Vec::new();
        display_message(&mut buffer, Speaker::User, "hello").unwrap();
        display_message(&mut buffer, Speaker::Bot, "Hi!").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "You: hello\nBot: Hi!\n");
    }
}
