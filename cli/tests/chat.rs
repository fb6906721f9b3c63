//! # Banter CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `banter chat` with piped stdin. Piped input is echoed as
//! `You: ...`, so the transcript can be checked line by line.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_transcript() {
    Sandbox::new()
        .banter_cmd()
        .arg("chat")
        .write_stdin("what is 3*3\n\nbasic programming\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Bot: Hello! How can I help you today?")
                .and(predicate::str::contains("You: what is 3*3\nBot: The result is: 9\n"))
                .and(predicate::str::contains(
                    "You: basic programming\nBot: I can help with basic programming, general queries, and more.\n",
                )),
        );
}

#[test]
fn test_chat_quiet_skips_welcome() {
    Sandbox::new()
        .banter_cmd()
        .args(["chat", "--quiet"])
        .write_stdin("xyzzy\n")
        .assert()
        .success()
        .stdout("You: xyzzy\nBot: I'm sorry! I don't understand you.\n");
}

#[test]
fn test_chat_stops_after_farewell() {
    Sandbox::new()
        .banter_cmd()
        .args(["chat", "--quiet"])
        .write_stdin("exit\nwhat is 1+1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("You: exit\nBot: ")
                .and(predicate::str::contains("what is 1+1").not()),
        );
}
