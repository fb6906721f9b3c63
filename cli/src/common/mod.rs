//! # Banter Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by more than one command, kept apart from command
//! logic (`commands::`), the response engine (`engine::`) and infrastructure
//! (`core::`).
//!
//! - **`ui`**: Transcript rendering for the terminal shells.
//!

/// Terminal transcript rendering ("You: ..." / "Bot: ...").
pub mod ui;
