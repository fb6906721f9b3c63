//! # Banter Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Loading, merging and validation of corpus, keyword and server settings
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{BanterError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
