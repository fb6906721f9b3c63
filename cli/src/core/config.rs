//! # Banter Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Banter. Everything the
//! response engine treats as literal data lives here: the ordered response
//! corpus, the greeting/farewell/math keyword sets with their response pools,
//! the REPL welcome line and the HTTP server defaults. Swapping the corpus or
//! the keyword sets never requires touching engine code.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `BANTER_CONFIG`), used alone
//! 2. Project-specific `.banter.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/banter/config.toml`
//! 4. Default values defined in the code (the stock corpus and keyword sets)
//!
//! When both a project and a user file exist, each section of the project file
//! wins if it differs from the built-in default.
//!
//! ## Examples
//!
//! ```toml
//! [corpus]
//! sentences = ["I can talk about Rust.", "I can talk about cooking."]
//!
//! [keywords]
//! match_policy = "whole_word"
//! greeting_inputs = ["hello", "hi"]
//! greeting_responses = ["Hello!"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let engine = Engine::from_config(&cfg);
//! ```
//!
use crate::core::error::{BanterError, Result};
use crate::engine::intent::MatchPolicy;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub server: ServerSettings,
}

/// The ordered pool of canned replies. Order is significant: a similarity
/// match is reported as an index into this list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus")]
    pub sentences: Vec<String>,
}

/// Keyword sets that short-circuit similarity matching.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
    /// How trigger phrases are matched against an utterance.
    #[serde(default)]
    pub match_policy: MatchPolicy,
    #[serde(default = "default_greeting_inputs")]
    pub greeting_inputs: Vec<String>,
    #[serde(default = "default_greeting_responses")]
    pub greeting_responses: Vec<String>,
    #[serde(default = "default_farewell_inputs")]
    pub farewell_inputs: Vec<String>,
    #[serde(default = "default_farewell_responses")]
    pub farewell_responses: Vec<String>,
    #[serde(default = "default_math_trigger_words")]
    pub math_trigger_words: Vec<String>,
}

/// Settings for the interactive `chat` shell.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// First line printed by the bot when a session opens.
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

/// Defaults for `banter serve`; command-line flags override these.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            sentences: default_corpus(),
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            greeting_inputs: default_greeting_inputs(),
            greeting_responses: default_greeting_responses(),
            farewell_inputs: default_farewell_inputs(),
            farewell_responses: default_farewell_responses(),
            math_trigger_words: default_math_trigger_words(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_corpus() -> Vec<String> {
    strings(&[
        "Hello, how can I assist you today?",
        "I am a chatbot created to help you with your queries.",
        "You can ask me anything about the topics I'm programmed to understand.",
        "Goodbye! Have a great day!",
        "I'm sorry, I didn't catch that. Could you please rephrase?",
        "I can help with basic programming, general queries, and more.",
        "Tell me more about what you're interested in.",
        "I can provide information on various subjects, or just have a chat!",
    ])
}
fn default_greeting_inputs() -> Vec<String> {
    strings(&["hello", "hi", "greetings", "sup", "what's up", "hey"])
}
fn default_greeting_responses() -> Vec<String> {
    strings(&["Hi!", "Hey!", "Hello!", "Greetings!", "Hi there!"])
}
fn default_farewell_inputs() -> Vec<String> {
    strings(&["bye", "see you", "goodbye", "exit"])
}
fn default_farewell_responses() -> Vec<String> {
    strings(&[
        "Bye! Take care.",
        "Goodbye!",
        "See you soon!",
        "It was nice talking to you!",
    ])
}
fn default_math_trigger_words() -> Vec<String> {
    strings(&["solve", "calculate", "what is"])
}
fn default_welcome() -> String {
    "Hello! How can I help you today? (You can ask about basic programming, math problems, etc.)"
        .to_string()
}
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_port() -> u16 {
    8000
}
fn default_enable_cors() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".banter.toml";

/// # Load Configuration (`load_config`)
///
/// Resolves, merges and validates the effective configuration.
///
/// ## Arguments
///
/// * `explicit`: Path given via `--config`. When present, project and user
///   files are not consulted and a missing file is an error.
///
/// ## Returns
///
/// * `Result<Config>`: The validated configuration, with keyword inputs lowercased.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let mut config = match explicit {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    normalize_keywords(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Banter", "banter") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.banter.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.banter.toml`.
/// The search stops at the first directory holding a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    Config {
        corpus: if project_cfg.corpus != defaults.corpus {
            project_cfg.corpus
        } else {
            user.corpus
        },
        keywords: if project_cfg.keywords != defaults.keywords {
            project_cfg.keywords
        } else {
            user.keywords
        },
        shell: if project_cfg.shell != defaults.shell {
            project_cfg.shell
        } else {
            user.shell
        },
        server: if project_cfg.server != defaults.server {
            project_cfg.server
        } else {
            user.server
        },
    }
}

/// Keyword matching is case-insensitive, so trigger phrases are stored lowercased.
fn normalize_keywords(config: &mut Config) {
    let keywords = &mut config.keywords;
    for set in [
        &mut keywords.greeting_inputs,
        &mut keywords.farewell_inputs,
        &mut keywords.math_trigger_words,
    ] {
        for phrase in set.iter_mut() {
            *phrase = phrase.trim().to_lowercase();
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    require_entries("corpus.sentences", &config.corpus.sentences)?;

    let keywords = &config.keywords;
    require_entries("keywords.greeting_inputs", &keywords.greeting_inputs)?;
    require_entries("keywords.greeting_responses", &keywords.greeting_responses)?;
    require_entries("keywords.farewell_inputs", &keywords.farewell_inputs)?;
    require_entries("keywords.farewell_responses", &keywords.farewell_responses)?;
    require_entries("keywords.math_trigger_words", &keywords.math_trigger_words)?;

    let sets = [
        ("greeting_inputs", &keywords.greeting_inputs),
        ("farewell_inputs", &keywords.farewell_inputs),
        ("math_trigger_words", &keywords.math_trigger_words),
    ];
    for (i, (left_name, left)) in sets.iter().enumerate() {
        let left: HashSet<String> = left.iter().map(|s| s.to_lowercase()).collect();
        for (right_name, right) in &sets[i + 1..] {
            if let Some(shared) = right.iter().find(|s| left.contains(&s.to_lowercase())) {
                return Err(anyhow!(BanterError::Config(format!(
                    "Keyword '{}' appears in both {} and {}; keyword sets must be disjoint.",
                    shared, left_name, right_name
                ))));
            }
        }
    }

    if config.shell.welcome.trim().is_empty() {
        return Err(anyhow!(BanterError::Config(
            "shell.welcome cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}

fn require_entries(name: &str, entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        return Err(anyhow!(BanterError::Config(format!(
            "{} must contain at least one entry.",
            name
        ))));
    }
    if let Some(pos) = entries.iter().position(|s| s.trim().is_empty()) {
        return Err(anyhow!(BanterError::Config(format!(
            "{} has an empty entry at position {}.",
            name, pos
        ))));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_stock_data() {
        let config = Config::default();
        assert_eq!(config.corpus.sentences.len(), 8);
        assert_eq!(
            config.corpus.sentences[3],
            "Goodbye! Have a great day!"
        );
        assert_eq!(config.keywords.match_policy, MatchPolicy::Substring);
        assert_eq!(config.server.port, 8000);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [corpus]
            sentences = ["Rust has ownership.", "Cooking needs heat."]

            [keywords]
            match_policy = "whole_word"
            greeting_inputs = ["Howdy"]

            [server]
            port = 9100
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.corpus.sentences.len(), 2);
        assert_eq!(config.keywords.match_policy, MatchPolicy::WholeWord);
        assert_eq!(config.keywords.greeting_inputs, vec!["Howdy"]);
        assert_eq!(config.keywords.farewell_inputs, default_farewell_inputs()); // Default
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, default_host()); // Default
        assert_eq!(config.shell.welcome, default_welcome()); // Default
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[corpus]\nsentence = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_keywords_lowercases() {
        let mut config = Config::default();
        config.keywords.greeting_inputs = vec!["  HeLLo ".to_string()];
        normalize_keywords(&mut config);
        assert_eq!(config.keywords.greeting_inputs, vec!["hello"]);
    }

    #[test]
    fn test_validate_config_empty_corpus() {
        let mut config = Config::default();
        config.corpus.sentences.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("corpus.sentences"));
    }

    #[test]
    fn test_validate_config_blank_response() {
        let mut config = Config::default();
        config.keywords.farewell_responses.push("   ".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("keywords.farewell_responses"));
    }

    #[test]
    fn test_validate_config_overlapping_sets() {
        let mut config = Config::default();
        config.keywords.math_trigger_words.push("Hey".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("must be disjoint"));
    }

    #[test]
    fn test_merge_prefers_changed_project_sections() {
        let mut user = Config::default();
        user.shell.welcome = "User welcome".to_string();
        user.server.port = 7000;

        let mut project = Config::default();
        project.server.port = 9000;

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.server.port, 9000);
        assert_eq!(merged.shell.welcome, "User welcome");
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(
            &path,
            "[corpus]\nsentences = [\"Only one answer.\"]\n[keywords]\nmath_trigger_words = [\"COMPUTE\"]\n",
        )
        .unwrap();

        let config = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.corpus.sentences, vec!["Only one answer."]);
        assert_eq!(config.keywords.math_trigger_words, vec!["compute"]);
    }

    #[test]
    fn test_load_config_explicit_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}
