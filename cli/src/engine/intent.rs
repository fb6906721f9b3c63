//! # Banter Intent Classifier
//!
//! File: cli/src/engine/intent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Cheap keyword checks that run before any similarity work. An utterance is
//! tagged with exactly one `Intent`, checked in strict priority order:
//!
//! 1. `Farewell` if any farewell phrase matches
//! 2. `Greeting` if any greeting phrase matches
//! 3. `Math` if any math trigger phrase matches
//! 4. `Plain` otherwise
//!
//! "hi there, bye" is a farewell: the first matching category wins.
//!
//! ## Matching Policy
//!
//! `MatchPolicy::Substring` (the default) tests plain containment in the
//! lowercased utterance, so "goodbyee" matches "bye" and "this" matches "hi".
//! `MatchPolicy::WholeWord` only matches complete word sequences.
//!
use crate::core::config::KeywordConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified category of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Farewell,
    Greeting,
    Math,
    Plain,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Farewell => "farewell",
            Intent::Greeting => "greeting",
            Intent::Math => "math",
            Intent::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// How a trigger phrase is located inside an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Raw substring containment.
    #[default]
    Substring,
    /// The phrase's words must appear as a contiguous run of whole words.
    WholeWord,
}

impl MatchPolicy {
    /// Both arguments are expected to be lowercase already.
    pub fn matches(&self, utterance: &str, phrase: &str) -> bool {
        match self {
            MatchPolicy::Substring => utterance.contains(phrase),
            MatchPolicy::WholeWord => {
                let haystack = words(utterance);
                let needle = words(phrase);
                !needle.is_empty()
                    && haystack
                        .windows(needle.len())
                        .any(|window| window == needle.as_slice())
            }
        }
    }
}

/// Apostrophes stay inside words so "what's" is one word.
fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Keyword-driven classifier built from the `[keywords]` config section.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    policy: MatchPolicy,
    farewell_inputs: Vec<String>,
    greeting_inputs: Vec<String>,
    math_trigger_words: Vec<String>,
}

impl IntentClassifier {
    pub fn from_config(keywords: &KeywordConfig) -> Self {
        let lower = |set: &[String]| -> Vec<String> { set.iter().map(|s| s.to_lowercase()).collect() };
        Self {
            policy: keywords.match_policy,
            farewell_inputs: lower(&keywords.farewell_inputs),
            greeting_inputs: lower(&keywords.greeting_inputs),
            math_trigger_words: lower(&keywords.math_trigger_words),
        }
    }

    /// # Classify Utterance (`classify`)
    ///
    /// ## Arguments
    ///
    /// * `utterance`: The raw user text; case is ignored.
    ///
    /// ## Returns
    ///
    /// * `Intent`: The first category, in priority order, with a matching phrase.
    pub fn classify(&self, utterance: &str) -> Intent {
        let text = utterance.to_lowercase();
        let hit = |set: &[String]| set.iter().any(|phrase| self.policy.matches(&text, phrase));

        if hit(&self.farewell_inputs) {
            Intent::Farewell
        } else if hit(&self.greeting_inputs) {
            Intent::Greeting
        } else if hit(&self.math_trigger_words) {
            Intent::Math
        } else {
            Intent::Plain
        }
    }
}
