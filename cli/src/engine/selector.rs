//! # Banter Response Selector
//!
//! File: cli/src/engine/selector.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The single entry point shells call with a user utterance. Each call is
//! independent of every other call:
//!
//! 1. Classify the utterance (`IntentClassifier`).
//! 2. `Farewell` / `Greeting`: uniform random draw from the matching pool.
//! 3. `Math`: evaluate the original utterance; failures become
//!    `MATH_FAILURE_REPLY`.
//! 4. `Plain`: run the similarity engine over the corpus. A zero score yields
//!    `NO_MATCH_REPLY`; otherwise the matched corpus sentence itself is the reply.
//!
//! ## Randomness
//!
//! The pool draw uses an injected generator held behind a mutex, so a shared
//! selector stays usable from concurrent HTTP handlers and tests can pass a
//! seeded or mock generator to get exact replies.
//!
use super::intent::{Intent, IntentClassifier};
use super::math::{MathEvaluator, MATH_FAILURE_REPLY};
use super::normalizer::Normalizer;
use super::similarity::SimilarityEngine;
use crate::core::config::Config;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Reply used when the utterance shares no vocabulary with the corpus.
pub const NO_MATCH_REPLY: &str = "I'm sorry! I don't understand you.";

/// A reply together with the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// Routes utterances to the greeting, farewell, math or similarity branch.
#[derive(Debug)]
pub struct ResponseSelector<R = StdRng> {
    classifier: IntentClassifier,
    math: MathEvaluator,
    similarity: SimilarityEngine,
    corpus: Vec<String>,
    greeting_responses: Vec<String>,
    farewell_responses: Vec<String>,
    rng: Mutex<R>,
}

impl ResponseSelector<StdRng> {
    /// Builds a selector whose pool draws are seeded from OS entropy.
    pub fn from_config(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds a selector whose pool draws are reproducible for a given seed.
    pub fn seeded(config: &Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ResponseSelector<R> {
    /// # Build With Generator (`with_rng`)
    ///
    /// ## Arguments
    ///
    /// * `config`: Source of the corpus, keyword sets and response pools.
    /// * `rng`: Random source for greeting/farewell pool draws.
    pub fn with_rng(config: &Config, rng: R) -> Self {
        Self {
            classifier: IntentClassifier::from_config(&config.keywords),
            math: MathEvaluator::new(&config.keywords.math_trigger_words),
            similarity: SimilarityEngine::new(Normalizer::new()),
            corpus: config.corpus.sentences.clone(),
            greeting_responses: config.keywords.greeting_responses.clone(),
            farewell_responses: config.keywords.farewell_responses.clone(),
            rng: Mutex::new(rng),
        }
    }

    /// The response corpus, in match-index order.
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// # Handle Utterance (`handle_utterance`)
    ///
    /// The boundary used by every shell: text in, display string out.
    /// Callers should not pass empty input; it lands on the no-match reply.
    pub fn handle_utterance(&self, utterance: &str) -> String {
        self.respond(utterance).text
    }

    /// # Respond (`respond`)
    ///
    /// Like `handle_utterance`, but also reports which branch fired.
    pub fn respond(&self, utterance: &str) -> Reply {
        let intent = self.classifier.classify(utterance);
        debug!("Classified {:?} as {}", utterance, intent);

        let text = match intent {
            Intent::Farewell => self.draw(&self.farewell_responses),
            Intent::Greeting => self.draw(&self.greeting_responses),
            Intent::Math => self.math.evaluate(utterance).unwrap_or_else(|e| {
                debug!("Math evaluation failed: {}", e);
                MATH_FAILURE_REPLY.to_string()
            }),
            Intent::Plain => {
                let best = self.similarity.best_match(&self.corpus, utterance);
                debug!("Best match index {} with score {:.4}", best.index, best.score);
                if best.score == 0.0 {
                    NO_MATCH_REPLY.to_string()
                } else {
                    self.corpus[best.index].clone()
                }
            }
        };
        Reply { intent, text }
    }

    fn draw(&self, pool: &[String]) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool.choose(&mut *rng)
            .cloned()
            .unwrap_or_else(|| NO_MATCH_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn selector() -> ResponseSelector<StepRng> {
        // A constant-zero generator always draws the first pool entry.
        ResponseSelector::with_rng(&Config::default(), StepRng::new(0, 0))
    }

    #[test]
    fn test_farewell_reply_from_pool() {
        let reply = selector().respond("ok bye now");
        assert_eq!(reply.intent, Intent::Farewell);
        assert_eq!(reply.text, "Bye! Take care.");
    }

    #[test]
    fn test_greeting_reply_from_pool() {
        let reply = selector().respond("Hello there");
        assert_eq!(reply.intent, Intent::Greeting);
        assert_eq!(reply.text, "Hi!");
    }

    #[test]
    fn test_farewell_checked_before_greeting() {
        let reply = selector().respond("hi there, bye");
        assert_eq!(reply.intent, Intent::Farewell);
        assert_eq!(reply.text, "Bye! Take care.");
    }

    #[test]
    fn test_math_branch() {
        let s = selector();
        assert_eq!(s.handle_utterance("What is 2+2"), "The result is: 4");
        assert_eq!(s.handle_utterance("what is xyz$%"), MATH_FAILURE_REPLY);
    }

    #[test]
    fn test_math_prose_around_numbers_fails() {
        let s = selector();
        for utterance in [
            "what is the square root of 16",
            "calculate the area of a circle with radius 2",
        ] {
            let reply = s.respond(utterance);
            assert_eq!(reply.intent, Intent::Math);
            assert_eq!(reply.text, MATH_FAILURE_REPLY);
        }
    }

    #[test]
    fn test_plain_branch_returns_corpus_sentence() {
        let reply = selector().respond("how can you help me");
        assert_eq!(reply.intent, Intent::Plain);
        assert_eq!(
            reply.text,
            "I am a chatbot created to help you with your queries."
        );
    }

    #[test]
    fn test_plain_branch_no_match() {
        assert_eq!(selector().handle_utterance("xyzzy quux"), NO_MATCH_REPLY);
    }

    #[test]
    fn test_corpus_unchanged_after_plain_calls() {
        let s = selector();
        let before = s.corpus().to_vec();
        s.handle_utterance("basic programming");
        s.handle_utterance(&before[2]);
        s.handle_utterance("xyzzy");
        assert_eq!(s.corpus(), before.as_slice());
    }

    #[test]
    fn test_plain_branch_is_idempotent() {
        let s = selector();
        let first = s.handle_utterance("tell me about various subjects");
        let second = s.handle_utterance("tell me about various subjects");
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let config = Config::default();
        let a = ResponseSelector::seeded(&config, 42);
        let b = ResponseSelector::seeded(&config, 42);
        for _ in 0..5 {
            assert_eq!(a.handle_utterance("hey"), b.handle_utterance("hey"));
        }
    }

    #[test]
    fn test_entropy_draws_stay_in_pool() {
        let config = Config::default();
        let s = ResponseSelector::from_config(&config);
        for _ in 0..20 {
            let reply = s.handle_utterance("goodbye");
            assert!(config.keywords.farewell_responses.contains(&reply));
        }
    }
}
