//! # Banter Text Normalizer
//!
//! File: cli/src/engine/normalizer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns free text into the token sequence that the similarity engine counts:
//!
//! 1. Lowercase the input.
//! 2. Remove every ASCII punctuation character (`it's` becomes `its`, `2+2` becomes `22`).
//! 3. Split on Unicode word boundaries.
//! 4. Reduce each token to its noun lemma (see `lemmatizer`).
//!
//! Normalization is total: any string, including the empty one, produces a
//! (possibly empty) token list.
//!
use super::lemmatizer::lemmatize;
use unicode_segmentation::UnicodeSegmentation;

/// Stateless text normalizer. Constructed once and shared by reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// # Normalize Text (`normalize`)
    ///
    /// ## Arguments
    ///
    /// * `text`: Any input string.
    ///
    /// ## Returns
    ///
    /// * `Vec<String>`: Lowercase, punctuation-free, lemmatized tokens in input order.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        stripped.unicode_words().map(lemmatize).collect()
    }
}
