//! # Noun Lemmatizer
//!
//! File: cli/src/engine/lemmatizer.rs
//! Author: Christi Mahu
//!
//! Reduces a lowercase token to its dictionary base form, always treating it
//! as a noun. Part of speech is never disambiguated, so verbs and adjectives
//! pass through mostly unchanged ("created" stays "created") and the odd
//! verb form is read as a plural noun ("does" becomes "doe").
//!
//! Stop words are returned as-is so they stay recognizable to the stop list.
//! Irregular plurals are looked up next; regular plurals are handled with
//! suffix rules. Tokens the rules do not recognize are returned unchanged.

use super::stop_words::is_stop_word;
use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("people", "person"),
        ("men", "man"),
        ("women", "woman"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("wolves", "wolf"),
        ("shelves", "shelf"),
        ("selves", "self"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("series", "series"),
        ("species", "species"),
        ("news", "news"),
    ]
    .into_iter()
    .collect()
});

/// Suffix rewrites, tried in order; the first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("s", ""),
];

/// Endings that look plural but belong to singular nouns (class, bus, basis).
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Returns the noun lemma of `token`.
pub fn lemmatize(token: &str) -> String {
    if is_stop_word(token) {
        return token.to_string();
    }
    if let Some(base) = IRREGULAR_NOUNS.get(token) {
        return (*base).to_string();
    }
    if token.chars().count() <= 3 || SINGULAR_ENDINGS.iter().any(|e| token.ends_with(e)) {
        return token.to_string();
    }
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{}{}", stem, replacement);
        }
    }
    token.to_string()
}
