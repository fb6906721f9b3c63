//! # Banter Similarity Engine
//!
//! File: cli/src/engine/similarity.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scores a query against the response corpus with TF-IDF weighted cosine
//! similarity and reports the best-matching corpus index.
//!
//! ## Architecture
//!
//! Every call builds its own working set, `corpus ++ [query]`, so the shared
//! corpus is never mutated and concurrent callers cannot observe each other's
//! queries. Over that working set:
//!
//! 1. Each document is normalized (`Normalizer`) and stop words are dropped.
//! 2. Document frequency is counted per term, query included.
//! 3. Each document becomes a sparse vector of `count * idf(term)` with the
//!    smoothed `idf = ln((1 + n) / (1 + df)) + 1`, scaled to unit length.
//! 4. Cosine similarity between the query row and each corpus row is the dot
//!    product of the unit vectors.
//!
//! The vocabulary is rebuilt on every call. A score of `0.0` means the query
//! shares no weighted term with any corpus entry; in that case the reported
//! index is meaningless and callers must check the score first.
//!
use super::normalizer::Normalizer;
use super::stop_words::is_stop_word;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::iter;
use tracing::trace;

/// Best corpus entry for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index into the corpus that was scored.
    pub index: usize,
    /// Cosine similarity in `[0, 1]`; `0.0` means no lexical overlap.
    pub score: f64,
}

/// Sparse term weights for one document, scaled to unit length.
/// Ordered so floating-point sums come out identical on every call.
#[derive(Debug, Clone, Default)]
struct TermWeights {
    weights: BTreeMap<String, f64>,
}

impl TermWeights {
    fn from_counts(counts: BTreeMap<String, f64>, idf: &HashMap<String, f64>) -> Self {
        let mut weights: BTreeMap<String, f64> = counts
            .into_iter()
            .map(|(term, count)| {
                let weight = count * idf.get(&term).copied().unwrap_or(1.0);
                (term, weight)
            })
            .collect();
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }
        Self { weights }
    }

    fn cosine(&self, other: &TermWeights) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|o| w * o))
            .sum();
        dot.clamp(0.0, 1.0)
    }
}

/// TF-IDF matcher over a caller-supplied corpus.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    normalizer: Normalizer,
}

impl SimilarityEngine {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// # Best Match (`best_match`)
    ///
    /// ## Arguments
    ///
    /// * `corpus`: Candidate sentences, in index order. Not modified.
    /// * `query`: The user utterance.
    ///
    /// ## Returns
    ///
    /// * `MatchResult`: The highest-scoring index (the smallest index among
    ///   ties) and its score. An empty corpus yields `{ index: 0, score: 0.0 }`.
    pub fn best_match(&self, corpus: &[String], query: &str) -> MatchResult {
        let scores = self.scores(corpus, query);

        let mut best = MatchResult {
            index: 0,
            score: 0.0,
        };
        for (index, &score) in scores.iter().enumerate() {
            if score > best.score {
                best = MatchResult { index, score };
            }
        }
        best
    }

    /// Cosine similarity of `query` against every corpus entry, in corpus order.
    pub fn scores(&self, corpus: &[String], query: &str) -> Vec<f64> {
        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(String::as_str)
            .chain(iter::once(query))
            .map(|doc| self.terms(doc))
            .collect();

        let idf = inverse_document_frequency(&documents);
        let mut rows: Vec<TermWeights> = documents
            .into_iter()
            .map(|terms| TermWeights::from_counts(term_counts(terms), &idf))
            .collect();

        let query_row = match rows.pop() {
            Some(row) => row,
            None => return Vec::new(),
        };
        let scores: Vec<f64> = rows.iter().map(|row| row.cosine(&query_row)).collect();
        trace!("Similarity scores for {:?}: {:?}", query, scores);
        scores
    }

    fn terms(&self, text: &str) -> Vec<String> {
        self.normalizer
            .normalize(text)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }
}

fn term_counts(terms: Vec<String>) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

/// Smoothed IDF over the whole working set.
fn inverse_document_frequency(documents: &[Vec<String>]) -> HashMap<String, f64> {
    let n = documents.len() as f64;
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }
    doc_freq
        .into_iter()
        .map(|(term, df)| {
            let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect()
}
