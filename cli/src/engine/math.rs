//! # Banter Math Evaluator
//!
//! File: cli/src/engine/math.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers math-intent utterances such as "what is 2+2" or
//! "calculate sqrt(16) * 3". The evaluator receives the raw utterance, trigger
//! phrase included, and finds the arithmetic inside it on its own:
//!
//! - Everything up to and including the first trigger phrase is dropped. With
//!   no trigger phrase present the whole utterance is the expression.
//! - Trailing `?`, `!`, `=` and `.` are removed.
//! - The remainder must be pure arithmetic: numbers, operators, parentheses,
//!   the constants `pi` and `e`, and calls to built-in functions such as
//!   `sqrt(`. Any other word fails the whole utterance.
//! - It is evaluated numerically with `meval`. Syntax errors and non-finite
//!   results are failures too.
//!
//! Callers that need a displayable string regardless of outcome map any
//! `EvalError` to `MATH_FAILURE_REPLY`.
//!
use thiserror::Error;
use tracing::debug;

/// Reply shown when an utterance cannot be evaluated.
pub const MATH_FAILURE_REPLY: &str = "I couldn't understand the math problem.";

const FUNCTIONS: &[&str] = &[
    "sqrt", "exp", "ln", "abs", "sin", "cos", "tan", "asin", "acos", "atan", "atan2", "sinh",
    "cosh", "tanh", "floor", "ceil", "round", "signum", "max", "min",
];

const CONSTANTS: &[&str] = &["pi", "e"];

const OPERATORS: &[char] = &['+', '-', '*', '/', '^', '%', '(', ')', ',', '.'];

/// Reasons an utterance could not be turned into a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("no arithmetic expression found")]
    NoExpression,

    #[error("could not evaluate '{expression}': {reason}")]
    Parse { expression: String, reason: String },

    #[error("'{0}' does not evaluate to a finite number")]
    NonFinite(String),
}

/// Evaluates the arithmetic that follows a math trigger phrase.
#[derive(Debug, Clone)]
pub struct MathEvaluator {
    triggers: Vec<String>,
}

impl MathEvaluator {
    /// ## Arguments
    ///
    /// * `triggers`: Phrases that introduce the expression ("what is", "solve").
    pub fn new(triggers: &[String]) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.trim().to_lowercase()).collect(),
        }
    }

    /// # Evaluate Math Utterance (`evaluate`)
    ///
    /// ## Arguments
    ///
    /// * `utterance`: The raw user text, e.g. `"What is (2+3)*4?"`.
    ///
    /// ## Returns
    ///
    /// * `Ok(String)`: `"The result is: 20"`.
    /// * `Err(EvalError)`: No expression was found, it held words that are not
    ///   arithmetic, it failed to parse, or it was not finite.
    pub fn evaluate(&self, utterance: &str) -> Result<String, EvalError> {
        let expression = self.locate_expression(utterance)?;
        debug!("Evaluating math expression: {:?}", expression);

        let value = meval::eval_str(&expression).map_err(|e| EvalError::Parse {
            expression: expression.clone(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() {
            return Err(EvalError::NonFinite(expression));
        }
        Ok(format!("The result is: {}", format_number(value)))
    }

    /// Extracts the lowercased arithmetic after the first trigger phrase.
    fn locate_expression(&self, text: &str) -> Result<String, EvalError> {
        let lowered = text.to_lowercase();
        let start = self
            .triggers
            .iter()
            .filter(|t| !t.is_empty())
            .filter_map(|t| lowered.find(t.as_str()).map(|pos| (pos, pos + t.len())))
            .min()
            .map_or(0, |(_, end)| end);

        let expression = lowered[start..]
            .trim()
            .trim_end_matches(|c: char| matches!(c, '?' | '!' | '=' | '.') || c.is_whitespace());
        if !has_operand(expression) {
            return Err(EvalError::NoExpression);
        }
        check_symbols(expression)?;
        Ok(expression.to_string())
    }
}

impl Default for MathEvaluator {
    fn default() -> Self {
        let triggers: Vec<String> = ["solve", "calculate", "what is"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::new(&triggers)
    }
}

/// True if the text holds a digit, a known constant or a known function name.
fn has_operand(expression: &str) -> bool {
    expression.chars().any(|c| c.is_ascii_digit())
        || identifiers(expression)
            .any(|(word, _)| CONSTANTS.contains(&word) || FUNCTIONS.contains(&word))
}

/// Rejects any character or word that is not part of an arithmetic expression.
fn check_symbols(expression: &str) -> Result<(), EvalError> {
    let reject = |reason: String| EvalError::Parse {
        expression: expression.to_string(),
        reason,
    };

    for (word, end) in identifiers(expression) {
        let is_call = expression[end..].trim_start().starts_with('(');
        let known = CONSTANTS.contains(&word) || (is_call && FUNCTIONS.contains(&word));
        if !known {
            return Err(reject(format!("unknown word '{}'", word)));
        }
    }

    match expression.chars().find(|&c| {
        !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || OPERATORS.contains(&c))
    }) {
        Some(c) => Err(reject(format!("unexpected character '{}'", c))),
        None => Ok(()),
    }
}

/// Yields each identifier (a letter followed by letters, digits or `_`) with
/// the byte offset just past its end.
fn identifiers(expression: &str) -> impl Iterator<Item = (&str, usize)> {
    let bytes = expression.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            if bytes[pos].is_ascii_alphabetic() {
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                return Some((&expression[start..pos], pos));
            }
            pos += 1;
        }
        None
    })
}

/// Integral values print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
