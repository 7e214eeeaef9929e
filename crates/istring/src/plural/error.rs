//! Error types for plural data.

use std::path::PathBuf;

use thiserror::Error;

/// A plural rule node that cannot be classified.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// An object key that names no known operator.
    #[error("unknown plural rule operator '{name}'{}", suggestion_hint(.suggestions))]
    UnknownOperator {
        name: String,
        suggestions: Vec<String>,
    },

    /// A string leaf that names no known operand.
    #[error("unknown plural operand '{name}'{}", suggestion_hint(.suggestions))]
    UnknownOperand {
        name: String,
        suggestions: Vec<String>,
    },

    /// An operator node with the wrong operand shape.
    #[error("malformed '{operator}' node: {reason}")]
    Malformed {
        operator: &'static str,
        reason: String,
    },

    /// An object node with zero or several keys.
    #[error("rule object must have exactly one operator key, found {count}")]
    OperatorCount { count: usize },

    /// A JSON value kind that rules never contain.
    #[error("unexpected {kind} in plural rule")]
    UnexpectedValue { kind: &'static str },
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Errors that occur while loading plural data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading plural data.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data is not valid JSON or contains an undecodable rule.
    #[error("invalid plural data: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}
