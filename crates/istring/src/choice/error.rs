//! Error types for choice formatting.

use thiserror::Error;

/// An error that makes a choice pattern unusable.
#[derive(Debug, Error)]
pub enum ChoiceError {
    /// A choice segment without a `#` separator.
    #[error("syntax error in choice format pattern: {segment}")]
    Syntax { segment: String },

    /// A list nested inside the argument list.
    #[error("syntax error: formatChoice parameter for the argument index cannot be an object")]
    NonPrimitiveArgument,

    /// A limit that does not compile as a regular expression.
    #[error("invalid regular expression '{pattern}' in choice limit: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
