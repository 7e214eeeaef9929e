//! Choice formatting.
//!
//! A choice pattern is a `|`-separated list of `limit#text` choices. Each
//! limit is tested against the choice arguments; the first applicable
//! choice is selected and its text formatted with named parameters.

mod error;
mod limit;
mod pattern;
mod select;

pub use error::ChoiceError;
pub use limit::{NumericLimit, parse_numeric_limit};
pub use pattern::{Choice, ChoicePattern};
