//! CLDR plural rules.
//!
//! Plural data arrives as a loosely-typed JSON tree per language. It is
//! decoded once into [`Rule`] values and evaluated against the
//! [`Operands`] of a number to decide which [`PluralCategory`] the number
//! falls into.
//!
//! [`PluralCategory`]: crate::PluralCategory

mod data;
mod decode;
mod error;
mod eval;
mod operands;
mod rule;

pub use data::{PluralData, RuleSet};
pub use decode::compute_suggestions;
pub use error::{LoadError, RuleError};
pub use eval::evaluate;
pub use operands::{Operand, Operands};
pub use rule::{RangeItem, RangeSet, Rule};
