//! The locale-aware string value and its text operations.

mod code_points;
mod delegates;
mod format;
mod istring;

pub use code_points::{Chars, CodePoints, from_code_point, is_surrogate, to_code_point};
pub use delegates::NormalizationForm;
pub use istring::{DEFAULT_LOCALE, IString};
