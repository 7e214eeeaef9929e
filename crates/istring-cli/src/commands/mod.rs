//! CLI command implementations.

mod category;
mod check;
mod choice;
mod format;
mod shared;

pub use category::{CategoryArgs, run_category};
pub use check::{CheckArgs, run_check};
pub use choice::{ChoiceArgs, run_choice};
pub use format::{FormatArgs, run_format};
