mod category;
mod value;

pub use category::PluralCategory;
pub use value::Value;
