//! Locale-aware string values.
//!
//! [`IString`] wraps text with a locale and adds two message-formatting
//! capabilities: named-parameter substitution and choice formatting, which
//! selects among message variants by number, boolean or string, including
//! CLDR plural categories evaluated from externally supplied rule data.
//!
//! ```
//! use istring::{IString, params};
//! use istring::plural::PluralData;
//!
//! let data = PluralData::from_json_str(r#"{
//!     "ru": {
//!         "one": {"and": [{"eq": ["v", 0]}, {"eq": [{"mod": ["i", 10]}, 1]}, {"neq": [{"mod": ["i", 100]}, 11]}]},
//!         "few": {"and": [{"eq": ["v", 0]}, {"eq": [{"mod": ["i", 10]}, [2, 4]]}, {"neq": [{"mod": ["i", 100]}, [12, 14]]}]}
//!     }
//! }"#).unwrap();
//!
//! let files = IString::with_locale("one#{n} файл|few#{n} файла|#{n} файлов", "ru-RU");
//! let format = |n: i64| files.format_choice_with(&data, n, &params! { "n" => n }).unwrap();
//! assert_eq!(format(21), "21 файл");
//! assert_eq!(format(3), "3 файла");
//! assert_eq!(format(12), "12 файлов");
//! ```

pub mod choice;
mod global;
pub mod plural;
pub mod text;
pub mod types;

pub use choice::ChoiceError;
pub use global::{plural_data, set_plural_data};
pub use plural::{PluralData, RuleSet};
pub use text::{IString, NormalizationForm};
pub use types::{PluralCategory, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use istring::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
