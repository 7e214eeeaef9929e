//! Named-parameter substitution.

use std::collections::HashMap;

use super::IString;
use crate::types::Value;

impl IString {
    /// Replace every `{name}` placeholder whose name is in `params`.
    ///
    /// Names are matched literally and case-sensitively. Placeholders
    /// without a parameter are left untouched, so a message can be
    /// formatted progressively across several calls. Substituted values are
    /// not scanned again.
    ///
    /// ```
    /// use istring::{IString, params};
    ///
    /// let message = IString::from("{greeting}, {name}! {greeting}!");
    /// assert_eq!(
    ///     message.format(&params! { "greeting" => "Hi", "unused" => 1 }),
    ///     "Hi, {name}! Hi!"
    /// );
    /// ```
    pub fn format(&self, params: &HashMap<String, Value>) -> String {
        Self::substitute(self.as_str(), params)
    }

    pub(crate) fn substitute(template: &str, params: &HashMap<String, Value>) -> String {
        if params.is_empty() {
            return template.to_string();
        }

        let mut output = String::with_capacity(template.len());
        let mut remaining = template;
        while let Some(open) = remaining.find('{') {
            output.push_str(&remaining[..open]);
            let after_open = &remaining[open + 1..];
            let replacement = after_open
                .split_once('}')
                .and_then(|(name, rest)| params.get(name).map(|value| (value, rest)));
            match replacement {
                Some((value, rest)) => {
                    output.push_str(&value.to_string());
                    remaining = rest;
                }
                None => {
                    output.push('{');
                    remaining = after_open;
                }
            }
        }
        output.push_str(remaining);
        output
    }
}
