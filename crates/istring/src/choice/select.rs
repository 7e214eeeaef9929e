//! Choice selection for [`IString`].

use std::collections::HashMap;
use std::slice;

use regex::RegexBuilder;
use tracing::trace;

use super::limit::parse_numeric_limit;
use super::{ChoiceError, ChoicePattern};
use crate::global::plural_data;
use crate::plural::{Operands, PluralData, RuleSet};
use crate::text::IString;
use crate::types::Value;

impl IString {
    /// Select a choice from this choice pattern and format it.
    ///
    /// Plural category limits are evaluated with the process-wide plural
    /// data installed by [`set_plural_data`](crate::set_plural_data).
    ///
    /// # Example
    ///
    /// ```
    /// use istring::{IString, params};
    ///
    /// let pattern = IString::from("0#There are no objects.|1#There is one object.|#There are {number} objects.");
    /// let result = pattern.format_choice(22, &params! { "number" => 22 }).unwrap();
    /// assert_eq!(result, "There are 22 objects.");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if a choice has no `#` separator, if an argument is
    /// not a number, boolean or string, or if a limit tested against a
    /// string argument is not a valid regular expression.
    pub fn format_choice(
        &self,
        args: impl Into<Value>,
        params: &HashMap<String, Value>,
    ) -> Result<String, ChoiceError> {
        let data = plural_data();
        self.format_choice_with(&data, args, params)
    }

    /// Like [`format_choice`](Self::format_choice), with explicit plural data.
    pub fn format_choice_with(
        &self,
        plurals: &PluralData,
        args: impl Into<Value>,
        params: &HashMap<String, Value>,
    ) -> Result<String, ChoiceError> {
        if self.is_empty() {
            return Ok(String::new());
        }

        let pattern = ChoicePattern::parse(self.as_str())?;
        let args: Value = args.into();
        let args = normalize_args(&args)?;
        let rules = plurals.rules_for(self.language());

        let mut default = None;
        let mut selected = None;
        for (index, choice) in pattern.choices().iter().enumerate() {
            if choice.is_default() {
                default = Some(choice.text);
                continue;
            }
            if applicable(args, choice.sub_limits(), rules)? {
                trace!(index, limit = choice.limit, "Selected choice");
                selected = Some(choice.text);
                break;
            }
        }

        let text = selected.or(default).unwrap_or_default();
        Ok(IString::substitute(text, params))
    }
}

/// Wrap a scalar into a one-element slice and reject nested lists.
fn normalize_args(args: &Value) -> Result<&[Value], ChoiceError> {
    let args = match args {
        Value::List(items) => items.as_slice(),
        scalar => slice::from_ref(scalar),
    };
    if args.iter().all(Value::is_primitive) {
        Ok(args)
    } else {
        Err(ChoiceError::NonPrimitiveArgument)
    }
}

/// A choice applies when every argument passes its sub-limit; extra
/// arguments or extra sub-limits are ignored.
fn applicable<'a>(
    args: &[Value],
    limits: impl Iterator<Item = &'a str>,
    rules: &RuleSet,
) -> Result<bool, ChoiceError> {
    for (arg, limit) in args.iter().zip(limits) {
        if !test_choice(arg, limit, rules)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Test one argument against one sub-limit.
fn test_choice(arg: &Value, limit: &str, rules: &RuleSet) -> Result<bool, ChoiceError> {
    match arg {
        Value::Number(n) => Ok(parse_numeric_limit(limit).matches(&Operands::from(*n), rules)),
        Value::Float(n) => Ok(parse_numeric_limit(limit).matches(&Operands::from(*n), rules)),
        Value::Bool(b) => Ok((limit == "true" && *b) || (limit == "false" && !*b)),
        Value::String(s) => {
            let regex = RegexBuilder::new(limit)
                .case_insensitive(true)
                .build()
                .map_err(|source| ChoiceError::InvalidPattern {
                    pattern: limit.to_string(),
                    source,
                })?;
            Ok(regex.is_match(s))
        }
        Value::List(_) => Err(ChoiceError::NonPrimitiveArgument),
    }
}
