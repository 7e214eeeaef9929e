//! Splitting of choice pattern strings.

use super::ChoiceError;

/// One `limit#text` choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    /// The limit specifier; empty for the default choice.
    pub limit: &'a str,
    /// The replacement text, which may itself contain `#`.
    pub text: &'a str,
}

impl Choice<'_> {
    /// Whether this is the default (empty limit) choice.
    pub fn is_default(&self) -> bool {
        self.limit.is_empty()
    }

    /// The per-argument sub-limits.
    pub fn sub_limits(&self) -> impl Iterator<Item = &str> {
        self.limit.split(',')
    }
}

/// A parsed choice pattern, borrowing from its source string.
///
/// ```
/// use istring::choice::ChoicePattern;
///
/// let pattern = ChoicePattern::parse("0#none|1#one|#{n} items").unwrap();
/// assert_eq!(pattern.choices().len(), 3);
/// assert!(pattern.choices()[2].is_default());
///
/// assert!(ChoicePattern::parse("0#none|oops").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePattern<'a> {
    choices: Vec<Choice<'a>>,
}

impl<'a> ChoicePattern<'a> {
    /// Split `source` into choices. Every segment must contain a `#`;
    /// everything after the first `#` is replacement text.
    pub fn parse(source: &'a str) -> Result<Self, ChoiceError> {
        let choices = source
            .split('|')
            .map(|segment| {
                segment
                    .split_once('#')
                    .map(|(limit, text)| Choice { limit, text })
                    .ok_or_else(|| ChoiceError::Syntax {
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { choices })
    }

    pub fn choices(&self) -> &[Choice<'a>] {
        &self.choices
    }
}
