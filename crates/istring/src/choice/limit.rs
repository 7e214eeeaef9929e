//! Numeric limit parser using winnow.
//!
//! Parses the limit of a choice tested against a numeric argument. Handles:
//! - Comparisons: `<=5`, `>=5`, `<5`, `>5`
//! - Plural categories: `zero`, `one`, `two`, `few`, `many`
//! - Catch-alls: `other` and the empty limit
//! - Integer ranges: `2-4`
//! - Exact integers: `7`
//!
//! Number parsing is lenient: leading whitespace is skipped and trailing
//! garbage ignored, and a limit without any digits never matches.

use winnow::ascii::{digit0, digit1, multispace0};
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, rest, take_till};

use crate::plural::{Operands, RuleSet};
use crate::types::PluralCategory;

/// A parsed numeric choice limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLimit {
    /// `<=threshold`
    AtMost(f64),
    /// `>=threshold`
    AtLeast(f64),
    /// `<threshold`
    Below(f64),
    /// `>threshold`
    Above(f64),
    /// A plural category with a rule (`zero` through `many`).
    Category(PluralCategory),
    /// `other` or the empty limit.
    Any,
    /// `start-end`, inclusive. `None` bounds never match.
    Range(Option<f64>, Option<f64>),
    /// A single integer. `None` never matches.
    Exact(Option<f64>),
}

impl NumericLimit {
    /// Test the limit against a number's operands.
    ///
    /// Category limits are evaluated with `rules`, which the caller has
    /// already resolved for the string's language.
    pub fn matches(&self, operands: &Operands, rules: &RuleSet) -> bool {
        let n = operands.n;
        match *self {
            NumericLimit::AtMost(threshold) => n <= threshold,
            NumericLimit::AtLeast(threshold) => n >= threshold,
            NumericLimit::Below(threshold) => n < threshold,
            NumericLimit::Above(threshold) => n > threshold,
            NumericLimit::Category(category) => rules.matches(category, operands),
            NumericLimit::Any => true,
            NumericLimit::Range(Some(start), Some(end)) => n >= start && n <= end,
            NumericLimit::Range(..) => false,
            NumericLimit::Exact(value) => value.is_some_and(|value| n == value),
        }
    }
}

/// Parse a numeric limit. Every input yields a limit; input that fits no
/// other form is an exact match that may never succeed.
///
/// ```
/// use istring::PluralCategory;
/// use istring::choice::{NumericLimit, parse_numeric_limit};
///
/// assert_eq!(parse_numeric_limit("<=10"), NumericLimit::AtMost(10.0));
/// assert_eq!(parse_numeric_limit("few"), NumericLimit::Category(PluralCategory::Few));
/// assert_eq!(parse_numeric_limit("2-4"), NumericLimit::Range(Some(2.0), Some(4.0)));
/// assert_eq!(parse_numeric_limit("x"), NumericLimit::Exact(None));
/// ```
pub fn parse_numeric_limit(input: &str) -> NumericLimit {
    let mut remaining = input;
    numeric_limit(&mut remaining).unwrap_or(NumericLimit::Exact(None))
}

fn numeric_limit(input: &mut &str) -> ModalResult<NumericLimit> {
    alt((comparison, keyword, range, exact)).parse_next(input)
}

/// Two-character operators are tried first so `<=` is not read as `<`.
fn comparison(input: &mut &str) -> ModalResult<NumericLimit> {
    alt((
        preceded("<=", threshold).map(NumericLimit::AtMost),
        preceded(">=", threshold).map(NumericLimit::AtLeast),
        preceded('<', threshold).map(NumericLimit::Below),
        preceded('>', threshold).map(NumericLimit::Above),
    ))
    .parse_next(input)
}

/// A whole-limit keyword.
fn keyword(input: &mut &str) -> ModalResult<NumericLimit> {
    alt((
        terminated(
            alt((
                "zero".value(NumericLimit::Category(PluralCategory::Zero)),
                "one".value(NumericLimit::Category(PluralCategory::One)),
                "two".value(NumericLimit::Category(PluralCategory::Two)),
                "few".value(NumericLimit::Category(PluralCategory::Few)),
                "many".value(NumericLimit::Category(PluralCategory::Many)),
                "other".value(NumericLimit::Any),
            )),
            eof,
        ),
        eof.value(NumericLimit::Any),
    ))
    .parse_next(input)
}

/// `start-end`, split on the first dash.
fn range(input: &mut &str) -> ModalResult<NumericLimit> {
    let (start, _, end) = (take_till(0.., '-'), '-', rest).parse_next(input)?;
    Ok(NumericLimit::Range(leading_int(start), leading_int(end)))
}

fn exact(input: &mut &str) -> ModalResult<NumericLimit> {
    rest.map(|text| NumericLimit::Exact(leading_int(text)))
        .parse_next(input)
}

/// A float threshold; consumes the rest of the limit.
fn threshold(input: &mut &str) -> ModalResult<f64> {
    let _ = multispace0.parse_next(input)?;
    let literal = opt(float_literal).parse_next(input)?;
    let _ = rest.parse_next(input)?;
    Ok(literal
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(f64::NAN))
}

fn float_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        opt(one_of(['+', '-'])),
        alt((
            "Infinity".void(),
            (digit1, opt(('.', digit0))).void(),
            ('.', digit1).void(),
        )),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// The leading base-10 integer of `text`, if any. Digits beyond the `i64`
/// range still parse, losing precision like any large float.
fn leading_int(text: &str) -> Option<f64> {
    let mut remaining = text;
    integer_prefix(&mut remaining).ok()
}

fn integer_prefix(input: &mut &str) -> ModalResult<f64> {
    preceded(multispace0, (opt(one_of(['+', '-'])), digit1).take())
        .try_map(|digits: &str| digits.parse::<f64>())
        .parse_next(input)
}
