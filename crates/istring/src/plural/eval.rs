//! Evaluation of decoded plural rules.
//!
//! Intermediate results follow the loose typing of the legacy evaluator: a
//! node may produce a number, a boolean, the whole operand set, or nothing
//! at all, and comparisons coerce between those the way the legacy data
//! expects.

use std::ptr;

use super::operands::{Operand, Operands};
use super::rule::{RangeSet, Rule};

/// Test a rule against the operands of a number.
///
/// The caller picks the rule; language lookup and default fallback happen
/// before this point.
///
/// ```
/// use istring::plural::{evaluate, Operand, Operands, Rule};
///
/// // i = 1
/// let rule = Rule::Eq(Box::new(Rule::Symbol(Operand::I)), Box::new(Rule::Literal(1.0)));
/// assert!(evaluate(&rule, &Operands::from(1_i64)));
/// assert!(!evaluate(&rule, &Operands::from(2_i64)));
/// ```
pub fn evaluate(rule: &Rule, operands: &Operands) -> bool {
    resolve(rule, Resolved::Operands(operands)).is_truthy()
}

/// An intermediate evaluation result.
#[derive(Debug, Clone, Copy)]
enum Resolved<'a> {
    Undefined,
    Number(f64),
    Bool(bool),
    Operands(&'a Operands),
}

impl Resolved<'_> {
    fn is_truthy(self) -> bool {
        match self {
            Resolved::Undefined => false,
            Resolved::Number(n) => n != 0.0 && !n.is_nan(),
            Resolved::Bool(b) => b,
            Resolved::Operands(_) => true,
        }
    }

    fn to_number(self) -> f64 {
        match self {
            Resolved::Number(n) => n,
            Resolved::Bool(b) => f64::from(u8::from(b)),
            Resolved::Undefined | Resolved::Operands(_) => f64::NAN,
        }
    }

    fn as_number(self) -> Option<f64> {
        match self {
            Resolved::Number(n) => Some(n),
            _ => None,
        }
    }

    fn operand(self, operand: Operand) -> Resolved<'static> {
        match self {
            Resolved::Operands(operands) => Resolved::Number(operands.get(operand)),
            _ => Resolved::Undefined,
        }
    }

    /// `==` semantics.
    fn loose_eq(self, other: Resolved<'_>) -> bool {
        match (self, other) {
            (Resolved::Undefined, Resolved::Undefined) => true,
            (Resolved::Operands(a), Resolved::Operands(b)) => ptr::eq(a, b),
            (Resolved::Bool(a), Resolved::Bool(b)) => a == b,
            (Resolved::Number(_) | Resolved::Bool(_), Resolved::Number(_) | Resolved::Bool(_)) => {
                self.to_number() == other.to_number()
            }
            _ => false,
        }
    }

    /// `===` semantics.
    fn strict_eq(self, other: Resolved<'_>) -> bool {
        match (self, other) {
            (Resolved::Undefined, Resolved::Undefined) => true,
            (Resolved::Operands(a), Resolved::Operands(b)) => ptr::eq(a, b),
            (Resolved::Bool(a), Resolved::Bool(b)) => a == b,
            (Resolved::Number(a), Resolved::Number(b)) => a == b,
            _ => false,
        }
    }
}

fn resolve<'a>(rule: &Rule, subject: Resolved<'a>) -> Resolved<'a> {
    match rule {
        Rule::Literal(value) => Resolved::Number(*value),
        Rule::Symbol(operand) => match subject {
            Resolved::Operands(operands) => Resolved::Number(operands.get(*operand)),
            other => other,
        },
        Rule::Identity => subject,
        Rule::Eq(left, right) => Resolved::Bool(eq(left, right, subject)),
        Rule::Neq(left, right) => Resolved::Bool(neq(left, right, subject)),
        Rule::Is(left, right) => {
            Resolved::Bool(resolve(left, subject).loose_eq(resolve(right, subject)))
        }
        Rule::IsNot(left, right) => {
            Resolved::Bool(!resolve(left, subject).loose_eq(resolve(right, subject)))
        }
        Rule::Mod(left, right) => Resolved::Number(modulo(
            resolve(left, subject).to_number(),
            resolve(right, subject).to_number(),
        )),
        Rule::Range(ranges) => {
            let tested = match subject {
                Resolved::Operands(operands) => Resolved::Number(operands.n),
                other => other,
            };
            Resolved::Bool(in_ranges(ranges, tested))
        }
        Rule::InRange(inner, ranges) | Rule::Within(inner, ranges) => {
            Resolved::Bool(in_ranges(ranges, resolve(inner, subject)))
        }
        Rule::NotIn(inner, ranges) => Resolved::Bool(!in_ranges(ranges, resolve(inner, subject))),
        Rule::Or(rules) => Resolved::Bool(rules.iter().any(|r| resolve(r, subject).is_truthy())),
        Rule::And(rules) => Resolved::Bool(rules.iter().all(|r| resolve(r, subject).is_truthy())),
    }
}

fn in_ranges(ranges: &RangeSet, value: Resolved<'_>) -> bool {
    ranges.contains(value.as_number(), value.to_number())
}

/// Equality with the legacy special cases.
///
/// With an operand symbol on the left the right side only counts when it is
/// a literal or a range test; a range test on the right of a computed left
/// side is evaluated with that left value as its subject, which is how
/// "n mod 10 in 2..4" is expressed.
fn eq(left: &Rule, right: &Rule, subject: Resolved<'_>) -> bool {
    let left_value = resolve(left, subject);
    let right_value = match left {
        Rule::Symbol(operand) => match subject {
            Resolved::Operands(_) if matches!(right, Rule::Literal(_)) || right.is_range() => {
                resolve(right, subject)
            }
            Resolved::Operands(_) => subject.operand(*operand),
            _ => Resolved::Undefined,
        },
        _ if right.is_range() => resolve(right, left_value),
        _ => resolve(right, subject),
    };
    match right_value {
        Resolved::Bool(matched) => matched,
        other => left_value.loose_eq(other),
    }
}

/// Inequality with the legacy special cases.
///
/// A symbol compared against a bare `[lo, hi]` list short-circuits to
/// "not inside the interval"; the upper-bound check reads the symbol from
/// the subject again rather than reusing the left value. A symbol compared
/// against anything else except a literal, including an `{"inrange": ..}`
/// object, compares the symbol with itself and is always false.
///
/// The polarity of these branches is kept as the rule data expects it but
/// is suspect and awaits a correctness review.
fn neq(left: &Rule, right: &Rule, subject: Resolved<'_>) -> bool {
    let left_value = resolve(left, subject);
    let right_value = match left {
        Rule::Symbol(operand) => {
            let own = subject.operand(*operand);
            match right {
                Rule::Literal(_) => resolve(right, subject),
                Rule::Range(ranges) => match ranges.leading_pair() {
                    Some((lo, hi)) => {
                        return !(left_value.to_number() >= lo && own.to_number() <= hi);
                    }
                    None => own,
                },
                _ => own,
            }
        }
        _ if right.is_range() => resolve(right, left_value),
        _ => resolve(right, subject),
    };
    match right_value {
        Resolved::Bool(matched) => !matched,
        other => !left_value.strict_eq(other),
    }
}

fn modulo(dividend: f64, modulus: f64) -> f64 {
    if modulus == 0.0 {
        return 0.0;
    }
    let remainder = dividend % modulus;
    if remainder < 0.0 {
        remainder + modulus
    } else {
        remainder
    }
}
