//! Per-language plural rule sets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use super::error::LoadError;
use super::eval::evaluate;
use super::operands::{Operand, Operands};
use super::rule::Rule;
use crate::types::PluralCategory;

/// Built-in rules used for languages without data: `one` is an integer
/// equal to 1.
static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let one = Rule::And(vec![
        Rule::binary(Rule::Eq, Rule::Symbol(Operand::I), Rule::Literal(1.0)),
        Rule::binary(Rule::Eq, Rule::Symbol(Operand::V), Rule::Literal(0.0)),
    ]);
    RuleSet::from_rules([(PluralCategory::One, one)])
});

/// The plural rules of a single language, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: HashMap<PluralCategory, Rule>,
}

impl RuleSet {
    /// Build a rule set from category/rule pairs.
    pub fn from_rules(rules: impl IntoIterator<Item = (PluralCategory, Rule)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The built-in fallback rules.
    pub fn default_rules() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    /// Get the rule for a category, if the language defines one.
    pub fn rule(&self, category: PluralCategory) -> Option<&Rule> {
        self.rules.get(&category)
    }

    /// Categories with a rule, in CLDR order.
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<PluralCategory> = self.rules.keys().copied().collect();
        categories.sort();
        categories
    }

    /// Whether the number described by `operands` belongs to `category`.
    ///
    /// `Other` always matches. A category without a rule never matches.
    pub fn matches(&self, category: PluralCategory, operands: &Operands) -> bool {
        if category == PluralCategory::Other {
            return true;
        }
        self.rule(category)
            .is_some_and(|rule| evaluate(rule, operands))
    }

    /// The first category whose rule matches, falling back to `Other`.
    ///
    /// ```
    /// use istring::PluralCategory;
    /// use istring::plural::{Operands, RuleSet};
    ///
    /// let rules = RuleSet::default_rules();
    /// assert_eq!(rules.category_for(&Operands::from(1_i64)), PluralCategory::One);
    /// assert_eq!(rules.category_for(&Operands::from(1.5)), PluralCategory::Other);
    /// ```
    pub fn category_for(&self, operands: &Operands) -> PluralCategory {
        PluralCategory::RULED
            .into_iter()
            .find(|category| self.matches(*category, operands))
            .unwrap_or(PluralCategory::Other)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Plural rules for many languages, keyed by language subtag.
///
/// The JSON form maps language codes to category objects:
///
/// ```
/// use istring::PluralCategory;
/// use istring::plural::{Operands, PluralData};
///
/// let data = PluralData::from_json_str(r#"{
///     "ar": { "two": { "eq": ["n", 2] } }
/// }"#).unwrap();
///
/// let arabic = data.rules_for(Some("ar"));
/// assert_eq!(arabic.category_for(&Operands::from(2_i64)), PluralCategory::Two);
///
/// // Unknown languages use the built-in rules.
/// let other = data.rules_for(Some("xx"));
/// assert_eq!(other.category_for(&Operands::from(1_i64)), PluralCategory::One);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PluralData {
    languages: HashMap<String, RuleSet>,
}

impl PluralData {
    /// Create an empty data set; every language uses the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and decode plural data from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|source| LoadError::Json { source })
    }

    /// Read, parse and decode plural data from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            languages = data.len(),
            "Loaded plural data"
        );
        Ok(data)
    }

    /// Add or replace the rules of one language.
    pub fn insert(&mut self, language: impl Into<String>, rules: RuleSet) {
        self.languages.insert(language.into(), rules);
    }

    /// Get the rules of a language, if present.
    pub fn get(&self, language: &str) -> Option<&RuleSet> {
        self.languages.get(language)
    }

    /// Get the rules of a language, falling back to the built-in rules when
    /// the language is unknown or absent.
    pub fn rules_for(&self, language: Option<&str>) -> &RuleSet {
        match language.and_then(|lang| self.languages.get(lang)) {
            Some(rules) => rules,
            None => {
                debug!(language = ?language, "No plural rules for language, using defaults");
                RuleSet::default_rules()
            }
        }
    }

    /// Language codes with data, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
