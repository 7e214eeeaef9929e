//! String operations with the familiar string-method names.
//!
//! Index arguments and results count UTF-16 code units. A cut through the
//! middle of a surrogate pair cannot be represented in a Rust string; the
//! lone half becomes U+FFFD.

use std::str::FromStr;

use icu_casemap::CaseMapper;
use icu_locale_core::{LanguageIdentifier, langid};
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use super::IString;

impl IString {
    fn units(&self) -> Vec<u16> {
        self.as_str().encode_utf16().collect()
    }

    fn derive_units(&self, units: &[u16]) -> IString {
        self.derive(String::from_utf16_lossy(units))
    }

    /// The code unit at `index` as a one-unit string; empty when out of range.
    pub fn char_at(&self, index: usize) -> IString {
        let units = self.units();
        self.derive_units(units.get(index..=index).unwrap_or_default())
    }

    /// The code unit at `index`.
    pub fn char_code_at(&self, index: usize) -> Option<u16> {
        self.as_str().encode_utf16().nth(index)
    }

    /// Units from `start` up to `end`, clamped; swapped when `start > end`.
    pub fn substring(&self, start: usize, end: Option<usize>) -> IString {
        let units = self.units();
        let len = units.len();
        let start = start.min(len);
        let end = end.unwrap_or(len).min(len);
        let (from, to) = if start > end { (end, start) } else { (start, end) };
        self.derive_units(&units[from..to])
    }

    /// Units from `start` up to `end`; negative indices count from the end.
    pub fn slice(&self, start: isize, end: Option<isize>) -> IString {
        let units = self.units();
        let from = relative_index(start, units.len());
        let to = end.map_or(units.len(), |end| relative_index(end, units.len()));
        if from >= to {
            return self.derive(String::new());
        }
        self.derive_units(&units[from..to])
    }

    /// `length` units from `start`; a negative start counts from the end.
    pub fn substr(&self, start: isize, length: Option<usize>) -> IString {
        let units = self.units();
        let from = relative_index(start, units.len());
        let to = length.map_or(units.len(), |length| from.saturating_add(length).min(units.len()));
        self.derive_units(&units[from..to])
    }

    pub fn concat(&self, other: &str) -> IString {
        self.derive(format!("{}{other}", self.as_str()))
    }

    pub fn repeat(&self, count: usize) -> IString {
        self.derive(self.as_str().repeat(count))
    }

    /// Replace the first occurrence of `from`.
    pub fn replace(&self, from: &str, to: &str) -> IString {
        self.derive(self.as_str().replacen(from, to, 1))
    }

    /// Replace every occurrence of `from`.
    pub fn replace_all(&self, from: &str, to: &str) -> IString {
        self.derive(self.as_str().replace(from, to))
    }

    pub fn split(&self, separator: &str) -> Vec<IString> {
        self.as_str()
            .split(separator)
            .map(|part| self.derive(part))
            .collect()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    pub fn includes(&self, needle: &str) -> bool {
        self.as_str().contains(needle)
    }

    /// UTF-16 index of the first occurrence of `needle`.
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.as_str()
            .find(needle)
            .map(|byte| utf16_offset(self.as_str(), byte))
    }

    /// UTF-16 index of the last occurrence of `needle`.
    pub fn last_index_of(&self, needle: &str) -> Option<usize> {
        self.as_str()
            .rfind(needle)
            .map(|byte| utf16_offset(self.as_str(), byte))
    }

    /// Capture groups of the first match, group 0 first; unmatched groups
    /// are `None`.
    ///
    /// ```
    /// use istring::IString;
    /// use regex::Regex;
    ///
    /// let s = IString::from("v1.20");
    /// let version = Regex::new(r"(\d+)\.(\d+)").unwrap();
    /// let groups = s.match_first(&version).unwrap();
    /// assert_eq!(groups[2].as_ref().unwrap(), "20");
    /// ```
    pub fn match_first(&self, regex: &Regex) -> Option<Vec<Option<IString>>> {
        regex
            .captures(self.as_str())
            .map(|captures| self.capture_groups(&captures))
    }

    /// Capture groups of every non-overlapping match.
    pub fn match_all(&self, regex: &Regex) -> Vec<Vec<Option<IString>>> {
        regex
            .captures_iter(self.as_str())
            .map(|captures| self.capture_groups(&captures))
            .collect()
    }

    /// UTF-16 index of the first match.
    pub fn search(&self, regex: &Regex) -> Option<usize> {
        regex
            .find(self.as_str())
            .map(|found| utf16_offset(self.as_str(), found.start()))
    }

    fn capture_groups(&self, captures: &Captures<'_>) -> Vec<Option<IString>> {
        captures
            .iter()
            .map(|group| group.map(|group| self.derive(group.as_str())))
            .collect()
    }

    /// Unicode normalization.
    pub fn normalize(&self, form: NormalizationForm) -> IString {
        let text = self.as_str();
        let normalized: String = match form {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        };
        self.derive(normalized)
    }

    /// Pad on the left with repetitions of `pad` to `target` code units.
    pub fn pad_start(&self, target: usize, pad: &str) -> IString {
        let padding = padding(target.saturating_sub(self.len()), pad);
        self.derive(format!("{padding}{}", self.as_str()))
    }

    /// Pad on the right with repetitions of `pad` to `target` code units.
    pub fn pad_end(&self, target: usize, pad: &str) -> IString {
        let padding = padding(target.saturating_sub(self.len()), pad);
        self.derive(format!("{}{padding}", self.as_str()))
    }

    pub fn trim(&self) -> IString {
        self.derive(self.as_str().trim())
    }

    pub fn trim_start(&self) -> IString {
        self.derive(self.as_str().trim_start())
    }

    pub fn trim_end(&self) -> IString {
        self.derive(self.as_str().trim_end())
    }

    /// Locale-independent lowercase.
    pub fn to_lowercase(&self) -> IString {
        self.derive(self.as_str().to_lowercase())
    }

    /// Locale-independent uppercase.
    pub fn to_uppercase(&self) -> IString {
        self.derive(self.as_str().to_uppercase())
    }

    /// Lowercase using the rules of this string's language.
    ///
    /// ```
    /// use istring::IString;
    ///
    /// let turkish = IString::with_locale("KIŞ", "tr-TR");
    /// assert_eq!(turkish.to_locale_lowercase(), "kış");
    /// assert_eq!(IString::from("KIŞ").to_locale_lowercase(), "kiş");
    /// ```
    pub fn to_locale_lowercase(&self) -> IString {
        let lowered: String = CaseMapper::new()
            .lowercase_to_string(self.as_str(), &self.case_language())
            .into();
        self.derive(lowered)
    }

    /// Uppercase using the rules of this string's language.
    pub fn to_locale_uppercase(&self) -> IString {
        let uppered: String = CaseMapper::new()
            .uppercase_to_string(self.as_str(), &self.case_language())
            .into();
        self.derive(uppered)
    }

    fn case_language(&self) -> LanguageIdentifier {
        self.resolved_locale()
            .map_or_else(|| langid!("und"), |locale| locale.id.clone())
    }
}

/// A Unicode normalization form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl FromStr for NormalizationForm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            "NFKC" => Ok(NormalizationForm::Nfkc),
            "NFKD" => Ok(NormalizationForm::Nfkd),
            _ => Err(()),
        }
    }
}

fn relative_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

fn utf16_offset(text: &str, byte: usize) -> usize {
    text[..byte].encode_utf16().count()
}

fn padding(units: usize, pad: &str) -> String {
    let pad_units: Vec<u16> = pad.encode_utf16().collect();
    if pad_units.is_empty() {
        return String::new();
    }
    let repeated: Vec<u16> = pad_units.iter().copied().cycle().take(units).collect();
    String::from_utf16_lossy(&repeated)
}
