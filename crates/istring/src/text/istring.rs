use std::fmt::{Display, Formatter, Result as FmtResult};
use std::string::FromUtf16Error;
use std::sync::OnceLock;

use bon::Builder;
use icu_locale_core::Locale;
use tracing::warn;

/// Locale tag used when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// An immutable string that knows its locale.
///
/// `IString` wraps ordinary text with locale-aware formatting: named
/// parameter substitution ([`format`](IString::format)), plural and range
/// choice selection ([`format_choice`](IString::format_choice)), and
/// iteration by Unicode scalar value. Lengths and indices of the
/// string-like operations count UTF-16 code units, so they agree with the
/// platforms message catalogs are usually authored for.
///
/// Operations that look like mutations return a new `IString` carrying the
/// same locale; the receiver is never changed.
///
/// # Example
///
/// ```
/// use istring::{IString, params};
///
/// let message = IString::builder()
///     .text("There are {num} objects in the {container}.")
///     .locale("de-DE")
///     .build();
///
/// assert_eq!(message.get_locale(), "de-DE");
/// assert_eq!(
///     message.format(&params! { "num" => 12 }),
///     "There are 12 objects in the {container}."
/// );
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct IString {
    /// The text content.
    #[builder(default)]
    text: String,

    /// The locale tag as given (e.g. "en-US", "ru").
    #[builder(default = DEFAULT_LOCALE.to_string())]
    locale: String,

    /// The parsed locale tag, or `None` if it does not parse. Parsed on
    /// first use.
    #[builder(skip)]
    resolved_locale: OnceLock<Option<Locale>>,

    /// Unicode scalar values of `text`, computed on first use.
    #[builder(skip)]
    pub(super) code_points: OnceLock<Vec<char>>,
}

impl Default for IString {
    fn default() -> Self {
        IString::builder().build()
    }
}

impl IString {
    /// Create an empty string with the default locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a string with the given locale tag.
    pub fn with_locale(text: impl Into<String>, locale: impl Into<String>) -> Self {
        IString::builder().text(text).locale(locale).build()
    }

    /// Decode UTF-16 code units. Unpaired surrogates are rejected.
    pub fn from_utf16(units: &[u16]) -> Result<Self, FromUtf16Error> {
        String::from_utf16(units).map(Self::from)
    }

    /// A new string with this string's locale.
    pub(super) fn derive(&self, text: impl Into<String>) -> Self {
        IString::builder()
            .text(text)
            .locale(self.locale.clone())
            .build()
    }

    /// The text content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the value, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    // =========================================================================
    // Locale
    // =========================================================================

    /// Change the locale by tag.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.resolved_locale = OnceLock::new();
    }

    /// Change the locale to an already-parsed locale.
    pub fn set_locale_id(&mut self, locale: Locale) {
        self.locale = locale.to_string();
        self.resolved_locale = OnceLock::from(Some(locale));
    }

    /// The canonical locale tag, or the tag as given if it does not parse.
    pub fn get_locale(&self) -> String {
        self.resolved_locale()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.locale.clone())
    }

    /// The parsed locale, if the tag is well-formed.
    pub fn resolved_locale(&self) -> Option<&Locale> {
        self.resolved_locale
            .get_or_init(|| parse_locale(&self.locale))
            .as_ref()
    }

    /// The language subtag of the locale (e.g. "ru" for "ru-RU").
    pub fn language(&self) -> Option<&str> {
        self.resolved_locale()
            .map(|locale| locale.id.language.as_str())
    }
}

fn parse_locale(tag: &str) -> Option<Locale> {
    match tag.parse::<Locale>() {
        Ok(locale) => Some(locale),
        Err(error) => {
            warn!(tag, %error, "Unparseable locale tag, using default plural rules");
            None
        }
    }
}

impl Display for IString {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}

impl PartialEq for IString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for IString {}

impl PartialEq<str> for IString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for IString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl AsRef<str> for IString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for IString {
    fn from(text: &str) -> Self {
        IString::builder().text(text).build()
    }
}

impl From<String> for IString {
    fn from(text: String) -> Self {
        IString::builder().text(text).build()
    }
}

impl From<IString> for String {
    fn from(value: IString) -> Self {
        value.text
    }
}
