//! Unicode scalar iteration over UTF-16 modeled text.

use std::ops::RangeInclusive;

use super::IString;

const LEAD_SURROGATES: RangeInclusive<u16> = 0xD800..=0xDBFF;
const TRAIL_SURROGATES: RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Whether a UTF-16 code unit is a lead or trail surrogate.
pub fn is_surrogate(unit: u16) -> bool {
    LEAD_SURROGATES.contains(&unit) || TRAIL_SURROGATES.contains(&unit)
}

/// The scalar value starting at a UTF-16 index.
///
/// A lead surrogate followed by a trail surrogate combines into one
/// supplementary-plane value; any other unit is returned as is, including
/// an unpaired surrogate.
///
/// ```
/// use istring::text::to_code_point;
///
/// let units: Vec<u16> = "a\u{10302}".encode_utf16().collect();
/// assert_eq!(to_code_point(&units, 0), Some(0x61));
/// assert_eq!(to_code_point(&units, 1), Some(0x10302));
/// assert_eq!(to_code_point(&units, 3), None);
/// ```
pub fn to_code_point(units: &[u16], index: usize) -> Option<u32> {
    let unit = *units.get(index)?;
    match units.get(index + 1) {
        Some(&trail) if LEAD_SURROGATES.contains(&unit) && TRAIL_SURROGATES.contains(&trail) => {
            Some(combine(unit, trail))
        }
        _ => Some(u32::from(unit)),
    }
}

/// Render a scalar value as text; `None` for surrogates and values past
/// U+10FFFF.
pub fn from_code_point(code_point: u32) -> Option<String> {
    char::from_u32(code_point).map(String::from)
}

fn combine(lead: u16, trail: u16) -> u32 {
    0x10000 + ((u32::from(lead) - 0xD800) << 10) + (u32::from(trail) - 0xDC00)
}

/// Walk UTF-16 units once, joining surrogate pairs into one scalar.
fn generate_code_points(units: &[u16]) -> Vec<char> {
    let mut code_points = Vec::with_capacity(units.len());
    let mut index = 0;
    while let Some(code_point) = to_code_point(units, index) {
        index += if code_point > 0xFFFF { 2 } else { 1 };
        code_points.push(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    code_points
}

impl IString {
    /// The Unicode scalar values of this string, computed once and cached.
    pub fn code_points(&self) -> &[char] {
        self.code_points.get_or_init(|| {
            let units: Vec<u16> = self.as_str().encode_utf16().collect();
            generate_code_points(&units)
        })
    }

    /// Number of Unicode scalar values. Never more than [`len`](Self::len).
    ///
    /// ```
    /// use istring::IString;
    ///
    /// let s = IString::from("a\u{1F600}b");
    /// assert_eq!(s.len(), 4);
    /// assert_eq!(s.code_point_length(), 3);
    /// ```
    pub fn code_point_length(&self) -> usize {
        self.code_points().len()
    }

    /// The scalar value at a scalar (not code unit) position.
    pub fn code_point_at(&self, index: usize) -> Option<u32> {
        self.code_points().get(index).copied().map(u32::from)
    }

    /// The scalar value starting at a UTF-16 code unit position.
    pub fn at(&self, index: usize) -> Option<u32> {
        let units: Vec<u16> = self.as_str().encode_utf16().collect();
        to_code_point(&units, index)
    }

    /// Iterate one-character strings, one per scalar value.
    pub fn iter(&self) -> Chars<'_> {
        Chars::new(self.code_points())
    }

    /// Explicit character cursor; same sequence as [`iter`](Self::iter).
    pub fn char_iter(&self) -> Chars<'_> {
        self.iter()
    }

    /// Explicit cursor over numeric scalar values.
    pub fn code_point_iter(&self) -> CodePoints<'_> {
        CodePoints {
            code_points: self.code_points(),
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a IString {
    type Item = String;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor yielding each scalar value as a `String`.
///
/// Each cursor starts at the beginning; creating one never consumes the
/// underlying string.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    code_points: &'a [char],
    index: usize,
}

impl<'a> Chars<'a> {
    fn new(code_points: &'a [char]) -> Self {
        Self {
            code_points,
            index: 0,
        }
    }

    /// Whether another character remains.
    pub fn has_next(&self) -> bool {
        self.index < self.code_points.len()
    }
}

impl Iterator for Chars<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let ch = self.code_points.get(self.index)?;
        self.index += 1;
        Some(ch.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code_points.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chars<'_> {}

/// A cursor yielding each scalar value as a number.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    code_points: &'a [char],
    index: usize,
}

impl CodePoints<'_> {
    /// Whether another scalar value remains.
    pub fn has_next(&self) -> bool {
        self.index < self.code_points.len()
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let ch = self.code_points.get(self.index)?;
        self.index += 1;
        Some(u32::from(*ch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code_points.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CodePoints<'_> {}
