//! Recording-year extraction from free-form database fields
//!
//! Year fields in the archive are inconsistent: bare years, ranges like
//! `1930-1935`, decade markers like `1930s`, or prose with a year buried
//! inside. Extraction tries the cheap forms first and falls back to a
//! four-digit scan.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Oldest year the archive considers plausible for a recording
const MIN_PLAUSIBLE_YEAR: i32 = 1900;

/// Current calendar year, used as the upper plausibility bound
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Extract a recording year from a free-form field
///
/// Ranges take their starting year. A four-digit token beginning with
/// `19` or `20` wins next. Otherwise leading digits are parsed and kept
/// only when they fall between 1900 and the current year.
pub fn extract_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Range form: the year before the first hyphen, taken verbatim
    if let Some((start, _)) = trimmed.split_once('-') {
        if let Some(year) = parse_leading_digits(start.trim()) {
            return Some(year);
        }
    }

    if let Some(token) = YEAR_TOKEN_REGEX.find(trimmed) {
        // Guaranteed four ASCII digits by the pattern
        return token.as_str().parse().ok();
    }

    let year = parse_leading_digits(trimmed)?;
    if (MIN_PLAUSIBLE_YEAR..=current_year()).contains(&year) {
        Some(year)
    } else {
        None
    }
}

/// Parse the leading ASCII-digit run of `text`, if any
fn parse_leading_digits(text: &str) -> Option<i32> {
    let digits = match text.find(|c: char| !c.is_ascii_digit()) {
        Some(0) => return None,
        Some(end) => &text[..end],
        None if text.is_empty() => return None,
        None => text,
    };
    digits.parse().ok()
}
