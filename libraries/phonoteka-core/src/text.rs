//! Title and region normalization for parsed database fields
//!
//! Reproduces the archive's display conventions: numeric annotations are
//! stripped from titles, then words are title-cased with a stop-word list;
//! regions are capitalized word by word.

use once_cell::sync::Lazy;
use regex::Regex;

static STANDALONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d+\s+").unwrap());
static PAREN_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d+\)\s*").unwrap());
static DECIMAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d+\.\d+\s+").unwrap());
static TRAILING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d+$").unwrap());
static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+").unwrap());

/// Words kept lowercase in titles unless first or following a colon
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "from", "by", "in",
    "of", "with", "da",
];

/// Normalize a raw title: strip numeric annotations, then title-case
///
/// Hyphenated words capitalize each part. The first word and any word
/// following a colon-terminated word are always capitalized; stop-words
/// stay lowercase everywhere else.
pub fn format_title(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let cleaned = STANDALONE_NUMBER_REGEX.replace_all(raw, " ");
    let cleaned = PAREN_NUMBER_REGEX.replace_all(&cleaned, " ");
    let cleaned = DECIMAL_NUMBER_REGEX.replace_all(&cleaned, " ");
    let cleaned = TRAILING_NUMBER_REGEX.replace(&cleaned, "");
    let cleaned = LEADING_NUMBER_REGEX.replace(&cleaned, "");
    let cleaned = cleaned.trim();

    let words: Vec<&str> = cleaned.split(' ').collect();
    let formatted: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if word.is_empty() {
                return String::new();
            }

            // Hyphenated words take precedence over the stop-word rules
            if word.contains('-') {
                return word
                    .split('-')
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join("-");
            }

            let after_colon = index > 0 && words[index - 1].ends_with(':');
            if index == 0 || after_colon {
                return capitalize(word);
            }

            let lowered = word.to_lowercase();
            if STOP_WORDS.contains(&lowered.as_str()) {
                return lowered;
            }

            capitalize(word)
        })
        .collect();

    formatted.join(" ")
}

/// Capitalize every whitespace-separated word of a region name
pub fn format_region(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
