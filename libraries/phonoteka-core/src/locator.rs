//! Remote resource URL construction
//!
//! Audio objects live behind a CDN at a fixed origin, laid out as
//! `/audio/<collection folder>/<filename>` with each path segment
//! percent-encoded. Collection `col_17` predates that layout: its objects
//! sit in one flat folder under cleaned filenames, and retries get a list
//! of fallback candidates built from the raw fields.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::types::ResourceLocator;

/// Origin serving the archive's audio objects
pub const RESOURCE_BASE: &str = "https://d3mbcwzrk18stt.cloudfront.net";

const AUDIO_PREFIX: &str = "audio";

/// Collection whose objects sit in a single flat folder
pub const FLAT_LAYOUT_COLLECTION: &str = "col_17";
const FLAT_LAYOUT_FOLDER: &str = "Anania_Erkomaishvili";
const FLAT_LAYOUT_FOLDER_SPACED: &str = "Anania Erkomaishvili";

/// Bytes percent-encoded within a path segment; everything except
/// alphanumerics and `-_.!~*'()`
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static PAREN_GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d+\)\s*").unwrap());
static COPY_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+copy\.mp3$").unwrap());

/// Percent-encode one path segment
fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn audio_url(path: &str) -> String {
    format!("{}/{}/{}", RESOURCE_BASE, AUDIO_PREFIX, path)
}

/// Build the resource locator for a track's audio object
///
/// The filepath's first segment names the collection folder and the object
/// is addressed as folder plus filename; a filepath without a separator is
/// used whole as a single segment. `col_17` takes the flat-folder form
/// with fallback candidates instead.
pub fn build_locator(collection_id: &str, filepath: &str, filename: &str) -> ResourceLocator {
    if collection_id == FLAT_LAYOUT_COLLECTION {
        return build_flat_locator(filepath, filename);
    }

    let mut parts = filepath.split('/');
    let folder = parts.next().unwrap_or(filepath);
    let path = if parts.next().is_some() {
        format!("{}/{}", encode_segment(folder), encode_segment(filename))
    } else {
        encode_segment(filepath)
    };
    ResourceLocator::new(audio_url(&path))
}

/// Flat-folder locator: cleaned filename first, raw-field fallbacks after
fn build_flat_locator(filepath: &str, filename: &str) -> ResourceLocator {
    // Duplicate markers like " (2)" and a trailing " copy" never made it
    // into the flat folder's object names
    let cleaned = PAREN_GROUP_REGEX.replace_all(filename, "");
    let cleaned = COPY_SUFFIX_REGEX.replace(&cleaned, ".mp3");

    let primary = audio_url(&format!(
        "{}/{}",
        FLAT_LAYOUT_FOLDER,
        encode_segment(&cleaned)
    ));
    let alternatives = vec![
        audio_url(&format!(
            "{}/{}",
            encode_segment(FLAT_LAYOUT_FOLDER_SPACED),
            encode_segment(filename)
        )),
        audio_url(&format!(
            "{}/{}",
            FLAT_LAYOUT_FOLDER,
            encode_segment(filename)
        )),
        audio_url(&encode_segment(filename)),
        audio_url(&encode_segment(filepath)),
    ];
    ResourceLocator::with_alternatives(primary, alternatives)
}
