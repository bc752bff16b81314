//! Pipe-table database parsing
//!
//! The recording database is a plain-text file of markdown-style pipe
//! tables, one per collection, each introduced by a `# <name> Collection`
//! header line. Rows carry a fixed column order. Anything that does not fit
//! the grammar is skipped, never fatal: a malformed database parses to an
//! empty track list.

use once_cell::sync::Lazy;
use regex::Regex;

use phonoteka_core::types::{CollectionId, Track, TrackId};
use phonoteka_core::{build_locator, format_region, format_title};

/// Column header that opens a track table
const TABLE_HEADER_PREFIX: &str = "| Track ID | Collection Name |";

/// Divider row between the column header and the data rows
const SEPARATOR_PREFIX: &str = "|----";

/// Minimum fields per data row: id, collection name, title, filename,
/// filepath, performers, year; region is optional
const MIN_FIELDS: usize = 7;

static SECTION_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# (.*?) Collection").unwrap());

/// Parse raw database text into tracks, in file order
///
/// Rows with fewer than seven fields are skipped silently; rows that cannot
/// yield a playable resource are skipped with a warning. Text with no
/// recognizable tables parses to an empty vector.
pub fn parse_database(raw: &str) -> Vec<Track> {
    let mut tracks = Vec::new();
    let mut in_table = false;

    for raw_line in raw.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        // Section header: note the collection and leave table mode
        if line.starts_with("# ") && line.contains("Collection") {
            if let Some(header) = SECTION_HEADER_REGEX.captures(line) {
                tracing::debug!("Parsing section: {}", &header[1]);
                in_table = false;
                continue;
            }
        }

        if line.starts_with(TABLE_HEADER_PREFIX) {
            in_table = true;
            continue;
        }

        if line.starts_with(SEPARATOR_PREFIX) {
            continue;
        }

        if in_table && line.starts_with('|') {
            if let Some(track) = parse_row(line) {
                tracks.push(track);
            }
        }
    }

    tracks
}

/// Parse one data row; `None` drops the row
fn parse_row(line: &str) -> Option<Track> {
    let fields: Vec<&str> = line
        .split('|')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect();

    if fields.len() < MIN_FIELDS {
        return None;
    }

    let id = TrackId::new(fields[0]);
    let collection_id = id.collection_id();
    let collection_name = collection_display_name(&collection_id, fields[1]);
    let filename = fields[3];
    let filepath = fields[4];

    if filepath.is_empty() || filename.is_empty() {
        tracing::warn!(
            "Skipping track with missing filepath or filename: {}",
            fields[0]
        );
        return None;
    }

    let resource = build_locator(collection_id.as_str(), filepath, filename);
    let region = fields.get(7).map_or_else(String::new, |r| format_region(r));

    Some(Track {
        id,
        collection_id,
        collection_name,
        title: format_title(fields[2]),
        performers: fields[5].to_string(),
        year: fields[6].to_string(),
        region,
        filename: filename.to_string(),
        filepath: filepath.to_string(),
        resource,
    })
}

/// Curated display names for collections whose database labels are wrong
fn collection_display_name(collection_id: &CollectionId, raw: &str) -> String {
    match collection_id.as_str() {
        "col_10" => "Yvette Grimaud Collection".to_string(),
        "col_11" => "Lanchkhuti 1931 Collection".to_string(),
        "col_12" => "Berdzenishvili Collection".to_string(),
        _ => raw.to_string(),
    }
}
