//! Error types for archive loading

use thiserror::Error;

/// Errors surfaced while obtaining the track database
///
/// Parsing itself never fails: malformed rows are skipped and an empty
/// database is a degenerate catalog. The only hard failure is the source
/// fetch.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Database source error: {0}")]
    Source(#[from] phonoteka_core::PhonotekaError),
}
