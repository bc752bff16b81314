/// ID types for Phonoteka entities
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection prefix embedded in track ids (`col_<n>_track_<m>`)
static COLLECTION_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(col_\d+)_").unwrap());

/// Sentinel collection id for tracks whose id carries no collection prefix
pub const UNKNOWN_COLLECTION: &str = "unknown";

/// Track identifier
///
/// Unique across a catalog. The owning collection is encoded as a prefix;
/// ids without the prefix fall back to the `unknown` sentinel collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the owning collection from the `col_<n>_` prefix
    pub fn collection_id(&self) -> CollectionId {
        match COLLECTION_PREFIX_REGEX.captures(&self.0) {
            Some(caps) => CollectionId::new(&caps[1]),
            None => CollectionId::unknown(),
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collection identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Create a new collection ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The sentinel collection for unprefixed track ids
    pub fn unknown() -> Self {
        Self(UNKNOWN_COLLECTION.to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `unknown` sentinel
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_COLLECTION
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
