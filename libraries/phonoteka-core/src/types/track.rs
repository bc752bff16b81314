/// Parsed track records
use serde::{Deserialize, Serialize};

use crate::types::ids::{CollectionId, TrackId};

/// Playable-resource locator for a track
///
/// Carries the primary URL plus the ordered fallback URLs recorded for
/// collections that need them. Rotation through the fallbacks is tracked
/// outside the record so the track itself stays immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocator {
    /// Primary playable URL
    pub url: String,

    /// Fallback URLs to try in order when the primary fails
    pub alternatives: Vec<String>,
}

impl ResourceLocator {
    /// Locator with no fallbacks
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alternatives: Vec::new(),
        }
    }

    /// Locator with ordered fallback URLs
    pub fn with_alternatives(url: impl Into<String>, alternatives: Vec<String>) -> Self {
        Self {
            url: url.into(),
            alternatives,
        }
    }
}

/// One playable recording with associated metadata
///
/// Immutable once parsed from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier from the database
    pub id: TrackId,

    /// Owning collection, derived from the id
    pub collection_id: CollectionId,

    /// Human-readable collection label
    pub collection_name: String,

    /// Normalized display title
    pub title: String,

    /// Performers, free text
    pub performers: String,

    /// Recording year as written in the database: a single year, a range
    /// ("1913-1914"), a decade qualifier, or "unknown"
    pub year: String,

    /// Recording region, per-word capitalized; may be empty
    pub region: String,

    /// Source filename from the database
    pub filename: String,

    /// Source filepath from the database
    pub filepath: String,

    /// Derived playable-resource locator
    pub resource: ResourceLocator,
}
