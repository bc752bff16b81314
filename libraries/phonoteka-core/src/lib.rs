//! Phonoteka Core
//!
//! Platform-agnostic building blocks for the Phonoteka archive player.
//!
//! This crate carries everything the higher layers share: domain types,
//! normalization of the archive's messy database fields, resource URL
//! construction, and the integration traits hosts implement.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `CollectionId`, `FilterCriteria`
//! - **Field Normalization**: title/region formatting and year extraction
//! - **Resource Locators**: CDN URL construction with per-collection quirks
//! - **Integration Traits**: `DatabaseSource` for fetching the raw database
//!
//! # Example
//!
//! ```rust
//! use phonoteka_core::types::TrackId;
//! use phonoteka_core::{extract_year, format_title};
//!
//! let id = TrackId::new("col_3_track_7");
//! assert_eq!(id.collection_id().as_str(), "col_3");
//!
//! assert_eq!(format_title("chakrulo 12"), "Chakrulo");
//! assert_eq!(extract_year("1930-1935"), Some(1930));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod locator;
pub mod text;
pub mod traits;
pub mod types;
pub mod year;

// Re-export commonly used items
pub use error::{PhonotekaError, Result};
pub use locator::{build_locator, RESOURCE_BASE};
pub use text::{format_region, format_title};
pub use traits::{DatabaseSource, StaticDatabase};
pub use year::{current_year, extract_year};

// Export all types
pub use types::{
    CollectionId, FilterCriteria, ResourceLocator, Track, TrackId, YearRange, UNKNOWN_COLLECTION,
};
