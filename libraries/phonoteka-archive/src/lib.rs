//! Phonoteka Archive
//!
//! This crate turns the archive's raw recording database into a queryable
//! track catalog.
//!
//! # Features
//!
//! - Pipe-table database parsing with per-row fault tolerance
//! - Collection-id derivation and curated display-name overrides
//! - Catalog indices: by-collection grouping and O(1) id lookup
//! - Case-insensitive library search
//! - Filter-surface enumeration: regions, collection names, year bounds
//!
//! # Architecture
//!
//! - `database`: parsing of the pipe-table text format
//! - `catalog`: the indexed, read-only track catalog
//!
//! The async boundary sits in [`Catalog::load`], which awaits a one-shot
//! [`phonoteka_core::DatabaseSource`] fetch; everything downstream is
//! synchronous.

mod error;

pub mod catalog;
pub mod database;

pub use catalog::Catalog;
pub use database::parse_database;
pub use error::ArchiveError;

/// Result alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;
