//! Domain types shared across the Phonoteka crates

mod criteria;
mod ids;
mod track;

pub use criteria::{FilterCriteria, YearRange};
pub use ids::{CollectionId, TrackId, UNKNOWN_COLLECTION};
pub use track::{ResourceLocator, Track};
