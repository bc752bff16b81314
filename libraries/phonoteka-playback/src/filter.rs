//! Attribute filtering over catalog tracks
//!
//! Filters narrow a track list by region, collection, and recording year.
//! Every active constraint must hold; an empty constraint set passes all
//! tracks, so default criteria reproduce the input unchanged.

use phonoteka_core::extract_year;
use phonoteka_core::types::{FilterCriteria, Track};

/// Select the tracks matching every active constraint
///
/// Region matching is exact against the normalized region and never
/// matches tracks with a blank region. Collection matching is exact
/// against the display name. Year matching parses the track's year field;
/// tracks whose year cannot be parsed ("unknown", blank, malformed) pass
/// any year constraint rather than vanish from the archive.
pub fn apply_filters(tracks: &[Track], criteria: &FilterCriteria) -> Vec<Track> {
    if criteria.is_unconstrained() {
        return tracks.to_vec();
    }

    tracks
        .iter()
        .filter(|track| passes(track, criteria))
        .cloned()
        .collect()
}

fn passes(track: &Track, criteria: &FilterCriteria) -> bool {
    region_passes(track, criteria) && collection_passes(track, criteria) && year_passes(track, criteria)
}

fn region_passes(track: &Track, criteria: &FilterCriteria) -> bool {
    if criteria.regions.is_empty() {
        return true;
    }
    !track.region.is_empty() && criteria.regions.contains(&track.region)
}

fn collection_passes(track: &Track, criteria: &FilterCriteria) -> bool {
    criteria.collections.is_empty() || criteria.collections.contains(&track.collection_name)
}

fn year_passes(track: &Track, criteria: &FilterCriteria) -> bool {
    let Some(range) = criteria.years else {
        return true;
    };
    match extract_year(&track.year) {
        Some(year) => range.contains(year),
        None => true,
    }
}
