//! Track catalog with derived indices
//!
//! Owns the parsed track list plus the lookups built over it: per-collection
//! grouping in parse order and O(1) lookup by id. Built once at load time,
//! read-only afterwards.

use std::collections::{BTreeSet, HashMap};

use phonoteka_core::traits::DatabaseSource;
use phonoteka_core::types::{CollectionId, Track, TrackId, YearRange};
use phonoteka_core::{current_year, extract_year};

use crate::database::parse_database;
use crate::Result;

/// Fallback lower bound when no track carries a parseable year
const DEFAULT_MIN_YEAR: i32 = 1900;

/// Parsed track database with derived indices
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    collection_order: Vec<CollectionId>,
    collection_index: HashMap<CollectionId, Vec<usize>>,
    id_index: HashMap<TrackId, usize>,
}

impl Catalog {
    /// Fetch the database through `source`, parse it, and build indices
    ///
    /// Fails only when the fetch fails. An empty parse yields a degenerate
    /// empty catalog; consumers decide whether that is acceptable.
    ///
    /// # Errors
    /// Returns an error if the source cannot deliver the database text
    pub async fn load(source: &impl DatabaseSource) -> Result<Self> {
        let text = source.fetch_database().await?;
        let catalog = Self::from_text(&text);

        tracing::info!(
            "Loaded {} tracks from the recording database",
            catalog.len()
        );
        for id in &catalog.collection_order {
            tracing::info!("Collection {}: {} tracks", id, catalog.collection_size(id));
        }

        Ok(catalog)
    }

    /// Build a catalog from already-fetched database text
    pub fn from_text(raw: &str) -> Self {
        let tracks = parse_database(raw);

        let mut collection_order = Vec::new();
        let mut collection_index: HashMap<CollectionId, Vec<usize>> = HashMap::new();
        let mut id_index = HashMap::with_capacity(tracks.len());

        for (position, track) in tracks.iter().enumerate() {
            if !collection_index.contains_key(&track.collection_id) {
                collection_order.push(track.collection_id.clone());
            }
            collection_index
                .entry(track.collection_id.clone())
                .or_default()
                .push(position);
            id_index.insert(track.id.clone(), position);
        }

        Self {
            tracks,
            collection_order,
            collection_index,
            id_index,
        }
    }

    /// All tracks in parse order
    pub fn all(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the catalog
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.id_index.get(id).map(|&position| &self.tracks[position])
    }

    /// Tracks of one collection in parse order; empty for unknown ids
    pub fn by_collection(&self, id: &CollectionId) -> Vec<&Track> {
        self.collection_index
            .get(id)
            .map(|positions| positions.iter().map(|&p| &self.tracks[p]).collect())
            .unwrap_or_default()
    }

    /// Number of tracks in one collection
    pub fn collection_size(&self, id: &CollectionId) -> usize {
        self.collection_index.get(id).map_or(0, Vec::len)
    }

    /// Case-insensitive substring search over title, performers,
    /// collection name, and region
    ///
    /// A blank query returns nothing: an empty search box must not mean
    /// "show everything".
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.tracks
            .iter()
            .filter(|track| {
                track.title.to_lowercase().contains(&needle)
                    || track.performers.to_lowercase().contains(&needle)
                    || track.collection_name.to_lowercase().contains(&needle)
                    || track.region.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Collection ids in first-appearance order
    pub fn collection_ids(&self) -> &[CollectionId] {
        &self.collection_order
    }

    /// Distinct collection display names, sorted
    pub fn collection_names(&self) -> Vec<String> {
        self.tracks
            .iter()
            .map(|track| track.collection_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-empty regions, sorted
    pub fn regions(&self) -> Vec<String> {
        self.tracks
            .iter()
            .filter(|track| !track.region.is_empty())
            .map(|track| track.region.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Year span of the catalog, rounded outward to whole decades
    ///
    /// Defaults to 1900..current year when no track carries a parseable
    /// year; the defaults are rounded like any other bounds.
    pub fn year_bounds(&self) -> YearRange {
        let mut bounds: Option<(i32, i32)> = None;
        for track in &self.tracks {
            if let Some(year) = extract_year(&track.year) {
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(year), max.max(year)),
                    None => (year, year),
                });
            }
        }

        let (min, max) = bounds.unwrap_or_else(|| (DEFAULT_MIN_YEAR, current_year()));
        YearRange::new(round_down_to_decade(min), round_up_to_decade(max))
    }
}

fn round_down_to_decade(year: i32) -> i32 {
    (year / 10) * 10
}

fn round_up_to_decade(year: i32) -> i32 {
    ((year + 9) / 10) * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Field Recordings Collection with Track IDs

| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
|----------|----------------|-------|----------|----------|------------|------|--------|
| col_0_track_1 | Field Recordings | chakrulo | chakrulo.mp3 | Field Recordings/chakrulo.mp3 | Gori Ensemble | 1952 | kakheti |
| col_0_track_2 | Field Recordings | alilo | alilo.mp3 | Field Recordings/alilo.mp3 | Rustavi Choir | 1913-1914 | guria |

# Archive Recordings Collection

| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
|----------|----------------|-------|----------|----------|------------|------|--------|
| col_1_track_1 | Archive Recordings | naduri | naduri.mp3 | Archive Recordings/naduri.mp3 | Village Singers | unknown | guria |
";

    fn sample_catalog() -> Catalog {
        Catalog::from_text(SAMPLE)
    }

    #[test]
    fn test_indices_cover_all_tracks() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let id = TrackId::new("col_0_track_2");
        let track = catalog.get(&id).unwrap();
        assert_eq!(track.title, "Alilo");

        assert!(catalog.get(&TrackId::new("col_9_track_9")).is_none());
    }

    #[test]
    fn test_by_collection_keeps_parse_order() {
        let catalog = sample_catalog();
        let tracks = catalog.by_collection(&CollectionId::new("col_0"));
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id.as_str(), "col_0_track_1");
        assert_eq!(tracks[1].id.as_str(), "col_0_track_2");

        assert!(catalog.by_collection(&CollectionId::new("col_99")).is_empty());
    }

    #[test]
    fn test_collection_ids_in_first_appearance_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.collection_ids().iter().map(CollectionId::as_str).collect();
        assert_eq!(ids, vec!["col_0", "col_1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample_catalog();

        let by_performer = catalog.search("rustavi");
        assert_eq!(by_performer.len(), 1);
        assert_eq!(by_performer[0].id.as_str(), "col_0_track_2");

        let by_region = catalog.search("GURIA");
        assert_eq!(by_region.len(), 2);
    }

    #[test]
    fn test_blank_search_returns_nothing() {
        let catalog = sample_catalog();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_regions_sorted_and_deduplicated() {
        let catalog = sample_catalog();
        assert_eq!(catalog.regions(), vec!["Guria", "Kakheti"]);
    }

    #[test]
    fn test_year_bounds_round_to_decades() {
        let catalog = sample_catalog();
        // Years 1913 and 1952 round outward to 1910..1960
        assert_eq!(catalog.year_bounds(), YearRange::new(1910, 1960));
    }

    #[test]
    fn test_year_bounds_default_when_unparseable() {
        let catalog = Catalog::from_text(
            "\
| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year |
|----------|----------------|-------|----------|----------|------------|------|
| col_0_track_1 | Coll | title | a.mp3 | Coll/a.mp3 | Someone | unknown |
",
        );
        let bounds = catalog.year_bounds();
        assert_eq!(bounds.min, 1900);
        assert!(bounds.max >= 2020);
        assert_eq!(bounds.max % 10, 0);
    }

    #[test]
    fn test_empty_catalog_is_degenerate_not_fatal() {
        let catalog = Catalog::from_text("");
        assert!(catalog.is_empty());
        assert!(catalog.collection_ids().is_empty());
        assert!(catalog.regions().is_empty());
    }
}
