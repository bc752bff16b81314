//! Per-collection failure tracking and retry rotation
//!
//! Collections in the archive differ wildly in hosting quality. The tracker
//! tallies load failures per collection so shuffles can route around
//! degraded ones, and walks each failing track through its fallback URLs.
//! Tallies accumulate for the session and are never reset.

use std::collections::HashMap;

use phonoteka_archive::Catalog;
use phonoteka_core::types::{CollectionId, Track, TrackId};

/// Retry progression over one track's fallback URLs
///
/// Each reported failure hands out the next fallback exactly once, in
/// order, until the list runs dry.
#[derive(Debug, Clone)]
enum RetryState {
    /// Fallbacks remain; `next` indexes the one to hand out
    Rotating { alternatives: Vec<String>, next: usize },
    /// Every fallback has been tried
    Exhausted,
}

impl RetryState {
    fn new(alternatives: Vec<String>) -> Self {
        if alternatives.is_empty() {
            Self::Exhausted
        } else {
            Self::Rotating {
                alternatives,
                next: 0,
            }
        }
    }

    /// One failure: yield the next fallback URL, if any
    fn advance(&mut self) -> Option<String> {
        match self {
            Self::Rotating { alternatives, next } => {
                let url = alternatives.get(*next).cloned();
                *next += 1;
                if *next >= alternatives.len() {
                    *self = Self::Exhausted;
                }
                url
            }
            Self::Exhausted => None,
        }
    }
}

/// Session-scoped record of which collections keep failing
#[derive(Debug, Clone)]
pub struct ReliabilityTracker {
    /// Collection sizes snapshotted from the catalog
    collection_sizes: HashMap<CollectionId, usize>,

    /// Accumulated failure tallies
    failures: HashMap<CollectionId, u32>,

    /// Retry state for tracks that carry fallback URLs
    retries: HashMap<TrackId, RetryState>,

    /// Failure rate above which a collection counts as degraded
    threshold: f64,
}

impl ReliabilityTracker {
    /// Snapshot collection sizes and fallback lists from the catalog
    pub fn new(catalog: &Catalog, threshold: f64) -> Self {
        let mut collection_sizes: HashMap<CollectionId, usize> = HashMap::new();
        let mut retries = HashMap::new();

        for track in catalog.all() {
            *collection_sizes
                .entry(track.collection_id.clone())
                .or_insert(0) += 1;
            if !track.resource.alternatives.is_empty() {
                retries.insert(
                    track.id.clone(),
                    RetryState::new(track.resource.alternatives.clone()),
                );
            }
        }

        Self {
            collection_sizes,
            failures: HashMap::new(),
            retries,
            threshold,
        }
    }

    /// Record a load failure for `track`
    ///
    /// Increments the collection tally and, when the track still has
    /// untried fallback URLs, returns the next one. Tally and rotation
    /// move together: one report, one state transition.
    pub fn report_failure(&mut self, track: &Track) -> Option<String> {
        let tally = self
            .failures
            .entry(track.collection_id.clone())
            .or_insert(0);
        *tally += 1;
        tracing::warn!(
            "Load failure recorded for collection {} (total: {})",
            track.collection_id,
            tally
        );

        self.retries.get_mut(&track.id).and_then(RetryState::advance)
    }

    /// Accumulated failures for one collection
    pub fn failure_count(&self, collection: &CollectionId) -> u32 {
        self.failures.get(collection).copied().unwrap_or(0)
    }

    /// Failures divided by collection size
    ///
    /// Collections the catalog does not know rate 0.0 rather than
    /// dividing by zero.
    pub fn error_rate(&self, collection: &CollectionId) -> f64 {
        let failures = self.failure_count(collection);
        if failures == 0 {
            return 0.0;
        }
        match self.collection_sizes.get(collection) {
            Some(&size) if size > 0 => f64::from(failures) / size as f64,
            _ => 0.0,
        }
    }

    /// Whether a collection's failure rate exceeds the threshold
    pub fn is_degraded(&self, collection: &CollectionId) -> bool {
        self.error_rate(collection) > self.threshold
    }
}
