//! Player session state machine
//!
//! A [`PlayerSession`] owns everything a host needs to run the archive
//! player: the catalog, the active playlist with its cursor, navigation
//! history, filter state, and the per-collection reliability tracker.
//! The host drives it with plain method calls and performs the actual
//! audio loading itself; after a failed load it reports back and receives
//! a [`FailureAction`] telling it what to try next.

use phonoteka_archive::Catalog;
use phonoteka_core::types::{FilterCriteria, Track, TrackId};

use crate::config::SessionConfig;
use crate::error::{PlaybackError, Result};
use crate::filter::apply_filters;
use crate::history::History;
use crate::reliability::ReliabilityTracker;
use crate::shuffle::{shuffle_balanced, shuffle_reliable};

/// What the host should do after reporting a failed track load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureAction {
    /// Retry the same track at this fallback URL
    Retry(String),

    /// Give up on this track and move to the next one
    Advance,

    /// Too many tracks failed in a row; stop instead of cycling through
    /// a dead archive
    Halt,
}

/// Stateful playback session over a loaded catalog
///
/// The playlist is never empty once a session exists: constructors fail
/// with [`PlaybackError::NoTracks`] on an empty catalog, and operations
/// that would empty the playlist fail without changing it.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    /// Full parsed archive
    catalog: Catalog,

    /// Per-collection failure bookkeeping
    tracker: ReliabilityTracker,

    /// Session tunables
    config: SessionConfig,

    /// Currently active filters
    criteria: FilterCriteria,

    /// Tracks in play order
    playlist: Vec<Track>,

    /// Cursor into the playlist
    position: usize,

    /// Previously played track ids, most recent last
    history: History,

    /// Failed loads since the last successful one
    consecutive_failures: u32,
}

impl PlayerSession {
    /// Start a session with a freshly shuffled playlist
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoTracks`] when the catalog is empty.
    pub fn start(catalog: Catalog, config: SessionConfig) -> Result<Self> {
        let mut session = Self::prepare(catalog, config)?;
        session.playlist = shuffle_reliable(session.catalog.all(), &session.tracker);
        tracing::info!("Session started with {} tracks", session.playlist.len());
        Ok(session)
    }

    /// Start a session that plays a specific track first
    ///
    /// Used when a track link is opened directly: the shared track leads,
    /// the rest of the archive follows shuffled. An id the catalog does
    /// not know falls back to a normal start rather than failing, since
    /// the link may predate a database edit.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoTracks`] when the catalog is empty.
    pub fn start_with_track(
        catalog: Catalog,
        config: SessionConfig,
        shared: &TrackId,
    ) -> Result<Self> {
        let Some(first) = catalog.get(shared).cloned() else {
            tracing::warn!("Shared track {} is not in the catalog, starting normally", shared);
            return Self::start(catalog, config);
        };

        let mut session = Self::prepare(catalog, config)?;
        let rest: Vec<Track> = session
            .catalog
            .all()
            .iter()
            .filter(|track| track.id != first.id)
            .cloned()
            .collect();

        let mut playlist = Vec::with_capacity(rest.len() + 1);
        playlist.push(first);
        playlist.extend(shuffle_reliable(&rest, &session.tracker));
        session.playlist = playlist;

        tracing::info!("Session started from shared track {}", shared);
        Ok(session)
    }

    fn prepare(catalog: Catalog, config: SessionConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(PlaybackError::NoTracks);
        }
        let tracker = ReliabilityTracker::new(&catalog, config.error_rate_threshold);
        let history = History::new(config.history_limit);
        Ok(Self {
            catalog,
            tracker,
            config,
            criteria: FilterCriteria::default(),
            playlist: Vec::new(),
            position: 0,
            history,
            consecutive_failures: 0,
        })
    }

    // ===== Accessors =====

    /// The track under the cursor
    pub fn current(&self) -> Option<&Track> {
        self.playlist.get(self.position)
    }

    /// Current playlist in play order
    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    /// Cursor position within the playlist
    pub fn position(&self) -> usize {
        self.position
    }

    /// The loaded catalog, for filter option listings and lookups
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filters currently applied to the playlist
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Per-collection failure state
    pub fn reliability(&self) -> &ReliabilityTracker {
        &self.tracker
    }

    // ===== Navigation =====

    /// Move to the next track, wrapping at the end of the playlist
    ///
    /// The departed track goes into history so [`previous`](Self::previous)
    /// can return to it.
    pub fn advance(&mut self) -> Option<&Track> {
        if self.playlist.is_empty() {
            return None;
        }
        if let Some(track) = self.playlist.get(self.position) {
            self.history.push(track.id.clone());
        }
        self.position = (self.position + 1) % self.playlist.len();
        self.current()
    }

    /// Return to the most recent track still present in the playlist
    ///
    /// History entries pointing at tracks the playlist no longer holds
    /// (dropped by a later search) are discarded on the way. The current
    /// track is not pushed, so going back twice steps back twice.
    pub fn previous(&mut self) -> Option<&Track> {
        while let Some(id) = self.history.pop() {
            if let Some(index) = self.playlist.iter().position(|track| track.id == id) {
                self.position = index;
                return self.current();
            }
        }
        None
    }

    // ===== Filtering =====

    /// Rebuild the playlist from the tracks matching `criteria`
    ///
    /// On success the playlist is reshuffled from the matching tracks,
    /// the cursor rewinds, and history clears. Returns the new playlist
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::EmptySelection`] when nothing matches;
    /// the session keeps playing the previous playlist unchanged.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) -> Result<usize> {
        let matching = apply_filters(self.catalog.all(), &criteria);
        if matching.is_empty() {
            return Err(PlaybackError::EmptySelection);
        }

        self.playlist = shuffle_balanced(&matching);
        self.criteria = criteria;
        self.position = 0;
        self.history.clear();
        tracing::info!("Filters applied, playlist narrowed to {} tracks", self.playlist.len());
        Ok(self.playlist.len())
    }

    /// Drop all filters and reshuffle the full archive
    ///
    /// Returns the new playlist length.
    pub fn reset_criteria(&mut self) -> usize {
        self.criteria = FilterCriteria::default();
        self.playlist = shuffle_reliable(self.catalog.all(), &self.tracker);
        self.position = 0;
        self.history.clear();
        self.playlist.len()
    }

    // ===== Search =====

    /// Case-insensitive substring search over the catalog
    pub fn search(&self, query: &str) -> Vec<&Track> {
        self.catalog.search(query)
    }

    /// Make the search results the playlist and start at the chosen track
    ///
    /// The results keep their catalog order instead of being shuffled, so
    /// the listener sees the list they clicked into. History survives,
    /// letting [`previous`](Self::previous) walk back into earlier
    /// listening where the tracks overlap. Returns the new playlist
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::TrackNotFound`] when `id` is not among
    /// the results for `query`; the session is left unchanged.
    pub fn play_from_search(&mut self, query: &str, id: &TrackId) -> Result<usize> {
        let results = self.search(query);
        let Some(index) = results.iter().position(|track| track.id == *id) else {
            return Err(PlaybackError::TrackNotFound(id.clone()));
        };

        self.playlist = results.into_iter().cloned().collect();
        self.position = index;
        Ok(self.playlist.len())
    }

    // ===== Failure handling =====

    /// Record a failed load of the current track and pick the next move
    ///
    /// Every call counts one failure against the track's collection. While
    /// the track still has untried fallback URLs the host gets
    /// [`FailureAction::Retry`] with the next one. Once fallbacks are
    /// exhausted the consecutive-failure counter rises: below the
    /// configured cap the host should advance, at the cap it should stop.
    pub fn report_failure(&mut self) -> FailureAction {
        let Some(track) = self.playlist.get(self.position) else {
            return FailureAction::Halt;
        };

        if let Some(url) = self.tracker.report_failure(track) {
            return FailureAction::Retry(url);
        }

        self.consecutive_failures += 1;
        if self.consecutive_failures >= self.config.max_consecutive_failures {
            tracing::warn!(
                "Halting after {} consecutive track failures",
                self.consecutive_failures
            );
            FailureAction::Halt
        } else {
            FailureAction::Advance
        }
    }

    /// Record a successful load, clearing the consecutive-failure count
    pub fn report_success(&mut self) {
        self.consecutive_failures = 0;
    }
}
