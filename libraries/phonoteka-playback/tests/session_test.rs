//! Player session integration tests
//!
//! Exercises full session flows over a parsed archive: navigation,
//! filtering, shared-track starts, search, and failure handling.

use phonoteka_archive::Catalog;
use phonoteka_core::types::{CollectionId, FilterCriteria, TrackId, YearRange};
use phonoteka_playback::{FailureAction, PlaybackError, PlayerSession, SessionConfig};

// ===== Test Helpers =====

const ARCHIVE: &str = "\
# Makharadze Collection with Track IDs

| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
|----------|----------------|-------|----------|----------|------------|------|--------|
| col_0_track_0 | Makharadze | chakrulo | m0.mp3 | Makharadze/m0.mp3 | Gori Ensemble | 1952 | kartli |
| col_0_track_1 | Makharadze | alilo | m1.mp3 | Makharadze/m1.mp3 | Gori Ensemble | 1954 | kartli |

# Akhobadze Collection

| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
|----------|----------------|-------|----------|----------|------------|------|--------|
| col_1_track_0 | Akhobadze | mravalzhamier | a0.mp3 | Akhobadze/a0.mp3 | Rustavi Choir | 1966 | guria |
| col_1_track_1 | Akhobadze | orovela | a1.mp3 | Akhobadze/a1.mp3 | Rustavi Choir | 1968 | guria |
| col_1_track_2 | Akhobadze | naduri | a2.mp3 | Akhobadze/a2.mp3 | Rustavi Choir | unknown | guria |
| col_1_track_3 | Akhobadze | tsintskaro | a3.mp3 | Akhobadze/a3.mp3 | Rustavi Choir | 1970 | guria |
| col_1_track_4 | Akhobadze | suliko | a4.mp3 | Akhobadze/a4.mp3 | Rustavi Choir | 1971 | guria |

# Erkomaishvili Collection

| Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
|----------|----------------|-------|----------|----------|------------|------|--------|
| col_17_track_0 | Erkomaishvili | shen khar venakhi | Shen Khar Venakhi (2).mp3 | Anania/Shen Khar Venakhi (2).mp3 | Anania Erkomaishvili | 1907 | guria |
";

fn archive() -> Catalog {
    Catalog::from_text(ARCHIVE)
}

fn start_session() -> PlayerSession {
    PlayerSession::start(archive(), SessionConfig::default()).unwrap()
}

// ===== Navigation Tests =====

#[test]
fn test_full_playlist_wraps_back_to_the_start() {
    let mut session = start_session();
    assert_eq!(session.playlist().len(), 8);

    let first = session.current().unwrap().id.clone();
    for _ in 0..8 {
        session.advance();
    }

    assert_eq!(session.position(), 0);
    assert_eq!(session.current().unwrap().id, first);
}

#[test]
fn test_previous_walks_back_through_bounded_history() {
    let config = SessionConfig {
        history_limit: 3,
        ..SessionConfig::default()
    };
    let mut session = PlayerSession::start(archive(), config).unwrap();
    let order: Vec<TrackId> = session.playlist().iter().map(|t| t.id.clone()).collect();

    for _ in 0..5 {
        session.advance();
    }
    assert_eq!(session.position(), 5);

    // Only the three most recent departures survive the cap
    assert_eq!(session.previous().unwrap().id, order[4]);
    assert_eq!(session.previous().unwrap().id, order[3]);
    assert_eq!(session.previous().unwrap().id, order[2]);
    assert!(session.previous().is_none());
    assert_eq!(session.position(), 2);
}

// ===== Filter Tests =====

#[test]
fn test_year_filter_keeps_undatable_tracks() {
    let mut session = start_session();

    let criteria = FilterCriteria::none().with_years(YearRange::new(1960, 1969));
    let count = session.apply_criteria(criteria).unwrap();

    // 1966 and 1968 match; "unknown" cannot be dated and stays
    assert_eq!(count, 3);
    assert!(session
        .playlist()
        .iter()
        .all(|track| track.collection_id.as_str() == "col_1"));
}

#[test]
fn test_filters_compose_and_reset() {
    let mut session = start_session();

    let count = session
        .apply_criteria(
            FilterCriteria::none()
                .with_region("Guria")
                .with_collection("Akhobadze"),
        )
        .unwrap();
    assert_eq!(count, 5);

    assert_eq!(session.reset_criteria(), 8);
    assert!(session.criteria().is_unconstrained());
}

#[test]
fn test_rejected_filters_keep_the_playlist_playing() {
    let mut session = start_session();
    session.advance();
    let current = session.current().unwrap().id.clone();

    let result = session.apply_criteria(FilterCriteria::none().with_region("Svaneti"));

    assert!(matches!(result, Err(PlaybackError::EmptySelection)));
    assert_eq!(session.current().unwrap().id, current);
    assert_eq!(session.playlist().len(), 8);
}

// ===== Shared Track Tests =====

#[test]
fn test_shared_link_plays_its_track_first() {
    let shared = TrackId::new("col_1_track_3");
    let session =
        PlayerSession::start_with_track(archive(), SessionConfig::default(), &shared).unwrap();

    assert_eq!(session.current().unwrap().id, shared);
    assert_eq!(session.playlist().len(), 8);
    assert_eq!(
        session
            .playlist()
            .iter()
            .filter(|track| track.id == shared)
            .count(),
        1
    );
}

#[test]
fn test_stale_shared_link_still_starts_the_player() {
    let shared = TrackId::new("col_4_track_0");
    let session =
        PlayerSession::start_with_track(archive(), SessionConfig::default(), &shared).unwrap();
    assert_eq!(session.playlist().len(), 8);
}

// ===== Search Tests =====

#[test]
fn test_search_click_replaces_the_playlist_in_result_order() {
    let mut session = start_session();

    let results = session.search("rustavi choir");
    assert_eq!(results.len(), 5);

    let chosen = TrackId::new("col_1_track_1");
    let count = session.play_from_search("rustavi choir", &chosen).unwrap();

    assert_eq!(count, 5);
    assert_eq!(session.current().unwrap().id, chosen);
    // Result order is catalog order, not shuffled
    assert_eq!(session.playlist()[0].id, TrackId::new("col_1_track_0"));
}

#[test]
fn test_search_click_discards_history_entries_it_dropped() {
    let mut session = start_session();
    session
        .apply_criteria(FilterCriteria::none().with_region("Kartli"))
        .unwrap();
    session.advance();

    // The new playlist holds only the one search result, so the departed
    // Kartli track cannot be returned to
    session
        .play_from_search("orovela", &TrackId::new("col_1_track_1"))
        .unwrap();

    assert!(session.previous().is_none());
    assert_eq!(session.current().unwrap().id, TrackId::new("col_1_track_1"));
}

#[test]
fn test_search_click_outside_the_results_is_rejected() {
    let mut session = start_session();

    let result = session.play_from_search("orovela", &TrackId::new("col_0_track_0"));
    assert!(matches!(result, Err(PlaybackError::TrackNotFound(_))));
    assert_eq!(session.playlist().len(), 8);
}

// ===== Failure Handling Tests =====

#[test]
fn test_flat_layout_track_rotates_through_every_fallback() {
    let shared = TrackId::new("col_17_track_0");
    let mut session =
        PlayerSession::start_with_track(archive(), SessionConfig::default(), &shared).unwrap();

    let alternatives = session.current().unwrap().resource.alternatives.clone();
    assert_eq!(alternatives.len(), 4);

    for expected in &alternatives {
        match session.report_failure() {
            FailureAction::Retry(url) => assert_eq!(&url, expected),
            other => panic!("expected a retry, got {:?}", other),
        }
    }

    // Fallbacks exhausted, give the track up
    assert_eq!(session.report_failure(), FailureAction::Advance);
}

#[test]
fn test_repeated_failures_halt_and_success_resets() {
    let config = SessionConfig {
        max_consecutive_failures: 2,
        ..SessionConfig::default()
    };
    let mut session = PlayerSession::start(archive(), config).unwrap();
    session
        .apply_criteria(FilterCriteria::none().with_region("Kartli"))
        .unwrap();

    assert_eq!(session.report_failure(), FailureAction::Advance);
    session.advance();
    assert_eq!(session.report_failure(), FailureAction::Halt);

    session.report_success();
    assert_eq!(session.report_failure(), FailureAction::Advance);
}

#[test]
fn test_degraded_collections_drop_out_of_the_next_shuffle() {
    let shared = TrackId::new("col_0_track_0");
    let mut session =
        PlayerSession::start_with_track(archive(), SessionConfig::default(), &shared).unwrap();

    // Two failures against a two-track collection pushes its rate to 1.0
    session.report_failure();
    session.report_failure();
    assert!(session
        .reliability()
        .is_degraded(&CollectionId::new("col_0")));

    let count = session.reset_criteria();
    assert_eq!(count, 6);
    assert!(session
        .playlist()
        .iter()
        .all(|track| track.collection_id.as_str() != "col_0"));
}
