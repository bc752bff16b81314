//! Phonoteka Playback
//!
//! Playlist construction and session state for the Phonoteka archive
//! player.
//!
//! This crate provides:
//! - Collection-balanced shuffle (no collection twice in a row)
//! - Reliability tracking with per-collection failure rates
//! - Fallback URL rotation for flat-layout collections
//! - Attribute filters (region, collection, recording year)
//! - Navigation history with bounded depth
//! - A session object tying all of it together
//!
//! # Architecture
//!
//! `phonoteka-playback` is completely host-agnostic: it never performs
//! network or audio I/O. The host loads audio for the track the session
//! points at, reports success or failure back, and follows the returned
//! [`FailureAction`]. Everything else — shuffling, filtering, history,
//! failure bookkeeping — happens inside the session.
//!
//! # Example: Running a session
//!
//! ```rust
//! use phonoteka_archive::Catalog;
//! use phonoteka_playback::{PlayerSession, SessionConfig};
//!
//! let database = "\
//! | Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
//! |----------|----------------|-------|----------|----------|------------|------|--------|
//! | col_0_track_0 | Village Songs | chakrulo | chakrulo.mp3 | Village Songs/chakrulo.mp3 | Gori Ensemble | 1952 | kartli |
//! | col_1_track_0 | City Songs | mravalzhamier | mraval.mp3 | City Songs/mraval.mp3 | Rustavi Choir | 1968 | kakheti |
//! ";
//!
//! let catalog = Catalog::from_text(database);
//! let mut session = PlayerSession::start(catalog, SessionConfig::default())?;
//!
//! assert_eq!(session.playlist().len(), 2);
//! let first = session.current().unwrap().title.clone();
//!
//! session.advance();
//! session.previous();
//! assert_eq!(session.current().unwrap().title, first);
//! # Ok::<(), phonoteka_playback::PlaybackError>(())
//! ```
//!
//! # Example: Filtering
//!
//! ```rust
//! use phonoteka_archive::Catalog;
//! use phonoteka_core::types::FilterCriteria;
//! use phonoteka_playback::{PlayerSession, SessionConfig};
//!
//! # let database = "\
//! # | Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
//! # |----------|----------------|-------|----------|----------|------------|------|--------|
//! # | col_0_track_0 | Village Songs | chakrulo | chakrulo.mp3 | Village Songs/chakrulo.mp3 | Gori Ensemble | 1952 | kartli |
//! # | col_1_track_0 | City Songs | mravalzhamier | mraval.mp3 | City Songs/mraval.mp3 | Rustavi Choir | 1968 | kakheti |
//! # ";
//! let mut session = PlayerSession::start(Catalog::from_text(database), SessionConfig::default())?;
//!
//! let narrowed = session.apply_criteria(FilterCriteria::none().with_region("Kartli"))?;
//! assert_eq!(narrowed, 1);
//!
//! session.reset_criteria();
//! assert_eq!(session.playlist().len(), 2);
//! # Ok::<(), phonoteka_playback::PlaybackError>(())
//! ```
//!
//! # Example: Handling load failures
//!
//! ```rust
//! use phonoteka_archive::Catalog;
//! use phonoteka_playback::{FailureAction, PlayerSession, SessionConfig};
//!
//! # let database = "\
//! # | Track ID | Collection Name | Title | Filename | Filepath | Performers | Year | Region |
//! # |----------|----------------|-------|----------|----------|------------|------|--------|
//! # | col_0_track_0 | Village Songs | chakrulo | chakrulo.mp3 | Village Songs/chakrulo.mp3 | Gori Ensemble | 1952 | kartli |
//! # | col_1_track_0 | City Songs | mravalzhamier | mraval.mp3 | City Songs/mraval.mp3 | Rustavi Choir | 1968 | kakheti |
//! # ";
//! let mut session = PlayerSession::start(Catalog::from_text(database), SessionConfig::default())?;
//!
//! // The host tried to load the current track and it failed
//! match session.report_failure() {
//!     FailureAction::Retry(fallback) => println!("retry the same track at {}", fallback),
//!     FailureAction::Advance => {
//!         session.advance();
//!     }
//!     FailureAction::Halt => println!("archive looks unreachable, stopping"),
//! }
//! # Ok::<(), phonoteka_playback::PlaybackError>(())
//! ```

mod config;
mod error;
mod filter;
mod history;
mod reliability;
mod session;
mod shuffle;

// Public exports
pub use config::SessionConfig;
pub use error::{PlaybackError, Result};
pub use filter::apply_filters;
pub use history::History;
pub use reliability::ReliabilityTracker;
pub use session::{FailureAction, PlayerSession};
pub use shuffle::{shuffle_balanced, shuffle_reliable};
