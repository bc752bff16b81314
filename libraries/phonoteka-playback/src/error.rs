//! Error types for playback sessions

use phonoteka_core::types::TrackId;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Session started over an empty catalog
    #[error("No tracks available")]
    NoTracks,

    /// Filter criteria matched nothing; the previous playlist is kept
    #[error("No tracks match the selected filters")]
    EmptySelection,

    /// Requested track is not part of the relevant selection
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
