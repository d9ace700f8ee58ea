//! Error types for story loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or building a story.
///
/// All of these are fatal at load time; a running session never errors,
/// it only terminates (see [`crate::session::Termination`]).
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        /// Path of the story file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The story file is not a valid sequence of passage records.
    #[error("failed to parse {}: {}", path.display(), source)]
    Parse {
        /// Path of the story file.
        path: PathBuf,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// The story contains no passages.
    #[error("story has no passages")]
    Empty,

    /// Two passages share the same name.
    #[error("duplicate passage name: \"{0}\"")]
    DuplicatePassage(String),
}
