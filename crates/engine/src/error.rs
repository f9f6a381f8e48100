//! Shared error types for the engine crate.

use thiserror::Error;

use kidplay_core::model::RoundError;

/// Errors emitted by `RoundEngine` and the game-loop workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("game has no rounds")]
    NoRounds,

    #[error("engine is not displaying feedback")]
    NotInFeedback,

    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Errors emitted by the narration collaborator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NarrationError {
    #[error("narration backend unavailable")]
    Unavailable,

    #[error("narration playback failed: {0}")]
    Playback(String),
}

/// Errors emitted by result sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SinkError {
    #[error("result endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
