//! Error types for the tracking core
//!
//! Per-frame conditions (no pose, low visibility, degenerate geometry) are
//! never errors: they degrade to sentinel angles inside the pipeline. Only
//! caller-facing failures live here.

use thiserror::Error;

/// Errors surfaced to callers of the tracking core
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Flat landmark buffer has the wrong number of values
    #[error("invalid landmark data length: {actual} (expected {expected})")]
    InvalidFrameLength {
        /// Values required for a full pose
        expected: usize,
        /// Values actually received
        actual: usize,
    },

    /// No registry entry matches the requested exercise
    #[error("exercise not found: {0}")]
    ExerciseNotFound(String),

    /// Tunable parameter outside its valid range
    #[error("invalid tracker config: {0}")]
    InvalidConfig(String),

    /// Config document could not be parsed
    #[error("failed to parse tracker config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, TrackerError>;
