//! Structured error types for ClawTank
//!
//! Every failure the replay engine can surface, from reading the transcript
//! through writing the last rendered line.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for replay operations
#[derive(Error, Debug)]
pub enum ReplayError {
    // =========================================================================
    // Loading Errors
    // =========================================================================
    /// The transcript could not be read
    #[error("File '{}' not found", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transcript is not parseable JSON
    #[error("Invalid JSON in '{}'", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The transcript parsed but does not have the shape of a session
    #[error("Invalid session format - {reason}")]
    InvalidSchema { reason: String },

    // =========================================================================
    // Playback Errors
    // =========================================================================
    /// A known event kind is missing a field its template needs
    #[error("Cannot render '{event_type}' event at t={t}: missing field '{field}'")]
    Render {
        event_type: String,
        t: f64,
        field: String,
    },

    /// Writing to the output sink failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Playback was cancelled while waiting between events
    #[error("Playback interrupted")]
    Interrupted,
}

impl ReplayError {
    /// Whether the failure happened before any playback output could be produced
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidJson { .. } | Self::InvalidSchema { .. }
        )
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 130,
            _ => 1,
        }
    }
}

/// Result type alias using ReplayError
pub type Result<T> = std::result::Result<T, ReplayError>;
