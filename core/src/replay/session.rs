//! Session transcript model and loader
//!
//! A transcript is a JSON document with a `meta` block describing the room
//! and an ordered `events` array. Loading checks that both blocks exist and
//! then deserializes them into the typed model below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, info};

use crate::error::{ReplayError, Result};

/// A complete recorded room: metadata plus events in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    pub events: Vec<Event>,
}

/// Room-level metadata shown in the playback header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMeta {
    pub room: String,
    pub description: String,
    /// Kept as a JSON number so `5` prints as `5` and `2.5` as `2.5`
    pub duration_minutes: Number,
    pub participants: Participants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participants {
    pub humans: Vec<String>,
    pub agents: Vec<AgentInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    pub model: String,
    pub skills: Vec<String>,
}

/// One timestamped occurrence in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Seconds since session start
    pub t: f64,
    /// Type tag, e.g. `git.commit`
    #[serde(rename = "type")]
    pub kind: String,
    /// Sender of a chat message; any JSON value, checked by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    /// Kind-specific payload, interpreted by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Session {
    /// Read and validate a transcript from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| ReplayError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let session = Self::from_slice(&content).map_err(|err| match err {
            ReplayError::InvalidJson { source, .. } => ReplayError::InvalidJson {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        info!(
            "Loaded session '{}' from {} ({} events)",
            session.meta.room,
            path.display(),
            session.events.len()
        );
        Ok(session)
    }

    /// Parse and validate a transcript that is already in memory
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// Parse raw bytes; bad UTF-8 is reported as invalid JSON
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(content).map_err(|source| ReplayError::InvalidJson {
                path: Default::default(),
                source,
            })?;
        Self::from_value(value)
    }

    /// Validate a parsed document and convert it into a session
    ///
    /// Both `meta` and `events` must be present and non-null. Nested fields are
    /// then checked by deserialization, so a malformed block rejects the whole
    /// document.
    pub fn from_value(value: Value) -> Result<Self> {
        let has = |key: &str| value.get(key).is_some_and(|v| !v.is_null());
        if !has("meta") || !has("events") {
            return Err(ReplayError::InvalidSchema {
                reason: "missing meta or events".to_string(),
            });
        }

        let session: Session =
            serde_json::from_value(value).map_err(|err| ReplayError::InvalidSchema {
                reason: err.to_string(),
            })?;
        debug!(
            "Session has {} humans and {} agents",
            session.meta.participants.humans.len(),
            session.meta.participants.agents.len()
        );
        Ok(session)
    }
}
