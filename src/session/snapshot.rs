//! Snapshot and resume support for calculator sessions.
//!
//! A snapshot is a versioned, serializable capture of a session (current
//! state plus history) so a display layer can persist the session across
//! process restarts and hand it back later.

use crate::core::{EvalState, SessionHistory};
use crate::session::Evaluator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur during snapshot operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this build
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot data failed validation
    #[error("snapshot validation failed: {0}")]
    ValidationFailed(String),
}

/// Serializable capture of a session at a point in time.
///
/// # Example
///
/// ```rust
/// use tally::session::{Evaluator, Snapshot};
///
/// let mut session = Evaluator::new();
/// session.press_keys("12+").unwrap();
///
/// let json = Snapshot::capture(&session).to_json().unwrap();
///
/// let mut resumed = Snapshot::from_json(&json).unwrap().restore();
/// resumed.press_keys("3=").unwrap();
/// assert_eq!(resumed.display(), "15");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// The session's evaluation state at capture time
    pub state: EvalState,

    /// The session's token history at capture time
    pub history: SessionHistory,
}

impl Snapshot {
    /// Capture the current session.
    pub fn capture(session: &Evaluator) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: session.state().clone(),
            history: session.history().clone(),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rebuild a session from this snapshot.
    pub fn restore(&self) -> Evaluator {
        Evaluator::resume(self.state.clone(), self.history.clone())
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if !self.state.is_well_formed() {
            return Err(SnapshotError::ValidationFailed(
                "state holds a malformed numeral".to_string(),
            ));
        }
        Ok(())
    }
}
