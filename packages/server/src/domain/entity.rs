//! Room entity and its snapshot.

use serde::{Deserialize, Serialize};

use super::value_object::{ChatPayload, ConnectionId, RoomId, Timestamp};

/// The shared mutable record for one room: the latest code buffer, the
/// latest selected language, and the ordered chat transcript.
///
/// Code buffer and language start unset and become `Some` on the first
/// update; the transcript is append-only for the lifetime of the process.
/// A room is never destroyed, even when its membership drops to zero.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub code: Option<String>,
    pub language: Option<String>,
    pub transcript: Vec<ChatPayload>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            code: None,
            language: None,
            transcript: Vec::new(),
            created_at,
        }
    }

    /// Replace the code buffer with the latest full text (last write wins).
    pub fn set_code(&mut self, value: String) {
        self.code = Some(value);
    }

    /// Replace the selected language (last write wins).
    pub fn set_language(&mut self, language: String) {
        self.language = Some(language);
    }

    /// Append a chat message to the transcript.
    pub fn push_message(&mut self, message: ChatPayload) {
        self.transcript.push(message);
    }

    /// Capture the current shared state.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            language: self.language.clone(),
            transcript: self.transcript.clone(),
        }
    }

    /// Overwrite the shared state from a snapshot, keeping id and created-at.
    pub fn apply_snapshot(&mut self, snapshot: RoomSnapshot) {
        self.code = snapshot.code;
        self.language = snapshot.language;
        self.transcript = snapshot.transcript;
    }
}

/// The current values of the three shared axes, as sent to a newly joined
/// non-first member and as persisted by the snapshot store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub code: Option<String>,
    pub language: Option<String>,
    pub transcript: Vec<ChatPayload>,
}

impl RoomSnapshot {
    /// A snapshot with nothing set on any axis.
    pub fn empty() -> Self {
        Self {
            code: None,
            language: None,
            transcript: Vec::new(),
        }
    }
}

/// A room together with its current members, for introspection reads.
#[derive(Debug, Clone, Serialize)]
pub struct RoomOverview {
    pub room: Room,
    pub members: Vec<ConnectionId>,
}
