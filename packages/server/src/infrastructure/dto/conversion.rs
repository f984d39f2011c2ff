//! Conversion logic between domain types and DTOs.
//!
//! `join_replies` is the reply side of the join protocol: it decides, from
//! the join outcome alone, exactly which events the joining connection
//! receives. Keeping it a pure function makes the protocol table testable
//! without sockets.

use bansho_shared::time::timestamp_to_rfc3339;

use crate::domain::{JoinOutcome, RoomId, RoomOverview};
use crate::infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto};
use crate::infrastructure::dto::websocket::ServerEvent;

/// Build the events sent to a connection that just joined `room_id`.
///
/// The first member of a room owns a blank session and receives only the
/// initialization marker, even when the room retains state from an earlier
/// occupancy. Every later member receives the current snapshot, one event
/// per axis that has ever been set; axes never set produce no event at all.
pub fn join_replies(room_id: &RoomId, outcome: &JoinOutcome) -> Vec<ServerEvent> {
    let room = room_id.as_str().to_string();

    if outcome.is_first() {
        return vec![ServerEvent::EditorInitialization { room }];
    }

    let mut replies = Vec::new();
    if let Some(value) = &outcome.snapshot.code {
        replies.push(ServerEvent::EditorUpdateReturn {
            room: room.clone(),
            value: value.clone(),
        });
    }
    if !outcome.snapshot.transcript.is_empty() {
        replies.push(ServerEvent::ChatHistory {
            room: room.clone(),
            messages: outcome
                .snapshot
                .transcript
                .iter()
                .map(|m| m.as_value().clone())
                .collect(),
        });
    }
    if let Some(language) = &outcome.snapshot.language {
        replies.push(ServerEvent::LanguageUpdateReturn {
            room,
            language: language.clone(),
        });
    }
    replies
}

impl From<&RoomOverview> for RoomSummaryDto {
    fn from(overview: &RoomOverview) -> Self {
        Self {
            id: overview.room.id.as_str().to_string(),
            members: overview.members.len(),
            has_code: overview.room.code.is_some(),
            language: overview.room.language.clone(),
            messages: overview.room.transcript.len(),
            created_at: timestamp_to_rfc3339(overview.room.created_at.value()),
        }
    }
}

impl From<&RoomOverview> for RoomDetailDto {
    fn from(overview: &RoomOverview) -> Self {
        Self {
            id: overview.room.id.as_str().to_string(),
            members: overview
                .members
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            code: overview.room.code.clone(),
            language: overview.room.language.clone(),
            messages: overview.room.transcript.len(),
            created_at: timestamp_to_rfc3339(overview.room.created_at.value()),
        }
    }
}
