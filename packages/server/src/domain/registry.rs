//! Room registry port.
//!
//! The registry is the single authority over room state and membership.
//! Each method is one atomic unit with respect to the room it touches: a
//! join observes the pre-join member count and captures the state snapshot
//! in the same critical section that adds the member, and every mutation
//! returns the membership frozen at mutation time. A concurrently joining
//! connection therefore either sees an update in its snapshot or appears in
//! the broadcast target set, never both and never neither.

use async_trait::async_trait;

use super::entity::{RoomOverview, RoomSnapshot};
use super::value_object::{ChatPayload, ConnectionId, RoomId};

/// Result of joining a room: what the membership looked like before the
/// join, and the shared state captured at join time.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    /// Member count before this connection was added.
    pub prior_members: usize,
    /// Shared state at join time. Unused by the caller when
    /// `prior_members == 0`: the first member owns a blank session even if
    /// the room retains stale state from earlier occupancy.
    pub snapshot: RoomSnapshot,
}

impl JoinOutcome {
    /// Whether the joining connection is the first member of the room.
    pub fn is_first(&self) -> bool {
        self.prior_members == 0
    }
}

/// State and membership authority for all rooms.
///
/// Rooms are created lazily on first use of their identifier and are never
/// destroyed; a room whose membership drops to zero keeps its state.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Join `conn_id` to `room_id`, creating the room if it is unseen.
    ///
    /// A connection belongs to at most one room: joining while a member of
    /// another room moves the connection (the old room's state is left
    /// untouched). Re-joining the current room does not change membership
    /// but still returns a fresh outcome.
    async fn join(&self, conn_id: ConnectionId, room_id: RoomId) -> JoinOutcome;

    /// Set the room's code buffer to `value` (last write wins) and return
    /// the members at mutation time.
    async fn update_code(&self, room_id: RoomId, value: String) -> Vec<ConnectionId>;

    /// Set the room's selected language (last write wins) and return the
    /// members at mutation time.
    async fn update_language(&self, room_id: RoomId, language: String) -> Vec<ConnectionId>;

    /// Append `message` to the room's transcript and return the members at
    /// mutation time.
    async fn append_chat(&self, room_id: RoomId, message: ChatPayload) -> Vec<ConnectionId>;

    /// Remove `conn_id` from whatever room it is a member of. Removing a
    /// connection that is in no room is a no-op. Room state is untouched.
    async fn remove_member(&self, conn_id: &ConnectionId);

    /// Current member count of `room_id`; 0 for unknown rooms.
    async fn member_count(&self, room_id: &RoomId) -> usize;

    /// All rooms with their members, for introspection.
    async fn overviews(&self) -> Vec<RoomOverview>;

    /// One room with its members; `None` for unknown rooms.
    async fn overview(&self, room_id: &RoomId) -> Option<RoomOverview>;

    /// Current shared state of `room_id`; `None` for unknown rooms.
    async fn snapshot(&self, room_id: &RoomId) -> Option<RoomSnapshot>;

    /// Overwrite the shared state of `room_id` from a snapshot, creating
    /// the room if it is unseen. Membership is untouched.
    async fn restore(&self, room_id: RoomId, snapshot: RoomSnapshot);
}
