//! UseCase: room join.

use std::sync::Arc;

use crate::domain::{ConnectionId, JoinOutcome, MessagePusher, RoomId, RoomRegistry};

/// Joins a connection to a room and delivers the join replies.
pub struct JoinRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// Run the join as one atomic registry operation: get-or-create the
    /// room, observe the pre-join member count, add the connection, and
    /// capture the snapshot.
    pub async fn execute(&self, conn_id: ConnectionId, room_id: RoomId) -> JoinOutcome {
        self.registry.join(conn_id, room_id).await
    }

    /// Deliver serialized join replies to the joining connection only.
    /// Delivery failures are logged and swallowed: the join itself already
    /// happened, and a connection that vanished mid-join is simply gone.
    pub async fn deliver_replies(&self, conn_id: &ConnectionId, messages: Vec<String>) {
        for message in messages {
            if let Err(e) = self.pusher.push_to(conn_id, &message).await {
                tracing::warn!("Failed to deliver join reply to '{}': {}", conn_id, e);
            }
        }
    }
}
