//! UseCase: connection disconnect.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomRegistry};

/// Removes a connection from its room and unregisters its delivery queue.
///
/// Room state is untouched and no departure event is broadcast; remaining
/// members simply stop receiving from the departed connection.
pub struct DisconnectConnectionUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl DisconnectConnectionUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// Idempotent: disconnecting a connection that never joined a room, or
    /// was already disconnected, is a no-op.
    pub async fn execute(&self, conn_id: &ConnectionId) {
        self.registry.remove_member(conn_id).await;
        self.pusher.unregister_connection(conn_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatPayload, RoomId};
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::fixed(id)
    }

    #[tokio::test]
    async fn disconnect_decrements_membership_and_preserves_state() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;
        registry.join(conn("b"), RoomId::new("r1")).await;
        registry
            .update_code(RoomId::new("r1"), "print(1)".to_string())
            .await;
        registry
            .update_language(RoomId::new("r1"), "python".to_string())
            .await;
        registry
            .append_chat(RoomId::new("r1"), ChatPayload::new(serde_json::json!("hi")))
            .await;

        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectConnectionUseCase::new(registry.clone(), pusher);
        usecase.execute(&conn("a")).await;

        assert_eq!(registry.member_count(&RoomId::new("r1")).await, 1);
        let snapshot = registry.snapshot(&RoomId::new("r1")).await.unwrap();
        assert_eq!(snapshot.code.as_deref(), Some("print(1)"));
        assert_eq!(snapshot.language.as_deref(), Some("python"));
        assert_eq!(snapshot.transcript.len(), 1);
    }

    #[tokio::test]
    async fn disconnected_connection_receives_no_further_broadcasts() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;

        let pusher = Arc::new(WebSocketMessagePusher::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx).await;

        let usecase = DisconnectConnectionUseCase::new(registry.clone(), pusher.clone());
        usecase.execute(&conn("a")).await;

        let targets = registry
            .update_code(RoomId::new("r1"), "after".to_string())
            .await;
        assert!(targets.is_empty());
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn disconnect_of_unknown_connection_is_a_no_op() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectConnectionUseCase::new(registry, pusher);

        usecase.execute(&conn("stranger")).await;
        usecase.execute(&conn("stranger")).await;
    }
}
