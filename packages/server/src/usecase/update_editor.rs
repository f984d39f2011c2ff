//! UseCase: code buffer update.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRegistry};

use super::error::BroadcastError;

/// Applies a code buffer update and fans it out to the rest of the room.
pub struct UpdateEditorUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl UpdateEditorUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// Set the room's code buffer (last write wins) and broadcast the
    /// pre-serialized return event to every member except the sender.
    ///
    /// # Returns
    ///
    /// The broadcast targets: the room's members at mutation time, minus
    /// the sender. Members joining after the mutation see the new value in
    /// their join snapshot instead.
    pub async fn execute(
        &self,
        sender: &ConnectionId,
        room_id: RoomId,
        value: String,
        json_message: String,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        let members = self.registry.update_code(room_id, value).await;
        let targets: Vec<ConnectionId> =
            members.into_iter().filter(|id| id != sender).collect();

        self.pusher
            .broadcast(targets.clone(), &json_message)
            .await
            .map_err(|e| BroadcastError::Failed(e.to_string()))?;

        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pusher::MockMessagePusher;
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use tokio::sync::mpsc;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::fixed(id)
    }

    #[tokio::test]
    async fn update_excludes_the_sender_from_fan_out() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;
        registry.join(conn("b"), RoomId::new("r1")).await;
        registry.join(conn("c"), RoomId::new("r1")).await;

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|targets, content| {
                targets == &[ConnectionId::fixed("b"), ConnectionId::fixed("c")]
                    && content.contains("editor-update-return")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let usecase = UpdateEditorUseCase::new(registry.clone(), Arc::new(pusher));
        let targets = usecase
            .execute(
                &conn("a"),
                RoomId::new("r1"),
                "print(1)".to_string(),
                r#"{"event":"editor-update-return","room":"r1","value":"print(1)"}"#.to_string(),
            )
            .await
            .unwrap();

        // N members produce N - 1 deliveries.
        assert_eq!(targets.len(), 2);
        assert!(!targets.contains(&conn("a")));

        // The mutation itself landed.
        let snapshot = registry.snapshot(&RoomId::new("r1")).await.unwrap();
        assert_eq!(snapshot.code.as_deref(), Some("print(1)"));
    }

    #[tokio::test]
    async fn lone_sender_updates_with_no_fan_out() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;

        let pusher = Arc::new(WebSocketMessagePusher::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx).await;

        let usecase = UpdateEditorUseCase::new(registry, pusher);
        let targets = usecase
            .execute(
                &conn("a"),
                RoomId::new("r1"),
                "solo".to_string(),
                "{}".to_string(),
            )
            .await
            .unwrap();

        assert!(targets.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn consecutive_updates_are_last_write_wins() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;
        let usecase = UpdateEditorUseCase::new(
            registry.clone(),
            Arc::new(WebSocketMessagePusher::new()),
        );

        for value in ["v1", "v2", "v3"] {
            usecase
                .execute(
                    &conn("a"),
                    RoomId::new("r1"),
                    value.to_string(),
                    "{}".to_string(),
                )
                .await
                .unwrap();
        }

        let snapshot = registry.snapshot(&RoomId::new("r1")).await.unwrap();
        assert_eq!(snapshot.code.as_deref(), Some("v3"));
    }
}
