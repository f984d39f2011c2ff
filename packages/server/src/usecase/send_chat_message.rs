//! UseCase: chat message.

use std::sync::Arc;

use crate::domain::{ChatPayload, ConnectionId, MessagePusher, RoomId, RoomRegistry};

use super::error::BroadcastError;

/// Appends a chat message to the room transcript and echoes it to the
/// whole room.
///
/// Unlike the editor and language protocols, the sender is included in the
/// fan-out: clients rely on the echo as delivery confirmation rather than
/// rendering chat optimistically.
pub struct SendChatMessageUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl SendChatMessageUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// Append the opaque payload and broadcast the pre-serialized return
    /// event to every member of the room, sender included.
    pub async fn execute(
        &self,
        room_id: RoomId,
        message: ChatPayload,
        json_message: String,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        let targets = self.registry.append_chat(room_id, message).await;

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
    async fn chat_fan_out_includes_the_sender() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;
        registry.join(conn("b"), RoomId::new("r1")).await;

        let pusher = Arc::new(WebSocketMessagePusher::new());
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx_a).await;
        pusher.register_connection(conn("b"), tx_b).await;

        let usecase = SendChatMessageUseCase::new(registry, pusher);
        let message = r#"{"event":"chat-message-return","room":"r1","message":"hi"}"#.to_string();
        let targets = usecase
            .execute(
                RoomId::new("r1"),
                ChatPayload::new(serde_json::json!("hi")),
                message.clone(),
            )
            .await
            .unwrap();

        // N members produce N deliveries.
        assert_eq!(targets, vec![conn("a"), conn("b")]);
        assert_eq!(rx_a.recv().await, Some(message.clone()));
        assert_eq!(rx_b.recv().await, Some(message));
    }

    #[tokio::test]
    async fn transcript_grows_in_arrival_order() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry.join(conn("a"), RoomId::new("r1")).await;

        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().times(3).returning(|_, _| Ok(()));

        let usecase = SendChatMessageUseCase::new(registry.clone(), Arc::new(pusher));
        for text in ["hi", "hello", "bye"] {
            usecase
                .execute(
                    RoomId::new("r1"),
                    ChatPayload::new(serde_json::json!(text)),
                    "{}".to_string(),
                )
                .await
                .unwrap();
        }

        let snapshot = registry.snapshot(&RoomId::new("r1")).await.unwrap();
        let texts: Vec<_> = snapshot
            .transcript
            .iter()
            .map(|m| m.as_value().as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["hi", "hello", "bye"]);
    }

    #[tokio::test]
    async fn chat_to_an_empty_room_is_stored_but_delivered_to_nobody() {
        let registry = Arc::new(InMemoryRoomRegistry::new());

        let usecase = SendChatMessageUseCase::new(
            registry.clone(),
            Arc::new(WebSocketMessagePusher::new()),
        );
        let targets = usecase
            .execute(
                RoomId::new("empty"),
                ChatPayload::new(serde_json::json!("anyone?")),
                "{}".to_string(),
            )
            .await
            .unwrap();

        assert!(targets.is_empty());
        let snapshot = registry.snapshot(&RoomId::new("empty")).await.unwrap();
        assert_eq!(snapshot.transcript.len(), 1);
    }
}
