//! WebSocket-backed message pusher.
//!
//! The gateway creates one unbounded channel per accepted connection and
//! drains it into the socket from a dedicated writer task. This pusher
//! holds the sender half of each channel, so enqueueing a message never
//! waits on a slow peer.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// WebSocket implementation of the `MessagePusher` port.
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// Outbound queues of the currently registered connections.
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_connection(&self, conn_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(conn_id.clone(), sender);
        tracing::debug!("Connection '{}' registered to pusher", conn_id);
    }

    async fn unregister_connection(&self, conn_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(conn_id);
        tracing::debug!("Connection '{}' unregistered from pusher", conn_id);
    }

    async fn push_to(&self, conn_id: &ConnectionId, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(conn_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to connection '{}'", conn_id);
            Ok(())
        } else {
            Err(MessagePushError::ConnectionNotFound(
                conn_id.as_str().to_string(),
            ))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // Partial failure is tolerated on broadcast.
                if let Err(e) = sender.send(content.to_string()) {
                    tracing::warn!("Failed to push message to connection '{}': {}", target, e);
                } else {
                    tracing::debug!("Broadcasted message to connection '{}'", target);
                }
            } else {
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::fixed(id)
    }

    #[tokio::test]
    async fn push_to_delivers_to_the_registered_queue() {
        let pusher = WebSocketMessagePusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx).await;

        let result = pusher.push_to(&conn("a"), "hello").await;

        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("hello".to_string()));
    }

    #[tokio::test]
    async fn push_to_unknown_connection_is_an_error() {
        let pusher = WebSocketMessagePusher::new();

        let result = pusher.push_to(&conn("nobody"), "hello").await;

        assert!(matches!(
            result,
            Err(MessagePushError::ConnectionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn broadcast_reaches_every_target() {
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx1).await;
        pusher.register_connection(conn("b"), tx2).await;

        let result = pusher.broadcast(vec![conn("a"), conn("b")], "fan-out").await;

        assert!(result.is_ok());
        assert_eq!(rx1.recv().await, Some("fan-out".to_string()));
        assert_eq!(rx2.recv().await, Some("fan-out".to_string()));
    }

    #[tokio::test]
    async fn broadcast_tolerates_missing_and_closed_targets() {
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx1).await;
        pusher.register_connection(conn("gone"), tx2).await;
        drop(rx2); // closed queue

        let result = pusher
            .broadcast(vec![conn("a"), conn("gone"), conn("never")], "msg")
            .await;

        assert!(result.is_ok());
        assert_eq!(rx1.recv().await, Some("msg".to_string()));
    }

    #[tokio::test]
    async fn unregistered_connection_no_longer_receives() {
        let pusher = WebSocketMessagePusher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        pusher.register_connection(conn("a"), tx).await;
        pusher.unregister_connection(&conn("a")).await;

        let result = pusher.broadcast(vec![conn("a")], "late").await;

        assert!(result.is_ok());
        // The sender half was dropped on unregister, so the queue is closed
        // and empty.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn broadcast_with_no_targets_is_a_no_op() {
        let pusher = WebSocketMessagePusher::new();

        let result = pusher.broadcast(vec![], "nobody").await;

        assert!(result.is_ok());
    }
}
