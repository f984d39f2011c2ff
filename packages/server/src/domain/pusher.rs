//! Message delivery port.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// Per-connection outbound queue. Unbounded so that enqueueing never blocks
/// the mutation path; the gateway drains it into the socket from a
/// dedicated writer task per connection.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Delivery of serialized events to connections and connection groups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound queue.
    async fn register_connection(&self, conn_id: ConnectionId, sender: PusherChannel);

    /// Unregister a connection's outbound queue.
    async fn unregister_connection(&self, conn_id: &ConnectionId);

    /// Push a message to one connection.
    async fn push_to(&self, conn_id: &ConnectionId, content: &str) -> Result<(), MessagePushError>;

    /// Push a message to each target connection. Delivery is best-effort:
    /// targets that are gone or whose queue is closed are logged and
    /// skipped, and the call as a whole still succeeds.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
