//! Authentication collaborator port.
//!
//! Identifies the human behind a connection. The synchronization protocol
//! itself is room-scoped, not identity-scoped, so nothing in the real-time
//! path consults the resolved identity; it exists for logging and for
//! collaborators that do care who is connected.

use async_trait::async_trait;

use super::error::AuthError;
use super::value_object::ConnectionId;

/// The resolved identity of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub display_name: String,
}

/// Resolves an optional connect-time credential to an identity.
#[async_trait]
pub trait ConnectionAuthenticator: Send + Sync {
    /// Resolve `credential` for `conn_id`, or reject the connection.
    async fn authenticate(
        &self,
        conn_id: &ConnectionId,
        credential: Option<&str>,
    ) -> Result<ClientIdentity, AuthError>;
}
