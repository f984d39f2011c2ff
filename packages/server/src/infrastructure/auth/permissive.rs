//! Permissive authenticator.
//!
//! Accepts every connection. A supplied name becomes the display identity;
//! otherwise the connection id prefix is used. Real credential validation
//! belongs to an external authentication service behind the same port.

use async_trait::async_trait;

use crate::domain::{AuthError, ClientIdentity, ConnectionAuthenticator, ConnectionId};

/// Allow-all implementation of the `ConnectionAuthenticator` port.
#[derive(Default)]
pub struct PermissiveAuthenticator;

impl PermissiveAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConnectionAuthenticator for PermissiveAuthenticator {
    async fn authenticate(
        &self,
        conn_id: &ConnectionId,
        credential: Option<&str>,
    ) -> Result<ClientIdentity, AuthError> {
        let display_name = match credential.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("guest-{}", conn_id.short()),
        };
        Ok(ClientIdentity { display_name })
    }
}
