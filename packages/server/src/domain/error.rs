//! Domain-level error types.

use thiserror::Error;

/// Errors from pushing messages to connection queues.
#[derive(Debug, Error, PartialEq)]
pub enum MessagePushError {
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Errors from the snapshot store collaborator.
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotStoreError {
    #[error("no snapshot stored for room '{0}'")]
    NotFound(String),

    #[error("snapshot store failure: {0}")]
    Backend(String),
}

/// Errors from the authentication collaborator.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("credential rejected: {0}")]
    Rejected(String),
}
