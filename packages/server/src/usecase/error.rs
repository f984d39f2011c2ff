//! Use case error types.

use thiserror::Error;

use crate::domain::SnapshotStoreError;

/// Fan-out of a serialized event failed as a whole. Per-target delivery
/// failures are tolerated and logged by the pusher, so this surfaces only
/// when the pusher itself gives up.
#[derive(Debug, Error, PartialEq)]
pub enum BroadcastError {
    #[error("failed to broadcast event: {0}")]
    Failed(String),
}

/// A read of a specific room failed.
#[derive(Debug, Error, PartialEq)]
pub enum RoomLookupError {
    #[error("room not found")]
    RoomNotFound,
}

/// Saving a room snapshot failed.
#[derive(Debug, Error, PartialEq)]
pub enum SaveSnapshotError {
    #[error("room not found")]
    RoomNotFound,

    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}

/// Loading a room snapshot failed.
#[derive(Debug, Error, PartialEq)]
pub enum LoadSnapshotError {
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}
