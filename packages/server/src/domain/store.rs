//! Snapshot store port.
//!
//! Durable persistence of room snapshots is a collaborator concern: it is
//! invoked only on explicit user action and never sits in the real-time
//! synchronization path. The default implementation is in-memory.

use async_trait::async_trait;

use super::entity::RoomSnapshot;
use super::error::SnapshotStoreError;
use super::value_object::RoomId;

/// Save/load of room snapshots by room identifier.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist `snapshot` under `room_id`, replacing any previous snapshot.
    async fn save(&self, room_id: RoomId, snapshot: RoomSnapshot)
    -> Result<(), SnapshotStoreError>;

    /// Load the snapshot stored under `room_id`.
    async fn load(&self, room_id: &RoomId) -> Result<RoomSnapshot, SnapshotStoreError>;
}
