//! In-memory snapshot store.
//!
//! Stands in for the durable-store collaborator; snapshots survive room
//! membership churn but not a process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RoomId, RoomSnapshot, SnapshotStore, SnapshotStoreError};

/// In-memory implementation of the `SnapshotStore` port.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshots: Mutex<HashMap<RoomId, RoomSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(
        &self,
        room_id: RoomId,
        snapshot: RoomSnapshot,
    ) -> Result<(), SnapshotStoreError> {
        let mut snapshots = self.snapshots.lock().await;
        snapshots.insert(room_id, snapshot);
        Ok(())
    }

    async fn load(&self, room_id: &RoomId) -> Result<RoomSnapshot, SnapshotStoreError> {
        let snapshots = self.snapshots.lock().await;
        snapshots
            .get(room_id)
            .cloned()
            .ok_or_else(|| SnapshotStoreError::NotFound(room_id.as_str().to_string()))
    }
}
