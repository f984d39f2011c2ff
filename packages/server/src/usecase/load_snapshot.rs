//! UseCase: explicit snapshot load.

use std::sync::Arc;

use crate::domain::{RoomId, RoomRegistry, SnapshotStore};

use super::error::LoadSnapshotError;

/// Copies a stored snapshot over a room's live state.
///
/// Triggered only by explicit user action over HTTP. Members currently in
/// the room are not notified; they see the restored state the next time
/// the snapshot path runs for them.
pub struct LoadSnapshotUseCase {
    registry: Arc<dyn RoomRegistry>,
    store: Arc<dyn SnapshotStore>,
}

impl LoadSnapshotUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { registry, store }
    }

    pub async fn execute(&self, room_id: RoomId) -> Result<(), LoadSnapshotError> {
        let snapshot = self.store.load(&room_id).await?;
        self.registry.restore(room_id, snapshot).await;
        Ok(())
    }
}
