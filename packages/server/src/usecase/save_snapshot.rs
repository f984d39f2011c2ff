//! UseCase: explicit snapshot save.

use std::sync::Arc;

use crate::domain::{RoomId, RoomRegistry, SnapshotStore};

use super::error::SaveSnapshotError;

/// Copies a room's live state into the snapshot store.
///
/// Triggered only by explicit user action over HTTP; the real-time
/// synchronization path never touches the store.
pub struct SaveSnapshotUseCase {
    registry: Arc<dyn RoomRegistry>,
    store: Arc<dyn SnapshotStore>,
}

impl SaveSnapshotUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { registry, store }
    }

    pub async fn execute(&self, room_id: RoomId) -> Result<(), SaveSnapshotError> {
        let snapshot = self
            .registry
            .snapshot(&room_id)
            .await
            .ok_or(SaveSnapshotError::RoomNotFound)?;
        self.store.save(room_id, snapshot).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, SnapshotStoreError};
    use crate::infrastructure::repository::{InMemoryRoomRegistry, InMemorySnapshotStore};

    #[tokio::test]
    async fn save_copies_live_state_into_the_store() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry
            .join(ConnectionId::fixed("a"), RoomId::new("r1"))
            .await;
        registry
            .update_code(RoomId::new("r1"), "print(1)".to_string())
            .await;
        let store = Arc::new(InMemorySnapshotStore::new());

        let usecase = SaveSnapshotUseCase::new(registry, store.clone());
        usecase.execute(RoomId::new("r1")).await.unwrap();

        let stored = store.load(&RoomId::new("r1")).await.unwrap();
        assert_eq!(stored.code.as_deref(), Some("print(1)"));
    }

    #[tokio::test]
    async fn saving_an_unknown_room_fails_without_touching_the_store() {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let store = Arc::new(InMemorySnapshotStore::new());

        let usecase = SaveSnapshotUseCase::new(registry, store.clone());
        let result = usecase.execute(RoomId::new("nowhere")).await;

        assert_eq!(result, Err(SaveSnapshotError::RoomNotFound));
        assert_eq!(
            store.load(&RoomId::new("nowhere")).await,
            Err(SnapshotStoreError::NotFound("nowhere".to_string()))
        );
    }
}
