//! UseCase: language selection update.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRegistry};

use super::error::BroadcastError;

/// Applies a language change and fans it out to the rest of the room.
pub struct UpdateLanguageUseCase {
    registry: Arc<dyn RoomRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl UpdateLanguageUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    /// Set the room's selected language (last write wins) and broadcast the
    /// pre-serialized return event to every member except the sender.
    pub async fn execute(
        &self,
        sender: &ConnectionId,
        room_id: RoomId,
        language: String,
        json_message: String,
    ) -> Result<Vec<ConnectionId>, BroadcastError> {
        let members = self.registry.update_language(room_id, language).await;
        let targets: Vec<ConnectionId> =
            members.into_iter().filter(|id| id != sender).collect();

        self.pusher
            .broadcast(targets.clone(), &json_message)
            .await
            .map_err(|e| BroadcastError::Failed(e.to_string()))?;

        Ok(targets)
    }
}
