//! UseCase: single-room detail.

use std::sync::Arc;

use crate::domain::{RoomId, RoomOverview, RoomRegistry};

use super::error::RoomLookupError;

/// Fetches one room with its current members.
pub struct GetRoomDetailUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomDetailUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, room_id: &RoomId) -> Result<RoomOverview, RoomLookupError> {
        self.registry
            .overview(room_id)
            .await
            .ok_or(RoomLookupError::RoomNotFound)
    }
}
