//! UseCase: room listing.

use std::sync::Arc;

use crate::domain::{RoomOverview, RoomRegistry};

/// Lists every room the registry has seen, with current members.
pub struct GetRoomsUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomsUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> Vec<RoomOverview> {
        self.registry.overviews().await
    }
}
