//! In-memory room registry.
//!
//! All room state and membership lives behind one `tokio::sync::Mutex`, so
//! every registry operation is one critical section. Contention is not a
//! concern at the scale this server targets; rooms that need to proceed in
//! parallel have no shared state beyond this map.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bansho_shared::time::now_utc_millis;

use crate::domain::{
    ChatPayload, ConnectionId, JoinOutcome, Room, RoomId, RoomOverview, RoomRegistry, RoomSnapshot,
    Timestamp,
};

#[derive(Default)]
struct RegistryInner {
    /// Room state, keyed by identifier. Entries are created lazily and
    /// never removed: a room emptied of members keeps its state.
    rooms: HashMap<RoomId, Room>,
    /// Current members per room, in join order.
    members: HashMap<RoomId, Vec<ConnectionId>>,
    /// Reverse index: which room each connection is currently in.
    current_room: HashMap<ConnectionId, RoomId>,
}

impl RegistryInner {
    fn room_entry(&mut self, room_id: &RoomId) -> &mut Room {
        self.rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::new(room_id.clone(), Timestamp::new(now_utc_millis())))
    }

    fn members_of(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.members.get(room_id).cloned().unwrap_or_default()
    }
}

/// In-memory implementation of the `RoomRegistry` port.
#[derive(Default)]
pub struct InMemoryRoomRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(&self, conn_id: ConnectionId, room_id: RoomId) -> JoinOutcome {
        let mut inner = self.inner.lock().await;

        // A connection belongs to at most one room; leave the previous one.
        if let Some(prev) = inner.current_room.get(&conn_id).cloned() {
            if prev != room_id {
                if let Some(list) = inner.members.get_mut(&prev) {
                    list.retain(|c| c != &conn_id);
                }
            }
        }

        let snapshot = inner.room_entry(&room_id).snapshot();

        let members = inner.members.entry(room_id.clone()).or_default();
        let prior_members = members.len();
        if !members.contains(&conn_id) {
            members.push(conn_id.clone());
        }
        inner.current_room.insert(conn_id, room_id);

        JoinOutcome {
            prior_members,
            snapshot,
        }
    }

    async fn update_code(&self, room_id: RoomId, value: String) -> Vec<ConnectionId> {
        let mut inner = self.inner.lock().await;
        inner.room_entry(&room_id).set_code(value);
        inner.members_of(&room_id)
    }

    async fn update_language(&self, room_id: RoomId, language: String) -> Vec<ConnectionId> {
        let mut inner = self.inner.lock().await;
        inner.room_entry(&room_id).set_language(language);
        inner.members_of(&room_id)
    }

    async fn append_chat(&self, room_id: RoomId, message: ChatPayload) -> Vec<ConnectionId> {
        let mut inner = self.inner.lock().await;
        inner.room_entry(&room_id).push_message(message);
        inner.members_of(&room_id)
    }

    async fn remove_member(&self, conn_id: &ConnectionId) {
        let mut inner = self.inner.lock().await;
        if let Some(room_id) = inner.current_room.remove(conn_id) {
            if let Some(list) = inner.members.get_mut(&room_id) {
                list.retain(|c| c != conn_id);
            }
        }
    }

    async fn member_count(&self, room_id: &RoomId) -> usize {
        let inner = self.inner.lock().await;
        inner.members.get(room_id).map_or(0, |list| list.len())
    }

    async fn overviews(&self) -> Vec<RoomOverview> {
        let inner = self.inner.lock().await;
        let mut overviews: Vec<RoomOverview> = inner
            .rooms
            .values()
            .map(|room| RoomOverview {
                room: room.clone(),
                members: inner.members_of(&room.id),
            })
            .collect();
        // Map iteration order is arbitrary; keep the listing stable.
        overviews.sort_by(|a, b| a.room.id.as_str().cmp(b.room.id.as_str()));
        overviews
    }

    async fn overview(&self, room_id: &RoomId) -> Option<RoomOverview> {
        let inner = self.inner.lock().await;
        inner.rooms.get(room_id).map(|room| RoomOverview {
            room: room.clone(),
            members: inner.members_of(room_id),
        })
    }

    async fn snapshot(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        let inner = self.inner.lock().await;
        inner.rooms.get(room_id).map(Room::snapshot)
    }

    async fn restore(&self, room_id: RoomId, snapshot: RoomSnapshot) {
        let mut inner = self.inner.lock().await;
        inner.room_entry(&room_id).apply_snapshot(snapshot);
    }
}
