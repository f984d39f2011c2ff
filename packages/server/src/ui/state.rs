//! Shared application state handed to the handlers.

use std::sync::Arc;

use crate::domain::{ConnectionAuthenticator, MessagePusher};
use crate::infrastructure::{
    auth::PermissiveAuthenticator,
    message_pusher::WebSocketMessagePusher,
    repository::{InMemoryRoomRegistry, InMemorySnapshotStore},
};
use crate::usecase::{
    DisconnectConnectionUseCase, GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase,
    LoadSnapshotUseCase, SaveSnapshotUseCase, SendChatMessageUseCase, UpdateEditorUseCase,
    UpdateLanguageUseCase,
};

/// Shared application state.
pub struct AppState {
    /// Delivery queues; the gateway registers each accepted connection here
    /// before any of its events can be processed.
    pub pusher: Arc<dyn MessagePusher>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub update_editor_usecase: Arc<UpdateEditorUseCase>,
    pub update_language_usecase: Arc<UpdateLanguageUseCase>,
    pub send_chat_message_usecase: Arc<SendChatMessageUseCase>,
    pub disconnect_usecase: Arc<DisconnectConnectionUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    pub save_snapshot_usecase: Arc<SaveSnapshotUseCase>,
    pub load_snapshot_usecase: Arc<LoadSnapshotUseCase>,
    pub authenticator: Arc<dyn ConnectionAuthenticator>,
}

impl AppState {
    /// Wire the full in-memory stack.
    ///
    /// Dependencies are initialized in order:
    /// 1. Registry and snapshot store
    /// 2. MessagePusher
    /// 3. UseCases
    /// 4. Authenticator
    pub fn in_memory() -> Self {
        // 1. Registry (room state + membership) and snapshot store
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let store = Arc::new(InMemorySnapshotStore::new());

        // 2. MessagePusher (per-connection WebSocket queues)
        let pusher = Arc::new(WebSocketMessagePusher::new());

        // 3. UseCases
        let join_room_usecase = Arc::new(JoinRoomUseCase::new(registry.clone(), pusher.clone()));
        let update_editor_usecase =
            Arc::new(UpdateEditorUseCase::new(registry.clone(), pusher.clone()));
        let update_language_usecase =
            Arc::new(UpdateLanguageUseCase::new(registry.clone(), pusher.clone()));
        let send_chat_message_usecase =
            Arc::new(SendChatMessageUseCase::new(registry.clone(), pusher.clone()));
        let disconnect_usecase = Arc::new(DisconnectConnectionUseCase::new(
            registry.clone(),
            pusher.clone(),
        ));
        let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(registry.clone()));
        let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(registry.clone()));
        let save_snapshot_usecase =
            Arc::new(SaveSnapshotUseCase::new(registry.clone(), store.clone()));
        let load_snapshot_usecase = Arc::new(LoadSnapshotUseCase::new(registry, store));

        // 4. Authenticator (allow-all default)
        let authenticator = Arc::new(PermissiveAuthenticator::new());

        Self {
            pusher,
            join_room_usecase,
            update_editor_usecase,
            update_language_usecase,
            send_chat_message_usecase,
            disconnect_usecase,
            get_rooms_usecase,
            get_room_detail_usecase,
            save_snapshot_usecase,
            load_snapshot_usecase,
            authenticator,
        }
    }
}
