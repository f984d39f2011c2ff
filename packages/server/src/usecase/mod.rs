//! Use cases: one per inbound operation. This layer is the synchronization
//! policy: it decides who initializes a room, what a late joiner receives,
//! and who each mutation is fanned out to.

pub mod disconnect;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod load_snapshot;
pub mod save_snapshot;
pub mod send_chat_message;
pub mod update_editor;
pub mod update_language;

pub use disconnect::DisconnectConnectionUseCase;
pub use error::{BroadcastError, LoadSnapshotError, RoomLookupError, SaveSnapshotError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use load_snapshot::LoadSnapshotUseCase;
pub use save_snapshot::SaveSnapshotUseCase;
pub use send_chat_message::SendChatMessageUseCase;
pub use update_editor::UpdateEditorUseCase;
pub use update_language::UpdateLanguageUseCase;
