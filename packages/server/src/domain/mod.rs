//! Domain model: entities, value objects, and the ports the use case layer
//! depends on. Concrete implementations live in the infrastructure layer.

pub mod auth;
pub mod entity;
pub mod error;
pub mod pusher;
pub mod registry;
pub mod store;
pub mod value_object;

pub use auth::{ClientIdentity, ConnectionAuthenticator};
pub use entity::{Room, RoomOverview, RoomSnapshot};
pub use error::{AuthError, MessagePushError, SnapshotStoreError};
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::{JoinOutcome, RoomRegistry};
pub use store::SnapshotStore;
pub use value_object::{ChatPayload, ConnectionId, RoomId, Timestamp};
