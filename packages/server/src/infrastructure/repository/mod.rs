//! Registry and store implementations.

pub mod inmemory;

pub use inmemory::registry::InMemoryRoomRegistry;
pub use inmemory::snapshot::InMemorySnapshotStore;
