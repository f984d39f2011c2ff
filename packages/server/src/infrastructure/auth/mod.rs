//! Authentication collaborator implementations.

pub mod permissive;

pub use permissive::PermissiveAuthenticator;
