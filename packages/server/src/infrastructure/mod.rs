//! Concrete implementations of the domain ports, plus wire and HTTP DTOs.

pub mod auth;
pub mod dto;
pub mod message_pusher;
pub mod repository;
