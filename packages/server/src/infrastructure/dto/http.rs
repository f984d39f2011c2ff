//! HTTP introspection API response DTOs.

use serde::{Deserialize, Serialize};

/// One row of `GET /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub members: usize,
    pub has_code: bool,
    pub language: Option<String>,
    pub messages: usize,
    pub created_at: String,
}

/// Response of `GET /api/rooms/{room_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub members: Vec<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub messages: usize,
    pub created_at: String,
}
