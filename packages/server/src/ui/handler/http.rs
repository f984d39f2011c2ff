//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{RoomId, RoomOverview},
    infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
    usecase::{LoadSnapshotError, RoomLookupError, SaveSnapshotError},
};

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List every room the registry has seen.
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let overviews = state.get_rooms_usecase.execute().await;

    let summaries: Vec<RoomSummaryDto> = overviews.iter().map(RoomSummaryDto::from).collect();
    Json(summaries)
}

/// Get one room's detail by id.
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state
        .get_room_detail_usecase
        .execute(&RoomId::new(room_id))
        .await
    {
        Ok(overview) => Ok(Json(RoomDetailDto::from(&overview))),
        Err(RoomLookupError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}

/// Debug endpoint exposing raw registry contents (for testing purposes).
pub async fn debug_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomOverview>> {
    Json(state.get_rooms_usecase.execute().await)
}

/// Copy a room's live state into the snapshot store. Explicit user action;
/// never part of the real-time path.
pub async fn save_room_snapshot(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> StatusCode {
    match state
        .save_snapshot_usecase
        .execute(RoomId::new(room_id.clone()))
        .await
    {
        Ok(()) => {
            tracing::info!("Saved snapshot of room '{}'", room_id);
            StatusCode::NO_CONTENT
        }
        Err(SaveSnapshotError::RoomNotFound) => StatusCode::NOT_FOUND,
        Err(SaveSnapshotError::Store(e)) => {
            tracing::error!("Failed to save snapshot of room '{}': {}", room_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Copy a stored snapshot over a room's live state. Explicit user action.
pub async fn load_room_snapshot(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> StatusCode {
    match state
        .load_snapshot_usecase
        .execute(RoomId::new(room_id.clone()))
        .await
    {
        Ok(()) => {
            tracing::info!("Loaded snapshot into room '{}'", room_id);
            StatusCode::NO_CONTENT
        }
        Err(LoadSnapshotError::Store(crate::domain::SnapshotStoreError::NotFound(_))) => {
            StatusCode::NOT_FOUND
        }
        Err(LoadSnapshotError::Store(e)) => {
            tracing::error!("Failed to load snapshot into room '{}': {}", room_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
