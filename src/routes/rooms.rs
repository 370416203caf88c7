//! Room route handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{CreateRoomRequest, Room, RoomSummary, UpdateRoomRequest, STATUS_ACTIVE};
use crate::pricing::booked_window_at;
use crate::AppState;

use super::ApiResponse;

/// Room detail with the days already taken in the booking horizon
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailResponse {
    pub status: bool,
    pub result: Room,
    pub booked_days: Vec<NaiveDate>,
}

/// Load an active room, from cache when possible
///
/// Concurrent misses for the same id share one database read.
pub(crate) async fn load_active_room(state: &AppState, id: Uuid) -> Result<Arc<Room>> {
    if let Some(cached) = state.cache.active_room(id).await {
        tracing::debug!("Cache HIT for room: {}", id);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for room: {}", id);
    let room = state
        .cache
        .rooms
        .try_get_with(id, async {
            db::get_active_room(&state.db, id).await.map(Arc::new)
        })
        .await?;

    if room.status != STATUS_ACTIVE {
        state.cache.rooms.invalidate(&id).await;
        return Err(AppError::NotFound("Room not found".to_string()));
    }
    Ok(room)
}

/// Active room listing
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<RoomSummary>>>> {
    let listing = match state.cache.get_listing().await {
        Some(cached) => cached,
        None => {
            let rooms = db::list_active_rooms(&state.db).await?;
            let listing = rooms.iter().map(Room::summary).collect();
            state.cache.put_listing(listing).await
        }
    };

    Ok(Json(ApiResponse::new((*listing).clone())))
}

/// Room detail plus booked days for the next 90 days
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomDetailResponse>> {
    let room = load_active_room(&state, id).await?;
    let reserved = db::list_room_days(&state.db, id).await?;
    let booked_days = booked_window_at(reserved, &Local::now());

    Ok(Json(RoomDetailResponse {
        status: true,
        result: (*room).clone(),
        booked_days,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>> {
    req.validate()?;

    let room = db::insert_room(&state.db, &req).await?;
    state.cache.invalidate_room(room.id).await;
    tracing::info!(room_id = %room.id, name = %room.name, "Room created");

    Ok(Json(ApiResponse::new(room)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>> {
    req.validate()?;

    let room = db::update_room(&state.db, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
    state.cache.invalidate_room(id).await;

    Ok(Json(ApiResponse::new(room)))
}

/// Soft delete: the room stays referenced by its orders
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Room>>> {
    let room = db::soft_delete_room(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
    state.cache.invalidate_room(id).await;
    tracing::info!(room_id = %id, "Room deleted");

    Ok(Json(ApiResponse::new(room)))
}
