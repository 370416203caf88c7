//! Order route handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, Result};
use crate::mail;
use crate::models::{CreateOrderRequest, OrderDetail, UpdateOrderRequest};
use crate::AppState;

use super::rooms::load_active_room;
use super::ApiResponse;

/// All orders with their rooms
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<OrderDetail>>>> {
    let orders = db::list_orders(&state.db).await?;
    let details = db::populate_rooms(&state.db, orders).await?;
    Ok(Json(ApiResponse::new(details)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderDetail>>> {
    let order = db::get_order(&state.db, id).await?;
    let detail = db::populate_room(&state.db, order).await?;
    Ok(Json(ApiResponse::new(detail)))
}

/// Place an order, then send the confirmation email in the background.
///
/// Mail failures are logged only; the client already got its answer.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<&'static str>>> {
    let order = req.into_new_order()?;
    let room = load_active_room(&state, order.room_id).await?;

    let created = db::insert_order(&state.db, &order).await?;
    tracing::info!(
        order_id = %created.id,
        room_id = %room.id,
        nights = created.days.len(),
        "Order created"
    );

    let mailer = Arc::clone(&state.mailer);
    let from = state.config.mail_from.clone();
    let user = order.user_info;
    tokio::spawn(async move {
        let sent =
            mail::send_order_confirmation(mailer.as_ref(), &from, &room, &user, &created.days)
                .await;
        if let Err(e) = sent {
            tracing::warn!(order_id = %created.id, "Failed to send confirmation: {}", e);
        }
    });

    Ok(Json(ApiResponse::new("success")))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<OrderDetail>>> {
    let changes = req.into_changes()?;
    if let Some(room_id) = changes.room_id {
        load_active_room(&state, room_id).await?;
    }

    let order = db::update_order(&state.db, id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
    let detail = db::populate_room(&state.db, order).await?;

    Ok(Json(ApiResponse::new(detail)))
}

/// Cancel an order (soft delete)
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderDetail>>> {
    let order = db::soft_delete_order(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
    tracing::info!(order_id = %id, "Order cancelled");
    let detail = db::populate_room(&state.db, order).await?;

    Ok(Json(ApiResponse::new(detail)))
}
