//! HTTP routes for pricing operations

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::routes::{rooms::load_active_room, ApiResponse};
use crate::AppState;

use super::calculators::{checkout_date, parse_reservation_dates, price_dates};
use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Pricing endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/rooms/:id/quote", post(quote))
}

/// Quote a stay in a room without placing an order
async fn quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<QuoteResponse>>> {
    let days = parse_reservation_dates(&req.days)?;
    let room = load_active_room(&state, id).await?;

    let quote = price_dates(&days, &room.rates())?;
    let (check_in, check_out) = days
        .first()
        .copied()
        .zip(checkout_date(&days))
        .ok_or_else(|| AppError::Validation("reserved days are out of range".to_string()))?;
    tracing::debug!(room_id = %id, total = quote.total, "Quoted stay");

    Ok(Json(ApiResponse::new(QuoteResponse::new(
        quote, check_in, check_out,
    ))))
}
