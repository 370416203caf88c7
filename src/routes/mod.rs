//! HTTP routes for rooms and orders

pub mod orders;
pub mod rooms;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

/// Success envelope shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn new(result: T) -> Self {
        Self {
            status: true,
            result,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    cache: CacheStats,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: state.cache.stats(),
    })
}

/// Room and order endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/rooms", get(rooms::list))
        .route("/api/v1/rooms/:id", get(rooms::detail))
        .route("/api/v1/admin/rooms", post(rooms::create))
        .route(
            "/api/v1/admin/rooms/:id",
            put(rooms::update).delete(rooms::remove),
        )
        .route("/api/v1/orders", post(orders::create))
        .route("/api/v1/orders/:id", get(orders::detail))
        .route("/api/v1/admin/orders", get(orders::list))
        .route(
            "/api/v1/admin/orders/:id",
            put(orders::update).delete(orders::remove),
        )
}
