//! The House room-reservation backend.
//!
//! CRUD over rooms and orders, stay pricing with a weekday/weekend rate
//! schedule, and confirmation emails for new orders.

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod mail;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::AppCache;
use crate::config::Config;
use crate::mail::Mailer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub mailer: Arc<dyn Mailer>,
    pub config: Arc<Config>,
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
