//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to quote a stay in a room
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub days: Vec<String>,
}
