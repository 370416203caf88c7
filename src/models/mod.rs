//! Room and order records, plus request validation.
//!
//! Field rules live here as explicit checks run before anything touches the
//! database.

pub mod order;
pub mod room;

pub use order::{
    CreateOrderRequest, NewOrder, Order, OrderChanges, OrderDetail, UpdateOrderRequest, UserInfo,
};
pub use room::{CreateRoomRequest, FacilityItem, Room, RoomSummary, UpdateRoomRequest};

use url::Url;

use crate::error::{AppError, Result};

/// Record is live.
pub const STATUS_ACTIVE: i16 = 1;
/// Record was soft-deleted (room removed, order cancelled).
pub const STATUS_DELETED: i16 = -1;

/// Required text field: present and not blank.
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Integer field with a lower bound (people counts).
pub(crate) fn require_at_least(field: &str, value: i32, min: i32) -> Result<()> {
    if value < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {}",
            field, min
        )));
    }
    Ok(())
}

/// Image URLs must be absolute `https` URLs.
pub(crate) fn validate_image_urls(urls: &[String]) -> Result<()> {
    for raw in urls {
        let valid = Url::parse(raw.trim())
            .map(|u| u.scheme() == "https" && u.host().is_some())
            .unwrap_or(false);
        if !valid {
            return Err(AppError::Validation(format!(
                "imageUrlList entry '{}' is not a valid https URL",
                raw
            )));
        }
    }
    Ok(())
}
