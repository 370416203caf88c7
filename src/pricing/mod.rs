//! Pricing engine module for room stays.
//!
//! Stay pricing (weekday/weekend rates plus surcharge) and the booked-day
//! window shown on room pages. Both are pure functions; the HTTP layer feeds
//! them room and order records.

pub mod availability;
pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use availability::{booked_window, booked_window_at, AvailabilityWindow, BOOKING_HORIZON_DAYS};
pub use calculators::{
    checkout_date, compute_price, format_price, parse_reservation_dates, price_dates, PriceQuote,
    PricingError, RoomRates, DATE_FORMAT,
};
pub use routes::router;
