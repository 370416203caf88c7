//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing - no database access, no logging.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Surcharge applied on top of the nightly rates (5%).
pub const SURCHARGE_MULTIPLIER: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// Date format used for reserved days on the wire and in emails.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl PricingError {
    fn invalid(message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Nightly rates of a room, taken from the persisted room record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRates {
    pub weekday_price: Decimal,
    pub weekend_price: Decimal,
}

impl RoomRates {
    pub fn new(weekday_price: Decimal, weekend_price: Decimal) -> Self {
        Self {
            weekday_price,
            weekend_price,
        }
    }

    /// Both rates must be strictly positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.weekday_price <= Decimal::ZERO {
            return Err(PricingError::invalid("weekday price must be positive"));
        }
        if self.weekend_price <= Decimal::ZERO {
            return Err(PricingError::invalid("weekend price must be positive"));
        }
        Ok(())
    }
}

/// Result of a stay price calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Final price, surcharge included, rounded up to a whole unit.
    pub total: i64,
    /// Nightly rates summed, before surcharge.
    pub subtotal: Decimal,
    pub weekday_nights: u32,
    pub weekend_nights: u32,
}

/// Friday, Saturday and Sunday nights are billed at the weekend rate.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Parse reserved days (`YYYY-MM-DD`), keeping the caller's order.
///
/// Fails when the list is empty or any entry is not a calendar date.
pub fn parse_reservation_dates<S: AsRef<str>>(days: &[S]) -> Result<Vec<NaiveDate>, PricingError> {
    if days.is_empty() {
        return Err(PricingError::invalid("at least one reserved day is required"));
    }

    days.iter()
        .map(|day| {
            let day = day.as_ref();
            NaiveDate::parse_from_str(day.trim(), DATE_FORMAT)
                .map_err(|_| PricingError::invalid(format!("'{}' is not a valid date", day)))
        })
        .collect()
}

/// Price a stay from its reserved days and the room's rates.
///
/// Each day is classified as weekday or weekend, rates are summed, then the
/// 5% surcharge is applied and the result rounded up (never half-even).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use house_reservations::pricing::{compute_price, RoomRates};
///
/// let rates = RoomRates::new(dec!(1000), dec!(1500));
/// let quote = compute_price(&["2024-01-01", "2024-01-05"], &rates).unwrap();
/// assert_eq!(quote.total, 2625);
/// ```
pub fn compute_price<S: AsRef<str>>(days: &[S], rates: &RoomRates) -> Result<PriceQuote, PricingError> {
    let dates = parse_reservation_dates(days)?;
    price_dates(&dates, rates)
}

/// Same as [`compute_price`] for days that are already parsed.
pub fn price_dates(dates: &[NaiveDate], rates: &RoomRates) -> Result<PriceQuote, PricingError> {
    rates.validate()?;
    if dates.is_empty() {
        return Err(PricingError::invalid("at least one reserved day is required"));
    }

    let weekend_count = dates.iter().filter(|d| is_weekend(**d)).count();
    let weekend_nights = night_count(weekend_count)?;
    let weekday_nights = night_count(dates.len() - weekend_count)?;

    let out_of_range = || PricingError::invalid("price is out of range");

    let weekend_total = Decimal::from(weekend_nights)
        .checked_mul(rates.weekend_price)
        .ok_or_else(out_of_range)?;
    let weekday_total = Decimal::from(weekday_nights)
        .checked_mul(rates.weekday_price)
        .ok_or_else(out_of_range)?;
    let subtotal = weekend_total
        .checked_add(weekday_total)
        .ok_or_else(out_of_range)?;

    let total = subtotal
        .checked_mul(SURCHARGE_MULTIPLIER)
        .ok_or_else(out_of_range)?
        .ceil()
        .to_i64()
        .ok_or_else(out_of_range)?;

    Ok(PriceQuote {
        total,
        subtotal,
        weekday_nights,
        weekend_nights,
    })
}

fn night_count(count: usize) -> Result<u32, PricingError> {
    u32::try_from(count).map_err(|_| PricingError::invalid("too many reserved days"))
}

/// Check-out day shown to the guest: the last reserved day plus one.
///
/// Uses the last day as supplied, not the latest one.
pub fn checkout_date(dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.last()?.checked_add_days(Days::new(1))
}

/// Format a whole price with `,` thousands separators and no decimals.
pub fn format_price(total: i64) -> String {
    let digits = total.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if total < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
