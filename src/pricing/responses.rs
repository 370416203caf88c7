//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{format_price, PriceQuote};

/// Response for a stay quote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub total: i64,
    pub formatted_total: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub weekday_nights: u32,
    pub weekend_nights: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl QuoteResponse {
    pub fn new(quote: PriceQuote, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            total: quote.total,
            formatted_total: format_price(quote.total),
            subtotal: quote.subtotal,
            weekday_nights: quote.weekday_nights,
            weekend_nights: quote.weekend_nights,
            check_in,
            check_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{checkout_date, price_dates, RoomRates};
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_response_shape() {
        let days = vec![
            NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        ];
        let quote = price_dates(&days, &RoomRates::new(dec!(1000), dec!(1500))).unwrap();

        let check_out = checkout_date(&days).unwrap();

        let value = serde_json::to_value(QuoteResponse::new(quote, days[0], check_out)).unwrap();
        assert_eq!(value["total"], 2100);
        assert_eq!(value["formattedTotal"], "2,100");
        assert_eq!(value["subtotal"], "2000");
        assert_eq!(value["checkIn"], "2024-01-30");
        assert_eq!(value["checkOut"], "2024-02-01");
    }

    #[test]
    fn test_quote_response_dates_never_null() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let quote = price_dates(&[day], &RoomRates::new(dec!(1000), dec!(1500))).unwrap();
        let check_out = checkout_date(&[day]).unwrap();

        let value = serde_json::to_value(QuoteResponse::new(quote, day, check_out)).unwrap();
        assert_eq!(value["checkIn"], "2024-12-31");
        assert_eq!(value["checkOut"], "2025-01-01");
        assert_eq!(value["weekdayNights"], 1);
        assert_eq!(value["total"], 1050);
    }
}
