//! Booked-day window for room detail pages.
//!
//! Reserved days of every order of a room are narrowed down to the ones
//! falling inside the booking horizon, so the calendar can grey them out.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, TimeZone};

/// Days after today that are still shown as booked (inclusive).
pub const BOOKING_HORIZON_DAYS: u64 = 90;

/// Inclusive date range `[start, end]` of the booking horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AvailabilityWindow {
    /// Window starting at `today` and ending `BOOKING_HORIZON_DAYS` later.
    pub fn starting(today: NaiveDate) -> Self {
        let end = today
            .checked_add_days(Days::new(BOOKING_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self { start: today, end }
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Distinct reserved days within the booking horizon, in first-seen order.
///
/// `reserved` is the flattened day list of every order of one room.
pub fn booked_window<I>(reserved: I, today: NaiveDate) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let window = AvailabilityWindow::starting(today);
    let mut seen = HashSet::new();

    reserved
        .into_iter()
        .filter(|day| window.contains(*day))
        .filter(|day| seen.insert(*day))
        .collect()
}

/// [`booked_window`] with the window anchored on the calendar day of `now`.
///
/// The time of day is dropped, so the boundary does not move during the day.
pub fn booked_window_at<I, Tz>(reserved: I, now: &DateTime<Tz>) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
    Tz: TimeZone,
{
    booked_window(reserved, now.date_naive())
}
