//! Reservation confirmation emails.
//!
//! The message body is an askama template; delivery goes through the
//! [`Mailer`] trait so the transport can be swapped without touching the
//! order handlers.

use askama::Template;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Room, UserInfo};
use crate::pricing::{checkout_date, format_price, price_dates, PricingError, DATE_FORMAT};

pub const CONFIRMATION_SUBJECT: &str = "The House Room Reservation Confirmation";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// A rendered message ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outbound mail transport
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Transport that only records messages in the log
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        tracing::info!(
            from = %mail.from,
            to = %mail.to,
            subject = %mail.subject,
            bytes = mail.html.len(),
            "Outgoing mail"
        );
        tracing::debug!("Mail body: {}", mail.html);
        Ok(())
    }
}

/// Confirmation email body
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
pub struct OrderConfirmation {
    pub guest_name: String,
    pub room_name: String,
    pub check_in: String,
    pub check_out: String,
    pub formatted_price: String,
}

impl OrderConfirmation {
    /// Price the stay and fill in the stay range for the email.
    pub fn new(room: &Room, guest_name: &str, days: &[NaiveDate]) -> Result<Self, MailError> {
        let quote = price_dates(days, &room.rates())?;
        let fmt = |d: Option<NaiveDate>| {
            d.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };

        Ok(Self {
            guest_name: guest_name.to_string(),
            room_name: room.name.clone(),
            check_in: fmt(days.first().copied()),
            check_out: fmt(checkout_date(days)),
            formatted_price: format_price(quote.total),
        })
    }
}

/// Render and send the confirmation for a freshly created order.
pub async fn send_order_confirmation(
    mailer: &dyn Mailer,
    from: &str,
    room: &Room,
    user: &UserInfo,
    days: &[NaiveDate],
) -> Result<(), MailError> {
    let html = OrderConfirmation::new(room, &user.name, days)?.render()?;

    mailer
        .send(OutgoingMail {
            from: from.to_string(),
            to: user.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html,
        })
        .await
}
