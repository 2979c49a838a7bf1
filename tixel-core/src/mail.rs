use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BookingDetails;

/// An outbound booking notification, queued for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub details: BookingDetails,
    pub queued_at: DateTime<Utc>,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, details: BookingDetails) -> Self {
        Self {
            to: to.into(),
            details,
            queued_at: Utc::now(),
        }
    }
}

/// Delivery seam for booking notifications.
pub trait MailAdapter: Send + Sync {
    /// Attempt delivery. Returns `false` when the provider rejects the message.
    fn deliver(&self, message: &EmailMessage) -> bool;
}

/// Minimal address shape check: an `@`, and a `.` somewhere after the last one.
pub fn is_valid_address(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}
