use tixel_core::mail::{is_valid_address, EmailMessage, MailAdapter};
use tixel_core::BookingDetails;

/// Recipient that always fails delivery; reserved for exercising
/// failure paths.
pub const UNDELIVERABLE_RECIPIENT: &str = "fail@example.com";

/// Simulated delivery channel: traces the send instead of talking to a
/// real provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailAdapter;

impl MailAdapter for ConsoleMailAdapter {
    fn deliver(&self, message: &EmailMessage) -> bool {
        tracing::info!(to = %message.to, details = ?message.details, "simulating booking email");

        if message.to == UNDELIVERABLE_RECIPIENT {
            return false;
        }
        true
    }
}

/// Best-effort notification send.
///
/// A malformed address or an empty details record yields `false` rather
/// than an error, so callers must check the return value.
pub fn send_booking_notification<M: MailAdapter + ?Sized>(
    mailer: &M,
    email: &str,
    details: &BookingDetails,
) -> bool {
    if !is_valid_address(email) {
        return false;
    }
    if details.is_empty() {
        return false;
    }
    mailer.deliver(&EmailMessage::new(email, details.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn sample_details() -> BookingDetails {
        BookingDetails::new()
            .with("event_name", "Rockstar Concert")
            .with("tickets", 2)
            .with("total_price", 200.0)
    }

    /// Records every delivery attempt before delegating to the console
    /// adapter, so tests can assert the sentinel was attempted at all.
    struct RecordingAdapter {
        attempts: Mutex<Vec<String>>,
    }

    impl RecordingAdapter {
        fn new() -> Self {
            Self {
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    impl MailAdapter for RecordingAdapter {
        fn deliver(&self, message: &EmailMessage) -> bool {
            self.attempts.lock().unwrap().push(message.to.clone());
            ConsoleMailAdapter.deliver(message)
        }
    }

    #[test]
    fn test_valid_send_returns_true() {
        let mailer = ConsoleMailAdapter;
        assert!(send_booking_notification(&mailer, "test@example.com", &sample_details()));
        assert!(send_booking_notification(
            &mailer,
            "another.user@domain.co.uk",
            &sample_details()
        ));
    }

    #[test]
    fn test_malformed_address_returns_false() {
        let mailer = RecordingAdapter::new();
        assert!(!send_booking_notification(&mailer, "invalid_email", &sample_details()));
        assert!(!send_booking_notification(&mailer, "", &sample_details()));

        // never handed to the adapter
        assert!(mailer.attempts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_details_returns_false() {
        let mailer = RecordingAdapter::new();
        assert!(!send_booking_notification(
            &mailer,
            "test@example.com",
            &BookingDetails::new()
        ));
        assert!(mailer.attempts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_undeliverable_recipient_is_attempted_then_rejected() {
        let mailer = RecordingAdapter::new();
        let details = BookingDetails::new().with("id", 123);

        assert!(!send_booking_notification(&mailer, UNDELIVERABLE_RECIPIENT, &details));

        let attempts = mailer.attempts.lock().unwrap();
        assert_eq!(attempts.as_slice(), [UNDELIVERABLE_RECIPIENT]);
    }
}
