pub mod mail;
pub mod promo;
pub mod reference;
pub mod service;

pub use mail::{send_booking_notification, ConsoleMailAdapter, UNDELIVERABLE_RECIPIENT};
pub use promo::{PromoCode, PromoTable, RedeemRequest};
pub use reference::{ReferenceRequest, REFERENCE_PREFIX};
pub use service::{BookingConfirmation, BookingOutcome, BookingRequest, BookingService};
