use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tixel_catalog::{pricing, SeatTable};
use tixel_core::{BookingDetails, BookingResult, MailAdapter};

use crate::mail::{send_booking_notification, ConsoleMailAdapter};
use crate::promo::PromoTable;
use crate::reference;

/// A booking attempt assembled by the external layer.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub order_id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub seats: i32,
    pub unit_price: f64,
    pub promo_code: Option<String>,
    pub email: Option<String>,
}

/// Outcome of a booking attempt whose arguments passed validation.
#[derive(Debug, Clone, Serialize)]
pub enum BookingOutcome {
    Confirmed(BookingConfirmation),
    /// The event has fewer seats recorded than requested; nothing was mutated.
    InsufficientSeats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub reference: String,
    pub total: f64,
    pub discount_applied: f64,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

/// Owns the two in-memory tables and a delivery channel, and exposes the
/// booking operations over them.
///
/// The tables stand in for a future database; the external layer
/// provisions them before use (see [`SeatTable`] and [`PromoTable`]).
pub struct BookingService<M = ConsoleMailAdapter> {
    seats: SeatTable,
    promos: PromoTable,
    mailer: M,
}

impl BookingService<ConsoleMailAdapter> {
    pub fn new(seats: SeatTable, promos: PromoTable) -> Self {
        Self::with_mailer(seats, promos, ConsoleMailAdapter)
    }
}

impl<M: MailAdapter> BookingService<M> {
    pub fn with_mailer(seats: SeatTable, promos: PromoTable, mailer: M) -> Self {
        Self {
            seats,
            promos,
            mailer,
        }
    }

    pub fn seats(&self) -> &SeatTable {
        &self.seats
    }

    pub fn seats_mut(&mut self) -> &mut SeatTable {
        &mut self.seats
    }

    pub fn promos(&self) -> &PromoTable {
        &self.promos
    }

    pub fn promos_mut(&mut self) -> &mut PromoTable {
        &mut self.promos
    }

    pub fn quote_total(&self, base_price: f64, discount: f64, quantity: i32) -> BookingResult<f64> {
        pricing::quote_total(base_price, discount, quantity)
    }

    pub fn check_availability(&self, event_id: i64, seats_requested: i32) -> bool {
        self.seats.check_availability(event_id, seats_requested)
    }

    pub fn redeem_promo(&mut self, order_id: i64, code: &str) -> bool {
        self.promos.redeem(order_id, code)
    }

    pub fn issue_reference(&self, user_id: i64, event_id: i64) -> BookingResult<String> {
        reference::issue(user_id, event_id)
    }

    pub fn send_notification(&self, email: &str, details: &BookingDetails) -> bool {
        send_booking_notification(&self.mailer, email, details)
    }

    /// Run a full booking attempt: availability, identifiers, price,
    /// promo, reference, notification.
    ///
    /// Identifier and price arguments are validated before a promo use is
    /// consumed. A code the table rejects books at full price rather than
    /// failing the attempt, and notification stays best-effort: a failed
    /// send only clears the `notified` flag.
    pub fn book(&mut self, request: &BookingRequest) -> BookingResult<BookingOutcome> {
        if !self.check_availability(request.event_id, request.seats) {
            tracing::info!(
                order_id = request.order_id,
                event_id = request.event_id,
                seats = request.seats,
                "booking rejected: not enough seats"
            );
            return Ok(BookingOutcome::InsufficientSeats);
        }

        let reference = reference::issue(request.user_id, request.event_id)?;
        let full_total = pricing::quote_total(request.unit_price, 0.0, request.seats)?;

        let (total, discount_applied) = match request.promo_code.as_deref() {
            Some(code) if self.promos.redeem(request.order_id, code) => {
                let discount = self
                    .promos
                    .get(code)
                    .map(|promo| promo.discount_value)
                    .unwrap_or(0.0);
                (
                    pricing::quote_total(request.unit_price, discount, request.seats)?,
                    discount,
                )
            }
            _ => (full_total, 0.0),
        };

        let notified = match request.email.as_deref() {
            Some(email) => {
                let details = BookingDetails::new()
                    .with("reference", reference.clone())
                    .with("event_id", request.event_id)
                    .with("seats", request.seats)
                    .with("total", total);
                self.send_notification(email, &details)
            }
            None => false,
        };

        tracing::info!(
            order_id = request.order_id,
            reference = %reference,
            total,
            discount_applied,
            "booking confirmed"
        );

        Ok(BookingOutcome::Confirmed(BookingConfirmation {
            reference,
            total,
            discount_applied,
            notified,
            created_at: Utc::now(),
        }))
    }
}
