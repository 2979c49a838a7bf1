use serde::Deserialize;

use tixel_core::{BookingError, BookingResult};

/// Arguments for a price quote, decodable from caller-supplied JSON
/// via [`tixel_core::decode_args`].
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuoteRequest {
    pub base_price: f64,
    pub discount: f64,
    pub quantity: i32,
}

impl PriceQuoteRequest {
    pub fn total(&self) -> BookingResult<f64> {
        quote_total(self.base_price, self.discount, self.quantity)
    }
}

/// Total for `quantity` tickets at `base_price` less `discount`, rounded
/// to two decimal places.
///
/// A zero quantity yields exactly 0.0 once the arguments pass validation.
/// Range checks run in the order price, discount, quantity.
pub fn quote_total(base_price: f64, discount: f64, quantity: i32) -> BookingResult<f64> {
    if !base_price.is_finite() {
        return Err(BookingError::TypeMismatch(format!(
            "base_price must be a number, got {base_price}"
        )));
    }
    if !discount.is_finite() {
        return Err(BookingError::TypeMismatch(format!(
            "discount must be a number, got {discount}"
        )));
    }
    if base_price < 0.0 {
        return Err(BookingError::DomainViolation(format!(
            "base_price cannot be negative: {base_price}"
        )));
    }
    if !(0.0..=1.0).contains(&discount) {
        return Err(BookingError::DomainViolation(format!(
            "discount must be within 0..=1: {discount}"
        )));
    }
    if quantity < 0 {
        return Err(BookingError::DomainViolation(format!(
            "quantity cannot be negative: {quantity}"
        )));
    }

    if quantity == 0 {
        return Ok(0.0);
    }

    let total = base_price * (1.0 - discount) * f64::from(quantity);
    Ok((total * 100.0).round() / 100.0)
}
