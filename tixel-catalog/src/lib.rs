pub mod pricing;
pub mod seats;

pub use pricing::{quote_total, PriceQuoteRequest};
pub use seats::{AvailabilityQuery, SeatTable};
