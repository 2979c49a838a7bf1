use rand::Rng;
use serde::Deserialize;

use tixel_core::{BookingError, BookingResult};

/// Prefix carried by every issued booking reference.
pub const REFERENCE_PREFIX: &str = "BOOK";

const SUFFIX_LEN: usize = 8;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Issue a `BOOK-<user>-<event>-<suffix>` reference using the
/// thread-local generator.
pub fn issue(user_id: i64, event_id: i64) -> BookingResult<String> {
    issue_with(&mut rand::thread_rng(), user_id, event_id)
}

/// Issue a reference from a caller-supplied random source.
///
/// References are never stored or checked for global uniqueness; the
/// 8-character uppercase alphanumeric suffix keeps collision odds
/// acceptable for this system.
pub fn issue_with<R: Rng>(rng: &mut R, user_id: i64, event_id: i64) -> BookingResult<String> {
    if user_id <= 0 || event_id <= 0 {
        return Err(BookingError::DomainViolation(format!(
            "user_id and event_id must be positive: {user_id}, {event_id}"
        )));
    }

    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();

    Ok(format!("{REFERENCE_PREFIX}-{user_id}-{event_id}-{suffix}"))
}

/// Arguments for reference issuance, decodable from caller-supplied JSON
/// via [`tixel_core::decode_args`].
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRequest {
    pub user_id: i64,
    pub event_id: i64,
}

impl ReferenceRequest {
    pub fn issue(&self) -> BookingResult<String> {
        issue(self.user_id, self.event_id)
    }
}
