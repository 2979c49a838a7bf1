pub mod details;
pub mod mail;

pub use details::BookingDetails;
pub use mail::{EmailMessage, MailAdapter};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// An argument had the wrong kind, e.g. text where an integer was required.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// An argument had the right kind but a value outside its valid range.
    #[error("invalid value: {0}")]
    DomainViolation(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Decode caller-supplied JSON arguments into a typed request.
///
/// Any shape failure (wrong kind, missing field) surfaces as
/// [`BookingError::TypeMismatch`]; range checks stay with the operations.
pub fn decode_args<T: serde::de::DeserializeOwned>(args: serde_json::Value) -> BookingResult<T> {
    serde_json::from_value(args).map_err(|err| BookingError::TypeMismatch(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Args {
        id: i64,
    }

    #[test]
    fn test_decode_args_accepts_matching_kinds() {
        let args: Args = decode_args(json!({ "id": 42 })).unwrap();
        assert_eq!(args.id, 42);
    }

    #[test]
    fn test_decode_args_rejects_wrong_kinds() {
        let err = decode_args::<Args>(json!({ "id": "42" })).unwrap_err();
        assert!(matches!(err, BookingError::TypeMismatch(_)));

        let err = decode_args::<Args>(json!({ "id": 4.5 })).unwrap_err();
        assert!(matches!(err, BookingError::TypeMismatch(_)));
    }

    #[test]
    fn test_decode_args_rejects_missing_fields() {
        let err = decode_args::<Args>(json!({})).unwrap_err();
        assert!(matches!(err, BookingError::TypeMismatch(_)));
    }
}
