use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured key-value payload attached to a booking notification.
///
/// The shape of the entries is up to the caller; the only contract this
/// system enforces is non-emptiness, checked by the notification path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDetails {
    fields: Map<String, Value>,
}

impl BookingDetails {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Builder-style insert for call sites that assemble a record inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl From<Map<String, Value>> for BookingDetails {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record() {
        assert!(BookingDetails::new().is_empty());
        assert_eq!(BookingDetails::default().len(), 0);
    }

    #[test]
    fn test_builder_inserts() {
        let details = BookingDetails::new()
            .with("event_name", "Rockstar Concert")
            .with("tickets", 2)
            .with("total_price", 200.0);

        assert!(!details.is_empty());
        assert_eq!(details.len(), 3);
        assert_eq!(details.get("tickets"), Some(&json!(2)));
    }

    #[test]
    fn test_decodes_from_json_object() {
        let details: BookingDetails =
            crate::decode_args(json!({ "event_name": "Rockstar Concert", "tickets": 2 })).unwrap();
        assert_eq!(details.len(), 2);

        let err = crate::decode_args::<BookingDetails>(json!([1, 2])).unwrap_err();
        assert!(matches!(err, crate::BookingError::TypeMismatch(_)));
    }
}
