use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Remaining capacity per event, keyed by stringified event id.
///
/// Stands in for a future database table: the external layer provisions
/// and mutates it, this crate only reads it. Unknown events read as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatTable {
    seats: HashMap<String, i32>,
}

impl SeatTable {
    pub fn new() -> Self {
        Self {
            seats: HashMap::new(),
        }
    }

    pub fn set_capacity(&mut self, event_id: i64, seats: i32) {
        self.seats.insert(event_id.to_string(), seats);
    }

    /// Recorded capacity for an event; 0 when the event is unknown.
    pub fn capacity(&self, event_id: i64) -> i32 {
        self.seats.get(&event_id.to_string()).copied().unwrap_or(0)
    }

    /// True when the request is positive and within the recorded capacity.
    ///
    /// Non-positive requests and unknown events are not errors, just `false`.
    pub fn check_availability(&self, event_id: i64, seats_requested: i32) -> bool {
        if seats_requested <= 0 {
            return false;
        }
        self.capacity(event_id) >= seats_requested
    }
}

impl FromIterator<(i64, i32)> for SeatTable {
    fn from_iter<I: IntoIterator<Item = (i64, i32)>>(iter: I) -> Self {
        let mut table = SeatTable::new();
        for (event_id, seats) in iter {
            table.set_capacity(event_id, seats);
        }
        table
    }
}

/// Arguments for an availability check, decodable from caller-supplied JSON
/// via [`tixel_core::decode_args`].
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub event_id: i64,
    pub seats_requested: i32,
}

impl AvailabilityQuery {
    pub fn run(&self, table: &SeatTable) -> bool {
        table.check_availability(self.event_id, self.seats_requested)
    }
}
