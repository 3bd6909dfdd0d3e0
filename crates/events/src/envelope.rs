use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Event;

/// Envelope for an event, carrying delivery metadata.
///
/// - `event_id` is unique per emitted notification (UUIDv7, time-ordered).
/// - `sequence_number` increases monotonically per publisher, so a
///   subscriber can tell whether it missed anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    sequence_number: u64,
    occurred_at: DateTime<Utc>,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` with a fresh event id.
    pub fn wrap(sequence_number: u64, payload: E) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            sequence_number,
            occurred_at: payload.occurred_at(),
            payload,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
