use serde::{Deserialize, Serialize};

use confereai_core::EventId;

/// Envelope for an event, carrying its identity and log position.
///
/// Notes:
/// - **Append-only**: `sequence_number` is 1-based and strictly increasing within a log.
/// - `payload` is the domain event itself; the envelope never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope<E> {
    event_id: EventId,

    /// Position in the chronological log (first entry is 1).
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: EventId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
