//! Dual-view event log.
//!
//! One authoritative, append-only sequence of envelopes plus a stack of the
//! positions that have not been consulted yet:
//!
//! - the **chronological view** iterates every entry oldest-first and never shrinks;
//! - the **consultation view** pops the most recent unconsulted entry (LIFO) and only
//!   ever regrows through new appends.
//!
//! Popping from the consultation view does not remove anything from the log.

use chrono::{DateTime, Utc};

use confereai_core::EventId;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// Lifecycle of a single log entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryState {
    /// Appended, still reachable from the consultation view.
    Recorded,
    /// Popped from the consultation view; still present chronologically.
    Consulted,
}

#[derive(Debug, Clone)]
pub struct EventLog<E> {
    entries: Vec<EventEnvelope<E>>,
    /// Indices into `entries`, ascending; the top of the stack is the last element.
    unconsulted: Vec<usize>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            unconsulted: Vec::new(),
        }
    }
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event at the tail of the log and on top of the consultation stack.
    pub fn append(&mut self, payload: E) -> &EventEnvelope<E> {
        self.append_with_id(EventId::new(), payload)
    }

    pub fn append_with_id(&mut self, event_id: EventId, payload: E) -> &EventEnvelope<E> {
        let index = self.entries.len();
        let sequence = index as u64 + 1;
        self.entries.push(EventEnvelope::new(event_id, sequence, payload));
        self.unconsulted.push(index);
        &self.entries[index]
    }

    /// Pop the most recently appended entry that has not been consulted yet.
    pub fn consult_latest(&mut self) -> Option<&EventEnvelope<E>> {
        let index = self.unconsulted.pop()?;
        self.entries.get(index)
    }

    /// Peek at what `consult_latest` would return, without consuming it.
    pub fn peek_latest(&self) -> Option<&EventEnvelope<E>> {
        self.unconsulted.last().and_then(|&i| self.entries.get(i))
    }

    /// Entries in append order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &EventEnvelope<E>> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Look up an entry by its 1-based sequence number.
    pub fn get(&self, sequence: u64) -> Option<&EventEnvelope<E>> {
        let index = usize::try_from(sequence.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    pub fn state_of(&self, sequence: u64) -> Option<EntryState> {
        self.get(sequence)?;
        let index = (sequence - 1) as usize;
        if self.unconsulted.binary_search(&index).is_ok() {
            Some(EntryState::Recorded)
        } else {
            Some(EntryState::Consulted)
        }
    }

    /// Business time of the newest entry, if any.
    pub fn latest_occurred_at(&self) -> Option<DateTime<Utc>> {
        self.entries.last().map(|e| e.payload().occurred_at())
    }

    /// Number of entries in the chronological view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Depth of the consultation view.
    pub fn pending(&self) -> usize {
        self.unconsulted.len()
    }
}
