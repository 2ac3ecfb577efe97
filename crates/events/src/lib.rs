//! Event primitives: the event trait, log envelopes and the dual-view event log.

pub mod envelope;
pub mod event;
pub mod log;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use log::{EntryState, EventLog};
