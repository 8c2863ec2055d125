//! Event records and identifier newtypes.

use serde::{Deserialize, Serialize};

use super::time::TimeInterval;

/// Event identifier.
///
/// Assigned monotonically by the store at creation and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    pub fn new(value: u32) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single calendar event.
///
/// The interval is derived from the requested start time and duration at
/// creation and rewritten whenever the relocation pass moves the event.
/// `slot_hint` carries the Welsh-Powell color or, after relocation, the slot
/// index the event was moved to; it is `None` until a pipeline pass with a
/// scheduling shortfall assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub interval: TimeInterval,
    pub duration_minutes: u32,
    /// Higher number = more important.
    pub priority: i32,
    pub scheduled: bool,
    pub slot_hint: Option<u32>,
}

impl Event {
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        interval: TimeInterval,
        priority: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration_minutes: interval.duration_minutes(),
            interval,
            priority,
            scheduled: false,
            slot_hint: None,
        }
    }

    /// Move the event to a new interval found by the alternative-slot search.
    pub fn relocate(&mut self, interval: TimeInterval, slot: u32) {
        self.interval = interval;
        self.scheduled = true;
        self.slot_hint = Some(slot);
    }
}
