//! Serializable views returned to callers.
//!
//! These types are the planner's external surface: the schedule listing, the
//! conflict graph view, and the report produced by every reschedule pass.
//! All of them derive Serialize/Deserialize for JSON export.

use serde::{Deserialize, Serialize};

pub use crate::models::{EventId, TimeInterval};

/// One row of the schedule view, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EventId,
    pub name: String,
    pub interval: TimeInterval,
    pub duration_minutes: u32,
    pub priority: i32,
    pub scheduled: bool,
    /// Welsh-Powell color or, after relocation, the slot index. Advisory.
    pub slot_hint: Option<u32>,
}

/// Conflict adjacency for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub id: EventId,
    pub name: String,
    /// Number of other events this event overlaps.
    pub degree: usize,
    pub conflicts_with: Vec<EventId>,
}

/// The full conflict graph, one entry per event in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictGraphView {
    pub entries: Vec<ConflictEntry>,
}

/// An event moved to a new slot by the alternative-slot search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocatedEvent {
    pub id: EventId,
    pub name: String,
    pub slot: u32,
    pub interval: TimeInterval,
}

/// Outcome of one full reschedule pass.
///
/// A non-empty `unplaced` list is a scheduling shortfall: a reported outcome,
/// never an error. The store is left consistent either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleReport {
    pub total_events: usize,
    /// Ids admitted at their requested time, in admission order.
    pub admitted: Vec<EventId>,
    /// Events moved to an alternative slot, in store order.
    pub relocated: Vec<RelocatedEvent>,
    /// Events left unscheduled after the full pipeline, in store order.
    pub unplaced: Vec<EventId>,
    /// Palette size of the Welsh-Powell pass; 0 when admission left no
    /// shortfall and the coloring step was skipped.
    pub colors_used: usize,
}

impl RescheduleReport {
    pub fn scheduled_count(&self) -> usize {
        self.admitted.len() + self.relocated.len()
    }

    pub fn has_shortfall(&self) -> bool {
        !self.unplaced.is_empty()
    }
}
