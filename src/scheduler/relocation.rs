//! Alternative-slot search for displaced events.
//!
//! A linear scan over the discrete day grid: for each event left unscheduled
//! by admission, take the first slot whose interval is conflict-free against
//! every currently scheduled event. The Welsh-Powell hints are not consulted
//! for placement; a successful relocation overwrites the hint with the slot
//! index actually chosen.

use tracing::{info, warn};

use crate::api::RelocatedEvent;
use crate::config::PlannerConfig;
use crate::models::{interval_for_slot, Event, EventId};

/// Relocate every unscheduled event to the first conflict-free slot.
///
/// Events are processed in store (insertion) order. Returns the relocations
/// performed and the ids of events for which no slot in the day fits; the
/// latter stay unscheduled at their requested interval.
pub fn relocate_unscheduled(
    events: &mut [Event],
    config: &PlannerConfig,
) -> (Vec<RelocatedEvent>, Vec<EventId>) {
    let mut relocated = Vec::new();
    let mut unplaced = Vec::new();

    for i in 0..events.len() {
        if events[i].scheduled {
            continue;
        }

        let id = events[i].id;
        let duration = events[i].duration_minutes;

        let placement = if duration > config.day_minutes {
            None
        } else {
            let last_slot = (config.day_minutes - duration) / config.slot_minutes;
            (0..=last_slot).find_map(|slot| {
                let candidate = interval_for_slot(slot, duration, config.slot_minutes)?;
                let free = events.iter().all(|other| {
                    !other.scheduled || other.id == id || !other.interval.overlaps(&candidate)
                });
                free.then_some((slot, candidate))
            })
        };

        match placement {
            Some((slot, interval)) => {
                events[i].relocate(interval, slot);
                info!(event = %id, name = %events[i].name, slot, %interval, "relocated event to alternative slot");
                relocated.push(RelocatedEvent {
                    id,
                    name: events[i].name.clone(),
                    slot,
                    interval,
                });
            }
            None => {
                warn!(event = %id, name = %events[i].name, "no alternative slot available");
                unplaced.push(id);
            }
        }
    }

    (relocated, unplaced)
}
