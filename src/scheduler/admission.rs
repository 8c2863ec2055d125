//! Priority-greedy admission at requested times.
//!
//! Standard greedy activity selection by priority: not provably optimal for
//! total priority-weighted coverage, but it is the system's policy.

use crate::models::{Event, EventId, TimeInterval};

/// Partition produced by one admission pass.
#[derive(Debug, Clone)]
pub struct AdmissionOutcome {
    /// Ids admitted at their requested time, in admission order.
    pub admitted: Vec<EventId>,
    /// Ids displaced by a higher-ranked conflicting event, in admission order.
    pub displaced: Vec<EventId>,
}

/// Admit events greedily at their requested intervals.
///
/// Events are visited by priority descending, then start time ascending,
/// then insertion order (the sort is stable, so ties are deterministic).
/// An event is admitted iff its interval overlaps no already-admitted event.
/// Every event leaves this pass with a definite `scheduled` flag; the slice
/// itself is never reordered.
pub fn admit(events: &mut [Event]) -> AdmissionOutcome {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| {
        events[b]
            .priority
            .cmp(&events[a].priority)
            .then(events[a].interval.start_minute().cmp(&events[b].interval.start_minute()))
    });

    for event in events.iter_mut() {
        event.scheduled = false;
    }

    let mut admitted_intervals: Vec<TimeInterval> = Vec::new();
    let mut outcome = AdmissionOutcome {
        admitted: Vec::new(),
        displaced: Vec::new(),
    };

    for &i in &order {
        let interval = events[i].interval;
        let conflicts = admitted_intervals.iter().any(|iv| iv.overlaps(&interval));
        if conflicts {
            outcome.displaced.push(events[i].id);
        } else {
            events[i].scheduled = true;
            admitted_intervals.push(interval);
            outcome.admitted.push(events[i].id);
        }
    }

    outcome
}
