//! Conflict detection and rescheduling pipeline.
//!
//! Any mutation of the event set runs the full pipeline:
//!
//! 1. [`conflicts`]: rebuild the conflict graph from current intervals
//! 2. [`admission`]: priority-greedy admission at requested times
//! 3. [`coloring`]: Welsh-Powell analysis, only on admission shortfall
//! 4. [`relocation`]: alternative-slot search for displaced events
//!
//! The pipeline always terminates and always leaves every event with a
//! definite `scheduled` flag and a well-formed interval.

pub mod admission;
pub mod coloring;
pub mod conflicts;
pub mod relocation;

pub use conflicts::ConflictGraph;

use tracing::warn;

use crate::api::RescheduleReport;
use crate::config::PlannerConfig;
use crate::store::EventStore;

/// Run the full reschedule pipeline over the store.
///
/// Idempotent: a second run with no intervening mutation reproduces the same
/// partition and the same intervals.
pub fn reschedule(store: &mut EventStore, config: &PlannerConfig) -> RescheduleReport {
    let graph = ConflictGraph::build(store.events());
    let outcome = admission::admit(store.events_mut());

    let total_events = store.len();
    let mut report = RescheduleReport {
        total_events,
        admitted: outcome.admitted,
        relocated: Vec::new(),
        unplaced: Vec::new(),
        colors_used: 0,
    };

    if !outcome.displaced.is_empty() {
        warn!(
            displaced = outcome.displaced.len(),
            "admission left events unscheduled, searching alternative slots"
        );

        // The coloring output is advisory: it records slot hints for
        // reporting, while placement below scans slots independently.
        report.colors_used = coloring::colorize(store.events_mut(), &graph);

        let (relocated, unplaced) = relocation::relocate_unscheduled(store.events_mut(), config);
        report.relocated = relocated;
        report.unplaced = unplaced;
    }

    if report.has_shortfall() {
        warn!(
            unplaced = report.unplaced.len(),
            total = total_events,
            "scheduling shortfall: some events have no conflict-free slot"
        );
    }

    report
}
