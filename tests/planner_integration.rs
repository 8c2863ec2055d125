//! End-to-end tests for the planner facade.
//!
//! These exercise the full add/remove -> rebuild -> admit -> recolor ->
//! relocate pipeline through the public `DayPlanner` interface.

use des_rust::config::PlannerConfig;
use des_rust::error::PlannerError;
use des_rust::models::EventId;
use des_rust::services::planner::DayPlanner;

fn planner() -> DayPlanner {
    DayPlanner::new(PlannerConfig::default())
}

#[test]
fn displaced_event_is_relocated_to_a_free_slot() {
    let mut planner = planner();

    let (a, report) = planner.add_event("A", 9, 0, 60, 3).unwrap();
    assert!(!report.has_shortfall());

    let (b, report) = planner.add_event("B", 9, 30, 60, 5).unwrap();
    assert!(!report.has_shortfall());
    assert_eq!(report.relocated.len(), 1);
    assert_eq!(report.relocated[0].id, a);

    let a_event = planner.get(a).unwrap();
    let b_event = planner.get(b).unwrap();

    // B keeps its requested time; A was moved to a slot-aligned interval
    // that no longer overlaps B.
    assert!(a_event.scheduled && b_event.scheduled);
    assert_eq!(b_event.interval.start_minute(), 570);
    assert!(!a_event.interval.overlaps(&b_event.interval));
    assert_eq!(a_event.interval.start_minute() % 30, 0);
    assert_eq!(a_event.duration_minutes, 60);
}

#[test]
fn remove_nonexistent_id_is_a_no_op() {
    let mut planner = planner();
    planner.add_event("A", 9, 0, 60, 3).unwrap();

    let before = planner.schedule();
    let result = planner.remove_event(EventId::new(999));
    assert!(matches!(result, Err(PlannerError::NotFound { .. })));

    let after = planner.schedule();
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].interval, after[0].interval);
    assert_eq!(before[0].scheduled, after[0].scheduled);
}

#[test]
fn capacity_exceeded_leaves_store_unchanged() {
    let config = PlannerConfig {
        max_events: 3,
        ..PlannerConfig::default()
    };
    let mut planner = DayPlanner::new(config);

    for i in 0..3u32 {
        planner.add_event(&format!("e{i}"), i, 0, 30, 1).unwrap();
    }

    let result = planner.add_event("overflow", 10, 0, 30, 1);
    assert!(matches!(
        result,
        Err(PlannerError::CapacityExceeded { capacity: 3 })
    ));
    assert_eq!(planner.len(), 3);
}

#[test]
fn removing_the_blocker_restores_requested_times_on_reschedule() {
    let mut planner = planner();

    let (a, _) = planner.add_event("A", 9, 0, 60, 3).unwrap();
    let (b, _) = planner.add_event("B", 9, 30, 60, 5).unwrap();

    // A was relocated away from 09:00. Removing B frees the morning, but the
    // pipeline never moves an already-scheduled event back: A keeps its new
    // interval and simply stays scheduled.
    let report = planner.remove_event(b).unwrap();
    assert!(!report.has_shortfall());
    let a_event = planner.get(a).unwrap();
    assert!(a_event.scheduled);
}

#[test]
fn reschedule_twice_is_idempotent() {
    let mut planner = planner();
    planner.add_event("A", 9, 0, 60, 3).unwrap();
    planner.add_event("B", 9, 30, 60, 5).unwrap();
    planner.add_event("C", 9, 0, 120, 4).unwrap();
    planner.add_event("D", 18, 0, 30, 2).unwrap();

    let first = planner.reschedule();
    let schedule_first = planner.schedule();
    let second = planner.reschedule();
    let schedule_second = planner.schedule();

    assert_eq!(first.admitted.len() + first.relocated.len(), second.admitted.len());
    assert!(second.relocated.is_empty());
    for (a, b) in schedule_first.iter().zip(schedule_second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.interval, b.interval);
        assert_eq!(a.scheduled, b.scheduled);
    }
}

#[test]
fn conflict_graph_is_symmetric_with_consistent_degrees() {
    let mut planner = planner();
    planner.add_event("A", 9, 0, 180, 1).unwrap();
    planner.add_event("B", 9, 30, 60, 1).unwrap();
    planner.add_event("C", 11, 0, 120, 1).unwrap();
    planner.add_event("D", 20, 0, 30, 1).unwrap();

    let view = planner.conflict_graph();
    for entry in &view.entries {
        assert_eq!(entry.degree, entry.conflicts_with.len());
        for other_id in &entry.conflicts_with {
            let other = view
                .entries
                .iter()
                .find(|e| e.id == *other_id)
                .expect("neighbor id must exist in the view");
            assert!(
                other.conflicts_with.contains(&entry.id),
                "edge {} -> {} must be symmetric",
                entry.id,
                other_id
            );
        }
    }
}

#[test]
fn back_to_back_events_never_conflict() {
    let mut planner = planner();
    planner.add_event("A", 9, 0, 60, 3).unwrap();
    let (_, report) = planner.add_event("B", 10, 0, 60, 5).unwrap();

    assert!(report.relocated.is_empty());
    let view = planner.conflict_graph();
    assert!(view.entries.iter().all(|e| e.degree == 0));
}

#[test]
fn sample_day_matches_reference_walkthrough() {
    // The five sample events from the reference front end are pairwise
    // conflict-free (Math ends exactly when Physics starts), so admission
    // schedules everything at its requested time.
    let mut planner = planner();
    planner.add_event("Math Class", 9, 0, 60, 3).unwrap();
    planner.add_event("Physics Lab", 10, 0, 90, 4).unwrap();
    planner.add_event("Lunch Break", 12, 0, 30, 2).unwrap();
    planner.add_event("Study Group", 14, 0, 120, 3).unwrap();
    let (_, report) = planner.add_event("Team Meeting", 16, 0, 45, 5).unwrap();

    assert!(!report.has_shortfall());
    assert!(planner.events().iter().all(|e| e.scheduled));
}

#[test]
fn unplaceable_event_is_reported_not_fatal() {
    let mut planner = planner();
    planner.add_event("all day", 0, 0, 1440, 9).unwrap();
    let (b, report) = planner.add_event("squeezed", 12, 0, 60, 1).unwrap();

    assert!(report.has_shortfall());
    assert_eq!(report.unplaced, vec![b]);

    // Store stays consistent: the event keeps a well-formed interval and a
    // definite scheduled flag.
    let squeezed = planner.get(b).unwrap();
    assert!(!squeezed.scheduled);
    assert_eq!(squeezed.interval.start_minute(), 720);
}

#[test]
fn schedule_exports_as_json() {
    let mut planner = planner();
    planner.add_event("A", 9, 0, 60, 3).unwrap();

    let json = serde_json::to_string(&planner.schedule()).unwrap();
    assert!(json.contains("\"name\":\"A\""));
    assert!(json.contains("\"scheduled\":true"));
}
